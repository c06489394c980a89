//! Common utility functions

/// Convert a string to asterisks (for masking passwords)
pub fn mask_string(s: &str) -> String {
    "*".repeat(s.chars().count())
}

/// Redacted placeholder for secret material of a known size
pub fn redact_bytes(bytes: &[u8]) -> String {
    format!("<redacted {} bytes>", bytes.len())
}
