//! Utility functions

mod common;

pub use common::{mask_string, redact_bytes};
