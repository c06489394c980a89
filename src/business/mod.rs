//! Business logic layer for Passforge
//!
//! This module provides the high-level session API used by front ends.

pub mod session;

pub use session::{GeneratedPassword, GeneratorSession};
