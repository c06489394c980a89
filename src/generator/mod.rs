//! Password composition and scoring
//!
//! - `charset`: the three character classes and their pools
//! - `policy`: length normalization of a requested composition
//! - `engine`: CSPRNG sampling and shuffling
//! - `strength`: rule-based strength classification

pub mod charset;
pub mod engine;
pub mod policy;
pub mod strength;

pub use charset::CharacterClass;
pub use engine::{compose, compose_with_rng, Password};
pub use policy::{normalize, normalize_default, CompositionRequest};
pub use strength::{analyze, score, StrengthLevel, StrengthReport};
