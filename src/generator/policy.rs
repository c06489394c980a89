//! Length policy: validation, top-up and cap of requested compositions

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::charset::CharacterClass;
use crate::error::{GeneratorError, Result};
use crate::{MAX_LENGTH, MIN_LENGTH};

/// Requested number of characters per class
///
/// Counts are signed so that negative input coming from a caller is rejected
/// explicitly instead of being unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CompositionRequest {
    pub letters: i64,
    pub digits: i64,
    pub specials: i64,
}

impl CompositionRequest {
    pub fn new(letters: i64, digits: i64, specials: i64) -> Self {
        Self {
            letters,
            digits,
            specials,
        }
    }

    /// Count requested for one class
    pub fn count(&self, class: CharacterClass) -> i64 {
        match class {
            CharacterClass::Letters => self.letters,
            CharacterClass::Digits => self.digits,
            CharacterClass::Specials => self.specials,
        }
    }

    /// Sum of all counts, saturating on overflow
    pub fn total_length(&self) -> i64 {
        self.letters
            .saturating_add(self.digits)
            .saturating_add(self.specials)
    }

    /// Fail with `InvalidComposition` naming the first negative count
    pub(crate) fn ensure_non_negative(&self) -> Result<()> {
        for class in CharacterClass::ALL {
            let count = self.count(class);
            if count < 0 {
                return Err(GeneratorError::InvalidComposition(format!(
                    "{} count is negative ({})",
                    class.as_str(),
                    count
                )));
            }
        }
        Ok(())
    }
}

/// Normalize a request against the given length bounds.
///
/// - any negative count fails with `InvalidComposition`
/// - a total above `max_length` fails with `CompositionTooLarge`
/// - a zero total fails with `EmptyComposition`
/// - a total below `min_length` is topped up: half of the shortfall to
///   letters, a quarter to digits, the rest to specials
/// - anything else is returned unchanged
///
/// # Example
/// ```
/// use passforge::{normalize, CompositionRequest};
///
/// let normalized = normalize(&CompositionRequest::new(2, 1, 1), 12, 100).unwrap();
/// assert_eq!(normalized, CompositionRequest::new(6, 3, 3));
/// ```
pub fn normalize(
    counts: &CompositionRequest,
    min_length: usize,
    max_length: usize,
) -> Result<CompositionRequest> {
    counts.ensure_non_negative()?;

    if min_length > max_length {
        return Err(GeneratorError::InvalidComposition(format!(
            "minimum length {} exceeds maximum length {}",
            min_length, max_length
        )));
    }

    // Bounds beyond i64::MAX cannot be reached by any total
    let max = i64::try_from(max_length).unwrap_or(i64::MAX);
    let min = i64::try_from(min_length).unwrap_or(i64::MAX);

    let total = counts.total_length();
    if total > max {
        return Err(GeneratorError::CompositionTooLarge {
            total,
            max: max_length,
        });
    }

    if total == 0 {
        return Err(GeneratorError::EmptyComposition);
    }

    if total >= min {
        return Ok(*counts);
    }

    let extra = min - total;
    let to_letters = extra / 2;
    let to_digits = extra / 4;
    let topped_up = CompositionRequest {
        letters: counts.letters + to_letters,
        digits: counts.digits + to_digits,
        specials: counts.specials + (extra - to_letters - to_digits),
    };

    debug!(
        requested = total,
        topped_up = topped_up.total_length(),
        "composition below minimum length, topped up"
    );

    Ok(topped_up)
}

/// Normalize against the crate-wide bounds (`MIN_LENGTH`, `MAX_LENGTH`)
pub fn normalize_default(counts: &CompositionRequest) -> Result<CompositionRequest> {
    normalize(counts, MIN_LENGTH, MAX_LENGTH)
}
