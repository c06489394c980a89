//! Composition engine
//!
//! Draws each requested class independently and with replacement from its
//! pool, then applies a uniform Fisher-Yates shuffle to the concatenation.
//! Both steps take their randomness from a `CryptoRng`; `compose` uses the
//! thread-local CSPRNG.

use std::fmt;

use rand::seq::SliceRandom;
use rand::{CryptoRng, Rng};
use zeroize::Zeroize;

use super::charset::CharacterClass;
use super::policy::CompositionRequest;
use crate::error::{GeneratorError, Result};
use crate::utils::mask_string;
use crate::MAX_LENGTH;

/// A generated password
///
/// The buffer is wiped on drop and `Debug` never prints the characters.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Number of characters
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of characters belonging to `class`
    pub fn count_class(&self, class: CharacterClass) -> usize {
        self.0.chars().filter(|&c| class.contains(c)).count()
    }

    /// Hand the characters over to the caller
    pub fn into_string(mut self) -> String {
        std::mem::take(&mut self.0)
    }
}

impl From<String> for Password {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Password").field(&mask_string(&self.0)).finish()
    }
}

impl Drop for Password {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

/// Compose a password for a normalized request using the thread-local CSPRNG
///
/// # Example
/// ```
/// use passforge::{compose, CharacterClass, CompositionRequest};
///
/// let password = compose(&CompositionRequest::new(6, 3, 3)).unwrap();
/// assert_eq!(password.len(), 12);
/// assert_eq!(password.count_class(CharacterClass::Digits), 3);
/// ```
pub fn compose(request: &CompositionRequest) -> Result<Password> {
    compose_with_rng(request, &mut rand::rng())
}

/// Compose a password drawing all randomness from `rng`
pub fn compose_with_rng<R>(request: &CompositionRequest, rng: &mut R) -> Result<Password>
where
    R: CryptoRng,
{
    // The policy layer already rejects these; check again before sampling
    request.ensure_non_negative()?;
    let total = request.total_length();
    if total == 0 {
        return Err(GeneratorError::EmptyComposition);
    }
    if total > MAX_LENGTH as i64 {
        return Err(GeneratorError::CompositionTooLarge {
            total,
            max: MAX_LENGTH,
        });
    }

    let mut chars: Vec<char> = Vec::with_capacity(total as usize);
    for class in CharacterClass::ALL {
        let pool = class.pool();
        for _ in 0..request.count(class) {
            let idx = rng.random_range(0..pool.len());
            chars.push(pool[idx] as char);
        }
    }

    chars.shuffle(rng);

    let password = Password(chars.iter().collect());
    chars.zeroize();

    Ok(password)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn test_compose_length_and_counts() {
        let request = CompositionRequest::new(7, 3, 5);
        let password = compose(&request).unwrap();

        assert_eq!(password.len(), 15);
        assert_eq!(password.count_class(CharacterClass::Letters), 7);
        assert_eq!(password.count_class(CharacterClass::Digits), 3);
        assert_eq!(password.count_class(CharacterClass::Specials), 5);
    }

    #[test]
    fn test_compose_single_class() {
        let password = compose(&CompositionRequest::new(0, 20, 0)).unwrap();
        assert_eq!(password.len(), 20);
        assert!(password.as_str().chars().all(|c| c.is_ascii_digit()));

        let password = compose(&CompositionRequest::new(0, 0, 20)).unwrap();
        assert!(password
            .as_str()
            .chars()
            .all(|c| CharacterClass::Specials.contains(c)));
    }

    #[test]
    fn test_compose_maximum_length() {
        let password = compose(&CompositionRequest::new(40, 30, 30)).unwrap();
        assert_eq!(password.len(), MAX_LENGTH);
    }

    #[test]
    fn test_compose_rejects_invalid_requests() {
        assert!(matches!(
            compose(&CompositionRequest::new(5, -1, 8)),
            Err(GeneratorError::InvalidComposition(_))
        ));
        assert!(matches!(
            compose(&CompositionRequest::new(0, 0, 0)),
            Err(GeneratorError::EmptyComposition)
        ));
        assert!(matches!(
            compose(&CompositionRequest::new(101, 0, 0)),
            Err(GeneratorError::CompositionTooLarge { .. })
        ));
    }

    #[test]
    fn test_compose_uniqueness() {
        let request = CompositionRequest::new(6, 3, 3);
        let passwords: HashSet<String> = (0..200)
            .map(|_| compose(&request).unwrap().into_string())
            .collect();
        // 94-symbol draws over 12 positions: collisions are practically impossible
        assert_eq!(passwords.len(), 200);
    }

    #[test]
    fn test_compose_seeded_is_reproducible() {
        let request = CompositionRequest::new(6, 3, 3);
        let a = compose_with_rng(&request, &mut StdRng::seed_from_u64(7)).unwrap();
        let b = compose_with_rng(&request, &mut StdRng::seed_from_u64(7)).unwrap();
        let c = compose_with_rng(&request, &mut StdRng::seed_from_u64(8)).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_shuffle_has_no_position_bias() {
        // Half letters, half digits; an unshuffled or partially shuffled result
        // would keep letters at the front.
        let request = CompositionRequest::new(6, 6, 0);
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let trials = 4000;
        let mut letters_at = [0usize; 12];

        for _ in 0..trials {
            let password = compose_with_rng(&request, &mut rng).unwrap();
            for (pos, c) in password.as_str().chars().enumerate() {
                if c.is_ascii_alphabetic() {
                    letters_at[pos] += 1;
                }
            }
        }

        // Expected 2000 per position, standard deviation ~32
        for (pos, count) in letters_at.iter().enumerate() {
            assert!(
                (1800..=2200).contains(count),
                "position {} holds a letter {} times out of {}",
                pos,
                count,
                trials
            );
        }
    }

    #[test]
    fn test_draws_cover_whole_pool() {
        let mut rng = StdRng::seed_from_u64(42);
        let request = CompositionRequest::new(0, 0, 100);
        let mut seen = HashSet::new();
        for _ in 0..50 {
            let password = compose_with_rng(&request, &mut rng).unwrap();
            seen.extend(password.as_str().chars());
        }
        assert_eq!(seen.len(), CharacterClass::Specials.pool().len());
    }

    #[test]
    fn test_password_debug_is_masked() {
        let password = Password::from("Secret123!xy".to_string());
        let debug = format!("{:?}", password);
        assert!(!debug.contains("Secret"));
        assert!(debug.contains("************"));
    }
}
