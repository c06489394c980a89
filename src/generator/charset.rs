//! Character classes and their symbol pools

use serde::{Deserialize, Serialize};

/// ASCII upper and lower case letters (52 symbols)
pub const LETTERS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// ASCII decimal digits (10 symbols)
pub const DIGITS: &str = "0123456789";

/// ASCII punctuation (32 symbols), spelled out so the pool never depends on locale
pub const SPECIALS: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// One of the three disjoint symbol pools
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CharacterClass {
    Letters,
    Digits,
    Specials,
}

impl CharacterClass {
    /// All classes in composition order
    pub const ALL: [CharacterClass; 3] = [
        CharacterClass::Letters,
        CharacterClass::Digits,
        CharacterClass::Specials,
    ];

    /// The ordered symbols this class draws from
    pub fn pool(self) -> &'static [u8] {
        match self {
            CharacterClass::Letters => LETTERS.as_bytes(),
            CharacterClass::Digits => DIGITS.as_bytes(),
            CharacterClass::Specials => SPECIALS.as_bytes(),
        }
    }

    /// Whether `c` belongs to this class
    pub fn contains(self, c: char) -> bool {
        c.is_ascii() && self.pool().contains(&(c as u8))
    }

    /// Find the class of a character, if it belongs to any
    pub fn classify(c: char) -> Option<CharacterClass> {
        Self::ALL.into_iter().find(|class| class.contains(c))
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CharacterClass::Letters => "letters",
            CharacterClass::Digits => "digits",
            CharacterClass::Specials => "specials",
        }
    }
}
