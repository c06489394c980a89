//! Rule-based password strength classification

use std::fmt;

use serde::{Deserialize, Serialize};

use super::charset::CharacterClass;

/// Strength rating, ordered from weakest to strongest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum StrengthLevel {
    VeryWeak,
    Weak,
    Moderate,
    Strong,
    VeryStrong,
    ExtremelyStrong,
}

impl StrengthLevel {
    /// Levels indexed by `min(points, 5)`
    const TABLE: [StrengthLevel; 6] = [
        StrengthLevel::VeryWeak,
        StrengthLevel::Weak,
        StrengthLevel::Moderate,
        StrengthLevel::Strong,
        StrengthLevel::VeryStrong,
        StrengthLevel::ExtremelyStrong,
    ];

    /// Map a rule point total to a level, clamping at the top
    pub fn from_points(points: u8) -> Self {
        Self::TABLE[usize::from(points.min(5))]
    }

    /// Ordinal position (0-5)
    pub fn points(self) -> u8 {
        self as u8
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StrengthLevel::VeryWeak => "Very Weak",
            StrengthLevel::Weak => "Weak",
            StrengthLevel::Moderate => "Moderate",
            StrengthLevel::Strong => "Strong",
            StrengthLevel::VeryStrong => "Very Strong",
            StrengthLevel::ExtremelyStrong => "Extremely Strong",
        }
    }
}

impl fmt::Display for StrengthLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of every scoring rule for one password
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrengthReport {
    pub level: StrengthLevel,
    /// Number of rules satisfied (0-6)
    pub points: u8,
    pub length: usize,
    pub at_least_12: bool,
    pub at_least_16: bool,
    pub at_least_20: bool,
    pub mixed_case: bool,
    pub has_digit: bool,
    pub has_special: bool,
    /// Hints for the rules that failed
    pub suggestions: Vec<String>,
}

/// Evaluate all six rules against the literal characters of `password`
pub fn analyze(password: &str) -> StrengthReport {
    let length = password.chars().count();
    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_special = password
        .chars()
        .any(|c| CharacterClass::Specials.contains(c));

    let at_least_12 = length >= 12;
    let at_least_16 = length >= 16;
    let at_least_20 = length >= 20;
    let mixed_case = has_lower && has_upper;

    let points = [
        at_least_12,
        at_least_16,
        at_least_20,
        mixed_case,
        has_digit,
        has_special,
    ]
    .iter()
    .filter(|&&rule| rule)
    .count() as u8;

    let mut suggestions = Vec::new();
    if !at_least_12 {
        suggestions.push("Use at least 12 characters".to_string());
    } else if !at_least_20 {
        suggestions.push("Consider 20 or more characters".to_string());
    }
    if !mixed_case {
        suggestions.push("Mix upper and lower case letters".to_string());
    }
    if !has_digit {
        suggestions.push("Add digits (0-9)".to_string());
    }
    if !has_special {
        suggestions.push("Add special characters (!@#$%, etc.)".to_string());
    }

    StrengthReport {
        level: StrengthLevel::from_points(points),
        points,
        length,
        at_least_12,
        at_least_16,
        at_least_20,
        mixed_case,
        has_digit,
        has_special,
        suggestions,
    }
}

/// Classify a password
///
/// A pure function of the characters: how the string was produced does not matter.
///
/// # Example
/// ```
/// use passforge::{score, StrengthLevel};
///
/// assert_eq!(score("Ab1!Ab1!Ab1!"), StrengthLevel::VeryStrong);
/// ```
pub fn score(password: &str) -> StrengthLevel {
    analyze(password).level
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels_are_ordered() {
        assert!(StrengthLevel::VeryWeak < StrengthLevel::Weak);
        assert!(StrengthLevel::Weak < StrengthLevel::Moderate);
        assert!(StrengthLevel::Moderate < StrengthLevel::Strong);
        assert!(StrengthLevel::Strong < StrengthLevel::VeryStrong);
        assert!(StrengthLevel::VeryStrong < StrengthLevel::ExtremelyStrong);
    }

    #[test]
    fn test_from_points_clamps() {
        assert_eq!(StrengthLevel::from_points(0), StrengthLevel::VeryWeak);
        assert_eq!(StrengthLevel::from_points(1), StrengthLevel::Weak);
        assert_eq!(StrengthLevel::from_points(2), StrengthLevel::Moderate);
        assert_eq!(StrengthLevel::from_points(3), StrengthLevel::Strong);
        assert_eq!(StrengthLevel::from_points(4), StrengthLevel::VeryStrong);
        assert_eq!(StrengthLevel::from_points(5), StrengthLevel::ExtremelyStrong);
        assert_eq!(StrengthLevel::from_points(6), StrengthLevel::ExtremelyStrong);
        assert_eq!(StrengthLevel::from_points(u8::MAX), StrengthLevel::ExtremelyStrong);
    }

    #[test]
    fn test_points_roundtrip() {
        for points in 0..=5 {
            assert_eq!(StrengthLevel::from_points(points).points(), points);
        }
    }

    #[test]
    fn test_score_examples() {
        assert_eq!(score(""), StrengthLevel::VeryWeak);
        assert_eq!(score("abc"), StrengthLevel::VeryWeak);
        assert_eq!(score("abc1"), StrengthLevel::Weak);
        assert_eq!(score("aB1"), StrengthLevel::Moderate);
        assert_eq!(score("aB1!"), StrengthLevel::Strong);
        assert_eq!(score("Ab1!Ab1!Ab1!"), StrengthLevel::VeryStrong);
        assert_eq!(score("Ab1!Ab1!Ab1!Ab1!"), StrengthLevel::ExtremelyStrong);
        assert_eq!(score("Ab1!Ab1!Ab1!Ab1!Ab1!"), StrengthLevel::ExtremelyStrong);
    }

    #[test]
    fn test_length_rules_alone() {
        assert_eq!(score(&"a".repeat(11)), StrengthLevel::VeryWeak);
        assert_eq!(score(&"a".repeat(12)), StrengthLevel::Weak);
        assert_eq!(score(&"a".repeat(16)), StrengthLevel::Moderate);
        assert_eq!(score(&"a".repeat(20)), StrengthLevel::Strong);
    }

    #[test]
    fn test_same_coverage_same_level() {
        let a = score("Ab1!Ab1!Ab1!");
        let b = score("zY9~qW3#mN0$");
        assert_eq!(a, b);
    }

    #[test]
    fn test_deterministic() {
        let password = "x7#Kp2!mQ9$w";
        assert_eq!(analyze(password), analyze(password));
    }

    #[test]
    fn test_non_ascii_is_not_special() {
        let report = analyze("Ab1ééééééééé");
        assert!(!report.has_special);
        assert!(report.at_least_12);
        assert_eq!(report.points, 3);
    }

    #[test]
    fn test_report_suggestions() {
        let report = analyze("abcdef");
        assert_eq!(report.points, 0);
        assert_eq!(report.suggestions.len(), 4);

        let report = analyze("Ab1!Ab1!Ab1!Ab1!Ab1!");
        assert_eq!(report.points, 6);
        assert!(report.suggestions.is_empty());
    }

    #[test]
    fn test_display() {
        assert_eq!(StrengthLevel::ExtremelyStrong.to_string(), "Extremely Strong");
        assert_eq!(StrengthLevel::Moderate.to_string(), "Moderate");
    }
}
