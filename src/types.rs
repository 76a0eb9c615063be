//! Value types shared by the generator, the evaluator and the breach checker.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Character classes a generated password can be required to cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(rename_all = "lowercase"))]
pub enum CharClass {
    Lowercase,
    Uppercase,
    Digit,
    Symbol,
}

impl CharClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            CharClass::Lowercase => "lowercase",
            CharClass::Uppercase => "uppercase",
            CharClass::Digit => "digit",
            CharClass::Symbol => "symbol",
        }
    }
}

impl fmt::Display for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Highest value [`StrengthReport::score`] can take.
pub const MAX_SCORE: u8 = 8;

/// Coarse strength label, a pure function of the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(rename_all = "kebab-case"))]
pub enum StrengthLabel {
    VeryWeak,
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

impl StrengthLabel {
    /// Maps a score in `0..=8` to its band. Scores above the range saturate.
    ///
    /// | score | label |
    /// |-------|-------|
    /// | 0-1   | very-weak |
    /// | 2-3   | weak |
    /// | 4     | medium |
    /// | 5-6   | strong |
    /// | 7-8   | very-strong |
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=1 => StrengthLabel::VeryWeak,
            2..=3 => StrengthLabel::Weak,
            4 => StrengthLabel::Medium,
            5..=6 => StrengthLabel::Strong,
            _ => StrengthLabel::VeryStrong,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StrengthLabel::VeryWeak => "very-weak",
            StrengthLabel::Weak => "weak",
            StrengthLabel::Medium => "medium",
            StrengthLabel::Strong => "strong",
            StrengthLabel::VeryStrong => "very-strong",
        }
    }
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A remediation hint, one per failing check.
///
/// Variants are declared in the order the evaluator emits them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(rename_all = "kebab-case"))]
pub enum Recommendation {
    Length,
    Uppercase,
    Lowercase,
    Digits,
    Symbols,
    AvoidCommon,
    AvoidPatterns,
}

impl Recommendation {
    pub fn message(&self) -> &'static str {
        match self {
            Recommendation::Length => "Use at least 12 characters (16+ recommended)",
            Recommendation::Uppercase => "Include uppercase letters (A-Z)",
            Recommendation::Lowercase => "Include lowercase letters (a-z)",
            Recommendation::Digits => "Include numbers (0-9)",
            Recommendation::Symbols => "Include special characters (!@#$%^&*)",
            Recommendation::AvoidCommon => "Avoid common passwords",
            Recommendation::AvoidPatterns => {
                "Avoid repeated characters, sequences and keyboard patterns"
            }
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Result of evaluating a single password.
///
/// Holds only derived facts; the password itself is never stored here.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StrengthReport {
    /// Length in Unicode scalar values.
    pub length: usize,
    pub has_upper: bool,
    pub has_lower: bool,
    pub has_digits: bool,
    pub has_special: bool,
    pub is_common: bool,
    pub has_patterns: bool,
    pub score: u8,
    pub label: StrengthLabel,
    pub recommendations: Vec<Recommendation>,
}

impl StrengthReport {
    /// Recommendations rendered as display strings, in emission order.
    pub fn messages(&self) -> Vec<String> {
        self.recommendations.iter().map(|r| r.to_string()).collect()
    }
}

/// Outcome of a breach lookup.
///
/// `count` is `None` when the lookup could not be completed, which callers
/// must treat as "unknown" and never as "safe".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BreachResult {
    pub count: Option<u64>,
}

impl BreachResult {
    pub fn found(count: u64) -> Self {
        Self { count: Some(count) }
    }

    pub fn indeterminate() -> Self {
        Self { count: None }
    }

    /// `true` only when the password is known to appear in the corpus.
    pub fn is_breached(&self) -> bool {
        matches!(self.count, Some(n) if n > 0)
    }

    pub fn is_indeterminate(&self) -> bool {
        self.count.is_none()
    }
}
