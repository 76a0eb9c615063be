//! Character variety section - checks for uppercase, lowercase, numbers, special chars.

use super::{Findings, SectionResult};
use crate::types::Recommendation;

/// Which character classes occur in a password.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Composition {
    pub has_upper: bool,
    pub has_lower: bool,
    pub has_digits: bool,
    pub has_special: bool,
}

impl Composition {
    /// Any character that is neither a letter nor a digit counts as special.
    pub fn of(password: &str) -> Self {
        password.chars().fold(Self::default(), |mut acc, c| {
            acc.has_upper |= c.is_uppercase();
            acc.has_lower |= c.is_lowercase();
            acc.has_digits |= c.is_ascii_digit();
            acc.has_special |= !c.is_alphanumeric();
            acc
        })
    }

    /// Number of classes present, 0 to 4.
    pub fn classes(&self) -> u8 {
        [self.has_upper, self.has_lower, self.has_digits, self.has_special]
            .iter()
            .filter(|&&b| b)
            .count() as u8
    }
}

pub fn uppercase_section(findings: &Findings) -> SectionResult {
    (!findings.composition.has_upper).then_some(Recommendation::Uppercase)
}

pub fn lowercase_section(findings: &Findings) -> SectionResult {
    (!findings.composition.has_lower).then_some(Recommendation::Lowercase)
}

pub fn digits_section(findings: &Findings) -> SectionResult {
    (!findings.composition.has_digits).then_some(Recommendation::Digits)
}

pub fn symbols_section(findings: &Findings) -> SectionResult {
    (!findings.composition.has_special).then_some(Recommendation::Symbols)
}
