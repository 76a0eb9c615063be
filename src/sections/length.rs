//! Length section - checks password length thresholds.

use super::{Findings, SectionResult};
use crate::types::Recommendation;

/// Length that earns the first point.
pub const MIN_LENGTH: usize = 8;
/// Length below which a recommendation is emitted.
pub const RECOMMENDED_LENGTH: usize = 12;
/// Length that earns the last length point.
pub const LONG_LENGTH: usize = 16;

/// One point per threshold reached, so at most 3.
pub fn length_points(length: usize) -> u8 {
    [MIN_LENGTH, RECOMMENDED_LENGTH, LONG_LENGTH]
        .iter()
        .filter(|&&threshold| length >= threshold)
        .count() as u8
}

/// Checks if the password meets the recommended length.
///
/// # Returns
/// - `Some(Recommendation::Length)` if password is shorter than 12 characters
/// - `None` if password has sufficient length
pub fn length_section(findings: &Findings) -> SectionResult {
    (findings.length < RECOMMENDED_LENGTH).then_some(Recommendation::Length)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::denylist::Denylist;

    fn section(password: &str) -> SectionResult {
        length_section(&Findings::collect(password, &Denylist::default()))
    }

    #[test]
    fn test_length_section_too_short() {
        assert_eq!(section("Short1!"), Some(Recommendation::Length));
    }

    #[test]
    fn test_length_section_exactly_recommended() {
        assert_eq!(section("123456789012"), None);
    }

    #[test]
    fn test_length_section_counts_chars_not_bytes() {
        // 6 chars, 12 bytes
        assert_eq!(section("éééééé"), Some(Recommendation::Length));
    }

    #[test]
    fn test_length_points_thresholds() {
        assert_eq!(length_points(0), 0);
        assert_eq!(length_points(7), 0);
        assert_eq!(length_points(8), 1);
        assert_eq!(length_points(11), 1);
        assert_eq!(length_points(12), 2);
        assert_eq!(length_points(15), 2);
        assert_eq!(length_points(16), 3);
        assert_eq!(length_points(128), 3);
    }

    #[test]
    fn test_length_points_monotonic() {
        for len in 0..64 {
            assert!(length_points(len) <= length_points(len + 1));
        }
    }
}
