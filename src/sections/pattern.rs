//! Pattern analysis section - detects repetitive, sequential and keyboard patterns.

use super::{Findings, SectionResult};
use crate::types::Recommendation;

const KEYBOARD_PATTERNS: &[&str] = &["qwerty", "asdf", "zxcv", "123456", "abcdef"];

/// Returns `true` if the password contains:
/// - the same character three times in a row (`aaa`)
/// - three consecutive code points, ascending or descending (`abc`, `321`)
/// - a common keyboard or alphabet walk, in any case
pub fn has_patterns(password: &str) -> bool {
    let chars: Vec<char> = password.chars().collect();

    let repeated = chars.windows(3).any(|w| w[0] == w[1] && w[1] == w[2]);
    if repeated {
        return true;
    }

    let sequential = chars.windows(3).any(|w| {
        let (a, b, c) = (w[0] as i64, w[1] as i64, w[2] as i64);
        (b - a == 1 && c - b == 1) || (a - b == 1 && b - c == 1)
    });
    if sequential {
        return true;
    }

    let lowered = password.to_lowercase();
    KEYBOARD_PATTERNS.iter().any(|p| lowered.contains(p))
}

/// Analyzes password for repetitive and sequential patterns.
///
/// # Returns
/// - `Some(Recommendation::AvoidPatterns)` if problematic patterns found
/// - `None` if no problematic patterns
pub fn pattern_section(findings: &Findings) -> SectionResult {
    findings.has_patterns.then_some(Recommendation::AvoidPatterns)
}
