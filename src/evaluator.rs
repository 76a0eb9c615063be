//! Password strength evaluator - main evaluation logic.

use secrecy::{ExposeSecret, SecretString};

use crate::denylist::{default_denylist, Denylist};
use crate::sections::{
    common_section, digits_section, length_points, length_section, lowercase_section,
    pattern_section, symbols_section, uppercase_section, Findings, SectionResult,
};
use crate::types::{StrengthLabel, StrengthReport, MAX_SCORE};

/// Points removed when the password is on the denylist.
const COMMON_PENALTY: u8 = 2;

/// Evaluates password strength against the embedded denylist.
///
/// # Arguments
/// * `password` - The password to evaluate
///
/// # Returns
/// A `StrengthReport` with composition flags, score, label and recommendations.
pub fn evaluate_password_strength(password: &SecretString) -> StrengthReport {
    evaluate_with_denylist(password, default_denylist())
}

/// Evaluates password strength against an explicit denylist.
pub fn evaluate_with_denylist(password: &SecretString, denylist: &Denylist) -> StrengthReport {
    let findings = Findings::collect(password.expose_secret(), denylist);

    // Orchestrator: sections run in recommendation priority order
    let sections: [(&str, fn(&Findings) -> SectionResult); 7] = [
        ("length", length_section),
        ("uppercase", uppercase_section),
        ("lowercase", lowercase_section),
        ("digits", digits_section),
        ("symbols", symbols_section),
        ("common", common_section),
        ("pattern", pattern_section),
    ];

    let mut recommendations = Vec::new();
    for (_section_name, section_fn) in sections {
        if let Some(recommendation) = section_fn(&findings) {
            #[cfg(feature = "tracing")]
            tracing::trace!("password evaluation section failed: {}", _section_name);
            recommendations.push(recommendation);
        }
    }

    let score = score_findings(&findings);

    StrengthReport {
        length: findings.length,
        has_upper: findings.composition.has_upper,
        has_lower: findings.composition.has_lower,
        has_digits: findings.composition.has_digits,
        has_special: findings.composition.has_special,
        is_common: findings.is_common,
        has_patterns: findings.has_patterns,
        score,
        label: StrengthLabel::from_score(score),
        recommendations,
    }
}

/// One point per length threshold (8, 12, 16) and per character class,
/// minus the denylist penalty. Patterns do not affect the score.
fn score_findings(findings: &Findings) -> u8 {
    let mut score = length_points(findings.length) + findings.composition.classes();
    if findings.is_common {
        score = score.saturating_sub(COMMON_PENALTY);
    }
    score.min(MAX_SCORE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Recommendation;

    fn denylist() -> Denylist {
        Denylist::parse("password\n123456\nqwerty\nadmin\n")
    }

    fn evaluate(password: &str) -> StrengthReport {
        let pwd = SecretString::new(password.to_string().into());
        evaluate_with_denylist(&pwd, &denylist())
    }

    #[test]
    fn test_evaluate_common_password() {
        let report = evaluate("password");

        assert_eq!(report.length, 8);
        assert!(!report.has_upper);
        assert!(report.has_lower);
        assert!(!report.has_digits);
        assert!(!report.has_special);
        assert!(report.is_common);
        assert_eq!(report.score, 0);
        assert_eq!(report.label, StrengthLabel::VeryWeak);
        assert_eq!(
            report.recommendations,
            vec![
                Recommendation::Length,
                Recommendation::Uppercase,
                Recommendation::Digits,
                Recommendation::Symbols,
                Recommendation::AvoidCommon,
            ]
        );
    }

    #[test]
    fn test_evaluate_empty_password() {
        let report = evaluate("");

        assert_eq!(report.length, 0);
        assert!(!report.has_upper && !report.has_lower && !report.has_digits && !report.has_special);
        assert!(!report.is_common);
        assert_eq!(report.score, 0);
        assert_eq!(report.label, StrengthLabel::VeryWeak);
        assert_eq!(
            report.recommendations,
            vec![
                Recommendation::Length,
                Recommendation::Uppercase,
                Recommendation::Lowercase,
                Recommendation::Digits,
                Recommendation::Symbols,
            ]
        );
    }

    #[test]
    fn test_evaluate_medium_password() {
        // 4 classes, under 8 chars
        let report = evaluate("Ab1!");
        assert_eq!(report.score, 4);
        assert_eq!(report.label, StrengthLabel::Medium);
        assert_eq!(report.recommendations, vec![Recommendation::Length]);
    }

    #[test]
    fn test_evaluate_strong_password() {
        let report = evaluate("vR7#kq2!Lm9zT4&w");

        assert_eq!(report.length, 16);
        assert_eq!(report.score, 7);
        assert_eq!(report.label, StrengthLabel::VeryStrong);
        assert!(report.recommendations.is_empty());
    }

    #[test]
    fn test_evaluate_pattern_only_adds_recommendation() {
        let clean = evaluate("vR7#kq2!Lm9zT4&w");
        let patterned = evaluate("vR7#kq2!Lm9zzzzw");

        assert!(patterned.has_patterns);
        assert_eq!(patterned.score, clean.score);
        assert_eq!(patterned.recommendations, vec![Recommendation::AvoidPatterns]);
    }

    #[test]
    fn test_evaluate_common_penalty_never_raises_score() {
        let pwd = SecretString::new("Admin".to_string().into());
        let listed = evaluate_with_denylist(&pwd, &denylist());
        let unlisted = evaluate_with_denylist(&pwd, &Denylist::default());

        assert!(listed.is_common);
        assert!(!unlisted.is_common);
        assert!(listed.score <= unlisted.score);
    }

    #[test]
    fn test_evaluate_is_deterministic() {
        assert_eq!(evaluate("Tr0ub4dor&3"), evaluate("Tr0ub4dor&3"));
    }

    #[test]
    fn test_evaluate_score_boundaries() {
        for pwd_str in ["", "a", "password", "MyPass123!", "VeryStrongPassword123!@#"] {
            let report = evaluate(pwd_str);
            assert!(
                report.score <= MAX_SCORE,
                "Score {} out of bounds for password '{}'",
                report.score,
                pwd_str
            );
            assert_eq!(report.label, StrengthLabel::from_score(report.score));
        }
    }

    #[test]
    fn test_evaluate_score_monotonic_in_length() {
        let mut previous = 0;
        for len in 1..=40 {
            let report = evaluate(&"Za9!".repeat(len).chars().take(len).collect::<String>());
            assert!(report.score >= previous, "score dropped at length {}", len);
            previous = report.score;
        }
    }

    #[test]
    fn test_evaluate_score_monotonic_in_classes() {
        let steps = ["kqzvmwxt", "kqzvmwxT", "kqzvmwx7", "kqzvmw7T", "kqzvm#7T"];
        let scores: Vec<u8> = steps.iter().map(|p| evaluate(p).score).collect();
        assert_eq!(scores, vec![2, 3, 3, 4, 5]);
    }

    #[test]
    fn test_default_denylist_flags_password() {
        let pwd = SecretString::new("password".to_string().into());
        let report = evaluate_password_strength(&pwd);
        assert!(report.is_common);
        assert_eq!(report.label, StrengthLabel::VeryWeak);
    }
}
