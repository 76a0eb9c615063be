//! Common-password section - flags passwords found in the denylist.

use super::{Findings, SectionResult};
use crate::types::Recommendation;

/// Checks whether the password was found in the denylist.
///
/// # Returns
/// - `Some(Recommendation::AvoidCommon)` if password is a common one
/// - `None` otherwise
pub fn common_section(findings: &Findings) -> SectionResult {
    findings.is_common.then_some(Recommendation::AvoidCommon)
}
