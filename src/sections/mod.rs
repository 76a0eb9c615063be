//! Password evaluation sections
//!
//! Each section inspects one aspect of the password and returns the
//! recommendation to emit when that aspect falls short.

mod common;
mod length;
mod pattern;
mod variety;

pub use common::common_section;
pub use length::{length_points, length_section};
pub use pattern::{has_patterns, pattern_section};
pub use variety::{
    digits_section, lowercase_section, symbols_section, uppercase_section, Composition,
};

use crate::denylist::Denylist;
use crate::types::Recommendation;

/// Result type for section functions.
/// - `Some(recommendation)` - Section failed
/// - `None` - Section passed
pub type SectionResult = Option<Recommendation>;

/// Facts gathered from a password in a single pass, shared by all sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Findings {
    pub length: usize,
    pub composition: Composition,
    pub is_common: bool,
    pub has_patterns: bool,
}

impl Findings {
    pub fn collect(password: &str, denylist: &Denylist) -> Self {
        Self {
            length: password.chars().count(),
            composition: Composition::of(password),
            is_common: denylist.contains(password),
            has_patterns: has_patterns(password),
        }
    }
}
