//! Length section - checks input minimum length.

use super::{SectionResult, Violation};

/// Minimum length requirement, measured in 8-bit characters.
///
/// A `min_length` of zero or below disables the check.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LengthRule {
    min_length: i64,
}

impl LengthRule {
    pub fn new(min_length: i64) -> Self {
        Self { min_length }
    }

    pub fn min_length(&self) -> i64 {
        self.min_length
    }

    pub fn is_enforced(&self) -> bool {
        self.min_length > 0
    }

    /// Checks if the input meets the minimum length.
    ///
    /// # Returns
    /// - `Some(Violation::TooShort)` if input is too short
    /// - `None` if the rule is disabled or input is long enough
    pub fn check(&self, input: impl AsRef<[u8]>) -> SectionResult {
        if !self.is_enforced() {
            return None;
        }

        let required = usize::try_from(self.min_length).unwrap_or(usize::MAX);
        let actual = input.as_ref().len();
        if actual < required {
            return Some(Violation::TooShort { actual, required });
        }
        None
    }
}
