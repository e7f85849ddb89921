//! Validation sections
//!
//! Each section checks one aspect of an input line.

mod filter;
mod length;

pub use filter::{FilterMode, FilterStrategy};
pub use length::LengthRule;

use thiserror::Error;

/// Why a section rejected an input line.
///
/// These are reported inside a `ValidationOutcome`, never returned as `Err`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    #[error("Does not meet minimum length ({actual} / {required})")]
    TooShort { actual: usize, required: usize },
    #[error("Input contains blacklisted character(s)")]
    BlacklistViolation,
    #[error("Input contains character(s) outside of whitelist")]
    WhitelistViolation,
}

/// Result type for section checks.
/// - `Some(violation)` - Section failed
/// - `None` - Section passed
pub type SectionResult = Option<Violation>;
