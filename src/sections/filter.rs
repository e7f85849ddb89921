//! Filter section - checks input characters against a blacklist or whitelist.

use super::{SectionResult, Violation};
use crate::charset::CharacterSet;
use crate::error::ConfigError;

/// Filter mode selector, without membership data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FilterMode {
    #[default]
    None,
    Blacklist,
    Whitelist,
}

impl FilterMode {
    /// Parses `N`, `B` or `W` (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownFilterMode`] for any other input.
    pub fn from_selector(selector: &str) -> Result<Self, ConfigError> {
        match selector.trim() {
            "N" | "n" => Ok(Self::None),
            "B" | "b" => Ok(Self::Blacklist),
            "W" | "w" => Ok(Self::Whitelist),
            other => Err(ConfigError::UnknownFilterMode(other.to_string())),
        }
    }
}

/// Character filter applied to every input line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FilterStrategy {
    /// Always passes.
    #[default]
    None,
    /// Passes if no input character is in the set.
    Blacklist(CharacterSet),
    /// Passes if every input character is in the set.
    Whitelist(CharacterSet),
}

impl FilterStrategy {
    /// Builds a strategy from a mode and an optional set.
    ///
    /// A missing set is treated as empty: a blacklist then accepts everything
    /// and a whitelist accepts only the empty string.
    pub fn from_mode(mode: FilterMode, set: Option<CharacterSet>) -> Self {
        match mode {
            FilterMode::None => Self::None,
            FilterMode::Blacklist => Self::Blacklist(set.unwrap_or_default()),
            FilterMode::Whitelist => Self::Whitelist(set.unwrap_or_default()),
        }
    }

    pub fn mode(&self) -> FilterMode {
        match self {
            Self::None => FilterMode::None,
            Self::Blacklist(_) => FilterMode::Blacklist,
            Self::Whitelist(_) => FilterMode::Whitelist,
        }
    }

    /// Scans the input and stops at the first offending character.
    ///
    /// # Returns
    /// - `Some(violation)` if a character breaks the filter
    /// - `None` if the input passes
    pub fn check(&self, input: impl AsRef<[u8]>) -> SectionResult {
        let input = input.as_ref();
        match self {
            Self::None => None,
            Self::Blacklist(set) => input
                .iter()
                .any(|&c| set.contains(c))
                .then_some(Violation::BlacklistViolation),
            Self::Whitelist(set) => input
                .iter()
                .any(|&c| !set.contains(c))
                .then_some(Violation::WhitelistViolation),
        }
    }
}
