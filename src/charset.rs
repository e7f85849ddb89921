//! Character set module
//!
//! Immutable sets of single 8-bit characters used as filter membership data.

use std::collections::HashSet;

use crate::error::ConfigError;

/// Special characters included by [`CharsetPreset::AlphanumericSpecial`].
pub const SPECIAL_CHARACTERS: &[u8] = b"!@#$%^&*()";

/// Named presets for building a [`CharacterSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharsetPreset {
    /// `A-Z` and `a-z`
    Letters,
    /// Letters plus `0-9`
    Alphanumeric,
    /// Alphanumeric plus [`SPECIAL_CHARACTERS`]
    AlphanumericSpecial,
}

impl CharsetPreset {
    /// Parses a single-letter selector: `L`, `A` or `S` (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownPreset`] for anything else, including
    /// `C`, since a custom list is not a preset.
    pub fn from_selector(selector: &str) -> Result<Self, ConfigError> {
        match selector.trim() {
            "L" | "l" => Ok(Self::Letters),
            "A" | "a" => Ok(Self::Alphanumeric),
            "S" | "s" => Ok(Self::AlphanumericSpecial),
            other => Err(ConfigError::UnknownPreset(other.to_string())),
        }
    }
}

/// A set of single characters with no ordering significance.
///
/// Once built the set never changes; filters own it by value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharacterSet {
    chars: HashSet<u8>,
}

impl CharacterSet {
    /// Builds a set from any sequence of characters, dropping duplicates.
    pub fn new<I: IntoIterator<Item = u8>>(chars: I) -> Self {
        Self {
            chars: chars.into_iter().collect(),
        }
    }

    /// Builds the set described by a preset.
    pub fn from_preset(preset: CharsetPreset) -> Self {
        let letters = (b'A'..=b'Z').chain(b'a'..=b'z');
        match preset {
            CharsetPreset::Letters => Self::new(letters),
            CharsetPreset::Alphanumeric => Self::new(letters.chain(b'0'..=b'9')),
            CharsetPreset::AlphanumericSpecial => Self::new(
                letters
                    .chain(b'0'..=b'9')
                    .chain(SPECIAL_CHARACTERS.iter().copied()),
            ),
        }
    }

    /// Builds a set from a caller-supplied list of distinct characters.
    ///
    /// An empty list gives an empty set. Repeats are rejected rather than
    /// merged so a prompt layer can ask again for the missing character;
    /// use [`CharacterSet::new`] to merge them silently.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::DuplicateCharacter`] if a character appears
    /// more than once.
    pub fn from_custom(list: &[u8]) -> Result<Self, ConfigError> {
        let mut chars = HashSet::with_capacity(list.len());
        for &c in list {
            if !chars.insert(c) {
                return Err(ConfigError::DuplicateCharacter(c));
            }
        }

        Ok(Self { chars })
    }

    pub fn contains(&self, c: u8) -> bool {
        self.chars.contains(&c)
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Returns the members in ascending order, for display.
    pub fn sorted(&self) -> Vec<u8> {
        let mut members: Vec<u8> = self.chars.iter().copied().collect();
        members.sort_unstable();
        members
    }
}

impl FromIterator<u8> for CharacterSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        Self::new(iter)
    }
}
