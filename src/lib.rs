//! Line validation library
//!
//! This library validates lines of text against an optional minimum
//! length and an optional blacklist or whitelist of characters.
//!
//! Characters are single 8-bit units: lines are byte slices (any
//! `AsRef<[u8]>`, including `&str`), lengths are byte counts and filters
//! compare bytes exactly, with no case folding or text decoding.
//!
//! # Features
//!
//! - `async` (default): Enables cancellable and channel-based evaluation
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `LINE_VALIDATOR_CORPUS`: Custom path to the corpus file
//!   (default: `./strings.txt`)
//!
//! # Example
//!
//! ```rust
//! use line_validator::{CharacterSet, CharsetPreset, FilterStrategy, Validator};
//!
//! let whitelist = CharacterSet::from_preset(CharsetPreset::Alphanumeric);
//! let validator = Validator::new(8, FilterStrategy::Whitelist(whitelist));
//!
//! let outcome = validator.evaluate("abc 12");
//! assert!(!outcome.passed());
//! for reason in outcome.reasons() {
//!     println!("{reason}");
//! }
//!
//! let tally = validator.tally(["password1", "short", "has space"]);
//! println!("{tally}");
//! ```

// Internal modules
mod charset;
mod corpus;
mod error;
mod sections;
mod validator;

// Public API
pub use charset::{CharacterSet, CharsetPreset, SPECIAL_CHARACTERS};
pub use corpus::{
    corpus_path, read_corpus, validate_corpus, validate_corpus_from_path, CorpusError, Tally,
};
pub use error::ConfigError;
pub use sections::{FilterMode, FilterStrategy, LengthRule, SectionResult, Violation};
pub use validator::{ValidationOutcome, Validator};

#[cfg(feature = "async")]
pub use validator::evaluate_lines_tx;

#[cfg(feature = "async")]
pub use tokio_util::sync::CancellationToken;
