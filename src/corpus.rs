//! Corpus module
//!
//! Reads a line-oriented input file and tallies validation results.

use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::validator::{ValidationOutcome, Validator};

const CORPUS_PATH_VAR: &str = "LINE_VALIDATOR_CORPUS";
const DEFAULT_CORPUS_PATH: &str = "./strings.txt";

#[derive(Error, Debug)]
pub enum CorpusError {
    #[error("Corpus file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read corpus file: {0}")]
    ReadError(#[from] std::io::Error),
}

/// Pass and fail counts over a set of lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub passed: usize,
    pub failed: usize,
}

impl Tally {
    pub fn record(&mut self, outcome: &ValidationOutcome) {
        if outcome.passed() {
            self.passed += 1;
        } else {
            self.failed += 1;
        }
    }

    pub fn total(&self) -> usize {
        self.passed + self.failed
    }
}

impl fmt::Display for Tally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Passed String count : {}", self.passed)?;
        write!(f, "Failed String count : {}", self.failed)
    }
}

/// Returns the corpus file path.
///
/// Priority:
/// 1. Environment variable `LINE_VALIDATOR_CORPUS`
/// 2. Default path `./strings.txt`
pub fn corpus_path() -> PathBuf {
    std::env::var(CORPUS_PATH_VAR)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_CORPUS_PATH))
}

/// Splits file content into lines on `\n` only.
///
/// A trailing `\r` stays part of its line and a final newline does not
/// start an extra empty line.
fn split_lines(content: &[u8]) -> Vec<&[u8]> {
    if content.is_empty() {
        return Vec::new();
    }
    content
        .strip_suffix(b"\n")
        .unwrap_or(content)
        .split(|&b| b == b'\n')
        .collect()
}

/// Reads every line of the corpus file as raw 8-bit characters.
///
/// No text encoding is assumed; Latin-1 and other non-UTF-8 bytes are kept
/// as they are.
///
/// # Errors
///
/// Returns error if:
/// - File does not exist
/// - File cannot be read
pub fn read_corpus<P: AsRef<Path>>(path: P) -> Result<Vec<Vec<u8>>, CorpusError> {
    let path = path.as_ref();

    if !path.exists() {
        #[cfg(feature = "tracing")]
        tracing::error!("Corpus loading FAILED: FileNotFound {:?}", path);
        return Err(CorpusError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read(path)?;
    let lines: Vec<Vec<u8>> = split_lines(&content)
        .into_iter()
        .map(<[u8]>::to_vec)
        .collect();

    #[cfg(feature = "tracing")]
    tracing::info!("Corpus loaded: {} lines from {:?}", lines.len(), path);

    Ok(lines)
}

/// Validates the corpus at [`corpus_path`].
///
/// # Errors
///
/// See [`read_corpus`].
pub fn validate_corpus(validator: &Validator) -> Result<Tally, CorpusError> {
    validate_corpus_from_path(validator, corpus_path())
}

/// Validates every line of the file at `path`.
///
/// # Errors
///
/// See [`read_corpus`].
pub fn validate_corpus_from_path<P: AsRef<Path>>(
    validator: &Validator,
    path: P,
) -> Result<Tally, CorpusError> {
    let lines = read_corpus(path)?;
    let tally = validator.tally(&lines);

    #[cfg(feature = "tracing")]
    tracing::info!("Corpus validated: {} passed, {} failed", tally.passed, tally.failed);

    Ok(tally)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charset::{CharacterSet, CharsetPreset};
    use crate::sections::FilterStrategy;
    use serial_test::serial;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Helper to safely set env var in tests
    fn set_env(key: &str, value: &str) {
        // SAFETY: only called from #[serial] tests
        unsafe { std::env::set_var(key, value); }
    }

    /// Helper to safely remove env var in tests
    fn remove_env(key: &str) {
        // SAFETY: only called from #[serial] tests
        unsafe { std::env::remove_var(key); }
    }

    fn setup_with_tempfile(lines: &[&str]) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        for line in lines {
            writeln!(temp_file, "{}", line).expect("Failed to write");
        }
        temp_file
    }

    #[test]
    fn test_split_lines() {
        assert!(split_lines(b"").is_empty());
        assert_eq!(split_lines(b"\n"), vec![b"".as_slice()]);
        assert_eq!(split_lines(b"a\nb"), vec![b"a".as_slice(), b"b".as_slice()]);
        assert_eq!(split_lines(b"a\r\nb\n"), vec![b"a\r".as_slice(), b"b".as_slice()]);
    }

    #[test]
    fn test_tally_display() {
        let tally = Tally { passed: 3, failed: 1 };
        assert_eq!(
            tally.to_string(),
            "Passed String count : 3\nFailed String count : 1"
        );
    }

    #[test]
    #[serial]
    fn test_corpus_path_default() {
        remove_env(CORPUS_PATH_VAR);
        assert_eq!(corpus_path(), PathBuf::from("./strings.txt"));
    }

    #[test]
    #[serial]
    fn test_corpus_path_from_env() {
        let custom_path = "/custom/path/lines.txt";
        set_env(CORPUS_PATH_VAR, custom_path);

        assert_eq!(corpus_path(), PathBuf::from(custom_path));

        remove_env(CORPUS_PATH_VAR);
    }

    #[test]
    fn test_read_corpus_file_not_found() {
        let result = read_corpus("/nonexistent/path/strings.txt");
        match result {
            Err(CorpusError::FileNotFound(_)) => {}
            _ => panic!("Expected FileNotFound error"),
        }
    }

    #[test]
    fn test_read_corpus_keeps_empty_lines() {
        let temp_file = setup_with_tempfile(&["first", "", "third"]);
        let lines = read_corpus(temp_file.path()).expect("Failed to read corpus");
        assert_eq!(lines, vec![b"first".to_vec(), Vec::new(), b"third".to_vec()]);
    }

    #[test]
    fn test_validate_corpus_latin1_bytes() {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        temp_file
            .write_all(b"hello\ncaf\xe9\nworld\n")
            .expect("Failed to write");

        let lines = read_corpus(temp_file.path()).expect("Failed to read corpus");
        assert_eq!(lines[1], b"caf\xe9".to_vec());

        let unfiltered = validate_corpus_from_path(&Validator::default(), temp_file.path())
            .expect("Failed to validate corpus");
        assert_eq!(unfiltered, Tally { passed: 3, failed: 0 });

        let validator = Validator::new(0, FilterStrategy::Blacklist(CharacterSet::new([0xE9])));
        let tally = validate_corpus_from_path(&validator, temp_file.path())
            .expect("Failed to validate corpus");
        assert_eq!(tally, Tally { passed: 2, failed: 1 });
    }

    #[test]
    fn test_validate_corpus_from_path() {
        let temp_file = setup_with_tempfile(&["abcdef", "abc", "abc def", "XYZ123"]);
        let validator = Validator::new(
            4,
            FilterStrategy::Whitelist(CharacterSet::from_preset(CharsetPreset::Alphanumeric)),
        );

        let tally = validate_corpus_from_path(&validator, temp_file.path())
            .expect("Failed to validate corpus");
        assert_eq!(tally, Tally { passed: 2, failed: 2 });
    }

    #[test]
    #[serial]
    fn test_validate_corpus_from_env() {
        let temp_file = setup_with_tempfile(&["user@example", "plain", "a@"]);
        let path = temp_file.path().to_str().unwrap();
        set_env(CORPUS_PATH_VAR, path);

        let validator = Validator::new(0, FilterStrategy::Blacklist(CharacterSet::new(*b"@")));
        let tally = validate_corpus(&validator).expect("Failed to validate corpus");
        assert_eq!(tally.passed, 1);
        assert_eq!(tally.failed, 2);

        remove_env(CORPUS_PATH_VAR);
    }

    #[test]
    #[serial]
    fn test_validate_corpus_missing_default() {
        set_env(CORPUS_PATH_VAR, "/nonexistent/path/strings.txt");

        let result = validate_corpus(&Validator::default());
        assert!(matches!(result, Err(CorpusError::FileNotFound(_))));

        remove_env(CORPUS_PATH_VAR);
    }
}
