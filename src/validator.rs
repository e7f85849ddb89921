//! Line validator - combines the length and filter sections.

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::corpus::Tally;
use crate::sections::{FilterStrategy, LengthRule, SectionResult, Violation};

/// Verdict for a single input line.
///
/// The line passed exactly when no section reported a violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationOutcome {
    violations: Vec<Violation>,
}

impl ValidationOutcome {
    pub fn passed(&self) -> bool {
        self.violations.is_empty()
    }

    /// Failures in the order the sections ran: length, then filter.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Human-readable failure reasons, one per violation.
    pub fn reasons(&self) -> Vec<String> {
        self.violations.iter().map(ToString::to_string).collect()
    }

    /// All reasons joined by newlines; empty when the line passed.
    pub fn message(&self) -> String {
        self.reasons().join("\n")
    }
}

/// Immutable validator owning one length rule and one filter.
///
/// Holds no mutable state, so a single instance can be shared across
/// threads and reused for any number of lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Validator {
    length: LengthRule,
    filter: FilterStrategy,
}

impl Validator {
    /// Creates a validator. A `min_length` of zero or below disables the
    /// length check.
    pub fn new(min_length: i64, filter: FilterStrategy) -> Self {
        Self {
            length: LengthRule::new(min_length),
            filter,
        }
    }

    pub fn length_rule(&self) -> &LengthRule {
        &self.length
    }

    pub fn filter(&self) -> &FilterStrategy {
        &self.filter
    }

    /// Evaluates a line against both sections.
    ///
    /// The line is taken as raw 8-bit characters, so `&str`, `String` and
    /// non-UTF-8 byte slices are all accepted. Both sections always run, so a
    /// line that is too short and also breaks the filter reports both reasons.
    pub fn evaluate(&self, input: impl AsRef<[u8]>) -> ValidationOutcome {
        let input = input.as_ref();
        let sections: [SectionResult; 2] = [self.length.check(input), self.filter.check(input)];

        ValidationOutcome {
            violations: sections.into_iter().flatten().collect(),
        }
    }

    /// Evaluates every line and counts passes and failures.
    pub fn tally<I, S>(&self, lines: I) -> Tally
    where
        I: IntoIterator<Item = S>,
        S: AsRef<[u8]>,
    {
        let mut tally = Tally::default();
        for line in lines {
            let outcome = self.evaluate(line);

            #[cfg(feature = "tracing")]
            {
                if !outcome.passed() {
                    tracing::debug!("Line rejected: {:?}", outcome.violations());
                }
            }

            tally.record(&outcome);
        }
        tally
    }

    /// Evaluates lines in order and returns one outcome per line.
    ///
    /// # Arguments
    /// * `lines` - The lines to evaluate
    /// * `token` - Optional cancellation token (async feature only)
    ///
    /// # Returns
    /// The outcomes produced before cancellation, if any.
    pub fn evaluate_lines<I, S>(
        &self,
        lines: I,
        #[cfg(feature = "async")] token: Option<CancellationToken>,
    ) -> Vec<ValidationOutcome>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<[u8]>,
    {
        let mut outcomes = Vec::new();

        for line in lines {
            // Check cancellation before each line (async only)
            #[cfg(feature = "async")]
            {
                if let Some(ref t) = token {
                    if t.is_cancelled() {
                        #[cfg(feature = "tracing")]
                        tracing::info!("Evaluation cancelled after {} lines", outcomes.len());
                        break;
                    }
                }
            }

            outcomes.push(self.evaluate(line));
        }

        outcomes
    }
}

/// Async version that sends each outcome via channel.
///
/// Stops when the token is cancelled or the receiver is dropped.
#[cfg(feature = "async")]
pub async fn evaluate_lines_tx<I, S>(
    validator: &Validator,
    lines: I,
    token: CancellationToken,
    tx: mpsc::Sender<ValidationOutcome>,
) where
    I: IntoIterator<Item = S>,
    S: AsRef<[u8]>,
{
    #[cfg(feature = "tracing")]
    tracing::info!("line evaluation is about to start...");

    for line in lines {
        if token.is_cancelled() {
            break;
        }

        let outcome = validator.evaluate(line);
        if let Err(_e) = tx.send(outcome).await {
            #[cfg(feature = "tracing")]
            tracing::error!("Failed to send validation outcome: {}", _e);
            break;
        }
    }
}
