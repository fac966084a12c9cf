//! Quiz error types.
//!
//! `QuizError` covers everything that stops a session from starting.
//! `InputError` is the per-question read failure, which the session runner
//! recovers from locally by scoring the answer as wrong.

use std::path::PathBuf;

use thiserror::Error;

/// Fatal errors raised while preparing a session.
#[derive(Debug, Error)]
pub enum QuizError {
    /// The question source produced no questions.
    #[error("no questions in the question set")]
    NoQuestions,

    /// The question source could not be opened or read.
    #[error("failed to read question source {}: {source}", path.display())]
    SourceUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The question source could not be parsed.
    #[error("malformed question source at line {line}: {reason}")]
    MalformedSource { line: u64, reason: String },

    /// The configured time limit is zero or negative.
    #[error("time limit must be a positive number of seconds, got {0}")]
    InvalidTimeLimit(i64),
}

impl QuizError {
    pub(crate) fn malformed(line: u64, reason: impl Into<String>) -> Self {
        QuizError::MalformedSource {
            line,
            reason: reason.into(),
        }
    }
}

/// A failed read of one answer from the respondent.
#[derive(Debug, Error)]
pub enum InputError {
    /// The input stream has no more lines.
    #[error("input closed")]
    Closed,

    /// The underlying reader failed (including invalid UTF-8).
    #[error("input read failed: {0}")]
    Io(#[from] std::io::Error),
}
