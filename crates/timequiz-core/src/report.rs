//! Session report types.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::SessionOutcome;

/// Which side of the race finished first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Resolution {
    /// Every question was answered before the deadline.
    Completed,
    /// The deadline passed first.
    TimedOut,
}

impl Resolution {
    pub fn message(self) -> &'static str {
        match self {
            Resolution::Completed => "all questions answered in time",
            Resolution::TimedOut => "time out",
        }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// The result of one timed session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionReport {
    /// Unique session identifier, also attached to the session's log span.
    pub session_id: Uuid,
    /// When the session started.
    pub started_at: DateTime<Utc>,
    pub resolution: Resolution,
    /// Tally as of the moment the race resolved.
    pub outcome: SessionOutcome,
    /// Time from start to resolution in milliseconds.
    pub elapsed_ms: u64,
}

impl SessionReport {
    /// The final score line.
    pub fn score_line(&self) -> String {
        format!(
            "You scored {} out of {}.",
            self.outcome.correct, self.outcome.total
        )
    }

    pub fn timed_out(&self) -> bool {
        self.resolution == Resolution::TimedOut
    }
}
