//! Deadline arbiter.
//!
//! Races a spawned session against a timer. The race resolves exactly once,
//! on whichever of the two signals is ready first, and the coordinator never
//! waits on both indefinitely: if the session dies without signalling, its
//! branch is disabled and the timer still resolves the race.

use std::fmt;
use std::time::Duration;

use tokio::time::Instant;
use tracing::Instrument;
use uuid::Uuid;

use crate::error::QuizError;
use crate::model::QuestionSet;
use crate::report::{Resolution, SessionReport};
use crate::session::{SessionHandle, SessionRunner};
use crate::traits::Respondent;

/// A positive session time limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeLimit(Duration);

impl TimeLimit {
    pub const DEFAULT_SECS: i64 = 30;

    /// Time limit in whole seconds. Zero or negative values are rejected.
    pub fn from_secs(secs: i64) -> Result<Self, QuizError> {
        match u64::try_from(secs) {
            Ok(secs) if secs > 0 => Ok(Self(Duration::from_secs(secs))),
            _ => Err(QuizError::InvalidTimeLimit(secs)),
        }
    }

    /// Time limit of arbitrary precision; must be non-zero.
    pub fn new(limit: Duration) -> Result<Self, QuizError> {
        if limit.is_zero() {
            return Err(QuizError::InvalidTimeLimit(0));
        }
        Ok(Self(limit))
    }

    pub fn as_duration(self) -> Duration {
        self.0
    }
}

impl Default for TimeLimit {
    fn default() -> Self {
        Self(Duration::from_secs(Self::DEFAULT_SECS as u64))
    }
}

impl fmt::Display for TimeLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

/// Run `questions` against `respondent`, stopping at whichever comes first:
/// the last answer or the end of `limit`.
///
/// On timeout the reported tally is the last one the session published, so
/// an answer still being checked when the timer fires is not counted. The
/// session task is aborted at that point; a respondent blocked inside a
/// read that cannot be cancelled is left behind.
pub async fn run_timed_session<R>(
    questions: QuestionSet,
    limit: TimeLimit,
    respondent: R,
) -> SessionReport
where
    R: Respondent + 'static,
{
    let session_id = Uuid::new_v4();
    let started_at = chrono::Utc::now();
    let span = tracing::info_span!("session", %session_id, questions = questions.len(), %limit);

    async move {
        let start = Instant::now();
        let SessionHandle {
            progress,
            done,
            task,
        } = SessionRunner::new(questions, respondent).spawn();

        let (resolution, outcome) = tokio::select! {
            biased;
            Ok(outcome) = done => (Resolution::Completed, outcome),
            () = tokio::time::sleep(limit.as_duration()) => {
                task.abort();
                (Resolution::TimedOut, progress.borrow().clone())
            }
        };

        let elapsed_ms = start.elapsed().as_millis() as u64;
        tracing::info!(
            %resolution,
            correct = outcome.correct,
            total = outcome.total,
            elapsed_ms,
            "session resolved"
        );

        SessionReport {
            session_id,
            started_at,
            resolution,
            outcome,
            elapsed_ms,
        }
    }
    .instrument(span)
    .await
}
