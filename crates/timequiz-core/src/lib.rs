//! timequiz-core: Question sets, shuffling, and the timed session runner.
//!
//! This crate defines the quiz data model, the `Respondent` seam, and the
//! race between a running session and its deadline that the rest of
//! timequiz builds on.

pub mod arbiter;
pub mod error;
pub mod model;
pub mod report;
pub mod session;
pub mod shuffle;
pub mod source;
pub mod traits;

#[cfg(test)]
mod test_support;

pub use arbiter::{run_timed_session, TimeLimit};
pub use error::{InputError, QuizError};
pub use model::{AnswerRecord, Question, QuestionSet, SessionOutcome};
pub use report::{Resolution, SessionReport};
pub use shuffle::Shuffler;
pub use traits::Respondent;
