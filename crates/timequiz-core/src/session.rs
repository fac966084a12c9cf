//! The session runner.
//!
//! Asks every question in order, waits for one answer per question, and
//! keeps the tally. The runner owns the tally outright: it publishes a copy
//! after each answer on a `watch` channel and hands over the final outcome on
//! a `oneshot` channel once the last question has been answered.

use tokio::sync::{oneshot, watch};
use tokio::task::JoinHandle;
use tracing::Instrument;

use crate::model::{QuestionSet, SessionOutcome};
use crate::traits::{question_prompt, Respondent, INPUT_ERROR_NOTICE};

/// Drives one respondent through one question set.
pub struct SessionRunner<R> {
    questions: QuestionSet,
    respondent: R,
}

/// Receiving side of a spawned session.
pub struct SessionHandle {
    /// Latest tally; updated after every answer. Never marked completed.
    pub progress: watch::Receiver<SessionOutcome>,
    /// Fires once with the final outcome after the last question.
    pub done: oneshot::Receiver<SessionOutcome>,
    /// The runner task.
    pub task: JoinHandle<()>,
}

impl<R: Respondent> SessionRunner<R> {
    pub fn new(questions: QuestionSet, respondent: R) -> Self {
        Self {
            questions,
            respondent,
        }
    }

    /// Run the whole session with no deadline, publishing progress as it goes.
    ///
    /// A failed read is reported to the respondent and scored as wrong; the
    /// session always moves on to the next question.
    pub async fn run(self, progress: &watch::Sender<SessionOutcome>) -> SessionOutcome {
        let Self {
            questions,
            mut respondent,
        } = self;
        let mut outcome = SessionOutcome::new(&questions);

        for question in &questions {
            tracing::debug!(question = question.id(), "presenting question");
            if let Err(e) = respondent
                .present(&question_prompt(question.id(), question.prompt()))
                .await
            {
                tracing::warn!(question = question.id(), "failed to write prompt: {e}");
            }

            let answer = match respondent.read_answer().await {
                Ok(answer) => Some(answer),
                Err(e) => {
                    tracing::debug!(question = question.id(), "input error: {e}");
                    if let Err(e) = respondent.notify(INPUT_ERROR_NOTICE).await {
                        tracing::warn!("failed to write input error notice: {e}");
                    }
                    None
                }
            };

            outcome.record(question, answer);
            progress.send_replace(outcome.clone());
        }

        outcome.completed = true;
        tracing::debug!(
            correct = outcome.correct,
            total = outcome.total,
            "all questions answered"
        );
        outcome
    }
}

impl<R: Respondent + 'static> SessionRunner<R> {
    /// Start the session on its own task.
    pub fn spawn(self) -> SessionHandle {
        let (progress_tx, progress_rx) = watch::channel(SessionOutcome::new(&self.questions));
        let (done_tx, done_rx) = oneshot::channel();

        let task = tokio::spawn(
            async move {
                let outcome = self.run(&progress_tx).await;
                // The receiver is gone when the deadline already won.
                if done_tx.send(outcome).is_err() {
                    tracing::debug!("session finished after the race was resolved");
                }
            }
            .instrument(tracing::Span::current()),
        );

        SessionHandle {
            progress: progress_rx,
            done: done_rx,
            task,
        }
    }
}
