//! Respondent double for the unit tests in this crate.
//!
//! `timequiz_respondents::ScriptedRespondent` cannot stand in here: as a
//! dev-dependency it would link its own copy of this crate, and its
//! `Respondent` impl would be for that copy's trait, not the one under test.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use crate::error::InputError;
use crate::traits::Respondent;

/// Replays canned answers, `None` being a failed read. Once they run out it
/// never answers again.
pub(crate) struct Replay {
    replies: VecDeque<Option<&'static str>>,
    pace: Duration,
    transcript: Arc<Mutex<Vec<String>>>,
}

impl Replay {
    pub(crate) fn new(replies: impl IntoIterator<Item = Option<&'static str>>) -> Self {
        Self {
            replies: replies.into_iter().collect(),
            pace: Duration::ZERO,
            transcript: Arc::default(),
        }
    }

    pub(crate) fn answers(answers: &[&'static str]) -> Self {
        Self::new(answers.iter().map(|&a| Some(a)))
    }

    /// Wait `pace` before every reply.
    pub(crate) fn paced(mut self, pace: Duration) -> Self {
        self.pace = pace;
        self
    }

    pub(crate) fn transcript(&self) -> Arc<Mutex<Vec<String>>> {
        Arc::clone(&self.transcript)
    }
}

#[async_trait]
impl Respondent for Replay {
    async fn present(&mut self, prompt: &str) -> std::io::Result<()> {
        self.transcript.lock().unwrap().push(prompt.to_string());
        Ok(())
    }

    async fn notify(&mut self, message: &str) -> std::io::Result<()> {
        self.transcript.lock().unwrap().push(message.to_string());
        Ok(())
    }

    async fn read_answer(&mut self) -> Result<String, InputError> {
        let Some(reply) = self.replies.pop_front() else {
            return std::future::pending().await;
        };
        tokio::time::sleep(self.pace).await;
        reply.map(str::to_string).ok_or_else(|| {
            InputError::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                "stream did not contain valid UTF-8",
            ))
        })
    }
}
