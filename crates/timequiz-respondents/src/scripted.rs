//! Scripted respondent for testing.

use std::collections::VecDeque;
use std::io;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use timequiz_core::error::InputError;
use timequiz_core::traits::Respondent;

/// One scripted reply to a read.
#[derive(Debug, Clone)]
pub enum ScriptStep {
    /// Answer immediately.
    Answer(String),
    /// Answer after a pause.
    Delayed(Duration, String),
    /// Fail the read with an I/O error of this kind.
    Fail(io::ErrorKind),
    /// Never answer.
    Hang,
}

/// Something the session showed the respondent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranscriptEntry {
    Prompt(String),
    Notice(String),
}

/// Shared view of what a `ScriptedRespondent` saw, readable after the
/// respondent has been moved into a session.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    entries: Arc<Mutex<Vec<TranscriptEntry>>>,
    reads: Arc<AtomicU32>,
}

impl Transcript {
    pub fn entries(&self) -> Vec<TranscriptEntry> {
        self.entries.lock().unwrap().clone()
    }

    pub fn prompts(&self) -> Vec<String> {
        self.entries()
            .into_iter()
            .filter_map(|e| match e {
                TranscriptEntry::Prompt(p) => Some(p),
                TranscriptEntry::Notice(_) => None,
            })
            .collect()
    }

    pub fn notices(&self) -> Vec<String> {
        self.entries()
            .into_iter()
            .filter_map(|e| match e {
                TranscriptEntry::Notice(n) => Some(n),
                TranscriptEntry::Prompt(_) => None,
            })
            .collect()
    }

    /// Number of answer reads attempted.
    pub fn reads(&self) -> u32 {
        self.reads.load(Ordering::Relaxed)
    }

    fn push(&self, entry: TranscriptEntry) {
        self.entries.lock().unwrap().push(entry);
    }
}

/// A respondent that plays back a fixed script of replies.
///
/// Once the script is exhausted every read reports closed input.
pub struct ScriptedRespondent {
    steps: VecDeque<ScriptStep>,
    transcript: Transcript,
}

impl ScriptedRespondent {
    pub fn new(steps: impl IntoIterator<Item = ScriptStep>) -> Self {
        Self {
            steps: steps.into_iter().collect(),
            transcript: Transcript::default(),
        }
    }

    /// Answer each read immediately with the next of `answers`.
    pub fn answering<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(answers.into_iter().map(|a| ScriptStep::Answer(a.into())))
    }

    /// A respondent that never answers.
    pub fn silent() -> Self {
        Self::new([ScriptStep::Hang])
    }

    pub fn transcript(&self) -> Transcript {
        self.transcript.clone()
    }
}

#[async_trait]
impl Respondent for ScriptedRespondent {
    async fn present(&mut self, prompt: &str) -> io::Result<()> {
        self.transcript
            .push(TranscriptEntry::Prompt(prompt.to_string()));
        Ok(())
    }

    async fn notify(&mut self, message: &str) -> io::Result<()> {
        self.transcript
            .push(TranscriptEntry::Notice(message.to_string()));
        Ok(())
    }

    async fn read_answer(&mut self) -> Result<String, InputError> {
        self.transcript.reads.fetch_add(1, Ordering::Relaxed);

        match self.steps.pop_front() {
            Some(ScriptStep::Answer(text)) => Ok(text),
            Some(ScriptStep::Delayed(delay, text)) => {
                tokio::time::sleep(delay).await;
                Ok(text)
            }
            Some(ScriptStep::Fail(kind)) => {
                Err(io::Error::new(kind, "scripted read failure").into())
            }
            Some(ScriptStep::Hang) => std::future::pending().await,
            None => Err(InputError::Closed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn plays_back_answers_then_closes() {
        let mut r = ScriptedRespondent::answering(["10", "2"]);
        assert_eq!(r.read_answer().await.unwrap(), "10");
        assert_eq!(r.read_answer().await.unwrap(), "2");
        assert!(matches!(r.read_answer().await, Err(InputError::Closed)));
        assert_eq!(r.transcript().reads(), 3);
    }

    #[tokio::test]
    async fn scripted_failure() {
        let mut r = ScriptedRespondent::new([ScriptStep::Fail(io::ErrorKind::UnexpectedEof)]);
        match r.read_answer().await {
            Err(InputError::Io(e)) => assert_eq!(e.kind(), io::ErrorKind::UnexpectedEof),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn delayed_answer_waits() {
        let mut r = ScriptedRespondent::new([ScriptStep::Delayed(
            Duration::from_secs(4),
            "late".into(),
        )]);
        let start = tokio::time::Instant::now();
        assert_eq!(r.read_answer().await.unwrap(), "late");
        assert!(start.elapsed() >= Duration::from_secs(4));
    }

    #[tokio::test(start_paused = true)]
    async fn silent_never_answers() {
        let mut r = ScriptedRespondent::silent();
        let read = tokio::time::timeout(Duration::from_secs(60), r.read_answer()).await;
        assert!(read.is_err());
    }

    #[tokio::test]
    async fn transcript_survives_move() {
        let mut r = ScriptedRespondent::answering(Vec::<String>::new());
        let transcript = r.transcript();
        r.present("Problem #1: 1+1 = ").await.unwrap();
        r.notify("\tInput error!").await.unwrap();
        drop(r);

        assert_eq!(transcript.prompts(), vec!["Problem #1: 1+1 = "]);
        assert_eq!(transcript.notices(), vec!["\tInput error!"]);
        assert_eq!(transcript.entries().len(), 2);
    }
}
