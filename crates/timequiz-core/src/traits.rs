//! Core trait definitions for respondents.
//!
//! A respondent is whoever answers the quiz: a terminal user on stdio, a
//! scripted double in tests. Implementations live in `timequiz-respondents`.

use async_trait::async_trait;

use crate::error::InputError;

/// Line-oriented I/O channel to the person (or script) answering the quiz.
#[async_trait]
pub trait Respondent: Send {
    /// Show a question prompt. No line terminator is appended.
    async fn present(&mut self, prompt: &str) -> std::io::Result<()>;

    /// Show a status or error line.
    async fn notify(&mut self, message: &str) -> std::io::Result<()>;

    /// Wait for the next answer line, without its line terminator.
    async fn read_answer(&mut self) -> Result<String, InputError>;
}

#[async_trait]
impl<R: Respondent + ?Sized> Respondent for Box<R> {
    async fn present(&mut self, prompt: &str) -> std::io::Result<()> {
        (**self).present(prompt).await
    }

    async fn notify(&mut self, message: &str) -> std::io::Result<()> {
        (**self).notify(message).await
    }

    async fn read_answer(&mut self) -> Result<String, InputError> {
        (**self).read_answer().await
    }
}

/// Format the prompt shown for a question.
pub fn question_prompt(id: u32, prompt: &str) -> String {
    format!("Problem #{id}: {prompt} = ")
}

/// Notice written when an answer could not be read.
pub const INPUT_ERROR_NOTICE: &str = "\tInput error!";
