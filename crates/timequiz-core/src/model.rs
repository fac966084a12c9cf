//! Core data model types for timequiz.
//!
//! A `QuestionSet` is built once per run from the question source, may be
//! reordered by the shuffler before the session starts, and is read-only
//! afterwards. `SessionOutcome` is the tally the session runner owns.

use std::slice;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::QuizError;

/// A single question with its expected answer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Question {
    id: u32,
    prompt: String,
    expected_answer: String,
}

impl Question {
    /// 1-based position of the question in its source. Stable across shuffles.
    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn expected_answer(&self) -> &str {
        &self.expected_answer
    }

    /// Exact, case-sensitive comparison against the expected answer.
    pub fn check(&self, answer: &str) -> bool {
        self.expected_answer == answer
    }
}

/// An ordered, non-empty sequence of questions in presentation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionSet {
    questions: Vec<Question>,
}

impl QuestionSet {
    /// Build a set from `(prompt, expected_answer)` pairs, numbering them
    /// from 1 in input order.
    ///
    /// Text content is not validated; empty prompts and answers are kept.
    pub fn from_pairs<I, P, A>(pairs: I) -> Result<Self, QuizError>
    where
        I: IntoIterator<Item = (P, A)>,
        P: Into<String>,
        A: Into<String>,
    {
        let questions: Vec<Question> = pairs
            .into_iter()
            .zip(1u32..)
            .map(|((prompt, answer), id)| Question {
                id,
                prompt: prompt.into(),
                expected_answer: answer.into(),
            })
            .collect();

        if questions.is_empty() {
            return Err(QuizError::NoQuestions);
        }
        Ok(Self { questions })
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, Question> {
        self.questions.iter()
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Look up a question by its stable id.
    pub fn get(&self, id: u32) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    /// Reorder the set in place with a uniformly random permutation.
    /// Ids travel with their questions.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.questions.as_mut_slice().shuffle(rng);
    }

    /// Return a shuffled copy, leaving `self` untouched.
    pub fn shuffled<R: Rng + ?Sized>(&self, rng: &mut R) -> Self {
        let mut copy = self.clone();
        copy.shuffle_with(rng);
        copy
    }
}

impl<'a> IntoIterator for &'a QuestionSet {
    type Item = &'a Question;
    type IntoIter = slice::Iter<'a, Question>;

    fn into_iter(self) -> Self::IntoIter {
        self.questions.iter()
    }
}

/// One answered question, in the order it was asked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerRecord {
    pub question_id: u32,
    /// The submitted text; empty when the read failed.
    pub given: String,
    pub correct: bool,
    /// Whether reading the answer failed.
    #[serde(default)]
    pub input_error: bool,
}

/// Tally of a session run.
///
/// `correct <= answers.len() <= total` holds at every point the tally is
/// observable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionOutcome {
    pub correct: u32,
    pub total: u32,
    /// `true` only when every question was asked before the deadline.
    pub completed: bool,
    #[serde(default)]
    pub answers: Vec<AnswerRecord>,
}

impl SessionOutcome {
    /// A fresh tally for a session over `set`.
    pub fn new(set: &QuestionSet) -> Self {
        Self {
            correct: 0,
            total: u32::try_from(set.len()).unwrap_or(u32::MAX),
            completed: false,
            answers: Vec::with_capacity(set.len()),
        }
    }

    /// Record an answer to `question`. `None` marks a failed read, which
    /// counts as wrong.
    pub fn record(&mut self, question: &Question, answer: Option<String>) {
        let (given, input_error) = match answer {
            Some(text) => (text, false),
            None => (String::new(), true),
        };
        let correct = !input_error && question.check(&given);
        if correct {
            self.correct += 1;
        }
        self.answers.push(AnswerRecord {
            question_id: question.id(),
            given,
            correct,
            input_error,
        });
    }

    /// Number of questions asked so far.
    pub fn answered(&self) -> u32 {
        u32::try_from(self.answers.len()).unwrap_or(u32::MAX)
    }
}
