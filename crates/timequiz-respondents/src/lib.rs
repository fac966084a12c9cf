//! timequiz-respondents: Respondent implementations.
//!
//! Implements the `Respondent` trait for an interactive line-oriented
//! terminal and for scripted answer sequences used in tests and demos.

pub mod line;
pub mod scripted;

pub use line::LineRespondent;
pub use scripted::{ScriptStep, ScriptedRespondent, Transcript, TranscriptEntry};
