//! Error types for contract violations inside the engine.
//!
//! User mistakes never show up here; they are answered with a reply.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DialogueError {
    /// The quiz has not been started or was already ended.
    #[error("no quiz is active")]
    QuizNotActive,

    /// The quiz is active but every question has been consumed.
    #[error("no active question to answer")]
    NoActiveQuestion,
}

pub type Result<T> = std::result::Result<T, DialogueError>;
