//! Quiz engine - walks a shuffled question bank and keeps score.

mod answer;

pub use answer::*;

use awareness_rules::{question_bank, Question};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{DialogueError, Result};

/// Lifecycle of a quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum QuizState {
    #[default]
    NotStarted,
    Active,
    Finished,
}

/// Result band for a finished quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResultTier {
    /// Every answer correct.
    Perfect,
    /// At least half correct.
    Solid,
    KeepLearning,
}

impl ResultTier {
    /// Tier for `score` out of `total`. Exactly half is `Solid`; an empty quiz earns nothing.
    pub fn for_score(score: usize, total: usize) -> Self {
        if total == 0 {
            ResultTier::KeepLearning
        } else if score == total {
            ResultTier::Perfect
        } else if score * 2 >= total {
            ResultTier::Solid
        } else {
            ResultTier::KeepLearning
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            ResultTier::Perfect => "Amazing! You're a true cybersecurity expert! 🏆",
            ResultTier::Solid => {
                "Great job! You have a solid understanding of cybersecurity. Keep learning! 👍"
            }
            ResultTier::KeepLearning => {
                "Keep learning to stay safe online! Every bit of knowledge helps. 💪"
            }
        }
    }
}

/// Final score summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizOutcome {
    pub score: usize,
    pub total: usize,
    pub tier: ResultTier,
}

impl std::fmt::Display for QuizOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Quiz finished! You scored {} out of {}. {}",
            self.score,
            self.total,
            self.tier.message()
        )
    }
}

/// What the user learns after answering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerFeedback {
    pub correct: bool,
    pub explanation: String,
}

/// One run through the question bank.
///
/// Answering does not move to the next question; callers call [`QuizSession::advance`].
#[derive(Debug, Clone)]
pub struct QuizSession {
    questions: Vec<Question>,
    index: usize,
    score: usize,
    state: QuizState,
}

impl QuizSession {
    /// A quiz over the standard bank.
    pub fn new() -> Self {
        Self::with_questions(question_bank())
    }

    pub fn with_questions(questions: Vec<Question>) -> Self {
        Self {
            questions,
            index: 0,
            score: 0,
            state: QuizState::NotStarted,
        }
    }

    /// Shuffle the questions and begin from the first with a zero score.
    pub fn start<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.questions.shuffle(rng);
        self.index = 0;
        self.score = 0;
        self.state = QuizState::Active;
        info!(total = self.questions.len(), "quiz started");
    }

    /// The question at the current position, if the quiz is active and not exhausted.
    pub fn current_question(&self) -> Option<&Question> {
        if self.state != QuizState::Active {
            return None;
        }
        self.questions.get(self.index)
    }

    /// 1-based position of the current question.
    pub fn current_question_number(&self) -> usize {
        self.index + 1
    }

    /// Check an answer against the current question and score it.
    pub fn submit_answer(&mut self, answer: &str) -> Result<AnswerFeedback> {
        if self.state != QuizState::Active {
            return Err(DialogueError::QuizNotActive);
        }
        let question = self
            .questions
            .get(self.index)
            .ok_or(DialogueError::NoActiveQuestion)?;

        let correct = AnswerChecker::is_correct(question, answer);
        if correct {
            self.score += 1;
        }
        debug!(index = self.index, correct, score = self.score, "quiz answer checked");
        Ok(AnswerFeedback {
            correct,
            explanation: question.explanation().to_string(),
        })
    }

    /// Move to the next question. Returns whether one remains.
    pub fn advance(&mut self) -> bool {
        if self.state != QuizState::Active {
            return false;
        }
        self.index += 1;
        self.index < self.questions.len()
    }

    /// Stop the quiz. Calling it again has no effect.
    pub fn end(&mut self) {
        if self.state == QuizState::Active {
            info!(score = self.score, total = self.questions.len(), "quiz ended");
        }
        self.state = QuizState::Finished;
    }

    pub fn outcome(&self) -> QuizOutcome {
        let total = self.total_questions();
        QuizOutcome {
            score: self.score,
            total,
            tier: ResultTier::for_score(self.score, total),
        }
    }

    pub fn state(&self) -> QuizState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state == QuizState::Active
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }
}

impl Default for QuizSession {
    fn default() -> Self {
        Self::new()
    }
}
