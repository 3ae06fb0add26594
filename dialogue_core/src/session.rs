//! Session - everything one conversation owns.
//!
//! A host creates one `Session` per user. Nothing here is shared between
//! sessions, so several can run side by side without locking.

use awareness_rules::{
    ActivityLog, Clock, EngineConfig, Question, SystemClock, TaskItem, TaskStore, UserProfile,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::error::Result;
use crate::quiz::{AnswerFeedback, QuizOutcome, QuizSession, QuizState};

/// Unique identifier for sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Conversation mode flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogueState {
    /// True until the user gives a name after start or reset.
    pub awaiting_name: bool,
    /// Last topic surfaced, used to answer "tell me more".
    pub last_topic: Option<String>,
}

impl DialogueState {
    pub fn new() -> Self {
        Self {
            awaiting_name: true,
            last_topic: None,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for DialogueState {
    fn default() -> Self {
        Self::new()
    }
}

/// Serializable view of a session for hosts to inspect.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub id: SessionId,
    pub profile: UserProfile,
    pub dialogue: DialogueState,
    pub tasks: Vec<TaskItem>,
    pub quiz_state: QuizState,
    pub log_entries: usize,
}

/// Per-user conversation context.
pub struct Session {
    pub id: SessionId,
    pub profile: UserProfile,
    pub dialogue: DialogueState,
    pub tasks: TaskStore,
    pub log: ActivityLog,
    pub quiz: QuizSession,
    pub(crate) rng: StdRng,
    pub(crate) clock: Box<dyn Clock>,
}

impl Session {
    /// A fresh session. Seeds from `config.seed` when set, otherwise from the OS.
    pub fn new(config: &EngineConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let id = SessionId::new();
        info!(%id, seeded = config.seed.is_some(), "session created");
        Self {
            id,
            profile: UserProfile::new(config.default_user_name.clone()),
            dialogue: DialogueState::new(),
            tasks: TaskStore::new(),
            log: ActivityLog::new(config.log_capacity),
            quiz: QuizSession::new(),
            rng,
            clock: Box::new(SystemClock),
        }
    }

    /// Replace the RNG with one seeded from `seed`.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Replace the time source.
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Append a timestamped activity entry.
    pub fn record(&mut self, text: impl Into<String>) {
        let now = self.clock.now();
        self.log.record(now, text);
    }

    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    /// Shuffle and start a new quiz run.
    pub fn start_quiz(&mut self) {
        self.quiz.start(&mut self.rng);
        self.record("Quiz started.");
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.quiz.current_question()
    }

    /// Score an answer to the current question and log the result.
    pub fn submit_quiz_answer(&mut self, answer: &str) -> Result<AnswerFeedback> {
        let question = self
            .quiz
            .current_question()
            .map(|q| q.text().to_string())
            .unwrap_or_default();
        let feedback = self.quiz.submit_answer(answer)?;
        self.record(format!(
            "Quiz: Answered \"{}\" for \"{}\" - {}",
            answer,
            question,
            if feedback.correct { "Correct" } else { "Incorrect" }
        ));
        Ok(feedback)
    }

    /// Move to the next question. Returns whether one remains.
    pub fn advance_quiz(&mut self) -> bool {
        self.quiz.advance()
    }

    /// End the quiz and report the result. Only the first call is logged.
    pub fn end_quiz(&mut self) -> QuizOutcome {
        let was_active = self.quiz.is_active();
        self.quiz.end();
        let outcome = self.quiz.outcome();
        if was_active {
            self.record(format!(
                "Quiz finished with score {}/{}.",
                outcome.score, outcome.total
            ));
        }
        outcome
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            id: self.id,
            profile: self.profile.clone(),
            dialogue: self.dialogue.clone(),
            tasks: self.tasks.list_all(),
            quiz_state: self.quiz.state(),
            log_entries: self.log.len(),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(&EngineConfig::default())
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("id", &self.id)
            .field("profile", &self.profile)
            .field("dialogue", &self.dialogue)
            .field("tasks", &self.tasks.len())
            .field("log", &self.log.len())
            .field("quiz", &self.quiz.state())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use awareness_rules::FixedClock;
    use chrono::NaiveDate;

    fn session() -> Session {
        let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        Session::default()
            .with_seed(17)
            .with_clock(FixedClock::at_date(date))
    }

    #[test]
    fn test_new_session_defaults() {
        let session = Session::default();
        assert!(session.dialogue.awaiting_name);
        assert!(session.dialogue.last_topic.is_none());
        assert_eq!(session.profile.name, "User");
        assert!(session.tasks.is_empty());
        assert_eq!(session.log.capacity(), 100);
        assert_eq!(session.quiz.state(), QuizState::NotStarted);
    }

    #[test]
    fn test_sessions_are_independent() {
        let mut a = session();
        let b = session();
        a.profile.set_name("ana");
        a.tasks.add("patch", "", None);

        assert_ne!(a.id, b.id);
        assert_eq!(b.profile.name, "User");
        assert!(b.tasks.is_empty());
    }

    #[test]
    fn test_quiz_logging() {
        let mut s = session();
        s.start_quiz();
        s.submit_quiz_answer("zzz").unwrap();
        s.end_quiz();
        s.end_quiz();

        let log: Vec<_> = s.log.all().into_iter().map(|e| e.text).collect();
        assert_eq!(log.len(), 3);
        assert_eq!(log[0], "Quiz started.");
        assert!(log[1].starts_with("Quiz: Answered \"zzz\" for \""));
        assert!(log[1].ends_with("- Incorrect"));
        assert_eq!(log[2], "Quiz finished with score 0/10.");
        assert!(s.current_question().is_none());
    }

    #[test]
    fn test_submit_without_quiz() {
        let mut s = session();
        assert!(s.submit_quiz_answer("a").is_err());
        assert!(s.log.is_empty());
    }

    #[test]
    fn test_snapshot() {
        let mut s = session();
        s.tasks.add("review logins", "", None);
        let snapshot = s.snapshot();
        assert_eq!(snapshot.tasks.len(), 1);
        assert!(snapshot.dialogue.awaiting_name);
        assert_eq!(snapshot.quiz_state, QuizState::NotStarted);
    }
}
