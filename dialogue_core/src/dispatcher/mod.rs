//! Dialogue Dispatcher - resolves each line of input to exactly one intent.
//!
//! Rules are held as an ordered list of `(predicate, handler)` pairs and the
//! first rule whose predicate accepts the input handles it:
//!
//! 1. **Blank**: empty input gets a generic nudge
//! 2. **Reset**: re-arm onboarding and notify the host UI
//! 3. **DeclareName**: "my name is X" works even during onboarding
//! 4. **CaptureName**: while awaiting a name, any input that is not a
//!    recognizable command is taken as the name
//! 5. **Greeting**, **AskBotName**, **Thanks**, **Goodbye**
//! 6. **AddTask**, **ShowTasks**, **CompleteTask**, **DeleteTask**
//! 7. **ShowLog**
//! 8. **TopicInfo**
//! 9. **Fallback**: the knowledge engine
//!
//! Every turn writes two activity entries: the user's input and the reply.

mod due_date;
mod replies;

pub use due_date::*;
pub use replies::*;

use awareness_rules::{EngineConfig, TaskId};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::knowledge::{KnowledgeEngine, TopicLibrary, UNKNOWN_TOPIC};
use crate::patterns::{Intent, PatternTable};
use crate::session::Session;

/// Commands that are never mistaken for a name during onboarding.
pub const ONBOARDING_COMMANDS: [Intent; 10] = [
    Intent::Greeting,
    Intent::AskBotName,
    Intent::Thanks,
    Intent::Goodbye,
    Intent::AddTask,
    Intent::CompleteTask,
    Intent::DeleteTask,
    Intent::ShowTasks,
    Intent::ShowLog,
    Intent::TopicInfo,
];

/// Host hook invoked synchronously when the user asks for a reset.
pub trait UiResetNotifier {
    fn reset_requested(&self);
}

impl<F: Fn()> UiResetNotifier for F {
    fn reset_requested(&self) {
        self()
    }
}

/// State changes a turn caused, for hosts that react without parsing text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SideEffect {
    UiReset,
    NameSet(String),
    FavoriteTopicSet(String),
    TopicChanged(String),
    TaskAdded { id: TaskId, title: String },
    TaskCompleted(String),
    TaskDeleted(String),
}

/// The outcome of resolving one input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub intent: Intent,
    pub response: String,
    pub effects: Vec<SideEffect>,
}

type Predicate = fn(&DialogueDispatcher, &Session, Intent, &str) -> bool;
type Handler = fn(&DialogueDispatcher, &mut Session, &str, &mut Vec<SideEffect>) -> String;

/// One entry in the precedence list.
#[derive(Clone, Copy)]
pub struct Rule {
    pub intent: Intent,
    applies: Predicate,
    handle: Handler,
}

impl Rule {
    const fn new(intent: Intent, applies: Predicate, handle: Handler) -> Self {
        Self {
            intent,
            applies,
            handle,
        }
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Rule").field(&self.intent).finish()
    }
}

/// The standard precedence, first match wins.
const STANDARD_RULES: [Rule; 15] = [
    Rule::new(Intent::Blank, DialogueDispatcher::is_blank, DialogueDispatcher::handle_blank),
    Rule::new(Intent::Reset, DialogueDispatcher::matches, DialogueDispatcher::handle_reset),
    Rule::new(Intent::DeclareName, DialogueDispatcher::matches, DialogueDispatcher::handle_declare_name),
    Rule::new(Intent::CaptureName, DialogueDispatcher::is_onboarding_name, DialogueDispatcher::handle_capture_name),
    Rule::new(Intent::Greeting, DialogueDispatcher::matches, DialogueDispatcher::handle_greeting),
    Rule::new(Intent::AskBotName, DialogueDispatcher::matches, DialogueDispatcher::handle_ask_bot_name),
    Rule::new(Intent::Thanks, DialogueDispatcher::matches, DialogueDispatcher::handle_thanks),
    Rule::new(Intent::Goodbye, DialogueDispatcher::matches, DialogueDispatcher::handle_goodbye),
    Rule::new(Intent::AddTask, DialogueDispatcher::matches, DialogueDispatcher::handle_add_task),
    Rule::new(Intent::ShowTasks, DialogueDispatcher::matches, DialogueDispatcher::handle_show_tasks),
    Rule::new(Intent::CompleteTask, DialogueDispatcher::matches, DialogueDispatcher::handle_complete_task),
    Rule::new(Intent::DeleteTask, DialogueDispatcher::matches, DialogueDispatcher::handle_delete_task),
    Rule::new(Intent::ShowLog, DialogueDispatcher::matches, DialogueDispatcher::handle_show_log),
    Rule::new(Intent::TopicInfo, DialogueDispatcher::matches, DialogueDispatcher::handle_topic_info),
    Rule::new(Intent::Fallback, DialogueDispatcher::always, DialogueDispatcher::handle_fallback),
];

/// Top-level intent resolver. Holds no per-user state; that lives in [`Session`].
pub struct DialogueDispatcher {
    patterns: PatternTable,
    knowledge: KnowledgeEngine,
    topics: TopicLibrary,
    rules: Vec<Rule>,
    bot_name: String,
    recent_log_entries: usize,
    reset_notifier: Option<Box<dyn UiResetNotifier>>,
}

impl DialogueDispatcher {
    /// Create a dispatcher with the standard rules and content.
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            patterns: PatternTable::standard(),
            knowledge: KnowledgeEngine::standard(),
            topics: TopicLibrary::standard(),
            rules: STANDARD_RULES.to_vec(),
            bot_name: config.bot_name.clone(),
            recent_log_entries: config.recent_log_entries,
            reset_notifier: None,
        }
    }

    /// Register the hook called when a reset command is recognized.
    pub fn with_reset_notifier(mut self, notifier: impl UiResetNotifier + 'static) -> Self {
        self.reset_notifier = Some(Box::new(notifier));
        self
    }

    /// Intents in the order they are tried.
    pub fn precedence(&self) -> Vec<Intent> {
        self.rules.iter().map(|r| r.intent).collect()
    }

    pub fn patterns(&self) -> &PatternTable {
        &self.patterns
    }

    pub fn knowledge(&self) -> &KnowledgeEngine {
        &self.knowledge
    }

    /// Resolve one line of input against `session`, mutating it and returning the reply.
    pub fn resolve(&self, session: &mut Session, raw_input: &str) -> Turn {
        let input = raw_input.trim();
        session.record(format!("User Input: \"{}\"", raw_input));

        let (intent, handle) = self
            .rules
            .iter()
            .find(|rule| (rule.applies)(self, &*session, rule.intent, input))
            .map(|rule| (rule.intent, rule.handle))
            .unwrap_or((Intent::Fallback, Self::handle_fallback as Handler));
        debug!(session = %session.id, ?intent, "intent resolved");

        let mut effects = Vec::new();
        let response = handle(self, session, input, &mut effects);

        session.record(format!("Chatbot responded: \"{}\"", response));
        Turn {
            intent,
            response,
            effects,
        }
    }

    // Predicates

    fn is_blank(&self, _session: &Session, _intent: Intent, input: &str) -> bool {
        input.is_empty()
    }

    fn matches(&self, _session: &Session, intent: Intent, input: &str) -> bool {
        self.patterns.is_match(intent, input)
    }

    fn is_onboarding_name(&self, session: &Session, _intent: Intent, input: &str) -> bool {
        session.dialogue.awaiting_name
            && self
                .patterns
                .first_match(input, &ONBOARDING_COMMANDS)
                .is_none()
    }

    fn always(&self, _session: &Session, _intent: Intent, _input: &str) -> bool {
        true
    }

    // Handlers

    fn handle_blank(&self, session: &mut Session, _input: &str, _effects: &mut Vec<SideEffect>) -> String {
        pick(UNRECOGNIZED, &session.profile.name, &mut session.rng)
    }

    fn handle_reset(&self, session: &mut Session, _input: &str, effects: &mut Vec<SideEffect>) -> String {
        if let Some(notifier) = &self.reset_notifier {
            notifier.reset_requested();
        }
        session.dialogue.reset();
        session.profile.reset_name();
        effects.push(SideEffect::UiReset);
        info!(session = %session.id, "conversation reset");
        RESET_ACK.to_string()
    }

    fn handle_declare_name(&self, session: &mut Session, input: &str, effects: &mut Vec<SideEffect>) -> String {
        let declared = self
            .patterns
            .capture(Intent::DeclareName, input, "name")
            .unwrap_or_default();
        session.dialogue.awaiting_name = false;

        if session.profile.name.to_lowercase() == declared.to_lowercase() {
            return format!(
                "I already know you as {}, {}! How can I help today?",
                declared, session.profile.name
            );
        }
        self.set_name(session, &declared, effects)
    }

    fn handle_capture_name(&self, session: &mut Session, input: &str, effects: &mut Vec<SideEffect>) -> String {
        session.dialogue.awaiting_name = false;
        self.set_name(session, input, effects)
    }

    fn set_name(&self, session: &mut Session, raw: &str, effects: &mut Vec<SideEffect>) -> String {
        session.profile.set_name(raw);
        info!(session = %session.id, name = %session.profile.name, "user name set");
        effects.push(SideEffect::NameSet(session.profile.name.clone()));
        nice_to_meet(&session.profile.name)
    }

    fn handle_greeting(&self, session: &mut Session, _input: &str, _effects: &mut Vec<SideEffect>) -> String {
        pick(GREETINGS, &session.profile.name, &mut session.rng)
    }

    fn handle_ask_bot_name(&self, session: &mut Session, _input: &str, _effects: &mut Vec<SideEffect>) -> String {
        bot_introduction(&self.bot_name, &session.profile.name)
    }

    fn handle_thanks(&self, session: &mut Session, _input: &str, _effects: &mut Vec<SideEffect>) -> String {
        pick(THANKS, &session.profile.name, &mut session.rng)
    }

    fn handle_goodbye(&self, session: &mut Session, _input: &str, _effects: &mut Vec<SideEffect>) -> String {
        pick(FAREWELLS, &session.profile.name, &mut session.rng)
    }

    fn handle_add_task(&self, session: &mut Session, input: &str, effects: &mut Vec<SideEffect>) -> String {
        let title = self
            .patterns
            .capture(Intent::AddTask, input, "title")
            .unwrap_or_default();

        let reminder = match self.patterns.capture(Intent::AddTask, input, "due") {
            Some(phrase) => match parse_due_date(&phrase, session.clock().today()) {
                Some(date) => Some(date),
                None => {
                    debug!(phrase = %phrase, "unreadable due date");
                    return format!(
                        "I can add '{}', but I couldn't understand the date '{}'. Please use a clear date like 'tomorrow', 'in 7 days', or 'YYYY-MM-DD'.",
                        title, phrase
                    );
                }
            },
            None => None,
        };

        let id = session.tasks.add(title.clone(), "", reminder);
        info!(session = %session.id, %id, title = %title, "task added");
        effects.push(SideEffect::TaskAdded {
            id,
            title: title.clone(),
        });

        match reminder {
            Some(date) => format!(
                "Okay, I've added '{}' to your tasks with a reminder for {}.",
                title,
                date.format("%Y-%m-%d")
            ),
            None => format!("Okay, I've added '{}' to your tasks.", title),
        }
    }

    fn handle_show_tasks(&self, session: &mut Session, _input: &str, _effects: &mut Vec<SideEffect>) -> String {
        let tasks = session.tasks.list_all();
        if tasks.is_empty() {
            return "You don't have any tasks right now. Would you like to add one?".to_string();
        }
        let lines: Vec<String> = tasks.iter().map(|t| format!("- {}", t)).collect();
        format!("Here are your current tasks:\n{}", lines.join("\n"))
    }

    fn handle_complete_task(&self, session: &mut Session, input: &str, effects: &mut Vec<SideEffect>) -> String {
        let title = self
            .patterns
            .capture(Intent::CompleteTask, input, "title")
            .unwrap_or_default();

        if session.tasks.mark_completed(&title) {
            info!(session = %session.id, title = %title, "task completed");
            effects.push(SideEffect::TaskCompleted(title.clone()));
            format!(
                "Great! Task '{}' marked as completed. Well done, {}!",
                title, session.profile.name
            )
        } else {
            format!(
                "I couldn't find a task named '{}' to mark as complete. Please check the spelling.",
                title
            )
        }
    }

    fn handle_delete_task(&self, session: &mut Session, input: &str, effects: &mut Vec<SideEffect>) -> String {
        let title = self
            .patterns
            .capture(Intent::DeleteTask, input, "title")
            .unwrap_or_default();

        if session.tasks.delete(&title) {
            info!(session = %session.id, title = %title, "task deleted");
            effects.push(SideEffect::TaskDeleted(title.clone()));
            format!("Okay, I've deleted task '{}'.", title)
        } else {
            format!(
                "I couldn't find a task named '{}' to delete. Please check the spelling.",
                title
            )
        }
    }

    fn handle_show_log(&self, session: &mut Session, _input: &str, _effects: &mut Vec<SideEffect>) -> String {
        let recent = session.log.recent(self.recent_log_entries);
        if recent.is_empty() {
            return "No recent activities to show.".to_string();
        }
        let lines: Vec<String> = recent
            .iter()
            .enumerate()
            .map(|(i, entry)| format!("{}. {}", i + 1, entry))
            .collect();
        format!("Here’s a summary of recent actions:\n{}", lines.join("\n"))
    }

    fn handle_topic_info(&self, session: &mut Session, input: &str, effects: &mut Vec<SideEffect>) -> String {
        let topic = self
            .patterns
            .capture(Intent::TopicInfo, input, "topic")
            .map(|t| self.topics.canonical(&t))
            .unwrap_or_default();

        session.dialogue.last_topic = Some(topic.clone());
        effects.push(SideEffect::TopicChanged(topic.clone()));
        self.topics
            .lookup(&topic)
            .unwrap_or(UNKNOWN_TOPIC)
            .to_string()
    }

    fn handle_fallback(&self, session: &mut Session, input: &str, effects: &mut Vec<SideEffect>) -> String {
        let reply = self.knowledge.respond(
            input,
            &mut session.profile,
            session.dialogue.last_topic.as_deref(),
            &mut session.rng,
        );

        if let Some(name) = reply.remembered_name {
            session.dialogue.awaiting_name = false;
            effects.push(SideEffect::NameSet(name));
        }
        if let Some(topic) = reply.remembered_topic {
            effects.push(SideEffect::FavoriteTopicSet(topic));
        }
        if reply.last_topic != session.dialogue.last_topic {
            if let Some(topic) = &reply.last_topic {
                effects.push(SideEffect::TopicChanged(topic.clone()));
            }
            session.dialogue.last_topic = reply.last_topic;
        }

        let text = reply.text;
        if text.trim().is_empty() || text.to_lowercase().contains(NOT_UNDERSTOOD) {
            pick(UNRECOGNIZED, &session.profile.name, &mut session.rng)
        } else {
            text
        }
    }
}

impl Default for DialogueDispatcher {
    fn default() -> Self {
        Self::new(&EngineConfig::default())
    }
}

impl std::fmt::Debug for DialogueDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DialogueDispatcher")
            .field("rules", &self.rules)
            .field("bot_name", &self.bot_name)
            .field("recent_log_entries", &self.recent_log_entries)
            .field("reset_notifier", &self.reset_notifier.is_some())
            .finish()
    }
}
