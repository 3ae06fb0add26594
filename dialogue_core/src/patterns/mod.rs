//! Pattern Table - the ordered regex rules that recognize each intent.
//!
//! Matching is case-insensitive against the raw input, so captured groups keep
//! the user's original spelling.

use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// A recognized category of user request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Intent {
    /// Empty or whitespace-only input.
    Blank,
    Reset,
    /// "my name is X", "call me X".
    DeclareName,
    /// Unmatched text taken as the user's name during onboarding.
    CaptureName,
    Greeting,
    /// "what is your name", "who are you".
    AskBotName,
    Thanks,
    Goodbye,
    AddTask,
    ShowTasks,
    CompleteTask,
    DeleteTask,
    ShowLog,
    /// "tell me about phishing" and friends.
    TopicInfo,
    /// Delegated to the knowledge engine.
    Fallback,
}

/// Intents with a regex in the pattern table, in table order.
pub const PATTERN_INTENTS: [Intent; 12] = [
    Intent::Reset,
    Intent::DeclareName,
    Intent::Greeting,
    Intent::AskBotName,
    Intent::Thanks,
    Intent::Goodbye,
    Intent::AddTask,
    Intent::ShowTasks,
    Intent::CompleteTask,
    Intent::DeleteTask,
    Intent::ShowLog,
    Intent::TopicInfo,
];

/// Topic alternation shared by the topic-info pattern and the topic library.
pub const TOPIC_ALTERNATION: &str = "phishing|malware|2fa|two-factor authentication|password|encryption|firewall|virus|ransomware|vpn|cybersecurity|data breach|social engineering|spyware|trojan";

/// One regex bound to an intent.
#[derive(Debug, Clone)]
pub struct PatternRule {
    pub intent: Intent,
    pub regex: Regex,
}

/// Ordered collection of intent patterns.
#[derive(Debug, Clone)]
pub struct PatternTable {
    rules: Vec<PatternRule>,
}

static STANDARD_TABLE: LazyLock<PatternTable> = LazyLock::new(|| {
    let topic_info = format!(
        r"(?i)^(tell me about|what is|explain|define|can you tell me about)\s+(?P<topic>{})$",
        TOPIC_ALTERNATION
    );
    PatternTable::from_sources(&[
        (
            Intent::Reset,
            r"(?i)^(reset|start over|clear conversation|new conversation)$",
        ),
        (
            Intent::DeclareName,
            r"(?i)^(my name is|i am|you can call me|call me)\s+(?P<name>.+)$",
        ),
        (
            Intent::Greeting,
            r"(?i)^(hi|hello|hey|good (morning|afternoon|evening))\b",
        ),
        (
            Intent::AskBotName,
            r"(?i)^(what is your name\??|who are you\??|tell me about yourself\??|your name\??)$",
        ),
        (
            Intent::Thanks,
            r"(?i)^(thank you|thanks|cheers|much appreciated)\b",
        ),
        (Intent::Goodbye, r"(?i)^(bye|goodbye|see you|farewell|later)\b"),
        (
            Intent::AddTask,
            r"(?i)^(add|create|new)\s+(a\s*)?(task|to-do|item|chore)[:\s]*(?P<title>.+?)(?: (due|on|by|at)\s*(?P<due>.+))?$",
        ),
        (
            Intent::ShowTasks,
            r"(?i)(show|list|display|view|what are|tell me my)\s+(my\s*)?(tasks|to-dos|items|agenda|outstanding|things to do)$",
        ),
        (
            Intent::CompleteTask,
            r"(?i)(complete|finish|done with|mark as done)\s+(task|to-do|item)?\s*[:\s]*(?P<title>.+)$",
        ),
        (
            Intent::DeleteTask,
            r"(?i)(delete|remove|erase)\s+(task|to-do|item)?\s*[:\s]*(?P<title>.+)$",
        ),
        (
            Intent::ShowLog,
            r"(?i)^(show|display|what's\s+in\s+the|get|give\s+me)\s+(my\s+)?(activity\s+)?log(s)?(\s+please)?\s*$",
        ),
        (Intent::TopicInfo, topic_info.as_str()),
    ])
});

impl PatternTable {
    /// The table used by the assistant.
    pub fn standard() -> Self {
        STANDARD_TABLE.clone()
    }

    /// Compile a table from `(intent, pattern)` pairs, keeping their order.
    ///
    /// # Panics
    ///
    /// Panics if a pattern is not a valid regex; patterns are compile-time constants.
    fn from_sources(sources: &[(Intent, &str)]) -> Self {
        let rules = sources
            .iter()
            .map(|(intent, source)| PatternRule {
                intent: *intent,
                regex: Regex::new(source).expect("valid intent regex"),
            })
            .collect();
        Self { rules }
    }

    /// Intents in table order.
    pub fn intents(&self) -> impl Iterator<Item = Intent> + '_ {
        self.rules.iter().map(|r| r.intent)
    }

    pub fn regex(&self, intent: Intent) -> Option<&Regex> {
        self.rules
            .iter()
            .find(|r| r.intent == intent)
            .map(|r| &r.regex)
    }

    /// Whether `input` matches the pattern for `intent`. Intents without a pattern never match.
    pub fn is_match(&self, intent: Intent, input: &str) -> bool {
        self.regex(intent).is_some_and(|re| re.is_match(input))
    }

    pub fn captures<'t>(&self, intent: Intent, input: &'t str) -> Option<Captures<'t>> {
        self.regex(intent).and_then(|re| re.captures(input))
    }

    /// A named group from the intent's pattern, trimmed. Empty groups count as absent.
    pub fn capture(&self, intent: Intent, input: &str, group: &str) -> Option<String> {
        self.captures(intent, input)
            .and_then(|caps| caps.name(group).map(|m| m.as_str().trim().to_string()))
            .filter(|s| !s.is_empty())
    }

    /// First intent among `candidates` (in the order given) whose pattern matches.
    pub fn first_match(&self, input: &str, candidates: &[Intent]) -> Option<Intent> {
        candidates
            .iter()
            .copied()
            .find(|intent| self.is_match(*intent, input))
    }
}

impl Default for PatternTable {
    fn default() -> Self {
        Self::standard()
    }
}
