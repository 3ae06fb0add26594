//! Knowledge Engine - the free-form responder used when no command matched.
//!
//! A reply is built in four passes over the lower-cased input:
//! 1. **Sentiment**: the first matching emotional cue sets an empathetic prefix
//! 2. **Memory**: "my name is ..." and "i'm interested in ..." update the profile
//! 3. **Content**: a follow-up elaborates on the last topic, otherwise the first
//!    matching keyword supplies a randomly chosen tip
//! 4. **Composition**: prefix + content, falling back to a help message

mod tables;

pub use tables::*;

use awareness_rules::{capitalize_name, UserProfile};
use rand::seq::IndexedRandom;
use rand::Rng;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::LazyLock;
use tracing::debug;

static NAME_MEMORY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(my name is|i am)\s+([a-z]+)").expect("valid regex"));
static TOPIC_MEMORY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(i'm interested in|my favorite topic is|i like)\s+([a-z\s]+)").expect("valid regex")
});

/// A keyword with its tip variants.
#[derive(Debug, Clone)]
pub struct KeywordEntry {
    pub keyword: String,
    pub responses: Vec<String>,
}

/// Result of one knowledge-engine turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeReply {
    pub text: String,
    /// The last topic after this turn; unchanged unless a keyword matched.
    pub last_topic: Option<String>,
    /// Set when the user's name was picked up from the input.
    pub remembered_name: Option<String>,
    /// Set when a favorite topic was picked up from the input.
    pub remembered_topic: Option<String>,
}

/// Sentiment, memory and keyword responder.
#[derive(Debug, Clone)]
pub struct KnowledgeEngine {
    sentiments: Vec<(String, String)>,
    keywords: Vec<KeywordEntry>,
    elaborations: HashMap<String, String>,
    follow_ups: Vec<String>,
    default_help: String,
}

impl KnowledgeEngine {
    /// Engine loaded with the built-in cybersecurity content.
    pub fn standard() -> Self {
        Self {
            sentiments: SENTIMENTS
                .iter()
                .map(|(cue, prefix)| (cue.to_string(), prefix.to_string()))
                .collect(),
            keywords: KEYWORDS
                .iter()
                .map(|(keyword, responses, _)| KeywordEntry {
                    keyword: keyword.to_string(),
                    responses: responses.iter().map(|r| r.to_string()).collect(),
                })
                .collect(),
            elaborations: KEYWORDS
                .iter()
                .map(|(keyword, _, more)| (keyword.to_string(), more.to_string()))
                .collect(),
            follow_ups: FOLLOW_UP_PHRASES.iter().map(|p| p.to_string()).collect(),
            default_help: DEFAULT_HELP.to_string(),
        }
    }

    /// Build a reply, updating `profile` with anything the user told us.
    pub fn respond<R: Rng + ?Sized>(
        &self,
        input: &str,
        profile: &mut UserProfile,
        last_topic: Option<&str>,
        rng: &mut R,
    ) -> KnowledgeReply {
        let lower = input.to_lowercase();
        let mut reply = KnowledgeReply {
            text: String::new(),
            last_topic: last_topic.map(str::to_string),
            remembered_name: None,
            remembered_topic: None,
        };

        let sentiment_prefix = self.detect_sentiment(&lower);
        let sentiment_detected = sentiment_prefix.is_some();
        let mut main = String::new();
        let mut greeted = false;
        let mut direct_memory = false;

        if let Some(name) = NAME_MEMORY
            .captures(&lower)
            .and_then(|caps| caps.get(2))
            .map(|m| m.as_str())
            .filter(|s| !s.is_empty())
        {
            profile.name = capitalize_name(name);
            main.push_str(&format!("Hello {}! It's nice to meet you. ", profile.name));
            greeted = true;
            direct_memory = true;
            reply.remembered_name = Some(profile.name.clone());
            debug!(name = %profile.name, "remembered user name");
        }

        if let Some(topic) = TOPIC_MEMORY
            .captures(&lower)
            .and_then(|caps| caps.get(2))
            .map(|m| m.as_str().trim())
            .filter(|s| !s.is_empty())
        {
            profile.favorite_topic = Some(topic.to_string());
            main.push_str(&format!(
                "Great! I'll remember that you're interested in {}. It's a crucial part of staying safe online. ",
                topic
            ));
            direct_memory = true;
            reply.remembered_topic = Some(topic.to_string());
            debug!(topic, "remembered favorite topic");
        }

        if !direct_memory || sentiment_detected || main.trim().is_empty() {
            let elaboration = self
                .is_follow_up(&lower)
                .then(|| last_topic.and_then(|t| self.elaborations.get(t)))
                .flatten();

            if let Some(more) = elaboration {
                main.push_str(more);
            } else if let Some(entry) = self.match_keyword(&lower) {
                let tip = entry
                    .responses
                    .choose(rng)
                    .map(String::as_str)
                    .unwrap_or_default();
                reply.last_topic = Some(entry.keyword.clone());
                main.push_str(&self.personalize(tip, &lower, profile, greeted));
            }
        }

        let prefix = sentiment_prefix.unwrap_or_default();
        let combined = format!("{}{}", prefix, main);
        reply.text = if combined.trim().is_empty() {
            self.default_help.clone()
        } else if sentiment_detected && main.trim().is_empty() {
            format!("{}{}", prefix, self.default_help).trim().to_string()
        } else {
            combined.trim().to_string()
        };
        reply
    }

    /// Prefix of the first sentiment cue found in the input.
    pub fn detect_sentiment(&self, lower: &str) -> Option<&str> {
        self.sentiments
            .iter()
            .find(|(cue, _)| lower.contains(cue.as_str()))
            .map(|(_, prefix)| prefix.as_str())
    }

    pub fn is_follow_up(&self, lower: &str) -> bool {
        self.follow_ups.iter().any(|p| lower.contains(p.as_str()))
    }

    /// First keyword (in table order) contained in the input.
    pub fn match_keyword(&self, lower: &str) -> Option<&KeywordEntry> {
        self.keywords
            .iter()
            .find(|entry| lower.contains(entry.keyword.as_str()))
    }

    pub fn elaboration(&self, topic: &str) -> Option<&str> {
        self.elaborations.get(topic).map(String::as_str)
    }

    pub fn default_help(&self) -> &str {
        &self.default_help
    }

    fn personalize(&self, tip: &str, lower: &str, profile: &UserProfile, greeted: bool) -> String {
        let favorite = profile
            .favorite_topic
            .as_deref()
            .filter(|t| !t.is_empty() && lower.contains(t.to_lowercase().as_str()));

        match favorite {
            Some(topic) => format!("As someone interested in {}, {} ", topic, tip),
            None if profile.has_name() && !greeted => format!("Hi {}, {} ", profile.name, tip),
            None => tip.to_string(),
        }
    }
}

impl Default for KnowledgeEngine {
    fn default() -> Self {
        Self::standard()
    }
}

/// Explanations for the topic-info intent.
#[derive(Debug, Clone)]
pub struct TopicLibrary {
    entries: HashMap<String, String>,
    aliases: HashMap<String, String>,
}

impl TopicLibrary {
    pub fn standard() -> Self {
        Self {
            entries: TOPIC_INFO
                .iter()
                .map(|(topic, text)| (topic.to_string(), text.to_string()))
                .collect(),
            aliases: TOPIC_ALIASES
                .iter()
                .map(|(alias, topic)| (alias.to_string(), topic.to_string()))
                .collect(),
        }
    }

    /// Canonical key for a topic as typed ("Two-Factor Authentication" -> "2fa").
    pub fn canonical(&self, topic: &str) -> String {
        let lower = topic.trim().to_lowercase();
        self.aliases.get(&lower).cloned().unwrap_or(lower)
    }

    /// Explanation for a topic, if covered.
    pub fn lookup(&self, topic: &str) -> Option<&str> {
        self.entries.get(&self.canonical(topic)).map(String::as_str)
    }
}

impl Default for TopicLibrary {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(5)
    }

    #[test]
    fn test_keyword_sets_topic() {
        let engine = KnowledgeEngine::standard();
        let mut profile = UserProfile::default();

        let reply = engine.respond("any scam advice?", &mut profile, None, &mut rng());
        assert_eq!(reply.last_topic.as_deref(), Some("scam"));
        assert!(KEYWORDS[1].1.iter().any(|tip| reply.text.contains(tip)));
    }

    #[test]
    fn test_keyword_table_order() {
        let engine = KnowledgeEngine::standard();
        let mut profile = UserProfile::default();

        let reply = engine.respond("phishing password", &mut profile, None, &mut rng());
        assert_eq!(reply.last_topic.as_deref(), Some("password"));
    }

    #[test]
    fn test_follow_up_uses_last_topic() {
        let engine = KnowledgeEngine::standard();
        let mut profile = UserProfile::default();

        let reply = engine.respond("tell me more", &mut profile, Some("malware"), &mut rng());
        assert_eq!(reply.text, engine.elaboration("malware").unwrap());
        assert_eq!(reply.last_topic.as_deref(), Some("malware"));
    }

    #[test]
    fn test_follow_up_without_topic_falls_to_default() {
        let engine = KnowledgeEngine::standard();
        let mut profile = UserProfile::default();

        let reply = engine.respond("tell me more", &mut profile, None, &mut rng());
        assert_eq!(reply.text, DEFAULT_HELP);
        assert!(reply.last_topic.is_none());
    }

    #[test]
    fn test_sentiment_only_gets_default() {
        let engine = KnowledgeEngine::standard();
        let mut profile = UserProfile::default();

        let reply = engine.respond("I feel so worried", &mut profile, None, &mut rng());
        assert_eq!(
            reply.text,
            format!("It's completely understandable to feel that way. {}", DEFAULT_HELP)
        );
    }

    #[test]
    fn test_sentiment_with_keyword() {
        let engine = KnowledgeEngine::standard();
        let mut profile = UserProfile::default();

        let reply = engine.respond("confused about privacy", &mut profile, None, &mut rng());
        assert!(reply
            .text
            .starts_with("It's okay to feel confused, cybersecurity can be complex. "));
        assert_eq!(reply.last_topic.as_deref(), Some("privacy"));
    }

    #[test]
    fn test_first_sentiment_wins() {
        let engine = KnowledgeEngine::standard();
        assert_eq!(
            engine.detect_sentiment("frustrated and worried"),
            Some("It's completely understandable to feel that way. ")
        );
    }

    #[test]
    fn test_name_memory() {
        let engine = KnowledgeEngine::standard();
        let mut profile = UserProfile::default();

        let reply = engine.respond("so my name is dana", &mut profile, None, &mut rng());
        assert_eq!(profile.name, "Dana");
        assert_eq!(reply.remembered_name.as_deref(), Some("Dana"));
        assert_eq!(reply.text, "Hello Dana! It's nice to meet you.");
    }

    #[test]
    fn test_topic_memory_and_personalization() {
        let engine = KnowledgeEngine::standard();
        let mut profile = UserProfile::default();

        let reply = engine.respond("honestly i like privacy", &mut profile, None, &mut rng());
        assert_eq!(profile.favorite_topic.as_deref(), Some("privacy"));
        assert!(reply.text.starts_with("Great! I'll remember that you're interested in privacy."));
        // Memory alone satisfies the turn, so no keyword tip is added.
        assert!(reply.last_topic.is_none());

        let reply = engine.respond("privacy on social media", &mut profile, None, &mut rng());
        assert!(reply.text.starts_with("As someone interested in privacy, "));
    }

    #[test]
    fn test_named_user_gets_greeting_prefix() {
        let engine = KnowledgeEngine::standard();
        let mut profile = UserProfile::default();
        profile.set_name("kim");

        let reply = engine.respond("what about 2fa", &mut profile, None, &mut rng());
        assert!(reply.text.starts_with("Hi Kim, "));
    }

    #[test]
    fn test_no_second_greeting_after_name_memory() {
        let engine = KnowledgeEngine::standard();
        let mut profile = UserProfile::default();
        profile.set_name("kim");

        let reply = engine.respond(
            "so my name is dana and i'm worried about passwords",
            &mut profile,
            None,
            &mut rng(),
        );
        assert_eq!(profile.name, "Dana");
        assert!(reply.text.contains("Hello Dana!"));
        assert!(!reply.text.contains("Hi Dana,"));
        assert_eq!(reply.last_topic.as_deref(), Some("password"));
    }

    #[test]
    fn test_placeholder_name_is_not_greeted() {
        let engine = KnowledgeEngine::standard();
        let mut profile = UserProfile::default();

        let reply = engine.respond("what about 2fa", &mut profile, None, &mut rng());
        assert!(!reply.text.starts_with("Hi "));
    }

    #[test]
    fn test_unmatched_input() {
        let engine = KnowledgeEngine::standard();
        let mut profile = UserProfile::default();

        let reply = engine.respond("the weather is nice", &mut profile, None, &mut rng());
        assert_eq!(reply.text, DEFAULT_HELP);
    }

    #[test]
    fn test_topic_library() {
        let library = TopicLibrary::standard();
        assert_eq!(library.canonical("Two-Factor Authentication"), "2fa");
        assert_eq!(library.lookup("VPN"), library.lookup("vpn"));
        assert!(library.lookup("data breach").is_some());
        assert!(library.lookup("cats").is_none());
    }
}
