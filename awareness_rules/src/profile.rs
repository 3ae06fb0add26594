//! User profile - what the assistant remembers about the person it talks to.

use serde::{Deserialize, Serialize};

/// Placeholder name used until the user introduces themselves.
pub const DEFAULT_USER_NAME: &str = "User";

/// Session-scoped memory about the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub favorite_topic: Option<String>,
    /// The placeholder `name` is reset to.
    placeholder: String,
}

impl UserProfile {
    /// Create a profile using the given placeholder as the initial name.
    pub fn new(placeholder: impl Into<String>) -> Self {
        let placeholder = placeholder.into();
        Self {
            name: placeholder.clone(),
            favorite_topic: None,
            placeholder,
        }
    }

    /// Whether the user has told us a real name.
    pub fn has_name(&self) -> bool {
        !self.name.is_empty() && self.name != self.placeholder
    }

    /// Store a name, normalized to a leading capital and lower-case remainder.
    pub fn set_name(&mut self, raw: &str) {
        self.name = capitalize_name(raw.trim());
    }

    /// Put the name back to the placeholder.
    pub fn reset_name(&mut self) {
        self.name = self.placeholder.clone();
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }
}

impl Default for UserProfile {
    fn default() -> Self {
        Self::new(DEFAULT_USER_NAME)
    }
}

/// Upper-case the first character and lower-case the rest ("aLEX" -> "Alex").
pub fn capitalize_name(raw: &str) -> String {
    let mut chars = raw.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
