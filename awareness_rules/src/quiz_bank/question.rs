//! Quiz question definitions.

use serde::{Deserialize, Serialize};

/// A quiz question. Each variant carries only what it needs to be checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Question {
    /// Options are labelled `"A) ..."`, `"B) ..."`; `correct_option` is one of them verbatim.
    MultipleChoice {
        text: String,
        options: Vec<String>,
        correct_option: String,
        explanation: String,
    },

    Boolean {
        text: String,
        correct_value: bool,
        explanation: String,
    },
}

impl Question {
    /// Create a multiple-choice question.
    pub fn multiple_choice<S: Into<String>>(
        text: impl Into<String>,
        options: impl IntoIterator<Item = S>,
        correct_option: impl Into<String>,
        explanation: impl Into<String>,
    ) -> Self {
        Question::MultipleChoice {
            text: text.into(),
            options: options.into_iter().map(Into::into).collect(),
            correct_option: correct_option.into(),
            explanation: explanation.into(),
        }
    }

    /// Create a true/false question.
    pub fn boolean(text: impl Into<String>, correct_value: bool, explanation: impl Into<String>) -> Self {
        Question::Boolean {
            text: text.into(),
            correct_value,
            explanation: explanation.into(),
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Question::MultipleChoice { text, .. } | Question::Boolean { text, .. } => text,
        }
    }

    pub fn explanation(&self) -> &str {
        match self {
            Question::MultipleChoice { explanation, .. }
            | Question::Boolean { explanation, .. } => explanation,
        }
    }

    /// Choices to show the user. Boolean questions offer "True" and "False".
    pub fn options(&self) -> Vec<&str> {
        match self {
            Question::MultipleChoice { options, .. } => options.iter().map(String::as_str).collect(),
            Question::Boolean { .. } => vec!["True", "False"],
        }
    }

    /// The correct answer as displayed text.
    pub fn correct_answer(&self) -> &str {
        match self {
            Question::MultipleChoice { correct_option, .. } => correct_option,
            Question::Boolean { correct_value: true, .. } => "True",
            Question::Boolean { correct_value: false, .. } => "False",
        }
    }

    /// One-line instruction telling the user how to answer.
    pub fn answer_hint(&self) -> &'static str {
        match self {
            Question::MultipleChoice { .. } => {
                "Please choose an option (e.g., A, B, C, or D), or type the full answer:"
            }
            Question::Boolean { .. } => "Please type 'True' or 'False'.",
        }
    }
}
