//! Answer checking - which typed answers count as the correct one.

use awareness_rules::Question;

/// Compares a typed answer against a question's correct answer.
///
/// Answers are trimmed and lower-cased first. A multiple-choice answer is
/// accepted in three forms, tried in order:
///
/// 1. the full option, `"b) an attempt to trick you..."`
/// 2. the option letter alone, `"b"`
/// 3. the option text without its label, `"an attempt to trick you..."`
///
/// Boolean questions accept `true`/`t` or `false`/`f`. Blank answers are never correct.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnswerChecker;

impl AnswerChecker {
    pub fn is_correct(question: &Question, raw_answer: &str) -> bool {
        let answer = raw_answer.trim().to_lowercase();
        if answer.is_empty() {
            return false;
        }

        match question {
            Question::Boolean { correct_value, .. } => {
                if *correct_value {
                    answer == "true" || answer == "t"
                } else {
                    answer == "false" || answer == "f"
                }
            }
            Question::MultipleChoice { correct_option, .. } => {
                Self::matches_full_option(correct_option, &answer)
                    || Self::matches_option_letter(correct_option, &answer)
                    || Self::matches_option_text(correct_option, &answer)
            }
        }
    }

    fn matches_full_option(correct_option: &str, answer: &str) -> bool {
        correct_option.trim().to_lowercase() == answer
    }

    fn matches_option_letter(correct_option: &str, answer: &str) -> bool {
        let Some(letter) = correct_option.trim().chars().next() else {
            return false;
        };
        if !letter.is_alphabetic() {
            return false;
        }
        let mut answer_chars = answer.chars();
        match (answer_chars.next(), answer_chars.next()) {
            (Some(first), None) => letter.to_lowercase().eq(first.to_lowercase()),
            _ => false,
        }
    }

    fn matches_option_text(correct_option: &str, answer: &str) -> bool {
        option_text(correct_option)
            .map(|text| text.to_lowercase() == answer)
            .unwrap_or(false)
    }
}

/// The option text after its `"X)"` label, trimmed. `None` when there is no label or no text.
pub fn option_text(option: &str) -> Option<&str> {
    let (_, text) = option.split_once(')')?;
    let text = text.trim();
    (!text.is_empty()).then_some(text)
}
