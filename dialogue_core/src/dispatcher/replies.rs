//! Canned reply templates. `{name}` is replaced with the user's name.

use rand::seq::IndexedRandom;
use rand::Rng;

pub const GREETINGS: &[&str] = &[
    "Hello, {name}! How can I assist you with cybersecurity today?",
    "Hi there, {name}! Ready to learn more about staying safe online?",
    "Greetings, {name}! What's on your mind regarding cybersecurity?",
    "Hey, {name}! How can I help secure your digital life?",
];

pub const THANKS: &[&str] = &[
    "You're welcome!",
    "My pleasure, always happy to help!",
    "No problem at all!",
    "Glad I could assist!",
];

pub const FAREWELLS: &[&str] = &[
    "Goodbye! Stay safe online!",
    "Farewell! Remember to practice good cybersecurity habits!",
    "See you later, {name}! Have a secure day!",
    "Until next time! Keep your digital guard up!",
];

pub const UNRECOGNIZED: &[&str] = &[
    "I'm sorry, I didn't quite understand that. Can you rephrase or try a command like 'add task', 'show tasks', 'start quiz', or 'show activity log'?",
    "My apologies, I'm still learning! Perhaps you could try a command like 'tell me about phishing' or 'set reminder'?",
    "I'm not sure what you mean. Please use simple commands like 'reset', 'show tasks', or ask a question about a cybersecurity topic.",
    "Could you please clarify? I can help with tasks, reminders, quizzes, and cybersecurity information.",
];

pub const RESET_ACK: &str = "Okay, resetting our conversation. What's your name?";

/// Phrase in a knowledge reply that means it had nothing useful to say.
pub const NOT_UNDERSTOOD: &str = "i don't understand";

/// Pick one template at random and fill in the name.
pub fn pick<R: Rng + ?Sized>(templates: &[&str], name: &str, rng: &mut R) -> String {
    templates
        .choose(rng)
        .map(|t| t.replace("{name}", name))
        .unwrap_or_default()
}

pub fn nice_to_meet(name: &str) -> String {
    format!("Nice to meet you, {}! How can I help you stay cyber-safe today?", name)
}

pub fn bot_introduction(bot_name: &str, user_name: &str) -> String {
    format!(
        "I am {}, your personal cybersecurity assistant. And you are, {}?",
        bot_name, user_name
    )
}
