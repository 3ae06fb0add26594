//! Interactive loop over stdin.

use anyhow::Result;
use awareness_rules::EngineConfig;
use dialogue_core::{DialogueDispatcher, Session};
use std::io::{self, BufRead, Write};
use tracing::debug;

const DIVIDER: &str = "----------------------------------------";

fn opening_prompt(bot_name: &str) -> String {
    format!(
        "Hello! I am {}, here to help you stay safe online. What's your name?",
        bot_name
    )
}

/// Run the chat until `exit`, `quit` or end of input.
pub fn run(config: &EngineConfig) -> Result<()> {
    let bot_name = config.bot_name.clone();
    let notifier_bot = bot_name.clone();
    let dispatcher = DialogueDispatcher::new(config).with_reset_notifier(move || {
        println!("{}", DIVIDER);
        println!("{}", opening_prompt(&notifier_bot));
    });
    let mut session = Session::new(config);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("{}", opening_prompt(&bot_name));
    loop {
        prompt("You")?;
        let Some(line) = lines.next().transpose()? else {
            break;
        };
        let command = line.trim().to_lowercase();

        match command.as_str() {
            "exit" | "quit" => {
                println!("{}: Goodbye! Stay safe online!", bot_name);
                break;
            }
            "quiz" | "start quiz" => run_quiz(&mut session, &mut lines, &bot_name)?,
            ":state" => println!("{}", serde_json::to_string_pretty(&session.snapshot())?),
            _ => {
                let turn = dispatcher.resolve(&mut session, &line);
                debug!(intent = ?turn.intent, effects = turn.effects.len(), "turn complete");
                println!("{}: {}", bot_name, turn.response);
            }
        }
    }
    Ok(())
}

fn run_quiz<I>(session: &mut Session, lines: &mut I, bot_name: &str) -> Result<()>
where
    I: Iterator<Item = io::Result<String>>,
{
    session.start_quiz();
    println!(
        "{}: Let's test your cybersecurity knowledge! Type 'stop' to end early.",
        bot_name
    );

    while let Some(question) = session.current_question() {
        println!();
        println!(
            "Question {}/{}: {}",
            session.quiz.current_question_number(),
            session.quiz.total_questions(),
            question.text()
        );
        for option in question.options() {
            println!("  {}", option);
        }
        println!("{}", question.answer_hint());

        prompt("Answer")?;
        let Some(answer) = lines.next().transpose()? else {
            break;
        };
        if answer.trim().eq_ignore_ascii_case("stop") {
            break;
        }

        let feedback = session.submit_quiz_answer(&answer)?;
        let verdict = if feedback.correct { "Correct!" } else { "Not quite." };
        println!("{} {}", verdict, feedback.explanation);

        if !session.advance_quiz() {
            break;
        }
    }

    let outcome = session.end_quiz();
    println!();
    println!("{}: {}", bot_name, outcome);
    Ok(())
}

fn prompt(label: &str) -> io::Result<()> {
    print!("{}> ", label);
    io::stdout().flush()
}
