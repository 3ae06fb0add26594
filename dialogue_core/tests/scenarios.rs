//! End-to-end conversations driven through the dispatcher.

use awareness_rules::{ActivityLog, EngineConfig, FixedClock};
use chrono::{Local, NaiveDate, TimeZone};
use dialogue_core::{
    AnswerChecker, DialogueDispatcher, DialogueError, Intent, QuizState, ResultTier, Session,
    SideEffect,
};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 14).unwrap()
}

fn start() -> (DialogueDispatcher, Session) {
    let dispatcher = DialogueDispatcher::default();
    let session = Session::default()
        .with_seed(7)
        .with_clock(FixedClock::at_date(today()));
    (dispatcher, session)
}

#[test]
fn test_log_keeps_newest_hundred() {
    let mut log = ActivityLog::new(100);
    let base = Local.with_ymd_and_hms(2025, 1, 1, 8, 0, 0).unwrap();
    for i in 0..150 {
        log.record(base, format!("entry {}", i));
    }

    assert_eq!(log.len(), 100);
    let all = log.all();
    assert_eq!(all.first().unwrap().text, "entry 50");
    assert_eq!(all.last().unwrap().text, "entry 149");

    let recent: Vec<_> = log.recent(10).into_iter().map(|e| e.text).collect();
    let expected: Vec<_> = (140..150).map(|i| format!("entry {}", i)).collect();
    assert_eq!(recent, expected);
}

#[test]
fn test_commands_win_over_name_capture() {
    let (dispatcher, mut session) = start();

    let turn = dispatcher.resolve(&mut session, "show tasks");
    assert_eq!(turn.intent, Intent::ShowTasks);
    assert!(session.dialogue.awaiting_name);

    let turn = dispatcher.resolve(&mut session, "Alex");
    assert_eq!(turn.intent, Intent::CaptureName);
    assert_eq!(session.profile.name, "Alex");
    assert!(!session.dialogue.awaiting_name);
}

#[test]
fn test_task_lifecycle() {
    let (dispatcher, mut session) = start();
    dispatcher.resolve(&mut session, "Sam");

    let added = dispatcher.resolve(&mut session, "add task Update passwords due tomorrow");
    assert!(added.response.contains("2025-03-15"));
    let task = session.tasks.get("update passwords").unwrap();
    assert_eq!(task.reminder_date, NaiveDate::from_ymd_opt(2025, 3, 15));
    assert!(!task.completed);

    let listing = dispatcher.resolve(&mut session, "show my tasks");
    assert_eq!(
        listing.response,
        "Here are your current tasks:\n- [PENDING] Update passwords (Remind: 2025-03-15)"
    );

    let done = dispatcher.resolve(&mut session, "complete task update passwords");
    assert_eq!(
        done.effects,
        vec![SideEffect::TaskCompleted("update passwords".to_string())]
    );
    assert!(session.tasks.get("Update passwords").unwrap().completed);

    let listing = dispatcher.resolve(&mut session, "show tasks");
    assert!(listing.response.contains("[COMPLETED] Update passwords"));

    dispatcher.resolve(&mut session, "delete task Update passwords");
    assert!(session.tasks.is_empty());
}

#[test]
fn test_unreadable_date_adds_nothing() {
    let (dispatcher, mut session) = start();
    dispatcher.resolve(&mut session, "Sam");

    let turn = dispatcher.resolve(&mut session, "add task renew antivirus by whenever");
    assert!(turn.response.contains("couldn't understand the date 'whenever'"));
    assert!(session.tasks.is_empty());
}

#[test]
fn test_full_quiz_run() {
    let (_, mut session) = start();
    session.start_quiz();
    assert_eq!(session.quiz.state(), QuizState::Active);
    assert_eq!(session.quiz.total_questions(), 10);

    let mut answered = 0;
    while let Some(question) = session.current_question() {
        let answer = question.correct_answer().to_string();
        assert!(AnswerChecker::is_correct(question, &answer));
        let feedback = session.submit_quiz_answer(&answer).unwrap();
        assert!(feedback.correct);
        answered += 1;
        if !session.advance_quiz() {
            break;
        }
    }

    let outcome = session.end_quiz();
    assert_eq!(answered, 10);
    assert_eq!(outcome.score, 10);
    assert_eq!(outcome.total, 10);
    assert_eq!(outcome.tier, ResultTier::Perfect);
    assert!(session.current_question().is_none());
    assert_eq!(
        session.submit_quiz_answer("a"),
        Err(DialogueError::QuizNotActive)
    );

    let texts: Vec<_> = session.log.all().into_iter().map(|e| e.text).collect();
    assert_eq!(texts.first().map(String::as_str), Some("Quiz started."));
    assert_eq!(
        texts.last().map(String::as_str),
        Some("Quiz finished with score 10/10.")
    );
    assert_eq!(texts.iter().filter(|t| t.ends_with("- Correct")).count(), 10);
}

#[test]
fn test_quiz_tiers_for_mixed_scores() {
    let (_, mut session) = start();
    session.start_quiz();

    let mut index = 0;
    while let Some(question) = session.current_question() {
        let answer = if index < 5 {
            question.correct_answer().to_string()
        } else {
            "zzz".to_string()
        };
        session.submit_quiz_answer(&answer).unwrap();
        index += 1;
        if !session.advance_quiz() {
            break;
        }
    }

    let outcome = session.end_quiz();
    assert_eq!(outcome.score, 5);
    assert_eq!(outcome.tier, ResultTier::Solid);
}

#[test]
fn test_reset_keeps_tasks() {
    let (dispatcher, mut session) = start();
    dispatcher.resolve(&mut session, "Sam");
    dispatcher.resolve(&mut session, "add task Check firewall");
    dispatcher.resolve(&mut session, "tell me about firewall");

    let turn = dispatcher.resolve(&mut session, "reset");
    assert_eq!(turn.intent, Intent::Reset);
    assert!(session.dialogue.awaiting_name);
    assert!(session.dialogue.last_topic.is_none());
    assert_eq!(session.tasks.len(), 1);

    let turn = dispatcher.resolve(&mut session, "jamie");
    assert_eq!(turn.intent, Intent::CaptureName);
    assert_eq!(session.profile.name, "Jamie");
}

#[test]
fn test_show_log_lists_last_ten() {
    let (dispatcher, mut session) = start();
    dispatcher.resolve(&mut session, "Sam");
    dispatcher.resolve(&mut session, "add task Patch router");
    dispatcher.resolve(&mut session, "what is vpn");
    dispatcher.resolve(&mut session, "thank you");
    dispatcher.resolve(&mut session, "hello");

    let turn = dispatcher.resolve(&mut session, "show activity log");
    let lines: Vec<_> = turn.response.lines().collect();
    assert_eq!(lines.len(), 11);
    assert!(lines[1].starts_with("1. [2025-03-14 12:00:00] "));
    assert!(lines[10].starts_with("10. "));
    assert!(lines[10].ends_with("User Input: \"show activity log\""));
}

#[test]
fn test_topic_then_follow_up() {
    let (dispatcher, mut session) = start();
    dispatcher.resolve(&mut session, "Sam");

    let turn = dispatcher.resolve(&mut session, "tell me about phishing");
    assert_eq!(turn.intent, Intent::TopicInfo);
    assert_eq!(session.dialogue.last_topic.as_deref(), Some("phishing"));

    let more = dispatcher.resolve(&mut session, "tell me more");
    assert_eq!(
        more.response,
        dispatcher.knowledge().elaboration("phishing").unwrap()
    );
}

#[test]
fn test_unknown_follow_up_topic_uses_keywords() {
    let (dispatcher, mut session) = start();
    dispatcher.resolve(&mut session, "Sam");
    dispatcher.resolve(&mut session, "what is vpn");

    let turn = dispatcher.resolve(&mut session, "tell me more about password safety");
    assert_eq!(session.dialogue.last_topic.as_deref(), Some("password"));
    assert!(turn.response.starts_with("Hi Sam, "));
}

#[test]
fn test_favorite_topic_personalizes() {
    let (dispatcher, mut session) = start();
    dispatcher.resolve(&mut session, "Sam");

    let turn = dispatcher.resolve(&mut session, "i'm interested in malware");
    assert!(turn
        .effects
        .contains(&SideEffect::FavoriteTopicSet("malware".to_string())));

    let turn = dispatcher.resolve(&mut session, "any malware tips?");
    assert!(turn.response.starts_with("As someone interested in malware, "));
}

#[test]
fn test_sessions_do_not_share_state() {
    let dispatcher = DialogueDispatcher::new(&EngineConfig::default());
    let mut first = Session::default().with_seed(1);
    let mut second = Session::default().with_seed(2);

    dispatcher.resolve(&mut first, "Ana");
    dispatcher.resolve(&mut first, "add task Rotate keys");

    assert!(second.tasks.is_empty());
    let turn = dispatcher.resolve(&mut second, "Ben");
    assert_eq!(turn.intent, Intent::CaptureName);
    assert_eq!(first.profile.name, "Ana");
    assert_eq!(second.profile.name, "Ben");
}

#[test]
fn test_snapshot_serializes() {
    let (dispatcher, mut session) = start();
    dispatcher.resolve(&mut session, "Sam");
    dispatcher.resolve(&mut session, "add task Lock phone on 2025-04-01");

    let json = serde_json::to_value(session.snapshot()).unwrap();
    assert_eq!(json["profile"]["name"], "Sam");
    assert_eq!(json["dialogue"]["awaiting_name"], false);
    assert_eq!(json["tasks"][0]["title"], "Lock phone");
    assert_eq!(json["tasks"][0]["reminder_date"], "2025-04-01");
    assert_eq!(json["log_entries"], 4);
}
