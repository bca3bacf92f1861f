use crate::common::harness::TerminalTestHarness;
use crossterm::event::{KeyCode, KeyModifiers};

fn up(harness: &mut TerminalTestHarness) {
    harness.send_key(KeyCode::Up, KeyModifiers::NONE).unwrap();
}

fn down(harness: &mut TerminalTestHarness) {
    harness.send_key(KeyCode::Down, KeyModifiers::NONE).unwrap();
}

#[test]
fn test_history_lists_prior_submissions() {
    let mut harness = TerminalTestHarness::new(100, 40).unwrap();
    for command in ["help", "about", "skills"] {
        harness.run(command).unwrap();
    }
    harness.run("history").unwrap();

    let listed: Vec<String> = harness
        .output_of("history")
        .into_iter()
        .filter(|l| !l.trim().is_empty())
        .collect();
    assert_eq!(listed, ["  1  help", "  2  about", "  3  skills"]);
    assert_eq!(harness.terminal().session().history().len(), 4);
}

#[test]
fn test_history_when_empty() {
    let mut harness = TerminalTestHarness::new(80, 24).unwrap();
    harness.run("history").unwrap();
    assert_eq!(harness.output_of("history"), ["  No commands in history."]);
}

#[test]
fn test_history_listing_is_capped() {
    let mut config = command_center::config::Config::default();
    config.terminal.history_listing_limit = 2;
    config.terminal.reveal_stagger_ms = 0;
    let mut harness = TerminalTestHarness::with_config(80, 24, config).unwrap();
    for command in ["date", "ls", "ping"] {
        harness.run(command).unwrap();
    }
    harness.run("history").unwrap();

    let listed: Vec<String> = harness
        .output_of("history")
        .into_iter()
        .filter(|l| !l.trim().is_empty())
        .collect();
    assert_eq!(listed, ["  2  ls", "  3  ping"]);
}

#[test]
fn test_up_and_down_recall() {
    let mut harness = TerminalTestHarness::new(80, 24).unwrap();
    harness.run("about").unwrap();
    harness.run("skills").unwrap();

    up(&mut harness);
    assert_eq!(harness.input_buffer(), "skills");
    up(&mut harness);
    assert_eq!(harness.input_buffer(), "about");
    // No wrap at the oldest entry
    up(&mut harness);
    assert_eq!(harness.input_buffer(), "about");
    assert_eq!(harness.terminal().session().history_cursor(), 0);

    down(&mut harness);
    assert_eq!(harness.input_buffer(), "skills");
    down(&mut harness);
    assert_eq!(harness.input_buffer(), "");
    assert_eq!(harness.terminal().session().history_cursor(), 2);
    down(&mut harness);
    assert_eq!(harness.terminal().session().history_cursor(), 2);
}

#[test]
fn test_recalled_entry_can_be_resubmitted() {
    let mut harness = TerminalTestHarness::new(80, 24).unwrap();
    harness.run("whois").unwrap();
    up(&mut harness);
    harness
        .send_key(KeyCode::Enter, KeyModifiers::NONE)
        .unwrap();
    harness.settle();

    assert_eq!(harness.terminal().session().history(), ["whois", "whois"]);
    let echoes = harness
        .terminal()
        .transcript()
        .lines()
        .iter()
        .filter(|l| l.is_command())
        .count();
    assert_eq!(echoes, 2);
}

#[test]
fn test_blank_submission_is_ignored() {
    let mut harness = TerminalTestHarness::new(80, 24).unwrap();
    harness.submit("   ").unwrap();
    harness.settle();

    assert!(harness.transcript_texts().is_empty());
    assert!(harness.terminal().session().history().is_empty());
}
