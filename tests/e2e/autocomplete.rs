use crate::common::harness::TerminalTestHarness;
use crossterm::event::{KeyCode, KeyModifiers};

fn tab(harness: &mut TerminalTestHarness) {
    harness.send_key(KeyCode::Tab, KeyModifiers::NONE).unwrap();
}

#[test]
fn test_single_match_completes_buffer() {
    let mut harness = TerminalTestHarness::new(80, 24).unwrap();
    harness.type_text("neo").unwrap();
    tab(&mut harness);
    assert_eq!(harness.input_buffer(), "neofetch");
    assert!(harness.transcript_texts().is_empty());
}

#[test]
fn test_multiple_matches_print_hint() {
    let mut harness = TerminalTestHarness::new(80, 24).unwrap();
    harness.type_text("h").unwrap();
    tab(&mut harness);

    assert_eq!(harness.input_buffer(), "h");
    assert_eq!(harness.transcript_texts(), ["  help  history  hack"]);
    assert!(harness.terminal().session().history().is_empty());

    harness.render().unwrap();
    harness.assert_screen_contains("help  history  hack");
}

#[test]
fn test_directive_keywords_complete() {
    let mut harness = TerminalTestHarness::new(80, 24).unwrap();
    harness.type_text("go").unwrap();
    tab(&mut harness);
    assert_eq!(harness.input_buffer(), "goto");
}

#[test]
fn test_no_match_and_empty_are_noops() {
    let mut harness = TerminalTestHarness::new(80, 24).unwrap();
    tab(&mut harness);
    harness.type_text("zzz").unwrap();
    tab(&mut harness);
    tab(&mut harness);

    assert_eq!(harness.input_buffer(), "zzz");
    assert!(harness.transcript_texts().is_empty());
}

#[test]
fn test_hint_waits_for_pending_output() {
    let mut harness = TerminalTestHarness::new(80, 24).unwrap();
    harness.submit("whoami").unwrap();
    harness.type_text("h").unwrap();
    tab(&mut harness);

    // The hint is queued behind the unrevealed whoami lines
    assert_ne!(
        harness.transcript_texts().last().map(String::as_str),
        Some("  help  history  hack")
    );
    harness.settle();
    assert_eq!(
        harness.transcript_texts().last().map(String::as_str),
        Some("  help  history  hack")
    );
}
