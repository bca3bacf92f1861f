use crate::common::harness::TerminalTestHarness;
use crossterm::event::{KeyCode, KeyModifiers};
use std::time::Duration;

#[test]
fn test_lines_are_revealed_in_order() {
    let mut harness = TerminalTestHarness::new(80, 24).unwrap();
    harness.submit("whoami").unwrap();

    // Echo and first line right away, then one line per 30ms step
    assert_eq!(harness.transcript_texts().len(), 2);
    harness.render().unwrap();
    harness.assert_screen_not_contains("uid=1000");

    harness.advance(Duration::from_millis(30));
    assert_eq!(harness.transcript_texts().len(), 3);
    harness.advance(Duration::from_millis(30));
    assert_eq!(
        harness.transcript_texts(),
        [
            "whoami",
            "  vineet@command-center \u{2014} Infrastructure Engineer",
            "  Building resilient systems with 99.9% uptime.",
            "  uid=1000(vineet) gid=1000(engineers) groups=27(sudo)",
        ]
    );

    harness.render().unwrap();
    harness.assert_screen_contains("uid=1000");
}

#[test]
fn test_back_to_back_commands_do_not_interleave() {
    let mut harness = TerminalTestHarness::new(80, 24).unwrap();
    harness.submit("whoami").unwrap();
    harness.submit("sudo").unwrap();
    harness.settle();

    let texts = harness.transcript_texts();
    let sudo_at = texts.iter().position(|t| t == "sudo").unwrap();
    assert_eq!(sudo_at, 4);
    assert_eq!(harness.output_of("whoami").len(), 3);
    assert_eq!(harness.output_of("sudo").len(), 2);
}

#[test]
fn test_no_reveal_config_prints_at_once() {
    let mut config = command_center::config::Config::default();
    config.terminal.reveal_stagger_ms = 0;
    let mut harness = TerminalTestHarness::with_config(80, 24, config).unwrap();
    harness.submit("whoami").unwrap();
    assert_eq!(harness.transcript_texts().len(), 4);
}

#[test]
fn test_clear_empties_transcript_but_keeps_history() {
    let mut harness = TerminalTestHarness::new(80, 24).unwrap();
    harness.run("about").unwrap();
    harness.run("clear").unwrap();
    assert!(harness.transcript_texts().is_empty());

    harness.run("clear").unwrap();
    assert!(harness.transcript_texts().is_empty());
    assert_eq!(
        harness.terminal().session().history(),
        ["about", "clear", "clear"]
    );
}

#[test]
fn test_clear_cancels_pending_lines() {
    let mut harness = TerminalTestHarness::new(80, 24).unwrap();
    harness.submit("help").unwrap();
    assert!(harness.terminal().pending_lines() > 0);

    harness.submit("clear").unwrap();
    assert_eq!(harness.terminal().pending_lines(), 0);
    harness.settle();
    assert!(harness.transcript_texts().is_empty());
}

#[test]
fn test_ctrl_l_clears_without_recording() {
    let mut harness = TerminalTestHarness::new(80, 24).unwrap();
    harness.run("whoami").unwrap();
    harness.type_text("ski").unwrap();
    harness
        .send_key(KeyCode::Char('l'), KeyModifiers::CONTROL)
        .unwrap();

    assert!(harness.transcript_texts().is_empty());
    assert_eq!(harness.terminal().session().history(), ["whoami"]);
    assert_eq!(harness.input_buffer(), "ski");
}

#[test]
fn test_focus_returns_after_output_settles() {
    let mut harness = TerminalTestHarness::new(80, 24).unwrap();
    harness.submit("whoami").unwrap();
    harness.send_key(KeyCode::Esc, KeyModifiers::NONE).unwrap();
    assert!(!harness.terminal().is_focused());

    // Last line is due at 60ms, focus comes back focus_delay later
    harness.advance(Duration::from_millis(100));
    assert!(!harness.terminal().is_focused());
    harness.advance(Duration::from_millis(60));
    assert!(harness.terminal().is_focused());
}

#[test]
fn test_long_output_follows_newest_line() {
    let mut harness = TerminalTestHarness::new(80, 12).unwrap();
    harness.run("help").unwrap();
    harness.render().unwrap();

    harness.assert_screen_contains("TIP: Use");
    harness.assert_screen_not_contains("Available Commands");
}
