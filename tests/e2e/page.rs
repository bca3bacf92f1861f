use crate::common::harness::TerminalTestHarness;
use command_center::input::TerminalKey;
use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::style::Modifier;

fn key(harness: &mut TerminalTestHarness, code: KeyCode) {
    harness.send_key(code, KeyModifiers::NONE).unwrap();
}

#[test]
fn test_shortcuts_do_not_fire_while_typing() {
    let mut harness = TerminalTestHarness::new(80, 24).unwrap();
    harness.type_text("fq").unwrap();

    assert_eq!(harness.input_buffer(), "fq");
    assert!(!harness.page().flashlight());
    assert!(!harness.should_quit());
}

#[test]
fn test_escape_then_page_shortcuts() {
    let mut harness = TerminalTestHarness::new(80, 24).unwrap();
    key(&mut harness, KeyCode::Esc);
    assert!(!harness.terminal().is_focused());

    key(&mut harness, KeyCode::Char('f'));
    assert!(harness.page().flashlight());
    harness.render().unwrap();
    harness.assert_screen_contains("i to type");

    key(&mut harness, KeyCode::Char('i'));
    assert!(harness.terminal().is_focused());
    assert_eq!(harness.input_buffer(), "");

    key(&mut harness, KeyCode::Esc);
    key(&mut harness, KeyCode::Char('q'));
    assert!(harness.should_quit());
}

#[test]
fn test_flashlight_dims_older_lines() {
    let mut harness = TerminalTestHarness::new(80, 24).unwrap();
    harness.run("whoami").unwrap();
    key(&mut harness, KeyCode::Esc);
    key(&mut harness, KeyCode::Char('f'));
    harness.render().unwrap();

    // The echo is the oldest of four lines; the last three stay lit
    let echo = harness.buffer().cell((1, 2)).unwrap();
    assert!(echo.modifier.contains(Modifier::DIM));
    let newest = harness.buffer().cell((3, 5)).unwrap();
    assert!(!newest.modifier.contains(Modifier::DIM));
}

#[test]
fn test_ctrl_c_quits_even_while_focused() {
    let mut harness = TerminalTestHarness::new(80, 24).unwrap();
    harness.type_text("abc").unwrap();
    harness
        .send_key(KeyCode::Char('c'), KeyModifiers::CONTROL)
        .unwrap();
    assert!(harness.should_quit());
}

#[test]
fn test_too_small_screen_leaves_terminal_unmounted() {
    for height in [2, 3] {
        let mut harness = TerminalTestHarness::new(80, height).unwrap();
        assert!(!harness.terminal().is_mounted());

        harness.submit("help").unwrap();
        assert!(harness.transcript_texts().is_empty());
        assert!(harness.terminal().session().history().is_empty());
        harness.render().unwrap();
    }
}

#[test]
fn test_page_still_works_without_terminal() {
    let mut harness = TerminalTestHarness::new(80, 2).unwrap();
    key(&mut harness, KeyCode::Char('f'));
    assert!(harness.page().flashlight());
}

#[test]
fn test_input_wider_than_screen_keeps_cursor_visible() {
    let mut harness = TerminalTestHarness::new(80, 24).unwrap();
    for _ in 0..70_000 {
        harness.page_mut().handle_key(TerminalKey::Char('a'));
    }
    for c in "xyz".chars() {
        harness.page_mut().handle_key(TerminalKey::Char(c));
    }
    harness.render().unwrap();

    // Input row is the last row inside the frame; the tail ends one cell
    // before the right border, where the cursor sits
    let row = harness.screen_row(22);
    assert!(row.ends_with("aaxyz \u{2502}"), "{row:?}");

    harness.page_mut().handle_key(TerminalKey::Home);
    harness.render().unwrap();
    let row = harness.screen_row(22);
    assert!(row.contains(" ~ aaaa"), "{row:?}");
    assert!(!row.contains("xyz"), "{row:?}");
}
