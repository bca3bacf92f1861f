use crate::common::harness::TerminalTestHarness;
use command_center::view::theme::Theme;

#[test]
fn test_goto_alias_navigates() {
    let mut harness = TerminalTestHarness::new(100, 30).unwrap();
    harness.run("goto projects").unwrap();

    assert_eq!(harness.navigator().calls(), ["projects"]);
    assert_eq!(
        harness.output_of("goto projects"),
        ["  Navigating to projects..."]
    );
    assert_eq!(harness.terminal().current_section(), Some("projects"));
}

#[test]
fn test_goto_home_resolves_to_hero() {
    let mut harness = TerminalTestHarness::new(100, 30).unwrap();
    harness.run("goto home").unwrap();
    assert_eq!(harness.navigator().calls(), ["hero"]);
    assert_eq!(harness.output_of("goto home"), ["  Navigating to home..."]);
}

#[test]
fn test_goto_raw_anchor_passes_through() {
    let mut harness = TerminalTestHarness::new(100, 30).unwrap();
    harness.run("goto hero").unwrap();
    assert_eq!(harness.navigator().calls(), ["hero"]);
    assert_eq!(harness.terminal().current_section(), Some("hero"));
}

#[test]
fn test_goto_unknown_section() {
    let mut harness = TerminalTestHarness::new(100, 30).unwrap();
    harness.run("goto about").unwrap();
    harness.run("goto nowhere").unwrap();

    assert_eq!(harness.navigator().calls(), ["about", "nowhere"]);
    assert_eq!(
        harness.output_of("goto nowhere"),
        ["  Section \"nowhere\" not found. Try: ls"]
    );
    // A failed lookup leaves the previous section current
    assert_eq!(harness.terminal().current_section(), Some("about"));
}

#[test]
fn test_bare_goto_prints_usage() {
    let mut harness = TerminalTestHarness::new(100, 30).unwrap();
    harness.run("goto").unwrap();

    let output = harness.output_of("goto");
    assert_eq!(output[0], "  Usage: goto [section]");
    assert!(output[1].contains("home, about"));
    assert!(harness.navigator().calls().is_empty());
}

#[test]
fn test_header_highlights_current_section() {
    let mut harness = TerminalTestHarness::new(100, 30).unwrap();
    harness.run("goto skills").unwrap();
    harness.render().unwrap();

    let header = harness.screen_row(0);
    let x = header.find("skills").unwrap() as u16;
    let cell = harness.buffer().cell((x, 0)).unwrap();
    assert_eq!(cell.bg, Theme::default_theme().header_active_bg);

    let other = header.find("contact").unwrap() as u16;
    let cell = harness.buffer().cell((other, 0)).unwrap();
    assert_ne!(cell.bg, Theme::default_theme().header_active_bg);
}
