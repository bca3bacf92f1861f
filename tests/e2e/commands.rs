use crate::common::harness::TerminalTestHarness;

fn harness() -> TerminalTestHarness {
    TerminalTestHarness::new(100, 40).unwrap()
}

#[test]
fn test_skills_matrix() {
    let mut harness = harness();
    harness.run("skills").unwrap();

    let output = harness.output_of("skills");
    assert!(output.iter().any(|l| l.contains("Technical Skill Matrix")));
    for category in ["Infrastructure", "Cloud", "Automation", "Development", "AI/ML"] {
        assert!(
            output
                .iter()
                .any(|l| l.trim_start().starts_with(category) && l.ends_with('%')),
            "missing proficiency row for {category}"
        );
    }

    harness.render().unwrap();
    harness.assert_screen_contains("Technical Skill Matrix");
    harness.assert_screen_contains("95%");
}

#[test]
fn test_input_is_normalized() {
    let mut harness = harness();
    harness.run("  WhoAmI  ").unwrap();

    assert_eq!(harness.transcript_texts()[0], "whoami");
    assert_eq!(harness.terminal().session().history(), ["whoami"]);
    assert_eq!(harness.output_of("whoami").len(), 3);
    assert_eq!(harness.input_buffer(), "");
}

#[test]
fn test_cat_readme_and_missing_file() {
    let mut harness = harness();
    harness.run("cat readme.md").unwrap();
    assert!(harness
        .output_of("cat readme.md")
        .iter()
        .any(|l| l.contains("Vineet Kishore \u{2014} Portfolio")));

    harness.run("cat missing.txt").unwrap();
    assert_eq!(
        harness.output_of("cat missing.txt"),
        ["  cat: missing.txt: No such file"]
    );
}

#[test]
fn test_cat_resume_opens_document() {
    let mut harness = harness();
    harness.run("cat resume.pdf").unwrap();
    assert_eq!(harness.output_of("cat resume.pdf"), ["  Opening resume..."]);
    assert_eq!(harness.opener().opened(), ["Vineet Kishore Resume.pdf"]);
}

#[test]
fn test_unknown_command_is_recorded() {
    let mut harness = harness();
    harness.run("sudo rm -rf /").unwrap();

    let output = harness.output_of("sudo rm -rf /");
    assert_eq!(output.len(), 1);
    assert!(output[0].contains("Command not found: sudo rm -rf /"));
    assert!(output[0].contains("\"help\""));
    assert_eq!(harness.terminal().session().history(), ["sudo rm -rf /"]);
    assert_eq!(harness.terminal().session().history_cursor(), 1);
}

#[test]
fn test_resume_and_rickroll_open_documents() {
    let mut harness = harness();
    harness.run("resume").unwrap();
    harness.run("rickroll").unwrap();

    assert_eq!(
        harness.opener().opened(),
        [
            "Vineet Kishore Resume.pdf",
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ"
        ]
    );
    assert!(harness.output_of("rickroll")[0].contains("Never gonna give you up"));
}

#[test]
fn test_theme_toggles_header_badge() {
    let mut harness = harness();
    harness.run("theme").unwrap();
    assert!(harness.terminal().theme_active());
    assert_eq!(harness.output_of("theme"), ["  Theme: Matrix Green"]);
    harness.render().unwrap();
    harness.assert_screen_contains("[matrix]");

    harness.run("theme").unwrap();
    assert!(!harness.terminal().theme_active());
    assert_eq!(harness.output_of("theme"), ["  Theme: Default"]);
    harness.render().unwrap();
    harness.assert_screen_not_contains("[matrix]");
}

#[test]
fn test_uptime_counts_current_command() {
    let mut harness = harness();
    harness.run("whoami").unwrap();
    harness.advance(std::time::Duration::from_secs(65));
    harness.run("uptime").unwrap();

    let output = harness.output_of("uptime");
    assert_eq!(output.len(), 1);
    assert!(output[0].contains("Session uptime: 00:01:"), "{}", output[0]);
    assert!(output[0].ends_with("Commands run: 2"));
}

#[test]
fn test_ping_uses_random_source() {
    let mut harness = harness();
    harness.run("ping").unwrap();

    let output = harness.output_of("ping");
    assert_eq!(output.len(), 5);
    // FixedRandom(0.5) gives 0.5 * 5 + 1
    assert_eq!(output[1], "  64 bytes: time=3.5ms");
    assert_eq!(output[4], "  --- 3 packets, 0% loss");
}

#[test]
fn test_help_lists_commands() {
    let mut harness = harness();
    harness.run("help").unwrap();

    let output = harness.output_of("help");
    assert!(output.iter().any(|l| l.contains("Available Commands")));
    for name in ["about", "skills", "eastereggs", "goto"] {
        assert!(
            output.iter().any(|l| l.trim_start().starts_with(name)),
            "help does not mention {name}"
        );
    }
}
