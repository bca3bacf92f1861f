//! Built-in command table
//!
//! Static content for every portfolio command. Handlers read the session
//! and collaborators through [`CommandContext`] and describe side effects as
//! [`Effect`]s instead of performing them.

use super::registry::{CommandContext, CommandEntry, CommandOutput, Effect};
use crate::model::line::{StyledLine, Tone};

/// Width of the name column in `help`.
const HELP_COLUMN: usize = 15;
/// Width of the category column in `skills`.
const SKILL_COLUMN: usize = 17;
/// Width of a proficiency bar.
const BAR_WIDTH: usize = 20;
/// Inner width of the `about` banner.
const BANNER_WIDTH: usize = 38;

const FULL_BLOCK: char = '\u{2588}';
const LIGHT_SHADE: char = '\u{2591}';
const BULLET: &str = " \u{2022} ";

static BUILTIN: &[CommandEntry] = &[
    entry("help", "List available commands", help),
    entry("about", "Who am I \u{2014} the full story", about),
    entry("whoami", "Quick identity summary", whoami),
    entry("skills", "Technical skill matrix", skills),
    entry("experience", "Career timeline", experience),
    entry("education", "Academic background & honors", education),
    entry("projects", "Project portfolio", projects),
    entry("contact", "How to reach me", contact),
    entry("resume", "Download my resume", resume),
    entry("certifications", "Professional certifications", certifications),
    entry("neofetch", "System info (hacker style)", neofetch),
    entry("uptime", "Session uptime", uptime),
    entry("date", "Current date & time", date),
    entry("ls", "List site sections", ls),
    entry("ping", "Test connection", ping),
    entry("whois", "Domain record", whois),
    entry("weather", "Current mood forecast", weather),
    entry("theme", "Toggle terminal theme", theme),
    entry("clear", "Clear terminal", clear),
    entry("history", "Command history", history),
    entry("eastereggs", "Find hidden secrets", eastereggs),
    entry("matrix", "Enter the Matrix", matrix),
    entry("sudo", "Try to get root", sudo),
    entry("hack", "Hack the planet", hack),
    entry("rickroll", "You know what this does", rickroll),
    entry("cowsay", "Moo!", cowsay),
    entry("?", "Full system manifest", manifest),
];

pub(crate) fn builtin_entries() -> Vec<CommandEntry> {
    BUILTIN.to_vec()
}

const fn entry(
    name: &'static str,
    summary: &'static str,
    handler: super::registry::Handler,
) -> CommandEntry {
    CommandEntry {
        name,
        summary,
        handler,
    }
}

/// One-line description of a built-in command, as listed by `help`.
fn summary(name: &str) -> &'static str {
    BUILTIN
        .iter()
        .find(|e| e.name == name)
        .map_or("", |e| e.summary)
}

fn line() -> StyledLine {
    StyledLine::new()
}

fn blank() -> StyledLine {
    StyledLine::blank()
}

fn text(s: &str) -> StyledLine {
    StyledLine::from(s)
}

fn padding(used: &str, width: usize) -> String {
    " ".repeat(width.saturating_sub(used.chars().count()).max(1))
}

fn rule(ch: char, count: usize) -> StyledLine {
    line().tone(format!("  {}", ch.to_string().repeat(count)), Tone::Slate)
}

fn heading(title: &str, rule_len: usize) -> Vec<StyledLine> {
    vec![
        blank(),
        line().tone(format!("  {title}"), Tone::Sky),
        rule('\u{2500}', rule_len),
        blank(),
    ]
}

fn help_row(name: &str, tone: Tone, description: &str) -> StyledLine {
    line()
        .plain("  ")
        .tone(name, tone)
        .plain(format!("{}{description}", padding(name, HELP_COLUMN)))
}

fn help(_: &CommandContext<'_>) -> CommandOutput {
    let mut lines = vec![
        blank(),
        line().tone("  COMMAND CENTER \u{2014} Available Commands", Tone::Sky),
        rule('\u{2550}', 38),
        blank(),
    ];
    for name in [
        "about",
        "whoami",
        "skills",
        "experience",
        "education",
        "projects",
        "contact",
        "certifications",
    ] {
        lines.push(help_row(name, Tone::Green, summary(name)));
    }
    lines.push(blank());
    for name in ["neofetch", "uptime", "date", "ls"] {
        lines.push(help_row(name, Tone::Amber, summary(name)));
    }
    lines.push(help_row("cat [file]", Tone::Amber, "Read a section"));
    for name in ["ping", "weather", "theme", "history"] {
        lines.push(help_row(name, Tone::Amber, summary(name)));
    }
    lines.push(blank());
    lines.push(help_row("goto [section]", Tone::Violet, "Navigate to a section"));
    for name in ["resume", "clear", "eastereggs"] {
        lines.push(help_row(name, Tone::Violet, summary(name)));
    }
    lines.push(blank());
    lines.push(line().tone(
        "  TIP: Use \u{2191}/\u{2193} for history, Tab for autocomplete",
        Tone::Gray,
    ));
    lines.push(blank());
    CommandOutput::lines(lines)
}

fn banner_row(content: StyledLine) -> StyledLine {
    let fill = BANNER_WIDTH.saturating_sub(content.text().chars().count());
    let mut row = line().tone("  \u{2551}", Tone::Blue);
    row.fragments.extend(content.fragments);
    row.plain(" ".repeat(fill)).tone("\u{2551}", Tone::Blue)
}

fn about(_: &CommandContext<'_>) -> CommandOutput {
    let border = "\u{2550}".repeat(BANNER_WIDTH);
    CommandOutput::lines(vec![
        blank(),
        line().tone(format!("  \u{2554}{border}\u{2557}"), Tone::Blue),
        banner_row(line().bold("  VINEET KISHORE")),
        banner_row(text("  Infrastructure Engineer")),
        banner_row(text("  Strategic Technologist")),
        banner_row(text("  Competitive Intelligence Expert")),
        line().tone(format!("  \u{255a}{border}\u{255d}"), Tone::Blue),
        blank(),
        text("  I architect resilient systems that power critical"),
        text("  business operations at scale. From managing"),
        line()
            .plain("  ")
            .tone("Hadoop clusters at HSBC", Tone::Sky)
            .plain(" ensuring"),
        line()
            .plain("  ")
            .tone("99.9% uptime", Tone::Green)
            .plain(" for banking systems, to building"),
        line()
            .plain("  consumer tools like ")
            .tone("Droppy", Tone::Sky)
            .plain(" with ")
            .tone("5,000+", Tone::Green)
            .plain(" users."),
        blank(),
        line()
            .plain("  ")
            .tone("Location:", Tone::Silver)
            .plain(" Singapore / India"),
        line()
            .plain("  ")
            .tone("Focus:", Tone::Silver)
            .plain("    Infrastructure, Data, & AI"),
        line()
            .plain("  ")
            .tone("Passion:", Tone::Silver)
            .plain("  Automation & Competitive Excellence"),
        blank(),
    ])
}

fn whoami(_: &CommandContext<'_>) -> CommandOutput {
    CommandOutput::lines(vec![
        line()
            .tone("  vineet", Tone::Green)
            .plain("@")
            .tone("command-center", Tone::Sky)
            .plain(" \u{2014} Infrastructure Engineer"),
        text("  Building resilient systems with 99.9% uptime."),
        line()
            .plain("  ")
            .tone("uid=1000(vineet) gid=1000(engineers) groups=27(sudo)", Tone::Gray),
    ])
}

fn proficiency_row(name: &str, filled: usize, tone: Tone, percent: u8) -> StyledLine {
    let mut row = line()
        .plain(format!("  {name:<16}"))
        .tone(FULL_BLOCK.to_string().repeat(filled), tone);
    let empty = BAR_WIDTH.saturating_sub(filled);
    if empty > 0 {
        row = row.tone(LIGHT_SHADE.to_string().repeat(empty), Tone::Slate);
    }
    row.plain(format!(" {percent}%"))
}

fn skills(_: &CommandContext<'_>) -> CommandOutput {
    let mut lines = heading("Technical Skill Matrix", 21);
    for (category, items) in [
        ("Infrastructure", ["Docker", "Kubernetes", "Linux", "Nginx"]),
        ("Cloud", ["AWS", "Azure", "GCP", "DigitalOcean"]),
        ("Automation", ["Ansible", "Terraform", "Python", "Bash"]),
        ("Monitoring", ["Prometheus", "Grafana", "ELK", "Datadog"]),
        ("Data", ["Hadoop", "MongoDB", "PostgreSQL", "Redis"]),
        ("Languages", ["Python", "JavaScript", "Go", "SQL"]),
        ("AI/ML", ["LLMs", "N8N", "RAG", "Prompt Engineering"]),
    ] {
        lines.push(
            line()
                .plain("  ")
                .tone(category, Tone::Amber)
                .plain(format!("{}{}", padding(category, SKILL_COLUMN), items.join(BULLET))),
        );
    }
    lines.push(blank());
    lines.push(line().plain("  ").tone("Proficiency:", Tone::Gray));
    lines.push(proficiency_row("Infrastructure", 20, Tone::Green, 95));
    lines.push(proficiency_row("Cloud", 19, Tone::Green, 90));
    lines.push(proficiency_row("Automation", 18, Tone::Green, 88));
    lines.push(proficiency_row("Development", 17, Tone::Sky, 82));
    lines.push(proficiency_row("AI/ML", 15, Tone::Violet, 75));
    lines.push(blank());
    CommandOutput::lines(lines)
}

fn timeline_header(period: &str, tone: Tone, title: &str) -> StyledLine {
    line()
        .plain("  ")
        .tone(period, tone)
        .plain(padding(period, 11))
        .bold(title)
}

fn timeline_detail(detail: &str) -> StyledLine {
    text(&format!("             {detail}"))
}

fn experience(_: &CommandContext<'_>) -> CommandOutput {
    let mut lines = heading("Career Timeline", 15);
    lines.extend([
        timeline_header("2020-2021", Tone::Green, "HSBC Software Development"),
        timeline_detail("Software Engineer"),
        timeline_detail("\u{2022} Managed Hadoop clusters for banking ops"),
        timeline_detail("\u{2022} Automated deployments with Ansible"),
        timeline_detail("\u{2022} Ensured 99.9% uptime for critical systems"),
        timeline_detail("\u{2022} Processed TB-scale data with ETL pipelines"),
        blank(),
        timeline_header("2019", Tone::Amber, "HCL Technologies"),
        timeline_detail("Summer Intern"),
        timeline_detail("\u{2022} Built cross-platform apps with Flutter"),
        timeline_detail("\u{2022} Designed MongoDB schemas for scalable data"),
        blank(),
        timeline_header("2019", Tone::Violet, "Toise Tech Products"),
        timeline_detail("Software Intern"),
        timeline_detail("\u{2022} Developed Flutter mobile applications"),
        timeline_detail("\u{2022} Integrated Firebase for real-time features"),
        blank(),
    ]);
    CommandOutput::lines(lines)
}

fn education(_: &CommandContext<'_>) -> CommandOutput {
    let mut lines = heading("Academic Background", 19);
    lines.extend([
        timeline_header("2017-2021", Tone::Green, "VIT University, Chennai"),
        timeline_detail("B.Tech Computer Science"),
        timeline_detail("Distributed Systems & Data Engineering"),
        blank(),
        timeline_header("CBSE", Tone::Amber, "Summer Fields School, New Delhi"),
        timeline_detail("Senior Secondary (Class XII & X)"),
        blank(),
        line().tone("  Distinctions", Tone::Sky),
        rule('\u{2500}', 12),
        text("  \u{1f3c6} E-Sports Champion \u{2014} VIT Cultural Fest"),
        text("  \u{1f94b} 2x Gold \u{2014} Taekwondo (Zonal & Delhi State)"),
        text("  \u{1f4af} Perfect Score \u{2014} Information Technology"),
        text("  \u{1f399} Debate & Public Speaking Championships"),
        blank(),
    ]);
    CommandOutput::lines(lines)
}

fn projects(_: &CommandContext<'_>) -> CommandOutput {
    let mut lines = heading("Project Portfolio", 17);
    lines.extend([
        line()
            .plain("  ")
            .tone("\u{1f680} Droppy", Tone::Green)
            .plain("              macOS Dynamic Island utility"),
        line()
            .plain("     Users: ")
            .tone("5,000+", Tone::Amber)
            .plain("  Growth: ")
            .tone("100x", Tone::Amber)
            .plain("  Rank: ")
            .tone("#1 Trending", Tone::Amber),
        blank(),
        line()
            .plain("  ")
            .tone("\u{1f3e0} Home Lab", Tone::Green)
            .plain("            Enterprise infrastructure"),
        line()
            .plain("     Uptime: ")
            .tone("99.9%", Tone::Amber)
            .plain("  Monitoring: ")
            .tone("24/7", Tone::Amber)
            .plain("  Self-healing"),
        blank(),
        line()
            .plain("  ")
            .tone("\u{1f916} N8N LLM Pipeline", Tone::Green)
            .plain("    GenAI automation"),
        line()
            .plain("     Efficiency: ")
            .tone("90% time saved", Tone::Amber)
            .plain("  AI-powered filtering"),
        blank(),
        line()
            .plain("  Type ")
            .tone("\"goto projects\"", Tone::Violet)
            .plain(" to view the full project cards."),
        blank(),
    ]);
    CommandOutput::lines(lines)
}

fn contact(_: &CommandContext<'_>) -> CommandOutput {
    let mut lines = heading("Contact Information", 19);
    for (label, value) in [
        ("\u{1f4e7} Email:", "     vineetkishore01@gmail.com"),
        ("\u{1f4bc} LinkedIn:", "  linkedin.com/in/vineetkishore"),
        ("\u{1f419} GitHub:", "    github.com/vineetkishore"),
        ("\u{1f4fa} YouTube:", "   youtube.com/@vineetkishore"),
    ] {
        lines.push(line().plain("  ").tone(label, Tone::Silver).plain(value));
    }
    lines.push(blank());
    lines.push(
        line()
            .plain("  Type ")
            .tone("\"goto contact\"", Tone::Violet)
            .plain(" to jump to the contact section."),
    );
    lines.push(blank());
    CommandOutput::lines(lines)
}

fn resume(ctx: &CommandContext<'_>) -> CommandOutput {
    CommandOutput::line(
        line()
            .plain("  ")
            .tone("Opening resume in new tab...", Tone::Green),
    )
    .with_effect(Effect::OpenDocument(ctx.resume_path.to_string()))
}

fn certifications(_: &CommandContext<'_>) -> CommandOutput {
    let mut lines = heading("Professional Certifications", 26);
    for cert in [
        "AWS Solutions Architect (in progress)",
        "Docker Certified Associate",
        "Kubernetes Administrator (CKA)",
        "Linux Foundation Certified",
    ] {
        lines.push(
            line()
                .plain("  ")
                .tone("\u{2713}", Tone::Green)
                .plain(format!(" {cert}")),
        );
    }
    lines.push(blank());
    CommandOutput::lines(lines)
}

fn neofetch(_: &CommandContext<'_>) -> CommandOutput {
    let art = [
        "        _____",
        "       /     \\",
        "      | () () |",
        "       \\  ^  /",
        "        |||||",
        "        |||||",
    ];
    let fields = [
        ("OS:", "      Web/macOS"),
        ("Host:", "    command-center"),
        ("Kernel:", "  Rust 2021"),
        ("Shell:", "   vineet-zsh 2.0"),
        ("Theme:", "   Dark [Quantum]"),
        ("Stack:", "   Docker/K8s/AWS"),
        ("Editor:", "  VS Code / Vim"),
        ("Coffee:", "  \u{2615} Yes, always"),
    ];
    const ART_COLUMN: usize = 23;

    let mut lines = vec![
        blank(),
        line()
            .tone(art[0], Tone::Sky)
            .plain(padding(art[0], ART_COLUMN))
            .tone("vineet", Tone::Green)
            .plain("@")
            .tone("portfolio", Tone::Sky),
        line()
            .tone(art[1], Tone::Sky)
            .plain(format!("{}{}", padding(art[1], ART_COLUMN), "\u{2500}".repeat(16))),
    ];
    for (i, (label, value)) in fields.iter().enumerate() {
        let row = match art.get(i + 2) {
            Some(art_line) => line()
                .tone(*art_line, Tone::Sky)
                .plain(padding(art_line, ART_COLUMN)),
            None => line().plain(" ".repeat(ART_COLUMN)),
        };
        lines.push(row.tone(*label, Tone::Amber).plain(*value));
    }
    lines.push(blank());
    let mut swatches = line().plain("  ");
    for tone in [
        Tone::Red,
        Tone::Amber,
        Tone::Green,
        Tone::Blue,
        Tone::Violet,
        Tone::Pink,
    ] {
        swatches = swatches.tone(FULL_BLOCK.to_string().repeat(4), tone);
    }
    lines.push(swatches);
    lines.push(blank());
    CommandOutput::lines(lines)
}

fn uptime(ctx: &CommandContext<'_>) -> CommandOutput {
    let secs = ctx.session.elapsed(ctx.clock.now()).as_secs();
    let (h, m, s) = (secs / 3600, (secs / 60) % 60, secs % 60);
    // The running command is recorded after dispatch, so count it here
    let commands_run = ctx.session.history().len() + 1;
    CommandOutput::line(
        line()
            .plain("  Session uptime: ")
            .tone(format!("{h:02}:{m:02}:{s:02}"), Tone::Green)
            .plain("  |  Commands run: ")
            .tone(commands_run.to_string(), Tone::Sky),
    )
}

fn date(ctx: &CommandContext<'_>) -> CommandOutput {
    CommandOutput::line(line().plain("  ").tone(ctx.clock.local_timestamp(), Tone::Green))
}

fn ls(_: &CommandContext<'_>) -> CommandOutput {
    let mut lines = vec![blank()];
    for dir in [
        "about/",
        "experience/",
        "projects/",
        "skills/",
        "education/",
        "terminal/",
        "contact/",
    ] {
        lines.push(
            line()
                .tone("  drwxr-xr-x", Tone::Gray)
                .plain("  ")
                .tone(dir, Tone::Sky),
        );
    }
    for file in ["resume.pdf", "readme.md"] {
        lines.push(
            line()
                .tone("  -rw-r--r--", Tone::Gray)
                .plain(format!("  {file}")),
        );
    }
    lines.push(blank());
    CommandOutput::lines(lines)
}

fn ping(ctx: &CommandContext<'_>) -> CommandOutput {
    let mut lines = vec![text("  PING vineetkishore.dev (127.0.0.1): 56 data bytes")];
    for _ in 0..3 {
        let ms = ctx.random.next_unit() * 5.0 + 1.0;
        lines.push(
            line()
                .plain("  64 bytes: time=")
                .tone(format!("{ms:.1}ms"), Tone::Green),
        );
    }
    lines.push(
        line()
            .plain("  --- 3 packets, ")
            .tone("0% loss", Tone::Green),
    );
    CommandOutput::lines(lines)
}

fn whois(_: &CommandContext<'_>) -> CommandOutput {
    CommandOutput::lines(vec![
        text("  Domain: vineetkishore.dev"),
        text("  Registrant: Vineet Kishore"),
        line().plain("  Status: ").tone("ACTIVE", Tone::Green),
        text("  Created: 2024"),
    ])
}

/// Moods reported by `weather`.
pub const WEATHER_MOODS: &[(&str, Tone)] = &[
    (
        "\u{2600}\u{fe0f}  Clear skies \u{2014} Shipping code at full speed!",
        Tone::Green,
    ),
    (
        "\u{26c8}  Thunderstorm \u{2014} Debugging intensifies!",
        Tone::Amber,
    ),
    (
        "\u{1f680} Launch weather \u{2014} Deploying to production!",
        Tone::Violet,
    ),
];

fn weather(ctx: &CommandContext<'_>) -> CommandOutput {
    let (mood, tone) = WEATHER_MOODS[ctx.random.next_index(WEATHER_MOODS.len())];
    CommandOutput::line(line().plain("  Dev weather: ").tone(mood, tone))
}

fn theme(ctx: &CommandContext<'_>) -> CommandOutput {
    let activate = !ctx.session.theme_active();
    let label = if activate {
        line().plain("  Theme: ").tone("Matrix Green", Tone::Green)
    } else {
        line().plain("  Theme: ").tone("Default", Tone::Sky)
    };
    CommandOutput::line(label).with_effect(Effect::SetTheme(activate))
}

fn clear(_: &CommandContext<'_>) -> CommandOutput {
    CommandOutput::default().with_effect(Effect::ClearTranscript)
}

fn history(ctx: &CommandContext<'_>) -> CommandOutput {
    let history = ctx.session.history();
    if history.is_empty() {
        return CommandOutput::line(text("  No commands in history."));
    }
    let start = history
        .len()
        .saturating_sub(ctx.terminal.history_listing_limit);
    let mut lines = vec![blank()];
    for (i, cmd) in history.iter().enumerate().skip(start) {
        lines.push(
            line()
                .plain("  ")
                .tone((i + 1).to_string(), Tone::Gray)
                .plain(format!("  {cmd}")),
        );
    }
    lines.push(blank());
    CommandOutput::lines(lines)
}

fn eastereggs(_: &CommandContext<'_>) -> CommandOutput {
    let mut lines = vec![
        blank(),
        line().tone("  \u{1f3ae} Easter Egg Directory", Tone::Amber),
        blank(),
    ];
    for name in ["matrix", "sudo", "hack", "rickroll", "cowsay"] {
        lines.push(
            line()
                .plain("  ")
                .tone(name, Tone::Green)
                .plain(format!("{}{}", padding(name, 12), summary(name))),
        );
    }
    lines.push(blank());
    lines.push(
        line()
            .plain("  Press ")
            .tone("F", Tone::Amber)
            .plain(" for flashlight mode"),
    );
    lines.push(blank());
    CommandOutput::lines(lines)
}

fn matrix(ctx: &CommandContext<'_>) -> CommandOutput {
    let seconds = ctx.matrix.duration().as_secs_f64();
    CommandOutput::line(line().tone(
        format!("  Matrix mode activated for {seconds} seconds..."),
        Tone::Green,
    ))
    .with_effect(Effect::StartMatrix)
}

fn sudo(_: &CommandContext<'_>) -> CommandOutput {
    CommandOutput::lines(vec![
        line()
            .plain("  ")
            .tone("[sudo] password for vineet: ********", Tone::Red),
        line()
            .plain("  ")
            .tone("Access denied.", Tone::Red)
            .plain(" Nice try! \u{1f60f}"),
    ])
}

fn hack_bar(filled: usize, tone: Tone, percent: u8) -> StyledLine {
    const HACK_BAR: usize = 18;
    let bar = format!(
        "[{}{}]",
        FULL_BLOCK.to_string().repeat(filled),
        LIGHT_SHADE.to_string().repeat(HACK_BAR.saturating_sub(filled))
    );
    line()
        .plain("  ")
        .tone(bar, tone)
        .plain(format!(" {percent}%"))
}

fn hack(_: &CommandContext<'_>) -> CommandOutput {
    CommandOutput::lines(vec![
        line().tone("  [*] Initiating hack sequence...", Tone::Green),
        hack_bar(4, Tone::Amber, 20),
        hack_bar(8, Tone::Amber, 40),
        hack_bar(12, Tone::Amber, 60),
        hack_bar(18, Tone::Green, 100),
        blank(),
        line().tone("  Just kidding! I'm an ethical engineer. \u{1f609}", Tone::Gray),
    ])
}

fn rickroll(ctx: &CommandContext<'_>) -> CommandOutput {
    CommandOutput::line(line().tone("  Never gonna give you up! \u{1f3b5}", Tone::Pink))
        .with_effect(Effect::OpenDocument(ctx.rickroll_url.to_string()))
}

fn cowsay(_: &CommandContext<'_>) -> CommandOutput {
    CommandOutput::lines(
        [
            "   _________________________",
            "  < Hire Vineet! He's great! >",
            "   -------------------------",
            "          \\   ^__^",
            "           \\  (oo)\\_______",
            "              (__)\\       )\\/\\",
            "                  ||----w |",
            "                  ||     ||",
        ]
        .into_iter()
        .map(text)
        .collect(),
    )
}

fn manifest_group(title: &str, tone: Tone, rows: &[&[&str]]) -> Vec<StyledLine> {
    let mut lines = vec![line().tone(format!("  \u{250c}\u{2500} {title}"), tone)];
    for (i, items) in rows.iter().enumerate() {
        let branch = if i + 1 == rows.len() { "\u{2514}" } else { "\u{2502}" };
        let mut row = line().plain(format!("  {branch}  "));
        for (j, item) in items.iter().enumerate() {
            if j > 0 {
                row = row.plain("  \u{2022}  ");
            }
            row = row.tone(*item, Tone::Snow);
        }
        lines.push(row);
    }
    lines.push(blank());
    lines
}

fn manifest(_: &CommandContext<'_>) -> CommandOutput {
    let mut lines = vec![
        blank(),
        line().tone(
            "  \u{2592}\u{2592}\u{2592}  FULL SYSTEM MANIFEST  \u{2592}\u{2592}\u{2592}",
            Tone::Sky,
        ),
        rule('\u{2500}', 28),
        blank(),
    ];
    lines.extend(manifest_group(
        "KNOW ME",
        Tone::Green,
        &[
            &["about", "whoami", "skills"],
            &["experience", "education"],
            &["projects", "certifications"],
            &["contact", "resume"],
        ],
    ));
    lines.extend(manifest_group(
        "HACK AROUND",
        Tone::Amber,
        &[
            &["neofetch", "uptime", "date"],
            &["ls", "cat readme.md", "ping"],
            &["whois", "weather", "theme"],
            &["history", "clear"],
        ],
    ));
    lines.extend(manifest_group(
        "NAVIGATE",
        Tone::Violet,
        &[
            &["goto home", "goto about", "goto projects"],
            &["goto skills", "goto contact", "goto education"],
        ],
    ));
    lines.extend(manifest_group(
        "\u{1f31f} SECRETS \u{2014} just try them.",
        Tone::Pink,
        &[&["matrix", "sudo", "hack"], &["rickroll", "cowsay"]],
    ));

    lines.push(line().tone("  \u{250c}\u{2500} \u{2328} KEYBOARD TRICKS", Tone::Cyan));
    for (i, (keys, description)) in [
        ("\u{2191} / \u{2193}", "Browse command history"),
        ("Tab", "Autocomplete a command"),
        ("Ctrl+L", "Clear the screen"),
        ("F", "Toggle flashlight (outside terminal)"),
    ]
    .iter()
    .enumerate()
    {
        let branch = if i == 3 { "\u{2514}" } else { "\u{2502}" };
        lines.push(
            line()
                .plain(format!("  {branch}  "))
                .tone(*keys, Tone::Snow)
                .plain(format!("{}{description}", padding(keys, 12))),
        );
    }
    lines.push(blank());
    lines.push(line().tone("  Type any command above and hit Enter.", Tone::Gray));
    lines.push(line().tone("  No manual needed. Just explore. \u{26a1}", Tone::Gray));
    lines.push(blank());
    CommandOutput::lines(lines)
}
