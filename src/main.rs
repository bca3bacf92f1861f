use anyhow::{Context, Result as AnyhowResult};
use clap::Parser;
use command_center::app::{Area, Page, Terminal, TerminalParts};
use command_center::config::Config;
use command_center::config_io::{self, DirectoryContext};
use command_center::input::key_translator::KeyTranslator;
use command_center::input::TerminalKey;
use command_center::services::navigation::SectionNavigator;
use command_center::services::opener::SystemOpener;
use command_center::services::random::XorShiftRandom;
use command_center::services::terminal_modes::{self, TerminalModes};
use command_center::services::time_source::RealTimeSource;
use command_center::services::{log_dirs, tracing_setup};
use command_center::view::render::{self, PageLayout};
use crossterm::event::{poll as event_poll, read as event_read, Event as CrosstermEvent};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use std::io::{self, stdout};
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// An interactive portfolio command center in your terminal
#[derive(Parser, Debug)]
#[command(name = "command-center")]
#[command(about = "A faux shell over a fixed command table", long_about = None)]
#[command(version)]
struct Args {
    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Path to log file for diagnostics (default: state dir)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Print the effective configuration as JSON and exit
    #[arg(long)]
    dump_config: bool,

    /// Print the directories used by command-center and exit
    #[arg(long)]
    show_paths: bool,

    /// Print command output at once instead of line by line
    #[arg(long)]
    no_reveal: bool,
}

type Screen = ratatui::Terminal<CrosstermBackend<io::Stdout>>;

const IDLE_POLL: Duration = Duration::from_millis(50);

fn load_config(args: &Args) -> AnyhowResult<Config> {
    let dirs = DirectoryContext::from_system()?;
    let (mut config, source) = config_io::load_config(args.config.as_deref(), &dirs)
        .context("Failed to load configuration")?;
    tracing::debug!("Config source: {:?}", source);
    if args.no_reveal {
        config.terminal.reveal_stagger_ms = 0;
    }
    Ok(config)
}

fn initialize_logging(args: &Args) {
    let log_file = args
        .log_file
        .clone()
        .unwrap_or_else(log_dirs::main_log_path);
    if !tracing_setup::init_global(&log_file) {
        eprintln!(
            "Warning: could not open log file {}, diagnostics are disabled",
            log_file.display()
        );
    }

    log_dirs::cleanup_stale_logs();

    tracing::info!("command-center starting");

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        terminal_modes::emergency_cleanup();
        original_hook(panic);
    }));
}

/// Mount the page's terminal on the current screen size.
fn layout_terminal(page: &mut Page, width: u16, height: u16, first: bool) {
    let layout = PageLayout::compute(Rect::new(0, 0, width, height));
    let inner = layout.terminal();
    let area = Area::new(inner.width, inner.height);
    let terminal = page.terminal_mut();
    terminal.set_screen_size(Area::new(width, height));
    let result = if first {
        terminal.mount(area)
    } else {
        terminal.resize(area)
    };
    if let Err(e) = result {
        tracing::warn!("Terminal unavailable at {}x{}: {}", width, height, e);
    }
}

fn run_event_loop(
    page: &mut Page,
    screen: &mut Screen,
    key_translator: &KeyTranslator,
) -> AnyhowResult<()> {
    let mut needs_render = true;

    loop {
        if page.terminal_mut().tick(Instant::now()) {
            needs_render = true;
        }

        if page.should_quit() {
            break;
        }

        if needs_render {
            screen.draw(|frame| render::render(frame, page))?;
            needs_render = false;
        }

        let timeout = page
            .terminal()
            .next_deadline()
            .map(|at| at.saturating_duration_since(Instant::now()))
            .map_or(IDLE_POLL, |wait| wait.min(IDLE_POLL));

        if !event_poll(timeout)? {
            continue;
        }

        match event_read()? {
            CrosstermEvent::Key(key_event) => {
                tracing::trace!(
                    "Key event received: code={:?}, modifiers={:?}, kind={:?}",
                    key_event.code,
                    key_event.modifiers,
                    key_event.kind
                );
                if let Some(key) = key_translator.translate(key_event) {
                    page.handle_key(key);
                    needs_render = true;
                }
            }
            CrosstermEvent::Paste(text) => {
                for c in text.chars().filter(|c| !c.is_control()) {
                    page.handle_key(TerminalKey::Char(c));
                }
                needs_render = true;
            }
            CrosstermEvent::Resize(w, h) => {
                layout_terminal(page, w, h, false);
                needs_render = true;
            }
            _ => {}
        }
    }

    Ok(())
}

fn main() -> AnyhowResult<()> {
    let args = Args::parse();

    // Handle --show-paths early (no terminal setup needed)
    if args.show_paths {
        log_dirs::print_all_paths();
        return Ok(());
    }

    if args.dump_config {
        let config = load_config(&args)?;
        let json = serde_json::to_string_pretty(&config).context("Failed to serialize config")?;
        println!("{}", json);
        return Ok(());
    }

    initialize_logging(&args);
    let config = load_config(&args)?;

    let terminal = Terminal::new(TerminalParts::new(
        config,
        RealTimeSource::shared(),
        Box::new(XorShiftRandom::from_entropy()),
        Box::new(SectionNavigator::page()),
        Box::new(SystemOpener),
    ));
    let mut page = Page::new(terminal);

    let mut modes = TerminalModes::enable().context("Failed to prepare the terminal")?;
    let mut screen = ratatui::Terminal::new(CrosstermBackend::new(stdout()))
        .context("Failed to create terminal backend")?;
    screen.clear()?;

    let size = screen.size()?;
    layout_terminal(&mut page, size.width, size.height, true);

    let key_translator = KeyTranslator::new();
    let result = run_event_loop(&mut page, &mut screen, &key_translator);

    modes.undo();
    tracing::info!(
        "command-center exiting after {} commands",
        page.terminal().session().history().len()
    );
    result
}
