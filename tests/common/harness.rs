//! Drives a full page on ratatui's `TestBackend` with a logical clock

use anyhow::Result;
use command_center::app::{Area, Page, Terminal, TerminalParts};
use command_center::config::Config;
use command_center::input::key_translator::KeyTranslator;
use command_center::services::navigation::RecordingNavigator;
use command_center::services::opener::RecordingOpener;
use command_center::services::random::FixedRandom;
use command_center::services::time_source::{TestTimeSource, TimeSource};
use command_center::view::render::{self, PageLayout};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;
use std::sync::Arc;
use std::time::Duration;

/// Upper bound on timer steps in `settle`, so a stuck deadline fails fast.
const MAX_SETTLE_STEPS: usize = 10_000;

pub struct TerminalTestHarness {
    page: Page,
    screen: ratatui::Terminal<TestBackend>,
    clock: Arc<TestTimeSource>,
    navigator: RecordingNavigator,
    opener: RecordingOpener,
    translator: KeyTranslator,
}

impl TerminalTestHarness {
    pub fn new(width: u16, height: u16) -> Result<Self> {
        Self::with_config(width, height, Config::default())
    }

    pub fn with_config(width: u16, height: u16, config: Config) -> Result<Self> {
        super::tracing::init_tracing_from_env();

        let clock = TestTimeSource::shared();
        let navigator = RecordingNavigator::new();
        let opener = RecordingOpener::new();
        let mut terminal = Terminal::new(TerminalParts::new(
            config,
            clock.clone(),
            Box::new(FixedRandom(0.5)),
            Box::new(navigator.clone()),
            Box::new(opener.clone()),
        ));

        let inner = PageLayout::compute(Rect::new(0, 0, width, height)).terminal();
        terminal.set_screen_size(Area::new(width, height));
        if let Err(e) = terminal.mount(Area::new(inner.width, inner.height)) {
            tracing::warn!("Harness terminal not mounted: {}", e);
        }

        let screen = ratatui::Terminal::new(TestBackend::new(width, height))?;
        Ok(Self {
            page: Page::new(terminal),
            screen,
            clock,
            navigator,
            opener,
            translator: KeyTranslator::new(),
        })
    }

    /// Send a key through the translator, like the event loop does.
    pub fn send_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> Result<()> {
        if let Some(key) = self.translator.translate(KeyEvent::new(code, modifiers)) {
            self.page.handle_key(key);
        }
        self.page.terminal_mut().tick(self.clock.now());
        Ok(())
    }

    pub fn type_text(&mut self, text: &str) -> Result<()> {
        for c in text.chars() {
            self.send_key(KeyCode::Char(c), KeyModifiers::NONE)?;
        }
        Ok(())
    }

    /// Type a command and press Enter.
    pub fn submit(&mut self, command: &str) -> Result<()> {
        self.type_text(command)?;
        self.send_key(KeyCode::Enter, KeyModifiers::NONE)
    }

    /// Submit a command and run every timer it started to completion.
    pub fn run(&mut self, command: &str) -> Result<()> {
        self.submit(command)?;
        self.settle();
        Ok(())
    }

    /// Move the logical clock forward and fire due timers.
    pub fn advance(&mut self, duration: Duration) {
        self.clock.advance(duration);
        self.page.terminal_mut().tick(self.clock.now());
    }

    /// Advance the clock from deadline to deadline until no timer is left.
    pub fn settle(&mut self) {
        for _ in 0..MAX_SETTLE_STEPS {
            let Some(deadline) = self.page.terminal().next_deadline() else {
                return;
            };
            let wait = deadline.saturating_duration_since(self.clock.now());
            self.advance(wait.max(Duration::from_millis(1)));
        }
        panic!("timers did not settle after {MAX_SETTLE_STEPS} steps");
    }

    pub fn flush(&mut self) {
        self.page.terminal_mut().flush();
    }

    pub fn render(&mut self) -> Result<()> {
        let page = &self.page;
        self.screen.draw(|frame| render::render(frame, page))?;
        Ok(())
    }

    pub fn buffer(&self) -> &ratatui::buffer::Buffer {
        self.screen.backend().buffer()
    }

    /// One screen row as text.
    pub fn screen_row(&self, y: u16) -> String {
        let buffer = self.buffer();
        (0..buffer.area.width)
            .filter_map(|x| buffer.cell((x, y)))
            .map(|cell| cell.symbol())
            .collect()
    }

    pub fn screen_to_string(&self) -> String {
        (0..self.buffer().area.height)
            .map(|y| self.screen_row(y))
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn assert_screen_contains(&self, text: &str) {
        let screen = self.screen_to_string();
        assert!(
            screen.contains(text),
            "Expected screen to contain {text:?}\nScreen:\n{screen}"
        );
    }

    pub fn assert_screen_not_contains(&self, text: &str) {
        let screen = self.screen_to_string();
        assert!(
            !screen.contains(text),
            "Expected screen not to contain {text:?}\nScreen:\n{screen}"
        );
    }

    /// Plain text of every transcript line.
    pub fn transcript_texts(&self) -> Vec<String> {
        self.page.terminal().transcript().texts()
    }

    /// Transcript lines after the most recent echo of `command`.
    pub fn output_of(&self, command: &str) -> Vec<String> {
        let lines = self.page.terminal().transcript().lines();
        let start = lines
            .iter()
            .rposition(|line| line.is_command() && line.text() == command)
            .map_or(lines.len(), |i| i + 1);
        let end = lines[start..]
            .iter()
            .position(|line| line.is_command())
            .map_or(lines.len(), |i| start + i);
        lines[start..end].iter().map(|line| line.text()).collect()
    }

    pub fn input_buffer(&self) -> String {
        self.page.terminal().input().buffer()
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn page_mut(&mut self) -> &mut Page {
        &mut self.page
    }

    pub fn terminal(&self) -> &Terminal {
        self.page.terminal()
    }

    pub fn navigator(&self) -> &RecordingNavigator {
        &self.navigator
    }

    pub fn opener(&self) -> &RecordingOpener {
        &self.opener
    }

    pub fn clock(&self) -> &TestTimeSource {
        &self.clock
    }

    pub fn should_quit(&self) -> bool {
        self.page.should_quit()
    }
}
