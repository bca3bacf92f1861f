//! The command-center terminal
//!
//! Owns the session, the dispatcher, the input row, the transcript and the
//! reveal queue, and applies command effects through the injected
//! collaborators. All work happens on the caller's thread: key handling
//! returns as soon as output is scheduled, and `tick` reveals it later.

use super::dispatch::Dispatcher;
use super::matrix::MatrixRain;
use crate::commands::directive;
use crate::commands::registry::{CommandContext, Effect, Registry};
use crate::config::Config;
use crate::input::{InputAction, InputController, InputResult, TerminalKey};
use crate::model::line::{OutputLine, StyledLine};
use crate::model::session::Session;
use crate::services::navigation::Navigator;
use crate::services::opener::DocumentOpener;
use crate::services::random::RandomSource;
use crate::services::time_source::SharedTimeSource;
use crate::view::reveal::{RevealQueue, RevealSchedule};
use crate::view::transcript::Transcript;
use std::time::Instant;

/// Size of the surface the terminal is mounted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Area {
    pub width: u16,
    pub height: u16,
}

impl Area {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Rows taken by the input row.
pub const INPUT_ROWS: u16 = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminalError {
    /// A required part of the surface is missing
    MissingElement(&'static str),
}

impl std::fmt::Display for TerminalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TerminalError::MissingElement(what) => {
                write!(f, "terminal cannot mount: no room for the {what}")
            }
        }
    }
}

impl std::error::Error for TerminalError {}

/// Collaborators and settings a terminal is built from.
pub struct TerminalParts {
    pub config: Config,
    pub registry: Registry,
    pub clock: SharedTimeSource,
    pub random: Box<dyn RandomSource>,
    pub navigator: Box<dyn Navigator>,
    pub opener: Box<dyn DocumentOpener>,
}

impl TerminalParts {
    /// Built-in registry with the given collaborators.
    pub fn new(
        config: Config,
        clock: SharedTimeSource,
        random: Box<dyn RandomSource>,
        navigator: Box<dyn Navigator>,
        opener: Box<dyn DocumentOpener>,
    ) -> Self {
        Self {
            config,
            registry: Registry::builtin(),
            clock,
            random,
            navigator,
            opener,
        }
    }
}

pub struct Terminal {
    config: Config,
    session: Session,
    dispatcher: Dispatcher,
    input: InputController,
    transcript: Transcript,
    reveal: RevealQueue,
    area: Option<Area>,
    /// Full screen size, used by the matrix overlay
    screen: Option<Area>,
    focused: bool,
    refocus_at: Option<Instant>,
    matrix: Option<MatrixRain>,
    clock: SharedTimeSource,
    random: Box<dyn RandomSource>,
    navigator: Box<dyn Navigator>,
    opener: Box<dyn DocumentOpener>,
}

impl Terminal {
    pub fn new(parts: TerminalParts) -> Self {
        let mut session = Session::new(parts.clock.now());
        session.set_theme_active(parts.config.starts_with_theme_active());
        Self {
            transcript: Transcript::with_max_lines(parts.config.terminal.max_transcript_lines),
            config: parts.config,
            session,
            dispatcher: Dispatcher::new(parts.registry),
            input: InputController::new(),
            reveal: RevealQueue::new(),
            area: None,
            screen: None,
            focused: false,
            refocus_at: None,
            matrix: None,
            clock: parts.clock,
            random: parts.random,
            navigator: parts.navigator,
            opener: parts.opener,
        }
    }

    /// Attach the terminal to a surface and give it focus.
    ///
    /// Fails when the surface cannot host both the transcript body and the
    /// input row; the terminal then stays unmounted and ignores every key.
    pub fn mount(&mut self, area: Area) -> Result<(), TerminalError> {
        let missing = if area.width == 0 || area.height < INPUT_ROWS {
            Some("input row")
        } else if area.height <= INPUT_ROWS {
            Some("transcript body")
        } else {
            None
        };
        if let Some(what) = missing {
            tracing::error!(
                "Terminal not initialized: no room for the {} in {}x{}",
                what,
                area.width,
                area.height
            );
            self.area = None;
            self.focused = false;
            return Err(TerminalError::MissingElement(what));
        }

        tracing::info!("Terminal mounted at {}x{}", area.width, area.height);
        self.area = Some(area);
        self.focused = true;
        Ok(())
    }

    /// Track a surface resize. Shrinking below the minimum unmounts.
    pub fn resize(&mut self, area: Area) -> Result<(), TerminalError> {
        let was_focused = self.focused;
        self.mount(area)?;
        self.focused = was_focused;
        Ok(())
    }

    /// Size of the whole screen, which the matrix overlay covers.
    /// Defaults to the mounted area.
    pub fn set_screen_size(&mut self, screen: Area) {
        self.screen = Some(screen);
    }

    pub fn is_mounted(&self) -> bool {
        self.area.is_some()
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn focus(&mut self) {
        if self.is_mounted() {
            self.focused = true;
        }
    }

    pub fn blur(&mut self) {
        self.focused = false;
    }

    /// Handle one key. Every key reaching a focused terminal is consumed,
    /// so page shortcuts never fire while typing.
    pub fn handle_key(&mut self, key: TerminalKey) -> InputResult {
        if !self.is_mounted() || !self.focused {
            return InputResult::Ignored;
        }

        let action = self
            .input
            .handle(key, self.dispatcher.registry(), &mut self.session);
        match action {
            InputAction::Submit(command) => self.submit(&command),
            InputAction::Hint(matches) => self.hint(&matches),
            InputAction::ClearScreen => self.clear_screen(),
            InputAction::Blur => self.blur(),
            InputAction::Edited | InputAction::None => {}
        }
        InputResult::Consumed
    }

    /// Echo, dispatch and record one command line.
    ///
    /// Blank input is dropped. The command is recorded after dispatch, so
    /// `history` does not list itself.
    pub fn submit(&mut self, line: &str) {
        let command = line.trim().to_lowercase();
        if command.is_empty() {
            return;
        }
        let now = self.clock.now();

        self.reveal.schedule(
            RevealSchedule::stagger([OutputLine::Command(command.clone())], Default::default()),
            now,
        );

        let dispatch = {
            let ctx = CommandContext {
                session: &self.session,
                clock: self.clock.as_ref(),
                random: self.random.as_ref(),
                terminal: &self.config.terminal,
                matrix: &self.config.matrix,
                resume_path: &self.config.documents.resume_path,
                rickroll_url: &self.config.documents.rickroll_url,
            };
            self.dispatcher.dispatch(&command, &ctx)
        };
        self.session.record(command);

        let mut lines = dispatch.output.lines;
        for effect in dispatch.output.effects {
            self.apply(effect, now, &mut lines);
        }

        self.reveal.schedule(
            RevealSchedule::stagger(lines, self.config.terminal.reveal_stagger()),
            now,
        );
        let settled = self.reveal.last_due().unwrap_or(now).max(now);
        self.refocus_at = Some(settled + self.config.terminal.focus_delay());

        self.reveal_due(now);
    }

    fn apply(&mut self, effect: Effect, now: Instant, lines: &mut Vec<StyledLine>) {
        tracing::debug!("Applying effect {:?}", effect);
        match effect {
            Effect::ClearTranscript => self.clear_screen(),
            Effect::SetTheme(active) => self.session.set_theme_active(active),
            Effect::OpenDocument(target) => self.opener.open(&target),
            Effect::StartMatrix => self.start_matrix(now),
            Effect::Navigate(alias) => {
                let anchor = directive::resolve_section(&alias);
                if self.navigator.scroll_into_view(anchor) {
                    lines.push(directive::navigated_line(&alias));
                } else {
                    tracing::debug!("No section for alias {:?}", alias);
                    lines.push(directive::section_not_found_line(&alias));
                }
            }
        }
    }

    fn start_matrix(&mut self, now: Instant) {
        if let Some(rain) = self.matrix.as_mut().filter(|r| !r.is_expired(now)) {
            rain.restart(now);
            return;
        }
        let area = self.screen.or(self.area).unwrap_or(Area::new(0, 0));
        self.matrix = Some(MatrixRain::start(
            now,
            area.width,
            area.height,
            self.random.as_ref(),
            &self.config.matrix,
        ));
    }

    fn hint(&mut self, matches: &[&str]) {
        let now = self.clock.now();
        let line = StyledLine::from(format!("  {}", matches.join("  ")));
        self.reveal
            .schedule(RevealSchedule::stagger([line], Default::default()), now);
        self.reveal_due(now);
    }

    /// Remove every transcript line and drop pending reveals. History is kept.
    pub fn clear_screen(&mut self) {
        let dropped = self.reveal.cancel();
        if dropped > 0 {
            tracing::debug!("Cancelled {} pending lines", dropped);
        }
        self.transcript.clear();
    }

    fn reveal_due(&mut self, now: Instant) -> bool {
        let ready = self.reveal.due(now);
        let changed = !ready.is_empty();
        self.transcript.extend(ready);
        changed
    }

    /// Advance timers to `now`: reveal due lines, refocus, run and expire
    /// the matrix effect. Returns true if anything visible changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = self.reveal_due(now);

        if let Some(at) = self.refocus_at {
            if now >= at {
                self.refocus_at = None;
                if self.is_mounted() && !self.focused {
                    self.focused = true;
                    changed = true;
                }
            }
        }

        if let Some(rain) = self.matrix.as_mut() {
            changed |= rain.tick(now, self.random.as_ref());
            if rain.is_expired(now) {
                tracing::debug!("Matrix rain finished after {} frames", rain.frames());
                self.matrix = None;
                changed = true;
            }
        }
        changed
    }

    /// Reveal every pending line immediately.
    pub fn flush(&mut self) {
        let lines = self.reveal.drain_all();
        self.transcript.extend(lines);
    }

    /// Earliest instant at which `tick` has work to do.
    pub fn next_deadline(&self) -> Option<Instant> {
        let matrix = self
            .matrix
            .as_ref()
            .map(|r| r.next_frame().min(r.deadline()));
        [self.reveal.next_due(), self.refocus_at, matrix]
            .into_iter()
            .flatten()
            .min()
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn registry(&self) -> &Registry {
        self.dispatcher.registry()
    }

    pub fn input(&self) -> &InputController {
        &self.input
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn theme_active(&self) -> bool {
        self.session.theme_active()
    }

    pub fn matrix(&self) -> Option<&MatrixRain> {
        self.matrix.as_ref()
    }

    pub fn pending_lines(&self) -> usize {
        self.reveal.len()
    }

    pub fn refocus_at(&self) -> Option<Instant> {
        self.refocus_at
    }

    pub fn current_section(&self) -> Option<&str> {
        self.navigator.current()
    }
}
