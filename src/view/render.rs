//! Drawing the page with ratatui
//!
//! Layout, top to bottom: one header row of section anchors, then the
//! bordered terminal whose inner area holds the transcript body and, on its
//! last row, the input row. The matrix overlay, when running, is drawn over
//! the whole frame.

use super::theme::Theme;
use crate::app::matrix::MatrixRain;
use crate::app::page::Page;
use crate::app::terminal::Terminal;
use crate::model::line::{OutputLine, StyledLine};
use crate::services::navigation::PAGE_ANCHORS;
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const HEADER_ROWS: u16 = 1;
/// Lines at the bottom of the transcript left undimmed by the flashlight.
const FLASHLIGHT_ROWS: usize = 3;

/// Regions of the page for a given frame size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLayout {
    pub header: Rect,
    pub frame: Rect,
    pub body: Rect,
    pub input: Rect,
}

impl PageLayout {
    pub fn compute(area: Rect) -> Self {
        let [header, frame] =
            Layout::vertical([Constraint::Length(HEADER_ROWS), Constraint::Min(0)]).areas(area);
        let inner = Block::default().borders(Borders::ALL).inner(frame);
        let [body, input] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(inner);
        Self {
            header,
            frame,
            body,
            input,
        }
    }

    /// The area the terminal mounts on: body plus input row.
    pub fn terminal(&self) -> Rect {
        Block::default().borders(Borders::ALL).inner(self.frame)
    }
}

pub fn render(frame: &mut Frame, page: &Page) {
    let terminal = page.terminal();
    let theme = Theme::for_state(terminal.theme_active());
    let area = frame.area();
    let layout = PageLayout::compute(area);

    frame.render_widget(
        Block::default().style(Style::default().bg(theme.page_bg)),
        area,
    );
    render_header(frame, layout.header, terminal, &theme, page.flashlight());

    let border = if terminal.is_focused() {
        theme.border_focused_fg
    } else {
        theme.border_fg
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .title(Span::styled(
            " command-center ",
            Style::default().fg(theme.prompt_path_fg),
        ));
    frame.render_widget(block, layout.frame);

    if !terminal.is_mounted() {
        let message = Paragraph::new("terminal unavailable: window too small")
            .style(Style::default().fg(theme.header_fg));
        frame.render_widget(message, layout.terminal());
        return;
    }

    render_body(frame, layout.body, terminal, &theme, page.flashlight());
    render_input(frame, layout.input, terminal, &theme);

    if let Some(rain) = terminal.matrix() {
        render_matrix(frame, area, rain, &theme);
    }
}

fn render_header(frame: &mut Frame, area: Rect, terminal: &Terminal, theme: &Theme, dim: bool) {
    let current = terminal.current_section();
    let mut spans = vec![Span::styled(" ", Style::default())];
    for anchor in PAGE_ANCHORS {
        let style = if current == Some(*anchor) {
            Style::default()
                .fg(theme.header_active_fg)
                .bg(theme.header_active_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.header_fg)
        };
        spans.push(Span::styled(format!(" {anchor} "), style));
        spans.push(Span::raw(" "));
    }
    if terminal.theme_active() {
        spans.push(Span::styled("[matrix]", Style::default().fg(theme.prompt_fg)));
    }
    let mut header = Paragraph::new(Line::from(spans));
    if dim {
        header = header.style(Style::default().add_modifier(Modifier::DIM));
    }
    frame.render_widget(header, area);
}

fn styled_line<'a>(line: &'a StyledLine, theme: &Theme) -> Line<'a> {
    Line::from(
        line.fragments
            .iter()
            .map(|f| Span::styled(f.text.as_str(), theme.fragment_style(f.style)))
            .collect::<Vec<_>>(),
    )
}

fn echo_line<'a>(command: &'a str, marker: &'a str, theme: &Theme) -> Line<'a> {
    Line::from(vec![
        Span::styled(marker, Style::default().fg(theme.prompt_fg)),
        Span::styled(" ~ ", Style::default().fg(theme.prompt_path_fg)),
        Span::styled(command, Style::default().fg(theme.input_fg)),
    ])
}

fn render_body(frame: &mut Frame, area: Rect, terminal: &Terminal, theme: &Theme, flashlight: bool) {
    let marker = terminal.config().terminal.prompt_marker.as_str();
    let lines = terminal.transcript().lines();
    // Follow the newest line
    let visible = &lines[lines.len().saturating_sub(area.height as usize)..];
    let lit_from = visible.len().saturating_sub(FLASHLIGHT_ROWS);

    let rendered: Vec<Line> = visible
        .iter()
        .enumerate()
        .map(|(i, line)| {
            let rendered = match line {
                OutputLine::Command(cmd) => echo_line(cmd, marker, theme),
                OutputLine::Text(text) => styled_line(text, theme),
            };
            if flashlight && i < lit_from {
                rendered.style(Style::default().add_modifier(Modifier::DIM))
            } else {
                rendered
            }
        })
        .collect();
    frame.render_widget(Paragraph::new(rendered), area);
}

fn render_input(frame: &mut Frame, area: Rect, terminal: &Terminal, theme: &Theme) {
    let marker = terminal.config().terminal.prompt_marker.as_str();
    let input = terminal.input();
    let buffer = input.buffer();

    let mut spans = vec![
        Span::styled(marker, Style::default().fg(theme.prompt_fg)),
        Span::styled(" ~ ", Style::default().fg(theme.prompt_path_fg)),
    ];
    let prompt_width = marker.width() + 3;

    let room = (area.width as usize).saturating_sub(prompt_width);
    let (start, column) = input_window(&buffer, input.line().cursor(), room);

    if buffer.is_empty() && !terminal.is_focused() {
        spans.push(Span::styled(
            "i to type \u{b7} f flashlight \u{b7} q quit",
            Style::default().fg(theme.header_fg).add_modifier(Modifier::DIM),
        ));
    } else {
        spans.push(Span::styled(&buffer[start..], Style::default().fg(theme.input_fg)));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);

    if terminal.is_focused() {
        let last = area.right().saturating_sub(1) as usize;
        let x = (area.x as usize + prompt_width + column).min(last);
        frame.set_cursor_position(Position::new(x as u16, area.y));
    }
}

/// Byte offset where the visible part of the input starts, and the cursor's
/// column after it. Leading characters are dropped until the cursor fits
/// within `room` columns.
fn input_window(buffer: &str, cursor: usize, room: usize) -> (usize, usize) {
    let cursor_byte = buffer
        .char_indices()
        .nth(cursor)
        .map_or(buffer.len(), |(i, _)| i);
    let before = &buffer[..cursor_byte];
    let mut column: usize = before.chars().map(|c| c.width().unwrap_or(0)).sum();
    let mut start = 0;
    for c in before.chars() {
        if column < room {
            break;
        }
        column -= c.width().unwrap_or(0);
        start += c.len_utf8();
    }
    (start, column)
}

fn render_matrix(frame: &mut Frame, area: Rect, rain: &MatrixRain, theme: &Theme) {
    frame.render_widget(Clear, area);
    let buf = frame.buffer_mut();
    for y in 0..rain.rows().min(area.height) {
        for x in 0..rain.columns().min(area.width) {
            let Some(cell) = buf.cell_mut((area.x + x, area.y + y)) else {
                continue;
            };
            cell.set_bg(ratatui::style::Color::Black);
            if let Some(drop) = rain.cell(x, y) {
                cell.set_char(drop.glyph)
                    .set_fg(theme.rain_color(drop.brightness));
            } else {
                cell.set_char(' ');
            }
        }
    }
}
