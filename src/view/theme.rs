use crate::model::line::{FragmentStyle, Tone};
use ratatui::style::{Color, Modifier, Style};

/// Colors for the page chrome and transcript
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Theme name ("default" or "matrix")
    pub name: String,

    pub page_bg: Color,
    pub text_fg: Color,

    // Header
    pub header_fg: Color,
    pub header_active_fg: Color,
    pub header_active_bg: Color,
    pub border_fg: Color,
    pub border_focused_fg: Color,

    // Input row
    pub prompt_fg: Color,
    pub prompt_path_fg: Color,
    pub input_fg: Color,

    // Matrix overlay
    pub rain_head_fg: Color,
    pub rain_trail: (u8, u8, u8),

    /// Every tone collapses to this color when set
    pub monochrome: Option<Color>,
}

impl Theme {
    /// Dark slate page with the regular palette
    pub fn default_theme() -> Self {
        Self {
            name: "default".to_string(),
            page_bg: Color::Rgb(10, 14, 23),
            text_fg: rgb(Tone::Snow),
            header_fg: rgb(Tone::Silver),
            header_active_fg: Color::Rgb(10, 14, 23),
            header_active_bg: rgb(Tone::Sky),
            border_fg: rgb(Tone::Slate),
            border_focused_fg: rgb(Tone::Blue),
            prompt_fg: rgb(Tone::Green),
            prompt_path_fg: rgb(Tone::Sky),
            input_fg: rgb(Tone::Snow),
            rain_head_fg: Color::Rgb(180, 255, 180),
            rain_trail: (0, 255, 0),
            monochrome: None,
        }
    }

    /// Green-on-black, applied by the `theme` command
    pub fn matrix() -> Self {
        let green = Color::Rgb(0, 255, 65);
        Self {
            name: "matrix".to_string(),
            page_bg: Color::Black,
            text_fg: green,
            header_fg: Color::Rgb(0, 160, 40),
            header_active_fg: Color::Black,
            header_active_bg: green,
            border_fg: Color::Rgb(0, 90, 20),
            border_focused_fg: green,
            prompt_fg: green,
            prompt_path_fg: green,
            input_fg: green,
            rain_head_fg: Color::Rgb(200, 255, 200),
            rain_trail: (0, 255, 0),
            monochrome: Some(green),
        }
    }

    pub fn for_state(theme_active: bool) -> Self {
        if theme_active {
            Self::matrix()
        } else {
            Self::default_theme()
        }
    }

    pub fn tone_color(&self, tone: Tone) -> Color {
        self.monochrome.unwrap_or_else(|| rgb(tone))
    }

    /// Style for a transcript fragment.
    pub fn fragment_style(&self, style: FragmentStyle) -> Style {
        let fg = style.tone.map_or(self.text_fg, |t| self.tone_color(t));
        let mut out = Style::default().fg(fg);
        if style.bold {
            out = out.add_modifier(Modifier::BOLD);
        }
        out
    }

    /// Rain glyph color at the given brightness.
    pub fn rain_color(&self, brightness: u8) -> Color {
        if brightness == u8::MAX {
            return self.rain_head_fg;
        }
        let scale = |c: u8| (u16::from(c) * u16::from(brightness) / 255) as u8;
        let (r, g, b) = self.rain_trail;
        Color::Rgb(scale(r), scale(g), scale(b))
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_theme()
    }
}

fn rgb(tone: Tone) -> Color {
    let (r, g, b) = tone.rgb();
    Color::Rgb(r, g, b)
}
