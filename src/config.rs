use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Starting theme: "default" or "matrix"
    #[serde(default = "default_theme_name")]
    pub theme: String,

    #[serde(default)]
    pub terminal: TerminalConfig,

    #[serde(default)]
    pub matrix: MatrixConfig,

    #[serde(default)]
    pub documents: DocumentsConfig,
}

fn default_theme_name() -> String {
    "default".to_string()
}

/// Names accepted by the `theme` field
pub const THEME_NAMES: &[&str] = &["default", "matrix"];

/// Terminal behavior configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TerminalConfig {
    /// Delay between consecutive output lines of one command
    #[serde(default = "default_reveal_stagger")]
    pub reveal_stagger_ms: u64,

    /// Delay before the input row regains focus after a dispatch
    #[serde(default = "default_focus_delay")]
    pub focus_delay_ms: u64,

    /// How many recent entries `history` lists
    #[serde(default = "default_history_listing_limit")]
    pub history_listing_limit: usize,

    /// Marker drawn before echoed commands
    #[serde(default = "default_prompt_marker")]
    pub prompt_marker: String,

    /// Oldest transcript lines are dropped beyond this count (0 = unlimited)
    #[serde(default)]
    pub max_transcript_lines: usize,
}

fn default_reveal_stagger() -> u64 {
    30
}

fn default_focus_delay() -> u64 {
    100
}

fn default_history_listing_limit() -> usize {
    15
}

fn default_prompt_marker() -> String {
    "\u{279c}".to_string()
}

impl TerminalConfig {
    pub fn reveal_stagger(&self) -> Duration {
        Duration::from_millis(self.reveal_stagger_ms)
    }

    pub fn focus_delay(&self) -> Duration {
        Duration::from_millis(self.focus_delay_ms)
    }
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            reveal_stagger_ms: default_reveal_stagger(),
            focus_delay_ms: default_focus_delay(),
            history_listing_limit: default_history_listing_limit(),
            prompt_marker: default_prompt_marker(),
            max_transcript_lines: 0,
        }
    }
}

/// Matrix rain effect configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatrixConfig {
    #[serde(default = "default_matrix_duration")]
    pub duration_ms: u64,

    #[serde(default = "default_matrix_frame_interval")]
    pub frame_interval_ms: u64,
}

fn default_matrix_duration() -> u64 {
    5000
}

fn default_matrix_frame_interval() -> u64 {
    40
}

impl MatrixConfig {
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms)
    }
}

impl Default for MatrixConfig {
    fn default() -> Self {
        Self {
            duration_ms: default_matrix_duration(),
            frame_interval_ms: default_matrix_frame_interval(),
        }
    }
}

/// Documents opened by `resume` and `rickroll`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentsConfig {
    #[serde(default = "default_resume_path")]
    pub resume_path: String,

    #[serde(default = "default_rickroll_url")]
    pub rickroll_url: String,
}

fn default_resume_path() -> String {
    "Vineet Kishore Resume.pdf".to_string()
}

fn default_rickroll_url() -> String {
    "https://www.youtube.com/watch?v=dQw4w9WgXcQ".to_string()
}

impl Default for DocumentsConfig {
    fn default() -> Self {
        Self {
            resume_path: default_resume_path(),
            rickroll_url: default_rickroll_url(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme_name(),
            terminal: TerminalConfig::default(),
            matrix: MatrixConfig::default(),
            documents: DocumentsConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::IoError(format!("{}: {}", path.as_ref().display(), e)))?;

        let config: Config =
            serde_json::from_str(&contents).map_err(|e| ConfigError::ParseError(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| ConfigError::SerializeError(e.to_string()))?;

        std::fs::write(path.as_ref(), contents).map_err(|e| ConfigError::IoError(e.to_string()))?;

        Ok(())
    }

    /// Whether the terminal starts in the alternate theme
    pub fn starts_with_theme_active(&self) -> bool {
        self.theme == "matrix"
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !THEME_NAMES.contains(&self.theme.as_str()) {
            return Err(ConfigError::ValidationError(format!(
                "unknown theme '{}', expected one of: {}",
                self.theme,
                THEME_NAMES.join(", ")
            )));
        }

        if self.terminal.prompt_marker.is_empty() {
            return Err(ConfigError::ValidationError(
                "prompt_marker cannot be empty".to_string(),
            ));
        }

        if self.terminal.history_listing_limit == 0 {
            return Err(ConfigError::ValidationError(
                "terminal.history_listing_limit must be greater than 0".to_string(),
            ));
        }

        if self.matrix.frame_interval_ms == 0 {
            return Err(ConfigError::ValidationError(
                "matrix.frame_interval_ms must be greater than 0".to_string(),
            ));
        }

        if self.matrix.duration_ms == 0 {
            return Err(ConfigError::ValidationError(
                "matrix.duration_ms must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

/// Configuration error types
#[derive(Debug)]
pub enum ConfigError {
    IoError(String),
    ParseError(String),
    SerializeError(String),
    ValidationError(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(msg) => write!(f, "IO error: {msg}"),
            ConfigError::ParseError(msg) => write!(f, "Parse error: {msg}"),
            ConfigError::SerializeError(msg) => write!(f, "Serialize error: {msg}"),
            ConfigError::ValidationError(msg) => write!(f, "Validation error: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}
