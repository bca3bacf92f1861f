//! Command table and directives

mod content;
pub mod directive;
pub mod registry;

pub use content::WEATHER_MOODS;
pub use directive::{Directive, DIRECTIVE_KEYWORDS, SECTION_ALIASES};
pub use registry::{CommandContext, CommandEntry, CommandOutput, Effect, Registry, RegistryError};
