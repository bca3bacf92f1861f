//! Collaborators and platform integration
//!
//! Clocks, randomness, page navigation and document opening sit behind
//! traits so the terminal can be driven deterministically in tests.

#[cfg(feature = "runtime")]
pub mod log_dirs;
pub mod navigation;
pub mod opener;
pub mod random;
#[cfg(feature = "runtime")]
pub mod terminal_modes;
pub mod time_source;
#[cfg(feature = "runtime")]
pub mod tracing_setup;
