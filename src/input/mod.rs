//! Input handling
//!
//! The controller is backend independent; the translator adapts crossterm
//! events to it.

pub mod controller;
#[cfg(feature = "runtime")]
pub mod key_translator;

pub use controller::{InputAction, InputController, InputLine, InputResult, TerminalKey};
