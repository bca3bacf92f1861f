//! Core data model
//!
//! Pure types with no terminal dependencies.

pub mod line;
pub mod session;
