// Command center library - exposes the interpreter core for testing

pub mod app;
pub mod commands;
pub mod config;
#[cfg(feature = "runtime")]
pub mod config_io;
pub mod input;
pub mod model;
pub mod services;
pub mod view;
