//! Interpreter application
//!
//! Dispatch, the terminal component, the matrix effect and the page shell
//! that hosts them.

pub mod dispatch;
pub mod matrix;
pub mod page;
pub mod terminal;

pub use dispatch::{Dispatch, DispatchKind, Dispatcher};
pub use page::Page;
pub use terminal::{Area, Terminal, TerminalError, TerminalParts};
