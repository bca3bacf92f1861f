#[cfg(feature = "runtime")]
pub mod render;
pub mod reveal;
#[cfg(feature = "runtime")]
pub mod theme;
pub mod transcript;
