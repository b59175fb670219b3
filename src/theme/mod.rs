//! Visual theme: palette constants and global stylesheet.

pub mod colors;
mod styles;

pub use styles::GLOBAL_STYLES;
