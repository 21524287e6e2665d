//! Console view — prompts, report lines and number formatting

pub mod console;
pub mod format;

pub use console::{ConsoleInput, ConsoleOutput};
pub use format::{format_numbers, format_rate, group_thousands};
