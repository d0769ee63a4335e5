//! LogoApp library exports for testing

use clap::ValueEnum;

pub mod console;
pub mod core;
pub mod error;
pub mod store;
pub mod tui;

#[cfg(test)]
pub mod test_support;

pub use error::AppError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Launcher {
    /// Full-screen terminal interface
    #[default]
    Tui,
    /// Line-based add/list/delete prompts
    Console,
}
