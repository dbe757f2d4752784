//! Presentation layer for kagi-tools
//!
//! This crate contains CLI definitions, tool renderers and the console
//! output formatter.

pub mod cli;
pub mod output;
pub mod render;

// Re-export commonly used types
pub use cli::commands::{Cli, Command};
pub use output::console::ConsoleFormatter;
pub use render::{RenderState, Role, Theme, ToolRenderer, renderer_for};
