//! Colour roles for rendered tool output

use colored::Colorize;

/// Semantic colour roles used by the renderers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    ToolTitle,
    Accent,
    Dim,
    Muted,
    Success,
    Warning,
    Error,
}

/// Maps [`Role`]s onto terminal styles
///
/// The plain theme returns text unchanged; it is used for `--no-color`,
/// non-terminal output and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    color: bool,
}

impl Theme {
    pub fn color() -> Self {
        Self { color: true }
    }

    pub fn plain() -> Self {
        Self { color: false }
    }

    pub fn new(color: bool) -> Self {
        Self { color }
    }

    pub fn fg(&self, role: Role, text: &str) -> String {
        if !self.color {
            return text.to_string();
        }
        match role {
            Role::ToolTitle => text.bright_white().to_string(),
            Role::Accent => text.cyan().to_string(),
            Role::Dim => text.dimmed().to_string(),
            Role::Muted => text.bright_black().to_string(),
            Role::Success => text.green().to_string(),
            Role::Warning => text.yellow().to_string(),
            Role::Error => text.red().to_string(),
        }
    }

    pub fn bold(&self, text: &str) -> String {
        if self.color {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::color()
    }
}
