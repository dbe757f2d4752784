//! Output formatting for tool invocations

pub mod console;
