//! Storage adapters for spilled tool output

mod temp_output;

pub use temp_output::TempOutputStore;
