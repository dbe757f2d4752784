//! Core domain concepts

pub mod error;
