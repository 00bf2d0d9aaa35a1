//! Command-line interface for tasktok.

pub mod args;
pub mod commands;
