//! Command line interface for the wordgrid engine.

pub mod args;
pub mod commands;
pub mod output;

pub use args::{OutputFormat, WordGridArgs};
pub use commands::execute;
