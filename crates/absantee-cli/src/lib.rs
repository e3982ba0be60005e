//! Command-line interface for absantee.
//!
//! `main.rs` is the composition root; this library holds the argument
//! definitions and the command handlers so they can be tested.

pub mod commands;
pub mod handlers;
pub mod parser;

pub use commands::Commands;
pub use parser::Cli;
