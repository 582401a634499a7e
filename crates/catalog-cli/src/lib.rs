//! Use case catalog CLI library.
//!
//! This library provides the terminal presentation layer for the catalog
//! browser, including configuration management, command execution, the
//! interactive REPL and output formatting.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod repl;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;
