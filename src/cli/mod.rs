//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for Heritage using clap.

pub mod commands;

use crate::domain::HeritageError;
use clap::{Parser, Subcommand};

/// Successful run
pub const EXIT_OK: i32 = 0;
/// Configuration could not be loaded or is invalid
pub const EXIT_CONFIG: i32 = 2;
/// Query or argument rejected
pub const EXIT_INVALID_INPUT: i32 = 3;
/// An upstream dataset could not be fetched
pub const EXIT_UPSTREAM: i32 = 4;
/// Anything else
pub const EXIT_FATAL: i32 = 5;

/// Heritage - historic monuments of the Lille metropolitan area
#[derive(Parser, Debug)]
#[command(name = "heritage")]
#[command(version, about, long_about = None)]
#[command(author = "Heritage Contributors")]
pub struct Cli {
    /// Path to configuration file (built-in defaults when omitted)
    #[arg(short, long, env = "HERITAGE_CONFIG")]
    pub config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "HERITAGE_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch all datasets and list the monuments matching the filters
    Monuments(commands::monuments::MonumentsArgs),

    /// Fetch all datasets, then mark monuments as favorites
    Favorite(commands::favorite::FavoriteArgs),

    /// Fetch all datasets and list the distinct monument types
    Types(commands::types::TypesArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}

/// Process exit code for an error
pub fn exit_code_for(error: &HeritageError) -> i32 {
    match error {
        HeritageError::Configuration(_) => EXIT_CONFIG,
        HeritageError::Validation(_)
        | HeritageError::NotFound(_)
        | HeritageError::AlreadyFavorited(_) => EXIT_INVALID_INPUT,
        HeritageError::Aggregation { .. } | HeritageError::Fetch(_) => EXIT_UPSTREAM,
        _ => EXIT_FATAL,
    }
}
