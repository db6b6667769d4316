//! Command implementations for check-dependency CLI
//!
//! This module contains the implementations for each CLI command:
//! - check: Report whether a dependency listing contains a cycle
//! - lineup: Print the parsed dependency listing

pub mod check;
pub mod lineup;

use miette::Result;

use crate::cli::Commands;

/// Execute a command based on CLI input
pub fn execute_command(command: Commands) -> Result<()> {
    match &command {
        Commands::Check { .. } => check::execute_check_command(command),
        Commands::Lineup { .. } => lineup::execute_lineup_command(command),
    }
}
