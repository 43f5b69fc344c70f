//! Command implementations for the slndeps CLI
//!
//! - source: print the graph description
//! - write: write the graph description and print the render command
//! - list: list the projects of a solution

pub mod list;
pub mod source;
pub mod write;

use miette::Result;

use crate::cli::Commands;

/// Execute a command based on CLI input
pub fn execute_command(command: Commands) -> Result<()> {
    match &command {
        Commands::Source { .. } => source::execute_source_command(command),
        Commands::Write { .. } => write::execute_write_command(command),
        Commands::List { .. } => list::execute_list_command(command),
    }
}
