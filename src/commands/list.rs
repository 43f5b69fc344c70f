//! List command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::ListConfig;
use crate::error::SlnDepsError;
use crate::solution::LoadOptions;

impl FromCommand for ListConfig {
    fn from_command(command: Commands) -> Result<Self, SlnDepsError> {
        match command {
            Commands::List { solution, format } => ListConfig::builder()
                .solution(solution.solution)
                .load(LoadOptions {
                    simplify: solution.simplify,
                })
                .show_unresolved(solution.show_unresolved)
                .format(format.format)
                .build(),
            _ => Err(SlnDepsError::ConfigurationError {
                message: "Invalid command type for ListConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(ListConfig);

/// Execute the list command
pub fn execute_list_command(command: Commands) -> Result<()> {
    let config =
        ListConfig::from_command(command).wrap_err("Failed to parse list command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::list::ListExecutor;
    ListExecutor::execute(config)
}
