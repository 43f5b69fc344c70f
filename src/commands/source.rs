//! Source command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::{GraphOptions, SourceConfig};
use crate::error::SlnDepsError;

impl FromCommand for SourceConfig {
    fn from_command(command: Commands) -> Result<Self, SlnDepsError> {
        match command {
            Commands::Source {
                solution,
                graph,
                output,
            } => SourceConfig::builder()
                .graph(GraphOptions::from_args(solution, graph)?)
                .output(output)
                .build(),
            _ => Err(SlnDepsError::ConfigurationError {
                message: "Invalid command type for SourceConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(SourceConfig);

/// Execute the source command, printing the graph description
pub fn execute_source_command(command: Commands) -> Result<()> {
    let config = SourceConfig::from_command(command)
        .wrap_err("Failed to parse source command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::source::SourceExecutor;
    SourceExecutor::execute(config)
}
