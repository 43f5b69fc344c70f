//! Write command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::write::{resolve_target, value_or_default};
use crate::config::{GraphOptions, WriteConfig};
use crate::constants::graphviz;
use crate::error::SlnDepsError;

impl FromCommand for WriteConfig {
    fn from_command(command: Commands) -> Result<Self, SlnDepsError> {
        match command {
            Commands::Write {
                solution,
                graph,
                target,
                format,
                style,
            } => {
                let target = resolve_target(&solution.solution, target.as_deref());
                WriteConfig::builder()
                    .graph(GraphOptions::from_args(solution, graph)?)
                    .target(target)
                    .image_format(value_or_default(
                        format.as_deref(),
                        graphviz::DEFAULT_IMAGE_FORMAT,
                    ))
                    .layout(value_or_default(style.as_deref(), graphviz::DEFAULT_LAYOUT))
                    .build()
            }
            _ => Err(SlnDepsError::ConfigurationError {
                message: "Invalid command type for WriteConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(WriteConfig);

/// Execute the write command, producing a `.gv` file
pub fn execute_write_command(command: Commands) -> Result<()> {
    let config = WriteConfig::from_command(command)
        .wrap_err("Failed to parse write command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::write::WriteExecutor;
    WriteExecutor::execute(config)
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};

    use clap::Parser;

    use super::*;
    use crate::cli::Cli;

    #[test]
    fn test_write_defaults() {
        let cli = Cli::try_parse_from(["slndeps", "write", "ws/Demo.sln", "--style", "?"]).unwrap();
        let config = WriteConfig::try_from(cli.command).unwrap();

        assert_eq!(config.target, Path::new("ws").join("Demo.gv"));
        assert_eq!(config.image_format, "svg");
        assert_eq!(config.layout, "dot");
        assert_eq!(config.graph.solution, PathBuf::from("ws/Demo.sln"));
    }

    #[test]
    fn test_wrong_command_is_rejected() {
        let cli = Cli::try_parse_from(["slndeps", "list", "Demo.sln"]).unwrap();
        assert!(WriteConfig::try_from(cli.command).is_err());
    }
}
