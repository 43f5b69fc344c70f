//! List command executor

use miette::{Result, WrapErr};

use super::load_solution;
use crate::cli::OutputFormat;
use crate::config::ListConfig;
use crate::executors::CommandExecutor;
use crate::reports::{HumanReportGenerator, JsonReportGenerator, ReportGenerator};

pub struct ListExecutor;

impl CommandExecutor for ListExecutor {
    type Config = ListConfig;

    fn execute(config: Self::Config) -> Result<()> {
        let solution = load_solution(&config.solution, config.load, config.show_unresolved)?;

        let report = match config.format {
            OutputFormat::Human => HumanReportGenerator::new().generate_report(&solution),
            OutputFormat::Json => JsonReportGenerator::new()
                .with_unresolved(config.show_unresolved)
                .generate_report(&solution),
        }
        .wrap_err("Failed to generate project list")?;

        println!("{report}");
        Ok(())
    }
}
