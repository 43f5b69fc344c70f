//! Write command executor

use std::fs::File;
use std::io::{BufWriter, Write};

use console::style;
use miette::{IntoDiagnostic, Result, WrapErr};

use super::load_solution;
use crate::config::WriteConfig;
use crate::executors::CommandExecutor;

pub struct WriteExecutor;

impl CommandExecutor for WriteExecutor {
    type Config = WriteConfig;

    fn execute(config: Self::Config) -> Result<()> {
        let graph = &config.graph;
        let solution = load_solution(&graph.solution, graph.load, graph.show_unresolved)?;

        let file = File::create(&config.target)
            .into_diagnostic()
            .wrap_err_with(|| format!("Failed to create '{}'", config.target.display()))?;
        let mut writer = BufWriter::new(file);

        graph
            .renderer()
            .render_dot(&solution, &graph.exclusions, &mut writer)
            .wrap_err("Failed to render DOT graph")?;
        writer
            .flush()
            .into_diagnostic()
            .wrap_err_with(|| format!("Failed to write '{}'", config.target.display()))?;

        eprintln!(
            "{} Graph written to {}",
            style("✓").green(),
            style(config.target.display()).bold()
        );
        eprintln!("{} Render it with:", style("ℹ").blue());
        println!("{}", config.render_command());

        Ok(())
    }
}
