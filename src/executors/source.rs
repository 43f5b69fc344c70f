//! Source command executor

use std::fs::File;
use std::io::{self, BufWriter, Write};

use console::style;
use miette::{IntoDiagnostic, Result, WrapErr};

use super::load_solution;
use crate::config::SourceConfig;
use crate::executors::CommandExecutor;

pub struct SourceExecutor;

impl CommandExecutor for SourceExecutor {
    type Config = SourceConfig;

    fn execute(config: Self::Config) -> Result<()> {
        let graph = &config.graph;
        let solution = load_solution(&graph.solution, graph.load, graph.show_unresolved)?;

        let mut output_writer: Box<dyn Write> = if let Some(output_path) = config.output.as_ref()
        {
            Box::new(BufWriter::new(
                File::create(output_path)
                    .into_diagnostic()
                    .wrap_err_with(|| {
                        format!("Failed to create output file '{}'", output_path.display())
                    })?,
            ))
        } else {
            Box::new(io::stdout())
        };

        graph
            .renderer()
            .render_dot(&solution, &graph.exclusions, output_writer.as_mut())
            .wrap_err("Failed to render DOT graph")?;
        output_writer
            .flush()
            .into_diagnostic()
            .wrap_err("Failed to flush graph output")?;

        if let Some(output_path) = config.output {
            eprintln!(
                "{} Graph written to {}",
                style("✓").green(),
                style(output_path.display()).bold()
            );
        }

        Ok(())
    }
}
