//! Command executors that handle the actual logic for each command

pub mod list;
pub mod source;
pub mod write;

use std::path::Path;

use console::style;
use miette::{Result, WrapErr};

use crate::solution::{LoadOptions, Solution};
use crate::utils::string::pluralize;

/// Trait for command executors
pub trait CommandExecutor {
    type Config;

    /// Execute the command with the given configuration
    fn execute(config: Self::Config) -> Result<()>;
}

/// Load a solution and report what went wrong along the way on stderr
fn load_solution(path: &Path, options: LoadOptions, show_unresolved: bool) -> Result<Solution> {
    eprintln!(
        "{} Loading solution {}...",
        style("📂").cyan(),
        style(path.display()).bold()
    );

    let solution = Solution::load(path, options)
        .wrap_err_with(|| format!("Failed to load solution '{}'", path.display()))?;

    for warning in solution.visible_warnings(show_unresolved) {
        eprintln!("{} {}", style("⚠").yellow(), warning);
    }

    if let Some(outcome) = solution.simplify_outcome() {
        eprintln!(
            "{} Simplified away {} implied {}",
            style("ℹ").blue(),
            outcome.removed,
            pluralize("edge", outcome.removed)
        );
        if outcome.cycle_encountered {
            eprintln!(
                "{} Simplification ran into a dependency cycle, edges inside it were kept",
                style("⚠").yellow()
            );
        }
    }

    eprintln!(
        "{} Loaded {} {}",
        style("✓").green(),
        solution.projects().len(),
        pluralize("project", solution.projects().len())
    );

    Ok(solution)
}
