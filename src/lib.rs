//! # slndeps - Graph Visual Studio Solution Dependencies
//!
//! slndeps reads a Visual Studio solution (`.sln`) and the `.vcxproj` and
//! `.csproj` files it references, works out which project depends on which,
//! and describes the result as a Graphviz DOT graph.
//!
//! ## Main Components
//!
//! - **Solution**: Parses the solution file and project files into a table
//!   of projects with resolved dependencies
//! - **Graph**: Removes implied dependencies and renders the DOT description
//! - **Detector**: Finds dependency cycles (Tarjan's SCC)
//! - **Reports**: Lists the projects of a solution for people and tools
//!
//! ## Usage
//!
//! ### Example: Rendering a Solution
//!
//! ```no_run
//! use std::path::Path;
//!
//! use slndeps::exclusion::ExclusionFilter;
//! use slndeps::graph::GraphRenderer;
//! use slndeps::solution::{LoadOptions, Solution};
//! use miette::IntoDiagnostic;
//!
//! # fn main() -> miette::Result<()> {
//! // Load the solution, dropping dependencies implied by longer paths
//! let solution = Solution::load(Path::new("Engine.sln"), LoadOptions { simplify: true })?;
//!
//! for warning in solution.warnings() {
//!     eprintln!("warning: {warning}");
//! }
//!
//! // Leave test projects and CMake's helper targets out of the picture
//! let exclusions = ExclusionFilter::new()
//!     .with_pattern("*Tests")?
//!     .with_cmake_targets();
//!
//! let mut dot_output = Vec::new();
//! GraphRenderer::new(false, false).render_dot(&solution, &exclusions, &mut dot_output)?;
//!
//! std::fs::write("Engine.gv", dot_output).into_diagnostic()?;
//! # Ok(())
//! # }
//! ```
//!
//! ### Example: Finding Cycles
//!
//! ```no_run
//! use std::path::Path;
//!
//! use slndeps::detector::CycleDetector;
//! use slndeps::graph::DependencyGraphBuilder;
//! use slndeps::solution::{LoadOptions, Solution};
//!
//! # fn main() -> miette::Result<()> {
//! let solution = Solution::load(Path::new("Engine.sln"), LoadOptions::default())?;
//!
//! let graph = DependencyGraphBuilder::new().build(&solution);
//! let mut detector = CycleDetector::new();
//! detector.detect_cycles(&graph);
//!
//! for cycle in detector.cycles() {
//!     println!("Cycle: {}", cycle.project_names().join(" → "));
//! }
//! # Ok(())
//! # }
//! ```

// Private modules
mod constants;
mod project_file;
mod utils;

// Public modules
pub mod cli;
pub mod commands;
pub mod common;
pub mod config;
pub mod detector;
pub mod error;
pub mod exclusion;
pub mod executors;
pub mod graph;
pub mod reports;
pub mod solution;

// Main entry point for the library
pub fn run() -> miette::Result<()> {
    use clap::Parser;

    use crate::cli::Cli;
    use crate::commands::execute_command;

    let cli = Cli::parse();
    execute_command(cli.command)
}
