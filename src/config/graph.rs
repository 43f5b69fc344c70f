//! Graph emission configuration shared by `source` and `write`

use std::path::PathBuf;

use crate::common::{ConfigBuilder, GraphArgs, SolutionArgs};
use crate::error::SlnDepsError;
use crate::exclusion::ExclusionFilter;
use crate::graph::GraphRenderer;
use crate::impl_builder;
use crate::solution::LoadOptions;

#[derive(Debug, Clone)]
pub struct GraphOptions {
    pub solution: PathBuf,
    pub load: LoadOptions,
    pub show_unresolved: bool,
    pub exclusions: ExclusionFilter,
    pub reverse: bool,
    pub remove_empty: bool,
}

impl GraphOptions {
    pub fn builder() -> GraphOptionsBuilder {
        GraphOptionsBuilder::new()
    }

    /// Collect the options from the parsed command line arguments
    pub fn from_args(solution: SolutionArgs, graph: GraphArgs) -> Result<Self, SlnDepsError> {
        GraphOptions::builder()
            .exclusions(graph.exclusion_filter()?)
            .solution(solution.solution)
            .load(LoadOptions {
                simplify: solution.simplify,
            })
            .show_unresolved(solution.show_unresolved)
            .reverse(graph.reverse)
            .remove_empty(graph.remove_empty)
            .build()
    }

    pub fn renderer(&self) -> GraphRenderer {
        GraphRenderer::new(self.reverse, self.remove_empty)
    }
}

impl_builder! {
    GraphOptionsBuilder => GraphOptions {
        solution: PathBuf,
        load: LoadOptions,
        show_unresolved: bool,
        exclusions: ExclusionFilter,
        reverse: bool,
        remove_empty: bool,
    }
}

/// Configuration of the `source` command
#[derive(Debug, Clone)]
pub struct SourceConfig {
    pub graph: GraphOptions,
    pub output: Option<PathBuf>,
}

impl SourceConfig {
    pub fn builder() -> SourceConfigBuilder {
        SourceConfigBuilder::new()
    }
}

impl_builder! {
    SourceConfigBuilder => SourceConfig {
        graph: GraphOptions,
        output: Option<PathBuf>,
    }
}
