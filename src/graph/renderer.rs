use std::collections::HashSet;
use std::io::Write;

use miette::Result;

use crate::error::SlnDepsError;
use crate::exclusion::ExclusionFilter;
use crate::solution::Solution;

// Helper macro for write operations that converts IO errors
macro_rules! writeln_out {
    ($dst:expr) => {
        writeln!($dst).map_err(SlnDepsError::from)
    };
    ($dst:expr, $($arg:tt)*) => {
        writeln!($dst, $($arg)*).map_err(SlnDepsError::from)
    };
}

/// Renders a resolved solution as a Graphviz `digraph`
///
/// The output has one node per project, shaped by build kind, followed by
/// one block of edges per dependent project. Node identifiers are the
/// projects' safe names; the display name goes into the label.
#[derive(Debug, Clone, Copy, Default)]
pub struct GraphRenderer {
    reverse_arrows: bool,
    remove_empty: bool,
}

impl GraphRenderer {
    pub fn new(reverse_arrows: bool, remove_empty: bool) -> Self {
        Self {
            reverse_arrows,
            remove_empty,
        }
    }

    /// Produce the graph description line by line, without line terminators
    pub fn lines(&self, solution: &Solution, exclusions: &ExclusionFilter) -> Vec<String> {
        let projects = solution.projects();
        let blocks = edge_blocks(solution, exclusions);

        let connected: HashSet<usize> = blocks
            .iter()
            .flatten()
            .flat_map(|&(from, to)| [from, to])
            .collect();

        let mut lines = Vec::new();
        lines.push(format!("digraph {} {{", solution.name().replace('-', "_")));

        lines.push("/* projects */".to_string());
        for (position, project) in projects.iter().enumerate() {
            if exclusions.is_excluded(project.display_name()) {
                continue;
            }
            if self.remove_empty && !connected.contains(&position) {
                continue;
            }
            lines.push(format!(
                " {} [label=\"{}\", shape={}];",
                project.safe_name(),
                escape_label(project.display_name()),
                project.kind().shape()
            ));
        }
        lines.push(String::new());

        lines.push("/* dependencies */".to_string());
        for (i, block) in blocks.iter().enumerate() {
            if i > 0 {
                lines.push(String::new());
            }
            for &(dependent, dependency) in block {
                let (from, to) = if self.reverse_arrows {
                    (dependency, dependent)
                } else {
                    (dependent, dependency)
                };
                lines.push(format!(
                    " {} -> {};",
                    projects[from].safe_name(),
                    projects[to].safe_name()
                ));
            }
        }

        lines.push("}".to_string());
        lines
    }

    pub fn render_dot(
        &self,
        solution: &Solution,
        exclusions: &ExclusionFilter,
        output: &mut dyn Write,
    ) -> Result<()> {
        for line in self.lines(solution, exclusions) {
            writeln_out!(output, "{}", line)?;
        }
        Ok(())
    }

    /// Render into a string, mostly useful for tests and previews
    pub fn render_to_string(&self, solution: &Solution, exclusions: &ExclusionFilter) -> String {
        let mut text = self.lines(solution, exclusions).join("\n");
        text.push('\n');
        text
    }
}

/// Edges grouped by dependent project, keeping only non-empty groups
///
/// Each edge is `(dependent, dependency)` as positions in the solution.
fn edge_blocks(solution: &Solution, exclusions: &ExclusionFilter) -> Vec<Vec<(usize, usize)>> {
    let projects = solution.projects();

    projects
        .iter()
        .enumerate()
        .filter(|(_, project)| !exclusions.is_excluded(project.display_name()))
        .map(|(position, project)| {
            project
                .resolved_indices()
                .iter()
                .filter(|&&target| !exclusions.is_excluded(projects[target].display_name()))
                .map(|&target| (position, target))
                .collect::<Vec<_>>()
        })
        .filter(|block| !block.is_empty())
        .collect()
}

fn escape_label(label: &str) -> String {
    label.replace('\\', "\\\\").replace('"', "\\\"")
}
