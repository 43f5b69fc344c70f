use petgraph::algo::tarjan_scc;
use petgraph::graph::{DiGraph, NodeIndex};

use crate::graph::ProjectNode;

/// Detector for finding dependency cycles between projects
#[derive(Debug, Default)]
pub struct CycleDetector {
    cycles: Vec<ProjectCycle>,
}

/// A set of projects that all depend on each other, directly or not
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectCycle {
    project_names: Vec<String>,
}

impl ProjectCycle {
    /// Names of the projects in the cycle, in solution order
    pub fn project_names(&self) -> &[String] {
        &self.project_names
    }
}

impl CycleDetector {
    /// Create a new cycle detector
    pub fn new() -> Self {
        Self { cycles: Vec::new() }
    }

    /// Detect all cycles in the dependency graph
    ///
    /// Cycles are ordered by the solution position of their first project.
    pub fn detect_cycles(&mut self, graph: &DiGraph<ProjectNode, ()>) {
        self.cycles.clear();

        let mut components: Vec<Vec<NodeIndex>> = tarjan_scc(graph)
            .into_iter()
            .filter(|scc| scc.len() > 1)
            .collect();

        for scc in &mut components {
            scc.sort_by_key(|&idx| graph[idx].position);
        }
        components.sort_by_key(|scc| graph[scc[0]].position);

        for scc in components {
            self.cycles.push(Self::cycle_from_scc(graph, &scc));
        }
    }

    fn cycle_from_scc(graph: &DiGraph<ProjectNode, ()>, scc: &[NodeIndex]) -> ProjectCycle {
        ProjectCycle {
            project_names: scc.iter().map(|&idx| graph[idx].name.clone()).collect(),
        }
    }

    /// Get all detected cycles
    pub fn cycles(&self) -> &[ProjectCycle] {
        &self.cycles
    }

    /// Check if any cycles were detected
    pub fn has_cycles(&self) -> bool {
        !self.cycles.is_empty()
    }

    /// Get the number of detected cycles
    pub fn cycle_count(&self) -> usize {
        self.cycles.len()
    }
}
