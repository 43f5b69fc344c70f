use petgraph::graph::{DiGraph, NodeIndex};

use super::types::ProjectNode;
use crate::solution::Solution;

/// Builds a `petgraph` view of a solution's resolved dependencies
///
/// Nodes are added in project declaration order, so `NodeIndex::new(i)` is
/// the project at position `i`. Every resolved reference becomes one edge
/// from the dependent to the dependency; duplicates are kept.
#[derive(Debug, Default)]
pub struct DependencyGraphBuilder;

impl DependencyGraphBuilder {
    pub fn new() -> Self {
        Self
    }

    pub fn build(&self, solution: &Solution) -> DiGraph<ProjectNode, ()> {
        let mut graph = DiGraph::with_capacity(solution.projects().len(), 0);

        for (position, project) in solution.projects().iter().enumerate() {
            graph.add_node(ProjectNode {
                name: project.display_name().to_string(),
                kind: project.kind(),
                position,
            });
        }

        for (position, project) in solution.projects().iter().enumerate() {
            for &target in project.resolved_indices() {
                graph.add_edge(NodeIndex::new(position), NodeIndex::new(target), ());
            }
        }

        graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solution::Project;

    #[test]
    fn test_build_mirrors_resolved_dependencies() {
        let mut solution = Solution::new("demo");
        let mut app = Project::new("App", "App", "{1}");
        app.add_raw_dependency("{2}");
        app.add_raw_dependency("{missing}");
        solution.add_project(app);
        solution.add_project(Project::new("Lib", "Lib", "{2}"));
        solution.resolve();

        let graph = DependencyGraphBuilder::new().build(&solution);

        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph[NodeIndex::new(0)].name(), "App");
        assert!(graph.contains_edge(NodeIndex::new(0), NodeIndex::new(1)));
    }

    #[test]
    fn test_build_empty_solution() {
        let graph = DependencyGraphBuilder::new().build(&Solution::new("empty"));
        assert_eq!(graph.node_count(), 0);
    }
}
