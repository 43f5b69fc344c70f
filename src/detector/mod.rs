//! # Cycle Detection Module
//!
//! Finds circular dependencies between the projects of a solution.
//!
//! ## Algorithm
//!
//! Tarjan's Strongly Connected Components algorithm runs over the resolved
//! dependency graph in O(V + E). Every component with more than one project
//! is a cycle. A project that lists itself as a dependency forms a component
//! of size one and is not reported.
//!
//! ## Example
//!
//! ```
//! use petgraph::graph::DiGraph;
//! use slndeps::detector::CycleDetector;
//! use slndeps::graph::ProjectNode;
//! use slndeps::solution::BuildKind;
//!
//! let mut graph = DiGraph::new();
//! let a = graph.add_node(ProjectNode {
//!     name: "A".to_string(),
//!     kind: BuildKind::Application,
//!     position: 0,
//! });
//! let b = graph.add_node(ProjectNode {
//!     name: "B".to_string(),
//!     kind: BuildKind::StaticLibrary,
//!     position: 1,
//! });
//! graph.add_edge(a, b, ());
//! graph.add_edge(b, a, ());
//!
//! let mut detector = CycleDetector::new();
//! detector.detect_cycles(&graph);
//!
//! assert!(detector.has_cycles());
//! assert_eq!(detector.cycles()[0].project_names(), &["A", "B"]);
//! ```

mod detector_impl;

pub use detector_impl::*;
