//! # Graph Construction and Rendering Module
//!
//! This module turns a loaded [`Solution`](crate::solution::Solution) into a
//! graph and back into text.
//!
//! ## Components
//!
//! - **GraphSimplifier**: removes dependencies already implied by a longer
//!   path, working on the raw dependency identifiers
//! - **DependencyGraphBuilder**: builds a `petgraph` graph of the resolved
//!   dependencies, used for cycle detection
//! - **GraphRenderer**: emits the Graphviz DOT description
//!
//! ## Example
//!
//! ```
//! use slndeps::exclusion::ExclusionFilter;
//! use slndeps::graph::GraphRenderer;
//! use slndeps::solution::{BuildKind, Project, Solution};
//!
//! let mut solution = Solution::new("demo");
//! let mut app = Project::new("App", "App/App.vcxproj", "{1}");
//! app.set_kind(BuildKind::Application);
//! app.add_raw_dependency("{2}");
//! solution.add_project(app);
//! solution.add_project(Project::new("Core", "Core/Core.vcxproj", "{2}"));
//! solution.resolve();
//!
//! let lines = GraphRenderer::new(false, false).lines(&solution, &ExclusionFilter::new());
//! assert_eq!(lines[0], "digraph demo {");
//! assert!(lines.contains(&" App -> Core;".to_string()));
//! ```

mod builder;
mod renderer;
mod simplifier;
mod types;

pub use builder::DependencyGraphBuilder;
pub use renderer::GraphRenderer;
pub use simplifier::{GraphSimplifier, SimplifyOutcome};
pub use types::ProjectNode;
