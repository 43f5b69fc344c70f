//! # Solution Loading Module
//!
//! This module reads a Visual Studio solution file, the project files it
//! points at, and turns them into a table of [`Project`] records with resolved
//! dependencies.
//!
//! ## Pipeline
//!
//! 1. The solution text is parsed line by line into project declarations
//! 2. Each project file is located and read for its build kind and project
//!    references
//! 3. Optionally, implied dependencies are removed (see
//!    [`crate::graph::GraphSimplifier`])
//! 4. Dependency identifiers are resolved into project references
//!
//! Only a malformed project declaration aborts loading. Everything else is
//! recorded as a [`LoadWarning`] and loading carries on.
//!
//! ## Example
//!
//! ```
//! use std::path::Path;
//!
//! use slndeps::solution::{LoadOptions, Solution};
//!
//! # fn main() -> miette::Result<()> {
//! let text = r#"
//! Project("{8BC9CEB8}") = "App", "App\App.vcxproj", "{A1}"
//! 	ProjectSection(ProjectDependencies) = postProject
//! 		{B2} = {B2}
//! 	EndProjectSection
//! EndProject
//! Project("{8BC9CEB8}") = "Core", "Core\Core.vcxproj", "{B2}"
//! EndProject
//! "#;
//!
//! let mut solution = Solution::parse("Demo", "Demo.sln", text, Path::new("."))?;
//! solution.finish(LoadOptions::default());
//!
//! let app = solution.get("{a1}").unwrap();
//! let deps: Vec<&str> = solution.dependencies_of(app).map(|p| p.display_name()).collect();
//! assert_eq!(deps, vec!["Core"]);
//! # Ok(())
//! # }
//! ```

mod parser;
mod project;
mod solution_impl;
mod warning;

pub use parser::{ProjectDeclaration, parse_solution};
pub use project::{BuildKind, Project, safe_name};
pub use solution_impl::{LoadOptions, Solution};
pub use warning::LoadWarning;
