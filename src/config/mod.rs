//! # Configuration Module
//!
//! Configuration structures for the slndeps commands. Each command turns its
//! parsed arguments into one of these through a builder generated by the
//! `impl_builder!` macro.
//!
//! ## Command Configurations
//!
//! - **SourceConfig**: print the graph description
//! - **WriteConfig**: write the graph description and print the render
//!   command
//! - **ListConfig**: list the projects of a solution
//! - **GraphOptions**: loading and emission options shared by `source` and
//!   `write`
//!
//! ## Example
//!
//! ```
//! use std::path::PathBuf;
//!
//! use slndeps::cli::OutputFormat;
//! use slndeps::common::ConfigBuilder;
//! use slndeps::config::ListConfig;
//! use slndeps::solution::LoadOptions;
//!
//! let config = ListConfig::builder()
//!     .solution(PathBuf::from("Demo.sln"))
//!     .load(LoadOptions { simplify: true })
//!     .show_unresolved(false)
//!     .format(OutputFormat::Json)
//!     .build()
//!     .unwrap();
//! assert!(config.load.simplify);
//! ```

pub mod graph;
pub mod list;
pub mod write;

pub use graph::{GraphOptions, SourceConfig};
pub use list::ListConfig;
pub use write::WriteConfig;
