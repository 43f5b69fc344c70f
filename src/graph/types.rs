//! Core graph types

use crate::solution::BuildKind;

/// A project node in the dependency graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectNode {
    pub name: String,
    pub kind: BuildKind,
    /// Position of the project in its solution
    pub position: usize,
}

impl ProjectNode {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> BuildKind {
        self.kind
    }
}
