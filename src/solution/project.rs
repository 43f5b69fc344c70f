//! Project records
//!
//! A [`Project`] is one build target declared by a solution file. Its kind and
//! raw dependency identifiers are filled in later by the project file reader;
//! its resolved dependencies are indices into the owning solution's project
//! table and are only meaningful together with that solution.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

/// Classification of what a project produces when built
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BuildKind {
    #[default]
    Unknown,
    Application,
    StaticLibrary,
    SharedLibrary,
}

impl BuildKind {
    /// Maps a numeric `ConfigurationType` attribute code
    pub fn from_configuration_code(code: &str) -> Option<Self> {
        match code.trim() {
            "1" => Some(BuildKind::Application),
            "2" => Some(BuildKind::SharedLibrary),
            "4" => Some(BuildKind::StaticLibrary),
            _ => None,
        }
    }

    /// Node shape used when drawing the graph description
    pub fn shape(&self) -> &'static str {
        match self {
            BuildKind::Application => "folder",
            BuildKind::SharedLibrary => "ellipse",
            BuildKind::StaticLibrary => "component",
            BuildKind::Unknown => "plaintext",
        }
    }
}

impl fmt::Display for BuildKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildKind::Unknown => write!(f, "unknown"),
            BuildKind::Application => write!(f, "application"),
            BuildKind::StaticLibrary => write!(f, "static library"),
            BuildKind::SharedLibrary => write!(f, "shared library"),
        }
    }
}

/// One build target of a solution
#[derive(Debug, Clone)]
pub struct Project {
    display_name: String,
    id: String,
    path: PathBuf,
    kind: BuildKind,
    raw_dependencies: Vec<String>,
    resolved: Vec<usize>,
}

impl Project {
    /// Create a project as declared by a solution file.
    ///
    /// `path` is the project file location without any forced extension.
    pub fn new(display_name: impl Into<String>, path: impl Into<PathBuf>, id: &str) -> Self {
        Self {
            display_name: display_name.into(),
            id: id.to_string(),
            path: path.into(),
            kind: BuildKind::Unknown,
            raw_dependencies: Vec::new(),
            resolved: Vec::new(),
        }
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Identifier exactly as written in the solution file
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Case-folded identifier used as the solution lookup key
    pub fn key(&self) -> String {
        self.id.to_lowercase()
    }

    /// Name usable as a graph node identifier.
    ///
    /// Only used when rendering, never for lookups.
    pub fn safe_name(&self) -> String {
        safe_name(&self.display_name)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn kind(&self) -> BuildKind {
        self.kind
    }

    pub fn set_kind(&mut self, kind: BuildKind) {
        self.kind = kind;
    }

    /// Case-folded dependency identifiers in declaration order
    pub fn raw_dependencies(&self) -> &[String] {
        &self.raw_dependencies
    }

    /// Appends a dependency identifier, case-folding it. Duplicates are kept.
    pub fn add_raw_dependency(&mut self, id: &str) {
        self.raw_dependencies.push(id.trim().to_lowercase());
    }

    pub(crate) fn set_raw_dependencies(&mut self, deps: Vec<String>) {
        self.raw_dependencies = deps;
    }

    /// Positions of the resolved dependencies in the owning solution
    pub fn resolved_indices(&self) -> &[usize] {
        &self.resolved
    }

    pub(crate) fn set_resolved(&mut self, resolved: Vec<usize>) {
        self.resolved = resolved;
    }
}

/// Replaces characters the graph language does not accept in bare
/// identifiers.
pub fn safe_name(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            ' ' | '-' | '.' => '_',
            other => other,
        })
        .collect()
}
