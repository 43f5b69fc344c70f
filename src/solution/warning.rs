//! Recoverable problems found while loading a solution

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// A problem that was reported and skipped instead of aborting the load
#[derive(Error, Debug, Diagnostic, Clone, PartialEq, Eq)]
pub enum LoadWarning {
    #[error("Unable to open project file for '{project}': no file at '{path}'")]
    #[diagnostic(
        code(slndeps::project_file_missing),
        severity(Warning),
        help("Tried the path as-is and with .vcxproj and .csproj appended")
    )]
    ProjectFileMissing { project: String, path: PathBuf },

    #[error("Failed to read project file '{path}': {reason}")]
    #[diagnostic(code(slndeps::project_file_unreadable), severity(Warning))]
    ProjectFileUnreadable { path: PathBuf, reason: String },

    #[error("Unknown build type in '{path}': {value}")]
    #[diagnostic(code(slndeps::unknown_build_kind), severity(Warning))]
    UnknownBuildKind { path: PathBuf, value: String },

    #[error("Conflicting configuration types {codes:?} in '{path}', using the first")]
    #[diagnostic(code(slndeps::ambiguous_configuration_type), severity(Warning))]
    AmbiguousConfigurationType { path: PathBuf, codes: Vec<String> },

    #[error("Project id {id} is declared more than once, '{replaced}' replaced by '{project}'")]
    #[diagnostic(code(slndeps::duplicate_project), severity(Warning))]
    DuplicateProject {
        id: String,
        project: String,
        replaced: String,
    },

    #[error("Missing reference {reference} in '{project}'")]
    #[diagnostic(code(slndeps::unresolved_reference), severity(Warning))]
    UnresolvedReference { project: String, reference: String },

    #[error("Dependency cycle between {}", .projects.join(", "))]
    #[diagnostic(
        code(slndeps::dependency_cycle),
        severity(Warning),
        help("Simplification keeps every edge that is not implied by another path")
    )]
    DependencyCycle { projects: Vec<String> },
}

impl LoadWarning {
    pub fn is_unresolved_reference(&self) -> bool {
        matches!(self, LoadWarning::UnresolvedReference { .. })
    }
}
