//! JSON format report generation

use serde::Serialize;

use super::ReportGenerator;
use crate::error::SlnDepsError;
use crate::solution::{BuildKind, Solution};

#[derive(Debug, Default)]
pub struct JsonReportGenerator {
    show_unresolved: bool,
}

impl JsonReportGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Also list warnings about references to unknown projects
    pub fn with_unresolved(mut self, show_unresolved: bool) -> Self {
        self.show_unresolved = show_unresolved;
        self
    }
}

#[derive(Serialize)]
struct SolutionReport<'a> {
    name: &'a str,
    project_count: usize,
    projects: Vec<ProjectEntry<'a>>,
    warnings: Vec<String>,
}

#[derive(Serialize)]
struct ProjectEntry<'a> {
    name: &'a str,
    id: &'a str,
    kind: BuildKind,
    path: String,
    dependencies: Vec<&'a str>,
}

impl ReportGenerator for JsonReportGenerator {
    fn generate_report(&self, solution: &Solution) -> Result<String, SlnDepsError> {
        let projects = solution
            .projects()
            .iter()
            .map(|project| ProjectEntry {
                name: project.display_name(),
                id: project.id(),
                kind: project.kind(),
                path: project.path().display().to_string(),
                dependencies: solution
                    .dependencies_of(project)
                    .map(|dep| dep.display_name())
                    .collect(),
            })
            .collect();

        let report = SolutionReport {
            name: solution.name(),
            project_count: solution.projects().len(),
            projects,
            warnings: solution
                .visible_warnings(self.show_unresolved)
                .map(|w| w.to_string())
                .collect(),
        };

        serde_json::to_string_pretty(&report).map_err(SlnDepsError::Json)
    }
}
