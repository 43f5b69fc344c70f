//! Human-readable console report generation

use std::fmt::Write;

use console::style;

use super::ReportGenerator;
use crate::error::SlnDepsError;
use crate::solution::Solution;
use crate::utils::string::pluralize;

#[derive(Debug, Default)]
pub struct HumanReportGenerator;

impl HumanReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ReportGenerator for HumanReportGenerator {
    fn generate_report(&self, solution: &Solution) -> Result<String, SlnDepsError> {
        let mut output = String::new();
        let count = solution.projects().len();

        writeln!(
            output,
            "{} Solution {} with {} {}",
            style("📦").blue(),
            style(solution.name()).bold(),
            style(count).bold(),
            pluralize("project", count)
        )?;

        for project in solution.projects() {
            writeln!(
                output,
                "\n  {} {} ({}) {}",
                style("•").dim(),
                style(project.display_name()).bold(),
                project.kind(),
                style(project.id()).dim()
            )?;

            let mut deps = solution.dependencies_of(project).peekable();
            if deps.peek().is_none() {
                writeln!(output, "    {}", style("(no dependencies)").dim())?;
            }
            for dep in deps {
                writeln!(output, "    {} {}", style("→").cyan(), dep.display_name())?;
            }
        }

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solution::{BuildKind, Project};

    #[test]
    fn test_human_report_lists_projects_and_dependencies() {
        let mut solution = Solution::new("Demo");
        let mut app = Project::new("App", "App", "{1}");
        app.set_kind(BuildKind::Application);
        app.add_raw_dependency("{2}");
        solution.add_project(app);
        solution.add_project(Project::new("Core", "Core", "{2}"));
        solution.resolve();

        let report = HumanReportGenerator::new().generate_report(&solution).unwrap();
        let plain = console::strip_ansi_codes(&report);

        assert!(plain.contains("Solution Demo with 2 projects"));
        assert!(plain.contains("• App (application) {1}"));
        assert!(plain.contains("→ Core"));
        assert!(plain.contains("(no dependencies)"));
    }
}
