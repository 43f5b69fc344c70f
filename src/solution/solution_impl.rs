use std::collections::HashMap;
use std::path::{Path, PathBuf};

use miette::Result;

use super::parser::{ProjectDeclaration, parse_solution};
use super::{LoadWarning, Project};
use crate::detector::CycleDetector;
use crate::error::SlnDepsError;
use crate::graph::{DependencyGraphBuilder, GraphSimplifier, SimplifyOutcome};
use crate::project_file;

/// Options applied while loading a solution
#[derive(Debug, Clone, Copy, Default)]
pub struct LoadOptions {
    /// Drop dependencies that are already implied by a longer path
    pub simplify: bool,
}

/// A parsed solution and all of its projects
///
/// Projects are kept in declaration order. Lookups go through the case-folded
/// project identifier.
#[derive(Debug, Clone)]
pub struct Solution {
    name: String,
    projects: Vec<Project>,
    index: HashMap<String, usize>,
    warnings: Vec<LoadWarning>,
    simplified: Option<SimplifyOutcome>,
}

impl Solution {
    /// Create an empty solution
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            projects: Vec::new(),
            index: HashMap::new(),
            warnings: Vec::new(),
            simplified: None,
        }
    }

    /// Load a solution file and every project file it references.
    ///
    /// Only a malformed project declaration in the solution file is fatal.
    /// Problems with individual project files are recorded as warnings.
    pub fn load(path: &Path, options: LoadOptions) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| SlnDepsError::FileReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();
        let solution_dir = path.parent().unwrap_or_else(|| Path::new(""));

        let mut solution = Self::parse(&name, &path.display().to_string(), &content, solution_dir)?;
        solution.load_project_files();
        solution.finish(options);

        Ok(solution)
    }

    /// Build the project table from solution file text without touching any
    /// project file.
    pub fn parse(name: &str, file: &str, content: &str, solution_dir: &Path) -> Result<Self> {
        let declarations = parse_solution(file, content)?;
        let mut solution = Self::new(name);

        for declaration in declarations {
            let ProjectDeclaration {
                name,
                relative_path,
                id,
                dependencies,
            } = declaration;

            let mut project = Project::new(name, solution_dir.join(host_path(&relative_path)), &id);
            for dep in &dependencies {
                project.add_raw_dependency(dep);
            }
            solution.add_project(project);
        }

        Ok(solution)
    }

    /// Insert a project keyed by its case-folded identifier.
    ///
    /// A project with an identifier that is already present replaces the old
    /// one in place.
    pub fn add_project(&mut self, project: Project) {
        let key = project.key();
        if let Some(&position) = self.index.get(&key) {
            self.warnings.push(LoadWarning::DuplicateProject {
                id: project.id().to_string(),
                project: project.display_name().to_string(),
                replaced: self.projects[position].display_name().to_string(),
            });
            self.projects[position] = project;
        } else {
            self.index.insert(key, self.projects.len());
            self.projects.push(project);
        }
    }

    /// Read the project file behind every project, in declaration order
    pub fn load_project_files(&mut self) {
        for position in 0..self.projects.len() {
            let project = &mut self.projects[position];

            let Some(file) = project_file::locate(project.path()) else {
                self.warnings.push(LoadWarning::ProjectFileMissing {
                    project: project.display_name().to_string(),
                    path: project.path().to_path_buf(),
                });
                continue;
            };

            match project_file::read(&file) {
                Ok(info) => {
                    if let Some(kind) = info.kind {
                        project.set_kind(kind);
                    }
                    for reference in &info.references {
                        project.add_raw_dependency(reference);
                    }
                    self.warnings.extend(info.warnings);
                }
                Err(warning) => self.warnings.push(warning),
            }
        }
    }

    /// Simplify if requested, resolve dependencies and report cycles
    pub fn finish(&mut self, options: LoadOptions) {
        if options.simplify {
            self.simplified = Some(GraphSimplifier::new().simplify(self));
        }
        self.resolve();
        self.report_cycles();
    }

    /// Turn raw dependency identifiers into project references.
    ///
    /// Unknown identifiers are skipped and recorded as
    /// [`LoadWarning::UnresolvedReference`]. Running this again replaces the
    /// previous result.
    pub fn resolve(&mut self) {
        self.warnings.retain(|w| !w.is_unresolved_reference());

        for position in 0..self.projects.len() {
            let mut resolved = Vec::new();
            for dep in self.projects[position].raw_dependencies() {
                match self.index.get(dep) {
                    Some(&target) => resolved.push(target),
                    None => self.warnings.push(LoadWarning::UnresolvedReference {
                        project: self.projects[position].display_name().to_string(),
                        reference: dep.clone(),
                    }),
                }
            }
            self.projects[position].set_resolved(resolved);
        }
    }

    fn report_cycles(&mut self) {
        self.warnings
            .retain(|w| !matches!(w, LoadWarning::DependencyCycle { .. }));

        let graph = DependencyGraphBuilder::new().build(self);
        let mut detector = CycleDetector::new();
        detector.detect_cycles(&graph);

        for cycle in detector.cycles() {
            self.warnings.push(LoadWarning::DependencyCycle {
                projects: cycle.project_names().to_vec(),
            });
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Projects in declaration order
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub(crate) fn projects_mut(&mut self) -> &mut [Project] {
        &mut self.projects
    }

    /// Look up a project by identifier, ignoring case
    pub fn get(&self, id: &str) -> Option<&Project> {
        self.position(id).map(|p| &self.projects[p])
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.index.get(&id.trim().to_lowercase()).copied()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    /// Resolved dependencies of a project, in raw declaration order
    pub fn dependencies_of<'a>(&'a self, project: &'a Project) -> impl Iterator<Item = &'a Project> {
        project
            .resolved_indices()
            .iter()
            .filter_map(move |&position| self.projects.get(position))
    }

    pub fn warnings(&self) -> &[LoadWarning] {
        &self.warnings
    }

    /// Warnings worth showing; unresolved references only on request
    pub fn visible_warnings(&self, show_unresolved: bool) -> impl Iterator<Item = &LoadWarning> {
        self.warnings
            .iter()
            .filter(move |warning| show_unresolved || !warning.is_unresolved_reference())
    }

    /// Result of the simplification pass, if one ran
    pub fn simplify_outcome(&self) -> Option<SimplifyOutcome> {
        self.simplified
    }
}

/// Solution files always use `\` as separator
fn host_path(relative: &str) -> PathBuf {
    if std::path::MAIN_SEPARATOR == '\\' {
        PathBuf::from(relative)
    } else {
        PathBuf::from(relative.replace('\\', std::path::MAIN_SEPARATOR_STR))
    }
}
