//! Line based reader for the solution file text format
//!
//! The reader is a small state machine over the lines of the file. Only four
//! line shapes matter:
//!
//! ```text
//! Project("{type}") = "name", "relative\path", "{id}"    -> start a project
//!     ProjectSection(ProjectDependencies) = postProject  -> enter dependencies
//!         {dep-id} = {dep-id}                            -> one dependency
//! EndProject                                             -> leave the project
//! ```
//!
//! Everything else is ignored.

use miette::{NamedSource, SourceSpan};

use crate::error::{SlnDepsError, SolutionParseError};

const PROJECT_TOKEN: &str = "Project";
const END_PROJECT: &str = "EndProject";
const DEPENDENCY_SECTION: &str = "ProjectSection(ProjectDependencies) = postProject";
const BYTE_ORDER_MARK: char = '\u{feff}';

/// A project entry as written in the solution file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDeclaration {
    pub name: String,
    pub relative_path: String,
    pub id: String,
    /// Case-folded identifiers listed in the project's dependency section
    pub dependencies: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParseState {
    Outside,
    InProject(usize),
    InDependencySection(usize),
}

/// Parses solution file text into project declarations in file order.
///
/// `file` is only used to label errors.
pub fn parse_solution(file: &str, content: &str) -> Result<Vec<ProjectDeclaration>, SlnDepsError> {
    let text = content.strip_prefix(BYTE_ORDER_MARK).unwrap_or(content);
    let mut declarations: Vec<ProjectDeclaration> = Vec::new();
    let mut state = ParseState::Outside;
    let mut offset = content.len() - text.len();

    for (number, raw_line) in text.split_inclusive('\n').enumerate() {
        let line_start = offset;
        offset += raw_line.len();
        let line = raw_line.trim_end_matches(['\n', '\r']);
        let trimmed = line.trim();

        if is_project_line(line) {
            let declaration = parse_project_line(line).map_err(|fields| {
                SlnDepsError::SolutionParse(Box::new(SolutionParseError {
                    file: file.to_string(),
                    line: number + 1,
                    fields,
                    source_code: NamedSource::new(file, content.to_string()),
                    span: Some(SourceSpan::new(line_start.into(), line.len())),
                }))
            })?;
            declarations.push(declaration);
            state = ParseState::InProject(declarations.len() - 1);
        } else if line == END_PROJECT {
            state = ParseState::Outside;
        } else if trimmed == DEPENDENCY_SECTION {
            if let ParseState::InProject(current) | ParseState::InDependencySection(current) = state
            {
                state = ParseState::InDependencySection(current);
            }
        } else if let ParseState::InDependencySection(current) = state
            && trimmed.starts_with('{')
        {
            let id = trimmed.split('=').next().unwrap_or_default().trim();
            declarations[current].dependencies.push(id.to_lowercase());
        }
    }

    Ok(declarations)
}

/// `Project` must be a whole token, so `ProjectSection` lines never match.
fn is_project_line(line: &str) -> bool {
    line.strip_prefix(PROJECT_TOKEN)
        .is_some_and(|rest| !rest.starts_with(|c: char| c.is_alphanumeric() || c == '_'))
}

/// Returns the number of fields found when there are fewer than three.
fn parse_project_line(line: &str) -> Result<ProjectDeclaration, usize> {
    let (_, rest) = line.split_once('=').ok_or(0usize)?;
    let fields: Vec<&str> = rest.split(',').map(clean_field).collect();

    match fields.as_slice() {
        [name, relative_path, id, ..] => Ok(ProjectDeclaration {
            name: name.to_string(),
            relative_path: relative_path.to_string(),
            id: id.to_string(),
            dependencies: Vec::new(),
        }),
        _ => Err(fields.len()),
    }
}

fn clean_field(field: &str) -> &str {
    field.trim().trim_matches('"').trim()
}
