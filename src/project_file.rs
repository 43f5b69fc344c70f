use std::path::{Path, PathBuf};

use roxmltree::{Document, Node};

use crate::constants::project::PROBED_EXTENSIONS;
use crate::solution::{BuildKind, LoadWarning};

/// What a project file says about its build target
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectFileInfo {
    /// `None` when nothing in the file determines the kind
    pub kind: Option<BuildKind>,
    /// Case-folded project reference identifiers in document order
    pub references: Vec<String>,
    pub warnings: Vec<LoadWarning>,
}

/// Finds the project file for a path that may lack its extension.
///
/// Probes the path as-is, then with each known project extension appended.
pub fn locate(path: &Path) -> Option<PathBuf> {
    if path.is_file() {
        return Some(path.to_path_buf());
    }

    PROBED_EXTENSIONS.iter().find_map(|ext| {
        let mut candidate = path.as_os_str().to_owned();
        candidate.push(ext);
        let candidate = PathBuf::from(candidate);
        candidate.is_file().then_some(candidate)
    })
}

/// Reads and parses a project file.
///
/// Fails with a [`LoadWarning::ProjectFileUnreadable`] when the file cannot be
/// read or is not well formed markup.
pub fn read(path: &Path) -> Result<ProjectFileInfo, LoadWarning> {
    let content = std::fs::read_to_string(path).map_err(|e| LoadWarning::ProjectFileUnreadable {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    parse(path, &content)
}

pub fn parse(path: &Path, content: &str) -> Result<ProjectFileInfo, LoadWarning> {
    let doc = Document::parse(content).map_err(|e| LoadWarning::ProjectFileUnreadable {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let root = doc.root_element();
    let namespace = root.tag_name().namespace();
    let mut info = ProjectFileInfo::default();

    // Old style .vcproj: <Configurations><Configuration ConfigurationType="1">
    let codes: Vec<&str> = children(root, namespace, "Configurations")
        .flat_map(|n| children(n, namespace, "Configuration"))
        .filter_map(|n| n.attribute("ConfigurationType"))
        .collect();

    // The first code wins even when configurations disagree
    if let Some(first) = codes.first() {
        let mut distinct: Vec<String> = Vec::new();
        for code in &codes {
            if !distinct.iter().any(|d| d == code) {
                distinct.push(code.to_string());
            }
        }
        if distinct.len() > 1 {
            info.warnings.push(LoadWarning::AmbiguousConfigurationType {
                path: path.to_path_buf(),
                codes: distinct,
            });
        }
        if let Some(kind) = BuildKind::from_configuration_code(first) {
            info.kind = Some(kind);
        }
    }

    for node in children(root, namespace, "PropertyGroup")
        .flat_map(|n| children(n, namespace, "OutputType"))
    {
        let value = inner_text(node).to_lowercase();
        match value.as_str() {
            "winexe" | "exe" => info.kind = Some(BuildKind::Application),
            "library" => info.kind = Some(BuildKind::SharedLibrary),
            _ => info.warnings.push(LoadWarning::UnknownBuildKind {
                path: path.to_path_buf(),
                value,
            }),
        }
    }

    // MSBuild style .vcxproj: <PropertyGroup><ConfigurationType>Application
    // Read on top of the legacy Configurations block, which modern
    // Visual Studio project files no longer carry.
    for node in children(root, namespace, "PropertyGroup")
        .flat_map(|n| children(n, namespace, "ConfigurationType"))
    {
        let value = inner_text(node).to_lowercase();
        match value.as_str() {
            "utility" => {}
            "application" => info.kind = Some(BuildKind::Application),
            "staticlibrary" => info.kind = Some(BuildKind::StaticLibrary),
            "dynamiclibrary" => info.kind = Some(BuildKind::SharedLibrary),
            _ => info.warnings.push(LoadWarning::UnknownBuildKind {
                path: path.to_path_buf(),
                value,
            }),
        }
    }

    info.references = children(root, namespace, "ItemGroup")
        .flat_map(|n| children(n, namespace, "ProjectReference"))
        .flat_map(|n| children(n, namespace, "Project"))
        .map(|n| inner_text(n).to_lowercase())
        .collect();

    Ok(info)
}

fn children<'a, 'input: 'a>(
    node: Node<'a, 'input>,
    namespace: Option<&'a str>,
    name: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> + 'a {
    node.children().filter(move |n| {
        n.is_element() && n.tag_name().name() == name && n.tag_name().namespace() == namespace
    })
}

fn inner_text(node: Node<'_, '_>) -> String {
    node.descendants()
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .collect::<String>()
        .trim()
        .to_string()
}
