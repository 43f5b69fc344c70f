//! Write command configuration

use std::path::{Path, PathBuf};

use crate::constants::graphviz;
use crate::impl_builder;

use super::GraphOptions;

#[derive(Debug, Clone)]
pub struct WriteConfig {
    pub graph: GraphOptions,
    /// Where the graph description goes
    pub target: PathBuf,
    pub image_format: String,
    pub layout: String,
}

impl WriteConfig {
    pub fn builder() -> WriteConfigBuilder {
        WriteConfigBuilder::new()
    }

    /// Image the render command produces
    ///
    /// A `.gv` target has its extension swapped for the image format; any
    /// other target keeps its full name and gets the format appended.
    pub fn image_path(&self) -> PathBuf {
        let is_graph_file = self
            .target
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case(graphviz::GRAPH_EXTENSION));
        if is_graph_file {
            return self.target.with_extension(&self.image_format);
        }

        let mut name = self.target.clone().into_os_string();
        name.push(".");
        name.push(&self.image_format);
        PathBuf::from(name)
    }

    /// The Graphviz invocation that turns the written file into an image
    pub fn render_command(&self) -> String {
        format!(
            "dot -T{} -K{} -o \"{}\" \"{}\"",
            self.image_format,
            self.layout,
            self.image_path().display(),
            self.target.display()
        )
    }
}

impl_builder! {
    WriteConfigBuilder => WriteConfig {
        graph: GraphOptions,
        target: PathBuf,
        image_format: String,
        layout: String,
    }
}

/// Treat a missing, blank or `?` value as a request for the default
pub fn value_or_default(value: Option<&str>, default: &str) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() && v != graphviz::DEFAULT_MARKER => v.to_string(),
        _ => default.to_string(),
    }
}

/// Work out where the graph description is written
///
/// Without a target the solution path with a `gv` extension is used. A
/// directory target receives a file named after the solution.
pub fn resolve_target(solution: &Path, target: Option<&str>) -> PathBuf {
    let stem = solution
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    let file_name = format!("{stem}.{}", graphviz::GRAPH_EXTENSION);

    match target.map(str::trim) {
        Some(t) if !t.is_empty() && t != graphviz::DEFAULT_MARKER => {
            let path = PathBuf::from(t);
            if path.is_dir() {
                path.join(file_name)
            } else {
                path
            }
        }
        _ => solution.with_file_name(file_name),
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::exclusion::ExclusionFilter;
    use crate::solution::LoadOptions;

    #[test]
    fn test_value_or_default() {
        assert_eq!(value_or_default(None, "svg"), "svg");
        assert_eq!(value_or_default(Some("  "), "svg"), "svg");
        assert_eq!(value_or_default(Some("?"), "svg"), "svg");
        assert_eq!(value_or_default(Some(" png "), "svg"), "png");
    }

    #[test]
    fn test_target_defaults_next_to_solution() {
        let solution = Path::new("build").join("My.Solution.sln");
        assert_eq!(
            resolve_target(&solution, None),
            Path::new("build").join("My.Solution.gv")
        );
        assert_eq!(
            resolve_target(&solution, Some("?")),
            Path::new("build").join("My.Solution.gv")
        );
    }

    #[test]
    fn test_target_directory_gets_solution_name() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().to_string_lossy().to_string();
        assert_eq!(
            resolve_target(Path::new("demo.sln"), Some(&target)),
            dir.path().join("demo.gv")
        );
    }

    #[test]
    fn test_explicit_target_file_is_kept() {
        assert_eq!(
            resolve_target(Path::new("demo.sln"), Some("out/graph.dot")),
            PathBuf::from("out/graph.dot")
        );
    }

    #[test]
    fn test_render_command() {
        let graph = crate::config::GraphOptions {
            solution: PathBuf::from("demo.sln"),
            load: LoadOptions::default(),
            show_unresolved: false,
            exclusions: ExclusionFilter::new(),
            reverse: false,
            remove_empty: false,
        };
        let config = WriteConfig {
            graph,
            target: PathBuf::from("demo.gv"),
            image_format: "png".to_string(),
            layout: "neato".to_string(),
        };
        assert_eq!(config.image_path(), PathBuf::from("demo.png"));
        assert_eq!(config.render_command(), "dot -Tpng -Kneato -o \"demo.png\" \"demo.gv\"");
    }

    #[test]
    fn test_image_path_keeps_dotted_target_name() {
        let graph = crate::config::GraphOptions {
            solution: PathBuf::from("Engine.sln"),
            load: LoadOptions::default(),
            show_unresolved: false,
            exclusions: ExclusionFilter::new(),
            reverse: false,
            remove_empty: false,
        };
        let config = WriteConfig {
            graph,
            target: Path::new("out").join("Engine.Core"),
            image_format: "svg".to_string(),
            layout: "dot".to_string(),
        };
        assert_eq!(config.image_path(), Path::new("out").join("Engine.Core.svg"));

        let config = WriteConfig {
            target: Path::new("out").join("Engine.GV"),
            ..config
        };
        assert_eq!(config.image_path(), Path::new("out").join("Engine.svg"));
    }
}
