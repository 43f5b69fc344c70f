//! Configuration constants for slndeps
//!
//! Defaults used by the command line front end and by the project file
//! reader. Most of them can be overridden with flags or environment
//! variables.

/// Project file lookup
pub mod project {
    /// Extensions appended, in order, when a project path does not name an
    /// existing file
    pub const PROBED_EXTENSIONS: &[&str] = &[".vcxproj", ".csproj"];
}

/// Parameters forwarded to the external Graphviz renderer
pub mod graphviz {
    /// Image format used when none is given
    pub const DEFAULT_IMAGE_FORMAT: &str = "svg";

    /// Layout engine used when none is given
    pub const DEFAULT_LAYOUT: &str = "dot";

    /// Extension of written graph description files
    pub const GRAPH_EXTENSION: &str = "gv";

    /// Value that asks for the default format or layout
    pub const DEFAULT_MARKER: &str = "?";
}

/// Targets CMake adds to the solutions it generates
pub mod cmake {
    pub const HELPER_TARGETS: &[&str] = &[
        "ZERO_CHECK",
        "RUN_TESTS",
        "NightlyMemoryCheck",
        "ALL_BUILD",
        "Continuous",
        "Experimental",
        "Nightly",
    ];
}

/// Output formatting configuration
pub mod output {
    /// Default output format when not specified
    pub const DEFAULT_FORMAT: &str = "human";
}
