use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
#[error("Malformed project declaration on line {line} of '{file}'")]
#[diagnostic(
    code(slndeps::solution_parse_error),
    help(
        "A project line needs three comma separated fields after '=': name, relative path and \
         identifier (found {fields})"
    )
)]
pub struct SolutionParseError {
    pub file: String,
    pub line: usize,
    pub fields: usize,
    #[source_code]
    pub source_code: NamedSource<String>,
    #[label("expected `Project(\"...\") = \"name\", \"path\", \"{{id}}\"`")]
    pub span: Option<SourceSpan>,
}

#[derive(Error, Debug, Diagnostic)]
pub enum SlnDepsError {
    #[error("Failed to read file '{path}'")]
    #[diagnostic(
        code(slndeps::io_error),
        help("Check if the file exists and you have read permissions")
    )]
    FileReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    SolutionParse(Box<SolutionParseError>),

    #[error("JSON serialization error")]
    #[diagnostic(
        code(slndeps::json_error),
        help("This is likely an internal error - please report it")
    )]
    Json(#[from] serde_json::Error),

    #[error("String formatting error")]
    #[diagnostic(
        code(slndeps::fmt_error),
        help("This is likely an internal error - please report it")
    )]
    Fmt(#[from] std::fmt::Error),

    #[error("IO error")]
    #[diagnostic(
        code(slndeps::io_error),
        help("Check file permissions and disk space")
    )]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    #[diagnostic(
        code(slndeps::config_error),
        help("Check your command arguments and environment variables")
    )]
    ConfigurationError { message: String },

    #[error("Invalid exclusion pattern '{pattern}'")]
    #[diagnostic(
        code(slndeps::pattern_error),
        help("Exclusion patterns use glob syntax, e.g. '*Tests' or 'third_party_*'")
    )]
    InvalidPattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },
}

#[cfg(test)]
mod tests {
    use std::io;

    use miette::NamedSource;

    use super::*;

    #[test]
    fn test_solution_parse_error_display() {
        let source_code = "Project(\"{X}\") = \"App\"\nEndProject\n";

        let error = SolutionParseError {
            file: "broken.sln".to_string(),
            line: 1,
            fields: 1,
            source_code: NamedSource::new("broken.sln", source_code.to_string()),
            span: Some((0, 22).into()),
        };

        assert_eq!(
            error.to_string(),
            "Malformed project declaration on line 1 of 'broken.sln'"
        );
    }

    #[test]
    fn test_file_read_error() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let error = SlnDepsError::FileReadError {
            path: PathBuf::from("/tmp/missing.sln"),
            source: io_err,
        };

        assert_eq!(error.to_string(), "Failed to read file '/tmp/missing.sln'");
    }

    #[test]
    fn test_configuration_error() {
        let error = SlnDepsError::ConfigurationError {
            message: "Missing required field: solution".to_string(),
        };

        assert_eq!(
            error.to_string(),
            "Configuration error: Missing required field: solution"
        );
    }

    #[test]
    fn test_invalid_pattern_error() {
        let source = glob::Pattern::new("[").unwrap_err();
        let error = SlnDepsError::InvalidPattern {
            pattern: "[".to_string(),
            source,
        };

        assert_eq!(error.to_string(), "Invalid exclusion pattern '['");
    }

    #[test]
    fn test_error_codes() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "access denied");
        let file_err = SlnDepsError::FileReadError {
            path: PathBuf::from("test.sln"),
            source: io_err,
        };

        use miette::Diagnostic;
        assert!(file_err.code().is_some());
        assert!(file_err.help().is_some());
    }

    #[test]
    fn test_error_conversion_from_io() {
        let io_err = io::Error::other("some io error");
        let err: SlnDepsError = io_err.into();

        match err {
            SlnDepsError::Io(_) => {}
            _ => panic!("Expected Io variant"),
        }
    }
}
