use std::fmt;
use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// What was wrong with a rejected dependency line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// The line has no `:` separating the file name from its dependencies
    MissingColon,
    /// The text before the `:` is empty after trimming
    EmptyName,
    /// One of the comma separated dependency names is empty after trimming
    EmptyDependency,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseErrorKind::MissingColon => write!(f, "missing ':' after the file name"),
            ParseErrorKind::EmptyName => write!(f, "empty file name"),
            ParseErrorKind::EmptyDependency => write!(f, "empty dependency name"),
        }
    }
}

#[derive(Error, Debug, Diagnostic)]
#[error("Malformed dependency declaration on line {line_number}: {kind}")]
#[diagnostic(
    code(check_dependency::parse_error),
    help("Each line must look like `name: dep1, dep2, ...`")
)]
pub struct ParseError {
    pub line_number: usize,
    pub line: String,
    pub kind: ParseErrorKind,
    #[source_code]
    pub source_code: NamedSource<String>,
    #[label("problem here")]
    pub span: Option<SourceSpan>,
}

impl ParseError {
    pub fn new(line_number: usize, line: &str, kind: ParseErrorKind, span: SourceSpan) -> Self {
        Self {
            line_number,
            line: line.to_string(),
            kind,
            source_code: NamedSource::new(format!("line {line_number}"), line.to_string()),
            span: Some(span),
        }
    }
}

#[derive(Error, Debug, Diagnostic)]
pub enum CheckDependencyError {
    #[error("Error! trying to open the file {}", path.display())]
    #[diagnostic(
        code(check_dependency::io_error),
        help("Check if the file exists and you have read permissions")
    )]
    FileReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    ParseError(Box<ParseError>),

    #[error("Out of memory while building the dependency graph: {message}")]
    #[diagnostic(
        code(check_dependency::resource_error),
        help("The input is too large to hold in memory")
    )]
    ResourceError { message: String },

    #[error("JSON serialization error")]
    #[diagnostic(
        code(check_dependency::json_error),
        help("This is likely an internal error - please report it")
    )]
    Json(#[from] serde_json::Error),

    #[error("String formatting error")]
    #[diagnostic(
        code(check_dependency::fmt_error),
        help("This is likely an internal error - please report it")
    )]
    Fmt(#[from] std::fmt::Error),

    #[error("IO error")]
    #[diagnostic(
        code(check_dependency::read_error),
        help("The input stream could not be read to the end")
    )]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    #[diagnostic(
        code(check_dependency::config_error),
        help("Check your command arguments and configuration")
    )]
    ConfigurationError { message: String },
}

impl From<ParseError> for CheckDependencyError {
    fn from(err: ParseError) -> Self {
        CheckDependencyError::ParseError(Box::new(err))
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use miette::Diagnostic;

    use super::*;

    #[test]
    fn test_parse_error_display() {
        let error = ParseError::new(3, "justaname", ParseErrorKind::MissingColon, (0, 9).into());

        assert_eq!(
            error.to_string(),
            "Malformed dependency declaration on line 3: missing ':' after the file name"
        );
        assert_eq!(error.line, "justaname");
        assert_eq!(error.line_number, 3);
    }

    #[test]
    fn test_parse_error_is_transparent_in_enum() {
        let error: CheckDependencyError =
            ParseError::new(1, ": a", ParseErrorKind::EmptyName, (0, 1).into()).into();

        assert_eq!(
            error.to_string(),
            "Malformed dependency declaration on line 1: empty file name"
        );
        assert_eq!(
            error.code().map(|c| c.to_string()),
            Some("check_dependency::parse_error".to_string())
        );
    }

    #[test]
    fn test_file_read_error() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let error = CheckDependencyError::FileReadError {
            path: PathBuf::from("/tmp/missing.txt"),
            source: io_err,
        };

        assert_eq!(
            error.to_string(),
            "Error! trying to open the file /tmp/missing.txt"
        );
        assert!(error.code().is_some());
        assert!(error.help().is_some());
    }

    #[test]
    fn test_configuration_error() {
        let error = CheckDependencyError::ConfigurationError {
            message: "Missing required field: path".to_string(),
        };

        assert_eq!(
            error.to_string(),
            "Configuration error: Missing required field: path"
        );
    }

    #[test]
    fn test_resource_error() {
        let error = CheckDependencyError::ResourceError {
            message: "capacity overflow".to_string(),
        };

        assert!(error.to_string().contains("capacity overflow"));
    }

    #[test]
    fn test_error_conversion_from_io() {
        let io_err = io::Error::other("some io error");
        let err: CheckDependencyError = io_err.into();

        match err {
            CheckDependencyError::Io(_) => {}
            _ => panic!("Expected Io variant"),
        }
    }

    #[test]
    fn test_stream_and_open_failures_have_distinct_codes() {
        let open = CheckDependencyError::FileReadError {
            path: PathBuf::from("deps.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "missing"),
        };
        let stream: CheckDependencyError = io::Error::other("truncated").into();

        let code = |err: &CheckDependencyError| err.code().map(|c| c.to_string());
        assert_eq!(code(&open), Some("check_dependency::io_error".to_string()));
        assert_eq!(code(&stream), Some("check_dependency::read_error".to_string()));
    }
}
