//! Check command configuration

use std::path::PathBuf;

use crate::cli::OutputFormat;
use crate::impl_builder;

/// Configuration for the check command
#[derive(Debug, Clone)]
pub struct CheckConfig {
    /// Dependency listing to analyze
    pub path: PathBuf,
    /// Output format for the report
    pub format: OutputFormat,
    /// Whether to exit with error code if a cycle is found
    pub error_on_cycles: bool,
}

impl CheckConfig {
    pub fn builder() -> CheckConfigBuilder {
        CheckConfigBuilder::new()
    }
}

impl_builder! {
    CheckConfigBuilder => CheckConfig {
        with_path => path: PathBuf,
        with_format => format: OutputFormat,
        with_error_on_cycles => error_on_cycles: bool,
    }
}
