//! Lineup command configuration

use std::path::PathBuf;

use crate::cli::OutputFormat;
use crate::impl_builder;

#[derive(Debug, Clone)]
pub struct LineupConfig {
    pub path: PathBuf,
    pub format: OutputFormat,
}

impl LineupConfig {
    pub fn builder() -> LineupConfigBuilder {
        LineupConfigBuilder::new()
    }
}

impl_builder! {
    LineupConfigBuilder => LineupConfig {
        with_path => path: PathBuf,
        with_format => format: OutputFormat,
    }
}
