//! Lineup command implementation

use std::fmt::Write;

use miette::{Result, WrapErr};
use serde::{Deserialize, Serialize};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::LineupConfig;
use crate::error::CheckDependencyError;
use crate::graph::DependencyGraph;

/// One file and its dependencies, as emitted in the lineup JSON array
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineupEntry {
    pub name: String,
    pub dependencies: Vec<String>,
}

impl FromCommand for LineupConfig {
    fn from_command(command: Commands) -> Result<Self, CheckDependencyError> {
        match command {
            Commands::Lineup { input, format } => LineupConfig::builder()
                .with_path(input.file)
                .with_format(format.format)
                .build(),
            _ => Err(CheckDependencyError::ConfigurationError {
                message: "Invalid command type for LineupConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(LineupConfig);

/// Execute the lineup command for printing the parsed listing
pub fn execute_lineup_command(command: Commands) -> Result<()> {
    let config = LineupConfig::from_command(command)
        .wrap_err("Failed to parse lineup command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::lineup::LineupExecutor;
    LineupExecutor::execute(config)
}

/// Renders a built graph back into listing form
pub struct LineupReportGenerator;

impl LineupReportGenerator {
    fn entries(graph: &DependencyGraph) -> Vec<LineupEntry> {
        graph
            .file_names()
            .map(|name| LineupEntry {
                name: name.to_string(),
                dependencies: graph
                    .dependencies_of(name)
                    .unwrap_or_default()
                    .into_iter()
                    .map(str::to_string)
                    .collect(),
            })
            .collect()
    }

    /// One `name: dep, dep` line per file; the output parses back into the
    /// same graph
    ///
    /// A name containing `:` can only come from a dependency reference, so it
    /// has no dependencies of its own. It gets no line; re-parsing the line
    /// that references it recreates it.
    pub fn generate_human_report(graph: &DependencyGraph) -> Result<String, CheckDependencyError> {
        let mut output = String::new();
        for entry in Self::entries(graph) {
            if entry.dependencies.is_empty() {
                if !entry.name.contains(':') {
                    writeln!(output, "{}:", entry.name)?;
                }
            } else {
                writeln!(output, "{}: {}", entry.name, entry.dependencies.join(", "))?;
            }
        }
        Ok(output)
    }

    pub fn generate_json_report(graph: &DependencyGraph) -> Result<String, CheckDependencyError> {
        let mut output = serde_json::to_string_pretty(&Self::entries(graph))?;
        output.push('\n');
        Ok(output)
    }
}
