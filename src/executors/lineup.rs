//! Lineup command executor

use console::style;
use miette::{IntoDiagnostic, Result, WrapErr};

use crate::cli::OutputFormat;
use crate::commands::lineup::LineupReportGenerator;
use crate::config::LineupConfig;
use crate::executors::CommandExecutor;
use crate::graph::DependencyGraphBuilder;

pub struct LineupExecutor;

impl CommandExecutor for LineupExecutor {
    type Config = LineupConfig;

    fn execute(config: Self::Config) -> Result<()> {
        eprintln!(
            "{} Reading dependencies from {}...",
            style("📋").cyan(),
            style(config.path.display()).bold()
        );

        let graph = DependencyGraphBuilder::new()
            .build_from_path(&config.path)
            .wrap_err("Failed to build dependency graph")?;

        if graph.is_empty() {
            eprintln!("{} No files declared", style("ℹ").blue());
        }

        let report_result = match config.format {
            OutputFormat::Human => LineupReportGenerator::generate_human_report(&graph),
            OutputFormat::Json => LineupReportGenerator::generate_json_report(&graph),
        };

        match report_result {
            Ok(report) => print!("{report}"),
            Err(e) => {
                return Err(e)
                    .into_diagnostic()
                    .wrap_err("Failed to generate lineup report");
            }
        }

        Ok(())
    }
}
