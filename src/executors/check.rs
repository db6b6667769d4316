//! Check command executor

use console::style;
use miette::{IntoDiagnostic, Result, WrapErr};

use crate::cli::OutputFormat;
use crate::config::CheckConfig;
use crate::detector::CycleDetector;
use crate::executors::CommandExecutor;
use crate::graph::DependencyGraphBuilder;
use crate::reports::{CycleReport, HumanReportGenerator, JsonReportGenerator, ReportGenerator};
use crate::utils::string::{pluralize, pluralize_y};

pub struct CheckExecutor;

impl CommandExecutor for CheckExecutor {
    type Config = CheckConfig;

    fn execute(config: Self::Config) -> Result<()> {
        eprintln!(
            "{} Checking {} for cyclic dependencies...",
            style("🔍").cyan(),
            style(config.path.display()).bold()
        );

        let graph = DependencyGraphBuilder::new()
            .build_from_path(&config.path)
            .wrap_err("Failed to build dependency graph")?;

        eprintln!(
            "  {} Parsed {} {} with {} {}",
            style("→").dim(),
            style(graph.node_count()).yellow(),
            pluralize("file", graph.node_count()),
            style(graph.edge_count()).yellow(),
            pluralize_y("dependency", graph.edge_count())
        );

        let mut detector = CycleDetector::new();
        let cyclic = detector.has_cycle(&graph);

        if cyclic {
            eprintln!("{} Cycle detected", style("⚠").yellow().bold());
        } else {
            eprintln!("{} No cycles detected", style("✓").green().bold());
        }

        let report = CycleReport::new(&config.path, &graph, cyclic);
        let report_result = match config.format {
            OutputFormat::Human => HumanReportGenerator::new().generate_report(&report),
            OutputFormat::Json => JsonReportGenerator::new().generate_report(&report),
        };

        match report_result {
            Ok(output) => print!("{output}"),
            Err(e) => {
                return Err(e)
                    .into_diagnostic()
                    .wrap_err("Failed to generate report");
            }
        }

        // Exit with error code if a cycle was found and that was requested
        if config.error_on_cycles && cyclic {
            std::process::exit(1);
        }

        Ok(())
    }
}
