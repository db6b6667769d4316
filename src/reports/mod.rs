//! Report generation modules for different output formats
//!
//! This module contains report generators for the check command:
//! - human: The plain one-line verdict
//! - json: JSON format for programmatic use

pub mod human;
pub mod json;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::CheckDependencyError;
use crate::graph::DependencyGraph;

/// Outcome of checking one dependency listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CycleReport {
    pub file: String,
    pub cyclic: bool,
    pub nodes: usize,
    pub edges: usize,
}

impl CycleReport {
    pub fn new(file: &Path, graph: &DependencyGraph, cyclic: bool) -> Self {
        Self {
            file: file.display().to_string(),
            cyclic,
            nodes: graph.node_count(),
            edges: graph.edge_count(),
        }
    }
}

/// Common trait for all report generators
pub trait ReportGenerator {
    /// Generate a report from a cycle check result
    fn generate_report(&self, report: &CycleReport) -> Result<String, CheckDependencyError>;
}

// Re-export for convenience
pub use human::HumanReportGenerator;
pub use json::JsonReportGenerator;
