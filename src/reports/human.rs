//! Human-readable console report generation

use std::fmt::Write;

use super::{CycleReport, ReportGenerator};
use crate::constants::output::{CYCLE_FOUND, NO_CYCLE};
use crate::error::CheckDependencyError;

#[derive(Debug, Default)]
pub struct HumanReportGenerator;

impl HumanReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ReportGenerator for HumanReportGenerator {
    fn generate_report(&self, report: &CycleReport) -> Result<String, CheckDependencyError> {
        let mut output = String::new();
        let verdict = if report.cyclic { CYCLE_FOUND } else { NO_CYCLE };
        writeln!(output, "{verdict}")?;
        Ok(output)
    }
}
