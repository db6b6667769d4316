//! JSON format report generation

use super::{CycleReport, ReportGenerator};
use crate::error::CheckDependencyError;

#[derive(Debug, Default)]
pub struct JsonReportGenerator;

impl JsonReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ReportGenerator for JsonReportGenerator {
    fn generate_report(&self, report: &CycleReport) -> Result<String, CheckDependencyError> {
        let mut output = serde_json::to_string_pretty(report)?;
        output.push('\n');
        Ok(output)
    }
}
