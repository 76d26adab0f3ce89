// Tue Jan 16 2026 - Alex

use crate::export::ExportReport;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Machine-readable record of one run: what was exported, in which order,
/// and every diagnostic raised along the way.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunSummary {
    pub module: String,
    pub classes: Vec<ExportReport>,
    pub skipped: Vec<String>,
}

impl RunSummary {
    pub fn new(module: &str) -> Self {
        Self {
            module: module.to_string(),
            ..Self::default()
        }
    }

    pub fn add(&mut self, report: ExportReport) {
        if report.exported.is_empty() {
            self.skipped.push(report.class);
        } else {
            self.classes.push(report);
        }
    }

    pub fn exported_count(&self) -> usize {
        self.classes.iter().map(|r| r.exported.len()).sum()
    }

    pub fn diagnostic_count(&self) -> usize {
        self.classes.iter().map(|r| r.diagnostics.len()).sum()
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        let json = self.to_json().map_err(std::io::Error::other)?;
        fs::write(path, json)
    }
}
