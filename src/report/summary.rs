use super::{Cells, Reportable};
use crate::types::{GitHubContext, Outcome};

/// Summary row of one gotestsum report
#[derive(Debug, Clone, PartialEq)]
pub struct GotestsumSummaryReport {
    pub context: GitHubContext,
    pub module_dir: String,
    pub outcome: Outcome,
    pub passed: u64,
    pub failed: u64,
    pub version: Option<String>,
    pub time: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GotestsumSummaryRecord {
    pub version: Option<String>,
    pub result: String,
    pub passed: String,
    pub failed: String,
    pub time: Option<String>,
}

impl Reportable for GotestsumSummaryReport {
    type Record = GotestsumSummaryRecord;

    fn index(&self) -> String {
        module_link(&self.context, &self.module_dir)
    }

    fn record(&self) -> GotestsumSummaryRecord {
        GotestsumSummaryRecord {
            version: self.version.clone(),
            result: self.outcome.badge().to_string(),
            passed: self.passed.to_string(),
            failed: self.failed.to_string(),
            time: self.time.map(format_seconds),
        }
    }
}

/// One decimal, ties rounded away from zero (`0.25` -> `0.3s`)
fn format_seconds(seconds: f64) -> String {
    format!("{:.1}s", (seconds * 10.0).round() / 10.0)
}

impl Cells for GotestsumSummaryRecord {
    fn cells(&self) -> Vec<Option<String>> {
        vec![
            self.version.clone(),
            Some(self.result.clone()),
            Some(self.passed.clone()),
            Some(self.failed.clone()),
            self.time.clone(),
        ]
    }
}

/// Summary row of one golangci-lint report
#[derive(Debug, Clone, PartialEq)]
pub struct GolangCiLintSummaryReport {
    pub context: GitHubContext,
    pub module_dir: String,
    pub outcome: Outcome,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GolangCiLintSummaryRecord {
    pub result: String,
}

impl Reportable for GolangCiLintSummaryReport {
    type Record = GolangCiLintSummaryRecord;

    fn index(&self) -> String {
        module_link(&self.context, &self.module_dir)
    }

    fn record(&self) -> GolangCiLintSummaryRecord {
        GolangCiLintSummaryRecord {
            result: self.outcome.badge().to_string(),
        }
    }
}

impl Cells for GolangCiLintSummaryRecord {
    fn cells(&self) -> Vec<Option<String>> {
        vec![Some(self.result.clone())]
    }
}

/// Summary of either reporter type
#[derive(Debug, Clone, PartialEq)]
pub enum SummaryReport {
    Gotestsum(GotestsumSummaryReport),
    GolangCiLint(GolangCiLintSummaryReport),
}

impl SummaryReport {
    pub fn index(&self) -> String {
        match self {
            SummaryReport::Gotestsum(report) => report.index(),
            SummaryReport::GolangCiLint(report) => report.index(),
        }
    }

    pub fn cells(&self) -> Vec<Option<String>> {
        match self {
            SummaryReport::Gotestsum(report) => report.record().cells(),
            SummaryReport::GolangCiLint(report) => report.record().cells(),
        }
    }
}

fn module_link(context: &GitHubContext, module_dir: &str) -> String {
    format!("[{}]({})", module_dir, context.blob_url(module_dir))
}
