use super::{AnnotationReport, Cells, Reportable};
use crate::types::{join_path, GitHubContext, ReporterType};

/// A single failed test or lint finding, located in a file
#[derive(Debug, Clone, PartialEq)]
pub struct FailureReport {
    pub context: GitHubContext,
    pub kind: ReporterType,
    pub module_dir: String,
    pub sub_dir: String,
    pub file: String,
    pub line: u32,
    pub test: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailureRecord {
    pub kind: String,
    pub test: String,
    pub message: String,
}

impl FailureReport {
    /// Repository-relative path of the failing file
    pub fn full_path(&self) -> String {
        join_path(&[&self.module_dir, &self.sub_dir, &self.file])
    }

    pub fn annotation(&self) -> AnnotationReport {
        AnnotationReport::new(self.full_path(), self.line, self.message.clone())
    }
}

impl Reportable for FailureReport {
    type Record = FailureRecord;

    fn index(&self) -> String {
        let full_path = self.full_path();
        format!(
            "[{}:{}]({}#L{})",
            full_path,
            self.line,
            self.context.blob_url(&full_path),
            self.line
        )
    }

    fn record(&self) -> FailureRecord {
        FailureRecord {
            kind: self.kind.to_string(),
            test: self.test.clone(),
            message: self.message.replace('\n', " "),
        }
    }
}

impl Cells for FailureRecord {
    fn cells(&self) -> Vec<Option<String>> {
        vec![
            Some(self.kind.clone()),
            Some(self.test.clone()),
            Some(self.message.clone()),
        ]
    }
}
