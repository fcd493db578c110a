use super::{Cells, Reportable};

/// GitHub `::error` workflow command pointing at a file and line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotationReport {
    pub file_path: String,
    pub line: u32,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotationRecord {
    pub body: String,
}

impl AnnotationReport {
    pub fn new(file_path: impl Into<String>, line: u32, message: impl Into<String>) -> Self {
        Self {
            file_path: file_path.into(),
            line,
            message: message.into(),
        }
    }
}

impl Reportable for AnnotationReport {
    type Record = AnnotationRecord;

    fn index(&self) -> String {
        format!("{}:{}", self.file_path, self.line)
    }

    fn record(&self) -> AnnotationRecord {
        AnnotationRecord {
            body: format!(
                "::error file={},line={}::{}",
                escape_property(&self.file_path),
                self.line,
                escape_data(&self.message)
            ),
        }
    }
}

impl Cells for AnnotationRecord {
    fn cells(&self) -> Vec<Option<String>> {
        vec![Some(self.body.clone())]
    }
}

/// Escape a workflow command message
pub fn escape_data(s: &str) -> String {
    s.replace('%', "%25").replace('\r', "%0D").replace('\n', "%0A")
}

/// Escape a workflow command property value
pub fn escape_property(s: &str) -> String {
    escape_data(s).replace(':', "%3A").replace(',', "%2C")
}
