//! Presentation-ready reports
//!
//! A report is one table row: an `index` cell (a link to the module or
//! file) and a typed record holding the remaining cells.

pub mod annotation;
pub mod failure;
pub mod summary;

pub use annotation::AnnotationReport;
pub use failure::{FailureRecord, FailureReport};
pub use summary::{
    GolangCiLintSummaryRecord, GolangCiLintSummaryReport, GotestsumSummaryRecord,
    GotestsumSummaryReport, SummaryReport,
};

/// A value that renders as one table row
pub trait Reportable {
    type Record: Cells;

    fn index(&self) -> String;
    fn record(&self) -> Self::Record;
}

/// Record cells in column order; `None` renders as `-`
pub trait Cells {
    fn cells(&self) -> Vec<Option<String>>;
}
