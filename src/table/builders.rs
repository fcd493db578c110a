//! Tables for each kind of report

use super::{Align, Row, Table};
use crate::error::Result;
use crate::report::{
    Cells, FailureReport, GolangCiLintSummaryReport, GotestsumSummaryReport, Reportable,
};

/// Failure rows shown before the rest are collapsed into a marker row
pub const DEFAULT_FAILURE_LIMIT: usize = 10;

fn rows<R: Reportable>(reports: &[R]) -> Vec<Row> {
    reports
        .iter()
        .map(|report| Row::new(report.index(), report.record().cells()))
        .collect()
}

/// Module | Version | *title* | Passed | Failed | Time
pub fn gotestsum_table(title: &str, reports: &[GotestsumSummaryReport]) -> Result<Table> {
    Table::new(
        Row::filled("Module", ["Version", title, "Passed", "Failed", "Time"]),
        Row::separator(
            Align::Left,
            &[Align::Right, Align::Left, Align::Right, Align::Right, Align::Right],
        ),
        rows(reports),
    )
}

/// Module | *title*
pub fn golangci_lint_table(title: &str, reports: &[GolangCiLintSummaryReport]) -> Result<Table> {
    Table::new(
        Row::filled("Module", [title]),
        Row::separator(Align::Left, &[Align::Left]),
        rows(reports),
    )
}

/// File | Type | Case | Message, capped at `limit` rows
pub fn failure_table(reports: &[FailureReport], limit: usize) -> Result<Table> {
    let table = Table::new(
        Row::filled("File", ["Type", "Case", "Message"]),
        Row::separator(Align::Left, &[Align::Left, Align::Left, Align::Left]),
        rows(reports),
    )?;
    Ok(table.limit(limit))
}
