//! Markdown tables
//!
//! Tables are untyped: an index column plus value columns whose cells
//! may be absent. Typed reports become rows through [`Reportable`], and
//! tables of different reporters are merged by joining on the index.
//!
//! [`Reportable`]: crate::report::Reportable

pub mod builders;
pub mod factory;

pub use builders::{failure_table, golangci_lint_table, gotestsum_table, DEFAULT_FAILURE_LIMIT};
pub use factory::{TableSet, TableSetFactory, XmlFileGroup};

use crate::error::{Error, Result};
use std::collections::HashMap;
use std::fmt;

/// Column alignment marker of the separator row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
    Center,
}

impl Align {
    pub fn as_str(&self) -> &'static str {
        match self {
            Align::Left => ":---",
            Align::Right => "---:",
            Align::Center => ":---:",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub index: String,
    pub values: Vec<Option<String>>,
}

impl Row {
    pub fn new(index: impl Into<String>, values: Vec<Option<String>>) -> Self {
        Self {
            index: index.into(),
            values,
        }
    }

    /// Row whose cells are all present
    pub fn filled<I, S>(index: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(index, values.into_iter().map(|v| Some(v.into())).collect())
    }

    /// Separator row made of alignment markers
    pub fn separator(index: Align, values: &[Align]) -> Self {
        Self::filled(index.as_str(), values.iter().map(Align::as_str))
    }

    fn render(&self) -> String {
        let cells: Vec<&str> = self
            .values
            .iter()
            .map(|v| match v.as_deref() {
                Some("") | None => "-",
                Some(v) => v,
            })
            .collect();
        if cells.is_empty() {
            format!("| {} |", self.index)
        } else {
            format!("| {} | {} |", self.index, cells.join(" | "))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    header: Row,
    separator: Row,
    records: Vec<Row>,
}

impl Table {
    pub fn new(header: Row, separator: Row, records: Vec<Row>) -> Result<Self> {
        if header.values.len() != separator.values.len() {
            return Err(Error::Validation(
                "header and separator must have the same length".to_string(),
            ));
        }
        if records.iter().any(|r| r.values.len() != header.values.len()) {
            return Err(Error::Validation(
                "records must have the same length as header".to_string(),
            ));
        }
        Ok(Self {
            header,
            separator,
            records,
        })
    }

    pub fn header(&self) -> &Row {
        &self.header
    }

    pub fn separator(&self) -> &Row {
        &self.separator
    }

    pub fn records(&self) -> &[Row] {
        &self.records
    }

    pub fn rows(&self) -> usize {
        self.records.len()
    }

    /// Number of value columns; the index column is not counted
    pub fn columns(&self) -> usize {
        self.header.values.len()
    }

    /// Left join on the index column. Columns of `others` are appended in
    /// order; rows missing from another table get absent cells.
    pub fn join(&self, others: &[Table]) -> Table {
        let mut header = self.header.clone();
        let mut separator = self.separator.clone();
        for other in others {
            header.values.extend(other.header.values.iter().cloned());
            separator.values.extend(other.separator.values.iter().cloned());
        }

        let lookups: Vec<HashMap<&str, &Row>> = others
            .iter()
            .map(|o| o.records.iter().map(|r| (r.index.as_str(), r)).collect())
            .collect();

        let records = self
            .records
            .iter()
            .map(|record| {
                let mut values = record.values.clone();
                for (other, lookup) in others.iter().zip(&lookups) {
                    match lookup.get(record.index.as_str()) {
                        Some(row) => values.extend(row.values.iter().cloned()),
                        None => values.extend(std::iter::repeat(None).take(other.columns())),
                    }
                }
                Row::new(record.index.clone(), values)
            })
            .collect();

        Table {
            header,
            separator,
            records,
        }
    }

    /// Vertical concatenation under this table's header
    pub fn concat(&self, others: &[Table]) -> Result<Table> {
        let records = self
            .records
            .iter()
            .chain(others.iter().flat_map(|o| o.records.iter()))
            .cloned()
            .collect();
        Table::new(self.header.clone(), self.separator.clone(), records)
    }

    /// Keep the first `limit` records; when rows were dropped, a marker
    /// row reports how many.
    pub fn limit(&self, limit: usize) -> Table {
        let mut records: Vec<Row> = self.records.iter().take(limit).cloned().collect();
        if self.rows() > limit {
            let mut values = vec![Some("-".to_string()); self.columns()];
            if let Some(last) = values.last_mut() {
                *last = Some(format!(":warning: and {} more...", self.rows() - limit));
            }
            records.push(Row::new("-", values));
        }
        Table {
            header: self.header.clone(),
            separator: self.separator.clone(),
            records,
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.records.is_empty() {
            return Ok(());
        }

        let lines: Vec<String> = [&self.header, &self.separator]
            .into_iter()
            .chain(self.records.iter())
            .map(Row::render)
            .collect();
        f.write_str(&lines.join("\n"))
    }
}
