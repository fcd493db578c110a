//! Action inputs and the YAML document describing the report groups

pub mod inputs;

pub use inputs::{Inputs, RawInputs};

use crate::error::{Error, Result};
use crate::table::XmlFileGroup;
use crate::types::{GitHubContext, ReporterType};
use serde::Deserialize;
use tracing::debug;

/// One named entry of the config document
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct GroupConfig {
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub directories: Vec<String>,
    pub file_name: String,
    #[serde(default)]
    pub annotation_limit: Option<usize>,
    /// Repository file the column title links to
    #[serde(default)]
    pub file: Option<String>,
}

impl GroupConfig {
    pub fn reporter_type(&self) -> Result<ReporterType> {
        self.kind.parse()
    }

    pub fn into_group(self, context: &GitHubContext) -> Result<XmlFileGroup> {
        let title = match &self.file {
            Some(file) => format!("[{}]({})", self.title, context.blob_url(file)),
            None => self.title,
        };
        Ok(XmlFileGroup {
            kind: self.kind.parse::<ReporterType>()?,
            title,
            directories: self.directories,
            file_name: self.file_name,
            annotation_limit: self.annotation_limit,
        })
    }
}

/// Parse the config document into report groups, keeping entries in the
/// order written. Titles of entries with a `file` link to that file at
/// the context's commit.
///
/// ```yaml
/// test:
///   title: Test
///   type: gotestsum
///   directories: [go/app1, go/app2]
///   fileName: junit.xml
/// lint:
///   title: Lint
///   type: golangci-lint
///   directories: [go/app1, go/app2]
///   fileName: lint.xml
///   annotationLimit: 5
/// ```
pub fn parse_config(raw: &str, context: &GitHubContext) -> Result<Vec<XmlFileGroup>> {
    parse_entries(raw)?
        .into_iter()
        .map(|(name, entry)| {
            entry
                .into_group(context)
                .map_err(|e| in_entry(&name, e))
        })
        .collect()
}

/// Named entries of the config document, validated but not linked
pub fn parse_entries(raw: &str) -> Result<Vec<(String, GroupConfig)>> {
    read_entries(raw).map_err(|e| match e {
        Error::Config(_) => e,
        other => Error::Config(other.to_string()),
    })
}

fn read_entries(raw: &str) -> Result<Vec<(String, GroupConfig)>> {
    let document: serde_yaml::Value = serde_yaml::from_str(raw)?;
    let serde_yaml::Value::Mapping(mapping) = document else {
        return Err(Error::Config(
            "expected a mapping of group names to entries".to_string(),
        ));
    };

    let mut entries = Vec::with_capacity(mapping.len());
    for (name, value) in mapping {
        let name = name
            .as_str()
            .map(str::to_string)
            .unwrap_or_else(|| format!("{name:?}"));
        let entry: GroupConfig = serde_yaml::from_value(value)
            .map_err(|e| Error::Config(format!("{name}: {e}")))?;
        entry.reporter_type().map_err(|e| in_entry(&name, e))?;
        debug!("Config entry {}: {} over {} directories", name, entry.kind, entry.directories.len());
        entries.push((name, entry));
    }
    Ok(entries)
}

fn in_entry(name: &str, error: Error) -> Error {
    match error {
        Error::Config(message) => Error::Config(format!("{name}: {message}")),
        other => Error::Config(format!("{name}: {other}")),
    }
}
