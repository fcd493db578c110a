//! Workflow commands and runner files of GitHub Actions

use crate::error::{Error, Result};
use crate::report::annotation::escape_data;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use uuid::Uuid;

/// Runner files named by `GITHUB_STEP_SUMMARY` and `GITHUB_OUTPUT`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionsRunner {
    pub step_summary: Option<PathBuf>,
    pub output: Option<PathBuf>,
}

impl ActionsRunner {
    pub fn new(step_summary: Option<PathBuf>, output: Option<PathBuf>) -> Self {
        Self {
            step_summary,
            output,
        }
    }

    pub fn from_env() -> Self {
        let path = |name: &str| {
            std::env::var_os(name)
                .filter(|v| !v.is_empty())
                .map(PathBuf::from)
        };
        Self::new(path("GITHUB_STEP_SUMMARY"), path("GITHUB_OUTPUT"))
    }

    /// Append markdown to the job summary page
    pub fn append_step_summary(&self, body: &str) -> Result<()> {
        match &self.step_summary {
            Some(path) => append(path, &format!("{body}\n")),
            None => {
                warn!("GITHUB_STEP_SUMMARY is not set, skipping job summary");
                Ok(())
            }
        }
    }

    /// Set a step output, multi-line safe
    pub fn set_output(&self, name: &str, value: &str) -> Result<()> {
        let Some(path) = &self.output else {
            warn!("GITHUB_OUTPUT is not set, skipping output {}", name);
            return Ok(());
        };

        let delimiter = format!("ghadelimiter_{}", Uuid::new_v4());
        if name.contains(&delimiter) || value.contains(&delimiter) {
            return Err(Error::Validation(format!(
                "Unexpected input: output {name} contains the delimiter {delimiter}"
            )));
        }
        debug!("Writing output {} to {}", name, path.display());
        append(path, &output_entry(name, value, &delimiter))
    }
}

fn output_entry(name: &str, value: &str, delimiter: &str) -> String {
    format!("{name}<<{delimiter}\n{value}\n{delimiter}\n")
}

fn append(path: &Path, content: &str) -> Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    file.write_all(content.as_bytes())?;
    Ok(())
}

/// `::error::message`, the command that marks the run as failed
pub fn error_command(message: &str) -> String {
    format!("::error::{}", escape_data(message))
}
