//! Types shared by every stage of the report pipeline

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Aggregated outcome of a report, a module, or the whole run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Passed,
    Failed,
    Skipped,
    Unknown,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Passed => "passed",
            Outcome::Failed => "failed",
            Outcome::Skipped => "skipped",
            Outcome::Unknown => "unknown",
        }
    }

    /// Cell text used by the summary tables
    pub fn badge(&self) -> &'static str {
        if *self == Outcome::Failed {
            "❌Failed"
        } else {
            "✅Passed"
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `Failed` if any outcome failed, otherwise `Passed`
pub fn combine_outcomes<I>(outcomes: I) -> Outcome
where
    I: IntoIterator<Item = Outcome>,
{
    if outcomes.into_iter().any(|o| o == Outcome::Failed) {
        Outcome::Failed
    } else {
        Outcome::Passed
    }
}

/// Tool that produced a JUnit report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReporterType {
    #[serde(rename = "gotestsum")]
    Gotestsum,
    #[serde(rename = "golangci-lint")]
    GolangCiLint,
}

impl ReporterType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReporterType::Gotestsum => "gotestsum",
            ReporterType::GolangCiLint => "golangci-lint",
        }
    }
}

impl fmt::Display for ReporterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReporterType {
    type Err = crate::error::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "gotestsum" => Ok(ReporterType::Gotestsum),
            "golangci-lint" => Ok(ReporterType::GolangCiLint),
            other => Err(crate::error::Error::Config(format!(
                "Invalid reporter type: {other}"
            ))),
        }
    }
}

/// Repository coordinates used to build links into github.com
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitHubContext {
    pub owner: String,
    pub repo: String,
    pub sha: String,
}

impl GitHubContext {
    pub fn new(owner: impl Into<String>, repo: impl Into<String>, sha: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
            sha: sha.into(),
        }
    }

    /// Link to a path of the repository at the context's commit
    pub fn blob_url(&self, path: &str) -> String {
        format!(
            "https://github.com/{}/{}/blob/{}/{}",
            self.owner, self.repo, self.sha, path
        )
    }
}

/// Join slash-separated path segments the way `path.join` does: empty
/// and `.` segments vanish and `..` pops the previous segment.
pub fn join_path(parts: &[&str]) -> String {
    let mut segments: Vec<&str> = Vec::new();
    let absolute = parts
        .iter()
        .find(|p| !p.is_empty())
        .is_some_and(|p| p.starts_with('/'));

    for part in parts {
        for segment in part.split('/') {
            match segment {
                "" | "." => {}
                ".." => {
                    if segments.last().is_some_and(|s| *s != "..") {
                        segments.pop();
                    } else if !absolute {
                        segments.push("..");
                    }
                }
                s => segments.push(s),
            }
        }
    }

    let joined = segments.join("/");
    match (absolute, joined.is_empty()) {
        (true, _) => format!("/{joined}"),
        (false, true) => ".".to_string(),
        (false, false) => joined,
    }
}
