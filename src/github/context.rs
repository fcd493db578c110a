//! Workflow run context read from the runner environment

use crate::error::{Error, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventContext {
    pub owner: String,
    pub repo: String,
    pub sha: String,
    pub run_id: u64,
    pub actor: String,
    pub pull_number: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct EventPayload {
    pull_request: Option<PullRequest>,
}

#[derive(Debug, Deserialize)]
struct PullRequest {
    number: u64,
}

impl EventContext {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the context from an environment lookup; empty values count
    /// as unset
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.is_empty());

        let repository = var("GITHUB_REPOSITORY")
            .ok_or_else(|| Error::Input("GITHUB_REPOSITORY is not set".to_string()))?;
        let (owner, repo) = repository
            .split_once('/')
            .filter(|(o, r)| !o.is_empty() && !r.is_empty())
            .ok_or_else(|| {
                Error::Input(format!(
                    "GITHUB_REPOSITORY must be in the form owner/repo: {repository}"
                ))
            })?;

        let run_id = match var("GITHUB_RUN_ID") {
            Some(id) => id
                .parse()
                .map_err(|_| Error::Input(format!("GITHUB_RUN_ID is not a number: {id}")))?,
            None => 0,
        };

        let pull_number = match var("GITHUB_EVENT_PATH") {
            Some(path) => read_pull_number(Path::new(&path))?,
            None => None,
        };

        Ok(Self {
            owner: owner.to_string(),
            repo: repo.to_string(),
            sha: var("GITHUB_SHA").unwrap_or_default(),
            run_id,
            actor: var("GITHUB_ACTOR").unwrap_or_default(),
            pull_number,
        })
    }
}

/// `pull_request.number` of the event payload, if the event has one
pub fn read_pull_number(path: &Path) -> Result<Option<u64>> {
    if !path.exists() {
        debug!("Event payload {} does not exist", path.display());
        return Ok(None);
    }
    let content = std::fs::read_to_string(path)?;
    let payload: EventPayload = serde_json::from_str(&content)?;
    Ok(payload.pull_request.map(|pr| pr.number))
}
