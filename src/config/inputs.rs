//! Resolution of the action inputs

use super::parse_config;
use crate::error::{Error, Result};
use crate::github::EventContext;
use crate::table::{XmlFileGroup, DEFAULT_FAILURE_LIMIT};
use crate::types::GitHubContext;
use once_cell::sync::Lazy;
use regex::Regex;

static DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+$").expect("Invalid regex pattern"));

/// Inputs as given on the command line or through `INPUT_*` variables
#[derive(Debug, Clone, Default)]
pub struct RawInputs {
    pub github_token: Option<String>,
    pub config: Option<String>,
    pub pull_request_number: Option<String>,
    pub sha: Option<String>,
    pub limit_failures: Option<String>,
    pub dry_run: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Inputs {
    pub github_token: Option<String>,
    pub groups: Vec<XmlFileGroup>,
    pub pull_number: Option<u64>,
    pub sha: String,
    pub limit_failures: usize,
    pub dry_run: bool,
}

impl Inputs {
    /// Validate raw inputs, falling back to the event context for the
    /// pull request number and the commit
    pub fn resolve(raw: RawInputs, event: &EventContext) -> Result<Self> {
        let github_token = non_empty(raw.github_token);
        if github_token.is_none() && !raw.dry_run {
            return Err(Error::Input(
                "Input required and not supplied: github-token".to_string(),
            ));
        }

        let sha = non_empty(raw.sha).unwrap_or_else(|| event.sha.clone());
        let config = non_empty(raw.config)
            .ok_or_else(|| Error::Input("Input required and not supplied: config".to_string()))?;
        let context = GitHubContext::new(&event.owner, &event.repo, &sha);
        let groups = parse_config(&config, &context)?;

        let pull_number = match non_empty(raw.pull_request_number) {
            Some(number) => Some(parse_pull_request_number(&number)?),
            None => event.pull_number,
        };

        let limit_failures = match non_empty(raw.limit_failures) {
            Some(limit) => limit.trim().parse().map_err(|_| {
                Error::Input(format!("`limit-failures` must be a number: {limit}"))
            })?,
            None => DEFAULT_FAILURE_LIMIT,
        };

        Ok(Self {
            github_token,
            groups,
            pull_number,
            sha,
            limit_failures,
            dry_run: raw.dry_run,
        })
    }
}

pub fn parse_pull_request_number(raw: &str) -> Result<u64> {
    if !DIGITS.is_match(raw) {
        return Err(Error::Input(
            "`pull-request-number` must be a number".to_string(),
        ));
    }
    raw.parse()
        .map_err(|_| Error::Input(format!("`pull-request-number` is out of range: {raw}")))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
