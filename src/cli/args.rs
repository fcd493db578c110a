//! CLI argument structures
//!
//! Every report input can be given as a flag or through the `INPUT_*`
//! variable the Actions runner sets for the corresponding action input.

use crate::config::RawInputs;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Summarize JUnit reports of a Go monorepo on GitHub
#[derive(Parser)]
#[command(name = "junit-monorepo")]
#[command(about = "junit-monorepo - Report gotestsum and golangci-lint results on GitHub", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace, -vvv for all)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Read the reports and publish the markdown summary
    #[command(name = "report")]
    Report(ReportArgs),

    /// Validate a config document and list its groups
    #[command(name = "check-config")]
    CheckConfig {
        /// Config document to validate
        #[arg(long, env = "INPUT_CONFIG", hide_env_values = true)]
        config: Option<String>,

        /// Read the config document from a file
        #[arg(long, value_name = "PATH")]
        config_file: Option<PathBuf>,
    },
}

#[derive(Args, Debug, Clone)]
pub struct ReportArgs {
    /// Token used to comment on the pull request
    #[arg(long, env = "INPUT_GITHUB-TOKEN", hide_env_values = true)]
    pub github_token: Option<String>,

    /// Config document (YAML) listing the report groups
    #[arg(long, env = "INPUT_CONFIG")]
    pub config: Option<String>,

    /// Read the config document from a file (an empty config input is ignored)
    #[arg(long, value_name = "PATH")]
    pub config_file: Option<PathBuf>,

    /// Pull request to comment on (defaults to the event's pull request)
    #[arg(long, env = "INPUT_PULL-REQUEST-NUMBER")]
    pub pull_request_number: Option<String>,

    /// Commit the links point to (defaults to GITHUB_SHA)
    #[arg(long, env = "INPUT_SHA")]
    pub sha: Option<String>,

    /// Maximum number of failures listed per group
    #[arg(long, env = "INPUT_LIMIT-FAILURES")]
    pub limit_failures: Option<String>,

    /// GitHub REST API base URL
    #[arg(long, env = "GITHUB_API_URL", default_value = "https://api.github.com")]
    pub api_url: String,

    /// Print the report instead of publishing it
    #[arg(long, help = "Print the markdown report without writing to GitHub")]
    pub dry_run: bool,
}

impl ReportArgs {
    /// Raw inputs with the config document already loaded
    pub fn raw_inputs(&self, config: Option<String>) -> RawInputs {
        RawInputs {
            github_token: self.github_token.clone(),
            config,
            pull_request_number: self.pull_request_number.clone(),
            sha: self.sha.clone(),
            limit_failures: self.limit_failures.clone(),
            dry_run: self.dry_run,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_report_flags() {
        let cli = Cli::try_parse_from([
            "junit-monorepo",
            "-vv",
            "report",
            "--config",
            "{}",
            "--pull-request-number",
            "12",
            "--dry-run",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        let Some(Commands::Report(args)) = cli.command else {
            panic!("expected report command");
        };
        assert_eq!(args.config.as_deref(), Some("{}"));
        assert_eq!(args.pull_request_number.as_deref(), Some("12"));
        assert!(args.dry_run);
    }

    #[test]
    fn test_config_and_config_file_both_parse() {
        // Both sources are resolved by the router, where empty values count as unset
        let cli = Cli::try_parse_from([
            "junit-monorepo",
            "report",
            "--config",
            "",
            "--config-file",
            "config.yml",
        ])
        .unwrap();
        let Some(Commands::Report(args)) = cli.command else {
            panic!("expected report command");
        };
        assert_eq!(args.config.as_deref(), Some(""));
        assert_eq!(args.config_file, Some(PathBuf::from("config.yml")));
    }
}
