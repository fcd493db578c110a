//! Command routing and execution
//!
//! This module handles routing CLI commands to their respective implementations.

use crate::app::ReportPipeline;
use crate::cli::args::{Commands, ReportArgs};
use crate::config::{parse_entries, Inputs};
use crate::github::{ActionsRunner, EventContext, RestClient};
use crate::junit::FsJUnitReader;
use anyhow::{anyhow, Context, Result};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

/// Execute a CLI command based on the parsed arguments
pub async fn execute_command(command: Option<Commands>, verbose: u8) -> Result<()> {
    debug!("Executing command with verbosity {}", verbose);
    match command {
        Some(Commands::Report(args)) => run_report(args).await,
        Some(Commands::CheckConfig {
            config,
            config_file,
        }) => run_check_config(config, config_file.as_deref()).await,
        None => {
            // No command provided, show help
            use crate::cli::help::generate_help;
            println!("{}", generate_help());
            Ok(())
        }
    }
}

/// The config document from `--config-file` or `--config`/`INPUT_CONFIG`.
/// An empty inline config counts as unset; giving both is an error.
async fn load_config(config: Option<String>, config_file: Option<&Path>) -> Result<Option<String>> {
    let config = config.filter(|c| !c.is_empty());
    match config_file {
        Some(_) if config.is_some() => Err(anyhow!(
            "Use either --config (INPUT_CONFIG) or --config-file, not both"
        )),
        Some(path) => {
            let content = tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("Failed to read config file {}", path.display()))?;
            Ok(Some(content))
        }
        None => Ok(config),
    }
}

async fn run_report(args: ReportArgs) -> Result<()> {
    let config = load_config(args.config.clone(), args.config_file.as_deref()).await?;
    let event = EventContext::from_env().context("Failed to read the workflow context")?;
    let inputs = Inputs::resolve(args.raw_inputs(config), &event)?;

    let mut pipeline = ReportPipeline::new(Arc::new(FsJUnitReader), ActionsRunner::from_env());
    if !inputs.dry_run {
        let token = inputs
            .github_token
            .clone()
            .ok_or_else(|| anyhow!("github-token is required"))?;
        pipeline = pipeline.with_comments(Arc::new(RestClient::new(token, args.api_url)?));
    }

    let mut stdout = std::io::stdout();
    let report = pipeline.run(&inputs, &event, &mut stdout).await?;
    info!("Report finished: {}", report.outcome);
    Ok(())
}

async fn run_check_config(config: Option<String>, config_file: Option<&Path>) -> Result<()> {
    let config = load_config(config, config_file)
        .await?
        .ok_or_else(|| anyhow!("Input required and not supplied: config"))?;
    let entries = parse_entries(&config)?;

    for (name, entry) in &entries {
        println!(
            "{}: {} ({}) reads {} in {} directories",
            name,
            entry.title,
            entry.kind,
            entry.file_name,
            entry.directories.len()
        );
    }
    println!("Config OK: {} group(s)", entries.len());
    Ok(())
}
