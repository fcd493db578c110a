//! Help text generation and utilities
//!
//! This module provides utilities for generating help text and command descriptions.

use crate::cli::args::Cli;
use clap::CommandFactory;

/// Generate comprehensive help text for the CLI
pub fn generate_help() -> String {
    Cli::command().render_help().to_string()
}
