//! Error handling utilities
//!
//! This module provides centralized error handling for the application.

use crate::github::actions::error_command;
use tracing::error;

/// Report a fatal error to the runner and exit
///
/// The error is printed as an `::error::` workflow command on stdout,
/// which fails the step. In verbose mode the cause chain follows on
/// stderr.
pub fn handle_fatal_error(error: anyhow::Error, verbose: u8) -> ! {
    error!("Fatal error: {:#}", error);

    println!("{}", error_command(&format!("{error:#}")));

    if verbose >= 1 {
        eprintln!("\nError chain:");
        for (i, cause) in error.chain().enumerate() {
            eprintln!("  {}: {}", i, cause);
        }
    }

    std::process::exit(1)
}
