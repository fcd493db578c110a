//! CLI command handlers
//!
//! This module contains all CLI-related functionality including argument
//! parsing structures, command routing and help text generation.

pub mod args;
pub mod help;
pub mod router;

// Re-export the main CLI structures for convenience
pub use args::{Cli, Commands, ReportArgs};
pub use help::generate_help;
pub use router::execute_command;
