//! # junit-monorepo
//!
//! Summarize the JUnit reports of a Go monorepo on GitHub.
//!
//! gotestsum test reports and golangci-lint findings are read from every
//! module directory listed in the config, merged into one markdown
//! report, and published as a pull request comment, a job summary and a
//! step output. Failures also become `::error` annotations.
//!
//! ## Usage
//!
//! ```bash
//! junit-monorepo report --config-file report.yml --dry-run
//! ```
//!
//! ## Modules
//!
//! - `app` - The report pipeline, logging setup and fatal error handling
//! - `cli` - Argument parsing and command routing
//! - `config` - Action inputs and the YAML group config
//! - `fixtures` - Small utilities whose Go counterparts produce the sample reports
//! - `github` - Pull request comments, runner files and the event context
//! - `junit` - JUnit XML schema and reader
//! - `markdown` - Rendering of the report body
//! - `parse` - gotestsum and golangci-lint interpretation of a report
//! - `report` - Table rows derived from parsed reports
//! - `table` - Markdown tables and their assembly
pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod fixtures;
pub mod github;
pub mod junit;
pub mod markdown;
pub mod parse;
pub mod report;
pub mod table;
pub mod types;

pub use error::{Error, Result};
