//! Application module
//!
//! This module contains application-level functionality including the
//! report pipeline, logging setup and fatal error handling.

pub mod error_handling;
pub mod logging;
pub mod pipeline;

pub use error_handling::handle_fatal_error;
pub use logging::init_logging;
pub use pipeline::{ReportPipeline, RunReport};
