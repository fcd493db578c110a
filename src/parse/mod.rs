//! Interpretation of raw JUnit reports per reporter type
//!
//! gotestsum and golangci-lint both write JUnit XML but give its fields
//! different meanings; each parser turns the raw document into a module
//! outcome, a summary row and located failures.

pub mod golangcilint;
pub mod gotestsum;

pub use golangcilint::GolangCiLintParser;
pub use gotestsum::GotestsumParser;

use crate::error::Result;
use crate::junit::TestSuites;
use crate::report::{FailureReport, SummaryReport};
use crate::types::{GitHubContext, Outcome, ReporterType};

/// Parser for either reporter type
#[derive(Debug, Clone)]
pub enum Parser {
    Gotestsum(GotestsumParser),
    GolangCiLint(GolangCiLintParser),
}

impl Parser {
    pub fn new(
        context: GitHubContext,
        kind: ReporterType,
        path: impl Into<String>,
        junit: TestSuites,
    ) -> Self {
        match kind {
            ReporterType::Gotestsum => {
                Parser::Gotestsum(GotestsumParser::new(context, path, junit))
            }
            ReporterType::GolangCiLint => {
                Parser::GolangCiLint(GolangCiLintParser::new(context, path, junit))
            }
        }
    }

    pub fn path(&self) -> &str {
        match self {
            Parser::Gotestsum(p) => &p.path,
            Parser::GolangCiLint(p) => &p.path,
        }
    }

    pub fn outcome(&self) -> Outcome {
        match self {
            Parser::Gotestsum(p) => p.outcome(),
            Parser::GolangCiLint(p) => p.outcome(),
        }
    }

    pub fn summary(&self) -> Result<SummaryReport> {
        match self {
            Parser::Gotestsum(p) => p.summary().map(SummaryReport::Gotestsum),
            Parser::GolangCiLint(p) => Ok(SummaryReport::GolangCiLint(p.summary())),
        }
    }

    pub fn failures(&self) -> Result<Vec<FailureReport>> {
        match self {
            Parser::Gotestsum(p) => Ok(p.failures()),
            Parser::GolangCiLint(p) => p.failures(),
        }
    }
}
