//! gotestsum JUnit reports
//!
//! gotestsum writes one `<testsuite>` per Go package with the package
//! path as `classname`, and puts the raw `go test` output of a failing
//! test into `<failure>`. A failing test usually yields two entries:
//!
//! 1. `=== RUN   Test&#xA;    baz_test.go:1: error;`
//! 2. `=== RUN   Test&#xA;--- FAIL: Test (0.00s)&#xA;`
//!
//! Only the first kind carries a location, so only it becomes a failure.

use crate::error::{Error, Result};
use crate::junit::TestSuites;
use crate::report::{FailureReport, GotestsumSummaryReport};
use crate::types::{GitHubContext, Outcome, ReporterType};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;

static FAILURE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r".+\s+([\w\d]+_test\.go):(\d+):.+").expect("Invalid failure regex")
});

static GO_VERSION_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"go([\d.]+) ([\w\d/])+").expect("Invalid go.version regex"));

#[derive(Debug, Clone)]
pub struct GotestsumParser {
    pub context: GitHubContext,
    pub path: String,
    junit: TestSuites,
}

impl GotestsumParser {
    pub fn new(context: GitHubContext, path: impl Into<String>, junit: TestSuites) -> Self {
        Self {
            context,
            path: path.into(),
            junit,
        }
    }

    pub fn outcome(&self) -> Outcome {
        if self.junit.is_bare() {
            return Outcome::Unknown;
        }
        if self.failed() != 0 {
            return Outcome::Failed;
        }
        if self.skipped() != 0 {
            return Outcome::Skipped;
        }
        Outcome::Passed
    }

    pub fn summary(&self) -> Result<GotestsumSummaryReport> {
        Ok(GotestsumSummaryReport {
            context: self.context.clone(),
            module_dir: self.path.clone(),
            outcome: self.outcome(),
            passed: self.passed(),
            failed: self.failed(),
            version: self.version()?,
            time: self.junit.time,
        })
    }

    pub fn failures(&self) -> Vec<FailureReport> {
        self.junit
            .testcases()
            .filter(|testcase| !testcase.failure.is_empty())
            .flat_map(|testcase| {
                testcase.failure.iter().filter_map(move |failure| {
                    let text = failure.text.as_deref()?;
                    let captures = FAILURE_REGEX.captures(text)?;
                    let line = captures[2].parse::<u32>().ok()?;
                    Some(FailureReport {
                        context: self.context.clone(),
                        kind: ReporterType::Gotestsum,
                        module_dir: self.path.clone(),
                        sub_dir: testcase.classname.clone(),
                        file: captures[1].to_string(),
                        line,
                        test: testcase.name.clone(),
                        message: captures[0].to_string(),
                    })
                })
            })
            .collect()
    }

    pub fn tests(&self) -> u64 {
        self.junit.tests.unwrap_or(0)
    }

    pub fn passed(&self) -> u64 {
        if self.tests() == 0 {
            0
        } else {
            self.tests().saturating_sub(self.failed())
        }
    }

    pub fn failed(&self) -> u64 {
        self.junit.failures.unwrap_or(0)
    }

    pub fn skipped(&self) -> u64 {
        self.junit.skipped.unwrap_or(0)
    }

    /// Go toolchain version shared by every suite, e.g. `1.23.2`
    pub fn version(&self) -> Result<Option<String>> {
        if self.junit.testsuite.is_empty() {
            return Ok(None);
        }

        let values: BTreeSet<&str> = self.junit.property_values("go.version").collect();
        let value = match values.len() {
            0 => return Err(Error::Parse("go.version property not found".to_string())),
            1 => values.into_iter().next().unwrap_or_default(),
            n => {
                return Err(Error::Parse(format!(
                    "multiple go.version properties found: {n}"
                )))
            }
        };

        GO_VERSION_REGEX
            .captures(value)
            .map(|captures| Some(captures[1].to_string()))
            .ok_or_else(|| Error::Parse(format!("go.version does not match the regex: {value}")))
    }
}
