//! golangci-lint JUnit reports
//!
//! golangci-lint only reports findings: one `<testsuite>` per file, one
//! `<testcase>` per finding, with `classname` set to
//! `path/to/file.go:line:column`. A report without suites is clean.

use crate::error::{Error, Result};
use crate::junit::TestSuites;
use crate::report::{FailureReport, GolangCiLintSummaryReport};
use crate::types::{GitHubContext, Outcome, ReporterType};

#[derive(Debug, Clone)]
pub struct GolangCiLintParser {
    pub context: GitHubContext,
    pub path: String,
    junit: TestSuites,
}

impl GolangCiLintParser {
    pub fn new(context: GitHubContext, path: impl Into<String>, junit: TestSuites) -> Self {
        Self {
            context,
            path: path.into(),
            junit,
        }
    }

    pub fn outcome(&self) -> Outcome {
        if self.junit.testsuite.is_empty() {
            Outcome::Passed
        } else {
            Outcome::Failed
        }
    }

    pub fn summary(&self) -> GolangCiLintSummaryReport {
        GolangCiLintSummaryReport {
            context: self.context.clone(),
            module_dir: self.path.clone(),
            outcome: self.outcome(),
        }
    }

    pub fn failures(&self) -> Result<Vec<FailureReport>> {
        self.junit
            .testcases()
            .filter(|testcase| !testcase.failure.is_empty())
            .map(|testcase| {
                let [failure] = testcase.failure.as_slice() else {
                    return Err(Error::Parse(format!(
                        "golangci-lint test case has multiple failures: {}",
                        testcase.classname
                    )));
                };

                let (sub_dir, file, line) = split_location(&testcase.classname)?;
                Ok(FailureReport {
                    context: self.context.clone(),
                    kind: ReporterType::GolangCiLint,
                    module_dir: self.path.clone(),
                    sub_dir,
                    file,
                    line,
                    test: testcase.name.clone(),
                    message: strip_location(&failure.message),
                })
            })
            .collect()
    }
}

/// `go/app/bar_test.go:56:78: Error: Foo: Bar` -> `Error: Foo: Bar`
fn strip_location(message: &str) -> String {
    message
        .split(": ")
        .skip(1)
        .collect::<Vec<_>>()
        .join(": ")
        .trim()
        .to_string()
}

/// `path/to/file.go:line:column` -> (`path/to`, `file.go`, line)
fn split_location(classname: &str) -> Result<(String, String, u32)> {
    let mut parts = classname.split(':');
    let full_path = parts.next().unwrap_or_default();
    let line = parts
        .next()
        .and_then(|l| l.parse::<u32>().ok())
        .ok_or_else(|| {
            Error::Parse(format!(
                "golangci-lint classname has no line number: {classname}"
            ))
        })?;

    let (sub_dir, file) = match full_path.rsplit_once('/') {
        Some(("", file)) => ("/", file),
        Some((dir, file)) => (dir, file),
        None => (".", full_path),
    };
    Ok((sub_dir.to_string(), file.to_string(), line))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::junit::parse_str;

    fn parser(xml: &str) -> GolangCiLintParser {
        GolangCiLintParser::new(
            GitHubContext::new("owner", "repo", "sha"),
            "path/to",
            parse_str(xml).unwrap(),
        )
    }

    #[test]
    fn test_report_without_findings() {
        let parser = parser("<testsuites></testsuites>");
        assert_eq!(parser.outcome(), Outcome::Passed);
        assert_eq!(parser.summary().outcome, Outcome::Passed);
        assert_eq!(parser.summary().module_dir, "path/to");
        assert!(parser.failures().unwrap().is_empty());
    }

    #[test]
    fn test_report_with_findings() {
        let parser = parser(
            r#"<testsuites>
  <testsuite name="go/app/foo_test.go" tests="3" errors="0" failures="3">
    <testcase classname="go/app/foo_test.go:12:34" name="errcheck">
      <failure message="go/app/foo_test.go:39:21: Error" type="">: Error&#xA;Category: errcheck&#xA;File: go/app/foo_test.go&#xA;Line: 12&#xA;Details: Foo</failure>
    </testcase>
  </testsuite>
  <testsuite name="go/app/bar_test.go" tests="2" errors="0" failures="2">
    <testcase classname="go/app/bar_test.go:56:78" name="errcheck">
      <failure message="go/app/bar_test.go:56:78: Error: Foo: Bar" type="">: Error</failure>
    </testcase>
  </testsuite>
</testsuites>"#,
        );

        assert_eq!(parser.outcome(), Outcome::Failed);

        let failures = parser.failures().unwrap();
        assert_eq!(failures.len(), 2);
        assert_eq!(
            failures[0],
            FailureReport {
                context: GitHubContext::new("owner", "repo", "sha"),
                kind: ReporterType::GolangCiLint,
                module_dir: "path/to".to_string(),
                sub_dir: "go/app".to_string(),
                file: "foo_test.go".to_string(),
                line: 12,
                test: "errcheck".to_string(),
                message: "Error".to_string(),
            }
        );
        assert_eq!(failures[1].file, "bar_test.go");
        assert_eq!(failures[1].line, 56);
        assert_eq!(failures[1].message, "Error: Foo: Bar");
    }

    #[test]
    fn test_multiple_failures_in_one_case_is_error() {
        let parser = parser(
            r#"<testsuites>
  <testsuite name="main.go" tests="1" failures="1">
    <testcase classname="main.go:1:1" name="govet">
      <failure message="main.go:1:1: a" type=""></failure>
      <failure message="main.go:1:1: b" type=""></failure>
    </testcase>
  </testsuite>
</testsuites>"#,
        );
        let err = parser.failures().unwrap_err();
        assert!(err.to_string().contains("multiple failures"));
    }

    #[test]
    fn test_split_location() {
        assert_eq!(
            split_location("path/to/file.go:3:9").unwrap(),
            ("path/to".to_string(), "file.go".to_string(), 3)
        );
        assert_eq!(
            split_location("main.go:7:1").unwrap(),
            (".".to_string(), "main.go".to_string(), 7)
        );
        assert!(split_location("main.go").is_err());
    }

    #[test]
    fn test_strip_location() {
        assert_eq!(strip_location("go/app/bar_test.go:56:78: Error: Foo: Bar"), "Error: Foo: Bar");
        assert_eq!(strip_location("no separator"), "");
    }
}
