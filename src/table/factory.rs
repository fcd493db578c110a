//! Assembling the tables of a whole run

use super::{failure_table, golangci_lint_table, gotestsum_table, Table, DEFAULT_FAILURE_LIMIT};
use crate::error::Result;
use crate::junit::JUnitReader;
use crate::parse::Parser;
use crate::report::{Reportable, SummaryReport};
use crate::types::{combine_outcomes, GitHubContext, Outcome, ReporterType};
use futures::future::try_join_all;
use std::sync::Arc;
use tracing::{debug, info};

/// Reports of one kind, found under the same file name in several modules
#[derive(Debug, Clone, PartialEq)]
pub struct XmlFileGroup {
    pub title: String,
    pub kind: ReporterType,
    pub directories: Vec<String>,
    pub file_name: String,
    pub annotation_limit: Option<usize>,
}

/// Everything a run renders: the overall outcome, the module summary,
/// the failure list and the annotations to emit
#[derive(Debug, Clone)]
pub struct TableSet {
    pub outcome: Outcome,
    pub summary: Table,
    pub failures: Table,
    pub annotations: Vec<String>,
}

pub struct TableSetFactory {
    reader: Arc<dyn JUnitReader>,
    failure_limit: usize,
}

impl TableSetFactory {
    pub fn new(reader: Arc<dyn JUnitReader>) -> Self {
        Self {
            reader,
            failure_limit: DEFAULT_FAILURE_LIMIT,
        }
    }

    pub fn with_failure_limit(mut self, limit: usize) -> Self {
        self.failure_limit = limit;
        self
    }

    /// Read and tabulate every module of one group
    pub async fn single(&self, context: &GitHubContext, group: &XmlFileGroup) -> Result<TableSet> {
        info!(
            "Reading {} {} report(s) named {}",
            group.directories.len(),
            group.kind,
            group.file_name
        );

        let reports = try_join_all(
            group
                .directories
                .iter()
                .map(|directory| self.reader.read(directory, &group.file_name)),
        )
        .await?;

        let parsers: Vec<Parser> = group
            .directories
            .iter()
            .zip(reports)
            .map(|(directory, junit)| Parser::new(context.clone(), group.kind, directory.as_str(), junit))
            .collect();

        let mut failures = Vec::new();
        for parser in &parsers {
            let found = parser.failures()?;
            debug!("{}: {} failure(s), {}", parser.path(), found.len(), parser.outcome());
            failures.extend(found);
        }

        let summaries = parsers
            .iter()
            .map(Parser::summary)
            .collect::<Result<Vec<_>>>()?;

        let annotation_limit = group.annotation_limit.unwrap_or(usize::MAX);
        let annotations = failures
            .iter()
            .take(annotation_limit)
            .map(|failure| failure.annotation().record().body)
            .collect();

        Ok(TableSet {
            outcome: combine_outcomes(parsers.iter().map(Parser::outcome)),
            summary: summary_table(group, &summaries)?,
            failures: failure_table(&failures, self.failure_limit)?,
            annotations,
        })
    }

    /// Tabulate all groups and merge them into one set. The first group's
    /// modules define the rows of the summary.
    pub async fn multi(
        &self,
        context: &GitHubContext,
        groups: &[XmlFileGroup],
    ) -> Result<Option<TableSet>> {
        let sets = try_join_all(groups.iter().map(|group| self.single(context, group))).await?;

        let Some((main, others)) = sets.split_first() else {
            return Ok(None);
        };

        let other_summaries: Vec<Table> = others.iter().map(|s| s.summary.clone()).collect();
        let other_failures: Vec<Table> = others.iter().map(|s| s.failures.clone()).collect();

        Ok(Some(TableSet {
            outcome: combine_outcomes(sets.iter().map(|s| s.outcome)),
            summary: main.summary.join(&other_summaries),
            failures: main.failures.concat(&other_failures)?,
            annotations: sets.iter().flat_map(|s| s.annotations.clone()).collect(),
        }))
    }
}

fn summary_table(group: &XmlFileGroup, summaries: &[SummaryReport]) -> Result<Table> {
    match group.kind {
        ReporterType::Gotestsum => {
            let reports: Vec<_> = summaries
                .iter()
                .filter_map(|s| match s {
                    SummaryReport::Gotestsum(r) => Some(r.clone()),
                    SummaryReport::GolangCiLint(_) => None,
                })
                .collect();
            gotestsum_table(&group.title, &reports)
        }
        ReporterType::GolangCiLint => {
            let reports: Vec<_> = summaries
                .iter()
                .filter_map(|s| match s {
                    SummaryReport::GolangCiLint(r) => Some(r.clone()),
                    SummaryReport::Gotestsum(_) => None,
                })
                .collect();
            golangci_lint_table(&group.title, &reports)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::junit::{parse_str, TestSuites};
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// Serves reports from memory and records which files were requested
    #[derive(Default)]
    struct MockReader {
        reports: HashMap<String, String>,
        requested: Mutex<Vec<String>>,
    }

    impl MockReader {
        fn with(mut self, directory: &str, file_name: &str, xml: &str) -> Self {
            self.reports
                .insert(format!("{directory}/{file_name}"), xml.to_string());
            self
        }
    }

    #[async_trait]
    impl JUnitReader for MockReader {
        async fn read(&self, directory: &str, file_name: &str) -> Result<TestSuites> {
            let key = format!("{directory}/{file_name}");
            self.requested.lock().unwrap().push(key.clone());
            let xml = self
                .reports
                .get(&key)
                .ok_or_else(|| Error::Validation(format!("no report at {key}")))?;
            Ok(parse_str(xml).unwrap())
        }
    }

    const PASSED: &str = r#"<testsuites tests="3" failures="0" errors="0" time="1.50">
  <testsuite name="pkg" tests="3" failures="0">
    <properties><property name="go.version" value="go1.23.2 linux/amd64"/></properties>
  </testsuite>
</testsuites>"#;

    const FAILED: &str = r#"<testsuites tests="3" failures="1" errors="0" time="0.25">
  <testsuite name="pkg" tests="3" failures="1">
    <properties><property name="go.version" value="go1.23.2 linux/amd64"/></properties>
    <testcase classname="example.com/app2/pkg" name="TestIsPalindrome">
      <failure message="Failed" type="">=== RUN   TestIsPalindrome&#xA;    string_test.go:21: IsPalindrome(hello) = true; want false</failure>
    </testcase>
  </testsuite>
</testsuites>"#;

    const LINT: &str = r#"<testsuites>
  <testsuite name="pkg/array.go" tests="1" failures="1">
    <testcase classname="pkg/array.go:7:2" name="predeclared">
      <failure message="pkg/array.go:7:2: variable max has same name as predeclared identifier" type=""></failure>
    </testcase>
  </testsuite>
</testsuites>"#;

    fn context() -> GitHubContext {
        GitHubContext::new("owner", "repo", "sha")
    }

    fn group(kind: ReporterType, title: &str, directories: &[&str], file_name: &str) -> XmlFileGroup {
        XmlFileGroup {
            title: title.to_string(),
            kind,
            directories: directories.iter().map(|d| d.to_string()).collect(),
            file_name: file_name.to_string(),
            annotation_limit: None,
        }
    }

    #[tokio::test]
    async fn test_single_gotestsum_group() {
        let reader = Arc::new(
            MockReader::default()
                .with("go/app1", "junit.xml", PASSED)
                .with("go/app2", "junit.xml", FAILED),
        );
        let factory = TableSetFactory::new(reader.clone());

        let set = factory
            .single(
                &context(),
                &group(ReporterType::Gotestsum, "Test", &["go/app1", "go/app2"], "junit.xml"),
            )
            .await
            .unwrap();

        assert_eq!(
            *reader.requested.lock().unwrap(),
            vec!["go/app1/junit.xml", "go/app2/junit.xml"]
        );
        assert_eq!(set.outcome, Outcome::Failed);
        assert_eq!(set.summary.columns(), 5);
        assert_eq!(set.summary.rows(), 2);
        assert_eq!(set.failures.columns(), 3);
        assert_eq!(set.failures.rows(), 1);
        assert_eq!(
            set.annotations,
            vec!["::error file=go/app2/example.com/app2/pkg/string_test.go,line=21::=== RUN   TestIsPalindrome%0A    string_test.go:21: IsPalindrome(hello) = true; want false"]
        );
    }

    #[tokio::test]
    async fn test_single_golangci_lint_group() {
        let reader = Arc::new(MockReader::default().with("go/app3", "lint.xml", LINT));
        let factory = TableSetFactory::new(reader);

        let set = factory
            .single(
                &context(),
                &group(ReporterType::GolangCiLint, "Lint", &["go/app3"], "lint.xml"),
            )
            .await
            .unwrap();

        assert_eq!(set.outcome, Outcome::Failed);
        assert_eq!(set.summary.columns(), 1);
        assert_eq!(set.summary.rows(), 1);
        assert_eq!(set.failures.rows(), 1);
        assert_eq!(
            set.annotations,
            vec!["::error file=go/app3/pkg/array.go,line=7::variable max has same name as predeclared identifier"]
        );
    }

    #[tokio::test]
    async fn test_annotation_limit() {
        let reader = Arc::new(MockReader::default().with("go/app2", "junit.xml", FAILED));
        let factory = TableSetFactory::new(reader);
        let mut limited = group(ReporterType::Gotestsum, "Test", &["go/app2"], "junit.xml");
        limited.annotation_limit = Some(0);

        let set = factory.single(&context(), &limited).await.unwrap();
        assert!(set.annotations.is_empty());
        assert_eq!(set.failures.rows(), 1);
    }

    #[tokio::test]
    async fn test_missing_report_fails() {
        let factory = TableSetFactory::new(Arc::new(MockReader::default()));
        let result = factory
            .single(
                &context(),
                &group(ReporterType::Gotestsum, "Test", &["go/none"], "junit.xml"),
            )
            .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_multi_without_groups() {
        let factory = TableSetFactory::new(Arc::new(MockReader::default()));
        assert!(factory.multi(&context(), &[]).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_multi_joins_summaries_and_concatenates_failures() {
        let reader = Arc::new(
            MockReader::default()
                .with("go/app1", "junit.xml", PASSED)
                .with("go/app3", "junit.xml", PASSED)
                .with("go/app3", "lint.xml", LINT),
        );
        let factory = TableSetFactory::new(reader);

        let set = factory
            .multi(
                &context(),
                &[
                    group(ReporterType::Gotestsum, "Test", &["go/app1", "go/app3"], "junit.xml"),
                    group(ReporterType::GolangCiLint, "Lint", &["go/app3"], "lint.xml"),
                ],
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(set.outcome, Outcome::Failed);
        assert_eq!(set.summary.columns(), 6);
        assert_eq!(set.summary.rows(), 2);
        assert_eq!(set.summary.records()[0].values[5], None);
        assert_eq!(
            set.summary.records()[1].values[5].as_deref(),
            Some("❌Failed")
        );
        assert_eq!(set.failures.rows(), 1);
        assert_eq!(set.annotations.len(), 1);
    }

    #[tokio::test]
    async fn test_failure_limit_applies_per_group() {
        let reader = Arc::new(
            MockReader::default()
                .with("go/app2", "junit.xml", FAILED)
                .with("go/app4", "junit.xml", FAILED),
        );
        let factory = TableSetFactory::new(reader).with_failure_limit(1);

        let set = factory
            .single(
                &context(),
                &group(ReporterType::Gotestsum, "Test", &["go/app2", "go/app4"], "junit.xml"),
            )
            .await
            .unwrap();

        assert_eq!(set.failures.rows(), 2);
        assert_eq!(set.annotations.len(), 2);
    }
}
