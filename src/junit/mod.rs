//! JUnit XML schema and reader
//!
//! The schema covers what gotestsum and golangci-lint emit. Every
//! attribute is optional so that partially filled reports still load;
//! the parsers decide what a missing value means.

pub mod reader;

pub use reader::{FsJUnitReader, JUnitReader};

use crate::error::Result;
use serde::Deserialize;

/// Root `<testsuites>` element
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TestSuites {
    #[serde(rename = "@tests", default)]
    pub tests: Option<u64>,
    #[serde(rename = "@failures", default)]
    pub failures: Option<u64>,
    #[serde(rename = "@errors", default)]
    pub errors: Option<u64>,
    #[serde(rename = "@skipped", default)]
    pub skipped: Option<u64>,
    #[serde(rename = "@time", default)]
    pub time: Option<f64>,
    #[serde(rename = "testsuite", default)]
    pub testsuite: Vec<TestSuite>,
}

impl TestSuites {
    /// True when `<testsuites>` carries no attributes at all
    pub fn is_bare(&self) -> bool {
        self.tests.is_none()
            && self.failures.is_none()
            && self.errors.is_none()
            && self.skipped.is_none()
            && self.time.is_none()
    }

    /// All test cases of all suites, in document order
    pub fn testcases(&self) -> impl Iterator<Item = &TestCase> {
        self.testsuite.iter().flat_map(|suite| suite.testcase.iter())
    }

    /// Values of every `<property>` named `name`, across all suites
    pub fn property_values<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.testsuite
            .iter()
            .flat_map(|suite| suite.properties.iter())
            .flat_map(|props| props.property.iter())
            .filter(move |p| p.name == name)
            .map(|p| p.value.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TestSuite {
    #[serde(rename = "@name", default)]
    pub name: String,
    #[serde(rename = "@tests", default)]
    pub tests: Option<u64>,
    #[serde(rename = "@failures", default)]
    pub failures: Option<u64>,
    #[serde(rename = "@errors", default)]
    pub errors: Option<u64>,
    #[serde(rename = "@skipped", default)]
    pub skipped: Option<u64>,
    #[serde(rename = "@time", default)]
    pub time: Option<f64>,
    #[serde(rename = "@timestamp", default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub properties: Vec<Properties>,
    #[serde(default)]
    pub testcase: Vec<TestCase>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Properties {
    #[serde(default)]
    pub property: Vec<Property>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Property {
    #[serde(rename = "@name", default)]
    pub name: String,
    #[serde(rename = "@value", default)]
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TestCase {
    #[serde(rename = "@classname", default)]
    pub classname: String,
    #[serde(rename = "@name", default)]
    pub name: String,
    #[serde(rename = "@time", default)]
    pub time: Option<f64>,
    #[serde(rename = "@file", default)]
    pub file: Option<String>,
    #[serde(default)]
    pub failure: Vec<Failure>,
    #[serde(default)]
    pub skipped: Vec<Failure>,
}

/// `<failure>` or `<skipped>` child of a test case
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Failure {
    #[serde(rename = "@message", default)]
    pub message: String,
    #[serde(rename = "@type", default)]
    pub kind: String,
    #[serde(rename = "$text", default)]
    pub text: Option<String>,
}

/// Parse a JUnit document held in memory
pub fn parse_str(xml: &str) -> std::result::Result<TestSuites, quick_xml::DeError> {
    quick_xml::de::from_str(xml.trim())
}

/// Parse a JUnit document, attributing errors to `path`
pub fn parse_report(path: &std::path::Path, xml: &str) -> Result<TestSuites> {
    parse_str(xml).map_err(|source| crate::error::Error::Xml {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_testsuites() {
        let xml = r#"
            <?xml version="1.0" encoding="UTF-8"?>
            <testsuites></testsuites>
        "#;
        let parsed = parse_str(xml).unwrap();
        assert!(parsed.is_bare());
        assert!(parsed.testsuite.is_empty());
    }

    #[test]
    fn test_parse_self_closing_testsuites() {
        let parsed = parse_str("<testsuites/>").unwrap();
        assert_eq!(parsed, TestSuites::default());
    }

    #[test]
    fn test_parse_suite_without_cases() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<testsuites tests="0" failures="0" errors="0" time="0.000000">
  <testsuite tests="0" failures="0" time="0.000000" name="." timestamp="2024-10-21T18:16:20+09:00">
    <properties>
      <property name="go.version" value="go1.23.2 linux/amd64"></property>
    </properties>
  </testsuite>
</testsuites>"#;
        let parsed = parse_str(xml).unwrap();
        assert!(!parsed.is_bare());
        assert_eq!(parsed.tests, Some(0));
        assert_eq!(parsed.failures, Some(0));
        assert_eq!(parsed.skipped, None);
        assert_eq!(parsed.time, Some(0.0));
        assert_eq!(parsed.testsuite.len(), 1);

        let suite = &parsed.testsuite[0];
        assert_eq!(suite.name, ".");
        assert_eq!(suite.timestamp.as_deref(), Some("2024-10-21T18:16:20+09:00"));
        assert!(suite.testcase.is_empty());
        assert_eq!(
            parsed.property_values("go.version").collect::<Vec<_>>(),
            vec!["go1.23.2 linux/amd64"]
        );
    }

    #[test]
    fn test_parse_failures_and_escapes() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<testsuites tests="4" failures="2" errors="0" time="0.001000">
  <testsuite tests="2" failures="1" time="0.001000" name="foo" timestamp="2024-09-17T21:07:31+09:00">
    <properties>
      <property name="go.version" value="go1.22.1 linux/amd64"></property>
    </properties>
    <testcase classname="foo/bar" name="Test1" time="0.000000"></testcase>
    <testcase classname="foo/bar" name="Test2" time="0.000000">
      <failure message="Failed" type="">=== RUN   Test2&#xA;    baz_test.go:1: error;</failure>
    </testcase>
  </testsuite>
</testsuites>"#;
        let parsed = parse_str(xml).unwrap();
        let cases: Vec<_> = parsed.testcases().collect();
        assert_eq!(cases.len(), 2);
        assert!(cases[0].failure.is_empty());
        assert_eq!(cases[1].name, "Test2");
        assert_eq!(cases[1].failure.len(), 1);

        let failure = &cases[1].failure[0];
        assert_eq!(failure.message, "Failed");
        assert_eq!(
            failure.text.as_deref(),
            Some("=== RUN   Test2\n    baz_test.go:1: error;")
        );
    }

    #[test]
    fn test_parse_report_names_path_on_error() {
        let path = std::path::Path::new("path/to/junit.xml");
        let err = parse_report(path, "<testsuites tests=\"many\"></testsuites>").unwrap_err();
        assert!(err.to_string().contains("path/to/junit.xml"));
    }
}
