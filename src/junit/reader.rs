//! Loading JUnit reports from disk

use super::{parse_report, TestSuites};
use crate::error::{Error, Result};
use async_trait::async_trait;
use std::path::Path;
use tracing::debug;

/// Source of parsed JUnit reports, keyed by module directory and file name
#[async_trait]
pub trait JUnitReader: Send + Sync {
    async fn read(&self, directory: &str, file_name: &str) -> Result<TestSuites>;
}

/// Reads `directory/file_name` from the local filesystem
#[derive(Debug, Clone, Default)]
pub struct FsJUnitReader;

#[async_trait]
impl JUnitReader for FsJUnitReader {
    async fn read(&self, directory: &str, file_name: &str) -> Result<TestSuites> {
        let path = Path::new(directory).join(file_name);
        debug!("Reading JUnit report {}", path.display());

        let content = tokio::fs::read_to_string(&path)
            .await
            .map_err(|source| Error::ReadReport {
                path: path.clone(),
                source,
            })?;
        parse_report(&path, &content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_read_report_from_directory() {
        let temp_dir = TempDir::new().unwrap();
        let module = temp_dir.path().join("go/app");
        fs::create_dir_all(&module).unwrap();
        fs::write(
            module.join("junit.xml"),
            r#"<testsuites tests="1" failures="0" errors="0" time="0.5"></testsuites>"#,
        )
        .unwrap();

        let report = FsJUnitReader
            .read(module.to_str().unwrap(), "junit.xml")
            .await
            .unwrap();
        assert_eq!(report.tests, Some(1));
        assert_eq!(report.time, Some(0.5));
    }

    #[tokio::test]
    async fn test_read_missing_report() {
        let temp_dir = TempDir::new().unwrap();
        let err = FsJUnitReader
            .read(temp_dir.path().to_str().unwrap(), "missing.xml")
            .await
            .unwrap_err();

        assert!(matches!(err, Error::ReadReport { .. }));
        assert!(err.to_string().contains("missing.xml"));
    }

    #[tokio::test]
    async fn test_read_malformed_report() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("junit.xml"), "<testsuites><testsuite>").unwrap();

        let err = FsJUnitReader
            .read(temp_dir.path().to_str().unwrap(), "junit.xml")
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Xml { .. }));
    }
}
