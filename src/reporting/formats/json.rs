use std::path::Path;
use async_trait::async_trait;
use tracing::debug;

use crate::engine::AnalysisResult;
use crate::error::{AnalyzerResult, AnalyzerError};
use crate::reporting::format::ReportExporter;

/// JSON report exporter
#[derive(Debug, Default)]
pub struct JsonReportExporter;

impl JsonReportExporter {
    /// Create a new JSON report exporter
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ReportExporter for JsonReportExporter {
    async fn export(&self, results: &[AnalysisResult], output_path: &Path) -> AnalyzerResult<()> {
        if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await
                .map_err(|e| AnalyzerError::FileError {
                    path: parent.to_path_buf(),
                    message: format!("Failed to create output directory: {}", e),
                })?;
        }

        let mut json = serde_json::to_string_pretty(results)
            .map_err(|e| AnalyzerError::SerializationError(format!("Failed to serialize report: {}", e)))?;
        json.push('\n');

        tokio::fs::write(output_path, json).await
            .map_err(|e| AnalyzerError::FileError {
                path: output_path.to_path_buf(),
                message: format!("Failed to write report: {}", e),
            })?;

        debug!("Wrote {} results to {}", results.len(), output_path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{TaskDefinition, TaskStatus};

    #[tokio::test]
    async fn test_export_creates_directories() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("nested/reports/run.json");
        let task = TaskDefinition::new("web", "/var/log/web.log", "nginx");
        let results = vec![
            AnalysisResult::success(&task),
            AnalysisResult::failure(&task, "File not found.", "no such file or directory"),
        ];

        JsonReportExporter::new().export(&results, &output).await.unwrap();

        let written = std::fs::read_to_string(&output).unwrap();
        assert!(written.ends_with("]\n"));
        assert!(written.contains("\n  {"));

        let parsed: Vec<AnalysisResult> = serde_json::from_str(&written).unwrap();
        assert_eq!(parsed, results);
        assert_eq!(parsed[1].status(), TaskStatus::Failed);
    }

    #[tokio::test]
    async fn test_export_into_file_path_fails() {
        let blocker = tempfile::NamedTempFile::new().unwrap();
        let output = blocker.path().join("run.json");

        let err = JsonReportExporter::new().export(&[], &output).await.unwrap_err();
        assert!(matches!(err, AnalyzerError::FileError { .. }));
    }
}
