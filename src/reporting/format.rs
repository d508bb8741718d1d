use std::fmt::Write;
use std::path::{Path, PathBuf};
use async_trait::async_trait;
use chrono::{DateTime, TimeZone};

use crate::engine::AnalysisResult;
use crate::error::{AnalyzerResult, AnalyzerError};

/// Writes an ordered list of results to storage
#[async_trait]
pub trait ReportExporter: Send + Sync {
    /// Write `results` to `output_path`, creating parent directories as needed
    async fn export(&self, results: &[AnalysisResult], output_path: &Path) -> AnalyzerResult<()>;
}

/// Prefix the file name of `raw` with `now` rendered through `timestamp_format`.
///
/// `reports/run.json` becomes `reports/240309_run.json` with the default
/// `%y%m%d` format. The directory part is kept as given.
pub fn timestamped_path<Tz>(raw: &Path, now: &DateTime<Tz>, timestamp_format: &str) -> AnalyzerResult<PathBuf>
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let name = raw
        .file_name()
        .ok_or_else(|| AnalyzerError::InvalidInput(format!("output path {:?} has no file name", raw)))?;

    let mut stamp = String::new();
    write!(stamp, "{}", now.format(timestamp_format))
        .map_err(|_| AnalyzerError::InvalidInput(format!("invalid timestamp format {:?}", timestamp_format)))?;

    let file_name = format!("{}_{}", stamp, name.to_string_lossy());
    Ok(match raw.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.join(file_name),
        _ => PathBuf::from(file_name),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn march_9th() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 9, 14, 30, 0).unwrap()
    }

    #[test]
    fn test_prefix_keeps_directory() {
        let path = timestamped_path(Path::new("reports/run.json"), &march_9th(), "%y%m%d").unwrap();
        assert_eq!(path, PathBuf::from("reports/240309_run.json"));
    }

    #[test]
    fn test_bare_file_name() {
        let path = timestamped_path(Path::new("run.json"), &march_9th(), "%y%m%d").unwrap();
        assert_eq!(path, PathBuf::from("240309_run.json"));
    }

    #[test]
    fn test_custom_format() {
        let path = timestamped_path(Path::new("/tmp/out/run.json"), &march_9th(), "%Y-%m-%dT%H%M").unwrap();
        assert_eq!(path, PathBuf::from("/tmp/out/2024-03-09T1430_run.json"));
    }

    #[test]
    fn test_path_without_file_name_rejected() {
        assert!(timestamped_path(Path::new("/"), &march_9th(), "%y%m%d").is_err());
    }
}
