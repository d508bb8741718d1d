// src/engine/task.rs
use std::fmt;
use std::str::FromStr;
use serde::{Serialize, Deserialize};

use crate::error::AnalyzerError;

pub const SUCCESS_MESSAGE: &str = "Analysis completed successfully.";

/// Task definition for one log file to analyze
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TaskDefinition {
    pub id: String,
    pub path: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl TaskDefinition {
    pub fn new(id: impl Into<String>, path: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            path: path.into(),
            kind: kind.into(),
        }
    }
}

/// Status of a finished task
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TaskStatus {
    #[serde(rename = "OK")]
    Ok,
    #[serde(rename = "FAILED")]
    Failed,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Ok => "OK",
            TaskStatus::Failed => "FAILED",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskStatus {
    type Err = AnalyzerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "OK" => Ok(TaskStatus::Ok),
            "FAILED" => Ok(TaskStatus::Failed),
            other => Err(AnalyzerError::InvalidInput(
                format!("invalid status {:?}: use OK or FAILED", other)
            )),
        }
    }
}

/// Result of analyzing one log file.
///
/// Built through [`AnalysisResult::success`] and [`AnalysisResult::failure`],
/// or deserialized through a validating conversion, so an `OK` result never
/// carries error details and a `FAILED` one always does.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(try_from = "RawAnalysisResult")]
pub struct AnalysisResult {
    log_id: String,
    file_path: String,
    status: TaskStatus,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    error_details: Option<String>,
}

/// Wire shape of [`AnalysisResult`] before the status/details check
#[derive(Deserialize)]
struct RawAnalysisResult {
    log_id: String,
    file_path: String,
    status: TaskStatus,
    message: String,
    #[serde(default)]
    error_details: Option<String>,
}

impl TryFrom<RawAnalysisResult> for AnalysisResult {
    type Error = AnalyzerError;

    fn try_from(raw: RawAnalysisResult) -> Result<Self, Self::Error> {
        let has_details = raw.error_details.as_deref().is_some_and(|d| !d.is_empty());
        match (raw.status, has_details) {
            (TaskStatus::Ok, true) => Err(AnalyzerError::InvalidInput(
                format!("result {:?} is OK but carries error details", raw.log_id)
            )),
            (TaskStatus::Failed, false) => Err(AnalyzerError::InvalidInput(
                format!("result {:?} is FAILED without error details", raw.log_id)
            )),
            (TaskStatus::Ok, false) => Ok(Self {
                log_id: raw.log_id,
                file_path: raw.file_path,
                status: TaskStatus::Ok,
                message: raw.message,
                error_details: None,
            }),
            (TaskStatus::Failed, true) => Ok(Self {
                log_id: raw.log_id,
                file_path: raw.file_path,
                status: TaskStatus::Failed,
                message: raw.message,
                error_details: raw.error_details,
            }),
        }
    }
}

impl AnalysisResult {
    pub fn success(task: &TaskDefinition) -> Self {
        Self {
            log_id: task.id.clone(),
            file_path: task.path.clone(),
            status: TaskStatus::Ok,
            message: SUCCESS_MESSAGE.to_string(),
            error_details: None,
        }
    }

    pub fn failure(task: &TaskDefinition, message: impl Into<String>, details: impl Into<String>) -> Self {
        let details = details.into();
        Self {
            log_id: task.id.clone(),
            file_path: task.path.clone(),
            status: TaskStatus::Failed,
            message: message.into(),
            // A failure must always explain itself
            error_details: Some(if details.is_empty() { "unknown error".to_string() } else { details }),
        }
    }

    pub fn log_id(&self) -> &str {
        &self.log_id
    }

    pub fn file_path(&self) -> &str {
        &self.file_path
    }

    pub fn status(&self) -> TaskStatus {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Diagnostic detail, present only for `FAILED` results
    pub fn error_details(&self) -> Option<&str> {
        self.error_details.as_deref()
    }
}

impl fmt::Display for AnalysisResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {} ({}) -> {}", self.status, self.log_id, self.file_path, self.message)?;
        if let Some(details) = &self.error_details {
            write!(f, " | {}", details)?;
        }
        Ok(())
    }
}

/// Keep only the results with the requested status, in their original order
pub fn filter_by_status(results: Vec<AnalysisResult>, status: Option<TaskStatus>) -> Vec<AnalysisResult> {
    match status {
        Some(status) => results.into_iter().filter(|r| r.status == status).collect(),
        None => results,
    }
}
