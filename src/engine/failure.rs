// src/engine/failure.rs
use std::io;
use thiserror::Error;

pub const NOT_FOUND_MESSAGE: &str = "File not found.";
pub const ACCESS_DENIED_MESSAGE: &str = "Access denied.";
pub const UNREADABLE_MESSAGE: &str = "Unable to read the file.";
pub const CANCELLED_MESSAGE: &str = "Analysis cancelled.";
pub const INTERRUPTED_MESSAGE: &str = "Analysis interrupted.";

/// Why a log file could not be accessed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessErrorKind {
    NotFound,
    PermissionDenied,
    IsDirectory,
    Other,
}

impl From<io::ErrorKind> for AccessErrorKind {
    fn from(kind: io::ErrorKind) -> Self {
        match kind {
            io::ErrorKind::NotFound => AccessErrorKind::NotFound,
            io::ErrorKind::PermissionDenied => AccessErrorKind::PermissionDenied,
            _ => AccessErrorKind::Other,
        }
    }
}

/// A log file that is missing, unreadable or not a regular file
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("cannot access file {path:?}: {cause}")]
pub struct AccessFailure {
    pub path: String,
    pub kind: AccessErrorKind,
    pub cause: String,
}

impl AccessFailure {
    pub fn from_io(path: &str, err: &io::Error) -> Self {
        Self {
            path: path.to_string(),
            kind: err.kind().into(),
            cause: err.to_string(),
        }
    }

    pub fn directory(path: &str) -> Self {
        Self {
            path: path.to_string(),
            kind: AccessErrorKind::IsDirectory,
            cause: "path is a directory".to_string(),
        }
    }
}

/// Everything that can end a task in `FAILED`
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TaskFailure {
    #[error(transparent)]
    Access(#[from] AccessFailure),

    #[error("{reason}")]
    Cancelled { reason: String },

    #[error("{0}")]
    Unclassified(String),
}

impl TaskFailure {
    pub fn cancelled() -> Self {
        TaskFailure::Cancelled {
            reason: "analysis cancelled before completion".to_string(),
        }
    }
}

/// Map a failure to the (message, detail) pair shown to the user
pub fn classify(failure: &TaskFailure) -> (&'static str, String) {
    match failure {
        TaskFailure::Access(access) => {
            let message = match access.kind {
                AccessErrorKind::NotFound => NOT_FOUND_MESSAGE,
                AccessErrorKind::PermissionDenied => ACCESS_DENIED_MESSAGE,
                AccessErrorKind::IsDirectory | AccessErrorKind::Other => UNREADABLE_MESSAGE,
            };
            (message, access.cause.clone())
        }
        TaskFailure::Cancelled { reason } => (CANCELLED_MESSAGE, reason.clone()),
        TaskFailure::Unclassified(raw) => (INTERRUPTED_MESSAGE, raw.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn access(kind: io::ErrorKind) -> TaskFailure {
        AccessFailure::from_io("/var/log/app.log", &io::Error::new(kind, "boom")).into()
    }

    #[test]
    fn test_classify_access_failures() {
        assert_eq!(classify(&access(io::ErrorKind::NotFound)), (NOT_FOUND_MESSAGE, "boom".to_string()));
        assert_eq!(classify(&access(io::ErrorKind::PermissionDenied)), (ACCESS_DENIED_MESSAGE, "boom".to_string()));
        assert_eq!(classify(&access(io::ErrorKind::InvalidData)), (UNREADABLE_MESSAGE, "boom".to_string()));

        let dir = TaskFailure::from(AccessFailure::directory("/var/log"));
        assert_eq!(classify(&dir), (UNREADABLE_MESSAGE, "path is a directory".to_string()));
    }

    #[test]
    fn test_classify_cancelled_and_unclassified() {
        let (message, detail) = classify(&TaskFailure::cancelled());
        assert_eq!(message, CANCELLED_MESSAGE);
        assert!(!detail.is_empty());

        let (message, detail) = classify(&TaskFailure::Unclassified("worker panicked".to_string()));
        assert_eq!(message, INTERRUPTED_MESSAGE);
        assert_eq!(detail, "worker panicked");
    }

    #[test]
    fn test_access_failure_display_names_path() {
        let failure = AccessFailure::directory("/var/log");
        assert_eq!(failure.to_string(), "cannot access file \"/var/log\": path is a directory");
    }
}
