use std::path::Path;
use tracing::debug;

use crate::engine::TaskDefinition;
use crate::error::{AnalyzerResult, AnalyzerError};

/// Load and validate the list of log files to analyze
pub fn load_tasks(path: &Path) -> AnalyzerResult<Vec<TaskDefinition>> {
    debug!("Loading tasks from {}", path.display());

    let content = std::fs::read_to_string(path)
        .map_err(|e| AnalyzerError::ConfigRead {
            path: path.to_path_buf(),
            source: e,
        })?;

    let tasks: Vec<TaskDefinition> = serde_json::from_str(&content)
        .map_err(|e| AnalyzerError::ConfigParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    for (index, task) in tasks.iter().enumerate() {
        let missing = [("id", &task.id), ("path", &task.path), ("type", &task.kind)]
            .into_iter()
            .find(|(_, value)| value.trim().is_empty());

        if let Some((field, _)) = missing {
            return Err(AnalyzerError::ConfigParse {
                path: path.to_path_buf(),
                message: format!("entry {}: missing field {}", index, field),
            });
        }
    }

    debug!("Loaded {} tasks", tasks.len());
    Ok(tasks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_valid_tasks() {
        let file = write_config(r#"[
            {"id": "web", "path": "/var/log/nginx/access.log", "type": "nginx"},
            {"id": "db", "path": "/var/log/postgres.log", "type": "postgres"}
        ]"#);

        let tasks = load_tasks(file.path()).unwrap();
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0], TaskDefinition::new("web", "/var/log/nginx/access.log", "nginx"));
        assert_eq!(tasks[1].kind, "postgres");
    }

    #[test]
    fn test_empty_list_is_valid() {
        let file = write_config("[]");
        assert!(load_tasks(file.path()).unwrap().is_empty());
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_tasks(&dir.path().join("config.json")).unwrap_err();
        assert!(matches!(err, AnalyzerError::ConfigRead { .. }));
        assert!(err.is_config_error());
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let file = write_config("{ not json");
        let err = load_tasks(file.path()).unwrap_err();
        assert!(matches!(err, AnalyzerError::ConfigParse { .. }));
    }

    #[test]
    fn test_blank_field_names_entry() {
        let file = write_config(r#"[
            {"id": "web", "path": "/var/log/web.log", "type": "nginx"},
            {"id": "db", "path": "  ", "type": "postgres"}
        ]"#);

        match load_tasks(file.path()).unwrap_err() {
            AnalyzerError::ConfigParse { message, .. } => assert_eq!(message, "entry 1: missing field path"),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_absent_field_is_parse_error() {
        let file = write_config(r#"[{"id": "web", "path": "/var/log/web.log"}]"#);
        assert!(matches!(load_tasks(file.path()), Err(AnalyzerError::ConfigParse { .. })));
    }
}
