//! Bulk log import from JSON exports.
//!
//! An exported log is either a bare array of event objects or an object
//! carrying the array under a `logs` property. Timestamps are ISO-8601
//! strings. A failed import leaves whatever log the caller already holds
//! untouched; replacement only happens on a fully parsed document.

use crate::core::types::ActivityEvent;
use serde::Deserialize;
use std::path::Path;

/// Import errors.
#[derive(Debug)]
pub enum ImportError {
    /// The document is not valid JSON or does not match the log schema
    InvalidImportFormat(String),
    /// The file could not be read
    Io(String),
}

impl std::fmt::Display for ImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImportError::InvalidImportFormat(e) => write!(f, "Invalid import format: {e}"),
            ImportError::Io(e) => write!(f, "IO error: {e}"),
        }
    }
}

impl std::error::Error for ImportError {}

/// The two accepted document shapes.
#[derive(Deserialize)]
#[serde(untagged)]
enum LogDocument {
    Wrapped { logs: Vec<ActivityEvent> },
    Bare(Vec<ActivityEvent>),
}

/// Parse a JSON log document.
pub fn parse_log_json(content: &str) -> Result<Vec<ActivityEvent>, ImportError> {
    let document: LogDocument = serde_json::from_str(content)
        .map_err(|e| ImportError::InvalidImportFormat(e.to_string()))?;

    Ok(match document {
        LogDocument::Wrapped { logs } => logs,
        LogDocument::Bare(logs) => logs,
    })
}

/// Read and parse a JSON log file.
pub fn load_log_file(path: &Path) -> Result<Vec<ActivityEvent>, ImportError> {
    let content = std::fs::read_to_string(path).map_err(|e| ImportError::Io(e.to_string()))?;
    parse_log_json(&content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    const EVENT_JSON: &str = r#"{
        "timestamp": "2024-03-01T09:00:00Z",
        "appName": "Code",
        "windowTitle": "main.rs",
        "mouseMovement": 120.0,
        "clicks": 2,
        "keystrokes": 14,
        "backspaceCount": 1
    }"#;

    #[test]
    fn test_parse_bare_array() {
        let logs = parse_log_json(&format!("[{EVENT_JSON}]")).unwrap();
        assert_eq!(logs.len(), 1);
        assert_eq!(logs[0].app_name, "Code");
        assert_eq!(
            logs[0].timestamp,
            Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_parse_wrapped_document() {
        let logs = parse_log_json(&format!(r#"{{ "logs": [{EVENT_JSON}] }}"#)).unwrap();
        assert_eq!(logs.len(), 1);
        assert_eq!(logs[0].keystrokes, 14);
    }

    #[test]
    fn test_malformed_json_reports_invalid_format() {
        let err = parse_log_json("{not json").unwrap_err();
        assert!(matches!(err, ImportError::InvalidImportFormat(_)));
    }

    #[test]
    fn test_missing_fields_report_invalid_format() {
        let err = parse_log_json(r#"[{"timestamp": "2024-03-01T09:00:00Z"}]"#).unwrap_err();
        assert!(matches!(err, ImportError::InvalidImportFormat(_)));
    }

    #[test]
    fn test_failed_import_leaves_prior_log_untouched() {
        let mut store = parse_log_json(&format!("[{EVENT_JSON}]")).unwrap();

        if let Ok(replacement) = parse_log_json("{not json") {
            store = replacement;
        }

        assert_eq!(store.len(), 1);
        assert_eq!(store[0].app_name, "Code");
    }

    #[test]
    fn test_empty_array_is_valid() {
        assert!(parse_log_json("[]").unwrap().is_empty());
    }
}
