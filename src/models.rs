use serde::{Deserialize, Serialize};

pub const STATUS_SUCCESSFUL: &str = "SUCCESSFUL";
pub const STATUS_FAILED: &str = "FAILED";

/// One entry of the checks overview returned by `/api/v1/checks`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckSummary {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl CheckSummary {
    pub fn is_successful(&self) -> bool {
        self.status.as_deref() == Some(STATUS_SUCCESSFUL)
    }
}

/// A single recorded execution of a check. Failures are runs that did not pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckRun {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub combined_out: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rc: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl CheckRun {
    pub fn effective_status(&self) -> &str {
        if let Some(status) = self.status.as_deref() {
            return status;
        }
        match self.rc {
            Some(0) => STATUS_SUCCESSFUL,
            _ => STATUS_FAILED,
        }
    }

    /// The error payload as display text, if the run carried a non-null one.
    pub fn error_text(&self) -> Option<String> {
        match self.error.as_ref()? {
            serde_json::Value::Null => None,
            serde_json::Value::String(value) if value.is_empty() => None,
            serde_json::Value::String(value) => Some(value.clone()),
            serde_json::Value::Object(map) if map.is_empty() => None,
            other => Some(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_keeps_unknown_fields() {
        let raw = r#"{"name":"db","status":"SUCCESSFUL","latency_ms":12}"#;
        let summary: CheckSummary = serde_json::from_str(raw).expect("parse");
        assert!(summary.is_successful());
        assert_eq!(summary.extra.get("latency_ms"), Some(&serde_json::json!(12)));

        let value = serde_json::to_value(&summary).expect("serialize");
        assert_eq!(value, serde_json::from_str::<serde_json::Value>(raw).expect("raw"));
    }

    #[test]
    fn run_status_falls_back_to_return_code() {
        let passed: CheckRun = serde_json::from_str(r#"{"rc":0}"#).expect("parse");
        let failed: CheckRun = serde_json::from_str(r#"{"rc":2,"error":{}}"#).expect("parse");
        let unknown: CheckRun = serde_json::from_str("{}").expect("parse");

        assert_eq!(passed.effective_status(), STATUS_SUCCESSFUL);
        assert_eq!(failed.effective_status(), STATUS_FAILED);
        assert_eq!(unknown.effective_status(), STATUS_FAILED);
        assert_eq!(failed.error_text(), None);
    }

    #[test]
    fn explicit_status_wins() {
        let run: CheckRun =
            serde_json::from_str(r#"{"rc":1,"status":"SUCCESSFUL","error":"timeout"}"#)
                .expect("parse");
        assert_eq!(run.effective_status(), STATUS_SUCCESSFUL);
        assert_eq!(run.error_text().as_deref(), Some("timeout"));
    }
}
