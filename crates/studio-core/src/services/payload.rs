//! Interpretation of backend response bodies.

use serde_json::Value;

use crate::error::{ControlError, Result};
use crate::models::{DeploymentStatusMap, MessageKind};

pub const HEALTHY_MESSAGE: &str = "Backend reachable. Ready for deployments.";
pub const ACTION_DONE_MESSAGE: &str = "Done";

/// Build a status map from a `/status` body.
///
/// Entries without a string `studio` are skipped one by one. `deployed` counts
/// only when it is literally `true`. A missing or non-array `studios` field
/// yields an empty map.
pub fn parse_statuses(payload: &Value) -> Result<DeploymentStatusMap> {
    let Some(object) = payload.as_object() else {
        return Err(ControlError::MalformedPayload(format!(
            "expected a JSON object, got {}",
            kind_of(payload)
        )));
    };

    let Some(entries) = object.get("studios").and_then(Value::as_array) else {
        return Ok(DeploymentStatusMap::new());
    };

    Ok(entries
        .iter()
        .filter_map(|entry| {
            let studio = entry.get("studio")?.as_str()?;
            let deployed = entry.get("deployed") == Some(&Value::Bool(true));
            Some((studio.to_string(), deployed))
        })
        .collect())
}

/// Pick the message to show after `/action` responded.
///
/// Text taken from the `error` field is flagged as `MessageKind::Error`.
pub fn action_message(payload: &Value) -> (String, MessageKind) {
    [
        ("message", MessageKind::Info),
        ("output", MessageKind::Info),
        ("error", MessageKind::Error),
    ]
    .iter()
    .find_map(|(field, kind)| {
        let text = payload.get(*field).and_then(present_text)?;
        Some((text, *kind))
    })
    .unwrap_or_else(|| (ACTION_DONE_MESSAGE.to_string(), MessageKind::Info))
}

/// Pick the message to show after `/health` responded successfully.
pub fn health_message(payload: &Value) -> String {
    if payload.get("status").and_then(Value::as_str) == Some("ok") {
        HEALTHY_MESSAGE.to_string()
    } else {
        format!("Backend response: {payload}")
    }
}

/// Text for a field that counts as set: not null, `false`, `0` or `""`.
fn present_text(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        other => Some(other.to_string()),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DeploymentStatus;
    use serde_json::json;

    #[test]
    fn statuses_skip_bad_entries_and_coerce_flags() {
        let payload = json!({
            "studios": [
                {"studio": "audio", "deployed": true},
                {"studio": 42, "deployed": true},
                {"deployed": true},
                null,
                "video",
                {"studio": "3d", "deployed": "yes"},
                {"studio": "photo", "deployed": 1},
                {"studio": "office"}
            ]
        });
        let map = parse_statuses(&payload).unwrap();
        assert_eq!(map.len(), 4);
        assert_eq!(map.status_of("audio"), DeploymentStatus::Deployed);
        assert_eq!(map.status_of("3d"), DeploymentStatus::NotDeployed);
        assert_eq!(map.status_of("photo"), DeploymentStatus::NotDeployed);
        assert_eq!(map.status_of("office"), DeploymentStatus::NotDeployed);
        assert_eq!(map.status_of("video"), DeploymentStatus::Unknown);
    }

    #[test]
    fn missing_or_non_array_studios_is_empty() {
        assert!(parse_statuses(&json!({})).unwrap().is_empty());
        assert!(parse_statuses(&json!({"studios": "audio"})).unwrap().is_empty());
    }

    #[test]
    fn non_object_status_body_is_malformed() {
        let err = parse_statuses(&json!([1, 2])).unwrap_err();
        assert!(matches!(err, ControlError::MalformedPayload(_)));
        assert!(err.to_string().contains("an array"));
    }

    fn text(payload: Value) -> String {
        action_message(&payload).0
    }

    #[test]
    fn action_message_prefers_message_then_output_then_error() {
        assert_eq!(
            text(json!({"message": "Deployed audio", "output": "x", "error": "y"})),
            "Deployed audio"
        );
        assert_eq!(text(json!({"message": "", "output": "plan ok"})), "plan ok");
        assert_eq!(text(json!({"message": null, "error": "boom"})), "boom");
        assert_eq!(text(json!({"error": {"code": 2}})), r#"{"code":2}"#);
    }

    #[test]
    fn action_message_defaults_to_done() {
        assert_eq!(action_message(&json!({})), ("Done".to_string(), MessageKind::Info));
        assert_eq!(text(json!({"output": false, "error": 0})), "Done");
        assert_eq!(text(json!(["not", "an", "object"])), "Done");
    }

    #[test]
    fn backend_reported_error_is_flagged() {
        assert_eq!(
            action_message(&json!({"error": "terraform exited 1"})),
            ("terraform exited 1".to_string(), MessageKind::Error)
        );
        let (_, kind) = action_message(&json!({"output": "applied", "error": "ignored"}));
        assert_eq!(kind, MessageKind::Info);
    }

    #[test]
    fn health_ok_and_echo() {
        assert_eq!(health_message(&json!({"status": "ok"})), HEALTHY_MESSAGE);
        assert_eq!(
            health_message(&json!({"status": "degraded"})),
            r#"Backend response: {"status":"degraded"}"#
        );
    }
}
