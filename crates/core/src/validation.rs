//! Strict validation of the sensor event request body.
//!
//! The write endpoints accept exactly `{ "lotId": "...", "sensorId": "..." }`.
//! The event kind comes from the route, never from the body. Both identifiers
//! end up as storage keys, so the accepted charset is deliberately narrow.

use serde_json::Value;

use crate::error::CoreError;

/// A validated, normalized event request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRequest {
    pub lot_id: String,
    pub sensor_id: String,
}

/// Validate a raw JSON body against the strict event-request schema.
///
/// Rules:
/// - the body must be a flat JSON object;
/// - only the keys `lotId` and `sensorId` are permitted;
/// - both must be non-empty strings after trimming whitespace;
/// - both must match `[A-Za-z0-9._-]+` (safe for use as a storage key).
pub fn validate_event_request(body: &Value) -> Result<EventRequest, CoreError> {
    let obj = body
        .as_object()
        .ok_or_else(|| CoreError::Validation("Request body must be a JSON object".into()))?;

    for key in obj.keys() {
        if key != "lotId" && key != "sensorId" {
            return Err(CoreError::Validation(format!("Unexpected field: {key}")));
        }
    }

    let lot_id = require_id_field(obj, "lotId")?;
    let sensor_id = require_id_field(obj, "sensorId")?;

    Ok(EventRequest { lot_id, sensor_id })
}

/// Extract one required identifier field, trimmed and charset-checked.
fn require_id_field(
    obj: &serde_json::Map<String, Value>,
    key: &str,
) -> Result<String, CoreError> {
    let value = obj
        .get(key)
        .ok_or_else(|| CoreError::Validation(format!("Missing required field: {key}")))?;

    let s = value
        .as_str()
        .ok_or_else(|| CoreError::Validation(format!("Field {key} must be a string")))?
        .trim();

    if s.is_empty() {
        return Err(CoreError::Validation(format!(
            "Field {key} must be a non-empty string"
        )));
    }

    if !is_safe_key(s) {
        return Err(CoreError::Validation(format!(
            "Field {key} may only contain letters, digits, '.', '_' and '-'"
        )));
    }

    Ok(s.to_string())
}

/// Whether a string is safe to embed in a storage key: `[A-Za-z0-9._-]+`.
fn is_safe_key(s: &str) -> bool {
    !s.is_empty()
        && s.chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '_' || c == '-')
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use serde_json::json;

    use super::*;
    use crate::error::CoreError;

    #[test]
    fn accepts_well_formed_body() {
        let req = validate_event_request(&json!({"lotId": "lot-1", "sensorId": "gate.A_2"}))
            .expect("should validate");
        assert_eq!(req.lot_id, "lot-1");
        assert_eq!(req.sensor_id, "gate.A_2");
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let req = validate_event_request(&json!({"lotId": "  lot-1  ", "sensorId": "\ts1\n"}))
            .expect("should validate");
        assert_eq!(req.lot_id, "lot-1");
        assert_eq!(req.sensor_id, "s1");
    }

    #[test]
    fn rejects_non_object_bodies() {
        for body in [json!("lot-1"), json!(42), json!(["lot-1"]), json!(null)] {
            assert_matches!(
                validate_event_request(&body),
                Err(CoreError::Validation(_)),
                "body {body} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_unknown_keys() {
        let err = validate_event_request(
            &json!({"lotId": "lot-1", "sensorId": "s1", "eventType": "ENTRY"}),
        )
        .unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) if msg.contains("eventType"));
    }

    #[test]
    fn rejects_missing_sensor_id() {
        let err = validate_event_request(&json!({"lotId": "lot-1"})).unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) if msg.contains("sensorId"));
    }

    #[test]
    fn rejects_missing_lot_id() {
        let err = validate_event_request(&json!({"sensorId": "s1"})).unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) if msg.contains("lotId"));
    }

    #[test]
    fn rejects_non_string_fields() {
        assert_matches!(
            validate_event_request(&json!({"lotId": 7, "sensorId": "s1"})),
            Err(CoreError::Validation(_))
        );
        assert_matches!(
            validate_event_request(&json!({"lotId": "lot-1", "sensorId": ["s1"]})),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn rejects_empty_after_trim() {
        assert_matches!(
            validate_event_request(&json!({"lotId": "   ", "sensorId": "s1"})),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn rejects_unsafe_characters() {
        for bad in ["lot/1", "lot 1", "lot#1", "löt", "a\u{0}b"] {
            assert_matches!(
                validate_event_request(&json!({"lotId": bad, "sensorId": "s1"})),
                Err(CoreError::Validation(_)),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn safe_key_charset() {
        assert!(is_safe_key("Lot_1.a-b"));
        assert!(!is_safe_key(""));
        assert!(!is_safe_key("a b"));
    }
}
