//! Input-shape corrections applied before validation.
//!
//! Upstream exporters deviate from the canonical resource shapes in a few
//! known ways; each rule here rewrites exactly one deviation. Records broken
//! beyond these rules pass through unchanged and fail validation instead.

use serde_json::{json, Map, Value};

use crate::domain::model::ResourceKind;

pub fn normalize(kind: ResourceKind, raw: Map<String, Value>) -> Map<String, Value> {
    match kind {
        ResourceKind::Patient => raw,
        ResourceKind::MedicationRequest => normalize_medication_request(raw),
        ResourceKind::QuestionnaireResponse => normalize_questionnaire_response(raw),
    }
}

/// HAPI flattens the medication field to `medicationCodeableConcept`; rewrap
/// it into the nested shape and fill the required workflow fields when the
/// exporter dropped them.
fn normalize_medication_request(mut raw: Map<String, Value>) -> Map<String, Value> {
    if let Some(concept) = raw.remove("medicationCodeableConcept") {
        raw.insert("medication".to_string(), json!({ "codeableConcept": concept }));
    }

    raw.entry("status").or_insert_with(|| json!("active"));
    raw.entry("intent").or_insert_with(|| json!("order"));
    raw
}

/// Identifiers are required to be a list; some exporters emit a bare object.
fn normalize_questionnaire_response(mut raw: Map<String, Value>) -> Map<String, Value> {
    if raw.get("identifier").is_some_and(|v| !v.is_array()) {
        if let Some(identifier) = raw.remove("identifier") {
            raw.insert("identifier".to_string(), Value::Array(vec![identifier]));
        }
    }
    raw
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn as_map(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected an object"),
        }
    }

    #[test]
    fn test_medication_request_rewraps_flattened_concept() {
        let raw = as_map(json!({
            "medicationCodeableConcept": {
                "coding": [{"system": "S", "code": "C", "display": "D"}]
            }
        }));

        let normalized = normalize(ResourceKind::MedicationRequest, raw);

        assert_eq!(
            normalized["medication"]["codeableConcept"]["coding"][0],
            json!({"system": "S", "code": "C", "display": "D"})
        );
        assert!(!normalized.contains_key("medicationCodeableConcept"));
        assert_eq!(normalized["status"], json!("active"));
        assert_eq!(normalized["intent"], json!("order"));
    }

    #[test]
    fn test_medication_request_keeps_existing_fields() {
        let raw = as_map(json!({
            "status": "stopped",
            "intent": "plan",
            "medication": {"codeableConcept": {"coding": []}}
        }));

        let normalized = normalize(ResourceKind::MedicationRequest, raw);

        assert_eq!(normalized["status"], json!("stopped"));
        assert_eq!(normalized["intent"], json!("plan"));
        assert!(normalized["medication"].is_object());
    }

    #[test]
    fn test_questionnaire_response_wraps_bare_identifier() {
        let raw = as_map(json!({"identifier": {"value": "x"}}));

        let normalized = normalize(ResourceKind::QuestionnaireResponse, raw);

        assert_eq!(normalized["identifier"], json!([{"value": "x"}]));
    }

    #[test]
    fn test_questionnaire_response_keeps_identifier_list() {
        let raw = as_map(json!({"identifier": [{"value": "x"}, {"value": "y"}]}));

        let normalized = normalize(ResourceKind::QuestionnaireResponse, raw);

        assert_eq!(normalized["identifier"], json!([{"value": "x"}, {"value": "y"}]));
    }

    #[test]
    fn test_patient_passes_through_unchanged() {
        let raw = as_map(json!({"id": "p1", "name": [{"given": ["Jo"]}]}));

        let normalized = normalize(ResourceKind::Patient, raw.clone());

        assert_eq!(normalized, raw);
    }
}
