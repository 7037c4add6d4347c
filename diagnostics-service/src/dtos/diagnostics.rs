use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A diagnose submission, assembled from the multipart form.
///
/// `symptoms` is whatever JSON the client sent; the shape is deliberately
/// not constrained to a string list, matching what browser clients already
/// send. Attachments are captured by filename only.
#[derive(Debug)]
pub struct DiagnosticRequest {
    pub symptoms: Value,
    pub medical_history: String,
    pub file_names: Vec<String>,
}

/// The diagnostic panel returned to the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosticResult {
    pub severity: String,
    pub findings: Vec<String>,
    pub recommendations: Vec<String>,
    #[serde(rename = "followUp")]
    pub follow_up: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn follow_up_serializes_camel_cased() {
        let result = DiagnosticResult {
            severity: "attention".to_string(),
            findings: vec![],
            recommendations: vec![],
            follow_up: Some("2 weeks".to_string()),
        };

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["followUp"], "2 weeks");
        assert!(json.get("follow_up").is_none());
    }
}
