/// Wire types exchanged with the classifier backend
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `GET /health`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    #[serde(default)]
    pub status: Option<String>,
    pub model_loaded: bool,
    #[serde(default)]
    pub version: Option<String>,
}

/// Body of `POST /predict`
#[derive(Debug, Serialize)]
pub struct PredictRequest<'a> {
    pub text: &'a str,
}

/// Successful `/predict` answer. The backend also echoes the submitted text
/// and the English translation it classified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub is_clickbait: bool,
    pub score: f64,
    pub confidence: f64,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub original_text: Option<String>,
    #[serde(default)]
    pub translated_text: Option<String>,
}

/// Body of `GET /model/info`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelInfo {
    pub vocab_size: u64,
    pub max_length: u64,
    pub embedding_dim: u64,
    #[serde(default)]
    pub model_loaded: bool,
}

/// Pull a human-readable message out of an error body.
///
/// FastAPI answers `HTTPException` with `{"detail": "..."}` and request
/// validation failures with `{"detail": [{"msg": "...", ...}, ...]}`.
/// Returns `None` when neither shape is present.
pub fn detail_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;

    match value.get("detail")? {
        Value::String(detail) if !detail.trim().is_empty() => Some(detail.clone()),
        Value::Array(items) => {
            let messages: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(Value::as_str))
                .collect();

            if messages.is_empty() {
                None
            } else {
                Some(messages.join("; "))
            }
        }
        _ => None,
    }
}
