/// HTTP client for the clickbait classifier backend

use std::future::Future;
use std::pin::pin;
use std::rc::Rc;

use futures::future::{select, Either};
use gloo_net::http::{Request, Response};
use gloo_timers::future::TimeoutFuture;
use serde::de::DeserializeOwned;
use thiserror::Error;
use url::Url;

use crate::config::{ApiConfig, ConfigError};
use crate::headline::Headline;
use crate::prediction::{detail_message, HealthResponse, ModelInfo, PredictRequest, Prediction};

const STATUS_FALLBACK: &str = "API hatası oluştu";
const NETWORK_FALLBACK: &str = "Bir hata oluştu. API çalışıyor mu?";
const HEALTH_NOT_OK: &str = "API yanıt vermedi";

/// Failure of a backend call. The display text is what the error panel shows.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("{0}")]
    Network(String),
    #[error("{message}")]
    Status { status: u16, message: String },
    #[error("İstek zaman aşımına uğradı. API çalışıyor mu?")]
    Timeout { millis: u32 },
    #[error("API yanıtı okunamadı: {0}")]
    Decode(String),
    #[error("Geçersiz API adresi: {0}")]
    InvalidUrl(String),
}

impl ApiError {
    pub fn network(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.trim().is_empty() {
            ApiError::Network(NETWORK_FALLBACK.to_string())
        } else {
            ApiError::Network(message)
        }
    }

    /// Non-2xx answer from `/predict`: prefer the backend's `detail`.
    pub fn from_status(status: u16, body: &str) -> Self {
        ApiError::Status {
            status,
            message: detail_message(body).unwrap_or_else(|| STATUS_FALLBACK.to_string()),
        }
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
            // Show only the message, without the "TypeError: " name prefix
            gloo_net::Error::JsError(e) => ApiError::network(e.message),
            other => ApiError::network(other.to_string()),
        }
    }
}

impl From<ConfigError> for ApiError {
    fn from(err: ConfigError) -> Self {
        ApiError::InvalidUrl(err.to_string())
    }
}

/// Race `call` against `timer`. Yields `None` when the timer wins; the
/// losing future is dropped, which aborts an in-flight fetch.
pub async fn with_timeout<F, T>(call: F, timer: T) -> Option<F::Output>
where
    F: Future,
    T: Future<Output = ()>,
{
    let call = pin!(call);
    let timer = pin!(timer);

    match select(call, timer).await {
        Either::Left((output, _)) => Some(output),
        Either::Right(((), _)) => None,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClickbaitClient {
    config: Rc<ApiConfig>,
}

impl ClickbaitClient {
    pub fn new(config: ApiConfig) -> Self {
        ClickbaitClient {
            config: Rc::new(config),
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// `GET /health`. Any non-2xx status counts as a failure, a 2xx with
    /// `model_loaded: false` does not.
    pub async fn health(&self) -> Result<HealthResponse, ApiError> {
        let url = self.config.endpoint("health")?;
        self.timed(fetch_health(url)).await
    }

    /// `POST /predict` with `{"text": headline}`
    pub async fn predict(&self, headline: &Headline) -> Result<Prediction, ApiError> {
        let url = self.config.endpoint("predict")?;
        self.timed(post_predict(url, headline.as_str())).await
    }

    /// `GET /model/info`
    pub async fn model_info(&self) -> Result<ModelInfo, ApiError> {
        let url = self.config.endpoint("model/info")?;
        self.timed(fetch_model_info(url)).await
    }

    async fn timed<T>(&self, call: impl Future<Output = Result<T, ApiError>>) -> Result<T, ApiError> {
        let millis = self.config.request_timeout_ms;

        with_timeout(call, TimeoutFuture::new(millis))
            .await
            .unwrap_or(Err(ApiError::Timeout { millis }))
    }
}

async fn fetch_health(url: Url) -> Result<HealthResponse, ApiError> {
    let response = get_json(&url).await?;

    if !response.ok() {
        return Err(ApiError::Status {
            status: response.status(),
            message: HEALTH_NOT_OK.to_string(),
        });
    }

    decode_json(response).await
}

async fn post_predict(url: Url, text: &str) -> Result<Prediction, ApiError> {
    let response = Request::post(url.as_str())
        .header("Accept", "application/json")
        .json(&PredictRequest { text })?
        .send()
        .await?;

    if !response.ok() {
        return Err(error_from_response(response).await);
    }

    decode_json(response).await
}

async fn fetch_model_info(url: Url) -> Result<ModelInfo, ApiError> {
    let response = get_json(&url).await?;

    if !response.ok() {
        return Err(error_from_response(response).await);
    }

    decode_json(response).await
}

async fn get_json(url: &Url) -> Result<Response, ApiError> {
    let response = Request::get(url.as_str())
        .header("Accept", "application/json")
        .send()
        .await?;
    Ok(response)
}

async fn error_from_response(response: Response) -> ApiError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    ApiError::from_status(status, &body)
}

async fn decode_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let body = response.text().await?;
    serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
}
