/// Backend connection settings for the popup

use serde::Deserialize;
use thiserror::Error;
use url::Url;
use wasm_bindgen::JsValue;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_HEALTH_INTERVAL_MS: u32 = 10_000;
pub const DEFAULT_REQUEST_TIMEOUT_MS: u32 = 15_000;
pub const DEFAULT_MIN_HEADLINE_CHARS: usize = 5;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid base URL {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },
    #[error("unsupported URL scheme {0:?} (expected http or https)")]
    UnsupportedScheme(String),
    #[error("health interval must be greater than zero")]
    ZeroInterval,
    #[error("request timeout must be greater than zero")]
    ZeroTimeout,
    #[error("failed to read popup options: {0}")]
    Parse(String),
}

/// Settings handed to the popup by its host page.
///
/// Every field is optional on the JS side; missing fields keep the defaults
/// that point at a backend on the local loopback address.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ApiConfig {
    pub base_url: String,
    pub health_interval_ms: u32,
    pub request_timeout_ms: u32,
    pub min_headline_chars: usize,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            base_url: DEFAULT_BASE_URL.to_string(),
            health_interval_ms: DEFAULT_HEALTH_INTERVAL_MS,
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
            min_headline_chars: DEFAULT_MIN_HEADLINE_CHARS,
        }
    }
}

impl ApiConfig {
    /// Decode popup options passed from JavaScript. `undefined` and `null`
    /// both mean "use the defaults".
    pub fn from_js(options: JsValue) -> Result<Self, ConfigError> {
        if options.is_undefined() || options.is_null() {
            return Ok(ApiConfig::default());
        }

        let config: ApiConfig = serde_wasm_bindgen::from_value(options)
            .map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validated()
    }

    pub fn validated(self) -> Result<Self, ConfigError> {
        self.base()?;

        if self.health_interval_ms == 0 {
            return Err(ConfigError::ZeroInterval);
        }
        if self.request_timeout_ms == 0 {
            return Err(ConfigError::ZeroTimeout);
        }

        Ok(self)
    }

    /// Resolve an endpoint path against the base URL, keeping any path prefix
    /// the base carries (`http://host/api` + `health` -> `http://host/api/health`).
    pub fn endpoint(&self, path: &str) -> Result<Url, ConfigError> {
        let base = self.base()?;
        base.join(path.trim_start_matches('/'))
            .map_err(|e| ConfigError::InvalidBaseUrl {
                url: self.base_url.clone(),
                reason: e.to_string(),
            })
    }

    fn base(&self) -> Result<Url, ConfigError> {
        let mut url = Url::parse(self.base_url.trim()).map_err(|e| ConfigError::InvalidBaseUrl {
            url: self.base_url.clone(),
            reason: e.to_string(),
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::UnsupportedScheme(url.scheme().to_string()));
        }

        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }

        Ok(url)
    }
}
