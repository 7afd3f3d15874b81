use std::env;
use std::time::Duration;

use crate::error::{AppError, AppResult};

const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Clone, Debug)]
pub struct Config {
    pub backend_url: String,
    pub media_base_url: String,
    /// `None` disables the per-request timeout
    pub request_timeout: Option<Duration>,
}

impl Config {
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();

        let backend_url = env::var("BACKEND_URL")
            .map_err(|_| AppError::Config("BACKEND_URL is not set".to_string()))?;
        let media_base_url = env::var("MEDIA_BASE_URL").unwrap_or_else(|_| backend_url.clone());
        let timeout_secs = env::var("BACKEND_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Ok(Self::new(backend_url, media_base_url, timeout_secs))
    }

    pub fn new(backend_url: String, media_base_url: String, timeout_secs: u64) -> Self {
        Config {
            backend_url: backend_url.trim_end_matches('/').to_string(),
            media_base_url: media_base_url.trim_end_matches('/').to_string(),
            request_timeout: (timeout_secs > 0).then(|| Duration::from_secs(timeout_secs)),
        }
    }
}
