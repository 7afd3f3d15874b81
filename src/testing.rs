//! In-memory backend for unit tests

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::FetchError;
use crate::http_client::Backend;

#[derive(Debug, Clone)]
pub enum StubResponse {
    Json(Value),
    Status(u16),
    Transport,
    /// Invalid JSON body
    Garbage,
    /// Responds with JSON after a delay
    Delayed(Duration, Value),
}

/// Serves canned responses by path; unknown paths answer 404
#[derive(Default)]
pub struct StubBackend {
    routes: HashMap<String, StubResponse>,
    requests: Mutex<Vec<String>>,
}

impl StubBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, path: &str, response: StubResponse) -> Self {
        self.routes.insert(path.to_string(), response);
        self
    }

    pub fn json(self, path: &str, body: Value) -> Self {
        self.with(path, StubResponse::Json(body))
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Backend for StubBackend {
    async fn get_json(&self, path: &str) -> Result<Value, FetchError> {
        self.requests.lock().unwrap().push(path.to_string());

        match self.routes.get(path).cloned() {
            Some(StubResponse::Json(body)) => Ok(body),
            Some(StubResponse::Status(status)) => Err(FetchError::NotFound { status }),
            Some(StubResponse::Transport) => {
                Err(FetchError::Transport("connection reset".to_string()))
            }
            Some(StubResponse::Garbage) => Ok(serde_json::from_str("<html>")?),
            Some(StubResponse::Delayed(delay, body)) => {
                tokio::time::sleep(delay).await;
                Ok(body)
            }
            None => Err(FetchError::NotFound { status: 404 }),
        }
    }
}
