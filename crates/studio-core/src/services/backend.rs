use async_trait::async_trait;
use serde_json::Value;

use crate::error::{ControlError, Result};
use crate::models::{ActionRequest, ControlConfig};

/// The provisioning backend as seen by the orchestrator.
///
/// Implementations return the decoded JSON body of each endpoint. Interpreting
/// the body is left to the caller so every backend shares one set of rules.
#[async_trait]
pub trait DeploymentBackend: Send + Sync {
    /// `GET /health`. Non-2xx responses are errors.
    async fn health(&self) -> Result<Value>;

    /// `GET /status`. Non-2xx responses are errors.
    async fn status(&self) -> Result<Value>;

    /// `POST /action`. The body is returned whatever the HTTP status.
    async fn action(&self, request: &ActionRequest) -> Result<Value>;
}

/// `DeploymentBackend` over HTTP with JSON bodies.
pub struct HttpBackend {
    client: reqwest::Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn from_config(config: &ControlConfig) -> Self {
        Self::new(config.base_url())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url)
    }

    async fn get_json(&self, path: &str) -> Result<Value> {
        let url = self.endpoint(path);
        tracing::debug!(%url, "backend_get");
        let response = self.client.get(&url).send().await.map_err(transport)?;
        let status = response.status();
        if !status.is_success() {
            return Err(ControlError::HttpStatus(status.as_u16()));
        }
        read_json(response).await
    }
}

#[async_trait]
impl DeploymentBackend for HttpBackend {
    async fn health(&self) -> Result<Value> {
        self.get_json("health").await
    }

    async fn status(&self) -> Result<Value> {
        self.get_json("status").await
    }

    async fn action(&self, request: &ActionRequest) -> Result<Value> {
        let url = self.endpoint("action");
        tracing::debug!(%url, studio = %request.studio, action = %request.action, "backend_post");
        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(transport)?;
        read_json(response).await
    }
}

fn transport(e: reqwest::Error) -> ControlError {
    ControlError::Transport(e.to_string())
}

async fn read_json(response: reqwest::Response) -> Result<Value> {
    let body = response.text().await.map_err(transport)?;
    serde_json::from_str(&body).map_err(|e| ControlError::MalformedPayload(e.to_string()))
}
