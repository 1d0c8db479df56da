use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("backend answered with status {0}")]
    Status(StatusCode),

    #[error("malformed response body: {0}")]
    Decode(String),

    #[error("request cancelled")]
    Cancelled,
}

/// The single remote call the widget makes.
#[async_trait]
pub trait Backend: Send + Sync {
    async fn predict(&self, message: &str) -> Result<String, BackendError>;
}

#[derive(Debug, Serialize)]
struct PredictRequest<'a> {
    message: &'a str,
}

#[derive(Debug, Deserialize)]
struct PredictResponse {
    response: String,
}

/// `POST {base_url}/predict` with `{"message": ...}`, expecting `{"response": ...}`.
pub struct HttpBackend {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpBackend {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, BackendError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        let endpoint = format!("{}/predict", base_url.trim_end_matches('/'));
        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl Backend for HttpBackend {
    async fn predict(&self, message: &str) -> Result<String, BackendError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&PredictRequest { message })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(BackendError::Status(status));
        }

        let body = response.bytes().await?;
        let parsed: PredictResponse = serde_json::from_slice(&body)
            .map_err(|err| BackendError::Decode(err.to_string()))?;
        Ok(parsed.response)
    }
}


#[cfg(test)]
mod tests {
    use std::net::SocketAddr;

    use axum::http::StatusCode as HttpStatus;
    use axum::routing::post;
    use axum::{Json, Router};
    use serde_json::{Value, json};

    use super::*;

    async fn echo(Json(body): Json<Value>) -> Json<Value> {
        let message = body["message"].as_str().unwrap_or_default();
        Json(json!({ "response": format!("you said {message}"), "tag": "echo" }))
    }

    async fn broken() -> (HttpStatus, &'static str) {
        (HttpStatus::INTERNAL_SERVER_ERROR, "boom")
    }

    async fn wrong_shape() -> Json<Value> {
        Json(json!({ "answer": "hi" }))
    }

    async fn spawn_backend() -> SocketAddr {
        let app = Router::new()
            .route("/ok/predict", post(echo))
            .route("/down/predict", post(broken))
            .route("/odd/predict", post(wrong_shape));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        addr
    }

    fn backend(base_url: &str) -> HttpBackend {
        HttpBackend::new(base_url, Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn endpoint_joins_base_url() {
        assert_eq!(
            backend("http://localhost:5000/").endpoint(),
            "http://localhost:5000/predict"
        );
    }

    #[tokio::test]
    async fn decodes_response_field() {
        let addr = spawn_backend().await;
        let reply = backend(&format!("http://{addr}/ok"))
            .predict("hello")
            .await
            .unwrap();
        assert_eq!(reply, "you said hello");
    }

    #[tokio::test]
    async fn non_success_status_is_a_failure() {
        let addr = spawn_backend().await;
        let err = backend(&format!("http://{addr}/down"))
            .predict("hello")
            .await
            .unwrap_err();
        assert!(matches!(err, BackendError::Status(status) if status.as_u16() == 500));
    }

    #[tokio::test]
    async fn wrong_body_shape_is_a_failure() {
        let addr = spawn_backend().await;
        let err = backend(&format!("http://{addr}/odd"))
            .predict("hello")
            .await
            .unwrap_err();
        assert!(matches!(err, BackendError::Decode(_)));
    }

    #[tokio::test]
    async fn unreachable_server_is_a_failure() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = backend(&format!("http://{addr}"))
            .predict("hello")
            .await
            .unwrap_err();
        assert!(matches!(err, BackendError::Network(_)));
    }
}
