//! Progress API HTTP client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode, header};
use tracing::{debug, warn};

use super::dto::{CreateProgressBody, ErrorResponse, ProgressResponse};
use crate::domain::entities::{AuthToken, ProcessRecord};
use crate::domain::errors::ApiError;
use crate::domain::ports::{NewProcess, ProgressPort};

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));
const PROGRESS_PATH: &str = "/progress";
const DEFAULT_RETRY_AFTER_MS: u64 = 5000;

/// HTTP adapter for the `/progress` collection.
pub struct ProgressClient {
    client: Client,
    base_url: String,
    token: Option<AuthToken>,
}

impl ProgressClient {
    /// Creates client for `base_url` with a request timeout.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ApiError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::unexpected(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: None,
        })
    }

    /// Attaches a bearer token to every request.
    #[must_use]
    pub fn with_token(mut self, token: Option<AuthToken>) -> Self {
        self.token = token;
        self
    }

    fn endpoint(&self) -> String {
        format!("{}{PROGRESS_PATH}", self.base_url)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.header(header::AUTHORIZATION, token.bearer_header()),
            None => request,
        }
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let response = self.authorize(request).send().await.map_err(|e| {
            warn!(error = %e, "Failed to reach progress API");
            if e.is_timeout() {
                ApiError::network("request timed out")
            } else if e.is_connect() {
                ApiError::network("failed to connect to the progress API")
            } else {
                ApiError::network(e.to_string())
            }
        })?;

        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            Err(Self::handle_error_response(status, response).await)
        }
    }

    async fn handle_error_response(status: StatusCode, response: Response) -> ApiError {
        let retry_after_ms = response
            .headers()
            .get(header::RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse::<u64>().ok())
            .map_or(DEFAULT_RETRY_AFTER_MS, |secs| secs.saturating_mul(1000));

        let message = response
            .json::<ErrorResponse>()
            .await
            .ok()
            .and_then(ErrorResponse::into_message)
            .unwrap_or_else(|| format!("HTTP {status}"));

        debug!(status = %status, message = %message, "Progress API returned an error");

        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ApiError::unauthorized(message),
            StatusCode::TOO_MANY_REQUESTS => ApiError::RateLimited { retry_after_ms },
            _ => ApiError::rejected(status.as_u16(), message),
        }
    }
}

#[async_trait]
impl ProgressPort for ProgressClient {
    async fn list_progress(&self) -> Result<Vec<ProcessRecord>, ApiError> {
        debug!(url = %self.endpoint(), "Fetching progress list");

        let response = self.send(self.client.get(self.endpoint())).await?;

        let body: Vec<ProgressResponse> = response.json().await.map_err(|e| {
            warn!(error = %e, "Failed to parse progress list");
            ApiError::decode(e.to_string())
        })?;

        Ok(body.into_iter().map(ProcessRecord::from).collect())
    }

    async fn create_progress(&self, process: NewProcess) -> Result<(), ApiError> {
        debug!(url = %self.endpoint(), "Posting new progress");

        let body = CreateProgressBody::from(process);
        self.send(self.client.post(self.endpoint()).json(&body))
            .await?;

        Ok(())
    }
}
