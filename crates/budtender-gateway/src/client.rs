use reqwest::{
    header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE},
    Client as HttpClient, StatusCode,
};
use std::time::Duration;
use tracing::error;

use crate::{
    api::{ChatCompletionRequest, ChatCompletionResponse},
    error::GatewayError,
};

const DEFAULT_BASE_URL: &str = "https://ai.gateway.lovable.dev/v1";
const DEFAULT_MODEL: &str = "google/gemini-2.5-flash";

/// Minimal HTTP client for the completion service's *chat/completions*
/// endpoint.
///
/// * Non-streaming only (one request ▶ one response).
/// * No retry: the two distinguished failure modes (429, 402) surface as
///   dedicated [`GatewayError`] variants for the endpoint to relay.
/// * Shares a single `reqwest::Client`, so cloning `GatewayClient` is cheap.
#[derive(Debug, Clone)]
pub struct GatewayClient {
    api_key: String,
    http: HttpClient,
    base: String,
    model: String,
}

impl GatewayClient {
    /// Convenience constructor building a default `reqwest` client:
    /// 30 s timeout, Rustls TLS.
    pub fn new(api_key: impl Into<String>) -> Self {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("building reqwest client");

        Self::with_http(api_key, http, None)
    }

    /// Build with a custom `reqwest::Client` in case the caller needs proxy
    /// settings, custom TLS, etc.
    pub fn with_http(
        api_key: impl Into<String>,
        http: HttpClient,
        base_url: Option<String>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            http,
            base: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_owned()),
            model: DEFAULT_MODEL.to_owned(),
        }
    }

    /// Override the model identifier sent with every request.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Point the client at a different gateway deployment.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base = base_url.into();
        self
    }

    /// Model identifier used for outbound requests.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Perform one **non-streaming** chat completion.
    pub async fn chat_completion(
        &self,
        request: ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, GatewayError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", self.api_key))
                .map_err(|e| GatewayError::Format(format!("invalid api key header: {e}")))?,
        );

        let url = format!("{}/chat/completions", self.base);
        let resp = self
            .http
            .post(url)
            .headers(headers)
            .json(&request)
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(classify_failure(status, body));
        }

        let bytes = resp.bytes().await?;
        let parsed: ChatCompletionResponse = serde_json::from_slice(&bytes)?;
        Ok(parsed)
    }
}

/// Translate a non-success upstream status into the error taxonomy. The
/// response body is logged here for diagnosis and never returned verbatim.
fn classify_failure(status: StatusCode, body: String) -> GatewayError {
    if status == StatusCode::TOO_MANY_REQUESTS {
        GatewayError::RateLimited
    } else if status == StatusCode::PAYMENT_REQUIRED {
        GatewayError::PaymentRequired
    } else {
        error!(%status, %body, "completion service error");
        GatewayError::Api { status, body }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distinguished_statuses_are_classified() {
        assert!(matches!(
            classify_failure(StatusCode::TOO_MANY_REQUESTS, String::new()),
            GatewayError::RateLimited
        ));
        assert!(matches!(
            classify_failure(StatusCode::PAYMENT_REQUIRED, String::new()),
            GatewayError::PaymentRequired
        ));
        match classify_failure(StatusCode::BAD_GATEWAY, "detail".into()) {
            GatewayError::Api { status, body } => {
                assert_eq!(status, StatusCode::BAD_GATEWAY);
                assert_eq!(body, "detail");
            }
            other => panic!("expected Api variant, got {other:?}"),
        }
    }

    #[test]
    fn defaults_point_at_the_hosted_gateway() {
        let client = GatewayClient::new("key");
        assert_eq!(client.model(), DEFAULT_MODEL);
        assert!(client.base.starts_with("https://"));
    }
}
