use budtender_core::error::RecommendError;
use reqwest::StatusCode;

/// Failure modes of one outbound completion call.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("couldn't deserialise response: {0}")]
    Serde(#[from] serde_json::Error),

    /// Upstream 429. Kept distinct so the endpoint can relay it verbatim.
    #[error("completion service rate limit exhausted")]
    RateLimited,

    /// Upstream 402. Kept distinct; not retryable without funding.
    #[error("completion service requires payment")]
    PaymentRequired,

    /// Any other non-success status. The body is logged at the call site
    /// and must never reach the client.
    #[error("completion service returned status {status}")]
    Api { status: StatusCode, body: String },

    #[error("completion service format error: {0}")]
    Format(String),
}

impl From<GatewayError> for RecommendError {
    fn from(value: GatewayError) -> Self {
        match value {
            GatewayError::RateLimited => RecommendError::RateLimited,
            GatewayError::PaymentRequired => RecommendError::PaymentRequired,
            GatewayError::Api { .. } | GatewayError::Format(_) => RecommendError::Upstream,
            GatewayError::Serde(err) => RecommendError::Serialization(err),
            GatewayError::Http(err) => RecommendError::Backend(Box::new(err)),
        }
    }
}
