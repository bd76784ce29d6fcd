//! Unified error type exposed by **`budtender-core`**.
//!
//! The gateway crate converts its transport errors into one of these
//! variants before bubbling them up to the endpoint. The `Display`
//! renderings of the client-facing variants are the exact strings the HTTP
//! layer returns inside the `{ "error": ... }` envelope, so they must not
//! change casually.

use thiserror::Error;

/// Convenient alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, RecommendError>;

#[derive(Debug, Error)]
pub enum RecommendError {
    /// The inbound payload had a missing or whitespace-only `userInput`.
    /// Reported immediately; no upstream call is made.
    #[error("User input is required")]
    InvalidInput,

    /// The completion-service credential is absent from the environment.
    /// Surfaced per request, matching the behaviour of reading the secret at
    /// request time rather than at startup.
    #[error("AI_GATEWAY_API_KEY is not configured")]
    MissingCredential,

    /// The completion service exhausted our rate limit (upstream 429).
    /// Relayed distinctly so clients can back off.
    #[error("Rate limits exceeded, please try again later.")]
    RateLimited,

    /// The completion service requires funding (upstream 402). Not
    /// retryable without operator action.
    #[error("Payment required, please add funds to your AI gateway workspace.")]
    PaymentRequired,

    /// Any other upstream failure. The diagnostic body is logged at the
    /// gateway; only this generic message crosses the system boundary.
    #[error("AI gateway error")]
    Upstream,

    /// Failure while serialising or deserialising JSON payloads sent to /
    /// received from the completion service.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic forwarding of any backend-specific error that doesn't fit
    /// another category.
    #[error("backend returned an error: {0}")]
    Backend(Box<dyn std::error::Error + Send + Sync + 'static>),
}

impl RecommendError {
    /// HTTP status the endpoint reports for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            RecommendError::InvalidInput => 400,
            RecommendError::RateLimited => 429,
            RecommendError::PaymentRequired => 402,
            RecommendError::MissingCredential
            | RecommendError::Upstream
            | RecommendError::Serialization(_)
            | RecommendError::Backend(_) => 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_facing_messages_are_fixed() {
        assert_eq!(
            RecommendError::InvalidInput.to_string(),
            "User input is required"
        );
        assert_eq!(
            RecommendError::RateLimited.to_string(),
            "Rate limits exceeded, please try again later."
        );
        assert_eq!(
            RecommendError::PaymentRequired.to_string(),
            "Payment required, please add funds to your AI gateway workspace."
        );
        assert_eq!(RecommendError::Upstream.to_string(), "AI gateway error");
    }

    #[test]
    fn status_codes_follow_the_taxonomy() {
        assert_eq!(RecommendError::InvalidInput.status_code(), 400);
        assert_eq!(RecommendError::RateLimited.status_code(), 429);
        assert_eq!(RecommendError::PaymentRequired.status_code(), 402);
        assert_eq!(RecommendError::MissingCredential.status_code(), 500);
        assert_eq!(RecommendError::Upstream.status_code(), 500);
    }
}
