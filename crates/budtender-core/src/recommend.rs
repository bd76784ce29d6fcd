//! Domain data model of the recommendation exchange.
//!
//! The inbound JSON keeps the browser-facing camelCase field names. It is
//! parsed at the endpoint boundary and immediately converted into the tagged
//! [`RequestKind`], so the rest of the pipeline dispatches on a variant that
//! carries only the fields it needs instead of inspecting boolean flags.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{RecommendError, Result};

/// Raw request body as sent by the browser.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationRequest {
    #[serde(default)]
    pub user_input: Option<String>,
    #[serde(default)]
    pub structured_input: Option<StructuredPreferences>,
    #[serde(default)]
    pub conversational: Option<bool>,
}

impl RecommendationRequest {
    /// Validate and collapse the flag/field combination into a
    /// [`RequestKind`].
    ///
    /// `userInput` must be non-empty after trimming; absence is a client
    /// error, never silently defaulted. Structured preferences are ignored
    /// in conversational mode.
    pub fn into_kind(self) -> Result<RequestKind> {
        let user_input = self
            .user_input
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .ok_or(RecommendError::InvalidInput)?;

        if self.conversational.unwrap_or(false) {
            Ok(RequestKind::Conversational { user_input })
        } else {
            Ok(RequestKind::Structured {
                user_input,
                preferences: self.structured_input.unwrap_or_default(),
            })
        }
    }
}

/// Validated request, one variant per prompt mode.
#[derive(Debug, Clone)]
pub enum RequestKind {
    /// Free-form chat. The model answers in prose and is forced to invoke
    /// the product-suggestion function afterwards.
    Conversational { user_input: String },
    /// Question-flow answers. The five preferences are embedded in the
    /// system prompt and the model answers in a fixed text template.
    Structured {
        user_input: String,
        preferences: StructuredPreferences,
    },
}

impl RequestKind {
    pub fn user_input(&self) -> &str {
        match self {
            RequestKind::Conversational { user_input } => user_input,
            RequestKind::Structured { user_input, .. } => user_input,
        }
    }
}

/// Answers collected by the structured question flow. All free-form; no
/// enum-membership validation is performed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StructuredPreferences {
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub experience: Option<String>,
    #[serde(default)]
    pub vibe: Option<String>,
    #[serde(default)]
    pub consumption: Option<String>,
    #[serde(default)]
    pub onset: Option<String>,
}

/// One product the model suggests via the tool-call path.
///
/// Lives only for the duration of a single response; nothing is persisted.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ProductSuggestion {
    /// Product display name.
    pub name: String,
    /// Product category, e.g. "flower", "edible", "vape".
    #[serde(rename = "type")]
    pub product_type: String,
    /// Strain name, when applicable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strain: Option<String>,
    /// THC content, e.g. "18%".
    pub thc: String,
    /// CBD content, e.g. "1%".
    pub cbd: String,
    /// Short description of the expected effects.
    pub effects: String,
    /// Display price, e.g. "$45".
    pub price: String,
    /// Stock note, e.g. "In stock nearby".
    pub availability: String,
}

/// Argument payload of the `suggest_products` function.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SuggestedProducts {
    /// Two to three concrete products matching the recommendation.
    pub products: Vec<ProductSuggestion>,
}

/// Success envelope returned to the browser.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationResponse {
    pub recommendation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub products: Option<Vec<ProductSuggestion>>,
}
