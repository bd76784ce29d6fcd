//! Turns a raw completion reply into the response envelope.
//!
//! The text content always wins: a malformed or missing tool call never
//! fails the exchange, it only degrades the response to text-only. Schema
//! compliance of well-formed arguments is trusted from the model; there is
//! no defensive re-validation beyond deserialization.

use tracing::warn;

use crate::{
    chat::FunctionSpec,
    provider::CompletionReply,
    recommend::{RecommendationResponse, SuggestedProducts},
    schema_util::derive_parameters_schema,
};

/// Name of the single function declared towards the completion service.
pub const SUGGEST_PRODUCTS_FN: &str = "suggest_products";

/// Declaration of the `suggest_products` function, parameters derived from
/// [`SuggestedProducts`].
pub fn suggest_products_spec() -> FunctionSpec {
    FunctionSpec {
        name: SUGGEST_PRODUCTS_FN.to_string(),
        description: "Suggest 2-3 concrete cannabis products matching the recommendation \
                      just given, with strain, potency, effects, price and availability."
            .to_string(),
        parameters: derive_parameters_schema::<SuggestedProducts>(),
    }
}

/// Extract the recommendation text and, when `tool_requested`, the product
/// list from a completion reply.
pub fn interpret(reply: CompletionReply, tool_requested: bool) -> RecommendationResponse {
    let recommendation = reply.content.unwrap_or_default();
    if recommendation.is_empty() {
        warn!("completion reply carried no textual content");
    }

    let products = if tool_requested {
        extract_products(&reply.tool_calls)
    } else {
        None
    };

    RecommendationResponse {
        recommendation,
        products,
    }
}

fn extract_products(
    tool_calls: &[crate::chat::ToolCallIntent],
) -> Option<Vec<crate::recommend::ProductSuggestion>> {
    let call = tool_calls
        .iter()
        .find(|c| c.function.name == SUGGEST_PRODUCTS_FN)?;

    match serde_json::from_str::<SuggestedProducts>(&call.function.arguments) {
        Ok(parsed) if parsed.products.is_empty() => None,
        Ok(parsed) => Some(parsed.products),
        Err(err) => {
            warn!(error = %err, "discarding malformed suggest_products arguments");
            None
        }
    }
}
