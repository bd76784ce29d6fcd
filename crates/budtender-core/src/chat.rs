//! Chat message and tool primitives shared by the prompt composer, the
//! gateway client and the tests.
//!
//! They deliberately mirror the concepts exposed by OpenAI-compatible
//! completion APIs: roles, a two-message transcript, and a declared function
//! the model may invoke. By staying minimal and provider-agnostic we can
//! convert them into wire structs via a simple `From`/`Into` and use them in
//! unit tests without mocking a full transport layer.
use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// A single chat message, independent of any wire format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    /// Build a system instruction message.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::System,
            content: content.into(),
        }
    }

    /// Build a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }
}

/// Chat roles recognised by the completion service.
///
/// The `Display` implementation renders the canonical lowercase name so the
/// value can be fed into JSON without extra mapping logic.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ChatRole {
    System,
    User,
    Assistant,
}

impl Display for ChatRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChatRole::System => write!(f, "system"),
            ChatRole::User => write!(f, "user"),
            ChatRole::Assistant => write!(f, "assistant"),
        }
    }
}

/// A function the model is allowed (or forced) to invoke, together with a
/// JSON Schema describing its parameters.
#[derive(Debug, Clone)]
pub struct FunctionSpec {
    pub name: String,
    pub description: String,
    pub parameters: serde_json::Value,
}

/// A function invocation returned by the model.
///
/// `arguments` carries the raw JSON text exactly as the service produced it.
/// Parsing is deferred to the interpreter so a malformed payload degrades
/// gracefully instead of failing the whole exchange.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolCallIntent {
    pub id: String,
    pub function: FunctionCall,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionCall {
    pub name: String,
    pub arguments: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roles_render_lowercase() {
        assert_eq!(ChatRole::System.to_string(), "system");
        assert_eq!(ChatRole::User.to_string(), "user");
        assert_eq!(ChatRole::Assistant.to_string(), "assistant");
    }

    #[test]
    fn constructors_set_roles() {
        assert_eq!(ChatMessage::system("a").role, ChatRole::System);
        assert_eq!(ChatMessage::user("b").role, ChatRole::User);
    }
}
