//! The seam between the endpoint and a concrete completion backend.
//!
//! A **backend** turns a chat transcript into a network call to the hosted
//! completion service and hands back the first choice in a
//! provider-agnostic shape. The trait is intentionally minimal: one
//! async-ish method performing a *single* non-streaming round-trip. Keeping
//! it object-free (`Pin<Box<dyn Future>>` instead of `async fn`) lets the
//! server stay generic over the backend without an `async-trait` dependency,
//! and lets tests substitute a scripted mock.

use std::{future::Future, pin::Pin};

use crate::{
    chat::{ChatMessage, FunctionSpec, ToolCallIntent},
    error::Result,
};

/// Everything one completion round-trip needs.
#[derive(Debug, Clone)]
pub struct CompletionParams {
    pub messages: Vec<ChatMessage>,
    /// When present, the backend must declare this function in the request
    /// and pin `tool_choice` to it, forcing the model to invoke it.
    pub tool: Option<FunctionSpec>,
}

impl CompletionParams {
    pub fn new(messages: Vec<ChatMessage>) -> Self {
        Self {
            messages,
            tool: None,
        }
    }

    pub fn with_tool(mut self, tool: FunctionSpec) -> Self {
        self.tool = Some(tool);
        self
    }
}

/// The first choice of a completion response, stripped of wire detail.
#[derive(Debug, Clone, Default)]
pub struct CompletionReply {
    /// Free-text content of the assistant message, if any.
    pub content: Option<String>,
    /// Tool invocations attached to the message; empty when the model
    /// answered with text only.
    pub tool_calls: Vec<ToolCallIntent>,
}

/// A single-shot completion backend.
pub trait CompletionBackend: Send + Sync {
    /// Execute the transcript against the completion service and return the
    /// first choice. One network call, no retries.
    fn complete<'p>(
        &'p self,
        params: CompletionParams,
    ) -> Pin<Box<dyn Future<Output = Result<CompletionReply>> + Send + 'p>>;
}
