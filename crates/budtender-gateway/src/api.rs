//! Wire types for the OpenAI-compatible `chat/completions` endpoint,
//! restricted to what one recommendation exchange needs: a two-message
//! transcript, at most one declared function, and a pinned `tool_choice`.

use budtender_core::{
    chat::{ChatMessage, ChatRole, FunctionCall, FunctionSpec, ToolCallIntent},
    provider::CompletionReply,
};
use serde::{Deserialize, Serialize, Serializer};

#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<WireMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<ToolSpec>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_choice: Option<ToolChoice>,
}

impl ChatCompletionRequest {
    pub fn new(model: String, messages: Vec<WireMessage>) -> Self {
        Self {
            model,
            messages,
            tools: None,
            tool_choice: None,
        }
    }

    /// Declare `spec` as the only tool and force the model to invoke it.
    pub fn with_forced_tool(mut self, spec: FunctionSpec) -> Self {
        self.tool_choice = Some(ToolChoice::Function {
            name: spec.name.clone(),
        });
        self.tools = Some(vec![spec.into()]);
        self
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct WireMessage {
    pub role: WireRole,
    pub content: String,
}

impl From<ChatMessage> for WireMessage {
    fn from(value: ChatMessage) -> Self {
        Self {
            role: value.role.into(),
            content: value.content,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WireRole {
    System,
    User,
    Assistant,
    Tool,
}

impl From<ChatRole> for WireRole {
    fn from(value: ChatRole) -> Self {
        match value {
            ChatRole::System => WireRole::System,
            ChatRole::User => WireRole::User,
            ChatRole::Assistant => WireRole::Assistant,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ToolSpec {
    pub r#type: ToolType,
    pub function: ToolFunctionSpec,
}

impl From<FunctionSpec> for ToolSpec {
    fn from(value: FunctionSpec) -> Self {
        Self {
            r#type: ToolType::Function,
            function: ToolFunctionSpec {
                name: value.name,
                description: value.description,
                parameters: value.parameters,
            },
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ToolFunctionSpec {
    pub name: String,
    pub description: String,
    pub parameters: serde_json::Value,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolType {
    Function,
}

/// `tool_choice` field, always pinned to the single declared function:
/// `{"type":"function","function":{"name":...}}`. This exchange never uses
/// the keyword forms (`"auto"`/`"none"`), so they are not modelled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolChoice {
    Function { name: String },
}

impl Serialize for ToolChoice {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        #[derive(Serialize)]
        struct Forced<'a> {
            r#type: ToolType,
            function: ForcedFunction<'a>,
        }
        #[derive(Serialize)]
        struct ForcedFunction<'a> {
            name: &'a str,
        }

        match self {
            ToolChoice::Function { name } => Forced {
                r#type: ToolType::Function,
                function: ForcedFunction { name },
            }
            .serialize(serializer),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    pub choices: Vec<ChatCompletionChoice>,
}

#[derive(Debug, Deserialize)]
pub struct ChatCompletionChoice {
    pub message: ReplyMessage,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ReplyMessage {
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub tool_calls: Option<Vec<WireToolCall>>,
}

impl From<ReplyMessage> for CompletionReply {
    fn from(value: ReplyMessage) -> Self {
        CompletionReply {
            content: value.content,
            tool_calls: value
                .tool_calls
                .unwrap_or_default()
                .into_iter()
                .map(Into::into)
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct WireToolCall {
    pub id: String,
    pub function: WireFunctionCall,
}

/// On the wire `arguments` is a JSON-encoded *string*, not an object; it is
/// carried through verbatim so the interpreter decides how to handle
/// malformed payloads.
#[derive(Debug, Clone, Deserialize)]
pub struct WireFunctionCall {
    pub name: String,
    pub arguments: String,
}

impl From<WireToolCall> for ToolCallIntent {
    fn from(value: WireToolCall) -> Self {
        ToolCallIntent {
            id: value.id,
            function: FunctionCall {
                name: value.function.name,
                arguments: value.function.arguments,
            },
        }
    }
}
