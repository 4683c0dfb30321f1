//! Groq API backend.
//!
//! Speaks the OpenAI-compatible chat-completions protocol. Tool-call
//! arguments arrive JSON-encoded inside a string and are parsed before
//! they reach the reasoning loop; tool results go back as separate
//! `role: "tool"` messages keyed by call id.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::model::{
    Backend, Message, ModelError, ModelRequest, ModelResponse, Part, Role, ToolCall, ToolResult,
    ToolSpec, Usage,
};

const GROQ_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";

const DEFAULT_TEMPERATURE: f32 = 1.0;
const DEFAULT_MAX_TOKENS: u32 = 4096;

// ─────────────────────────────────────────────────────────────────────────────
// API Wire Types
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct ApiRequest {
    model: String,
    messages: Vec<ApiMessage>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tools: Vec<ApiTool>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ApiMessage {
    role: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tool_calls: Option<Vec<ApiToolCall>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tool_call_id: Option<String>,
}

#[derive(Debug, Serialize)]
struct ApiTool {
    #[serde(rename = "type")]
    tool_type: &'static str,
    function: ApiFunction,
}

#[derive(Debug, Serialize)]
struct ApiFunction {
    name: String,
    description: String,
    parameters: Value,
}

#[derive(Debug, Serialize, Deserialize)]
struct ApiToolCall {
    id: String,
    #[serde(rename = "type")]
    call_type: String,
    function: ApiFunctionCall,
}

#[derive(Debug, Serialize, Deserialize)]
struct ApiFunctionCall {
    name: String,
    /// JSON-encoded arguments object.
    arguments: String,
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    choices: Vec<ApiChoice>,
    #[serde(default)]
    usage: ApiUsage,
}

#[derive(Debug, Deserialize)]
struct ApiChoice {
    message: ApiChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ApiChoiceMessage {
    #[serde(default)]
    content: Option<String>,
    #[serde(default)]
    tool_calls: Option<Vec<ApiToolCall>>,
}

#[derive(Debug, Default, Deserialize)]
struct ApiUsage {
    #[serde(default)]
    prompt_tokens: u32,
    #[serde(default)]
    completion_tokens: u32,
}

// ─────────────────────────────────────────────────────────────────────────────
// Backend Implementation
// ─────────────────────────────────────────────────────────────────────────────

/// Builder for creating a Groq backend.
///
/// Model name, temperature, and max tokens are fixed at build time and
/// apply to every call for the session's lifetime.
#[derive(Clone)]
pub struct GroqBackendBuilder {
    api_key: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

impl GroqBackendBuilder {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: model.into(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }

    pub fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn build(self) -> GroqBackend {
        GroqBackend {
            client: reqwest::Client::new(),
            api_key: self.api_key,
            model: self.model,
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        }
    }
}

/// Groq API backend.
///
/// No `Debug` impl: the credential must never end up in logs or output.
pub struct GroqBackend {
    client: reqwest::Client,
    api_key: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

impl GroqBackend {
    pub fn builder(api_key: impl Into<String>, model: impl Into<String>) -> GroqBackendBuilder {
        GroqBackendBuilder::new(api_key, model)
    }

    fn role_to_api(role: Role) -> &'static str {
        match role {
            Role::System => "system",
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }

    /// Translate one message.
    ///
    /// Returns a Vec because tool results are separate messages with role
    /// "tool" in this protocol.
    fn message_to_api(msg: &Message) -> Vec<ApiMessage> {
        let mut text_parts: Vec<&str> = Vec::new();
        let mut tool_calls: Vec<ApiToolCall> = Vec::new();
        let mut tool_results: Vec<ApiMessage> = Vec::new();

        for part in &msg.parts {
            match part {
                Part::Text(text) => text_parts.push(text),
                Part::ToolCall(call) => tool_calls.push(ApiToolCall {
                    id: call.id.clone(),
                    call_type: "function".to_string(),
                    function: ApiFunctionCall {
                        name: call.name.clone(),
                        arguments: serde_json::to_string(&call.input)
                            .unwrap_or_else(|_| "{}".to_string()),
                    },
                }),
                Part::ToolResult(result) => {
                    let (tool_call_id, content) = match result {
                        ToolResult::Success {
                            tool_call_id,
                            output,
                        } => (tool_call_id.clone(), value_to_text(output)),
                        ToolResult::Failure {
                            tool_call_id,
                            error,
                        } => (tool_call_id.clone(), format!("error: {error}")),
                    };
                    tool_results.push(ApiMessage {
                        role: "tool",
                        content: Some(content),
                        tool_calls: None,
                        tool_call_id: Some(tool_call_id),
                    });
                }
            }
        }

        let mut messages = Vec::new();
        if !text_parts.is_empty() || !tool_calls.is_empty() {
            messages.push(ApiMessage {
                role: Self::role_to_api(msg.role),
                content: if text_parts.is_empty() {
                    None
                } else {
                    Some(text_parts.concat())
                },
                tool_calls: if tool_calls.is_empty() {
                    None
                } else {
                    Some(tool_calls)
                },
                tool_call_id: None,
            });
        }
        messages.extend(tool_results);
        messages
    }

    fn tool_to_api(spec: &ToolSpec) -> ApiTool {
        ApiTool {
            tool_type: "function",
            function: ApiFunction {
                name: spec.name.clone(),
                description: spec.description.clone(),
                parameters: spec.input_schema.clone(),
            },
        }
    }

    fn response_to_message(choice: ApiChoiceMessage) -> Result<Message, ModelError> {
        let mut parts = Vec::new();
        if let Some(text) = choice.content {
            if !text.is_empty() {
                parts.push(Part::Text(text));
            }
        }
        for call in choice.tool_calls.unwrap_or_default() {
            let input: Value = serde_json::from_str(&call.function.arguments).map_err(|e| {
                ModelError::InvalidResponse(format!(
                    "tool call arguments for {}: {e}",
                    call.function.name
                ))
            })?;
            parts.push(Part::ToolCall(ToolCall {
                id: call.id,
                name: call.function.name,
                input,
            }));
        }
        Ok(Message {
            role: Role::Assistant,
            parts,
        })
    }
}

fn value_to_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

impl std::fmt::Display for GroqBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "groq({})", self.model)
    }
}

impl Backend for GroqBackend {
    async fn call(&self, request: ModelRequest<'_>) -> Result<ModelResponse, ModelError> {
        let mut api_messages = Vec::new();
        for msg in request.messages {
            api_messages.extend(Self::message_to_api(msg));
        }

        let tools: Vec<ApiTool> = request.tools.iter().map(Self::tool_to_api).collect();

        let api_request = ApiRequest {
            model: self.model.clone(),
            messages: api_messages,
            tools,
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        };

        let response = self
            .client
            .post(GROQ_API_URL)
            .bearer_auth(&self.api_key)
            .header("content-type", "application/json")
            .header("accept", "application/json")
            .json(&api_request)
            .send()
            .await
            .map_err(|e| ModelError::Network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ModelError::Api(format!("{status}: {body}")));
        }

        let api_response: ApiResponse = response
            .json()
            .await
            .map_err(|e| ModelError::InvalidResponse(e.to_string()))?;

        let usage = Usage {
            input_tokens: api_response.usage.prompt_tokens,
            output_tokens: api_response.usage.completion_tokens,
        };
        let choice = api_response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| ModelError::InvalidResponse("no choices in response".into()))?;
        let message = Self::response_to_message(choice.message)?;

        Ok(ModelResponse { message, usage })
    }
}
