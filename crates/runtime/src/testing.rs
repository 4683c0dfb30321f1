//! Test doubles shared across runtime tests.

use std::sync::Mutex;

use serde_json::Value;

use crate::model::{
    Backend, Message, ModelError, ModelRequest, ModelResponse, Part, Role, ToolCall, Usage,
};

/// A backend that replays a fixed script of responses and records every
/// request it receives.
pub struct ScriptedBackend {
    responses: Mutex<Vec<ModelResponse>>,
    requests: Mutex<Vec<Vec<Message>>>,
}

impl ScriptedBackend {
    pub fn new(responses: Vec<ModelResponse>) -> Self {
        Self {
            responses: Mutex::new(responses),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// The message lists of every request seen so far.
    pub fn requests(&self) -> Vec<Vec<Message>> {
        self.requests.lock().unwrap().clone()
    }
}

impl Backend for ScriptedBackend {
    async fn call(&self, request: ModelRequest<'_>) -> Result<ModelResponse, ModelError> {
        self.requests.lock().unwrap().push(request.messages.to_vec());
        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            return Err(ModelError::Api("script exhausted".into()));
        }
        Ok(responses.remove(0))
    }
}

/// A final text-only assistant response.
pub fn text_response(text: &str) -> ModelResponse {
    ModelResponse {
        message: Message::assistant(text),
        usage: Usage::default(),
    }
}

/// An assistant response requesting a single tool call.
pub fn tool_call_response(id: &str, name: &str, input: Value) -> ModelResponse {
    ModelResponse {
        message: Message {
            role: Role::Assistant,
            parts: vec![Part::ToolCall(ToolCall {
                id: id.into(),
                name: name.into(),
                input,
            })],
        },
        usage: Usage::default(),
    }
}
