//! Skiff runtime — session, tool, and model backend management.
//!
//! This crate provides the core runtime for a chat-with-tools front end:
//! model backend abstraction, a local tool registry, the reasoning loop
//! that alternates model calls with tool executions, and session
//! lifecycle management.
//!
//! # Overview
//!
//! The runtime is organized around these concepts:
//!
//! - **Session**: A conversation context that owns the transcript and
//!   drives the reasoning loop, one per interactive session.
//! - **Backend**: A trait abstracting LLM providers (Groq, etc.).
//! - **ToolRegistry**: A name-to-function mapping of locally executable
//!   tools the model may call mid-conversation.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use runtime::{GroqBackend, Session, ToolRegistry};
//!
//! # async fn example() -> runtime::Result<()> {
//! let backend = GroqBackend::builder("gsk_...", "openai/gpt-oss-120b").build();
//! let tools = Arc::new(ToolRegistry::builtin()?);
//!
//! let mut session = Session::new(backend, tools);
//! let answer = session.chat("What is 12 times 13?").await?;
//! println!("{answer}");
//! # Ok(())
//! # }
//! ```

mod agent;
mod error;
mod model;
mod providers;
mod session;
#[cfg(test)]
mod testing;
mod tools;

// Model types (provider-agnostic)
pub use model::{
    Backend, Message, ModelError, ModelRequest, ModelResponse, Part, Role, ToolCall, ToolResult,
    ToolSpec, Usage,
};

// Provider adapters
pub use providers::{GroqBackend, GroqBackendBuilder};

// Error types
pub use error::{Error, Result};

// Tool registry and builtin tools
pub use tools::{ToolError, ToolHost, ToolRegistry, get_weather, multiply};

// Session management
pub use session::Session;
