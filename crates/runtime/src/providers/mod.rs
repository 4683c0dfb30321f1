//! LLM provider adapters.
//!
//! Each provider implements the backend trait for its specific API.

mod groq;

pub use groq::{GroqBackend, GroqBackendBuilder};
