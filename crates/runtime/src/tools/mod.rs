//! Tool registration and execution.
//!
//! Tools are locally executable functions the model may request
//! mid-conversation. The registry maps unique names to pure handlers;
//! dispatch by name has a defined fallback for unknown tools.

mod builtin;
mod errors;
mod host;
mod registry;

pub use builtin::{get_weather, multiply};
pub use errors::ToolError;
pub use host::ToolHost;
pub use registry::ToolRegistry;
