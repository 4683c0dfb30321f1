use crate::model::ModelError;
use crate::tools::ToolError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Submitted user input was empty or whitespace-only.
    #[error("empty input")]
    EmptyInput,

    /// The reasoning loop gave up before the model produced a final answer.
    #[error("agent error: {0}")]
    Agent(String),

    #[error(transparent)]
    Model(#[from] ModelError),

    #[error(transparent)]
    Tool(#[from] ToolError),
}

pub type Result<T> = std::result::Result<T, Error>;
