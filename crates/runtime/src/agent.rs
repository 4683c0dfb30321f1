//! The reasoning loop.
//!
//! Alternates model calls with tool executions until the model produces a
//! final text-only answer. Tool failures are fed back into the
//! conversation as error observations rather than aborting the turn;
//! model failures abort the turn and propagate to the surface.

use tracing::{debug, warn};

use crate::model::{Backend, Message, ModelRequest, Part, Role, ToolResult};
use crate::tools::ToolHost;
use crate::{Error, Result};

/// Upper bound on model round-trips per submitted turn.
pub const MAX_TOOL_ROUNDS: usize = 8;

/// Drive `messages` to a final assistant answer.
///
/// Each round sends the working conversation plus the tool specs; if the
/// model requests tools, they are executed through `tools` and the
/// results appended, then the loop repeats. Returns the final answer
/// text, or an error once [`MAX_TOOL_ROUNDS`] is exhausted.
pub async fn run<B, H>(backend: &B, tools: &H, mut messages: Vec<Message>) -> Result<String>
where
    B: Backend,
    H: ToolHost,
{
    for _ in 0..MAX_TOOL_ROUNDS {
        let response = backend
            .call(ModelRequest {
                messages: &messages,
                tools: tools.specs(),
            })
            .await?;
        debug!(
            input_tokens = response.usage.input_tokens,
            output_tokens = response.usage.output_tokens,
            "model call complete"
        );

        let calls = response.message.tool_calls();
        if calls.is_empty() {
            return Ok(response.message.text());
        }

        messages.push(response.message);

        let mut results = Vec::with_capacity(calls.len());
        for call in calls {
            debug!(tool = %call.name, "executing tool");
            let result = match tools.execute(&call).await {
                Ok(output) => ToolResult::Success {
                    tool_call_id: call.id,
                    output,
                },
                Err(error) => {
                    warn!(tool = %call.name, %error, "tool call failed");
                    ToolResult::Failure {
                        tool_call_id: call.id,
                        error,
                    }
                }
            };
            results.push(Part::ToolResult(result));
        }
        messages.push(Message {
            role: Role::User,
            parts: results,
        });
    }

    Err(Error::Agent(format!(
        "no final answer after {MAX_TOOL_ROUNDS} tool rounds"
    )))
}
