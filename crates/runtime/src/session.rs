//! Session management.

use std::sync::Arc;

use tracing::debug;
use transcript::{SessionId, Transcript, Turn};

use crate::model::{Backend, Message};
use crate::tools::ToolHost;
use crate::{Error, Result, agent};

/// A conversation session.
///
/// Owns its transcript exclusively: one session, one transcript, no
/// sharing across sessions. The tool registry is shared read-only. The
/// transcript lives in memory and is dropped with the session.
pub struct Session<B, H> {
    pub id: SessionId,
    backend: B,
    tools: Arc<H>,
    system: Option<String>,
    transcript: Transcript,
}

impl<B: Backend, H: ToolHost> Session<B, H> {
    /// Create a new session over the given backend and tools.
    pub fn new(backend: B, tools: Arc<H>) -> Self {
        Self {
            id: SessionId::new(),
            backend,
            tools,
            system: None,
            transcript: Transcript::new(),
        }
    }

    /// Set the system prompt.
    pub fn with_system(mut self, system: impl Into<String>) -> Self {
        self.system = Some(system.into());
        self
    }

    /// The transcript so far.
    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Submit one line of user text and get the final assistant answer.
    ///
    /// The user turn is appended before the model is called, so a failed
    /// turn leaves the user's text in the transcript without a response;
    /// the user may resubmit. Blank input appends nothing.
    pub async fn chat(&mut self, user_input: &str) -> Result<String> {
        let input = user_input.trim();
        if input.is_empty() {
            return Err(Error::EmptyInput);
        }
        self.transcript.append(Turn::user(input));

        // The loop sees the transcript as plain role/content pairs; tool
        // interactions stay working state of a single turn.
        let mut messages = Vec::with_capacity(self.transcript.len() + 1);
        if let Some(system) = &self.system {
            messages.push(Message::system(system.clone()));
        }
        messages.extend(
            self.transcript
                .turns()
                .iter()
                .map(|turn| Message::new(turn.role, turn.content.clone())),
        );

        let answer = agent::run(&self.backend, self.tools.as_ref(), messages).await?;
        self.transcript.append(Turn::assistant(answer.as_str()));
        debug!(session = %self.id, turns = self.transcript.len(), "turn complete");
        Ok(answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{ScriptedBackend, text_response};
    use crate::tools::ToolRegistry;
    use transcript::Role;

    fn session_with(responses: Vec<crate::ModelResponse>) -> Session<ScriptedBackend, ToolRegistry> {
        Session::new(
            ScriptedBackend::new(responses),
            Arc::new(ToolRegistry::builtin().unwrap()),
        )
    }

    #[tokio::test]
    async fn turns_alternate_in_submission_order() {
        let mut session = session_with(vec![
            text_response("one"),
            text_response("two"),
            text_response("three"),
        ]);

        for prompt in ["a", "b", "c"] {
            session.chat(prompt).await.unwrap();
        }

        let turns = session.transcript().turns();
        assert_eq!(turns.len(), 6);
        for (i, turn) in turns.iter().enumerate() {
            let expected = if i % 2 == 0 { Role::User } else { Role::Assistant };
            assert_eq!(turn.role, expected);
        }
        assert_eq!(turns[4].content, "c");
        assert_eq!(turns[5].content, "three");
    }

    #[tokio::test]
    async fn blank_input_is_a_noop() {
        let mut session = session_with(vec![text_response("never sent")]);

        let result = session.chat("   \t ").await;
        assert!(matches!(result, Err(Error::EmptyInput)));
        assert!(session.transcript().is_empty());
    }

    #[tokio::test]
    async fn failed_turn_keeps_user_text_only() {
        // Empty script: the backend errors on the first call.
        let mut session = session_with(Vec::new());

        let result = session.chat("hello?").await;
        assert!(result.is_err());

        let turns = session.transcript().turns();
        assert_eq!(turns.len(), 1);
        assert_eq!(turns[0].role, Role::User);
        assert_eq!(turns[0].content, "hello?");
    }

    #[tokio::test]
    async fn system_prompt_is_sent_but_not_recorded() {
        let mut session = session_with(vec![text_response("aye")]).with_system("Be terse.");
        session.chat("hi").await.unwrap();

        assert_eq!(session.transcript().len(), 2);
        let requests = session.backend.requests();
        assert_eq!(requests[0].len(), 2);
        assert_eq!(requests[0][0].role, Role::System);
    }
}
