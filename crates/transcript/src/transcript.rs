//! Append-only transcript.

use crate::Turn;

/// The ordered history of turns for one session.
///
/// Append-only within a session: there is no way to edit or remove a turn
/// once it has been pushed. The transcript is owned exclusively by its
/// session and is never shared across sessions.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    turns: Vec<Turn>,
}

impl Transcript {
    /// Create an empty transcript.
    pub fn new() -> Self {
        Self { turns: Vec::new() }
    }

    /// Append a turn to the end of the history.
    pub fn append(&mut self, turn: Turn) {
        self.turns.push(turn);
    }

    /// All turns, in submission order.
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}
