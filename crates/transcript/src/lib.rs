//! Conversation transcript types for Skiff sessions.
//!
//! This crate holds the domain types for a chat conversation: who said
//! what, in what order, within which session. Everything here lives in
//! memory only — a transcript is created empty when its session starts
//! and dropped when the session ends.
//!
//! # Core Concepts
//!
//! ## Turn
//!
//! A [`Turn`] is one message exchanged in the conversation, attributed to
//! a [`Role`]. Turns are immutable once created.
//!
//! ## Transcript
//!
//! The [`Transcript`] is the ordered history of turns for one session.
//! It is append-only: turns are never edited or removed, so the history
//! a user has seen on screen can never silently change underneath them.
//!
//! ## SessionId
//!
//! A [`SessionId`] is a UUID that uniquely identifies a conversation
//! session, printable for banners and logs.
//!
//! # Example
//!
//! ```
//! use transcript::{Transcript, Turn};
//!
//! let mut transcript = Transcript::new();
//! transcript.append(Turn::user("What is 12 times 13?"));
//! transcript.append(Turn::assistant("12 times 13 is 156."));
//!
//! assert_eq!(transcript.len(), 2);
//! assert_eq!(transcript.turns()[1].content, "12 times 13 is 156.");
//! ```

mod transcript;
mod turn;

pub use transcript::Transcript;
pub use turn::{Role, SessionId, Turn};
