//! Advisor chat session: display transcript plus wire history.

use serde::{Deserialize, Serialize};

use tacworld_core::ChatRole;

use crate::models::chat::ChatMessage;

use super::error::AdvisoryError;
use super::types::Content;

/// Opening assistant message shown when the widget first loads.
pub const GREETING: &str = "Solid copy. This is Gunny, your Tactical Advisor. \
    What's your loadout status? Looking for IWB, OWB, or chest rigs today?";

/// Reply substituted when the backend cannot be reached.
pub const TRANSPORT_FALLBACK: &str = "Comms interference. Please try again later.";

/// Reply substituted when the backend answers with no text.
pub const EMPTY_REPLY_FALLBACK: &str = "Negative. I couldn't process that intel. Please repeat.";

/// A stateful advisor conversation, stored in the visitor session.
///
/// Holds two parallel sequences: the append-only display transcript
/// ([`ChatMessage`]) and the wire-format history replayed to the backend on
/// each completion request. They differ on failures: the transcript always
/// records a user/assistant pair per send, while a turn the backend never
/// answered is left out of the wire history so a later send starts clean.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvisorSession {
    messages: Vec<ChatMessage>,
    history: Vec<Content>,
}

impl Default for AdvisorSession {
    fn default() -> Self {
        Self::new()
    }
}

impl AdvisorSession {
    /// Start a session with the fixed greeting. Never fails; backend
    /// failures surface at send time as fallback replies.
    #[must_use]
    pub fn new() -> Self {
        Self {
            messages: vec![ChatMessage::new(ChatRole::Assistant, GREETING)],
            history: Vec::new(),
        }
    }

    /// Display transcript, oldest first.
    #[must_use]
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Wire-format turns replayed to the backend.
    #[must_use]
    pub fn history(&self) -> &[Content] {
        &self.history
    }

    /// Record one chat round trip.
    ///
    /// Appends exactly one user message and exactly one assistant message
    /// to the transcript, whatever the outcome, and returns the assistant
    /// text: the backend reply on success, [`EMPTY_REPLY_FALLBACK`] when
    /// the reply carried no text, [`TRANSPORT_FALLBACK`] on failure. Only
    /// answered turns enter the wire history.
    pub fn record_exchange(
        &mut self,
        user_text: &str,
        outcome: Result<String, AdvisoryError>,
    ) -> String {
        self.messages.push(ChatMessage::new(ChatRole::User, user_text));

        let reply = match outcome {
            Ok(text) => {
                let text = if text.trim().is_empty() {
                    EMPTY_REPLY_FALLBACK.to_owned()
                } else {
                    text
                };
                self.history.push(Content::user(user_text));
                self.history.push(Content::model(text.clone()));
                text
            }
            Err(err) => {
                tracing::warn!(error = %err, "advisor round trip failed, substituting fallback");
                TRANSPORT_FALLBACK.to_owned()
            }
        };

        self.messages
            .push(ChatMessage::new(ChatRole::Assistant, reply.clone()));
        reply
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transport_error() -> AdvisoryError {
        AdvisoryError::Parse("connection reset".to_owned())
    }

    #[test]
    fn test_new_session_opens_with_greeting() {
        let session = AdvisorSession::new();
        assert_eq!(session.messages().len(), 1);
        assert_eq!(session.messages()[0].role, ChatRole::Assistant);
        assert_eq!(session.messages()[0].text, GREETING);
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_successful_exchange_appends_user_then_assistant() {
        let mut session = AdvisorSession::new();
        let reply =
            session.record_exchange("What rig for a G19?", Ok("The H201 fits well.".to_owned()));

        assert_eq!(reply, "The H201 fits well.");
        assert_eq!(session.messages().len(), 3);
        assert_eq!(session.messages()[1].role, ChatRole::User);
        assert_eq!(session.messages()[2].role, ChatRole::Assistant);
        assert_eq!(session.history().len(), 2);
    }

    #[test]
    fn test_failed_exchange_still_appends_both_turns() {
        let mut session = AdvisorSession::new();
        let reply = session.record_exchange("Anyone home?", Err(transport_error()));

        assert_eq!(reply, TRANSPORT_FALLBACK);
        assert_eq!(session.messages().len(), 3);
        assert_eq!(session.messages()[1].role, ChatRole::User);
        assert_eq!(session.messages()[2].role, ChatRole::Assistant);
        assert_eq!(session.messages()[2].text, TRANSPORT_FALLBACK);
        // The unanswered turn is not replayed to the backend later
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_empty_reply_gets_fallback_but_counts_as_answered() {
        let mut session = AdvisorSession::new();
        let reply = session.record_exchange("Status?", Ok("   ".to_owned()));

        assert_eq!(reply, EMPTY_REPLY_FALLBACK);
        assert_eq!(session.history().len(), 2);
    }

    #[test]
    fn test_alternation_survives_mixed_outcomes() {
        let mut session = AdvisorSession::new();
        session.record_exchange("first", Ok("copy".to_owned()));
        session.record_exchange("second", Err(transport_error()));
        session.record_exchange("third", Ok("copy again".to_owned()));

        // Greeting, then strict user/assistant pairs
        let roles: Vec<ChatRole> = session.messages().iter().map(|m| m.role).collect();
        assert_eq!(roles.len(), 7);
        for pair in roles[1..].chunks(2) {
            assert_eq!(pair, [ChatRole::User, ChatRole::Assistant]);
        }

        // Only the answered turns are in the wire history
        assert_eq!(session.history().len(), 4);
    }

    #[test]
    fn test_session_serde_round_trip() {
        let mut session = AdvisorSession::new();
        session.record_exchange("ping", Ok("pong".to_owned()));

        let json = serde_json::to_string(&session).expect("serialize");
        let back: AdvisorSession = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back.messages().len(), session.messages().len());
        assert_eq!(back.history(), session.history());
    }
}
