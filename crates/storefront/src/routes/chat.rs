//! Advisor chat widget route handlers.
//!
//! The chat session (transcript plus wire history) lives in the visitor
//! session and is created on first use. Sends are serialized per session:
//! the input form disables itself while a round trip is in flight, and the
//! session is only mutated inside a single request. Backend failures never
//! reach this layer; the advisory client substitutes fallback replies.

use askama::Template;
use askama_web::WebTemplate;
use axum::{Form, extract::State};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use tacworld_core::ChatRole;

use crate::advisory::AdvisorSession;
use crate::error::Result;
use crate::models::session::keys;
use crate::state::AppState;

/// Chat message display data for templates.
#[derive(Clone)]
pub struct ChatMessageView {
    pub from_user: bool,
    pub text: String,
}

/// Chat window fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/chat_window.html")]
pub struct ChatWindowTemplate {
    pub messages: Vec<ChatMessageView>,
}

impl ChatWindowTemplate {
    fn from_session(session: &AdvisorSession) -> Self {
        Self {
            messages: session
                .messages()
                .iter()
                .map(|message| ChatMessageView {
                    from_user: message.role == ChatRole::User,
                    text: message.text.clone(),
                })
                .collect(),
        }
    }
}

/// Chat send form data.
#[derive(Debug, Deserialize)]
pub struct ChatSendForm {
    #[serde(default)]
    pub message: String,
}

/// Load the advisor session, creating it on first use.
async fn load_advisor(state: &AppState, session: &Session) -> Result<AdvisorSession> {
    match session.get::<AdvisorSession>(keys::ADVISOR_CHAT).await? {
        Some(advisor) => Ok(advisor),
        None => {
            let advisor = state.advisory().start_session();
            session.insert(keys::ADVISOR_CHAT, &advisor).await?;
            Ok(advisor)
        }
    }
}

/// Display the chat window (HTMX).
#[instrument(skip(state, session))]
pub async fn window(State(state): State<AppState>, session: Session) -> Result<ChatWindowTemplate> {
    let advisor = load_advisor(&state, &session).await?;
    Ok(ChatWindowTemplate::from_session(&advisor))
}

/// Send a chat message and re-render the transcript (HTMX).
///
/// Empty input is ignored. Every non-empty send appends exactly one user
/// and one assistant message, real or fallback.
#[instrument(skip(state, session, form))]
pub async fn send(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<ChatSendForm>,
) -> Result<ChatWindowTemplate> {
    let message = form.message.trim();

    let mut advisor = load_advisor(&state, &session).await?;
    if !message.is_empty() {
        state.advisory().send(&mut advisor, message).await;
        session.insert(keys::ADVISOR_CHAT, &advisor).await?;
    }

    Ok(ChatWindowTemplate::from_session(&advisor))
}
