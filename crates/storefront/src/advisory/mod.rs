//! Advisory client for the generative AI backend.
//!
//! Wraps two independent operations against the Gemini `generateContent`
//! API: a multi-turn chat session for product advice and a one-shot image
//! generation call for the configurator preview.
//!
//! # Failure policy
//!
//! Failures never cross this module boundary as errors. A failed chat round
//! trip yields a fixed fallback reply; a failed or image-free generation
//! yields `None`. Both operations remain safely callable after a failure —
//! a failed turn is not replayed to the backend, so the session cannot be
//! corrupted.
//!
//! # Ordering
//!
//! Chat turns are appended in call order. A session is only mutated inside
//! a single request (load, send, store), and the chat input control is
//! disabled while a round trip is in flight, so per-session sends are
//! strictly serialized.

mod client;
mod error;
mod session;
mod types;

pub use client::AdvisoryClient;
pub use error::AdvisoryError;
pub use session::{AdvisorSession, EMPTY_REPLY_FALLBACK, GREETING, TRANSPORT_FALLBACK};
pub use types::{
    Content, GenerateContentRequest, GenerateContentResponse, GeneratedImage, first_inline_image,
    first_text,
};

/// Fixed persona instruction applied to every completion request.
///
/// Opaque configuration from the advisor's point of view; the contract is
/// that one instruction set conditions the assistant for the lifetime of a
/// session.
pub const ADVISOR_PERSONA: &str = "\
You are \"Gunny\", the expert AI Tactical Advisor for TacWorld Holsters.
Your goal is to assist customers in selecting the perfect holster or tactical gear from our catalog.
Our main products are:
1. The Compact IWB (Concealed carry, minimalist)
2. Vertical Shoulder System (Duty, range, driving)
3. Classic OWB Pancake (Comfort, concealment)
4. Tuckable Hybrid (Hot weather, deep concealment)

Your tone should be professional, concise, and knowledgeable (tactical expert).
Do not be overly flowery. Use tactical terminology correctly (printing, retention, cant, ride height).
If a user asks about a gun model we might not support, suggest they contact custom support, but generally assume we support major brands (Glock, Sig, S&W).
Always prioritize safety in your advice.
If asked about prices, give approximate ranges based on the catalog ($80-$170).
Keep responses under 100 words unless detailed explanation is requested.";
