//! HTTP middleware configuration.

mod session;

pub use session::{SESSION_COOKIE_NAME, create_session_layer};
