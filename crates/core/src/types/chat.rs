//! Chat message roles for the advisory widget.

use serde::{Deserialize, Serialize};

/// Role of a chat transcript message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatRole {
    User,
    Assistant,
}

impl std::fmt::Display for ChatRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::User => write!(f, "user"),
            Self::Assistant => write!(f, "assistant"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_serialization() {
        assert_eq!(
            serde_json::to_string(&ChatRole::User).expect("serialize"),
            "\"user\""
        );
        assert_eq!(
            serde_json::to_string(&ChatRole::Assistant).expect("serialize"),
            "\"assistant\""
        );
    }
}
