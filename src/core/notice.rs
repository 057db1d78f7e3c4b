//! Transient user notifications raised alongside an operation's result.

use serde::Serialize;
use std::fmt;

/// A short message shown to the user after an action.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum Notice {
    /// A message was handed to the messaging service
    MessageSent,
    /// The outgoing message was cut to the length limit
    Truncated {
        /// Length limit in characters
        limit: usize,
    },
    /// Any other confirmation text
    Info(String),
}

impl Notice {
    /// Convenience constructor for [`Notice::Info`].
    pub fn info(text: impl Into<String>) -> Self {
        Self::Info(text.into())
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MessageSent => {
                f.write_str("Message sent! Continue the conversation on WhatsApp.")
            }
            Self::Truncated { limit } => {
                write!(f, "Message was truncated to {limit} characters.")
            }
            Self::Info(text) => f.write_str(text),
        }
    }
}
