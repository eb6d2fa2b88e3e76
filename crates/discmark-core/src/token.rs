//! Token types produced by the tokenizer.

use serde::{Deserialize, Serialize};

/// A typed unit of a Discord message.
///
/// Tokens are produced in source order by [`tokenize`](crate::tokenize) and
/// consumed once by the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Token {
    /// Literal text between markers, not yet escaped.
    Text {
        /// Raw source text.
        content: String,
    },

    /// A custom emoji reference, `<:name:id>`.
    Emoji {
        /// Display label used as the image alt text.
        name: String,
        /// Emoji identifier on the CDN.
        id: String,
    },

    /// A user mention, `<@id>`.
    Mention {
        /// User identifier passed to the lookup provider.
        id: String,
    },
}

impl Token {
    /// Creates a text token.
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text {
            content: content.into(),
        }
    }

    /// Creates an emoji token.
    pub fn emoji(name: impl Into<String>, id: impl Into<String>) -> Self {
        Self::Emoji {
            name: name.into(),
            id: id.into(),
        }
    }

    /// Creates a mention token.
    pub fn mention(id: impl Into<String>) -> Self {
        Self::Mention { id: id.into() }
    }

    /// Returns `true` for mention tokens.
    pub fn is_mention(&self) -> bool {
        matches!(self, Self::Mention { .. })
    }

    /// Reconstructs the marker syntax this token was read from.
    ///
    /// For well-formed input, concatenating the sources of all tokens yields
    /// the original message. Unterminated markers come back closed.
    pub fn source(&self) -> String {
        match self {
            Self::Text { content } => content.clone(),
            Self::Emoji { name, id } => format!("<:{name}:{id}>"),
            Self::Mention { id } => format!("<@{id}>"),
        }
    }
}
