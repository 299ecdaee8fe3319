//! Discord REST wire types.

use serde::{Deserialize, Serialize};

use crate::application::format::Embed;

/// Channel types that can hold messages.
///
/// Guild text, DM, guild voice, group DM, announcement, the three thread
/// kinds and stage voice.
pub const TEXT_BASED_CHANNEL_TYPES: [u8; 9] = [0, 1, 2, 3, 5, 10, 11, 12, 13];

/// Subset of the Discord channel object.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Channel {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: u8,
    #[serde(default)]
    pub name: Option<String>,
}

impl Channel {
    #[must_use]
    pub fn is_text_based(&self) -> bool {
        TEXT_BASED_CHANNEL_TYPES.contains(&self.kind)
    }
}

/// Body of `POST /channels/{id}/messages`.
#[derive(Debug, Serialize)]
pub struct CreateMessage<'a> {
    pub embeds: &'a [Embed],
}

/// Subset of the Discord message object returned after a send.
#[derive(Debug, Clone, Deserialize)]
pub struct MessageRef {
    pub id: String,
}

/// A chat-input (slash) command definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApplicationCommand {
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: u8,
}

impl ApplicationCommand {
    /// Slash command with no options.
    pub fn chat_input(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            kind: 1,
        }
    }
}

/// Interaction callback type: reply with a message.
pub const CHANNEL_MESSAGE_WITH_SOURCE: u8 = 4;

/// Message flag: only the invoking user sees the reply.
pub const EPHEMERAL: u64 = 1 << 6;

/// Body of `POST /interactions/{id}/{token}/callback`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InteractionResponse {
    #[serde(rename = "type")]
    pub kind: u8,
    pub data: InteractionCallbackData,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InteractionCallbackData {
    pub content: String,
    pub flags: u64,
}

impl InteractionResponse {
    /// An ephemeral text reply.
    pub fn ephemeral(content: impl Into<String>) -> Self {
        Self {
            kind: CHANNEL_MESSAGE_WITH_SOURCE,
            data: InteractionCallbackData {
                content: content.into(),
                flags: EPHEMERAL,
            },
        }
    }
}
