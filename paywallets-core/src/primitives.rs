//! Request and response objects exchanged with the payments backend.
//! Field names follow the backend's wire format, including its `plataform` spelling.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use serde_with::skip_serializing_none;

/// A payment account as returned by `wallets/by-plataform`.
///
/// Only `id` and `name` are required. Every other field the backend sends is
/// kept in `extra` so callers can read it without this crate knowing the schema.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Wallet {
    pub id: i64,
    pub name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Wallet {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            extra: Map::new(),
        }
    }

    pub fn field(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PostWalletsByPlatformRequest {
    #[serde(rename = "plataformId")]
    pub platform_id: i64,
    pub token: String,
}

/// Body the backend sends along with a non-success status.
///
/// `message` is either a single string or a list of validation messages.
#[skip_serializing_none]
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ApiErrorResponse {
    #[serde(rename = "statusCode")]
    pub status_code: Option<u16>,
    pub message: Option<ErrorMessage>,
    pub error: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum ErrorMessage {
    Single(String),
    Many(Vec<String>),
}

impl ApiErrorResponse {
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: Some(ErrorMessage::Single(message.into())),
            ..Default::default()
        }
    }

    /// The message text, or `None` when the body carries no usable message.
    pub fn message_text(&self) -> Option<String> {
        let text = match self.message.as_ref()? {
            ErrorMessage::Single(msg) => msg.clone(),
            ErrorMessage::Many(msgs) => msgs.join(", "),
        };
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }
}
