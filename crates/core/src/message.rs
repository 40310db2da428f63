//! Request body for sending a formatted message.
//!
//! The rendered MarkdownV2 string leaves this crate inside a [`SendMessage`]
//! payload. Delivering it is up to the caller's HTTP client.

use crate::error::MarkupError;
use serde::{Deserialize, Serialize};

/// Markup dialect declared on the outgoing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ParseMode {
    /// Telegram MarkdownV2.
    #[default]
    MarkdownV2,
}

/// Target chat: numeric id or `@username`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChatId {
    /// Numeric chat id.
    Id(i64),
    /// Public username, including the leading `@`.
    Username(String),
}

impl From<i64> for ChatId {
    fn from(id: i64) -> Self {
        ChatId::Id(id)
    }
}

impl From<&str> for ChatId {
    fn from(username: &str) -> Self {
        ChatId::Username(username.to_string())
    }
}

impl From<String> for ChatId {
    fn from(username: String) -> Self {
        ChatId::Username(username)
    }
}

/// Caller-side settings applied to every outgoing payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MessageOptions {
    /// Dialect declared on the message.
    pub parse_mode: ParseMode,
    /// Suppress link previews.
    pub disable_web_page_preview: bool,
}

impl Default for MessageOptions {
    fn default() -> Self {
        Self {
            parse_mode: ParseMode::MarkdownV2,
            disable_web_page_preview: true,
        }
    }
}

/// "Send formatted message" request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SendMessage {
    /// Destination chat.
    pub chat_id: ChatId,
    /// Rendered MarkdownV2 text.
    pub text: String,
    /// Dialect the text is written in.
    pub parse_mode: ParseMode,
    /// Suppress link previews.
    pub disable_web_page_preview: bool,
}

impl SendMessage {
    /// Payload with default [`MessageOptions`].
    pub fn new(chat_id: impl Into<ChatId>, text: impl Into<String>) -> Self {
        Self::with_options(chat_id, text, &MessageOptions::default())
    }

    /// Payload with explicit options.
    pub fn with_options(
        chat_id: impl Into<ChatId>,
        text: impl Into<String>,
        options: &MessageOptions,
    ) -> Self {
        Self {
            chat_id: chat_id.into(),
            text: text.into(),
            parse_mode: options.parse_mode,
            disable_web_page_preview: options.disable_web_page_preview,
        }
    }

    /// Encodes the payload as a JSON request body.
    pub fn to_json(&self) -> Result<String, MarkupError> {
        let body = serde_json::to_string(self)?;
        log::debug!(
            "encoded send-message payload ({} bytes of text, {} bytes total)",
            self.text.len(),
            body.len()
        );
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::md;

    #[test]
    fn default_options() {
        let options = MessageOptions::default();
        assert_eq!(options.parse_mode, ParseMode::MarkdownV2);
        assert!(options.disable_web_page_preview);
    }

    #[test]
    fn options_from_partial_json() {
        let options: MessageOptions =
            serde_json::from_str(r#"{ "disable_web_page_preview": false }"#).unwrap();
        assert_eq!(options.parse_mode, ParseMode::MarkdownV2);
        assert!(!options.disable_web_page_preview);
    }

    #[test]
    fn payload_json() {
        let payload = SendMessage::new(42, md::bold("Hello, integration!"));
        let json: serde_json::Value = serde_json::from_str(&payload.to_json().unwrap()).unwrap();
        assert_eq!(json["chat_id"], 42);
        assert_eq!(json["text"], r"*Hello, integration\!*");
        assert_eq!(json["parse_mode"], "MarkdownV2");
        assert_eq!(json["disable_web_page_preview"], true);
    }

    #[test]
    fn username_chat_id() {
        let options = MessageOptions {
            disable_web_page_preview: false,
            ..MessageOptions::default()
        };
        let payload = SendMessage::with_options("@channel", "hi", &options);
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["chat_id"], "@channel");
        assert_eq!(json["disable_web_page_preview"], false);
    }
}
