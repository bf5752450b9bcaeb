//! Message and mention domain types.

use super::identifiers::{MessageId, UserId};
use serde::{Deserialize, Serialize};

// ===== Message =====

/// A single entry in a discussion thread.
///
/// Chronological position is implicit: callers hold messages in a slice
/// ordered oldest first, and the first element is the thread root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Unique within the discussion
    id: MessageId,
    /// Author
    user_id: UserId,
    /// Body text
    text: String,
}

impl Message {
    /// Create a new message.
    pub fn new(id: MessageId, user_id: UserId, text: impl Into<String>) -> Self {
        Self {
            id,
            user_id,
            text: text.into(),
        }
    }

    /// Message identifier.
    pub fn id(&self) -> &MessageId {
        &self.id
    }

    /// Author of the message.
    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    /// Body text, possibly empty.
    pub fn text(&self) -> &str {
        &self.text
    }
}

// ===== Mention =====

/// Marks a message as individually significant.
///
/// Produced when the viewing user was tagged in the message, or when the
/// message was otherwise highlighted by the data source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mention {
    /// The highlighted message
    mid: MessageId,
    /// Actor that produced the mention
    by_uid: UserId,
}

impl Mention {
    /// Create a mention of `mid` made by `by_uid`.
    pub fn new(mid: MessageId, by_uid: UserId) -> Self {
        Self { mid, by_uid }
    }

    /// ID of the highlighted message.
    pub fn mid(&self) -> &MessageId {
        &self.mid
    }

    /// User that produced the mention.
    pub fn by_uid(&self) -> &UserId {
        &self.by_uid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mid(s: &str) -> MessageId {
        MessageId::new(s).unwrap()
    }

    fn uid(s: &str) -> UserId {
        UserId::new(s).unwrap()
    }

    #[test]
    fn message_accessors_return_constructor_values() {
        let msg = Message::new(mid("m1"), uid("u1"), "hello");
        assert_eq!(msg.id().as_str(), "m1");
        assert_eq!(msg.user_id().as_str(), "u1");
        assert_eq!(msg.text(), "hello");
    }

    #[test]
    fn message_deserializes_from_snake_case_json() {
        let json = r#"{"id":"m1","user_id":"u1","text":"hi"}"#;
        let msg: Message = serde_json::from_str(json).unwrap();
        assert_eq!(msg, Message::new(mid("m1"), uid("u1"), "hi"));
    }

    #[test]
    fn message_rejects_empty_author() {
        let json = r#"{"id":"m1","user_id":"","text":"hi"}"#;
        let result: Result<Message, _> = serde_json::from_str(json);
        assert!(result.is_err(), "Empty user_id should be rejected");
    }

    #[test]
    fn mention_serializes_mid_and_by_uid() {
        let mention = Mention::new(mid("m3"), uid("u9"));
        let json = serde_json::to_string(&mention).unwrap();
        assert_eq!(json, r#"{"mid":"m3","by_uid":"u9"}"#);
    }
}
