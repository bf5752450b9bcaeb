//! JSONL parser for discussion records.
//!
//! This module provides pure parsing functions for converting JSONL lines
//! into validated messages and mentions. One record per line:
//!
//! ```text
//! {"type":"message","id":"m1","user_id":"u1","text":"hello"}
//! {"type":"mention","mid":"m1","by_uid":"u2"}
//! ```

use crate::model::{MalformedRecord, Mention, Message, MessageId, ParseError, UserId};
use serde::Deserialize;
use tracing::warn;

// Record type string constants
const RECORD_TYPE_MESSAGE: &str = "message";
const RECORD_TYPE_MENTION: &str = "mention";

/// Raw JSON structure for deserializing records of either type.
#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(rename = "type")]
    record_type: String,
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    user_id: Option<String>,
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    mid: Option<String>,
    #[serde(default)]
    by_uid: Option<String>,
}

/// A successfully parsed discussion record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    /// A `"type":"message"` line.
    Message(Message),
    /// A `"type":"mention"` line.
    Mention(Mention),
}

/// Outcome of parsing one line without failing the whole input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseResult {
    /// The line parsed cleanly.
    Valid(Record),
    /// The line was kept for reporting.
    Malformed(MalformedRecord),
}

/// Everything read from a discussion input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Discussion {
    /// Messages in input order; the first is the root post.
    pub messages: Vec<Message>,
    /// Mentions in input order.
    pub mentions: Vec<Mention>,
    /// Lines that could not be parsed.
    pub malformed: Vec<MalformedRecord>,
}

/// Parse a whole JSONL discussion.
///
/// Blank lines are skipped. Malformed lines are collected and logged, never fatal.
pub fn parse_discussion(input: &str) -> Discussion {
    let mut discussion = Discussion::default();

    for (index, line) in input.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        match parse_record_graceful(line, index + 1) {
            ParseResult::Valid(Record::Message(message)) => discussion.messages.push(message),
            ParseResult::Valid(Record::Mention(mention)) => discussion.mentions.push(mention),
            ParseResult::Malformed(malformed) => {
                warn!(
                    line = malformed.line_number(),
                    error = malformed.error_message(),
                    "Skipping malformed discussion record"
                );
                discussion.malformed.push(malformed);
            }
        }
    }

    discussion
}

/// Parse a line, turning failures into a [`MalformedRecord`].
pub fn parse_record_graceful(raw: &str, line_number: usize) -> ParseResult {
    match parse_record(raw, line_number) {
        Ok(record) => ParseResult::Valid(record),
        Err(parse_error) => ParseResult::Malformed(MalformedRecord::new(
            line_number,
            raw,
            parse_error.to_string(),
        )),
    }
}

/// Parse a single JSONL line into a record.
///
/// # Errors
///
/// Returns `ParseError` for invalid JSON, an unknown `type`, a missing
/// required field, or an empty identifier.
pub fn parse_record(raw: &str, line_number: usize) -> Result<Record, ParseError> {
    let raw_record: RawRecord =
        serde_json::from_str(raw).map_err(|e| ParseError::InvalidJson {
            line: line_number,
            message: e.to_string(),
        })?;

    match raw_record.record_type.as_str() {
        RECORD_TYPE_MESSAGE => {
            let id = parse_message_id(raw_record.id, "id", line_number)?;
            let user_id = parse_user_id(raw_record.user_id, "user_id", line_number)?;
            let text = raw_record.text.unwrap_or_default();
            Ok(Record::Message(Message::new(id, user_id, text)))
        }
        RECORD_TYPE_MENTION => {
            let mid = parse_message_id(raw_record.mid, "mid", line_number)?;
            let by_uid = parse_user_id(raw_record.by_uid, "by_uid", line_number)?;
            Ok(Record::Mention(Mention::new(mid, by_uid)))
        }
        other => Err(ParseError::UnknownRecordType {
            line: line_number,
            kind: other.to_string(),
        }),
    }
}

fn parse_message_id(
    raw: Option<String>,
    field: &'static str,
    line: usize,
) -> Result<MessageId, ParseError> {
    let raw = raw.ok_or(ParseError::MissingField { line, field })?;
    MessageId::new(raw).map_err(|_| ParseError::InvalidIdentifier { line, field })
}

fn parse_user_id(
    raw: Option<String>,
    field: &'static str,
    line: usize,
) -> Result<UserId, ParseError> {
    let raw = raw.ok_or(ParseError::MissingField { line, field })?;
    UserId::new(raw).map_err(|_| ParseError::InvalidIdentifier { line, field })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_message_record() {
        let raw = r#"{"type":"message","id":"m1","user_id":"u1","text":"hello"}"#;
        let record = parse_record(raw, 1).unwrap();

        let expected = Message::new(
            MessageId::new("m1").unwrap(),
            UserId::new("u1").unwrap(),
            "hello",
        );
        assert_eq!(record, Record::Message(expected));
    }

    #[test]
    fn parses_mention_record() {
        let raw = r#"{"type":"mention","mid":"m1","by_uid":"u2"}"#;
        let record = parse_record(raw, 1).unwrap();

        let expected = Mention::new(MessageId::new("m1").unwrap(), UserId::new("u2").unwrap());
        assert_eq!(record, Record::Mention(expected));
    }

    #[test]
    fn missing_text_defaults_to_empty() {
        let raw = r#"{"type":"message","id":"m1","user_id":"u1"}"#;
        match parse_record(raw, 1).unwrap() {
            Record::Message(message) => assert_eq!(message.text(), ""),
            other => panic!("Expected message, got {:?}", other),
        }
    }

    #[test]
    fn invalid_json_reports_line() {
        let result = parse_record("{not json", 4);
        assert!(matches!(result, Err(ParseError::InvalidJson { line: 4, .. })));
    }

    #[test]
    fn unknown_type_is_rejected() {
        let result = parse_record(r#"{"type":"reaction","mid":"m1"}"#, 2);
        assert_eq!(
            result,
            Err(ParseError::UnknownRecordType {
                line: 2,
                kind: "reaction".to_string(),
            })
        );
    }

    #[test]
    fn missing_author_is_rejected() {
        let result = parse_record(r#"{"type":"message","id":"m1","text":"x"}"#, 5);
        assert_eq!(
            result,
            Err(ParseError::MissingField {
                line: 5,
                field: "user_id",
            })
        );
    }

    #[test]
    fn empty_mention_target_is_rejected() {
        let result = parse_record(r#"{"type":"mention","mid":"","by_uid":"u1"}"#, 3);
        assert_eq!(
            result,
            Err(ParseError::InvalidIdentifier {
                line: 3,
                field: "mid",
            })
        );
    }

    #[test]
    fn graceful_parse_keeps_raw_line() {
        match parse_record_graceful("garbage", 9) {
            ParseResult::Malformed(record) => {
                assert_eq!(record.line_number(), 9);
                assert_eq!(record.raw_line(), "garbage");
                assert!(record.error_message().contains("line 9"));
            }
            other => panic!("Expected malformed record, got {:?}", other),
        }
    }

    #[test]
    fn discussion_keeps_order_and_skips_bad_lines() {
        let input = r#"{"type":"message","id":"post","user_id":"u0","text":"root"}

{"type":"message","id":"m1","user_id":"u1","text":"first"}
this is not json
{"type":"mention","mid":"m1","by_uid":"u0"}
{"type":"message","id":"m2","user_id":"u2","text":"second"}
"#;
        let discussion = parse_discussion(input);

        let ids: Vec<&str> = discussion
            .messages
            .iter()
            .map(|m| m.id().as_str())
            .collect();
        assert_eq!(ids, vec!["post", "m1", "m2"]);
        assert_eq!(discussion.mentions.len(), 1);
        assert_eq!(discussion.malformed.len(), 1);
        assert_eq!(discussion.malformed[0].line_number(), 4);
    }

    #[test]
    fn empty_input_yields_empty_discussion() {
        assert_eq!(parse_discussion(""), Discussion::default());
    }
}
