//! Discussion preview layout engine (pure).
//!
//! Turns a discussion's ordered messages into a render plan: the root post,
//! then one row per reply that should be shown, with runs of uninteresting
//! replies collapsed into "missing replies" summary rows.
//!
//! Both entry points are single-pass over their input and never mutate it.

use crate::model::{Mention, Message, MessageId, PreviewError, UserId};
use serde::Serialize;
use std::collections::{BTreeSet, HashMap};
use tracing::trace;

/// Threads with at most this many messages (root included) are never compacted.
pub const CUTOFF: usize = 5;

// ===== Render plan types =====

/// One entry of a preview render plan.
///
/// Serialized with a `type` tag so JSON consumers can match on the variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PreviewRow {
    /// Reply shown on its own, not mentioned.
    Message {
        /// The shown reply.
        message: Message,
    },
    /// Reply shown on its own because a mention points at it.
    Mention {
        /// The mention that targets `message`.
        mention: Mention,
        /// The shown reply.
        message: Message,
    },
    /// Contiguous run of collapsed replies.
    MissingReplies {
        /// How many replies the run hides.
        missing_replies: usize,
        /// Distinct authors of the collapsed replies.
        users: BTreeSet<UserId>,
    },
}

impl PreviewRow {
    /// The individually shown message, if this row shows one.
    pub fn message(&self) -> Option<&Message> {
        match self {
            PreviewRow::Message { message } | PreviewRow::Mention { message, .. } => Some(message),
            PreviewRow::MissingReplies { .. } => None,
        }
    }

    /// Number of underlying replies this row stands for.
    pub fn represented_messages(&self) -> usize {
        match self {
            PreviewRow::Message { .. } | PreviewRow::Mention { .. } => 1,
            PreviewRow::MissingReplies {
                missing_replies, ..
            } => *missing_replies,
        }
    }
}

/// Render plan for a discussion preview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreviewLayout {
    /// Thread root, always shown.
    pub post: Message,
    /// Replies in chronological order.
    pub rows: Vec<PreviewRow>,
}

impl PreviewLayout {
    /// Total replies accounted for by `rows`.
    pub fn represented_replies(&self) -> usize {
        self.rows.iter().map(PreviewRow::represented_messages).sum()
    }
}

/// Render plan for a search result preview.
///
/// `post` is `None` only when the discussion had no messages at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchPreviewLayout {
    /// Thread root, if there is one.
    pub post: Option<Message>,
    /// Matching replies and the runs between them, in chronological order.
    pub rows: Vec<PreviewRow>,
}

impl SearchPreviewLayout {
    /// Total replies accounted for by `rows`.
    pub fn represented_replies(&self) -> usize {
        self.rows.iter().map(PreviewRow::represented_messages).sum()
    }
}

// ===== Bucket of collapsed replies =====

/// What to do with a bucket that holds exactly one reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SingleReply {
    /// Show it as a plain message row.
    Show,
    /// Still summarize it as one missing reply.
    Summarize,
}

/// Replies accumulated since the last visible row.
#[derive(Debug, Default)]
struct MissingReplies<'a> {
    buried: Vec<&'a Message>,
}

impl<'a> MissingReplies<'a> {
    fn push(&mut self, message: &'a Message) {
        self.buried.push(message);
    }

    /// Emit the accumulated run into `rows` and reset.
    fn flush_into(&mut self, rows: &mut Vec<PreviewRow>, single: SingleReply) {
        let buried = std::mem::take(&mut self.buried);
        match (buried.as_slice(), single) {
            ([], _) => {}
            ([only], SingleReply::Show) => rows.push(message_row(only)),
            (run, _) => rows.push(PreviewRow::MissingReplies {
                missing_replies: run.len(),
                users: run.iter().map(|m| m.user_id().clone()).collect(),
            }),
        }
    }
}

// ===== Entry points =====

/// Build the preview plan for a discussion.
///
/// `messages` is ordered oldest first and `messages[0]` is the root post.
/// Mentions whose `mid` is not in `messages` are ignored; when several
/// mentions share a `mid` the last one wins.
///
/// Threads of up to [`CUTOFF`] messages show every reply. Longer threads
/// collapse runs of unmentioned replies, always keeping the newest reply
/// visible and never summarizing a run of exactly one reply.
///
/// # Errors
///
/// Returns [`PreviewError::EmptyDiscussion`] when `messages` is empty.
pub fn get_preview_layout(
    messages: &[Message],
    mentions: &[Mention],
) -> Result<PreviewLayout, PreviewError> {
    let (post, replies) = messages
        .split_first()
        .ok_or(PreviewError::EmptyDiscussion)?;
    let lookup = mention_lookup(mentions);

    let rows = if messages.len() <= CUTOFF {
        replies.iter().map(|m| shown_row(m, &lookup)).collect()
    } else {
        compact_replies(replies, &lookup)
    };

    trace!(
        messages = messages.len(),
        mentions = mentions.len(),
        rows = rows.len(),
        "Computed preview layout"
    );

    Ok(PreviewLayout {
        post: post.clone(),
        rows,
    })
}

/// Build the preview plan for a search hit.
///
/// Replies whose text contains `search_text` (case-insensitive) are shown as
/// plain message rows; every other run of replies, including a run of one,
/// becomes a missing-replies row. Empty input yields an empty plan.
pub fn get_search_preview_layout(messages: &[Message], search_text: &str) -> SearchPreviewLayout {
    let Some((post, replies)) = messages.split_first() else {
        return SearchPreviewLayout::default();
    };

    let needle = search_text.to_lowercase();
    let mut rows = Vec::new();
    let mut bucket = MissingReplies::default();

    for message in replies {
        if message.text().to_lowercase().contains(&needle) {
            bucket.flush_into(&mut rows, SingleReply::Summarize);
            rows.push(message_row(message));
        } else {
            bucket.push(message);
        }
    }
    bucket.flush_into(&mut rows, SingleReply::Summarize);

    trace!(
        messages = messages.len(),
        rows = rows.len(),
        "Computed search preview layout"
    );

    SearchPreviewLayout {
        post: Some(post.clone()),
        rows,
    }
}

// ===== Helpers =====

fn mention_lookup(mentions: &[Mention]) -> HashMap<&MessageId, &Mention> {
    mentions.iter().map(|mention| (mention.mid(), mention)).collect()
}

fn message_row(message: &Message) -> PreviewRow {
    PreviewRow::Message {
        message: message.clone(),
    }
}

fn shown_row(message: &Message, lookup: &HashMap<&MessageId, &Mention>) -> PreviewRow {
    match lookup.get(message.id()) {
        Some(mention) => PreviewRow::Mention {
            mention: (*mention).clone(),
            message: message.clone(),
        },
        None => message_row(message),
    }
}

/// Compaction for long threads. `replies` excludes the root.
fn compact_replies(replies: &[Message], lookup: &HashMap<&MessageId, &Mention>) -> Vec<PreviewRow> {
    let Some((last, middle)) = replies.split_last() else {
        return Vec::new();
    };

    let mut rows = Vec::new();
    let mut bucket = MissingReplies::default();

    for message in middle {
        if lookup.contains_key(message.id()) {
            bucket.flush_into(&mut rows, SingleReply::Show);
            rows.push(shown_row(message, lookup));
        } else {
            bucket.push(message);
        }
    }
    bucket.flush_into(&mut rows, SingleReply::Show);

    // The newest reply is never buried.
    rows.push(shown_row(last, lookup));
    rows
}

#[cfg(test)]
#[path = "preview_tests.rs"]
mod tests;
