//! Plain-text outline of a render plan.

use super::{PlanPreview, RenderPlan};
use crate::model::{Message, UserId};
use crate::preview::PreviewRow;
use std::collections::BTreeSet;

const INDENT: &str = "  ";

/// Render a plan as a multi-line outline, one line per row.
pub fn render_text(plan: &RenderPlan) -> String {
    let mut lines = vec![format!("drawer: {} | content: {}", plan.drawer, plan.content)];

    let (post, rows) = match &plan.preview {
        PlanPreview::Discussion(layout) => (Some(&layout.post), layout.rows.as_slice()),
        PlanPreview::Search(layout) => (layout.post.as_ref(), layout.rows.as_slice()),
    };

    match post {
        Some(post) => lines.push(message_line(post)),
        None => lines.push("(empty discussion)".to_string()),
    }
    lines.extend(rows.iter().map(|row| format!("{INDENT}{}", render_row(row))));

    lines.join("\n")
}

/// Render a single row without indentation.
pub fn render_row(row: &PreviewRow) -> String {
    match row {
        PreviewRow::Message { message } => message_line(message),
        PreviewRow::Mention { mention, message } => {
            format!("@ {} (mentioned by {})", message_line(message), mention.by_uid())
        }
        PreviewRow::MissingReplies {
            missing_replies,
            users,
        } => format!(
            "... {} {} from {}",
            missing_replies,
            if *missing_replies == 1 { "reply" } else { "replies" },
            join_users(users)
        ),
    }
}

fn message_line(message: &Message) -> String {
    format!("[{}] {}: {}", message.id(), message.user_id(), message.text())
}

fn join_users(users: &BTreeSet<UserId>) -> String {
    users
        .iter()
        .map(UserId::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
