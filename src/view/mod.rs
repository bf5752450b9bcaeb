//! Render plan assembly and output formatting.
//!
//! Combines the preview engine and the layout-mode classifiers into one
//! [`RenderPlan`], then formats it as plain text or JSON for the CLI.

mod text;

pub use text::{render_row, render_text};

use crate::layout_mode::{Breakpoints, ContentLayoutMode, DrawerLayoutMode};
use crate::model::PreviewError;
use crate::parser::Discussion;
use crate::preview::{
    get_preview_layout, get_search_preview_layout, PreviewLayout, SearchPreviewLayout,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// How the CLI prints a render plan.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable outline
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

impl OutputFormat {
    /// Parse a format name (case-insensitive). Returns `None` for unknown names.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.to_ascii_lowercase().as_str() {
            "text" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

/// Which preview to build and for what viewport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanRequest {
    /// When set, build a search preview for this text instead of the mention preview.
    pub search: Option<String>,
    /// Viewport width in logical pixels.
    pub width: u32,
    /// Whether an item is selected in the list.
    pub has_selection: bool,
    /// Whether the host is a mobile execution context.
    pub is_mobile: bool,
    /// Thresholds for the layout-mode classifiers.
    pub breakpoints: Breakpoints,
}

/// The preview half of a render plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PlanPreview {
    /// Mention-driven preview of the whole thread.
    Discussion(PreviewLayout),
    /// Preview of replies matching a search text.
    Search(SearchPreviewLayout),
}

impl PlanPreview {
    /// Replies accounted for by the preview rows.
    pub fn represented_replies(&self) -> usize {
        match self {
            PlanPreview::Discussion(layout) => layout.represented_replies(),
            PlanPreview::Search(layout) => layout.represented_replies(),
        }
    }
}

/// Everything a screen needs to draw a discussion preview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderPlan {
    /// Drawer arrangement for the viewport.
    pub drawer: DrawerLayoutMode,
    /// Content arrangement for the viewport.
    pub content: ContentLayoutMode,
    /// Rows to draw.
    pub preview: PlanPreview,
}

/// Build the render plan for a parsed discussion.
///
/// # Errors
///
/// Returns [`PreviewError::EmptyDiscussion`] when no search is requested and
/// the discussion has no messages. Search previews accept empty input.
pub fn build_plan(
    discussion: &Discussion,
    request: &PlanRequest,
) -> Result<RenderPlan, PreviewError> {
    let drawer = request
        .breakpoints
        .drawer_layout_mode(request.width, request.is_mobile);
    let content = request
        .breakpoints
        .content_layout_mode(request.width, request.has_selection);

    let preview = match &request.search {
        Some(search_text) => PlanPreview::Search(get_search_preview_layout(
            &discussion.messages,
            search_text,
        )),
        None => PlanPreview::Discussion(get_preview_layout(
            &discussion.messages,
            &discussion.mentions,
        )?),
    };

    debug!(
        %drawer,
        %content,
        replies = preview.represented_replies(),
        "Built render plan"
    );

    Ok(RenderPlan {
        drawer,
        content,
        preview,
    })
}

/// Serialize a plan as pretty JSON.
///
/// # Errors
///
/// Propagates `serde_json` serialization failures.
pub fn render_json(plan: &RenderPlan) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(plan)
}
