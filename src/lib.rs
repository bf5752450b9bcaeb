//! Discussion preview layout (dprev)
//!
//! Computes compact preview render plans for chat discussion threads and
//! classifies responsive layout modes from viewport width.
//!
//! Pure core: [`model`], [`preview`], [`layout_mode`], [`parser`], [`view`].
//! Impure shell: [`source`], [`config`], [`logging`], [`error`] and the `dprev` binary.

pub mod config;
pub mod error;
pub mod layout_mode;
pub mod logging;
pub mod model;
pub mod parser;
pub mod preview;
pub mod source;
pub mod view;

pub use layout_mode::{
    get_content_layout_mode, get_drawer_layout_mode, get_window_width, ContentLayoutMode,
    DrawerLayoutMode,
};
pub use preview::{get_preview_layout, get_search_preview_layout, PreviewLayout, PreviewRow};
