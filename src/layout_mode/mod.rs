//! Responsive layout-mode classification (pure).
//!
//! Maps viewport width plus a little UI state to a discrete arrangement.
//! Screens recompute these on resize and on selection change; that wiring
//! lives with the host, not here.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Below this width the drawer slides over content.
pub const PERMANENT_DRAWER_MIN_WIDTH: u32 = 700;

/// At or below this width a selected item gets the narrow arrangement.
pub const NARROW_MAX_WIDTH: u32 = 900;

// ===== Modes =====

/// How the navigation drawer is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DrawerLayoutMode {
    /// Drawer is hidden and slides over the content on demand.
    SlideDrawer,
    /// Drawer stays docked beside the content.
    PermanentDrawer,
}

impl DrawerLayoutMode {
    /// Wire name, as serialized.
    pub fn as_str(&self) -> &'static str {
        match self {
            DrawerLayoutMode::SlideDrawer => "SLIDE_DRAWER",
            DrawerLayoutMode::PermanentDrawer => "PERMANENT_DRAWER",
        }
    }
}

impl fmt::Display for DrawerLayoutMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How list and detail content share the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContentLayoutMode {
    /// A selected item takes the whole content area.
    Narrow,
    /// List and selected item side by side.
    Normal,
    /// Nothing selected; list only.
    Compact,
}

impl ContentLayoutMode {
    /// Wire name, as serialized.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentLayoutMode::Narrow => "NARROW",
            ContentLayoutMode::Normal => "NORMAL",
            ContentLayoutMode::Compact => "COMPACT",
        }
    }
}

impl fmt::Display for ContentLayoutMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ===== Breakpoints =====

/// Width thresholds used by the classifiers.
///
/// Defaults match [`PERMANENT_DRAWER_MIN_WIDTH`] and [`NARROW_MAX_WIDTH`];
/// deployments may override them through the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breakpoints {
    /// Smallest width that keeps the drawer permanently open (inclusive).
    pub permanent_drawer_min_width: u32,
    /// Largest width that still uses the narrow arrangement (inclusive).
    pub narrow_max_width: u32,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            permanent_drawer_min_width: PERMANENT_DRAWER_MIN_WIDTH,
            narrow_max_width: NARROW_MAX_WIDTH,
        }
    }
}

impl Breakpoints {
    /// Mobile contexts always slide; otherwise the drawer is permanent from
    /// `permanent_drawer_min_width` up.
    pub fn drawer_layout_mode(&self, width: u32, is_mobile: bool) -> DrawerLayoutMode {
        if is_mobile || width < self.permanent_drawer_min_width {
            DrawerLayoutMode::SlideDrawer
        } else {
            DrawerLayoutMode::PermanentDrawer
        }
    }

    /// Without a selection the layout is always compact.
    pub fn content_layout_mode(&self, width: u32, has_selection: bool) -> ContentLayoutMode {
        if width <= self.narrow_max_width && has_selection {
            ContentLayoutMode::Narrow
        } else if !has_selection {
            ContentLayoutMode::Compact
        } else {
            ContentLayoutMode::Normal
        }
    }
}

/// Classify the drawer arrangement with default breakpoints.
pub fn get_drawer_layout_mode(width: u32, is_mobile: bool) -> DrawerLayoutMode {
    Breakpoints::default().drawer_layout_mode(width, is_mobile)
}

/// Classify the content arrangement with default breakpoints.
pub fn get_content_layout_mode(width: u32, has_selection: bool) -> ContentLayoutMode {
    Breakpoints::default().content_layout_mode(width, has_selection)
}

// ===== Window size =====

/// Host-supplied source of the current viewport width.
pub trait WindowSizeProvider {
    /// Width in logical pixels.
    fn window_width(&self) -> u32;
}

/// Provider with a fixed width, for CLI use and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedWindow(pub u32);

impl WindowSizeProvider for FixedWindow {
    fn window_width(&self) -> u32 {
        self.0
    }
}

/// Current viewport width as reported by the host.
pub fn get_window_width(provider: &impl WindowSizeProvider) -> u32 {
    provider.window_width()
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== Drawer =====

    #[test]
    fn drawer_slides_below_700() {
        assert_eq!(get_drawer_layout_mode(0, false), DrawerLayoutMode::SlideDrawer);
        assert_eq!(get_drawer_layout_mode(699, false), DrawerLayoutMode::SlideDrawer);
    }

    #[test]
    fn drawer_is_permanent_at_700() {
        assert_eq!(
            get_drawer_layout_mode(700, false),
            DrawerLayoutMode::PermanentDrawer
        );
        assert_eq!(
            get_drawer_layout_mode(1920, false),
            DrawerLayoutMode::PermanentDrawer
        );
    }

    #[test]
    fn drawer_always_slides_on_mobile() {
        assert_eq!(get_drawer_layout_mode(700, true), DrawerLayoutMode::SlideDrawer);
        assert_eq!(get_drawer_layout_mode(4000, true), DrawerLayoutMode::SlideDrawer);
    }

    // ===== Content =====

    #[test]
    fn content_boundary_at_900() {
        assert_eq!(get_content_layout_mode(900, true), ContentLayoutMode::Narrow);
        assert_eq!(get_content_layout_mode(901, true), ContentLayoutMode::Normal);
    }

    #[test]
    fn content_without_selection_is_compact() {
        assert_eq!(get_content_layout_mode(500, false), ContentLayoutMode::Compact);
        assert_eq!(get_content_layout_mode(1200, false), ContentLayoutMode::Compact);
    }

    #[test]
    fn custom_breakpoints_shift_thresholds() {
        let breakpoints = Breakpoints {
            permanent_drawer_min_width: 1000,
            narrow_max_width: 1200,
        };
        assert_eq!(
            breakpoints.drawer_layout_mode(999, false),
            DrawerLayoutMode::SlideDrawer
        );
        assert_eq!(
            breakpoints.content_layout_mode(1100, true),
            ContentLayoutMode::Narrow
        );
    }

    // ===== Formatting =====

    #[test]
    fn modes_serialize_as_screaming_snake_case() {
        assert_eq!(
            serde_json::to_string(&DrawerLayoutMode::PermanentDrawer).unwrap(),
            r#""PERMANENT_DRAWER""#
        );
        assert_eq!(
            serde_json::to_string(&ContentLayoutMode::Narrow).unwrap(),
            r#""NARROW""#
        );
    }

    #[test]
    fn display_matches_serialized_name() {
        assert_eq!(DrawerLayoutMode::SlideDrawer.to_string(), "SLIDE_DRAWER");
        assert_eq!(ContentLayoutMode::Compact.to_string(), "COMPACT");
    }

    #[test]
    fn window_width_passes_through_provider() {
        assert_eq!(get_window_width(&FixedWindow(1280)), 1280);
    }
}
