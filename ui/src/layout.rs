//! Responsive layout selection.
//!
//! Components pick exactly one presentation per render from the measured
//! viewport width instead of mounting both and hiding one with CSS.

/// Width at which the site header switches to its desktop presentation.
pub const HEADER_DESKTOP_MIN_WIDTH: f64 = 1200.0;

/// Width at which the stake overview panel switches to its desktop presentation.
pub const PANEL_DESKTOP_MIN_WIDTH: f64 = 768.0;

#[derive(Clone, Copy, PartialEq, Eq, Debug, strum::EnumIs)]
pub enum Layout {
    Desktop,
    Mobile,
}

impl Layout {
    /// `Desktop` when `width` reaches `desktop_min_width`, `Mobile` below it.
    pub fn select(width: f64, desktop_min_width: f64) -> Self {
        if width >= desktop_min_width {
            Self::Desktop
        } else {
            Self::Mobile
        }
    }
}
