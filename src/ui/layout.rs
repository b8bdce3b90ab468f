//! Responsive layout helpers.
//!
//! `LayoutContext` wraps the frame size and answers the few layout questions
//! the screens ask: stack the two chart cards or place them side by side, and
//! how big a centered dialog should be.

use ratatui::layout::Rect;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Terminal width breakpoints for responsive layouts
pub mod breakpoints {
    /// Below this width the chart cards stack vertically.
    pub const STACK_WIDTH: u16 = 100;
    /// Below this height the dashboard drops the recommended list.
    pub const COMPACT_HEIGHT: u16 = 32;
}

#[derive(Debug, Clone, Copy)]
pub struct LayoutContext {
    pub width: u16,
    pub height: u16,
}

impl LayoutContext {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    pub fn from_rect(area: Rect) -> Self {
        Self::new(area.width, area.height)
    }

    /// Stack side-by-side cards vertically on narrow terminals.
    pub fn should_stack_panels(&self) -> bool {
        self.width < breakpoints::STACK_WIDTH
    }

    pub fn is_compact(&self) -> bool {
        self.height < breakpoints::COMPACT_HEIGHT
    }

    /// Width as a percentage of the terminal, clamped to `[min, max]`.
    pub fn bounded_width(&self, percentage: u16, min: u16, max: u16) -> u16 {
        let value = (self.width as u32 * percentage.min(100) as u32 / 100) as u16;
        value.clamp(min.min(self.width), max.min(self.width).max(min.min(self.width)))
    }
}

/// A `width` x `height` rect centered in `area`, shrunk to fit.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// Truncate to `max_width` display columns, adding an ellipsis when cut.
pub fn truncate_string(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > max_width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}
