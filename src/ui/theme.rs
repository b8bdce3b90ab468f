//! Color theme constants for the Wellspring UI
//!
//! Calm dark palette with a single teal accent.

use ratatui::style::Color;

// ============================================================================
// Base Colors
// ============================================================================

/// Primary accent - teal #14B8A6
pub const COLOR_ACCENT: Color = Color::Rgb(20, 184, 166);

/// Border color for cards
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Border color for the focused section
pub const COLOR_BORDER_FOCUSED: Color = Color::Rgb(20, 184, 166);

/// Heading text
pub const COLOR_HEADER: Color = Color::White;

/// Secondary text (dates, categories, descriptions)
pub const COLOR_DIM: Color = Color::Gray;

/// Muted text (placeholders, hints)
pub const COLOR_MUTED: Color = Color::DarkGray;

// ============================================================================
// Charts & Progress
// ============================================================================

/// Treatment progress series
pub const COLOR_PROGRESS: Color = Color::Rgb(20, 184, 166);

/// Weekly wellness series
pub const COLOR_WELLNESS: Color = Color::Rgb(94, 234, 212);

/// Unfilled part of progress gauges
pub const COLOR_PROGRESS_BG: Color = Color::Rgb(40, 44, 52);

// ============================================================================
// Selection & Dialogs
// ============================================================================

/// Background of the selected mood / tool
pub const COLOR_SELECTED_BG: Color = Color::Rgb(17, 60, 56);

/// Background for modal dialogs (breathing, settings)
pub const COLOR_DIALOG_BG: Color = Color::Rgb(12, 20, 28);

/// Inhale phase color
pub const COLOR_INHALE: Color = Color::Rgb(94, 234, 212);

/// Exhale phase color
pub const COLOR_EXHALE: Color = Color::Rgb(129, 140, 248);
