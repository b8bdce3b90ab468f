//! UI rendering for Wellspring
//!
//! Frame layout:
//! - Header: screen tabs (Progress / Toolkit)
//! - Body: the active screen
//! - Status line: transient feedback
//! - Footer: keybind hints
//!
//! Overlays (settings panel, breathing modal) draw last. Rendering only reads
//! the [`App`]; all state changes happen in the handlers.

mod breathing;
mod dashboard;
mod layout;
mod panels;
mod theme;
mod toolkit;

pub use breathing::{circle_radius, phase_color, render_breathing_modal};
pub use dashboard::{area_fill, render_dashboard};
pub use layout::{breakpoints, centered_rect, truncate_string, LayoutContext};
pub use panels::{render_milestones, render_settings_panel};
pub use theme::{
    COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_HEADER, COLOR_PROGRESS, COLOR_PROGRESS_BG,
};
pub use toolkit::{render_toolkit, REFLECTION_PLACEHOLDER, REFLECTION_PROMPT};

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Tabs},
    Frame,
};

use crate::app::{App, Screen};
use crate::breathing::TickScheduler;
use crate::state::ToolkitFocus;

use theme::COLOR_MUTED;

// ============================================================================
// Main UI Rendering
// ============================================================================

/// Render the whole frame.
pub fn render<S: TickScheduler>(frame: &mut Frame, app: &App<S>) {
    let [header, body, status, footer] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    render_header(frame, header, app.screen);

    match app.screen {
        Screen::Dashboard => render_dashboard(frame, body, &app.dashboard),
        Screen::Toolkit => render_toolkit(frame, body, app),
    }

    render_status(frame, status, app);
    frame.render_widget(build_keybinds(app), footer);

    if app.settings_panel_open {
        render_settings_panel(frame, body, &app.config);
    }
    if app.toolkit.breathing().is_active() {
        render_breathing_modal(frame, frame.area(), app.toolkit.breathing(), app.tick_count);
    }
}

fn render_header(frame: &mut Frame, area: Rect, screen: Screen) {
    let titles = [Screen::Dashboard, Screen::Toolkit]
        .into_iter()
        .map(|s| format!("{} {}", s.index() + 1, s.title()));

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(COLOR_BORDER))
                .title(Span::styled(
                    " Wellspring ",
                    Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
                )),
        )
        .style(Style::default().fg(COLOR_DIM))
        .highlight_style(Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD))
        .select(screen.index());
    frame.render_widget(tabs, area);
}

fn render_status<S: TickScheduler>(frame: &mut Frame, area: Rect, app: &App<S>) {
    if let Some(status) = &app.status {
        let line = Line::from(vec![
            Span::styled(" ● ", Style::default().fg(COLOR_ACCENT)),
            Span::styled(
                truncate_string(&status.text, area.width.saturating_sub(3) as usize),
                Style::default().fg(COLOR_HEADER),
            ),
        ]);
        frame.render_widget(line, area);
    }
}

/// Keybind hints for the current context.
pub fn build_keybinds<S: TickScheduler>(app: &App<S>) -> Line<'static> {
    let key = Style::default().fg(COLOR_ACCENT);
    let text = Style::default().fg(COLOR_MUTED);

    let mut pairs: Vec<(&'static str, &'static str)> = Vec::new();
    if app.toolkit.breathing().is_active() {
        pairs.push(("Esc", "end exercise"));
    } else if app.settings_panel_open {
        pairs.push(("Esc", "close settings"));
        pairs.push(("q", "quit"));
    } else if app.screen == Screen::Toolkit && app.toolkit.focus() == ToolkitFocus::Reflection {
        pairs.push(("Esc", "stop writing"));
        pairs.push(("Tab", "next section"));
        pairs.push(("Ctrl+C", "quit"));
    } else {
        pairs.push(("1/2", "screens"));
        if app.screen == Screen::Toolkit {
            pairs.push(("Tab", "section"));
            pairs.push(("←→↑↓", "move"));
            pairs.push(("Enter", "select"));
        }
        pairs.push(("b", "breathe"));
        pairs.push(("s", "settings"));
        pairs.push(("q", "quit"));
    }

    let mut spans = vec![Span::raw(" ")];
    for (i, (k, label)) in pairs.into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", text));
        }
        spans.push(Span::styled(k, key));
        spans.push(Span::styled(format!(" {}", label), text));
    }
    Line::from(spans)
}
