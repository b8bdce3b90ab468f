//! Wellness toolkit screen: mood row, quick tools grid, milestones and the
//! daily reflection.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::breathing::TickScheduler;
use crate::models::QuickTool;
use crate::state::{ToolkitFocus, WellnessToolkit, TOOL_GRID_COLUMNS};

use super::layout::truncate_string;
use super::panels::render_milestones;
use super::theme::{
    COLOR_ACCENT, COLOR_BORDER, COLOR_BORDER_FOCUSED, COLOR_DIM, COLOR_HEADER,
    COLOR_SELECTED_BG,
};

pub const REFLECTION_PROMPT: &str = "What's one small thing you're grateful for today?";
pub const REFLECTION_PLACEHOLDER: &str = "Write your thoughts here...";

const TOOL_CELL_HEIGHT: u16 = 3;
const MILESTONES_HEIGHT: u16 = 5;

pub fn render_toolkit<S: TickScheduler>(frame: &mut Frame, area: Rect, app: &App<S>) {
    let toolkit = &app.toolkit;
    let tool_rows = QuickTool::ALL.len().div_ceil(TOOL_GRID_COLUMNS) as u16;
    let milestones_height = if app.config.show_milestones {
        MILESTONES_HEIGHT
    } else {
        0
    };

    let [moods, tools, milestones, reflection] = Layout::vertical([
        Constraint::Length(4),
        Constraint::Length(tool_rows * TOOL_CELL_HEIGHT + 2),
        Constraint::Length(milestones_height),
        Constraint::Min(5),
    ])
    .areas(area);

    render_moods(frame, moods, toolkit);
    render_tools(frame, tools, toolkit);
    if milestones_height > 0 {
        render_milestones(frame, milestones, &app.dashboard.weekly_summary);
    }
    render_reflection(frame, reflection, toolkit);
}

fn section(title: &str, focused: bool) -> Block<'static> {
    let border = if focused {
        COLOR_BORDER_FOCUSED
    } else {
        COLOR_BORDER
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .title(Span::styled(
            format!(" {} ", title),
            Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
        ))
}

fn render_moods<S: TickScheduler>(frame: &mut Frame, area: Rect, toolkit: &WellnessToolkit<S>) {
    let focused = toolkit.focus() == ToolkitFocus::Moods;
    let block = section("How are you feeling?", focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let moods = toolkit.moods();
    let mut spans = Vec::new();
    for (i, mood) in moods.options().iter().enumerate() {
        let mut style = Style::default().fg(COLOR_DIM);
        if moods.is_selected(*mood) {
            style = style.fg(COLOR_ACCENT).add_modifier(Modifier::BOLD);
        }
        if focused && i == moods.cursor() {
            style = style.bg(COLOR_SELECTED_BG);
        }
        let marker = if moods.is_selected(*mood) { "●" } else { " " };
        spans.push(Span::styled(
            format!(" {} {} {} ", marker, mood.emoji(), mood.label()),
            style,
        ));
        spans.push(Span::raw(" "));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), inner);
}

fn render_tools<S: TickScheduler>(frame: &mut Frame, area: Rect, toolkit: &WellnessToolkit<S>) {
    let focused = toolkit.focus() == ToolkitFocus::Tools;
    let block = section("Quick Tools", focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let cell_width = inner.width / TOOL_GRID_COLUMNS as u16;
    for (i, tool) in QuickTool::ALL.iter().enumerate() {
        let row = (i / TOOL_GRID_COLUMNS) as u16;
        let col = (i % TOOL_GRID_COLUMNS) as u16;
        let y = inner.y + row * TOOL_CELL_HEIGHT;
        if y + TOOL_CELL_HEIGHT > inner.y + inner.height {
            break;
        }
        let cell = Rect::new(
            inner.x + col * cell_width,
            y,
            cell_width,
            TOOL_CELL_HEIGHT,
        );
        let highlighted = focused && i == toolkit.tool_cursor();
        render_tool_cell(frame, cell, *tool, highlighted);
    }
}

fn render_tool_cell(frame: &mut Frame, area: Rect, tool: QuickTool, highlighted: bool) {
    let width = area.width.saturating_sub(2) as usize;
    let base = if highlighted {
        Style::default().bg(COLOR_SELECTED_BG)
    } else {
        Style::default()
    };

    let lines = vec![
        Line::from(vec![
            Span::styled(format!(" {} ", tool.icon()), base.fg(COLOR_ACCENT)),
            Span::styled(
                truncate_string(tool.title(), width.saturating_sub(3)),
                base.fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            format!("   {}", truncate_string(tool.description(), width.saturating_sub(3))),
            base.fg(COLOR_DIM),
        )),
    ];

    frame.render_widget(Paragraph::new(lines).style(base), area);
}

fn render_reflection<S: TickScheduler>(
    frame: &mut Frame,
    area: Rect,
    toolkit: &WellnessToolkit<S>,
) {
    let focused = toolkit.focus() == ToolkitFocus::Reflection;
    let block = section("Daily Reflection", focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height < 2 {
        return;
    }
    let [prompt, editor] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(1)]).areas(inner);

    frame.render_widget(
        Line::styled(REFLECTION_PROMPT, Style::default().fg(COLOR_DIM)),
        prompt,
    );

    let hint = if focused { " Esc to leave " } else { " Tab to write " };
    toolkit.reflection().render_with_title(
        editor,
        frame.buffer_mut(),
        hint,
        REFLECTION_PLACEHOLDER,
        focused,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::breathing::ManualTickScheduler;
    use crate::config::AppConfig;
    use crate::models::Mood;
    use ratatui::{backend::TestBackend, Terminal};
    use tokio::sync::mpsc;

    fn test_app(config: AppConfig) -> App<ManualTickScheduler> {
        let (tx, rx) = mpsc::unbounded_channel();
        App::with_scheduler(config, ManualTickScheduler::new(), tx, rx)
    }

    fn draw(app: &App<ManualTickScheduler>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal
            .draw(|f| render_toolkit(f, f.area(), app))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_toolkit_renders_sections() {
        let text = draw(&test_app(AppConfig::default()));
        for expected in [
            "How are you feeling?",
            "Calm",
            "Frustrated",
            "Quick Tools",
            "Breathing Exercise",
            "Challenge negative thoughts",
            "Personalize Dashboard",
            "Milestones",
            "Daily Reflection",
            "grateful for today?",
            REFLECTION_PLACEHOLDER,
        ] {
            assert!(text.contains(expected), "missing {:?}", expected);
        }
    }

    #[test]
    fn test_milestones_can_be_hidden() {
        let text = draw(&test_app(AppConfig::default().with_show_milestones(false)));
        assert!(!text.contains("Milestones"));
    }

    #[test]
    fn test_selected_mood_is_marked() {
        let mut app = test_app(AppConfig::default());
        app.toolkit.moods_mut().select(Mood::Sad);
        let text = draw(&app);
        assert_eq!(text.matches('●').count(), 1);
    }

    #[test]
    fn test_reflection_text_replaces_placeholder() {
        let mut app = test_app(AppConfig::default());
        app.toolkit.reflection_mut().insert_str("morning tea");
        let text = draw(&app);
        assert!(text.contains("morning tea"));
        assert!(!text.contains(REFLECTION_PLACEHOLDER));
    }
}
