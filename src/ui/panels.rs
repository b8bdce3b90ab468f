//! Side panels: personalization settings overlay and milestone celebration.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::config::AppConfig;
use crate::models::WeeklySummary;

use super::layout::{centered_rect, LayoutContext};
use super::theme::{
    COLOR_ACCENT, COLOR_BORDER, COLOR_BORDER_FOCUSED, COLOR_DIALOG_BG, COLOR_DIM, COLOR_HEADER,
    COLOR_MUTED,
};

const SETTINGS_HEIGHT: u16 = 11;

/// Read-only view of the effective configuration.
pub fn render_settings_panel(frame: &mut Frame, area: Rect, config: &AppConfig) {
    let ctx = LayoutContext::from_rect(area);
    let popup = centered_rect(ctx.bounded_width(50, 36, 60), SETTINGS_HEIGHT, area);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(COLOR_BORDER_FOCUSED))
        .style(Style::default().bg(COLOR_DIALOG_BG))
        .title(Span::styled(
            " Personalize Dashboard ",
            Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
        ));

    let breathing = &config.breathing;
    let config_path = AppConfig::default_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(none)".to_string());

    let lines = vec![
        setting_line("Breath tick", format!("{:.1}s", breathing.tick_interval().as_secs_f64())),
        setting_line("Breaths per exercise", breathing.total_breaths().to_string()),
        setting_line("Frame tick", format!("{}ms", config.frame_tick().as_millis())),
        setting_line(
            "Show milestones",
            if config.show_milestones { "yes" } else { "no" }.to_string(),
        ),
        Line::default(),
        Line::from(Span::styled("Config file", Style::default().fg(COLOR_DIM))),
        Line::from(Span::styled(config_path, Style::default().fg(COLOR_MUTED))),
        Line::default(),
        Line::from(Span::styled("Esc to close", Style::default().fg(COLOR_MUTED))),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), popup);
}

fn setting_line(label: &'static str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:<22}", label), Style::default().fg(COLOR_DIM)),
        Span::styled(
            value,
            Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
        ),
    ])
}

/// Celebrate the week so far.
pub fn render_milestones(frame: &mut Frame, area: Rect, summary: &WeeklySummary) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(Span::styled(
            " Milestones ",
            Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
        ));

    let lines = vec![
        Line::from(vec![
            Span::styled("★ ", Style::default().fg(COLOR_ACCENT)),
            Span::raw(format!("{} sessions completed this week", summary.sessions)),
        ]),
        Line::from(vec![
            Span::styled("★ ", Style::default().fg(COLOR_ACCENT)),
            Span::raw(format!(
                "{}% of your plan done, averaging {} minutes",
                summary.completion_percent, summary.average_minutes
            )),
        ]),
        Line::from(Span::styled(
            "Keep going, you're doing great.",
            Style::default().fg(COLOR_DIM),
        )),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
