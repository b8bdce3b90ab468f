//! Breathing exercise modal.
//!
//! Drawn over whichever screen is active while the controller is running.
//! The circle grows during "Inhale" and shrinks during "Exhale", with a
//! small frame-driven pulse so the modal never looks frozen between ticks.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Circle},
        Block, Borders, Clear, Gauge, Paragraph,
    },
    Frame,
};

use crate::breathing::{BreathingController, Phase, TickScheduler};

use super::layout::centered_rect;
use super::theme::{
    COLOR_BORDER_FOCUSED, COLOR_DIALOG_BG, COLOR_EXHALE, COLOR_HEADER, COLOR_INHALE, COLOR_MUTED,
    COLOR_PROGRESS_BG,
};

const MODAL_WIDTH: u16 = 44;
const MODAL_HEIGHT: u16 = 20;

/// Canvas half-extent; the circle is drawn around the origin.
const CANVAS_BOUND: f64 = 10.0;
const INHALE_RADIUS: f64 = 8.0;
const EXHALE_RADIUS: f64 = 4.5;
/// Frame ticks per pulse cycle.
const PULSE_PERIOD: u64 = 60;
const PULSE_AMPLITUDE: f64 = 0.5;

pub fn phase_color(phase: Phase) -> Color {
    match phase {
        Phase::Inhale => COLOR_INHALE,
        Phase::Exhale => COLOR_EXHALE,
    }
}

/// Circle radius for `phase` at frame `tick_count`.
pub fn circle_radius(phase: Phase, tick_count: u64) -> f64 {
    let base = match phase {
        Phase::Inhale => INHALE_RADIUS,
        Phase::Exhale => EXHALE_RADIUS,
    };
    let t = (tick_count % PULSE_PERIOD) as f64 / PULSE_PERIOD as f64;
    base + PULSE_AMPLITUDE * (t * std::f64::consts::TAU).sin()
}

pub fn render_breathing_modal<S: TickScheduler>(
    frame: &mut Frame,
    area: Rect,
    breathing: &BreathingController<S>,
    tick_count: u64,
) {
    let popup = centered_rect(MODAL_WIDTH, MODAL_HEIGHT, area);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(COLOR_BORDER_FOCUSED))
        .style(Style::default().bg(COLOR_DIALOG_BG))
        .title(Span::styled(
            " Breathing Exercise ",
            Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
        ))
        .title_alignment(Alignment::Center);
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let [circle, phase, count, gauge, hint] = Layout::vertical([
        Constraint::Min(3),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(inner);

    let current = breathing.phase();
    let color = phase_color(current);
    let radius = circle_radius(current, tick_count);

    let canvas = Canvas::default()
        .marker(symbols::Marker::Braille)
        .x_bounds([-CANVAS_BOUND, CANVAS_BOUND])
        .y_bounds([-CANVAS_BOUND, CANVAS_BOUND])
        .background_color(COLOR_DIALOG_BG)
        .paint(move |ctx| {
            ctx.draw(&Circle {
                x: 0.0,
                y: 0.0,
                radius,
                color,
            });
        });
    frame.render_widget(canvas, circle);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            current.label(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center),
        phase,
    );

    frame.render_widget(
        Paragraph::new(format!(
            "Breath {} of {}",
            breathing.breath_number(),
            breathing.total_breaths()
        ))
        .style(Style::default().fg(COLOR_HEADER))
        .alignment(Alignment::Center),
        count,
    );

    let gauge_area = Rect {
        x: gauge.x + 2,
        width: gauge.width.saturating_sub(4),
        ..gauge
    };
    frame.render_widget(
        Gauge::default()
            .gauge_style(Style::default().fg(color).bg(COLOR_PROGRESS_BG))
            .ratio(breathing.progress().clamp(0.0, 1.0))
            .label(""),
        gauge_area,
    );

    frame.render_widget(
        Paragraph::new("Esc to end")
            .style(Style::default().fg(COLOR_MUTED))
            .alignment(Alignment::Center),
        hint,
    );
}
