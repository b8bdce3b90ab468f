//! Progress dashboard screen.
//!
//! ## Layout
//!
//! ```text
//! Welcome Back
//! Continue your healing journey
//! +-- Treatment Progress --+ +-- Weekly Wellness Score --+
//! |  area chart            | |  line chart 0..100        |
//! +------------------------+ +---------------------------+
//! +-- Weekly Progress ---------------------------------------+
//! |      3 Sessions      85% Completion      45m Avg. Time   |
//! +----------------------------------------------------------+
//! +-- Recent Sessions ---------------------------------------+
//! | Anxiety Management                               45 min  |
//! | March 15, 2024                             85% Complete  |
//! | ██████████████████████████████████████░░░░░░░            |
//! +----------------------------------------------------------+
//! +-- Recommended for You -----------------------------------+
//! | Understand Your Treatment                   12 min read  |
//! | Treatment Guide                                          |
//! +----------------------------------------------------------+
//! ```
//!
//! Everything here is a pure function of [`DashboardData`].

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Block, Borders, Chart, Dataset, Gauge, GraphType, Paragraph},
    Frame,
};

use crate::models::{series_coords, DashboardData, TimeSeriesPoint};

use super::layout::{truncate_string, LayoutContext};
use super::theme::{
    COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_HEADER, COLOR_PROGRESS, COLOR_PROGRESS_BG,
    COLOR_SELECTED_BG, COLOR_WELLNESS,
};

/// Interpolated samples between two chart points for the area fill.
const AREA_FILL_STEPS: usize = 24;

/// Rows per session entry (title, subtitle, gauge).
const SESSION_ROWS: u16 = 3;

/// Rows per recommended entry (title, category).
const RECOMMENDED_ROWS: u16 = 2;

pub fn render_dashboard(frame: &mut Frame, area: Rect, data: &DashboardData) {
    let ctx = LayoutContext::from_rect(area);
    let chart_height = if ctx.should_stack_panels() { 20 } else { 12 };
    let sessions_height = data.recent_sessions.len() as u16 * SESSION_ROWS + 2;
    let recommended_height = if ctx.is_compact() {
        0
    } else {
        data.recommended.len() as u16 * RECOMMENDED_ROWS + 2
    };

    let [welcome, charts, summary, sessions, recommended] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(chart_height),
        Constraint::Length(4),
        Constraint::Length(sessions_height),
        Constraint::Length(recommended_height),
    ])
    .areas(area);

    render_welcome(frame, welcome);
    render_charts(frame, charts, data, &ctx);
    render_weekly_summary(frame, summary, data);
    render_sessions(frame, sessions, data);
    if recommended_height > 0 {
        render_recommended(frame, recommended, data);
    }
}

fn card(title: &str) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(Span::styled(
            format!(" {} ", title),
            Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
        ))
}

fn render_welcome(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "Welcome Back",
            Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Continue your healing journey",
            Style::default().fg(COLOR_DIM),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

// ============================================================================
// Charts
// ============================================================================

fn render_charts(frame: &mut Frame, area: Rect, data: &DashboardData, ctx: &LayoutContext) {
    let [progress_area, wellness_area]: [Rect; 2] = if ctx.should_stack_panels() {
        Layout::vertical([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(area)
    } else {
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(area)
    };

    render_progress_chart(frame, progress_area, &data.treatment_progress);
    render_wellness_chart(frame, wellness_area, &data.wellness_scores);
}

/// Treatment progress as a filled area under a line.
fn render_progress_chart(frame: &mut Frame, area: Rect, points: &[TimeSeriesPoint]) {
    let line = series_coords(points);
    let fill = area_fill(&line, AREA_FILL_STEPS);

    let datasets = vec![
        Dataset::default()
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Bar)
            .style(Style::default().fg(COLOR_SELECTED_BG))
            .data(&fill),
        Dataset::default()
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(COLOR_PROGRESS))
            .data(&line),
    ];

    let chart = Chart::new(datasets)
        .block(card("Treatment Progress"))
        .x_axis(x_axis(points))
        .y_axis(y_axis());
    frame.render_widget(chart, area);
}

fn render_wellness_chart(frame: &mut Frame, area: Rect, points: &[TimeSeriesPoint]) {
    let line = series_coords(points);

    let datasets = vec![
        Dataset::default()
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(COLOR_WELLNESS))
            .data(&line),
        Dataset::default()
            .marker(symbols::Marker::Dot)
            .graph_type(GraphType::Scatter)
            .style(Style::default().fg(COLOR_ACCENT))
            .data(&line),
    ];

    let chart = Chart::new(datasets)
        .block(card("Weekly Wellness Score"))
        .x_axis(x_axis(points))
        .y_axis(y_axis());
    frame.render_widget(chart, area);
}

fn x_axis(points: &[TimeSeriesPoint]) -> Axis<'static> {
    let max_x = points.len().saturating_sub(1).max(1) as f64;
    Axis::default()
        .style(Style::default().fg(COLOR_DIM))
        .bounds([0.0, max_x])
        .labels(points.iter().map(|p| p.x_label.clone()).collect::<Vec<_>>())
}

fn y_axis() -> Axis<'static> {
    Axis::default()
        .style(Style::default().fg(COLOR_DIM))
        .bounds([0.0, 100.0])
        .labels(["0", "50", "100"])
}

/// Linear interpolation between consecutive points, `steps` samples per
/// segment, so a bar dataset paints a solid area under the line.
pub fn area_fill(points: &[(f64, f64)], steps: usize) -> Vec<(f64, f64)> {
    if points.len() < 2 || steps == 0 {
        return points.to_vec();
    }

    let mut out = Vec::with_capacity((points.len() - 1) * steps + 1);
    for pair in points.windows(2) {
        let (x0, y0) = pair[0];
        let (x1, y1) = pair[1];
        for step in 0..steps {
            let t = step as f64 / steps as f64;
            out.push((x0 + (x1 - x0) * t, y0 + (y1 - y0) * t));
        }
    }
    if let Some(last) = points.last() {
        out.push(*last);
    }
    out
}

// ============================================================================
// Weekly summary
// ============================================================================

fn render_weekly_summary(frame: &mut Frame, area: Rect, data: &DashboardData) {
    let block = card("Weekly Progress");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let summary = data.weekly_summary;
    let tiles = [
        (summary.sessions.to_string(), "Sessions"),
        (format!("{}%", summary.completion_percent), "Completion"),
        (format!("{}m", summary.average_minutes), "Avg. Time"),
    ];

    let columns: [Rect; 3] = Layout::horizontal([Constraint::Ratio(1, 3); 3]).areas(inner);
    for ((value, label), column) in tiles.into_iter().zip(columns) {
        let tile = Paragraph::new(vec![
            Line::from(Span::styled(
                value,
                Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(label, Style::default().fg(COLOR_DIM))),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(tile, column);
    }
}

// ============================================================================
// Lists
// ============================================================================

fn render_sessions(frame: &mut Frame, area: Rect, data: &DashboardData) {
    let block = card("Recent Sessions");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let width = inner.width as usize;
    for (i, session) in data.recent_sessions.iter().enumerate() {
        let y = inner.y + i as u16 * SESSION_ROWS;
        if y + SESSION_ROWS > inner.y + inner.height {
            break;
        }

        frame.render_widget(
            two_sided_line(
                &session.topic,
                Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
                &session.duration_label,
                Style::default().fg(COLOR_ACCENT),
                width,
            ),
            Rect::new(inner.x, y, inner.width, 1),
        );
        frame.render_widget(
            two_sided_line(
                &session.date_label(),
                Style::default().fg(COLOR_DIM),
                &format!("{}% Complete", session.progress_percent),
                Style::default().fg(COLOR_DIM),
                width,
            ),
            Rect::new(inner.x, y + 1, inner.width, 1),
        );
        frame.render_widget(
            Gauge::default()
                .gauge_style(Style::default().fg(COLOR_PROGRESS).bg(COLOR_PROGRESS_BG))
                .ratio(session.progress_ratio())
                .label(""),
            Rect::new(inner.x, y + 2, inner.width, 1),
        );
    }
}

fn render_recommended(frame: &mut Frame, area: Rect, data: &DashboardData) {
    let block = card("Recommended for You");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let width = inner.width as usize;
    for (i, item) in data.recommended.iter().enumerate() {
        let y = inner.y + i as u16 * RECOMMENDED_ROWS;
        if y + RECOMMENDED_ROWS > inner.y + inner.height {
            break;
        }
        frame.render_widget(
            two_sided_line(
                &item.title,
                Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
                &item.duration_label,
                Style::default().fg(COLOR_DIM),
                width,
            ),
            Rect::new(inner.x, y, inner.width, 1),
        );
        frame.render_widget(
            Line::styled(item.category.clone(), Style::default().fg(COLOR_DIM)),
            Rect::new(inner.x, y + 1, inner.width, 1),
        );
    }
}

/// `left` flush left, `right` flush right; `left` is truncated if they collide.
fn two_sided_line(
    left: &str,
    left_style: Style,
    right: &str,
    right_style: Style,
    width: usize,
) -> Line<'static> {
    use unicode_width::UnicodeWidthStr;

    let right_width = right.width();
    let left = truncate_string(left, width.saturating_sub(right_width + 1));
    let gap = width.saturating_sub(left.width() + right_width);

    Line::from(vec![
        Span::styled(left, left_style),
        Span::raw(" ".repeat(gap)),
        Span::styled(right.to_string(), right_style),
    ])
}
