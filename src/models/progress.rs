//! Display-only progress records and the fixture data behind the dashboard.

use chrono::NaiveDate;

/// A past therapy session.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionRecord {
    pub id: u32,
    pub date: NaiveDate,
    pub topic: String,
    pub duration_label: String,
    /// 0-100
    pub progress_percent: u8,
}

impl SessionRecord {
    pub fn new(
        id: u32,
        date: NaiveDate,
        topic: impl Into<String>,
        duration_label: impl Into<String>,
        progress_percent: u8,
    ) -> Self {
        Self {
            id,
            date,
            topic: topic.into(),
            duration_label: duration_label.into(),
            progress_percent: progress_percent.min(100),
        }
    }

    /// Date as shown on the card, e.g. "March 15, 2024".
    pub fn date_label(&self) -> String {
        self.date.format("%B %-d, %Y").to_string()
    }

    pub fn progress_ratio(&self) -> f64 {
        f64::from(self.progress_percent) / 100.0
    }
}

/// A piece of recommended reading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecommendedItem {
    pub id: u32,
    pub title: String,
    pub category: String,
    pub duration_label: String,
}

impl RecommendedItem {
    pub fn new(
        id: u32,
        title: impl Into<String>,
        category: impl Into<String>,
        duration_label: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            category: category.into(),
            duration_label: duration_label.into(),
        }
    }
}

/// One labelled point of a chart series.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSeriesPoint {
    pub x_label: String,
    pub value: f64,
}

impl TimeSeriesPoint {
    pub fn new(x_label: impl Into<String>, value: f64) -> Self {
        Self {
            x_label: x_label.into(),
            value,
        }
    }
}

/// Converts a series into `(x, y)` pairs with x as the point index.
pub fn series_coords(points: &[TimeSeriesPoint]) -> Vec<(f64, f64)> {
    points
        .iter()
        .enumerate()
        .map(|(i, p)| (i as f64, p.value))
        .collect()
}

/// The "Weekly Progress" tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeeklySummary {
    pub sessions: u32,
    pub completion_percent: u8,
    pub average_minutes: u32,
}

/// Everything the progress dashboard displays.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardData {
    pub recent_sessions: Vec<SessionRecord>,
    pub recommended: Vec<RecommendedItem>,
    pub treatment_progress: Vec<TimeSeriesPoint>,
    pub wellness_scores: Vec<TimeSeriesPoint>,
    pub weekly_summary: WeeklySummary,
}

impl DashboardData {
    /// The built-in sample content.
    pub fn fixture() -> Self {
        Self {
            recent_sessions: vec![
                SessionRecord::new(1, ymd(2024, 3, 15), "Anxiety Management", "45 min", 85),
                SessionRecord::new(2, ymd(2024, 3, 12), "Stress Reduction", "30 min", 70),
            ],
            recommended: vec![
                RecommendedItem::new(1, "Understand Your Treatment", "Treatment Guide", "12 min read"),
                RecommendedItem::new(2, "Managing Side Effects", "Health Management", "8 min read"),
            ],
            treatment_progress: [("Week 1", 30.0), ("Week 2", 45.0), ("Week 3", 65.0), ("Week 4", 85.0)]
                .into_iter()
                .map(|(label, value)| TimeSeriesPoint::new(label, value))
                .collect(),
            wellness_scores: [
                ("Mon", 75.0),
                ("Tue", 82.0),
                ("Wed", 78.0),
                ("Thu", 85.0),
                ("Fri", 80.0),
                ("Sat", 88.0),
                ("Sun", 85.0),
            ]
            .into_iter()
            .map(|(label, value)| TimeSeriesPoint::new(label, value))
            .collect(),
            weekly_summary: WeeklySummary {
                sessions: 3,
                completion_percent: 85,
                average_minutes: 45,
            },
        }
    }
}

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}
