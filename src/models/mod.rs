mod mood;
mod progress;
mod tools;

pub use mood::Mood;
pub use progress::{
    series_coords, DashboardData, RecommendedItem, SessionRecord, TimeSeriesPoint, WeeklySummary,
};
pub use tools::QuickTool;
