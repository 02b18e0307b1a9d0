mod export;
mod statistics;

pub use export::{write_report, write_sentiment_summary};
pub use statistics::{DashboardStatistics, SkillGapCount};
