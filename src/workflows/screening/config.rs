use serde::{Deserialize, Serialize};

/// Threshold configuration for the screening rubric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreeningConfig {
    /// Minimum match score (0-100) for a candidate to be marked suitable.
    pub suitability_threshold: f64,
    /// Cosine similarity above which a resume is flagged as plagiarized.
    pub plagiarism_threshold: f64,
    /// Maximum tolerated gap between consecutive positions, in days.
    pub experience_gap_days: i64,
}

impl Default for ScreeningConfig {
    fn default() -> Self {
        Self {
            suitability_threshold: 50.0,
            plagiarism_threshold: 0.8,
            experience_gap_days: 365,
        }
    }
}
