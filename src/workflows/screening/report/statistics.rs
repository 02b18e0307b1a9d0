use std::collections::HashMap;

use serde::Serialize;

use crate::workflows::screening::domain::ScreeningRecord;
use crate::workflows::screening::matching::round2;

/// Aggregate dashboard view, recomputed on demand from the full record
/// collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardStatistics {
    pub total_resumes: usize,
    pub suitable_resumes: usize,
    pub unsuitable_resumes: usize,
    pub suitable_percentage: f64,
    pub unsuitable_percentage: f64,
    pub average_match_score: f64,
    /// Up to five most frequently lacking skills, frequency descending.
    /// Ties keep the order skills first appeared across the collection.
    pub top_skills_lacking: Vec<SkillGapCount>,
}

/// One lacking skill and how many records it appeared in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillGapCount {
    pub skill: String,
    pub count: usize,
}

impl DashboardStatistics {
    pub fn from_records(records: &[ScreeningRecord]) -> Self {
        let total_resumes = records.len();
        let suitable_resumes = records
            .iter()
            .filter(|record| record.evaluation.suitable)
            .count();
        let unsuitable_resumes = total_resumes - suitable_resumes;

        let (suitable_percentage, unsuitable_percentage, average_match_score) =
            if total_resumes == 0 {
                (0.0, 0.0, 0.0)
            } else {
                let total = total_resumes as f64;
                let score_sum: f64 = records
                    .iter()
                    .map(|record| record.evaluation.match_score)
                    .sum();
                (
                    round2(suitable_resumes as f64 * 100.0 / total),
                    round2(unsuitable_resumes as f64 * 100.0 / total),
                    round2(score_sum / total),
                )
            };

        Self {
            total_resumes,
            suitable_resumes,
            unsuitable_resumes,
            suitable_percentage,
            unsuitable_percentage,
            average_match_score,
            top_skills_lacking: top_skills_lacking(records),
        }
    }
}

fn top_skills_lacking(records: &[ScreeningRecord]) -> Vec<SkillGapCount> {
    let mut first_seen: Vec<String> = Vec::new();
    let mut counts: HashMap<String, usize> = HashMap::new();

    for record in records {
        for skill in &record.evaluation.skills_lacking {
            if !counts.contains_key(skill) {
                first_seen.push(skill.clone());
            }
            *counts.entry(skill.clone()).or_insert(0) += 1;
        }
    }

    let mut ranked: Vec<SkillGapCount> = first_seen
        .into_iter()
        .map(|skill| {
            let count = counts[&skill];
            SkillGapCount { skill, count }
        })
        .collect();

    // Stable sort keeps first-occurrence order among equal counts.
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked.truncate(5);
    ranked
}
