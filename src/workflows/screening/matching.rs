use std::collections::{BTreeMap, BTreeSet};

use super::domain::{EducationEntry, EducationMatch};

/// Weighted cosine similarity between the candidate's skills and the
/// required skills, scaled to [0, 100] and rounded to 2 decimals.
///
/// Both vectors are indexed by the required-skill list: the job entry is the
/// skill's weight (default 1) and the candidate entry is that weight when the
/// skill is held, else 0. Candidate skills outside the required list never
/// influence the score. Either side empty scores 0.0.
pub(crate) fn weighted_match_score(
    candidate_skills: &BTreeSet<String>,
    required_skills: &BTreeSet<String>,
    weights: &BTreeMap<String, u32>,
) -> f64 {
    if candidate_skills.is_empty() || required_skills.is_empty() {
        return 0.0;
    }

    let mut candidate_vector = Vec::with_capacity(required_skills.len());
    let mut job_vector = Vec::with_capacity(required_skills.len());

    for skill in required_skills {
        let weight = f64::from(weights.get(skill).copied().unwrap_or(1));
        job_vector.push(weight);
        candidate_vector.push(if candidate_skills.contains(skill) {
            weight
        } else {
            0.0
        });
    }

    round2(cosine_similarity(&candidate_vector, &job_vector) * 100.0)
}

pub(crate) fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b = b.iter().map(|y| y * y).sum::<f64>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        dot / (norm_a * norm_b)
    }
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Compare candidate education lines against the job's requirement lines.
///
/// `NotApplicable` when either side has no real entries; `Yes` when any
/// requirement appears (case-insensitive substring) in any candidate line.
pub(crate) fn education_met(candidate: &[EducationEntry], required: &[String]) -> EducationMatch {
    let candidate_lines: Vec<String> = candidate
        .iter()
        .filter(|entry| !entry.is_placeholder())
        .map(|entry| entry.line.to_lowercase())
        .collect();
    let requirements: Vec<String> = required
        .iter()
        .filter(|req| req.as_str() != super::domain::NOT_AVAILABLE)
        .map(|req| req.to_lowercase())
        .collect();

    if candidate_lines.is_empty() || requirements.is_empty() {
        return EducationMatch::NotApplicable;
    }

    let met = candidate_lines
        .iter()
        .any(|line| requirements.iter().any(|req| line.contains(req)));

    if met {
        EducationMatch::Yes
    } else {
        EducationMatch::No
    }
}

/// A requirement of 0 years is always met; otherwise the candidate must have
/// at least the required years.
pub(crate) fn experience_met(candidate_years: u32, required_years: u32) -> bool {
    required_years == 0 || candidate_years >= required_years
}
