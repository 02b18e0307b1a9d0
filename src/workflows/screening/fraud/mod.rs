//! Fraud heuristics: plagiarism against a historical corpus, chronological
//! gaps in work history, and institution validity. Independent boolean
//! checks OR-composed into the overall verdict.

pub(crate) mod gaps;
pub(crate) mod institutions;
pub(crate) mod plagiarism;

use super::config::ScreeningConfig;
use super::domain::{CandidateProfile, FraudIndicators};
use super::reference::ReferenceCorpora;

/// Run the three checks for one candidate.
///
/// An unconfigured institution list disables that check; an empty plagiarism
/// corpus never flags.
pub(crate) fn detect(
    candidate: &CandidateProfile,
    resume_text: &str,
    references: &ReferenceCorpora,
    config: &ScreeningConfig,
) -> FraudIndicators {
    let plagiarism = plagiarism::check_plagiarism(
        &comparison_text(candidate, resume_text),
        references.resume_corpus(),
        config.plagiarism_threshold,
    );

    let experience_gap =
        gaps::check_experience_gaps(&candidate.experience, config.experience_gap_days);

    let institution_check = match references.valid_institutions() {
        Some(valid) => institutions::check_institutions(&claimed_institutions(candidate), valid),
        None => false,
    };

    FraudIndicators::from_checks(plagiarism, institution_check, experience_gap)
}

/// Concatenated summary + skills + education + experience text compared
/// against the historical corpus.
fn comparison_text(candidate: &CandidateProfile, resume_text: &str) -> String {
    let mut parts: Vec<&str> = vec![resume_text];
    parts.extend(candidate.skills.iter().map(String::as_str));
    parts.extend(candidate.education.iter().map(|entry| entry.line.as_str()));
    parts.extend(candidate.experience.iter().map(|entry| entry.line.as_str()));
    parts.join(" ")
}

fn claimed_institutions(candidate: &CandidateProfile) -> Vec<String> {
    candidate
        .education
        .iter()
        .filter_map(|entry| entry.institution.clone())
        .collect()
}
