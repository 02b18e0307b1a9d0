use std::collections::BTreeMap;

use super::common::*;
use crate::workflows::screening::domain::{EducationEntry, EducationMatch};
use crate::workflows::screening::matching;

fn weights(entries: &[(&str, u32)]) -> BTreeMap<String, u32> {
    entries
        .iter()
        .map(|(skill, weight)| (skill.to_string(), *weight))
        .collect()
}

#[test]
fn identical_skill_sets_score_100() {
    let skills = skill_set(&["python", "sql", "docker"]);
    let score = matching::weighted_match_score(&skills, &skills, &weights(&[("python", 3)]));
    assert_eq!(score, 100.0);
}

#[test]
fn empty_candidate_or_requirements_score_zero() {
    let skills = skill_set(&["python"]);
    let empty = skill_set(&[]);

    assert_eq!(
        matching::weighted_match_score(&empty, &skills, &BTreeMap::new()),
        0.0
    );
    assert_eq!(
        matching::weighted_match_score(&skills, &empty, &BTreeMap::new()),
        0.0
    );
}

#[test]
fn partial_overlap_scores_cosine_of_required_vector() {
    let candidate = skill_set(&["python", "sql"]);
    let required = skill_set(&["go", "java", "python", "sql"]);

    // dot = 2, |candidate| = sqrt(2), |job| = 2 -> 70.71
    let score = matching::weighted_match_score(&candidate, &required, &BTreeMap::new());
    assert_eq!(score, 70.71);
}

#[test]
fn candidate_skills_outside_requirements_do_not_influence_score() {
    let required = skill_set(&["python", "sql"]);
    let exact = skill_set(&["python", "sql"]);
    let padded = skill_set(&["python", "sql", "docker", "kubernetes", "rust"]);

    let base = matching::weighted_match_score(&exact, &required, &BTreeMap::new());
    let with_extras = matching::weighted_match_score(&padded, &required, &BTreeMap::new());
    assert_eq!(base, with_extras);
}

#[test]
fn weights_shift_the_score() {
    let candidate = skill_set(&["python"]);
    let required = skill_set(&["python", "sql"]);

    let unweighted = matching::weighted_match_score(&candidate, &required, &BTreeMap::new());
    assert_eq!(unweighted, 70.71);

    // dot = 9, |candidate| = 3, |job| = sqrt(10) -> 94.87
    let weighted =
        matching::weighted_match_score(&candidate, &required, &weights(&[("python", 3)]));
    assert_eq!(weighted, 94.87);
}

#[test]
fn education_met_yes_on_requirement_substring() {
    let education = vec![EducationEntry {
        line: "bachelor of science in computer engineering".to_string(),
        institution: None,
    }];
    let required = vec!["bachelor".to_string()];
    assert_eq!(
        matching::education_met(&education, &required),
        EducationMatch::Yes
    );
}

#[test]
fn education_met_no_when_requirements_absent() {
    let education = vec![EducationEntry {
        line: "diploma in culinary arts".to_string(),
        institution: None,
    }];
    let required = vec!["master of science".to_string()];
    assert_eq!(
        matching::education_met(&education, &required),
        EducationMatch::No
    );
}

#[test]
fn education_met_not_applicable_when_either_side_is_placeholder() {
    let placeholder = vec![EducationEntry::placeholder()];
    let real = vec![EducationEntry {
        line: "bachelor of arts".to_string(),
        institution: None,
    }];

    assert_eq!(
        matching::education_met(&placeholder, &["bachelor".to_string()]),
        EducationMatch::NotApplicable
    );
    assert_eq!(
        matching::education_met(&real, &["N/A".to_string()]),
        EducationMatch::NotApplicable
    );
}

#[test]
fn weight_overrides_outside_requirements_are_ignored() {
    let mut profile = crate::workflows::screening::extract::job::job_profile(
        JOB_DESCRIPTION,
        &crate::workflows::screening::SkillVocabulary::default(),
    );

    let mut overrides = BTreeMap::new();
    overrides.insert("python".to_string(), 4);
    overrides.insert("cobol".to_string(), 9);
    overrides.insert("sql".to_string(), 0);
    profile.apply_weights(overrides);

    assert_eq!(profile.skill_weights.get("python"), Some(&4));
    assert_eq!(profile.skill_weights.get("cobol"), None);
    assert_eq!(profile.skill_weights.get("sql"), Some(&1));
}

#[test]
fn experience_met_rules() {
    assert!(matching::experience_met(0, 0));
    assert!(matching::experience_met(5, 3));
    assert!(matching::experience_met(3, 3));
    assert!(!matching::experience_met(2, 3));
}
