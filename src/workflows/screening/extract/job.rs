use once_cell::sync::Lazy;
use regex::Regex;

use super::fields;
use super::skills::SkillVocabulary;
use crate::workflows::screening::domain::{JobProfile, NOT_AVAILABLE};

const EDUCATION_KEYWORDS: [&str; 7] = [
    "bachelor",
    "master",
    "phd",
    "degree",
    "diploma",
    "university",
    "college",
];

static EXPERIENCE_PHRASE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\d+\+?\s*(years?|yrs?)(\s*of\s*experience)?").expect("experience pattern")
});
static LOCATION_MODE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(remote|hybrid|onsite)\b").expect("location mode pattern"));
static LOCATION_CITY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Za-z][A-Za-z ]*,\s*[A-Z]{2}\b").expect("location city pattern"));
static SALARY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\$\d{1,3}(,\d{3})+\s*-\s*\$\d{1,3}(,\d{3})+").expect("salary pattern")
});

/// Field values lifted from the raw job description text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct JobDetails {
    pub(crate) title: String,
    pub(crate) experience: String,
    pub(crate) location: String,
    pub(crate) salary: String,
}

/// Extract title, experience phrase, location, and salary range from the raw
/// (non-lowercased) job description.
pub(crate) fn job_details(description: &str) -> JobDetails {
    JobDetails {
        title: title(description),
        experience: first_match(&EXPERIENCE_PHRASE_RE, description),
        location: location(description),
        salary: first_match(&SALARY_RE, description),
    }
}

/// Education requirement lines, same line-scan rule as candidate education.
pub(crate) fn education_requirements(description: &str) -> Vec<String> {
    let lines = fields::matching_lines(description, &EDUCATION_KEYWORDS);
    if lines.is_empty() {
        return vec![NOT_AVAILABLE.to_string()];
    }
    lines
}

/// Build the complete job profile: structured fields, required skills from
/// the vocabulary, and default weight 1 per skill.
pub(crate) fn job_profile(description: &str, vocabulary: &SkillVocabulary) -> JobProfile {
    let details = job_details(description);
    let required_skills = vocabulary.matches(description);
    let skill_weights = required_skills
        .iter()
        .map(|skill| (skill.clone(), 1))
        .collect();

    JobProfile {
        title: details.title,
        required_experience_years: fields::years_of_experience(&details.experience),
        required_experience_text: details.experience,
        location: details.location,
        salary_text: details.salary,
        required_education: education_requirements(description),
        required_skills,
        skill_weights,
    }
}

fn title(description: &str) -> String {
    description
        .lines()
        .next()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .unwrap_or(NOT_AVAILABLE)
        .to_string()
}

/// Leftmost of a work-mode keyword or a `City, ST` match.
fn location(description: &str) -> String {
    let mode = LOCATION_MODE_RE.find(description);
    let city = LOCATION_CITY_RE.find(description);

    let winner = match (mode, city) {
        (Some(mode), Some(city)) => {
            if mode.start() <= city.start() {
                Some(mode)
            } else {
                Some(city)
            }
        }
        (Some(mode), None) => Some(mode),
        (None, Some(city)) => Some(city),
        (None, None) => None,
    };

    winner
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

fn first_match(pattern: &Regex, text: &str) -> String {
    pattern
        .find(text)
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}
