use std::path::Path;

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::workflows::screening::domain::{EducationEntry, ExperienceEntry, NOT_AVAILABLE};

const EDUCATION_KEYWORDS: [&str; 7] = [
    "bachelor",
    "master",
    "phd",
    "degree",
    "diploma",
    "university",
    "college",
];
const EXPERIENCE_KEYWORDS: [&str; 5] = ["experience", "worked", "intern", "job", "role"];
const PROJECT_KEYWORDS: [&str; 4] = ["project", "developed", "built", "created"];

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").expect("email pattern"));
static PHONE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\+?\d{1,3}[-.\s]?)?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}").expect("phone pattern")
});
static YEARS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(\d+)\s*(years?|yrs?)").expect("years pattern"));
static NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([A-Z][a-z]+)[_ ]([A-Z][a-z]+)").expect("name pattern"));
static ISO_DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d{4}-\d{2}-\d{2}").expect("date pattern"));
static INSTITUTION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:university|college|institute)\s+of\s+[a-z]+").expect("institution pattern")
});

pub(crate) struct ContactInfo {
    pub(crate) email: String,
    pub(crate) phone: String,
}

/// First email and phone match in the text, `"N/A"` when absent.
pub(crate) fn contact_info(text: &str) -> ContactInfo {
    ContactInfo {
        email: first_match(&EMAIL_RE, text),
        phone: first_match(&PHONE_RE, text),
    }
}

fn first_match(pattern: &Regex, text: &str) -> String {
    pattern
        .find(text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// Education lines in source order, each enriched with a parsed institution
/// name when the line contains one. Placeholder entry when nothing matches.
pub(crate) fn education(text: &str) -> Vec<EducationEntry> {
    let lines = matching_lines(text, &EDUCATION_KEYWORDS);
    if lines.is_empty() {
        return vec![EducationEntry::placeholder()];
    }

    lines
        .into_iter()
        .map(|line| {
            let institution = INSTITUTION_RE.find(&line).map(|m| m.as_str().to_string());
            EducationEntry { line, institution }
        })
        .collect()
}

/// Experience lines in source order, each enriched with the first ISO date
/// pair found on the line. Placeholder entry when nothing matches.
pub(crate) fn experience(text: &str) -> Vec<ExperienceEntry> {
    let lines = matching_lines(text, &EXPERIENCE_KEYWORDS);
    if lines.is_empty() {
        return vec![ExperienceEntry::placeholder()];
    }

    lines
        .into_iter()
        .map(|line| {
            let mut dates = ISO_DATE_RE
                .find_iter(&line)
                .map(|m| NaiveDate::parse_from_str(m.as_str(), "%Y-%m-%d").ok());
            let start_date = dates.next().flatten();
            let end_date = dates.next().flatten();
            ExperienceEntry {
                line,
                start_date,
                end_date,
            }
        })
        .collect()
}

/// Project lines in source order, placeholder when nothing matches.
pub(crate) fn projects(text: &str) -> Vec<String> {
    let lines = matching_lines(text, &PROJECT_KEYWORDS);
    if lines.is_empty() {
        return vec![NOT_AVAILABLE.to_string()];
    }
    lines
}

/// First `<integer> year(s)|yr(s)` occurrence anywhere in the text, 0 when
/// absent or out of range.
pub(crate) fn years_of_experience(text: &str) -> u32 {
    YEARS_RE
        .captures(text)
        .and_then(|captures| captures[1].parse().ok())
        .unwrap_or(0)
}

/// Candidate name recovered from a `Firstname_Lastname[...]` file name.
pub(crate) fn candidate_name(file_name: &str) -> String {
    let stem = Path::new(file_name)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or(file_name);

    match NAME_RE.captures(stem) {
        Some(captures) => format!("{} {}", &captures[1], &captures[2]),
        None => "Unknown Candidate".to_string(),
    }
}

/// Lines containing any of the keywords (case-insensitive substring),
/// trimmed, in source order, without deduplication.
pub(crate) fn matching_lines(text: &str, keywords: &[&str]) -> Vec<String> {
    text.lines()
        .filter(|line| {
            let lowered = line.to_lowercase();
            keywords.iter().any(|keyword| lowered.contains(keyword))
        })
        .map(|line| line.trim().to_string())
        .collect()
}
