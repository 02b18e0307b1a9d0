use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Placeholder value used wherever an extraction rule found nothing.
pub const NOT_AVAILABLE: &str = "N/A";

/// Resume document handed to the pipeline by the upload layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeDocument {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl ResumeDocument {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }
}

/// Structured view of a job description, held by the session layer for the
/// lifetime of the active screening session and passed into every screening
/// call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobProfile {
    pub title: String,
    pub required_experience_text: String,
    pub required_experience_years: u32,
    pub location: String,
    pub salary_text: String,
    pub required_education: Vec<String>,
    pub required_skills: BTreeSet<String>,
    pub skill_weights: BTreeMap<String, u32>,
}

impl JobProfile {
    /// Merge per-skill weight overrides; skills without an override keep 1.
    /// Non-positive overrides are ignored.
    pub fn apply_weights(&mut self, overrides: BTreeMap<String, u32>) {
        for (skill, weight) in overrides {
            if weight > 0 && self.required_skills.contains(&skill) {
                self.skill_weights.insert(skill, weight);
            }
        }
    }
}

/// One education line matched by the extraction rules, carrying the verbatim
/// line plus the institution name when one could be parsed out of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub line: String,
    pub institution: Option<String>,
}

impl EducationEntry {
    pub fn placeholder() -> Self {
        Self {
            line: NOT_AVAILABLE.to_string(),
            institution: None,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.line == NOT_AVAILABLE
    }
}

/// One experience line matched by the extraction rules, carrying the verbatim
/// line plus the first date range parsed out of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub line: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl ExperienceEntry {
    pub fn placeholder() -> Self {
        Self {
            line: NOT_AVAILABLE.to_string(),
            start_date: None,
            end_date: None,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.line == NOT_AVAILABLE
    }
}

/// Everything extracted from one resume. Immutable once built; folded into a
/// `ScreeningRecord` and then discarded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub education: Vec<EducationEntry>,
    pub experience: Vec<ExperienceEntry>,
    pub projects: Vec<String>,
    pub skills: BTreeSet<String>,
    pub years_of_experience: u32,
}

/// Tri-state education comparison result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EducationMatch {
    Yes,
    No,
    NotApplicable,
}

impl EducationMatch {
    pub const fn label(self) -> &'static str {
        match self {
            EducationMatch::Yes => "Yes",
            EducationMatch::No => "No",
            EducationMatch::NotApplicable => NOT_AVAILABLE,
        }
    }
}

/// Fit comparison between one candidate and the active job profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchEvaluation {
    /// Weighted cosine similarity scaled to [0, 100], rounded to 2 decimals.
    pub match_score: f64,
    pub suitable: bool,
    /// Always `required_skills - candidate.skills`.
    pub skills_lacking: BTreeSet<String>,
    pub education_met: EducationMatch,
    pub experience_met: bool,
}

/// Sentiment classes produced by the scoring oracle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SentimentLabel {
    VeryNegative,
    Negative,
    Neutral,
    Positive,
    VeryPositive,
}

impl SentimentLabel {
    pub const fn label(self) -> &'static str {
        match self {
            SentimentLabel::VeryNegative => "Very Negative",
            SentimentLabel::Negative => "Negative",
            SentimentLabel::Neutral => "Neutral",
            SentimentLabel::Positive => "Positive",
            SentimentLabel::VeryPositive => "Very Positive",
        }
    }
}

/// Oracle output: label plus confidence in [0, 1], rounded to 2 decimals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentReading {
    pub label: SentimentLabel,
    pub score: f64,
}

/// Overall fraud verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FraudStatus {
    Fraud,
    NotFraud,
}

impl FraudStatus {
    pub const fn label(self) -> &'static str {
        match self {
            FraudStatus::Fraud => "Fraud",
            FraudStatus::NotFraud => "Not Fraud",
        }
    }
}

/// Results of the three independent fraud checks and their OR-composition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FraudIndicators {
    pub plagiarism: bool,
    pub institution_check: bool,
    pub experience_gap: bool,
    pub fraud_status: FraudStatus,
}

impl FraudIndicators {
    pub fn from_checks(plagiarism: bool, institution_check: bool, experience_gap: bool) -> Self {
        let fraud_status = if plagiarism || institution_check || experience_gap {
            FraudStatus::Fraud
        } else {
            FraudStatus::NotFraud
        };

        Self {
            plagiarism,
            institution_check,
            experience_gap,
            fraud_status,
        }
    }
}

/// Fully evaluated screening result awaiting a serial number from the store.
#[derive(Debug, Clone, PartialEq)]
pub struct ScreeningOutcome {
    pub candidate: CandidateProfile,
    pub evaluation: MatchEvaluation,
    pub sentiment: SentimentReading,
    pub fraud: FraudIndicators,
}

impl ScreeningOutcome {
    pub fn into_record(self, serial_number: u32) -> ScreeningRecord {
        ScreeningRecord {
            serial_number,
            candidate: self.candidate,
            evaluation: self.evaluation,
            sentiment: self.sentiment,
            fraud: self.fraud,
        }
    }
}

/// Persisted screening record. Never mutated after creation; the collection
/// it lives in is append-only apart from a wholesale clear.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreeningRecord {
    /// 1-based position in the store, assigned at append time.
    pub serial_number: u32,
    pub candidate: CandidateProfile,
    pub evaluation: MatchEvaluation,
    pub sentiment: SentimentReading,
    pub fraud: FraudIndicators,
}
