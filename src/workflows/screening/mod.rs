//! Resume-to-job screening pipeline: extraction, skill matching, weighted
//! fit scoring, fraud heuristics, and aggregate reporting.
//!
//! The orchestrating [`ScreeningService`] composes injected collaborators
//! (store, notifier, sentiment oracle, reference corpora) so the pipeline
//! can run under any host — HTTP service, CLI, or test harness.

mod config;
pub mod domain;
pub(crate) mod extract;
pub(crate) mod fraud;
pub(crate) mod matching;
pub mod reference;
pub mod report;
pub mod repository;
pub mod sentiment;
pub mod service;

#[cfg(test)]
mod tests;

pub use config::ScreeningConfig;
pub use domain::{
    CandidateProfile, EducationEntry, EducationMatch, ExperienceEntry, FraudIndicators,
    FraudStatus, JobProfile, MatchEvaluation, ResumeDocument, ScreeningOutcome, ScreeningRecord,
    SentimentLabel, SentimentReading, NOT_AVAILABLE,
};
pub use extract::skills::SkillVocabulary;
pub use reference::{ReferenceCorpora, ReferenceError};
pub use report::{DashboardStatistics, SkillGapCount};
pub use repository::{
    InMemoryScreeningStore, LoggingNotifier, NotifyError, RejectionNotice, RejectionNotifier,
    ScreeningStore, StoreError,
};
pub use sentiment::{NeutralSentiment, SentimentOracle};
pub use service::{ScreeningError, ScreeningService};
