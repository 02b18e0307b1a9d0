use std::io::Write;
use std::sync::Arc;

use tracing::warn;

use super::config::ScreeningConfig;
use super::domain::{
    CandidateProfile, JobProfile, MatchEvaluation, ResumeDocument, ScreeningOutcome,
    ScreeningRecord,
};
use super::extract::skills::SkillVocabulary;
use super::extract::{self, job, text};
use super::fraud;
use super::matching;
use super::reference::ReferenceCorpora;
use super::report::{self, DashboardStatistics};
use super::repository::{RejectionNotice, RejectionNotifier, ScreeningStore, StoreError};
use super::sentiment::SentimentOracle;

/// Orchestrator composing extraction, scoring, fraud heuristics, sentiment,
/// persistence, and best-effort rejection notification.
pub struct ScreeningService<R, N, S> {
    store: Arc<R>,
    notifier: Arc<N>,
    sentiment: Arc<S>,
    references: Arc<ReferenceCorpora>,
    config: ScreeningConfig,
    vocabulary: SkillVocabulary,
}

impl<R, N, S> ScreeningService<R, N, S>
where
    R: ScreeningStore + 'static,
    N: RejectionNotifier + 'static,
    S: SentimentOracle + 'static,
{
    pub fn new(
        store: Arc<R>,
        notifier: Arc<N>,
        sentiment: Arc<S>,
        references: Arc<ReferenceCorpora>,
        config: ScreeningConfig,
    ) -> Self {
        Self {
            store,
            notifier,
            sentiment,
            references,
            config,
            vocabulary: SkillVocabulary::default(),
        }
    }

    pub fn with_vocabulary(mut self, vocabulary: SkillVocabulary) -> Self {
        self.vocabulary = vocabulary;
        self
    }

    /// Parse a job description into the profile owned by the session layer.
    pub fn job_profile(&self, description: &str) -> JobProfile {
        job::job_profile(description, &self.vocabulary)
    }

    /// Screen one resume against `job`: extract, score, fraud-check, persist,
    /// then notify the candidate when unsuitable. Notification failure is
    /// logged and never propagated; the record is already persisted.
    pub fn screen(
        &self,
        job: &JobProfile,
        resume: &ResumeDocument,
    ) -> Result<ScreeningRecord, ScreeningError> {
        let resume_text = text::extract_text(&resume.bytes);
        let candidate = extract::candidate_profile(&resume.file_name, &resume_text, &self.vocabulary);

        let evaluation = self.evaluate(job, &candidate);
        let sentiment = self.sentiment.analyze(&resume_text);
        let fraud = fraud::detect(&candidate, &resume_text, &self.references, &self.config);

        let record = self.store.append(ScreeningOutcome {
            candidate,
            evaluation,
            sentiment,
            fraud,
        })?;

        if !record.evaluation.suitable {
            let notice = RejectionNotice {
                email: record.candidate.email.clone(),
                name: record.candidate.name.clone(),
                skills_lacking: record.evaluation.skills_lacking.clone(),
                match_score: record.evaluation.match_score,
            };
            if let Err(err) = self.notifier.notify(&notice) {
                warn!(
                    email = %notice.email,
                    error = %err,
                    "rejection notice delivery failed"
                );
            }
        }

        Ok(record)
    }

    /// Screen a batch resume-at-a-time. One resume's failure never prevents
    /// the rest from being processed.
    pub fn screen_batch(
        &self,
        job: &JobProfile,
        resumes: &[ResumeDocument],
    ) -> Vec<Result<ScreeningRecord, ScreeningError>> {
        resumes.iter().map(|resume| self.screen(job, resume)).collect()
    }

    /// Every persisted record in append order.
    pub fn records(&self) -> Result<Vec<ScreeningRecord>, ScreeningError> {
        Ok(self.store.all()?)
    }

    /// Dashboard statistics recomputed from the full record collection.
    pub fn statistics(&self) -> Result<DashboardStatistics, ScreeningError> {
        Ok(DashboardStatistics::from_records(&self.store.all()?))
    }

    /// Drop every record and restart serial assignment.
    pub fn clear(&self) -> Result<(), ScreeningError> {
        Ok(self.store.clear()?)
    }

    /// Write the full screening report as CSV, one row per record.
    pub fn write_report<W: Write>(&self, writer: W) -> Result<(), ScreeningError> {
        report::write_report(&self.store.all()?, writer)?;
        Ok(())
    }

    /// Write the per-record sentiment summary as CSV.
    pub fn write_sentiment_summary<W: Write>(&self, writer: W) -> Result<(), ScreeningError> {
        report::write_sentiment_summary(&self.store.all()?, writer)?;
        Ok(())
    }

    fn evaluate(&self, job: &JobProfile, candidate: &CandidateProfile) -> MatchEvaluation {
        let match_score = matching::weighted_match_score(
            &candidate.skills,
            &job.required_skills,
            &job.skill_weights,
        );
        let skills_lacking = job
            .required_skills
            .difference(&candidate.skills)
            .cloned()
            .collect();

        MatchEvaluation {
            match_score,
            suitable: match_score >= self.config.suitability_threshold,
            skills_lacking,
            education_met: matching::education_met(&candidate.education, &job.required_education),
            experience_met: matching::experience_met(
                candidate.years_of_experience,
                job.required_experience_years,
            ),
        }
    }
}

/// Error raised by the screening service.
#[derive(Debug, thiserror::Error)]
pub enum ScreeningError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("report export failed: {0}")]
    Export(#[from] csv::Error),
}
