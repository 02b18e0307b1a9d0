use std::collections::BTreeSet;
use std::sync::{Arc, Mutex};

use chrono::NaiveDate;

use crate::workflows::screening::domain::{
    CandidateProfile, EducationEntry, EducationMatch, ExperienceEntry, FraudIndicators,
    MatchEvaluation, ResumeDocument, ScreeningOutcome, ScreeningRecord, SentimentLabel,
    SentimentReading,
};
use crate::workflows::screening::reference::ReferenceCorpora;
use crate::workflows::screening::repository::{
    InMemoryScreeningStore, NotifyError, RejectionNotice, RejectionNotifier,
};
use crate::workflows::screening::sentiment::NeutralSentiment;
use crate::workflows::screening::service::ScreeningService;
use crate::workflows::screening::ScreeningConfig;

/// Resume text as the text extractor would produce it: lowercased, trimmed.
pub(super) const RESUME_TEXT: &str = "\
jane doe
email: jane.doe@example.com
phone: (515) 555-0142
summary: software engineer with 4 years of experience in python and sql
education: bachelor of science, university of iowa
worked at prairie analytics from 2020-07-01 to 2022-06-30 as data engineer
worked at river labs from 2022-07-15 to 2024-05-01 as backend engineer
project: built an etl pipeline with python and docker";

pub(super) const JOB_DESCRIPTION: &str = "\
Software Engineer
3+ years of experience
Remote
$80,000 - $100,000
Bachelor's degree required
Skills: Python, SQL, Docker, Machine Learning";

pub(super) fn resume_document(file_name: &str) -> ResumeDocument {
    ResumeDocument::new(file_name, RESUME_TEXT.as_bytes().to_vec())
}

pub(super) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

pub(super) fn experience_entry(start: NaiveDate, end: NaiveDate) -> ExperienceEntry {
    ExperienceEntry {
        line: format!("worked from {start} to {end}"),
        start_date: Some(start),
        end_date: Some(end),
    }
}

pub(super) fn skill_set(skills: &[&str]) -> BTreeSet<String> {
    skills.iter().map(|skill| skill.to_string()).collect()
}

pub(super) fn candidate(name: &str, skills: &[&str]) -> CandidateProfile {
    CandidateProfile {
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
        phone: "(515) 555-0142".to_string(),
        education: vec![EducationEntry {
            line: "bachelor of science, university of iowa".to_string(),
            institution: Some("university of iowa".to_string()),
        }],
        experience: vec![experience_entry(date(2020, 7, 1), date(2022, 6, 30))],
        projects: vec!["built an etl pipeline".to_string()],
        skills: skill_set(skills),
        years_of_experience: 4,
    }
}

/// Record with the suitable flag derived from the score, for statistics and
/// export tests.
pub(super) fn record(serial: u32, match_score: f64, lacking: &[&str]) -> ScreeningRecord {
    ScreeningOutcome {
        candidate: candidate("Jane Doe", &["python", "sql"]),
        evaluation: MatchEvaluation {
            match_score,
            suitable: match_score >= 50.0,
            skills_lacking: skill_set(lacking),
            education_met: EducationMatch::Yes,
            experience_met: true,
        },
        sentiment: SentimentReading {
            label: SentimentLabel::Neutral,
            score: 0.5,
        },
        fraud: FraudIndicators::from_checks(false, false, false),
    }
    .into_record(serial)
}

#[derive(Default)]
pub(super) struct RecordingNotifier {
    notices: Mutex<Vec<RejectionNotice>>,
}

impl RecordingNotifier {
    pub(super) fn notices(&self) -> Vec<RejectionNotice> {
        self.notices.lock().expect("notifier mutex poisoned").clone()
    }
}

impl RejectionNotifier for RecordingNotifier {
    fn notify(&self, notice: &RejectionNotice) -> Result<(), NotifyError> {
        self.notices
            .lock()
            .expect("notifier mutex poisoned")
            .push(notice.clone());
        Ok(())
    }
}

pub(super) struct FailingNotifier;

impl RejectionNotifier for FailingNotifier {
    fn notify(&self, _notice: &RejectionNotice) -> Result<(), NotifyError> {
        Err(NotifyError::Transport("smtp relay offline".to_string()))
    }
}

pub(super) type TestService<N> = ScreeningService<InMemoryScreeningStore, N, NeutralSentiment>;

pub(super) fn build_service() -> (
    TestService<RecordingNotifier>,
    Arc<InMemoryScreeningStore>,
    Arc<RecordingNotifier>,
) {
    build_service_with(Arc::new(ReferenceCorpora::default()), ScreeningConfig::default())
}

pub(super) fn build_service_with(
    references: Arc<ReferenceCorpora>,
    config: ScreeningConfig,
) -> (
    TestService<RecordingNotifier>,
    Arc<InMemoryScreeningStore>,
    Arc<RecordingNotifier>,
) {
    let store = Arc::new(InMemoryScreeningStore::default());
    let notifier = Arc::new(RecordingNotifier::default());
    let service = ScreeningService::new(
        store.clone(),
        notifier.clone(),
        Arc::new(NeutralSentiment),
        references,
        config,
    );
    (service, store, notifier)
}
