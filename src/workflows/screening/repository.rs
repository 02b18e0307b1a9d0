use std::collections::BTreeSet;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use super::domain::{ScreeningOutcome, ScreeningRecord, NOT_AVAILABLE};

/// Storage abstraction so the orchestrator can be exercised in isolation.
///
/// Records are append-only; the only removal operation is a wholesale clear.
/// The store owns serial-number assignment so concurrent appends stay
/// monotonic and gap-free.
pub trait ScreeningStore: Send + Sync {
    /// Persist `outcome` under the next serial number (1-based, strictly
    /// increasing, no gaps between clears).
    fn append(&self, outcome: ScreeningOutcome) -> Result<ScreeningRecord, StoreError>;
    /// Every record in append order.
    fn all(&self) -> Result<Vec<ScreeningRecord>, StoreError>;
    /// Drop all records and restart serial assignment at 1.
    fn clear(&self) -> Result<(), StoreError>;
}

/// Error enumeration for store failures.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Mutex-protected in-memory store; the default backing for a single
/// screening session.
#[derive(Debug, Default)]
pub struct InMemoryScreeningStore {
    records: Mutex<Vec<ScreeningRecord>>,
}

impl ScreeningStore for InMemoryScreeningStore {
    fn append(&self, outcome: ScreeningOutcome) -> Result<ScreeningRecord, StoreError> {
        let mut guard = self.records.lock().expect("store mutex poisoned");
        let serial = guard.len() as u32 + 1;
        let record = outcome.into_record(serial);
        guard.push(record.clone());
        Ok(record)
    }

    fn all(&self) -> Result<Vec<ScreeningRecord>, StoreError> {
        let guard = self.records.lock().expect("store mutex poisoned");
        Ok(guard.clone())
    }

    fn clear(&self) -> Result<(), StoreError> {
        let mut guard = self.records.lock().expect("store mutex poisoned");
        guard.clear();
        Ok(())
    }
}

/// Feedback payload delivered to unsuitable candidates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RejectionNotice {
    pub email: String,
    pub name: String,
    pub skills_lacking: BTreeSet<String>,
    pub match_score: f64,
}

impl RejectionNotice {
    /// Candidate-facing feedback body.
    pub fn message(&self) -> String {
        let lacking = if self.skills_lacking.is_empty() {
            NOT_AVAILABLE.to_string()
        } else {
            self.skills_lacking
                .iter()
                .cloned()
                .collect::<Vec<_>>()
                .join(", ")
        };

        format!(
            "Dear {},\n\n\
             Thank you for applying for the position. After careful consideration, \
             we regret to inform you that your application has not been successful.\n\n\
             - Match Score: {}%\n\
             - Skills Lacking: {}\n\n\
             Consider strengthening the areas above through courses or certifications, \
             and apply again for future openings that match your experience.\n\n\
             Best regards,\nHiring Team",
            self.name, self.match_score, lacking
        )
    }
}

/// Outbound notification boundary (e.g., an SMTP adapter in the hosting
/// service). Delivery failures are reported, never panicked.
pub trait RejectionNotifier: Send + Sync {
    fn notify(&self, notice: &RejectionNotice) -> Result<(), NotifyError>;
}

/// Notification dispatch error.
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("notification transport unavailable: {0}")]
    Transport(String),
}

/// Notifier that records the outcome in the log stream only.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingNotifier;

impl RejectionNotifier for LoggingNotifier {
    fn notify(&self, notice: &RejectionNotice) -> Result<(), NotifyError> {
        tracing::info!(
            email = %notice.email,
            name = %notice.name,
            match_score = notice.match_score,
            "rejection notice issued"
        );
        Ok(())
    }
}
