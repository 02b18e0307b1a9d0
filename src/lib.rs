//! Resume screening core: turns a job description and a batch of resume
//! documents into screening records (fit score, fraud signals, sentiment)
//! plus aggregate dashboard statistics and tabular exports.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;

use config::AppConfig;
use error::AppError;
use workflows::screening::ReferenceCorpora;

/// Load configuration, initialize telemetry, and read the reference corpora.
///
/// Convenience entry point for hosting services; the individual steps can be
/// run separately when the host owns its own subscriber.
pub fn bootstrap() -> Result<(AppConfig, ReferenceCorpora), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    let references = ReferenceCorpora::load(&config.corpora)?;
    Ok((config, references))
}
