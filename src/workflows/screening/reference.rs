use std::path::Path;

use serde::Deserialize;
use tracing::warn;

use crate::config::CorporaConfig;

/// Reference data backing the fraud heuristics, loaded once before any
/// screening runs.
#[derive(Debug, Clone, Default)]
pub struct ReferenceCorpora {
    resume_corpus: Vec<String>,
    valid_institutions: Option<Vec<String>>,
}

/// Errors raised when configured reference data cannot be loaded.
///
/// Only the institution list is a hard error: the plagiarism corpus fails
/// soft (warn + empty corpus) so a missing file cannot block screening.
#[derive(Debug, thiserror::Error)]
pub enum ReferenceError {
    #[error("failed to load valid institutions from {path}: {source}")]
    Institutions {
        path: String,
        #[source]
        source: csv::Error,
    },
}

#[derive(Debug, Deserialize)]
struct ResumeRow {
    resume_text: String,
}

#[derive(Debug, Deserialize)]
struct InstitutionRow {
    institution_name: String,
}

impl ReferenceCorpora {
    pub fn load(config: &CorporaConfig) -> Result<Self, ReferenceError> {
        let resume_corpus = match &config.resume_corpus {
            Some(path) => read_resume_corpus(path),
            None => Vec::new(),
        };

        let valid_institutions = match &config.valid_institutions {
            Some(path) => Some(read_institutions(path)?),
            None => None,
        };

        Ok(Self {
            resume_corpus,
            valid_institutions,
        })
    }

    /// Build corpora directly, bypassing the filesystem. `None` institutions
    /// disables the institution check.
    pub fn in_memory(resume_corpus: Vec<String>, valid_institutions: Option<Vec<String>>) -> Self {
        Self {
            resume_corpus,
            valid_institutions,
        }
    }

    pub fn resume_corpus(&self) -> &[String] {
        &self.resume_corpus
    }

    pub fn valid_institutions(&self) -> Option<&[String]> {
        self.valid_institutions.as_deref()
    }
}

fn read_resume_corpus(path: &Path) -> Vec<String> {
    match try_read_resume_corpus(path) {
        Ok(rows) => rows,
        Err(err) => {
            warn!(
                path = %path.display(),
                error = %err,
                "resume corpus unavailable, plagiarism check will not flag"
            );
            Vec::new()
        }
    }
}

fn try_read_resume_corpus(path: &Path) -> Result<Vec<String>, csv::Error> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)?;

    let mut rows = Vec::new();
    for row in reader.deserialize::<ResumeRow>() {
        rows.push(row?.resume_text);
    }
    Ok(rows)
}

fn read_institutions(path: &Path) -> Result<Vec<String>, ReferenceError> {
    let into_error = |source: csv::Error| ReferenceError::Institutions {
        path: path.display().to_string(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(into_error)?;

    let mut rows = Vec::new();
    for row in reader.deserialize::<InstitutionRow>() {
        rows.push(row.map_err(into_error)?.institution_name);
    }
    Ok(rows)
}
