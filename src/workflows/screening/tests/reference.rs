use std::io::Write;
use std::path::PathBuf;

use tempfile::NamedTempFile;

use crate::config::CorporaConfig;
use crate::workflows::screening::reference::{ReferenceCorpora, ReferenceError};

fn csv_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write csv");
    file
}

#[test]
fn loads_resume_corpus_and_institutions() {
    let corpus = csv_file("resume_text\nfirst historical resume\nsecond historical resume\n");
    let institutions = csv_file("institution_name\nMIT\nStanford\n");

    let config = CorporaConfig {
        resume_corpus: Some(corpus.path().to_path_buf()),
        valid_institutions: Some(institutions.path().to_path_buf()),
    };

    let references = ReferenceCorpora::load(&config).expect("reference data loads");
    assert_eq!(references.resume_corpus().len(), 2);
    assert_eq!(
        references.valid_institutions(),
        Some(&["MIT".to_string(), "Stanford".to_string()][..])
    );
}

#[test]
fn unconfigured_paths_yield_empty_defaults() {
    let references = ReferenceCorpora::load(&CorporaConfig::default()).expect("loads");
    assert!(references.resume_corpus().is_empty());
    assert!(references.valid_institutions().is_none());
}

#[test]
fn missing_resume_corpus_fails_soft() {
    let config = CorporaConfig {
        resume_corpus: Some(PathBuf::from("/nonexistent/resume_data.csv")),
        valid_institutions: None,
    };

    let references = ReferenceCorpora::load(&config).expect("soft failure still loads");
    assert!(references.resume_corpus().is_empty());
}

#[test]
fn malformed_resume_corpus_fails_soft() {
    let corpus = csv_file("wrong_column\nsome text\n");
    let config = CorporaConfig {
        resume_corpus: Some(corpus.path().to_path_buf()),
        valid_institutions: None,
    };

    let references = ReferenceCorpora::load(&config).expect("soft failure still loads");
    assert!(references.resume_corpus().is_empty());
}

#[test]
fn missing_institution_list_is_a_hard_error() {
    let config = CorporaConfig {
        resume_corpus: None,
        valid_institutions: Some(PathBuf::from("/nonexistent/valid_institutions.csv")),
    };

    match ReferenceCorpora::load(&config) {
        Err(ReferenceError::Institutions { path, .. }) => {
            assert!(path.contains("valid_institutions.csv"));
        }
        other => panic!("expected institutions load error, got {other:?}"),
    }
}
