use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::workflows::screening::matching::cosine_similarity;

static TERM_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[a-z0-9]+").expect("term pattern"));

/// Flag when the candidate text's TF-IDF vector is more similar than
/// `threshold` to any corpus entry. An empty corpus or blank candidate text
/// never flags.
pub(crate) fn check_plagiarism(candidate_text: &str, corpus: &[String], threshold: f64) -> bool {
    if corpus.is_empty() || candidate_text.trim().is_empty() {
        return false;
    }

    let mut documents: Vec<HashMap<String, f64>> =
        corpus.iter().map(|text| term_frequencies(text)).collect();
    documents.push(term_frequencies(candidate_text));

    let model = TfIdfModel::fit(&documents);
    let vectors: Vec<Vec<f64>> = documents.iter().map(|doc| model.vector(doc)).collect();

    match vectors.split_last() {
        Some((candidate_vector, reference_vectors)) => reference_vectors
            .iter()
            .any(|reference| cosine_similarity(candidate_vector, reference) > threshold),
        None => false,
    }
}

/// TF-IDF vector space over a document set, with smoothed inverse document
/// frequencies so unseen terms never divide by zero.
struct TfIdfModel {
    terms: Vec<String>,
    idf: Vec<f64>,
}

impl TfIdfModel {
    fn fit(documents: &[HashMap<String, f64>]) -> Self {
        let mut document_frequency: HashMap<&str, usize> = HashMap::new();
        for document in documents {
            for term in document.keys() {
                *document_frequency.entry(term).or_insert(0) += 1;
            }
        }

        let mut terms: Vec<String> = document_frequency
            .keys()
            .map(|term| term.to_string())
            .collect();
        terms.sort();

        let total = documents.len() as f64;
        let idf = terms
            .iter()
            .map(|term| {
                let df = document_frequency[term.as_str()] as f64;
                ((1.0 + total) / (1.0 + df)).ln() + 1.0
            })
            .collect();

        Self { terms, idf }
    }

    fn vector(&self, document: &HashMap<String, f64>) -> Vec<f64> {
        self.terms
            .iter()
            .zip(&self.idf)
            .map(|(term, idf)| document.get(term).copied().unwrap_or(0.0) * idf)
            .collect()
    }
}

fn term_frequencies(text: &str) -> HashMap<String, f64> {
    let lowered = text.to_lowercase();
    let mut counts: HashMap<String, f64> = HashMap::new();
    for term in TERM_RE.find_iter(&lowered) {
        *counts.entry(term.as_str().to_string()).or_insert(0.0) += 1.0;
    }
    counts
}
