use std::collections::{BTreeSet, HashSet};

use once_cell::sync::Lazy;
use regex::Regex;

static WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[a-z0-9#+.-]+").expect("word pattern"));

/// Fixed vocabulary of recognized skill phrases, matched case-insensitively.
///
/// Single-word entries are matched against whole word tokens
/// (`[a-z0-9#+.-]`-class runs, with trailing dots stripped so sentence-final
/// mentions still count). Entries containing spaces, slashes, or other
/// characters outside the token class — "machine learning", "ci/cd",
/// "power bi" — are matched as substrings of the lowercased text; plain
/// whitespace tokenization would never surface them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillVocabulary {
    entries: BTreeSet<String>,
}

impl SkillVocabulary {
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|entry| entry.into().to_lowercase())
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Vocabulary entries present in `text`.
    pub fn matches(&self, text: &str) -> BTreeSet<String> {
        let lowered = text.to_lowercase();

        let mut tokens: HashSet<&str> = HashSet::new();
        for token in WORD_RE.find_iter(&lowered) {
            let token = token.as_str();
            tokens.insert(token);
            tokens.insert(token.trim_end_matches('.'));
        }

        let mut found = BTreeSet::new();
        for entry in &self.entries {
            let hit = if is_phrase(entry) {
                lowered.contains(entry.as_str())
            } else {
                tokens.contains(entry.as_str())
            };
            if hit {
                found.insert(entry.clone());
            }
        }

        found
    }
}

fn is_phrase(entry: &str) -> bool {
    entry
        .chars()
        .any(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '#' | '+' | '.' | '-')))
}

impl Default for SkillVocabulary {
    fn default() -> Self {
        Self::from_entries(DEFAULT_SKILLS)
    }
}

/// Built-in skill list covering the vocabularies screened for by default.
const DEFAULT_SKILLS: [&str; 93] = [
    // Programming languages
    "python",
    "java",
    "c++",
    "c#",
    "sql",
    "javascript",
    "typescript",
    "ruby",
    "go",
    "rust",
    // Web development
    "html",
    "css",
    "bootstrap",
    "tailwind",
    "react",
    "angular",
    "vue.js",
    "node.js",
    "express.js",
    // Databases
    "mysql",
    "postgresql",
    "mongodb",
    "firebase",
    "oracle",
    "redis",
    "cassandra",
    // Machine learning & AI
    "machine learning",
    "deep learning",
    "artificial intelligence",
    "data science",
    "computer vision",
    "natural language processing",
    "reinforcement learning",
    // ML & data science tools
    "tensorflow",
    "keras",
    "pytorch",
    "scikit-learn",
    "pandas",
    "numpy",
    "matplotlib",
    "seaborn",
    "huggingface",
    "openai",
    "llms",
    "generative ai",
    // DevOps & cloud
    "devops",
    "docker",
    "kubernetes",
    "linux",
    "bash",
    "shell scripting",
    "aws",
    "azure",
    "gcp",
    "terraform",
    "ansible",
    "jenkins",
    "git",
    "github",
    "bitbucket",
    // Data engineering & big data
    "big data",
    "hadoop",
    "spark",
    "data engineering",
    "etl",
    "databricks",
    // Cybersecurity
    "cybersecurity",
    "penetration testing",
    "network security",
    "firewalls",
    // Software testing
    "software testing",
    "selenium",
    "junit",
    "pytest",
    "robot framework",
    // Business intelligence & analytics
    "tableau",
    "power bi",
    "qlikview",
    "looker",
    "snowflake",
    // APIs & backend
    "rest api",
    "graphql",
    "fastapi",
    "flask",
    "django",
    "spring boot",
    "asp.net",
    // Other
    "ci/cd",
    "microservices",
    "serverless",
    "blockchain",
    "web3",
    "metaverse",
];
