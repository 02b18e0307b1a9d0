use super::domain::{SentimentLabel, SentimentReading};

/// Opaque scoring oracle boundary for resume sentiment.
///
/// Implementations classify `text` into one of the five labels with a
/// confidence in [0, 1] rounded to 2 decimals, and must return
/// `(Neutral, 0.5)` for blank text.
pub trait SentimentOracle: Send + Sync {
    fn analyze(&self, text: &str) -> SentimentReading;
}

/// Stand-in oracle used until a model-backed implementation is wired in by
/// the hosting service. Always reports the blank-text convention.
#[derive(Debug, Default, Clone, Copy)]
pub struct NeutralSentiment;

impl SentimentOracle for NeutralSentiment {
    fn analyze(&self, _text: &str) -> SentimentReading {
        SentimentReading {
            label: SentimentLabel::Neutral,
            score: 0.5,
        }
    }
}
