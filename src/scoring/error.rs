// Scoring errors: what can go wrong between a word and its TF-IDF value.

/// Failures of the term statistics and score assembly operations.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ScoreError {
    /// The word reduces to no lemma at all (stop word, punctuation,
    /// possessive marker). Per-entry: matrix builders skip it.
    #[error("The chosen word {word:?} has no meaningful lemma")]
    NoMeaningfulLemma { word: String },

    /// Scoring needs at least one document.
    #[error("Corpus is empty; at least one document is required")]
    EmptyCorpus,
}

impl ScoreError {
    pub fn no_lemma(word: &str) -> Self {
        Self::NoMeaningfulLemma {
            word: word.to_string(),
        }
    }

    /// Whether this error only affects a single entry.
    pub fn is_per_entry(&self) -> bool {
        matches!(self, Self::NoMeaningfulLemma { .. })
    }
}

pub type Result<T> = core::result::Result<T, ScoreError>;
