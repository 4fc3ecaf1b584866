// Lemma extraction: the content-word filter in front of all term statistics.

use super::annotator::{Document, StopWords, Token};

/// Raw text that survives the stop-word filter even though its lowercase form
/// ("us") is a stop word.
const COUNTRY_ABBREVIATION: &str = "US";

/// Possessive tag and clitic, both dropped.
const POSSESSIVE_TAG: &str = "POS";
const POSSESSIVE_CLITIC: &str = "'s";

/// Whether a token carries content worth scoring.
pub fn is_content_token(token: &Token, stop_words: &StopWords) -> bool {
    !token.is_punct
        && !token.is_space
        && (token.text == COUNTRY_ABBREVIATION || !stop_words.contains(&token.lower))
        && token.tag != POSSESSIVE_TAG
        && token.text != POSSESSIVE_CLITIC
}

/// Lemmas of the content tokens of `doc`, in document order.
///
/// Returns an empty vector when nothing qualifies.
pub fn lemmatize(doc: &Document, stop_words: &StopWords) -> Vec<String> {
    doc.tokens()
        .iter()
        .filter(|token| is_content_token(token, stop_words))
        .map(|token| token.lemma.clone())
        .collect()
}

/// A Document together with its lemma sequence, computed once.
#[derive(Debug, Clone)]
pub struct LemmatizedDocument {
    document: Document,
    lemmas: Vec<String>,
}

impl LemmatizedDocument {
    pub fn new(document: Document, stop_words: &StopWords) -> Self {
        let lemmas = lemmatize(&document, stop_words);
        Self { document, lemmas }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn lemmas(&self) -> &[String] {
        &self.lemmas
    }

    /// Occurrences of `lemma` in the lemma sequence.
    pub fn count(&self, lemma: &str) -> usize {
        self.lemmas.iter().filter(|l| l.as_str() == lemma).count()
    }

    pub fn contains(&self, lemma: &str) -> bool {
        self.lemmas.iter().any(|l| l == lemma)
    }
}
