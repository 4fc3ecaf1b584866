// Shared test double: a whitespace annotator with a fixed lemma table.
//
// Keeps scoring tests independent of the rule annotator's stemmer and of the
// contents of the bundled English stop-word list.

#![allow(dead_code)]

use std::collections::HashMap;

use nlp_tfidf::text::annotator::{Annotator, Document, StopWords, Token};

pub struct WhitespaceAnnotator {
    lemmas: HashMap<String, String>,
    stop_words: StopWords,
}

impl WhitespaceAnnotator {
    pub fn new(stop_words: &[&str], lemmas: &[(&str, &str)]) -> Self {
        Self {
            lemmas: lemmas
                .iter()
                .map(|(form, lemma)| (form.to_string(), lemma.to_string()))
                .collect(),
            stop_words: StopWords::new(stop_words),
        }
    }

    /// "the" and "us" as stop words, a few plural/past forms as lemmas.
    pub fn standard() -> Self {
        Self::new(
            &["the", "a", "us", "is", "and", "s"],
            &[("cats", "cat"), ("dogs", "dog"), ("sat", "sit"), ("ran", "run")],
        )
    }
}

impl Annotator for WhitespaceAnnotator {
    fn annotate(&self, text: &str) -> Document {
        let tokens = text
            .split_whitespace()
            .map(|raw| {
                if raw.chars().all(|c| c.is_ascii_punctuation()) {
                    Token::punct(raw, ".")
                } else if raw == "'s" {
                    Token::word(raw, raw, "POS")
                } else {
                    let lower = raw.to_lowercase();
                    let lemma = if raw.len() > 1 && raw.chars().all(|c| c.is_uppercase()) {
                        raw.to_string()
                    } else {
                        self.lemmas.get(&lower).cloned().unwrap_or(lower)
                    };
                    Token::word(raw, &lemma, "NN")
                }
            })
            .collect();
        Document::new(tokens)
    }

    fn stop_words(&self) -> &StopWords {
        &self.stop_words
    }
}
