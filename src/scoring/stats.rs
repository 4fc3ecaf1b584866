// Term statistics: term frequency of a word in one document and inverse
// document frequency of a word across the corpus.
//
// Both operations take a raw word, run it through the same annotator and lemma
// filter as the documents, and work on its first lemma. A word that filters
// down to nothing is reported as NoMeaningfulLemma instead of scoring zero.

use super::corpus::Corpus;
use super::error::{Result, ScoreError};
use crate::text::annotator::Annotator;
use crate::text::lemmatize::{lemmatize, LemmatizedDocument};

/// The lemma a single word is scored under.
pub fn word_lemma<A>(annotator: &A, word: &str) -> Result<String>
where
    A: Annotator + ?Sized,
{
    let doc = annotator.annotate(word);
    lemmatize(&doc, annotator.stop_words())
        .into_iter()
        .next()
        .ok_or_else(|| ScoreError::no_lemma(word))
}

/// Occurrences of `lemma` in `document`, or their share of the document's
/// lemmas when `normalize` is set.
///
/// A document without lemmas has a normalized frequency of 0.0.
pub fn lemma_frequency(lemma: &str, document: &LemmatizedDocument, normalize: bool) -> f64 {
    let count = document.count(lemma) as f64;
    if !normalize {
        return count;
    }
    match document.lemmas().len() {
        0 => 0.0,
        len => count / len as f64,
    }
}

/// Smoothed IDF from a document count.
///
/// Plain: `1 / (doc_count + 1)`. Log: `ln(corpus_size / (doc_count + 1))`,
/// which goes negative once the lemma is in every document.
pub fn idf_from_count(doc_count: usize, corpus_size: usize, log_scale: bool) -> f64 {
    let smoothed = (doc_count + 1) as f64;
    if log_scale {
        (corpus_size as f64 / smoothed).ln()
    } else {
        1.0 / smoothed
    }
}

/// TF of `word` in `document`.
pub fn term_frequency<A>(
    annotator: &A,
    word: &str,
    document: &LemmatizedDocument,
    normalize: bool,
) -> Result<f64>
where
    A: Annotator + ?Sized,
{
    let lemma = word_lemma(annotator, word)?;
    Ok(lemma_frequency(&lemma, document, normalize))
}

/// IDF of `word` over `corpus`.
pub fn inverse_document_frequency<A>(
    annotator: &A,
    word: &str,
    corpus: &Corpus,
    log_scale: bool,
) -> Result<f64>
where
    A: Annotator + ?Sized,
{
    corpus.ensure_not_empty()?;
    let lemma = word_lemma(annotator, word)?;
    Ok(idf_from_count(
        corpus.document_count(&lemma),
        corpus.len(),
        log_scale,
    ))
}
