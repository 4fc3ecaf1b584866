// Score assembly: TF x IDF for a word, a document, and the whole corpus.
//
// `scale` is one switch for both halves: it normalizes TF by document length
// and puts IDF on a log scale. Entries whose word has no meaningful lemma are
// left out of maps and matrix rows; only an empty corpus fails a whole call.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::corpus::{document_label, Corpus};
use super::error::Result;
use super::stats::{
    idf_from_count, inverse_document_frequency, lemma_frequency, term_frequency, word_lemma,
};
use crate::text::annotator::Annotator;
use crate::text::lemmatize::{is_content_token, LemmatizedDocument};

/// One matrix row: a document label and its sparse lemma scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreRow {
    pub label: String,
    pub scores: BTreeMap<String, f64>,
}

/// Document x lemma TF-IDF matrix.
///
/// Rows follow corpus order. Columns are the corpus vocabulary, sorted. A lemma
/// missing from a row means "no signal", not zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreMatrix {
    pub columns: Vec<String>,
    pub rows: Vec<ScoreRow>,
}

impl ScoreMatrix {
    pub fn get(&self, row: usize, lemma: &str) -> Option<f64> {
        self.rows.get(row)?.scores.get(lemma).copied()
    }

    /// Smallest and largest present value, if any.
    pub fn value_range(&self) -> Option<(f64, f64)> {
        self.rows
            .iter()
            .flat_map(|r| r.scores.values().copied())
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }
}

/// TF, IDF and their product for one word in one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordScore {
    pub word: String,
    pub lemma: String,
    pub document: usize,
    pub tf: f64,
    pub idf: f64,
    pub tf_idf: f64,
    pub scaled: bool,
}

/// IDF side of one vocabulary column, shared by every row.
struct Column {
    lemma: String,
    /// The column lemma re-filtered as a word; None when it filters away
    scored_as: Option<String>,
    idf: f64,
}

/// Computes TF-IDF scores with an explicitly supplied annotator.
pub struct TfIdfScorer<'a, A: Annotator + ?Sized> {
    annotator: &'a A,
}

impl<'a, A: Annotator + ?Sized> TfIdfScorer<'a, A> {
    pub fn new(annotator: &'a A) -> Self {
        Self { annotator }
    }

    pub fn annotator(&self) -> &'a A {
        self.annotator
    }

    /// TF-IDF of `word` for `document` against `corpus`.
    pub fn tf_idf(
        &self,
        word: &str,
        document: &LemmatizedDocument,
        corpus: &Corpus,
        scale: bool,
    ) -> Result<f64> {
        corpus.ensure_not_empty()?;
        let tf = term_frequency(self.annotator, word, document, scale)?;
        let idf = inverse_document_frequency(self.annotator, word, corpus, scale)?;
        Ok(tf * idf)
    }

    /// The TF-IDF of `word` in document `index` together with its factors.
    ///
    /// An out-of-range `index` gives `Ok(None)`.
    pub fn explain(
        &self,
        word: &str,
        index: usize,
        corpus: &Corpus,
        scale: bool,
    ) -> Result<Option<WordScore>> {
        corpus.ensure_not_empty()?;
        let Some(document) = corpus.get(index) else {
            return Ok(None);
        };
        let lemma = word_lemma(self.annotator, word)?;
        let tf = lemma_frequency(&lemma, document, scale);
        let idf = idf_from_count(corpus.document_count(&lemma), corpus.len(), scale);

        Ok(Some(WordScore {
            word: word.to_string(),
            lemma,
            document: index,
            tf,
            idf,
            tf_idf: tf * idf,
            scaled: scale,
        }))
    }

    /// TF-IDF keyed by lemma for every content token of `document`.
    ///
    /// Walks tokens rather than distinct lemmas; a repeated lemma is written
    /// again and the last token wins (all writes carry the same value).
    /// Tokens the lemma filter drops in context are skipped up front, since a
    /// clitic such as "'s" re-annotated on its own is no longer a clitic.
    pub fn document_scores(
        &self,
        document: &LemmatizedDocument,
        corpus: &Corpus,
        scale: bool,
    ) -> Result<BTreeMap<String, f64>> {
        corpus.ensure_not_empty()?;
        let mut scores = BTreeMap::new();

        let stop_words = self.annotator.stop_words();
        for token in document.document().tokens() {
            if !is_content_token(token, stop_words) {
                continue;
            }
            match self.tf_idf(&token.text, document, corpus, scale) {
                Ok(score) => {
                    scores.insert(token.lemma.clone(), score);
                }
                Err(e) if e.is_per_entry() => continue,
                Err(e) => return Err(e),
            }
        }

        Ok(scores)
    }

    /// Every distinct lemma in the corpus, sorted.
    pub fn corpus_vocabulary(&self, corpus: &Corpus) -> BTreeSet<String> {
        corpus
            .documents()
            .iter()
            .flat_map(|d| d.lemmas().iter().cloned())
            .collect()
    }

    /// The full document x lemma matrix.
    pub fn corpus_scores(&self, corpus: &Corpus, scale: bool) -> Result<ScoreMatrix> {
        let rows = self.corpus_score_rows(corpus, scale)?;
        let columns = rows.columns().to_vec();
        let rows: Vec<ScoreRow> = rows.map(|(_, row)| row).collect();

        info!(
            documents = rows.len(),
            vocabulary = columns.len(),
            scaled = scale,
            "Built TF-IDF matrix"
        );

        Ok(ScoreMatrix { columns, rows })
    }

    /// Lazily computed matrix rows, in corpus order.
    ///
    /// Vocabulary and per-column IDF are computed up front; each `next()` then
    /// scores one document. Dropping the iterator abandons the rest.
    pub fn corpus_score_rows<'c>(
        &self,
        corpus: &'c Corpus,
        scale: bool,
    ) -> Result<ScoreRows<'c>> {
        corpus.ensure_not_empty()?;

        let vocabulary = self.corpus_vocabulary(corpus);
        let columns: Vec<Column> = vocabulary
            .into_iter()
            .map(|lemma| {
                let scored_as = word_lemma(self.annotator, &lemma).ok();
                let idf = scored_as.as_deref().map_or(0.0, |l| {
                    idf_from_count(corpus.document_count(l), corpus.len(), scale)
                });
                Column {
                    lemma,
                    scored_as,
                    idf,
                }
            })
            .collect();

        let dropped = columns.iter().filter(|c| c.scored_as.is_none()).count();
        if dropped > 0 {
            debug!(dropped, "Vocabulary lemmas without a meaningful lemma of their own");
        }

        Ok(ScoreRows {
            corpus,
            scale,
            names: columns.iter().map(|c| c.lemma.clone()).collect(),
            columns,
            next: 0,
        })
    }
}

/// Iterator returned by [`TfIdfScorer::corpus_score_rows`].
pub struct ScoreRows<'c> {
    corpus: &'c Corpus,
    scale: bool,
    columns: Vec<Column>,
    names: Vec<String>,
    next: usize,
}

impl ScoreRows<'_> {
    /// Vocabulary the rows are scored over.
    pub fn columns(&self) -> &[String] {
        &self.names
    }
}

impl Iterator for ScoreRows<'_> {
    type Item = (usize, ScoreRow);

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.next;
        let document = self.corpus.get(index)?;
        self.next += 1;

        let scores: BTreeMap<String, f64> = self
            .columns
            .iter()
            .filter_map(|col| {
                let lemma = col.scored_as.as_deref()?;
                let tf = lemma_frequency(lemma, document, self.scale);
                Some((col.lemma.clone(), tf * col.idf))
            })
            .collect();

        debug!(document = index, entries = scores.len(), "Scored document");

        Some((
            index,
            ScoreRow {
                label: document_label(index),
                scores,
            },
        ))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.corpus.len().saturating_sub(self.next);
        (left, Some(left))
    }
}

impl ExactSizeIterator for ScoreRows<'_> {}
