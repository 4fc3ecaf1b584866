// Corpus: the ordered document collection every statistic is computed over.
//
// Documents are lemmatized once, when they enter the corpus. Position in the
// corpus is the only identity a document has ("Doc 0", "Doc 1", ...).

use tracing::debug;

use super::error::{Result, ScoreError};
use crate::text::annotator::{Annotator, Document, StopWords};
use crate::text::lemmatize::LemmatizedDocument;

#[derive(Debug, Clone, Default)]
pub struct Corpus {
    documents: Vec<LemmatizedDocument>,
}

impl Corpus {
    /// Annotate and lemmatize each text, keeping input order.
    pub fn from_texts<A, S>(annotator: &A, texts: &[S]) -> Self
    where
        A: Annotator + ?Sized,
        S: AsRef<str>,
    {
        let documents = texts
            .iter()
            .map(|text| annotator.annotate(text.as_ref()))
            .collect();
        Self::from_documents(documents, annotator.stop_words())
    }

    /// Build from already annotated documents.
    pub fn from_documents(documents: Vec<Document>, stop_words: &StopWords) -> Self {
        let documents: Vec<LemmatizedDocument> = documents
            .into_iter()
            .map(|doc| LemmatizedDocument::new(doc, stop_words))
            .collect();

        debug!(
            documents = documents.len(),
            lemmas = documents.iter().map(|d| d.lemmas().len()).sum::<usize>(),
            "Corpus lemmatized"
        );

        Self { documents }
    }

    pub fn documents(&self) -> &[LemmatizedDocument] {
        &self.documents
    }

    pub fn get(&self, index: usize) -> Option<&LemmatizedDocument> {
        self.documents.get(index)
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Number of documents whose lemma sequence contains `lemma`.
    pub fn document_count(&self, lemma: &str) -> usize {
        self.documents.iter().filter(|d| d.contains(lemma)).count()
    }

    /// Fails with `EmptyCorpus` when there is nothing to score against.
    pub fn ensure_not_empty(&self) -> Result<()> {
        if self.documents.is_empty() {
            return Err(ScoreError::EmptyCorpus);
        }
        Ok(())
    }
}

/// Row label used by every presentation of the matrix.
pub fn document_label(index: usize) -> String {
    format!("Doc {index}")
}
