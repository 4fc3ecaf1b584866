// Composition tests: verifying that the pipeline stages chain together.
//
// These tests exercise the data flow between modules:
//   Annotator -> Corpus -> document/corpus scores -> export
// without touching the filesystem.

mod common;

use std::collections::BTreeSet;

use nlp_tfidf::output::export::{to_csv, to_json};
use nlp_tfidf::samples::sample_documents;
use nlp_tfidf::scoring::assembler::{ScoreMatrix, TfIdfScorer};
use nlp_tfidf::scoring::corpus::Corpus;
use nlp_tfidf::scoring::stats::word_lemma;
use nlp_tfidf::text::rules::RuleAnnotator;

use common::WhitespaceAnnotator;

const EPS: f64 = 1e-12;

// ============================================================
// Vocabulary
// ============================================================

#[test]
fn vocabulary_is_a_union_not_a_concatenation() {
    let annotator = WhitespaceAnnotator::standard();
    let corpus = Corpus::from_texts(&annotator, &["cat cat dog", "dogs and cats", "bird"]);
    let vocab = TfIdfScorer::new(&annotator).corpus_vocabulary(&corpus);

    let expected: BTreeSet<String> = ["bird", "cat", "dog"].iter().map(|s| s.to_string()).collect();
    assert_eq!(vocab, expected);
}

// ============================================================
// Document scores
// ============================================================

#[test]
fn document_scores_skip_functional_tokens() {
    let annotator = WhitespaceAnnotator::standard();
    let corpus = Corpus::from_texts(&annotator, &["the cat sat .", "the dog sat"]);
    let scorer = TfIdfScorer::new(&annotator);
    let scores = scorer
        .document_scores(corpus.get(0).unwrap(), &corpus, false)
        .unwrap();

    let keys: Vec<&str> = scores.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["cat", "sit"]);
    assert_eq!(scores["cat"], 0.5);
    assert!((scores["sit"] - 1.0 / 3.0).abs() < EPS);
}

#[test]
fn repeated_lemmas_collapse_to_one_entry() {
    let annotator = WhitespaceAnnotator::standard();
    let corpus = Corpus::from_texts(&annotator, &["cats cat cats", "dog"]);
    let scorer = TfIdfScorer::new(&annotator);
    let scores = scorer
        .document_scores(corpus.get(0).unwrap(), &corpus, true)
        .unwrap();

    assert_eq!(scores.len(), 1);
    // TF 3/3, IDF ln(2 / 2)
    assert!(scores["cat"].abs() < EPS);
}

#[test]
fn document_scores_agree_with_matrix_rows() {
    let annotator = WhitespaceAnnotator::standard();
    let corpus = Corpus::from_texts(
        &annotator,
        &["cats ran and cats sat", "a dog ran", "the dog sat US", "US cat"],
    );
    let scorer = TfIdfScorer::new(&annotator);

    for scale in [false, true] {
        let matrix = scorer.corpus_scores(&corpus, scale).unwrap();
        for (i, doc) in corpus.documents().iter().enumerate() {
            let scores = scorer.document_scores(doc, &corpus, scale).unwrap();
            for (lemma, value) in &scores {
                let cell = matrix.get(i, lemma).expect("lemma present in matrix row");
                assert!((cell - value).abs() < EPS, "{lemma} in doc {i}");
            }
        }
    }
}

// ============================================================
// Corpus matrix
// ============================================================

#[test]
fn matrix_has_one_row_per_document_in_order() {
    let annotator = RuleAnnotator::new().unwrap();
    let corpus = Corpus::from_texts(&annotator, &sample_documents());
    let scorer = TfIdfScorer::new(&annotator);
    let matrix = scorer.corpus_scores(&corpus, false).unwrap();

    assert_eq!(matrix.rows.len(), corpus.len());
    for (i, row) in matrix.rows.iter().enumerate() {
        assert_eq!(row.label, format!("Doc {i}"));
    }

    let vocab = scorer.corpus_vocabulary(&corpus);
    assert_eq!(matrix.columns, vocab.iter().cloned().collect::<Vec<_>>());
    for row in &matrix.rows {
        for lemma in row.scores.keys() {
            assert!(vocab.contains(lemma), "foreign column {lemma}");
        }
    }
}

#[test]
fn sample_matrix_keeps_the_us_column() {
    let annotator = RuleAnnotator::new().unwrap();
    let corpus = Corpus::from_texts(&annotator, &sample_documents());
    let matrix = TfIdfScorer::new(&annotator)
        .corpus_scores(&corpus, false)
        .unwrap();

    assert!(matrix.columns.iter().any(|c| c == "US"));
    // Doc 0 and Doc 3 mention the US: TF 1, IDF 1 / 3
    let us = matrix.get(0, "US").unwrap();
    assert!((us - 1.0 / 3.0).abs() < EPS);
    assert_eq!(matrix.get(1, "US"), Some(0.0));
}

#[test]
fn matrix_cells_equal_single_word_tf_idf() {
    let annotator = WhitespaceAnnotator::standard();
    let corpus = Corpus::from_texts(&annotator, &["cats ran", "dog ran", "dog sat", "bird"]);
    let scorer = TfIdfScorer::new(&annotator);

    for scale in [false, true] {
        let matrix = scorer.corpus_scores(&corpus, scale).unwrap();
        for (i, doc) in corpus.documents().iter().enumerate() {
            for lemma in &matrix.columns {
                let expected = scorer.tf_idf(lemma, doc, &corpus, scale).unwrap();
                assert!((matrix.get(i, lemma).unwrap() - expected).abs() < EPS);
            }
        }
    }
}

#[test]
fn lemma_that_filters_away_is_omitted_from_rows() {
    // "is" lemmatizes to "be", which is itself a stop word
    let annotator = WhitespaceAnnotator::new(&["be"], &[("is", "be")]);
    let corpus = Corpus::from_texts(&annotator, &["cat is", "dog"]);
    let scorer = TfIdfScorer::new(&annotator);

    let matrix = scorer.corpus_scores(&corpus, false).unwrap();
    assert!(matrix.columns.contains(&"be".to_string()));
    assert!(matrix.rows.iter().all(|r| !r.scores.contains_key("be")));
    assert_eq!(matrix.get(0, "cat"), Some(0.5));
}

#[test]
fn streaming_rows_match_full_matrix_and_can_stop_early() {
    let annotator = WhitespaceAnnotator::standard();
    let corpus = Corpus::from_texts(&annotator, &["cat", "dog cat", "bird", "US"]);
    let scorer = TfIdfScorer::new(&annotator);
    let full = scorer.corpus_scores(&corpus, true).unwrap();

    let rows = scorer.corpus_score_rows(&corpus, true).unwrap();
    assert_eq!(rows.len(), 4);
    assert_eq!(rows.columns(), full.columns.as_slice());

    let first_two: Vec<_> = rows.take(2).collect();
    assert_eq!(first_two.len(), 2);
    assert_eq!(first_two[0].0, 0);
    assert_eq!(first_two[1].1, full.rows[1]);
}

// ============================================================
// Rule annotator over the built-in samples
// ============================================================

fn sample_corpus() -> (RuleAnnotator, Corpus) {
    let annotator = RuleAnnotator::new().unwrap();
    let corpus = Corpus::from_texts(&annotator, &sample_documents());
    (annotator, corpus)
}

#[test]
fn sample_lemmas_score_as_themselves() {
    let (annotator, corpus) = sample_corpus();
    for (i, doc) in corpus.documents().iter().enumerate() {
        for lemma in doc.lemmas() {
            assert_eq!(
                word_lemma(&annotator, lemma).as_deref(),
                Ok(lemma.as_str()),
                "doc {i}"
            );
        }
    }
}

#[test]
fn every_sample_lemma_has_a_positive_cell() {
    let (annotator, corpus) = sample_corpus();
    let matrix = TfIdfScorer::new(&annotator)
        .corpus_scores(&corpus, false)
        .unwrap();

    for (i, doc) in corpus.documents().iter().enumerate() {
        for lemma in doc.lemmas() {
            let cell = matrix.get(i, lemma);
            assert!(cell.is_some_and(|v| v > 0.0), "doc {i} {lemma:?} -> {cell:?}");
        }
    }
}

#[test]
fn sample_document_scores_agree_with_matrix_rows() {
    let (annotator, corpus) = sample_corpus();
    let scorer = TfIdfScorer::new(&annotator);

    for scale in [false, true] {
        let matrix = scorer.corpus_scores(&corpus, scale).unwrap();
        for (i, doc) in corpus.documents().iter().enumerate() {
            let scores = scorer.document_scores(doc, &corpus, scale).unwrap();
            assert_eq!(scores.len(), doc.lemmas().iter().collect::<BTreeSet<_>>().len());
            for (lemma, value) in &scores {
                let cell = matrix.get(i, lemma).expect("lemma present in matrix row");
                assert!((cell - value).abs() < EPS, "{lemma} in doc {i}");
            }
        }
    }
}

#[test]
fn sample_matrix_cells_equal_single_word_tf_idf() {
    let (annotator, corpus) = sample_corpus();
    let scorer = TfIdfScorer::new(&annotator);

    for scale in [false, true] {
        let matrix = scorer.corpus_scores(&corpus, scale).unwrap();
        for (i, doc) in corpus.documents().iter().enumerate() {
            for lemma in &matrix.columns {
                let expected = scorer.tf_idf(lemma, doc, &corpus, scale).unwrap();
                let cell = matrix.get(i, lemma).expect("every sample column is scored");
                assert!((cell - expected).abs() < EPS, "{lemma} in doc {i}");
            }
        }
    }
}

// ============================================================
// Export
// ============================================================

#[test]
fn exports_keep_sparse_cells_sparse() {
    let annotator = WhitespaceAnnotator::new(&["be"], &[("is", "be")]);
    let corpus = Corpus::from_texts(&annotator, &["cat is", "dog"]);
    let matrix = TfIdfScorer::new(&annotator)
        .corpus_scores(&corpus, false)
        .unwrap();

    let csv = to_csv(&matrix, 2).unwrap();
    assert_eq!(csv.lines().next(), Some("document,be,cat,dog"));
    assert_eq!(csv.lines().nth(1), Some("Doc 0,,0.50,0.00"));

    let back: ScoreMatrix = serde_json::from_str(&to_json(&matrix).unwrap()).unwrap();
    assert_eq!(back, matrix);
}
