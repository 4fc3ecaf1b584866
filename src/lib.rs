// nlp-tfidf: lemma-based TF-IDF scoring with terminal heatmaps
//
// This is the library root. Text flows through the modules in order:
// text (annotation, lemma filter) -> scoring (TF, IDF, matrix) -> output.

pub mod config;
pub mod output;
pub mod pipeline;
pub mod samples;
pub mod scoring;
pub mod text;
