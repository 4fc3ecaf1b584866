// Text front end: annotation and lemma filtering.

pub mod annotator;
pub mod lemmatize;
pub mod rules;
