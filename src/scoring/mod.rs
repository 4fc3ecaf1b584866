// TF-IDF scoring: term statistics and matrix assembly over a lemmatized corpus.

pub mod assembler;
pub mod corpus;
pub mod error;
pub mod stats;
