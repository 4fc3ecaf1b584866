// Pipeline glue: turning CLI inputs and configuration into a scored corpus.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, warn};

use crate::config::Config;
use crate::samples::sample_documents;
use crate::scoring::assembler::{ScoreMatrix, TfIdfScorer};
use crate::scoring::corpus::Corpus;
use crate::text::annotator::{Annotator, StopWords};
use crate::text::rules::RuleAnnotator;

/// The default annotator with the configured extra stop words.
pub fn build_annotator(config: &Config) -> Result<RuleAnnotator> {
    let mut stop_words = StopWords::english();
    if !config.extra_stop_words.is_empty() {
        info!(
            extra = config.extra_stop_words.len(),
            "Adding configured stop words"
        );
        stop_words.extend(&config.extra_stop_words);
    }
    RuleAnnotator::with_stop_words(stop_words)
}

/// Read each file as one document, or fall back to the built-in samples.
pub fn load_texts(files: &[PathBuf]) -> Result<Vec<String>> {
    if files.is_empty() {
        info!("No input files given, using the built-in sample documents");
        return Ok(sample_documents());
    }

    let mut texts = Vec::with_capacity(files.len());
    for path in files {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        if text.trim().is_empty() {
            warn!(path = %path.display(), "Input file is empty; it will score as an empty document");
        }
        texts.push(text);
    }
    Ok(texts)
}

/// Build the full matrix, ticking a progress bar per document.
pub fn score_with_progress<A>(
    scorer: &TfIdfScorer<'_, A>,
    corpus: &Corpus,
    scale: bool,
    label: &str,
) -> Result<ScoreMatrix>
where
    A: Annotator + ?Sized,
{
    let rows = scorer.corpus_score_rows(corpus, scale)?;
    let columns = rows.columns().to_vec();

    let pb = ProgressBar::new(rows.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template(&format!("  {label} [{{bar:30}}] {{pos}}/{{len}}"))
            .context("Invalid progress bar template")?,
    );

    let mut scored = Vec::with_capacity(rows.len());
    for (_, row) in rows {
        scored.push(row);
        pb.inc(1);
    }
    pb.finish_and_clear();

    Ok(ScoreMatrix {
        columns,
        rows: scored,
    })
}
