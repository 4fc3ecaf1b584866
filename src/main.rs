use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::info;

use nlp_tfidf::config::Config;
use nlp_tfidf::output::export::{self, ExportFormat};
use nlp_tfidf::output::terminal;
use nlp_tfidf::pipeline;
use nlp_tfidf::scoring::assembler::TfIdfScorer;
use nlp_tfidf::scoring::corpus::Corpus;
use nlp_tfidf::scoring::error::ScoreError;
use nlp_tfidf::text::annotator::Annotator;

/// nlp-tfidf: lemma-based TF-IDF over a handful of documents.
///
/// Each input file is one document. Without files, seven built-in sample
/// documents are used.
#[derive(Parser)]
#[command(name = "nlp-tfidf", version, about)]
struct Cli {
    /// Decimals to print (overrides NLP_TFIDF_PRECISION)
    #[arg(long, global = true)]
    precision: Option<usize>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the TF-IDF heatmaps (unscaled and scaled)
    Heatmap {
        /// Only show the scaled panel
        #[arg(long, conflicts_with = "unscaled_only")]
        scaled_only: bool,

        /// Only show the unscaled panel
        #[arg(long)]
        unscaled_only: bool,

        /// Text files, one document each
        files: Vec<PathBuf>,
    },

    /// Show TF, IDF and TF-IDF of one word
    Score {
        /// The word to score
        word: String,

        /// Document index to compute TF in (default: 0)
        #[arg(long, default_value = "0")]
        doc: usize,

        /// Normalize TF and log-scale IDF
        #[arg(long)]
        scale: bool,

        /// Text files, one document each
        files: Vec<PathBuf>,
    },

    /// Print the filtered lemma sequence of each document
    Lemmas {
        /// Text files, one document each
        files: Vec<PathBuf>,
    },

    /// Write the score matrix to stdout as JSON or CSV
    Export {
        /// Output format: json or csv
        #[arg(long, default_value = "json")]
        format: ExportFormat,

        /// Normalize TF and log-scale IDF
        #[arg(long)]
        scale: bool,

        /// Text files, one document each
        files: Vec<PathBuf>,
    },
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging (stderr, so exports stay clean)
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("nlp_tfidf=info")),
        )
        .init();

    let cli = Cli::parse();

    let mut config = Config::load()?;
    if let Some(precision) = cli.precision {
        config.precision = precision;
    }
    config.apply_color();

    let annotator = pipeline::build_annotator(&config)?;
    let scorer = TfIdfScorer::new(&annotator);

    match cli.command {
        Commands::Heatmap {
            scaled_only,
            unscaled_only,
            files,
        } => {
            let corpus = load_corpus(&annotator, &files)?;

            if !scaled_only {
                let matrix = pipeline::score_with_progress(&scorer, &corpus, false, "Scoring")?;
                terminal::display_heatmap(&matrix, "TF-IDF Heatmap", config.precision);
            }
            if !unscaled_only {
                let matrix = pipeline::score_with_progress(&scorer, &corpus, true, "Scoring")?;
                terminal::display_heatmap(&matrix, "TF-IDF Heatmap - scaled", config.precision);
            }
        }

        Commands::Score {
            word,
            doc,
            scale,
            files,
        } => {
            let corpus = load_corpus(&annotator, &files)?;

            match scorer.explain(&word, doc, &corpus, scale) {
                Ok(Some(score)) => terminal::display_word_score(&score, config.precision),
                Ok(None) => anyhow::bail!(
                    "Document index {doc} is out of range (corpus has {} documents)",
                    corpus.len()
                ),
                Err(e @ ScoreError::NoMeaningfulLemma { .. }) => {
                    println!("{}", e.to_string().yellow());
                    println!(
                        "{}",
                        "Stop words, punctuation and possessives carry no score. Try another word."
                            .dimmed()
                    );
                }
                Err(e) => return Err(e.into()),
            }
        }

        Commands::Lemmas { files } => {
            let corpus = load_corpus(&annotator, &files)?;
            println!(
                "\n{}\n",
                format!("=== Lemmas ({} documents) ===", corpus.len()).bold()
            );
            terminal::display_lemmas(corpus.documents().iter().map(|d| d.lemmas()));
            println!(
                "\n  Vocabulary: {} distinct lemmas",
                scorer.corpus_vocabulary(&corpus).len()
            );
        }

        Commands::Export {
            format,
            scale,
            files,
        } => {
            let corpus = load_corpus(&annotator, &files)?;
            let matrix = pipeline::score_with_progress(&scorer, &corpus, scale, "Scoring")?;
            println!("{}", export::render(&matrix, format, config.precision)?);
        }
    }

    Ok(())
}

/// Read inputs and lemmatize them into a corpus.
fn load_corpus<A: Annotator>(annotator: &A, files: &[PathBuf]) -> Result<Corpus> {
    let texts = pipeline::load_texts(files)?;
    let corpus = Corpus::from_texts(annotator, &texts);
    info!(documents = corpus.len(), "Corpus loaded");
    Ok(corpus)
}
