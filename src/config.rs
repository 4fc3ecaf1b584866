use std::env;

use anyhow::Result;

/// When to emit ANSI colors in terminal output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    /// Let `colored` decide from the terminal and CLICOLOR variables
    Auto,
    Always,
    Never,
}

/// Default number of decimals shown in the heatmap and CSV export.
pub const DEFAULT_PRECISION: usize = 3;

/// Upper bound on displayed decimals; more is noise for these scores.
const MAX_PRECISION: usize = 12;

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded at startup via dotenvy. Every value has a default,
/// so an empty environment is a valid configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Words added to the annotator's stop-word list (NLP_TFIDF_EXTRA_STOP_WORDS)
    pub extra_stop_words: Vec<String>,
    /// Decimals for printed scores (NLP_TFIDF_PRECISION)
    pub precision: usize,
    /// Terminal color policy (NLP_TFIDF_COLOR)
    pub color: ColorMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            extra_stop_words: Vec::new(),
            precision: DEFAULT_PRECISION,
            color: ColorMode::Auto,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load from an arbitrary key lookup. `load` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let extra_stop_words = lookup("NLP_TFIDF_EXTRA_STOP_WORDS")
            .map(|raw| parse_word_list(&raw))
            .unwrap_or_default();

        let precision = match lookup("NLP_TFIDF_PRECISION") {
            Some(raw) => parse_precision(&raw)?,
            None => DEFAULT_PRECISION,
        };

        let color = match lookup("NLP_TFIDF_COLOR").as_deref().map(str::trim) {
            None | Some("") | Some("auto") => ColorMode::Auto,
            Some("always") => ColorMode::Always,
            Some("never") => ColorMode::Never,
            Some(other) => anyhow::bail!(
                "NLP_TFIDF_COLOR must be one of auto, always, never (got {other:?})"
            ),
        };

        Ok(Self {
            extra_stop_words,
            precision,
            color,
        })
    }

    /// Apply the color policy to the `colored` crate's global switch.
    pub fn apply_color(&self) {
        match self.color {
            ColorMode::Auto => colored::control::unset_override(),
            ColorMode::Always => colored::control::set_override(true),
            ColorMode::Never => colored::control::set_override(false),
        }
    }
}

fn parse_word_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_precision(raw: &str) -> Result<usize> {
    let precision: usize = raw.trim().parse().map_err(|_| {
        anyhow::anyhow!("NLP_TFIDF_PRECISION must be a non-negative integer (got {raw:?})")
    })?;
    if precision > MAX_PRECISION {
        anyhow::bail!("NLP_TFIDF_PRECISION must be at most {MAX_PRECISION} (got {precision})");
    }
    Ok(precision)
}
