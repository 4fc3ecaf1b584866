// Colored terminal output for score matrices, single-word scores and lemmas.
//
// The heatmap is drawn one lemma per line with one cell per document, since
// vocabularies are much wider than a terminal while corpora here are short.
// Cells are shaded relative to the panel's own min/max.

use colored::Colorize;

use crate::scoring::assembler::{ScoreMatrix, WordScore};
use crate::scoring::corpus::document_label;

/// Width of the lemma column; longer lemmas are truncated.
const LEMMA_WIDTH: usize = 18;

/// Marker for an absent cell.
const ABSENT: &str = "·";

/// Cut a lemma down to `width` characters, ellipsis included.
fn clip_lemma(lemma: &str, width: usize) -> String {
    let keep = width.saturating_sub(3);
    match lemma.char_indices().nth(width) {
        Some(_) => {
            let cut = lemma.char_indices().nth(keep).map_or(lemma.len(), |(i, _)| i);
            format!("{}...", &lemma[..cut])
        }
        None => lemma.to_string(),
    }
}

/// Background color for a value within `[lo, hi]`, dark (low) to light (high).
pub fn shade(value: f64, lo: f64, hi: f64) -> (u8, u8, u8) {
    let t = if hi > lo {
        ((value - lo) / (hi - lo)).clamp(0.0, 1.0)
    } else {
        1.0
    };
    // Dark purple -> red -> pale yellow
    let stops: [(f64, f64, f64); 3] = [
        (35.0, 16.0, 60.0),
        (205.0, 40.0, 60.0),
        (250.0, 235.0, 190.0),
    ];
    let (a, b, u) = if t < 0.5 {
        (stops[0], stops[1], t * 2.0)
    } else {
        (stops[1], stops[2], (t - 0.5) * 2.0)
    };
    let mix = |x: f64, y: f64| (x + (y - x) * u).round() as u8;
    (mix(a.0, b.0), mix(a.1, b.1), mix(a.2, b.2))
}

/// Render one heatmap panel as a string.
pub fn render_heatmap(matrix: &ScoreMatrix, title: &str, precision: usize) -> String {
    let mut out = String::new();
    out.push_str(&format!("\n{}\n\n", format!("=== {title} ===").bold()));

    if matrix.rows.is_empty() || matrix.columns.is_empty() {
        out.push_str("  No lemmas to display.\n");
        return out;
    }

    let (lo, hi) = matrix.value_range().unwrap_or((0.0, 0.0));
    let cell_width = cell_width(lo, hi, precision);

    // Header: document labels
    let mut header = format!("  {:<LEMMA_WIDTH$}", "");
    for row in &matrix.rows {
        header.push_str(&format!(" {:>cell_width$}", row.label));
    }
    out.push_str(&format!("{}\n", header.dimmed()));
    out.push_str(&format!(
        "  {}\n",
        "-".repeat(LEMMA_WIDTH + matrix.rows.len() * (cell_width + 1)).dimmed()
    ));

    for lemma in &matrix.columns {
        let name = clip_lemma(lemma, LEMMA_WIDTH);
        out.push_str(&format!("  {name:<LEMMA_WIDTH$}"));
        for row in &matrix.rows {
            let cell = match row.scores.get(lemma) {
                Some(&v) => {
                    let text = format!("{:>cell_width$.precision$}", v);
                    let (r, g, b) = shade(v, lo, hi);
                    let fg = if r as u32 + g as u32 + b as u32 > 450 {
                        (0, 0, 0)
                    } else {
                        (255, 255, 255)
                    };
                    text.on_truecolor(r, g, b)
                        .truecolor(fg.0, fg.1, fg.2)
                        .to_string()
                }
                None => format!("{ABSENT:>cell_width$}").dimmed().to_string(),
            };
            out.push(' ');
            out.push_str(&cell);
        }
        out.push('\n');
    }

    out.push_str(&format!(
        "\n  {} {:.precision$} .. {:.precision$}   {} no signal\n",
        "range".dimmed(),
        lo,
        hi,
        ABSENT.dimmed(),
    ));
    out
}

/// Print one heatmap panel.
pub fn display_heatmap(matrix: &ScoreMatrix, title: &str, precision: usize) {
    print!("{}", render_heatmap(matrix, title, precision));
}

/// Print the TF, IDF and TF-IDF of one word in one document.
pub fn display_word_score(score: &WordScore, precision: usize) {
    let mode = if score.scaled { "scaled" } else { "unscaled" };
    println!(
        "\n{}",
        format!(
            "=== \"{}\" in {} ({mode}) ===",
            score.word,
            document_label(score.document)
        )
        .bold()
    );
    println!("  Lemma:  {}", score.lemma.bold());
    println!("  TF:     {:.precision$}", score.tf);
    println!("  IDF:    {:.precision$}", score.idf);
    println!(
        "  TF-IDF: {}",
        format!("{:.precision$}", score.tf_idf).bright_green()
    );
}

/// Print each document's lemma sequence.
pub fn display_lemmas<'a, I>(documents: I)
where
    I: IntoIterator<Item = &'a [String]>,
{
    for (i, lemmas) in documents.into_iter().enumerate() {
        let label = document_label(i);
        if lemmas.is_empty() {
            println!("  {}: {}", label.bold(), "(no content lemmas)".dimmed());
        } else {
            println!("  {}: {}", label.bold(), lemmas.join(" "));
        }
    }
}

fn cell_width(lo: f64, hi: f64, precision: usize) -> usize {
    let widest = [lo, hi]
        .iter()
        .map(|v| format!("{v:.precision$}").len())
        .max()
        .unwrap_or(0);
    // Wide enough for "Doc 10" style labels as well
    widest.max(6)
}
