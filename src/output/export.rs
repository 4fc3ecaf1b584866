// Matrix export: JSON and CSV renderings of a ScoreMatrix for plotting tools.

use std::str::FromStr;

use anyhow::Result;

use crate::scoring::assembler::ScoreMatrix;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
}

impl FromStr for ExportFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            other => anyhow::bail!("Unknown export format {other:?} (expected json or csv)"),
        }
    }
}

/// Render the matrix in the requested format.
pub fn render(matrix: &ScoreMatrix, format: ExportFormat, precision: usize) -> Result<String> {
    match format {
        ExportFormat::Json => to_json(matrix),
        ExportFormat::Csv => to_csv(matrix, precision),
    }
}

/// Pretty JSON: `{"columns": [...], "rows": [{"label", "scores"}]}`.
/// Absent cells are simply missing from `scores`.
pub fn to_json(matrix: &ScoreMatrix) -> Result<String> {
    Ok(serde_json::to_string_pretty(matrix)?)
}

/// CSV with a `document` column and one column per lemma. Absent cells are
/// left empty rather than written as zero.
pub fn to_csv(matrix: &ScoreMatrix, precision: usize) -> Result<String> {
    let mut writer = csv::Writer::from_writer(vec![]);

    writer.write_record(
        std::iter::once("document").chain(matrix.columns.iter().map(String::as_str)),
    )?;
    for row in &matrix.rows {
        let cells = matrix.columns.iter().map(|lemma| {
            row.scores
                .get(lemma)
                .map(|v| format!("{v:.precision$}"))
                .unwrap_or_default()
        });
        writer.write_record(std::iter::once(row.label.clone()).chain(cells))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("Failed to flush CSV output: {}", e.error()))?;
    Ok(String::from_utf8(bytes)?)
}
