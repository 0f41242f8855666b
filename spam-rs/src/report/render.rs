//! Plain-text rendering

use std::fmt::{self, Write};

use super::evaluation::Evaluation;
use crate::spam::{ClassificationRecord, SpamProbabilityTable};

/// Format a ratio with five decimals, `n/a` when undefined
pub fn format_ratio(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.5}", v),
        None => "n/a".to_string(),
    }
}

/// Render records as a File / Actual Class / Spam Probability / Predicted
/// table followed by accuracy, precision and recall
pub fn render_table(records: &[ClassificationRecord], threshold: f64) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_table(&mut out, records, threshold);
    out
}

fn write_table(
    out: &mut impl Write,
    records: &[ClassificationRecord],
    threshold: f64,
) -> fmt::Result {
    let file_width = records
        .iter()
        .map(|r| r.document.chars().count())
        .max()
        .unwrap_or(0)
        .max("File".len());

    writeln!(
        out,
        "{:<fw$}  {:<12}  {:<16}  {}",
        "File",
        "Actual Class",
        "Spam Probability",
        "Predicted",
        fw = file_width
    )?;
    writeln!(out, "{}", "-".repeat(file_width + 2 + 12 + 2 + 16 + 2 + 9))?;

    for record in records {
        let actual = record
            .actual
            .map(|l| l.to_string())
            .unwrap_or_else(|| "-".to_string());
        writeln!(
            out,
            "{:<fw$}  {:<12}  {:<16}  {}",
            record.document,
            actual,
            record.rounded_probability(),
            record.predicted(threshold),
            fw = file_width
        )?;
    }

    let evaluation = Evaluation::from_records(records, threshold);
    writeln!(out)?;
    writeln!(out, "Accuracy: {}", format_ratio(evaluation.accuracy()))?;
    writeln!(out, "Precision: {}", format_ratio(evaluation.precision()))?;
    writeln!(out, "Recall: {}", format_ratio(evaluation.recall()))
}

/// Render the learned word probabilities in word order
///
/// `limit` caps the number of rows.
pub fn render_vocabulary(table: &SpamProbabilityTable, limit: Option<usize>) -> String {
    let mut out = String::new();
    let _ = write_vocabulary(&mut out, table, limit);
    out
}

fn write_vocabulary(
    out: &mut impl Write,
    table: &SpamProbabilityTable,
    limit: Option<usize>,
) -> fmt::Result {
    let entries = table.sorted();
    let shown = limit.unwrap_or(entries.len()).min(entries.len());

    for (word, probability) in entries.iter().take(shown) {
        writeln!(out, "{:<24} {:.5}", word, probability)?;
    }
    if shown < entries.len() {
        writeln!(out, "... {} more", entries.len() - shown)?;
    }
    Ok(())
}
