//! # Display Reports
//!
//! A [`Report`] is the display-ready rendering of one calculator result:
//! a headline value, a few supporting lines, an optional table (schedules,
//! matrices, sequences) and free-form notes. Shells render it without
//! knowing which calculator produced it.
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "headline": { "label": "Radius (r)", "value": "5.0000" },
//!   "lines": [{ "label": "Angle (θ)", "value": "53.1301°" }],
//!   "table": null,
//!   "notes": []
//! }
//! ```

use serde::{Deserialize, Serialize};

/// One labelled value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportLine {
    pub label: String,
    pub value: String,
}

impl ReportLine {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        ReportLine {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Tabular output with a header row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportTable {
    pub title: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl ReportTable {
    pub fn new<S: Into<String>>(title: impl Into<String>, columns: impl IntoIterator<Item = S>) -> Self {
        ReportTable {
            title: title.into(),
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    pub fn push_row<S: Into<String>>(&mut self, row: impl IntoIterator<Item = S>) {
        self.rows.push(row.into_iter().map(Into::into).collect());
    }
}

/// Display-ready calculator output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub headline: ReportLine,
    pub lines: Vec<ReportLine>,
    pub table: Option<ReportTable>,
    pub notes: Vec<String>,
}

impl Report {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Report {
            headline: ReportLine::new(label, value),
            lines: Vec::new(),
            table: None,
            notes: Vec::new(),
        }
    }

    pub fn line(mut self, label: impl Into<String>, value: impl Into<String>) -> Self {
        self.lines.push(ReportLine::new(label, value));
        self
    }

    pub fn table(mut self, table: ReportTable) -> Self {
        self.table = Some(table);
        self
    }

    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Label of the first displayed value that rendered as `inf` or `NaN`
    pub fn non_finite_label(&self) -> Option<&str> {
        let bad = |value: &str| {
            value
                .split(|c: char| !c.is_ascii_alphanumeric())
                .any(|word| word == "inf" || word == "NaN")
        };
        if bad(&self.headline.value) {
            return Some(&self.headline.label);
        }
        if let Some(line) = self.lines.iter().find(|l| bad(&l.value)) {
            return Some(&line.label);
        }
        self.table
            .as_ref()
            .filter(|t| t.rows.iter().flatten().any(|cell| bad(cell)))
            .map(|t| t.title.as_str())
    }

    /// Plain-text rendering for terminals and logs
    pub fn to_text(&self) -> String {
        let mut out = format!("{}: {}\n", self.headline.label, self.headline.value);
        for line in &self.lines {
            out.push_str(&format!("  {}: {}\n", line.label, line.value));
        }
        if let Some(table) = &self.table {
            out.push('\n');
            out.push_str(&table.title);
            out.push('\n');
            let widths: Vec<usize> = (0..table.columns.len())
                .map(|i| {
                    table
                        .rows
                        .iter()
                        .filter_map(|row| row.get(i))
                        .chain(std::iter::once(&table.columns[i]))
                        .map(|cell| cell.chars().count())
                        .max()
                        .unwrap_or(0)
                })
                .collect();
            let render = |cells: &[String]| {
                cells
                    .iter()
                    .zip(&widths)
                    .map(|(cell, w)| format!("{:>width$}", cell, width = *w))
                    .collect::<Vec<_>>()
                    .join("  ")
            };
            out.push_str(&render(&table.columns));
            out.push('\n');
            for row in &table.rows {
                out.push_str(&render(row));
                out.push('\n');
            }
        }
        for note in &self.notes {
            out.push_str(&format!("Note: {}\n", note));
        }
        out
    }
}

/// Outcome of running a calculator: the report to display plus the
/// JSON form of the typed result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub report: Report,
    pub data: serde_json::Value,
}
