use anyhow::Result;
use clap::ValueEnum;

use crate::domain::{Entry, EntryKind, Snapshot, format_cents};

/// Output mode for everything the session writes to its output sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned, human-readable lines
    Table,
    /// Machine-readable JSON
    Json,
}

/// Formats snapshots and entries into display values. The presenter never
/// touches the ledger; everything it needs arrives as arguments.
pub struct Presenter {
    format: OutputFormat,
}

impl Presenter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Display key composed of kind and per-kind id, e.g. "income-0".
    pub fn entry_key(entry: &Entry) -> String {
        format!("{}-{}", entry.kind, entry.id)
    }

    /// Spend percentage display rule: positive percentages render as
    /// "<n>%", everything else as the "---" placeholder.
    pub fn percentage_label(percentage: i64) -> String {
        if percentage > 0 {
            format!("{}%", percentage)
        } else {
            "---".to_string()
        }
    }

    /// Render the four budget display slots.
    pub fn render_snapshot(&self, snapshot: &Snapshot) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string(snapshot)?),
            OutputFormat::Table => Ok([
                format!("{:<16} {:>12}", "Budget", format_cents(snapshot.budget)),
                format!(
                    "{:<16} {:>12}",
                    "Total income",
                    format_cents(snapshot.income_total)
                ),
                format!(
                    "{:<16} {:>12}",
                    "Total expenses",
                    format_cents(snapshot.expense_total)
                ),
                format!(
                    "{:<16} {:>12}",
                    "Spent",
                    Self::percentage_label(snapshot.percentage)
                ),
            ]
            .join("\n")),
        }
    }

    /// Render the feedback line for one accepted entry.
    pub fn render_entry(&self, entry: &Entry) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string(entry)?),
            OutputFormat::Table => Ok(format!(
                "Recorded {}: {} {}",
                Self::entry_key(entry),
                entry.description,
                format_cents(entry.value)
            )),
        }
    }

    /// Render one kind's entry list, in insertion order.
    pub fn render_entry_list(&self, kind: EntryKind, entries: &[Entry]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string(entries)?),
            OutputFormat::Table => {
                if entries.is_empty() {
                    return Ok(format!("No {} entries.", kind));
                }

                let mut lines = vec![
                    format!(
                        "{:<12} {:<12} {:<28} {:>10}",
                        "KEY", "DATE", "DESCRIPTION", "AMOUNT"
                    ),
                    "-".repeat(65),
                ];
                for entry in entries {
                    lines.push(format!(
                        "{:<12} {:<12} {:<28} {:>10}",
                        Self::entry_key(entry),
                        entry.recorded_at.format("%Y-%m-%d"),
                        entry.description,
                        format_cents(entry.value)
                    ));
                }
                Ok(lines.join("\n"))
            }
        }
    }
}
