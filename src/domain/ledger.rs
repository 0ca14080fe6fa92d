use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Cents;

pub type EntryId = u32;

/// Spend percentage value meaning "undefined: no income recorded yet".
pub const UNDEFINED_PERCENTAGE: i64 = -1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// Money coming in (salary, sales, interest)
    Income,
    /// Money going out (rent, groceries, bills)
    Expense,
}

impl EntryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryKind::Income => "income",
            EntryKind::Expense => "expense",
        }
    }

    /// Accepts the long names plus the short forms used at the input
    /// boundary: "inc"/"+" and "exp"/"-".
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "income" | "inc" | "+" => Some(EntryKind::Income),
            "expense" | "exp" | "-" => Some(EntryKind::Expense),
            _ => None,
        }
    }
}

impl std::fmt::Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single income or expense line item.
/// Entries are immutable once created and live for the whole session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// Per-kind sequence number; income and expense ids are independent
    pub id: EntryId,
    pub kind: EntryKind,
    pub description: String,
    /// Amount in cents, always positive
    pub value: Cents,
    /// When the entry was recorded in this session
    pub recorded_at: DateTime<Utc>,
}

impl Entry {
    fn new(id: EntryId, kind: EntryKind, description: String, value: Cents) -> Self {
        assert!(value > 0, "Entry value must be positive");
        Self {
            id,
            kind,
            description,
            value,
            recorded_at: Utc::now(),
        }
    }
}

/// An immutable read of the current derived ledger values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Income total minus expense total; may be negative
    pub budget: Cents,
    pub income_total: Cents,
    pub expense_total: Cents,
    /// Share of income spent, rounded to the nearest whole percent,
    /// or [`UNDEFINED_PERCENTAGE`] while no income is recorded
    pub percentage: i64,
}

/// Owns the income and expense sequences and their derived values.
///
/// The sequences are append-only. Totals, budget and percentage are only
/// ever updated together by [`Ledger::recompute`], so they cannot drift
/// apart from each other; between `add_item` and `recompute` they describe
/// the ledger as it was before the append.
#[derive(Debug)]
pub struct Ledger {
    income: Vec<Entry>,
    expenses: Vec<Entry>,
    income_total: Cents,
    expense_total: Cents,
    budget: Cents,
    percentage: i64,
}

impl Ledger {
    pub fn new() -> Self {
        Self {
            income: Vec::new(),
            expenses: Vec::new(),
            income_total: 0,
            expense_total: 0,
            budget: 0,
            percentage: UNDEFINED_PERCENTAGE,
        }
    }

    /// Append a new entry to the matching sequence and return it.
    ///
    /// The id continues that kind's sequence: last id + 1, or 0 for the
    /// first entry. The caller is responsible for having validated the
    /// description and value; see [`crate::application::BudgetTracker`].
    pub fn add_item(
        &mut self,
        kind: EntryKind,
        description: impl Into<String>,
        value: Cents,
    ) -> Entry {
        let sequence = self.sequence_mut(kind);
        let id = sequence.last().map_or(0, |entry| entry.id + 1);
        let entry = Entry::new(id, kind, description.into(), value);
        sequence.push(entry.clone());
        entry
    }

    /// Recompute both totals from their sequences, then the budget
    /// (income - expenses) and the spend percentage.
    ///
    /// Idempotent: calling twice with no intervening `add_item` yields
    /// identical state.
    pub fn recompute(&mut self) {
        self.income_total = sum_values(&self.income);
        self.expense_total = sum_values(&self.expenses);
        self.budget = self.income_total - self.expense_total;
        self.percentage = if self.income_total > 0 {
            let ratio = self.expense_total as f64 / self.income_total as f64;
            (ratio * 100.0).round() as i64
        } else {
            UNDEFINED_PERCENTAGE
        };
    }

    /// Pure read of the derived values; no mutation.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            budget: self.budget,
            income_total: self.income_total,
            expense_total: self.expense_total,
            percentage: self.percentage,
        }
    }

    /// Entries of one kind, in insertion order.
    pub fn entries(&self, kind: EntryKind) -> &[Entry] {
        match kind {
            EntryKind::Income => &self.income,
            EntryKind::Expense => &self.expenses,
        }
    }

    fn sequence_mut(&mut self, kind: EntryKind) -> &mut Vec<Entry> {
        match kind {
            EntryKind::Income => &mut self.income,
            EntryKind::Expense => &mut self.expenses,
        }
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

fn sum_values(entries: &[Entry]) -> Cents {
    entries.iter().map(|entry| entry.value).sum()
}
