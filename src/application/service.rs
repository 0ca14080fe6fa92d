use tracing::{debug, warn};

use crate::domain::{Entry, EntryKind, Ledger, Snapshot, parse_cents};

use super::AppError;

/// Orchestrates the ledger: validates raw submissions, applies them, and
/// hands back fresh snapshots. This is the primary interface for any
/// client (CLI session, tests, future frontends).
pub struct BudgetTracker {
    ledger: Ledger,
}

/// Result of an accepted submission: the created entry together with the
/// snapshot taken right after the recompute, so the two never disagree.
#[derive(Debug, Clone)]
pub struct AddOutcome {
    pub entry: Entry,
    pub snapshot: Snapshot,
}

impl BudgetTracker {
    pub fn new() -> Self {
        Self {
            ledger: Ledger::new(),
        }
    }

    /// Validate and apply one raw submission.
    ///
    /// This is the single guarded gate of the system: an unknown kind, an
    /// empty description, an unparseable amount or a non-positive amount
    /// rejects the submission with the ledger untouched. The ledger itself
    /// does not re-validate what passed here.
    pub fn submit(
        &mut self,
        kind: &str,
        description: &str,
        amount: &str,
    ) -> Result<AddOutcome, AppError> {
        let Some(kind) = EntryKind::from_str(kind) else {
            warn!(kind, "rejected submission: unknown entry kind");
            return Err(AppError::UnknownKind(kind.to_string()));
        };

        let description = description.trim();
        if description.is_empty() {
            warn!("rejected submission: empty description");
            return Err(AppError::EmptyDescription);
        }

        let value = match parse_cents(amount) {
            Ok(value) => value,
            Err(err) => {
                warn!(amount, %err, "rejected submission: unparseable amount");
                return Err(AppError::InvalidAmount(err));
            }
        };
        if value <= 0 {
            warn!(amount, "rejected submission: non-positive amount");
            return Err(AppError::NonPositiveAmount(amount.trim().to_string()));
        }

        let entry = self.ledger.add_item(kind, description, value);
        self.ledger.recompute();
        let snapshot = self.ledger.snapshot();

        debug!(
            kind = entry.kind.as_str(),
            id = entry.id,
            value = entry.value,
            budget = snapshot.budget,
            "entry recorded"
        );

        Ok(AddOutcome { entry, snapshot })
    }

    /// Current derived values; pure read.
    pub fn snapshot(&self) -> Snapshot {
        self.ledger.snapshot()
    }

    /// Entries of one kind, in insertion order.
    pub fn entries(&self, kind: EntryKind) -> &[Entry] {
        self.ledger.entries(kind)
    }
}

impl Default for BudgetTracker {
    fn default() -> Self {
        Self::new()
    }
}
