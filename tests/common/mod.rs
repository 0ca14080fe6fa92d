// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use saldo::application::{AddOutcome, BudgetTracker};
use saldo::domain::{Cents, Snapshot};

/// Submit a line item that is expected to be accepted.
pub fn must_submit(
    tracker: &mut BudgetTracker,
    kind: &str,
    description: &str,
    amount: &str,
) -> AddOutcome {
    tracker
        .submit(kind, description, amount)
        .unwrap_or_else(|err| panic!("submission '{} {} {}' rejected: {}", kind, description, amount, err))
}

/// Assert all four derived values of a snapshot at once.
pub fn assert_snapshot(
    snapshot: Snapshot,
    budget: Cents,
    income_total: Cents,
    expense_total: Cents,
    percentage: i64,
) {
    assert_eq!(snapshot.budget, budget, "budget");
    assert_eq!(snapshot.income_total, income_total, "income total");
    assert_eq!(snapshot.expense_total, expense_total, "expense total");
    assert_eq!(snapshot.percentage, percentage, "percentage");
}
