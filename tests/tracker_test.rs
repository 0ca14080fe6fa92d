mod common;

use common::{assert_snapshot, must_submit};
use saldo::application::{AppError, BudgetTracker};
use saldo::domain::EntryKind;

#[test]
fn test_single_income() {
    let mut tracker = BudgetTracker::new();
    let outcome = must_submit(&mut tracker, "income", "Salary", "1000");

    assert_snapshot(outcome.snapshot, 100000, 100000, 0, -1);
}

#[test]
fn test_income_then_expense() {
    let mut tracker = BudgetTracker::new();
    must_submit(&mut tracker, "income", "Salary", "1000");
    let outcome = must_submit(&mut tracker, "expense", "Rent", "300");

    assert_snapshot(outcome.snapshot, 70000, 100000, 30000, 30);
}

#[test]
fn test_rejected_submission_changes_nothing() {
    let mut tracker = BudgetTracker::new();
    must_submit(&mut tracker, "income", "Salary", "1000");
    must_submit(&mut tracker, "expense", "Rent", "300");

    let result = tracker.submit("expense", "Coffee", "-5");
    assert!(matches!(result, Err(AppError::NonPositiveAmount(_))));

    assert_snapshot(tracker.snapshot(), 70000, 100000, 30000, 30);
    assert_eq!(tracker.entries(EntryKind::Expense).len(), 1);
}

#[test]
fn test_ids_start_at_zero_per_kind() {
    let mut tracker = BudgetTracker::new();
    let first_income = must_submit(&mut tracker, "income", "Salary", "1000");
    let second_income = must_submit(&mut tracker, "income", "Car sale", "500");
    let first_expense = must_submit(&mut tracker, "expense", "Rent", "300");
    let second_expense = must_submit(&mut tracker, "expense", "Groceries", "80");

    assert_eq!(first_income.entry.id, 0);
    assert_eq!(second_income.entry.id, 1);
    assert_eq!(first_expense.entry.id, 0);
    assert_eq!(second_expense.entry.id, 1);
}

#[test]
fn test_expense_without_income() {
    let mut tracker = BudgetTracker::new();
    let outcome = must_submit(&mut tracker, "expense", "Coffee", "50");

    // Division guard: percentage stays undefined without income
    assert_snapshot(outcome.snapshot, -5000, 0, 5000, -1);
}

#[test]
fn test_totals_match_entry_sums() {
    let mut tracker = BudgetTracker::new();
    must_submit(&mut tracker, "income", "Salary", "1000");
    must_submit(&mut tracker, "income", "Freelance", "250.50");
    must_submit(&mut tracker, "expense", "Rent", "300");
    must_submit(&mut tracker, "expense", "Groceries", "81.25");
    must_submit(&mut tracker, "expense", "Transport", "19.75");

    let income_sum: i64 = tracker
        .entries(EntryKind::Income)
        .iter()
        .map(|entry| entry.value)
        .sum();
    let expense_sum: i64 = tracker
        .entries(EntryKind::Expense)
        .iter()
        .map(|entry| entry.value)
        .sum();

    let snapshot = tracker.snapshot();
    assert_eq!(snapshot.income_total, income_sum);
    assert_eq!(snapshot.expense_total, expense_sum);
    assert_eq!(snapshot.budget, income_sum - expense_sum);
}

#[test]
fn test_short_kind_forms() {
    let mut tracker = BudgetTracker::new();
    must_submit(&mut tracker, "inc", "Salary", "1000");
    must_submit(&mut tracker, "+", "Car sale", "500");
    must_submit(&mut tracker, "exp", "Rent", "300");
    must_submit(&mut tracker, "-", "Groceries", "80");

    let snapshot = tracker.snapshot();
    assert_snapshot(snapshot, 112000, 150000, 38000, 25);
}

#[test]
fn test_rejection_taxonomy() {
    let mut tracker = BudgetTracker::new();

    assert!(matches!(
        tracker.submit("gift", "Flowers", "10"),
        Err(AppError::UnknownKind(_))
    ));
    assert!(matches!(
        tracker.submit("income", "  ", "10"),
        Err(AppError::EmptyDescription)
    ));
    assert!(matches!(
        tracker.submit("income", "Salary", "ten"),
        Err(AppError::InvalidAmount(_))
    ));
    assert!(matches!(
        tracker.submit("income", "Salary", "0"),
        Err(AppError::NonPositiveAmount(_))
    ));

    assert_snapshot(tracker.snapshot(), 0, 0, 0, -1);
    assert!(tracker.entries(EntryKind::Income).is_empty());
    assert!(tracker.entries(EntryKind::Expense).is_empty());
}

#[test]
fn test_percentage_rounding() {
    let mut tracker = BudgetTracker::new();
    must_submit(&mut tracker, "income", "Salary", "300");
    must_submit(&mut tracker, "expense", "Rent", "100");

    // 100 / 300 rounds down to 33%
    assert_eq!(tracker.snapshot().percentage, 33);

    must_submit(&mut tracker, "expense", "Bills", "100");

    // 200 / 300 rounds up to 67%
    assert_eq!(tracker.snapshot().percentage, 67);
}

#[test]
fn test_overspending_goes_negative() {
    let mut tracker = BudgetTracker::new();
    must_submit(&mut tracker, "income", "Odd job", "100");
    must_submit(&mut tracker, "expense", "Rent", "300");

    assert_snapshot(tracker.snapshot(), -20000, 10000, 30000, 300);
}
