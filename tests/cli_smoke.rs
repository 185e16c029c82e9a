//! End-to-end smoke tests for the fintrack binary
//!
//! Each test runs against its own temporary data directory via the
//! FINTRACK_DATA_DIR override, so tests never see each other's state.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn fintrack(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("fintrack").unwrap();
    cmd.env("FINTRACK_DATA_DIR", dir.path());
    cmd
}

#[test]
fn first_run_seeds_default_accounts() {
    let dir = TempDir::new().unwrap();

    fintrack(&dir)
        .args(["account", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cash"))
        .stdout(predicate::str::contains("Bank Account"))
        .stdout(predicate::str::contains("Digital Wallet"));

    assert!(dir.path().join("data").join("finance.json").exists());
}

#[test]
fn add_and_list_transaction() {
    let dir = TempDir::new().unwrap();

    fintrack(&dir)
        .args([
            "txn", "add", "expense", "42.50", "--account", "Cash", "--category",
            "Food & Dining", "--date", "2025-06-10", "-m", "Team lunch", "--tag", "work",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added Expense"));

    fintrack(&dir)
        .args(["txn", "list", "--search", "team lunch"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Food & Dining"));
}

#[test]
fn rejects_kind_category_mismatch() {
    let dir = TempDir::new().unwrap();

    fintrack(&dir)
        .args([
            "txn", "add", "income", "100", "--account", "Cash", "--category", "Food & Dining",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Food & Dining"));
}

#[test]
fn budget_set_rejects_duplicate_category() {
    let dir = TempDir::new().unwrap();

    // Food & Dining already has a seeded budget
    fintrack(&dir)
        .args(["budget", "set", "Food & Dining", "100"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already has a budget"));

    // Travel has none
    fintrack(&dir)
        .args(["budget", "set", "Travel", "800"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Travel"));
}

#[test]
fn deleting_an_account_removes_its_transactions() {
    let dir = TempDir::new().unwrap();

    fintrack(&dir)
        .args(["account", "delete", "Cash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("transaction(s) removed"));

    fintrack(&dir)
        .args(["txn", "list", "--search", "Grocery Shopping"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No transactions found"));
}

#[test]
fn report_summary_prints_sections() {
    let dir = TempDir::new().unwrap();

    fintrack(&dir)
        .args(["report", "summary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Financial Summary"))
        .stdout(predicate::str::contains("Savings Rate:"))
        .stdout(predicate::str::contains("Top Spending Categories"));
}

#[test]
fn config_theme_toggles_and_persists() {
    let dir = TempDir::new().unwrap();

    fintrack(&dir)
        .args(["config", "theme"])
        .assert()
        .success()
        .stdout(predicate::str::contains("light"));

    fintrack(&dir)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("light"));
}

#[test]
fn currency_changes_symbols() {
    let dir = TempDir::new().unwrap();

    fintrack(&dir)
        .args(["config", "currency", "usd"])
        .assert()
        .success()
        .stdout(predicate::str::contains("USD"));

    fintrack(&dir)
        .args(["account", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$"));
}

#[test]
fn export_csv_to_stdout() {
    let dir = TempDir::new().unwrap();

    fintrack(&dir)
        .args(["export", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("ID,Date,Type,Account,Category"));
}

#[test]
fn reset_requires_force() {
    let dir = TempDir::new().unwrap();

    fintrack(&dir)
        .args(["reset"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--force"));

    fintrack(&dir)
        .args(["reset", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Reset complete"));
}

#[test]
fn corrupt_state_file_falls_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    let data_dir = dir.path().join("data");
    std::fs::create_dir_all(&data_dir).unwrap();
    std::fs::write(data_dir.join("finance.json"), "{ garbage").unwrap();

    fintrack(&dir)
        .args(["account", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Bank Account"));
}
