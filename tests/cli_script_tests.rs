//! End-to-end runs of the CLI binary in script mode.

use std::fs;

use assert_cmd::Command;
use predicates::str::contains;
use tempfile::TempDir;

fn spendbook(temp: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("spendbook_cli").expect("binary builds");
    cmd.env("SPENDBOOK_CLI_SCRIPT", "1")
        .env("SPENDBOOK_HOME", temp.path());
    cmd
}

fn start_empty(temp: &TempDir) {
    fs::write(temp.path().join("transactions.json"), "[]").expect("write empty collection");
}

#[test]
fn first_run_seeds_and_lists_the_demo_data() {
    let temp = TempDir::new().expect("tempdir");
    spendbook(&temp)
        .write_stdin("transaction list\nexit\n")
        .assert()
        .success()
        .stdout(contains("Monthly Salary"))
        .stdout(contains("Restaurant Dinner"));
    assert!(temp.path().join("transactions.json").is_file());
}

#[test]
fn add_then_summary_reports_the_derived_metrics() {
    let temp = TempDir::new().expect("tempdir");
    start_empty(&temp);
    spendbook(&temp)
        .write_stdin(
            "transaction add income 1000 Salary Paycheck 2025-03-01\n\
             transaction add expense 400 Food Groceries 2025-03-02\n\
             summary\n\
             exit\n",
        )
        .assert()
        .success()
        .stdout(contains("$1000.00"))
        .stdout(contains("$400.00"))
        .stdout(contains("$600.00"))
        .stdout(contains("60.0%"));
}

#[test]
fn dashboard_shows_breakdown_and_insights() {
    let temp = TempDir::new().expect("tempdir");
    start_empty(&temp);
    spendbook(&temp)
        .write_stdin(
            "transaction add income 1000 Salary Paycheck 2025-03-01\n\
             transaction add expense 400 \"Food & Dining\" Groceries 2025-03-02\n\
             dashboard\n\
             exit\n",
        )
        .assert()
        .success()
        .stdout(contains("Spending by Category"))
        .stdout(contains("Food & Dining"))
        .stdout(contains("Highest spending category: Food & Dining"));
}

#[test]
fn single_field_edit_updates_the_record() {
    let temp = TempDir::new().expect("tempdir");
    start_empty(&temp);
    spendbook(&temp)
        .write_stdin(
            "transaction add expense 45 Transportation \"Gas Station\" 2025-03-05\n\
             transaction edit 1 amount 52.5\n\
             transaction show 1\n\
             exit\n",
        )
        .assert()
        .success()
        .stdout(contains("Transaction updated."))
        .stdout(contains("$52.50"));
}

#[test]
fn removing_the_only_record_leaves_an_empty_persisted_array() {
    let temp = TempDir::new().expect("tempdir");
    start_empty(&temp);
    spendbook(&temp)
        .write_stdin(
            "transaction add expense 45 Transportation \"Gas Station\" 2025-03-05\n\
             transaction remove 1\n\
             exit\n",
        )
        .assert()
        .success()
        .stdout(contains("Transaction removed."));
    let raw = fs::read_to_string(temp.path().join("transactions.json")).expect("file readable");
    let value: serde_json::Value = serde_json::from_str(&raw).expect("valid json");
    assert_eq!(value, serde_json::json!([]));
}

#[test]
fn unknown_commands_get_a_suggestion() {
    let temp = TempDir::new().expect("tempdir");
    start_empty(&temp);
    spendbook(&temp)
        .write_stdin("sumary\nexit\n")
        .assert()
        .success()
        .stdout(contains("Unknown command `sumary`"))
        .stdout(contains("Did you mean `summary`?"));
}

#[test]
fn invalid_add_arguments_do_not_commit() {
    let temp = TempDir::new().expect("tempdir");
    start_empty(&temp);
    spendbook(&temp)
        .write_stdin(
            "transaction add expense -5 Shopping Shoes\n\
             transaction list\n\
             exit\n",
        )
        .assert()
        .success()
        .stdout(contains("amount must be positive"))
        .stdout(contains("No transactions recorded."));
}
