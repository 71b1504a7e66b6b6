//! End-to-end tests for the `expenses` binary

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn expenses(data_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("expenses").unwrap();
    cmd.arg("--data-dir")
        .arg(data_dir)
        .env_remove("RUST_LOG")
        .env_remove("EXPENSE_TRACKER_DATA_DIR");
    cmd
}

fn add(data_dir: &Path, amount: &str, category: &str, date: &str, description: &str) {
    expenses(data_dir)
        .args(["add", amount, category, "--date", date, description])
        .assert()
        .success();
}

#[test]
fn test_init_creates_files() {
    let temp_dir = TempDir::new().unwrap();

    expenses(temp_dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialization complete!"));

    assert_eq!(
        fs::read_to_string(temp_dir.path().join("data/expenses.csv")).unwrap(),
        "Date,Category,Amount,Description\n"
    );
    assert!(temp_dir.path().join("config.json").exists());
    assert!(temp_dir.path().join("reports").is_dir());
}

#[test]
fn test_add_and_list() {
    let temp_dir = TempDir::new().unwrap();

    expenses(temp_dir.path())
        .args(["add", "1234.5", "food", "--date", "2024-01-01", "Groceries"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Expense added successfully!"));

    expenses(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "  1. 2024-01-01 | Food           : ₹1,234.50 - Groceries",
        ));

    let csv = fs::read_to_string(temp_dir.path().join("data/expenses.csv")).unwrap();
    assert_eq!(
        csv,
        "Date,Category,Amount,Description\n2024-01-01,Food,1234.5,Groceries\n"
    );
}

#[test]
fn test_list_empty() {
    let temp_dir = TempDir::new().unwrap();

    expenses(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses recorded yet."));
}

#[test]
fn test_add_rejects_invalid_input() {
    let temp_dir = TempDir::new().unwrap();

    expenses(temp_dir.path())
        .args(["add", "10", "Rent", "--date", "2024-01-01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Rent"));

    expenses(temp_dir.path())
        .args(["add", "-5", "Food", "--date", "2024-01-01"])
        .assert()
        .failure();

    expenses(temp_dir.path())
        .args(["add", "5", "Food", "--date", "2024-02-30"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("YYYY-MM-DD"));

    expenses(temp_dir.path())
        .arg("list")
        .assert()
        .stdout(predicate::str::contains("No expenses recorded yet."));
}

#[test]
fn test_summary() {
    let temp_dir = TempDir::new().unwrap();
    add(temp_dir.path(), "100", "Food", "2024-01-01", "Lunch");
    add(temp_dir.path(), "50", "Food", "2024-01-02", "Dinner");
    add(temp_dir.path(), "50", "Transport", "2024-01-03", "Bus");

    expenses(temp_dir.path())
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Expenses: ₹200.00"))
        .stdout(predicate::str::contains(
            "Food                 |               150.00 |      75.00",
        ))
        .stdout(predicate::str::contains(
            "Transport            |                50.00 |      25.00",
        ));
}

#[test]
fn test_search() {
    let temp_dir = TempDir::new().unwrap();
    add(temp_dir.path(), "10", "Food", "2024-01-01", "Pizza night");
    add(temp_dir.path(), "20", "Entertainment", "2024-01-02", "Cinema");

    expenses(temp_dir.path())
        .args(["search", "PIZZA"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 1 expenses matching 'pizza':"))
        .stdout(predicate::str::contains("Pizza night"))
        .stdout(predicate::str::contains("Cinema").not());

    expenses(temp_dir.path())
        .args(["search", "rent"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses found matching 'rent'."));
}

#[test]
fn test_report_writes_file() {
    let temp_dir = TempDir::new().unwrap();
    add(temp_dir.path(), "100", "Food", "2024-01-05", "Lunch");
    add(temp_dir.path(), "300", "Bills", "2024-01-01", "Power");

    expenses(temp_dir.path())
        .args(["report", "--name", "January Review"])
        .assert()
        .success()
        .stdout(predicate::str::contains("FINANCE REPORT: JANUARY REVIEW"))
        .stdout(predicate::str::contains(
            "Analysis Period: 2024-01-01 to 2024-01-05",
        ))
        .stdout(predicate::str::contains("TOTAL EXPENSES: ₹400.00"));

    let reports: Vec<_> = fs::read_dir(temp_dir.path().join("reports"))
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    assert_eq!(reports.len(), 1);
    assert!(reports[0].starts_with("january_review_"));
    assert!(reports[0].ends_with(".txt"));
}

#[test]
fn test_report_with_no_expenses() {
    let temp_dir = TempDir::new().unwrap();

    expenses(temp_dir.path())
        .arg("report")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "No expenses recorded to generate a report.",
        ));

    assert!(!temp_dir.path().join("reports").exists());
}

#[test]
fn test_report_fails_on_invalid_stored_date() {
    let temp_dir = TempDir::new().unwrap();
    let data_dir = temp_dir.path().join("data");
    fs::create_dir_all(&data_dir).unwrap();
    fs::write(
        data_dir.join("expenses.csv"),
        "Date,Category,Amount,Description\n\
         2024-01-01,Food,10,Lunch\n\
         not-a-date,Food,5,Snack\n",
    )
    .unwrap();

    expenses(temp_dir.path())
        .arg("report")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not-a-date"));

    // Listing still works; load does not validate dates
    expenses(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("not-a-date"));
}

#[test]
fn test_malformed_row_is_skipped_with_warning() {
    let temp_dir = TempDir::new().unwrap();
    let data_dir = temp_dir.path().join("data");
    fs::create_dir_all(&data_dir).unwrap();
    fs::write(
        data_dir.join("expenses.csv"),
        "Date,Category,Amount,Description\n\
         2024-01-01,Food,abc,Broken\n\
         2024-01-02,Food,7,Fine\n",
    )
    .unwrap();

    expenses(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Fine"))
        .stdout(predicate::str::contains("Broken").not())
        .stderr(predicate::str::contains("Skipping malformed row 2"));
}

#[test]
fn test_backup_create_and_list() {
    let temp_dir = TempDir::new().unwrap();

    expenses(temp_dir.path())
        .args(["backup", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No backups found."));

    add(temp_dir.path(), "10", "Food", "2024-01-01", "Lunch");

    expenses(temp_dir.path())
        .args(["backup", "create"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Data successfully backed up to"));

    expenses(temp_dir.path())
        .args(["backup", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("expenses_backup_"))
        .stdout(predicate::str::contains("Total: 1 backup(s)"));
}

#[test]
fn test_corrupt_settings_do_not_block_commands() {
    let temp_dir = TempDir::new().unwrap();
    add(temp_dir.path(), "10", "Food", "2024-01-01", "Lunch");
    fs::write(temp_dir.path().join("config.json"), "{ not json").unwrap();

    expenses(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("₹10.00 - Lunch"))
        .stderr(predicate::str::contains("Using default settings."));
}

#[test]
fn test_config_shows_paths() {
    let temp_dir = TempDir::new().unwrap();

    expenses(temp_dir.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Indian Rupees (₹)"))
        .stdout(predicate::str::contains("expenses.csv"));
}
