mod common;

use predicates::prelude::*;
use predicates::str::contains;

#[test]
fn script_mode_records_and_lists_entries() {
    let home = common::app_home();
    common::script(
        &home,
        "add --income-label Salary --income 1000 --expense-label Rent --expense 400 --date 2024-01-05\nlist\nexit\n",
    )
    .success()
    .stdout(contains("Recorded 2 entries. Balance: ₱600.00"))
    .stdout(contains("2024-01-05 - Salary: ₱1000.00, Balance: ₱1000.00"))
    .stdout(contains("2024-01-05 - Rent: ₱400.00, Balance: ₱600.00"));

    let stored = std::fs::read_to_string(home.path().join("data").join("budgetTrackerData.json"))
        .expect("ledger blob written");
    assert!(stored.contains("\"weeklyRecords\""));
}

#[test]
fn ledger_survives_between_sessions() {
    let home = common::app_home();
    common::script(&home, "add --income 250 --date 2024-03-01\n").success();
    common::script(&home, "balance\nlist\n")
        .success()
        .stdout(contains("Balance: ₱250.00"))
        .stdout(contains("2024-03-01 - Income: ₱250.00, Balance: ₱250.00"));
}

#[test]
fn invalid_amounts_are_skipped_silently() {
    let home = common::app_home();
    common::script(&home, "add --income abc --expense -5\nbalance\nlist\n")
        .success()
        .stdout(contains("Recorded 0 entries. Balance: ₱0.00"))
        .stdout(contains("No records yet."))
        .stdout(contains("ERROR").not());
}

#[test]
fn clear_wipes_stored_data() {
    let home = common::app_home();
    common::script(
        &home,
        "add --income 10 --date 2024-01-01\nclear\nbalance\n",
    )
    .success()
    .stdout(contains("All data cleared. Balance: ₱0.00"));

    assert!(!home.path().join("data").join("budgetTrackerData.json").exists());
    common::script(&home, "list\n")
        .success()
        .stdout(contains("No records yet."));
}

#[test]
fn summary_draws_both_slices() {
    let home = common::app_home();
    common::script(
        &home,
        "add --income 600 --expense 200 --date 2024-01-01\nsummary\n",
    )
    .success()
    .stdout(contains("=== Summary ==="))
    .stdout(contains("75.0% ₱600.00"))
    .stdout(contains("25.0% ₱200.00"))
    .stdout(contains("Net: ₱400.00"));
}

#[test]
fn unknown_command_gets_a_suggestion() {
    let home = common::app_home();
    common::script(&home, "lst\n")
        .success()
        .stdout(contains("Unknown command `lst`"))
        .stdout(contains("Suggestion: `list`?"));
}

#[test]
fn bad_arguments_are_reported_and_shell_continues() {
    let home = common::app_home();
    common::script(&home, "add --date yesterday\nbalance\n")
        .success()
        .stdout(contains("invalid date `yesterday`"))
        .stdout(contains("Balance: ₱0.00"));
}

#[test]
fn malformed_blob_starts_empty() {
    let home = common::app_home();
    let data = home.path().join("data");
    std::fs::create_dir_all(&data).unwrap();
    std::fs::write(data.join("budgetTrackerData.json"), "{ not json").unwrap();

    common::script(&home, "balance\nlist\n")
        .success()
        .stdout(contains("Balance: ₱0.00"))
        .stdout(contains("No records yet."));
}

#[test]
fn quit_is_an_alias_for_exit_in_any_case() {
    let home = common::app_home();
    common::script(&home, "help\nQuit\nbalance\n")
        .success()
        .stdout(contains("exit     Leave the shell (also: quit)"))
        .stdout(contains("Balance:").not());
}

#[test]
fn legacy_invalid_date_records_list_verbatim() {
    let home = common::app_home();
    let data = home.path().join("data");
    std::fs::create_dir_all(&data).unwrap();
    std::fs::write(
        data.join("budgetTrackerData.json"),
        r#"{"balance": 20, "weeklyRecords": [{"date": "Invalid Date", "label": "Bonus", "amount": 20, "type": "income", "balance": 20}]}"#,
    )
    .unwrap();

    common::script(&home, "list\n")
        .success()
        .stdout(contains("Invalid Date - Bonus: ₱20.00, Balance: ₱20.00"));
}
