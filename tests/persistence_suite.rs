use budget_tracker::{
    currency::format_record_line,
    ledger::{Ledger, RecordDate, RecordKind, Submission, Totals},
    storage::{load_ledger, save_ledger, FileStore, PersistencePort, LEDGER_KEY},
    summary::{SummaryRenderer, TerminalRenderer},
    tracker::Tracker,
};
use chrono::NaiveDate;
use tempfile::tempdir;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn file_store_round_trips_ledger() {
    let temp = tempdir().unwrap();
    let mut store = FileStore::new(temp.path()).unwrap();

    let mut ledger = Ledger::new();
    ledger.apply_income("Salary", 1000.0, date(2024, 1, 5));
    ledger.apply_expense("Rent", 400.0, date(2024, 1, 5));
    ledger.apply_income("", 0.5, date(2024, 1, 6));
    save_ledger(&mut store, LEDGER_KEY, &ledger).unwrap();

    let reopened = FileStore::new(temp.path()).unwrap();
    let loaded = load_ledger(&reopened, LEDGER_KEY).unwrap();
    assert_eq!(loaded, ledger);
    assert_eq!(loaded.balance(), 600.5);
}

#[test]
fn legacy_blob_with_locale_dates_loads() {
    let temp = tempdir().unwrap();
    let mut store = FileStore::new(temp.path()).unwrap();
    store
        .set(
            LEDGER_KEY,
            r#"{
                "balance": 600,
                "weeklyRecords": [
                    {"date": "1/5/2024", "label": "Salary", "amount": 1000, "type": "income", "balance": 1000},
                    {"date": "1/5/2024", "label": "Rent", "amount": 400, "type": "expense", "balance": 600}
                ]
            }"#,
        )
        .unwrap();

    let ledger = load_ledger(&store, LEDGER_KEY).unwrap();
    assert_eq!(ledger.balance(), 600.0);
    let kinds: Vec<RecordKind> = ledger.records().iter().map(|r| r.kind).collect();
    assert_eq!(kinds, vec![RecordKind::Income, RecordKind::Expense]);
    assert!(ledger.records().iter().all(|r| r.date == date(2024, 1, 5)));
}

#[test]
fn tracker_sessions_share_state_through_files() {
    let temp = tempdir().unwrap();

    {
        let store = FileStore::new(temp.path()).unwrap();
        let renderer = TerminalRenderer::new(Vec::new(), false);
        let mut tracker = Tracker::open(store, renderer, LEDGER_KEY).unwrap();
        tracker
            .submit(
                &Submission::new()
                    .income("Salary", "500")
                    .on(date(2024, 2, 1)),
            )
            .unwrap();
        tracker
            .submit(&Submission::new().expense("", "200").on(date(2024, 2, 2)))
            .unwrap();
        tracker
            .submit(&Submission::new().income("", "100").on(date(2024, 2, 3)))
            .unwrap();
    }

    let store = FileStore::new(temp.path()).unwrap();
    let renderer = TerminalRenderer::new(Vec::new(), false);
    let tracker = Tracker::open(store, renderer, LEDGER_KEY).unwrap();

    assert_eq!(tracker.ledger().balance(), 400.0);
    assert_eq!(
        tracker.ledger().aggregate(),
        Totals {
            income_total: 600.0,
            expense_total: 200.0
        }
    );
    assert_eq!(tracker.ledger().records()[1].label, "Expense");
    let chart = tracker.renderer().current().expect("summary drawn on open");
    assert_eq!(chart.slices[0].value, 600.0);
    assert_eq!(chart.slices[1].value, 200.0);
}

struct FailingRenderer;

impl SummaryRenderer for FailingRenderer {
    fn render(&mut self, _totals: &Totals) -> budget_tracker::errors::Result<()> {
        Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed").into())
    }
}

#[test]
fn ledger_is_saved_even_when_summary_cannot_be_drawn() {
    let temp = tempdir().unwrap();

    {
        let store = FileStore::new(temp.path()).unwrap();
        let mut tracker = Tracker::open(store, FailingRenderer, LEDGER_KEY).unwrap();
        tracker
            .submit(
                &Submission::new()
                    .income("Salary", "1000")
                    .expense("Rent", "400")
                    .on(date(2024, 3, 1)),
            )
            .unwrap();
    }

    let store = FileStore::new(temp.path()).unwrap();
    assert!(store.get(LEDGER_KEY).unwrap().is_some());
    let ledger = load_ledger(&store, LEDGER_KEY).unwrap();
    assert_eq!(ledger.record_count(), 2);
    assert_eq!(ledger.balance(), 600.0);
}

#[test]
fn legacy_blob_with_unreadable_dates_keeps_every_record() {
    let temp = tempdir().unwrap();
    let mut store = FileStore::new(temp.path()).unwrap();
    store
        .set(
            LEDGER_KEY,
            r#"{
                "balance": 1020,
                "weeklyRecords": [
                    {"date": "1/5/2024", "label": "Salary", "amount": 1000, "type": "income", "balance": 1000},
                    {"date": "Invalid Date", "label": "Bonus", "amount": 20, "type": "income", "balance": 1020}
                ]
            }"#,
        )
        .unwrap();

    let renderer = TerminalRenderer::new(Vec::new(), false);
    let mut tracker = Tracker::open(store, renderer, LEDGER_KEY).unwrap();
    assert_eq!(tracker.ledger().record_count(), 2);
    assert_eq!(tracker.ledger().balance(), 1020.0);
    assert_eq!(
        format_record_line(&tracker.ledger().records()[1]),
        "Invalid Date - Bonus: ₱20.00, Balance: ₱1020.00"
    );

    tracker
        .submit(&Submission::new().expense("Lunch", "20").on(date(2024, 1, 6)))
        .unwrap();
    drop(tracker);

    let reopened = FileStore::new(temp.path()).unwrap();
    let ledger = load_ledger(&reopened, LEDGER_KEY).unwrap();
    let labels: Vec<&str> = ledger.records().iter().map(|r| r.label.as_str()).collect();
    assert_eq!(labels, vec!["Salary", "Bonus", "Lunch"]);
    assert_eq!(ledger.records()[1].date, RecordDate::Unparsed("Invalid Date".into()));
    assert_eq!(ledger.balance(), 1000.0);
}
