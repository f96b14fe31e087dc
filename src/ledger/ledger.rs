use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::errors::{LedgerError, Result};

use super::{
    record::{Record, RecordKind},
    submission::{is_valid_amount, parse_amount, Submission, SubmissionOutcome},
};

/// Running balance plus the append-only list of records that produced it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Ledger {
    balance: f64,
    #[serde(rename = "weeklyRecords")]
    records: Vec<Record>,
}

/// Income and expense sums over every record in a ledger.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct Totals {
    pub income_total: f64,
    pub expense_total: f64,
}

impl Totals {
    pub fn combined(&self) -> f64 {
        self.income_total + self.expense_total
    }

    pub fn net(&self) -> f64 {
        self.income_total - self.expense_total
    }
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn last_record(&self) -> Option<&Record> {
        self.records.last()
    }

    /// Adds `amount` to the balance and records it. Returns `None` without
    /// touching the ledger when the amount is not a finite positive number.
    pub fn apply_income(&mut self, label: &str, amount: f64, date: NaiveDate) -> Option<&Record> {
        self.apply(RecordKind::Income, label, amount, date)
    }

    /// Subtracts `amount` from the balance and records it. Same skip rule as
    /// [`Ledger::apply_income`].
    pub fn apply_expense(&mut self, label: &str, amount: f64, date: NaiveDate) -> Option<&Record> {
        self.apply(RecordKind::Expense, label, amount, date)
    }

    /// Applies the income half and then the expense half of a form submission.
    /// Each half is skipped on its own when its amount does not parse.
    pub fn apply_submission(&mut self, submission: &Submission) -> SubmissionOutcome {
        let date = submission
            .date
            .unwrap_or_else(|| Local::now().date_naive());
        let mut outcome = SubmissionOutcome::default();

        if let Some(amount) = parse_amount(&submission.income_amount) {
            outcome.income_applied = self
                .apply_income(&submission.income_label, amount, date)
                .is_some();
        }
        if let Some(amount) = parse_amount(&submission.expense_amount) {
            outcome.expense_applied = self
                .apply_expense(&submission.expense_label, amount, date)
                .is_some();
        }

        outcome
    }

    /// Drops every record and resets the balance to zero.
    pub fn clear(&mut self) {
        tracing::debug!(records = self.records.len(), "clearing ledger");
        self.balance = 0.0;
        self.records.clear();
    }

    pub fn aggregate(&self) -> Totals {
        self.records
            .iter()
            .fold(Totals::default(), |mut totals, record| {
                match record.kind {
                    RecordKind::Income => totals.income_total += record.amount,
                    RecordKind::Expense => totals.expense_total += record.amount,
                }
                totals
            })
    }

    pub fn serialize(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parses a stored blob. Anything that is not a well-formed ledger,
    /// including empty text and `null`, is reported as `MalformedState`.
    pub fn deserialize(text: &str) -> Result<Ledger> {
        if text.trim().is_empty() {
            return Err(LedgerError::MalformedState("empty ledger state".into()));
        }
        let ledger: Ledger = serde_json::from_str(text)
            .map_err(|err| LedgerError::MalformedState(err.to_string()))?;
        ledger.validate()?;
        Ok(ledger)
    }

    fn validate(&self) -> Result<()> {
        if !self.balance.is_finite() {
            return Err(LedgerError::MalformedState(
                "balance is not a finite number".into(),
            ));
        }
        if let Some((index, record)) = self
            .records
            .iter()
            .enumerate()
            .find(|(_, record)| !is_valid_amount(record.amount) || !record.balance_after.is_finite())
        {
            return Err(LedgerError::MalformedState(format!(
                "record {index} (`{}`) has an invalid amount or balance",
                record.label
            )));
        }
        Ok(())
    }

    fn apply(
        &mut self,
        kind: RecordKind,
        label: &str,
        amount: f64,
        date: NaiveDate,
    ) -> Option<&Record> {
        if !is_valid_amount(amount) {
            tracing::debug!(%kind, amount, "skipping non-positive amount");
            return None;
        }
        match kind {
            RecordKind::Income => self.balance += amount,
            RecordKind::Expense => self.balance -= amount,
        }
        let record = Record::new(kind, label, amount, date, self.balance);
        tracing::debug!(
            %kind,
            label = %record.label,
            amount,
            balance = self.balance,
            "applied record"
        );
        self.records.push(record);
        self.records.last()
    }
}
