use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Whether a record added to or subtracted from the balance.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    Income,
    Expense,
}

impl RecordKind {
    /// Label used when a submission leaves the label blank.
    pub fn default_label(self) -> &'static str {
        match self {
            RecordKind::Income => "Income",
            RecordKind::Expense => "Expense",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RecordKind::Income => "income",
            RecordKind::Expense => "expense",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One applied income or expense together with the balance right after it.
///
/// Field names on the wire follow the stored blob layout, so `balance_after`
/// is written as `balance`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Record {
    pub date: RecordDate,
    pub label: String,
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: RecordKind,
    #[serde(rename = "balance")]
    pub balance_after: f64,
}

impl Record {
    pub(crate) fn new(
        kind: RecordKind,
        label: &str,
        amount: f64,
        date: NaiveDate,
        balance_after: f64,
    ) -> Self {
        let trimmed = label.trim();
        let label = if trimmed.is_empty() {
            kind.default_label().to_string()
        } else {
            trimmed.to_string()
        };
        Self {
            date: RecordDate::Day(date),
            label,
            amount,
            kind,
            balance_after,
        }
    }

    pub fn is_income(&self) -> bool {
        self.kind == RecordKind::Income
    }

    /// Signed effect of this record on the running balance.
    pub fn signed_amount(&self) -> f64 {
        match self.kind {
            RecordKind::Income => self.amount,
            RecordKind::Expense => -self.amount,
        }
    }
}

const ISO_FORMAT: &str = "%Y-%m-%d";
const LOCALE_FORMAT: &str = "%m/%d/%Y";

/// Booking date of a record.
///
/// Dates are written as ISO `YYYY-MM-DD`; older blobs holding the US locale
/// form `M/D/YYYY` still parse. Anything else (older blobs can hold
/// `"Invalid Date"` or other locale layouts) is kept verbatim so one odd
/// record never invalidates the rest of the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RecordDate {
    Day(NaiveDate),
    Unparsed(String),
}

impl RecordDate {
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        NaiveDate::parse_from_str(trimmed, ISO_FORMAT)
            .or_else(|_| NaiveDate::parse_from_str(trimmed, LOCALE_FORMAT))
            .map(RecordDate::Day)
            .unwrap_or_else(|_| RecordDate::Unparsed(raw.to_string()))
    }

    pub fn day(&self) -> Option<NaiveDate> {
        match self {
            RecordDate::Day(date) => Some(*date),
            RecordDate::Unparsed(_) => None,
        }
    }
}

impl From<NaiveDate> for RecordDate {
    fn from(date: NaiveDate) -> Self {
        RecordDate::Day(date)
    }
}

impl PartialEq<NaiveDate> for RecordDate {
    fn eq(&self, other: &NaiveDate) -> bool {
        self.day().as_ref() == Some(other)
    }
}

impl fmt::Display for RecordDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordDate::Day(date) => write!(f, "{}", date.format(ISO_FORMAT)),
            RecordDate::Unparsed(raw) => f.write_str(raw),
        }
    }
}

impl Serialize for RecordDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for RecordDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(RecordDate::parse(&raw))
    }
}
