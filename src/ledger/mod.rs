//! Ledger store: records, running balance, form submissions, and the stored blob format.

#[allow(clippy::module_inception)]
pub mod ledger;
pub mod record;
pub mod submission;

pub use ledger::{Ledger, Totals};
pub use record::{Record, RecordDate, RecordKind};
pub use submission::{parse_amount, Submission, SubmissionOutcome};
