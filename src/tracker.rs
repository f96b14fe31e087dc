//! A running session: one owned ledger wired to a persistence port and a summary renderer.

use crate::{
    currency::format_currency,
    errors::Result,
    ledger::{Ledger, Submission, SubmissionOutcome},
    storage::{self, PersistencePort},
    summary::SummaryRenderer,
};

pub struct Tracker<P, R> {
    ledger: Ledger,
    port: P,
    renderer: R,
    key: String,
}

impl<P: PersistencePort, R: SummaryRenderer> Tracker<P, R> {
    /// Rehydrates the ledger stored under `key` and draws the initial summary.
    ///
    /// A summary that fails to draw is logged and does not stop the session.
    pub fn open(port: P, renderer: R, key: impl Into<String>) -> Result<Self> {
        let key = key.into();
        let ledger = storage::load_ledger(&port, &key)?;
        let mut tracker = Self {
            ledger,
            port,
            renderer,
            key,
        };
        tracker.redraw();
        Ok(tracker)
    }

    /// Applies a form submission, persists the result, and redraws the summary.
    pub fn submit(&mut self, submission: &Submission) -> Result<SubmissionOutcome> {
        let outcome = self.ledger.apply_submission(submission);
        storage::save_ledger(&mut self.port, &self.key, &self.ledger)?;
        if !outcome.is_empty() {
            self.redraw();
        }
        tracing::info!(
            applied = outcome.applied_count(),
            balance = self.ledger.balance(),
            "submission processed"
        );
        Ok(outcome)
    }

    /// Drops all stored and in-memory data.
    pub fn clear(&mut self) -> Result<()> {
        storage::clear_ledger(&mut self.port, &self.key)?;
        self.ledger.clear();
        self.redraw();
        Ok(())
    }

    /// Draws the summary for the current totals and reports a renderer failure.
    pub fn refresh_summary(&mut self) -> Result<()> {
        let totals = self.ledger.aggregate();
        self.renderer.render(&totals)
    }

    fn redraw(&mut self) {
        if let Err(err) = self.refresh_summary() {
            tracing::warn!(error = %err, "summary could not be drawn");
        }
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn port(&self) -> &P {
        &self.port
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Current balance as shown in the header, e.g. `₱600.00`.
    pub fn balance_line(&self) -> String {
        format_currency(self.ledger.balance())
    }

    pub fn into_parts(self) -> (Ledger, P, R) {
        (self.ledger, self.port, self.renderer)
    }
}
