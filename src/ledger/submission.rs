use chrono::NaiveDate;

/// One filled-in entry form: an optional income half, an optional expense half,
/// and the date both halves are booked on.
///
/// Amounts stay as raw text until applied so that a non-numeric half is skipped
/// rather than rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Submission {
    pub income_label: String,
    pub income_amount: String,
    pub expense_label: String,
    pub expense_amount: String,
    pub date: Option<NaiveDate>,
}

impl Submission {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn income(mut self, label: impl Into<String>, amount: impl Into<String>) -> Self {
        self.income_label = label.into();
        self.income_amount = amount.into();
        self
    }

    pub fn expense(mut self, label: impl Into<String>, amount: impl Into<String>) -> Self {
        self.expense_label = label.into();
        self.expense_amount = amount.into();
        self
    }

    pub fn on(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }
}

/// Which halves of a submission produced records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubmissionOutcome {
    pub income_applied: bool,
    pub expense_applied: bool,
}

impl SubmissionOutcome {
    pub fn applied_count(&self) -> usize {
        usize::from(self.income_applied) + usize::from(self.expense_applied)
    }

    pub fn is_empty(&self) -> bool {
        self.applied_count() == 0
    }
}

/// Parses a user-entered amount. Only finite values strictly above zero qualify.
pub fn parse_amount(input: &str) -> Option<f64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|value| is_valid_amount(*value))
}

pub(crate) fn is_valid_amount(amount: f64) -> bool {
    amount.is_finite() && amount > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_amount_accepts_positive_numbers() {
        assert_eq!(parse_amount("1000"), Some(1000.0));
        assert_eq!(parse_amount(" 12.50 "), Some(12.5));
    }

    #[test]
    fn parse_amount_rejects_invalid_input() {
        for raw in ["", "   ", "0", "-5", "abc", "NaN", "inf", "-inf"] {
            assert_eq!(parse_amount(raw), None, "`{raw}` should be rejected");
        }
    }

    #[test]
    fn outcome_counts_applied_halves() {
        let outcome = SubmissionOutcome {
            income_applied: true,
            expense_applied: false,
        };
        assert_eq!(outcome.applied_count(), 1);
        assert!(!outcome.is_empty());
        assert!(SubmissionOutcome::default().is_empty());
    }
}
