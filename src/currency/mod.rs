//! Fixed peso formatting for balances, amounts, and record list lines.

use crate::ledger::Record;

pub const CURRENCY_SYMBOL: char = '₱';

/// Formats a value with the peso symbol and two fixed decimals, e.g. `₱1000.00`.
/// Negative values keep the sign after the symbol (`₱-25.50`).
pub fn format_currency(value: f64) -> String {
    // Avoid printing `-0.00` for values that round to zero.
    let rounded = (value * 100.0).round() / 100.0;
    let value = if rounded == 0.0 { 0.0 } else { value };
    format!("{CURRENCY_SYMBOL}{value:.2}")
}

/// `<date> - <label>: ₱<amount>, Balance: ₱<balanceAfter>`. Dates that were
/// stored in an unrecognised layout are shown as stored.
pub fn format_record_line(record: &Record) -> String {
    format!(
        "{} - {}: {}, Balance: {}",
        record.date,
        record.label,
        format_currency(record.amount),
        format_currency(record.balance_after)
    )
}
