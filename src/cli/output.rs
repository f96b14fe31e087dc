use colored::{Color, Colorize};
use std::fmt;

use crate::{
    currency::format_record_line,
    ledger::{Record, RecordKind},
};

/// Message categories used by the CLI output helpers.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
    Warning,
    Error,
    Hint,
    Section,
}

fn build_label(kind: MessageKind) -> (&'static str, &'static str) {
    match kind {
        MessageKind::Info => ("INFO", "[i]"),
        MessageKind::Success => ("SUCCESS", "[+]"),
        MessageKind::Warning => ("WARNING", "[!]"),
        MessageKind::Error => ("ERROR", "[x]"),
        MessageKind::Hint => ("HINT", ">"),
        MessageKind::Section => ("", ""),
    }
}

pub(crate) fn style(kind: MessageKind, message: impl fmt::Display) -> String {
    let text = message.to_string();

    let formatted = match kind {
        MessageKind::Section => format!("=== {} ===", text.trim()),
        _ => {
            let (label, icon) = build_label(kind);
            format!("{label}: {icon} {text}")
        }
    };

    match kind {
        MessageKind::Success => formatted.bright_green().to_string(),
        MessageKind::Warning => formatted.bright_yellow().to_string(),
        MessageKind::Error => formatted.bright_red().to_string(),
        MessageKind::Hint => formatted.bright_cyan().to_string(),
        MessageKind::Section => formatted.bold().to_string(),
        MessageKind::Info => formatted,
    }
}

pub fn print(kind: MessageKind, message: impl fmt::Display) {
    let formatted = style(kind, message);
    match kind {
        MessageKind::Section => println!("\n{}", formatted),
        _ => println!("{}", formatted),
    }
}

pub fn info(message: impl fmt::Display) {
    print(MessageKind::Info, message);
}

pub fn success(message: impl fmt::Display) {
    print(MessageKind::Success, message);
}

pub fn warning(message: impl fmt::Display) {
    print(MessageKind::Warning, message);
}

pub fn error(message: impl fmt::Display) {
    print(MessageKind::Error, message);
}

pub fn hint(message: impl fmt::Display) {
    print(MessageKind::Hint, message);
}

pub fn section(title: impl fmt::Display) {
    print(MessageKind::Section, title);
}

pub(crate) fn record_color(kind: RecordKind) -> Color {
    match kind {
        RecordKind::Income => Color::Green,
        RecordKind::Expense => Color::Red,
    }
}

/// A list line, green for income and red for expenses.
pub(crate) fn record_line(record: &Record) -> String {
    format_record_line(record)
        .color(record_color(record.kind))
        .to_string()
}

/// Disables ANSI styling for every helper above. When enabled, `colored`
/// still decides based on the terminal and `NO_COLOR`/`CLICOLOR`.
pub fn set_color(enabled: bool) {
    if !enabled {
        colored::control::set_override(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_labels_when_color_disabled() {
        set_color(false);
        assert_eq!(style(MessageKind::Warning, "careful"), "WARNING: [!] careful");
        assert_eq!(style(MessageKind::Section, " Records "), "=== Records ===");
    }

    #[test]
    fn record_lines_are_coloured_by_kind() {
        assert_eq!(record_color(RecordKind::Income), Color::Green);
        assert_eq!(record_color(RecordKind::Expense), Color::Red);

        let line = format_record_line(&sample(RecordKind::Expense));
        assert_eq!(
            line.color(record_color(RecordKind::Expense)).fgcolor(),
            Some(Color::Red)
        );

        set_color(false);
        let income = sample(RecordKind::Income);
        assert_eq!(record_line(&income), format_record_line(&income));
    }

    fn sample(kind: RecordKind) -> Record {
        let mut ledger = crate::ledger::Ledger::new();
        let date = chrono::NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        match kind {
            RecordKind::Income => ledger.apply_income("Salary", 1000.0, date),
            RecordKind::Expense => ledger.apply_expense("Rent", 400.0, date),
        }
        .cloned()
        .unwrap()
    }
}
