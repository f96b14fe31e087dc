//! Income/expense summary: the two-slice chart model and the renderers that draw it.

use std::io::{self, Write};

use colored::Colorize;
use serde::Serialize;

use crate::{currency::format_currency, errors::Result};

pub use crate::ledger::Totals;

pub const INCOME_LABEL: &str = "Income";
pub const EXPENSE_LABEL: &str = "Expenses";
pub const INCOME_COLOR: &str = "#28a745";
pub const EXPENSE_COLOR: &str = "#dc3545";

const DEFAULT_BAR_WIDTH: usize = 30;

/// One labelled wedge of the summary chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Slice {
    pub label: &'static str,
    pub value: f64,
    pub color: &'static str,
    /// Percentage of the combined total, 0 when there is nothing to show.
    pub share: f64,
}

/// Renderer-independent description of the summary chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieChart {
    pub slices: [Slice; 2],
}

impl PieChart {
    pub fn from_totals(totals: &Totals) -> Self {
        let combined = totals.combined();
        let share = |value: f64| {
            if combined > 0.0 {
                value / combined * 100.0
            } else {
                0.0
            }
        };
        Self {
            slices: [
                Slice {
                    label: INCOME_LABEL,
                    value: totals.income_total,
                    color: INCOME_COLOR,
                    share: share(totals.income_total),
                },
                Slice {
                    label: EXPENSE_LABEL,
                    value: totals.expense_total,
                    color: EXPENSE_COLOR,
                    share: share(totals.expense_total),
                },
            ],
        }
    }

    pub fn is_blank(&self) -> bool {
        self.slices.iter().all(|slice| slice.value == 0.0)
    }
}

/// Draws aggregate totals. Each call replaces whatever the previous call drew.
pub trait SummaryRenderer {
    fn render(&mut self, totals: &Totals) -> Result<()>;
}

/// Text renderer that draws one proportional bar per slice.
pub struct TerminalRenderer<W: Write> {
    out: W,
    width: usize,
    color: bool,
    current: Option<PieChart>,
}

impl TerminalRenderer<io::Stdout> {
    pub fn stdout(color: bool) -> Self {
        Self::new(io::stdout(), color)
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self {
            out,
            width: DEFAULT_BAR_WIDTH,
            color,
            current: None,
        }
    }

    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width.max(1);
        self
    }

    /// The chart most recently drawn, if any.
    pub fn current(&self) -> Option<&PieChart> {
        self.current.as_ref()
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn draw(&mut self, chart: &PieChart) -> Result<()> {
        let heading = "=== Summary ===";
        if self.color {
            writeln!(self.out, "{}", heading.bold())?;
        } else {
            writeln!(self.out, "{heading}")?;
        }
        let label_width = chart
            .slices
            .iter()
            .map(|slice| slice.label.len())
            .max()
            .unwrap_or(0);
        for slice in &chart.slices {
            let filled = ((slice.share / 100.0) * self.width as f64).round() as usize;
            let filled = filled.min(self.width);
            let bar = "#".repeat(filled);
            let rest = ".".repeat(self.width - filled);
            let bar = if self.color {
                match hex_rgb(slice.color) {
                    Some((r, g, b)) => bar.truecolor(r, g, b).to_string(),
                    None => bar,
                }
            } else {
                bar
            };
            writeln!(
                self.out,
                "{:<label_width$} {}{} {:>5.1}% {}",
                slice.label,
                bar,
                rest,
                slice.share,
                format_currency(slice.value),
            )?;
        }
        self.out.flush()?;
        Ok(())
    }
}

impl<W: Write> SummaryRenderer for TerminalRenderer<W> {
    fn render(&mut self, totals: &Totals) -> Result<()> {
        let chart = PieChart::from_totals(totals);
        if self.current.take().is_some() {
            tracing::debug!("replacing previous summary chart");
        }
        self.draw(&chart)?;
        self.current = Some(chart);
        Ok(())
    }
}

fn hex_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).ok();
    Some((channel(0..2)?, channel(2..4)?, channel(4..6)?))
}
