use chrono::NaiveDate;

use crate::{
    currency::format_currency,
    ledger::Submission,
};

use super::{context::ShellContext, output, registry::CommandEntry, CommandError, CommandResult};

const CLEAR_PROMPT: &str = "Are you sure you want to clear all data?";

pub(crate) fn all() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "add",
            "Record income and/or expense from one entry",
            "add [--income <amount>] [--income-label <text>] [--expense <amount>] [--expense-label <text>] [--date YYYY-MM-DD]",
            cmd_add,
        ),
        CommandEntry::new("list", "Show every record with its running balance", "list", cmd_list),
        CommandEntry::new("balance", "Show the current balance", "balance", cmd_balance),
        CommandEntry::new("summary", "Draw the income/expense summary", "summary", cmd_summary),
        CommandEntry::new("clear", "Delete all records and stored data", "clear [--yes]", cmd_clear),
        CommandEntry::new("help", "Show available commands", "help [command]", cmd_help),
        CommandEntry::new("exit", "Leave the shell", "exit", cmd_exit).with_aliases(&["quit"]),
    ]
}

fn cmd_add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let submission = parse_submission(args)?;
    let outcome = context.tracker.submit(&submission)?;
    let noun = if outcome.applied_count() == 1 {
        "entry"
    } else {
        "entries"
    };
    output::success(format!(
        "Recorded {} {}. Balance: {}",
        outcome.applied_count(),
        noun,
        context.tracker.balance_line()
    ));
    Ok(())
}

fn cmd_list(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    expect_no_args("list", args)?;
    let records = context.tracker.ledger().records();
    if records.is_empty() {
        output::info("No records yet.");
        return Ok(());
    }
    output::section("Records");
    for record in records {
        println!("{}", output::record_line(record));
    }
    Ok(())
}

fn cmd_balance(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    expect_no_args("balance", args)?;
    println!("Balance: {}", context.tracker.balance_line());
    Ok(())
}

fn cmd_summary(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    expect_no_args("summary", args)?;
    context.tracker.refresh_summary()?;
    let totals = context.tracker.ledger().aggregate();
    output::info(format!("Net: {}", format_currency(totals.net())));
    Ok(())
}

fn cmd_clear(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let skip_prompt = match args {
        [] => false,
        ["--yes"] | ["-y"] => true,
        _ => {
            return Err(CommandError::InvalidArguments("usage: clear [--yes]".into()))
        }
    };
    if !skip_prompt && !context.confirm(CLEAR_PROMPT)? {
        output::info("Nothing was cleared.");
        return Ok(());
    }
    context.tracker.clear()?;
    output::success(format!(
        "All data cleared. Balance: {}",
        context.tracker.balance_line()
    ));
    Ok(())
}

fn cmd_help(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args {
        [] => {
            output::section("Commands");
            for entry in context.commands() {
                println!("  {:<8} {}{}", entry.name, entry.summary, alias_note(entry));
            }
            Ok(())
        }
        [name] => match context.command(name) {
            Some(entry) => {
                println!("{}{}", entry.summary, alias_note(entry));
                println!("usage: {}", entry.usage);
                Ok(())
            }
            None => Err(CommandError::InvalidArguments(format!(
                "no help for unknown command `{name}`"
            ))),
        },
        _ => Err(CommandError::InvalidArguments("usage: help [command]".into())),
    }
}

fn alias_note(entry: &CommandEntry) -> String {
    if entry.aliases.is_empty() {
        String::new()
    } else {
        format!(" (also: {})", entry.aliases.join(", "))
    }
}

fn cmd_exit(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    Err(CommandError::ExitRequested)
}

fn expect_no_args(command: &str, args: &[&str]) -> CommandResult {
    if args.is_empty() {
        Ok(())
    } else {
        Err(CommandError::InvalidArguments(format!(
            "`{command}` takes no arguments"
        )))
    }
}

/// Builds a submission from `add` flags. Amount text is passed through as-is
/// so that unusable amounts are skipped by the ledger rather than rejected here.
pub(crate) fn parse_submission(args: &[&str]) -> Result<Submission, CommandError> {
    let mut submission = Submission::new();
    let mut iter = args.iter();
    while let Some(flag) = iter.next() {
        let mut value = || {
            iter.next().copied().ok_or_else(|| {
                CommandError::InvalidArguments(format!("`{flag}` expects a value"))
            })
        };
        match *flag {
            "--income" => submission.income_amount = value()?.to_string(),
            "--income-label" => submission.income_label = value()?.to_string(),
            "--expense" => submission.expense_amount = value()?.to_string(),
            "--expense-label" => submission.expense_label = value()?.to_string(),
            "--date" => submission.date = Some(parse_date(value()?)?),
            other => {
                return Err(CommandError::InvalidArguments(format!(
                    "unknown option `{other}` for `add`"
                )))
            }
        }
    }
    Ok(submission)
}

pub(crate) fn parse_date(input: &str) -> Result<NaiveDate, CommandError> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|_| {
        CommandError::InvalidArguments(format!("invalid date `{}` (use YYYY-MM-DD)", input))
    })
}
