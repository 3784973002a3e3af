//! Report formatting and printing utilities.
//!
//! Separate from command logic so the library can be used without the CLI.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::commands::{
    CommandResult, CommandSummary, DetectSummary, DuplicateSummary, ImportSummary, InitSummary,
};
use crate::{
    config::CONFIG_FILE_NAME,
    core::{DropReason, SLOTS, target_name},
    operator::{DuplicateReport, Outcome, PlanStep},
};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

pub fn print(result: &CommandResult, verbose: bool) {
    print_to(result, verbose, &mut io::stdout().lock());
}

/// Print a command result to a custom writer.
pub fn print_to<W: Write>(result: &CommandResult, verbose: bool, writer: &mut W) {
    match &result.summary {
        CommandSummary::Init(summary) => print_init(summary, writer),
        CommandSummary::Slots => print_slots(writer),
        CommandSummary::Detect(summary) => print_detect(summary, writer),
        CommandSummary::Import(summary) => print_import(summary, verbose, writer),
        CommandSummary::Export(summary) => {
            let _ = writeln!(writer, "{}", summary.json);
        }
        CommandSummary::Duplicate(summary) => print_duplicate(summary, verbose, writer),
        CommandSummary::Script(summary) => {
            let _ = write!(writer, "{}", summary.script);
        }
    }
}

fn print_init<W: Write>(summary: &InitSummary, writer: &mut W) {
    if summary.created {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    } else {
        eprintln!("Error: {} already exists", CONFIG_FILE_NAME);
    }
}

fn print_slots<W: Write>(writer: &mut W) {
    let id_width = SLOTS.iter().map(|s| s.id.len()).max().unwrap_or(0);
    let target_width = SLOTS
        .iter()
        .filter_map(target_name)
        .map(UnicodeWidthStr::width)
        .max()
        .unwrap_or(0);

    for slot in SLOTS {
        let target = target_name(slot).unwrap_or("-");
        let padding = target_width.saturating_sub(UnicodeWidthStr::width(target));
        let line = format!(
            "{:<id_width$}  {}{:padding$}  {}",
            slot.id,
            target,
            "",
            slot.description.unwrap_or(""),
        );
        let _ = writeln!(writer, "{}", line.trim_end());
    }
}

fn print_detect<W: Write>(summary: &DetectSummary, writer: &mut W) {
    let prefix = &summary.suggestion.prefix;
    if prefix.is_empty() {
        let _ = writeln!(writer, "Detected prefix: {}", "(none)".dimmed());
    } else {
        let _ = writeln!(writer, "Detected prefix: \"{}\"", prefix.cyan());
    }

    let filled = &summary.suggestion.filled;
    if filled.is_empty() {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("No new slots to fill in {}", summary.model_path).green()
        );
        return;
    }

    print_pairs(filled.iter().map(|(id, name)| (*id, name.as_str())), writer);

    if summary.is_apply {
        let _ = writeln!(
            writer,
            "{} {} slot(s) in {} ({} mapped in total)",
            "Filled".green().bold(),
            filled.len(),
            summary.model_path,
            summary.mapped_count
        );
    } else {
        let _ = writeln!(
            writer,
            "{} {} slot(s) in {} ({} mapped in total)",
            "Would fill".yellow().bold(),
            filled.len(),
            summary.model_path,
            summary.mapped_count
        );
        let _ = writeln!(writer, "Run with {} to store the mapping.", "--apply".cyan());
    }
}

fn print_import<W: Write>(summary: &ImportSummary, verbose: bool, writer: &mut W) {
    let Some(outcome) = &summary.outcome else {
        let _ = writeln!(
            writer,
            "{} Import failed, {} is unchanged",
            FAILURE_MARK.red(),
            summary.model_path
        );
        return;
    };

    print_pairs(
        outcome
            .accepted
            .iter()
            .map(|(id, name)| (id.as_str(), name.as_str())),
        writer,
    );

    if verbose {
        for (key, reason) in summary.dropped() {
            let reason = match reason {
                DropReason::UnknownSlot => "unknown slot",
                DropReason::NoSuchShapeKey => "no such shape key",
            };
            let _ = writeln!(writer, "  {} {} ({})", "skipped".dimmed(), key, reason);
        }
    }

    let count = outcome.accepted.len();
    if count == 0 {
        let _ = writeln!(
            writer,
            "{} No slots imported into {} ({} skipped)",
            FAILURE_MARK.red(),
            summary.model_path,
            outcome.dropped.len()
        );
    } else if summary.is_apply {
        let _ = writeln!(
            writer,
            "{} {} slot(s) into {}",
            "Imported".green().bold(),
            count,
            summary.model_path
        );
    } else {
        let _ = writeln!(
            writer,
            "{} {} slot(s) into {}",
            "Would import".yellow().bold(),
            count,
            summary.model_path
        );
        let _ = writeln!(writer, "Run with {} to store the mapping.", "--apply".cyan());
    }
}

fn print_duplicate<W: Write>(summary: &DuplicateSummary, verbose: bool, writer: &mut W) {
    for model in &summary.models {
        match &model.result {
            Ok(report) => {
                print_report(&model.model_path, report, summary.is_apply, verbose, writer)
            }
            Err(err) => {
                eprintln!("{} {}: {}", "error:".bold().red(), model.model_path, err);
            }
        }
    }

    if !summary.is_apply && summary.models.iter().any(|m| m.result.is_ok()) {
        let _ = writeln!(writer, "Run with {} to add these shape keys.", "--apply".cyan());
    }
}

fn print_report<W: Write>(
    path: &str,
    report: &DuplicateReport,
    is_apply: bool,
    verbose: bool,
    writer: &mut W,
) {
    let (verb, count) = if is_apply {
        ("Added".green().bold(), report.created)
    } else {
        ("Would add".yellow().bold(), report.plan.created_count())
    };
    let _ = writeln!(writer, "{} {} shape key(s) to {}:", verb, count, path);

    for step in &report.plan.steps {
        match step {
            PlanStep::Separator(separator) => {
                let _ = writeln!(
                    writer,
                    "  {} \"{}\"  {}",
                    "+".green(),
                    separator.name,
                    "(separator)".dimmed()
                );
            }
            PlanStep::Slot(slot) => match &slot.outcome {
                Outcome::Copy { source } => {
                    let _ = writeln!(
                        writer,
                        "  {} {}  {}",
                        "+".green(),
                        slot.target,
                        format!("(from {})", source).dimmed()
                    );
                }
                Outcome::Missing { mapped } if verbose => {
                    let _ = writeln!(
                        writer,
                        "  {} {}  {}",
                        "-".yellow(),
                        slot.target,
                        format!("({} not found)", mapped).dimmed()
                    );
                }
                Outcome::AlreadyTarget if verbose => {
                    let _ = writeln!(
                        writer,
                        "  {} {}  {}",
                        "=".blue(),
                        slot.target,
                        "(already named)".dimmed()
                    );
                }
                _ => {}
            },
        }
    }
}

/// Print `slot <- shape key` lines aligned on the slot column.
fn print_pairs<'a, W: Write>(pairs: impl Iterator<Item = (&'a str, &'a str)>, writer: &mut W) {
    let pairs: Vec<_> = pairs.collect();
    let width = pairs.iter().map(|(id, _)| id.len()).max().unwrap_or(0);
    for (id, name) in pairs {
        let _ = writeln!(writer, "  {:<width$} {} {}", id, "<-".dimmed(), name);
    }
}
