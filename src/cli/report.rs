//! Printing of command results.
//!
//! The report text goes to stdout so it can be piped or redirected; status
//! lines and diagnostics go to stderr, except the confirmation that a report
//! file was written.

use std::io::{self, Write};

use colored::Colorize;

use super::commands::{CommandResult, CommandSummary, InitSummary, ReportSummary};
use crate::config::CONFIG_FILE_NAME;
use crate::core::{Analysis, SkipReason};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Print a command result to stdout and stderr.
pub fn print(result: &CommandResult, verbose: bool) {
    print_to(
        result,
        verbose,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    );
}

/// Print a command result to custom writers.
pub fn print_to<O: Write, E: Write>(
    result: &CommandResult,
    verbose: bool,
    out: &mut O,
    err: &mut E,
) {
    match &result.summary {
        CommandSummary::Report(summary) => print_report(summary, verbose, out, err),
        CommandSummary::Init(summary) => print_init(summary, out, err),
    }
}

fn print_report<O: Write, E: Write>(
    summary: &ReportSummary,
    verbose: bool,
    out: &mut O,
    err: &mut E,
) {
    let analysis = &summary.analysis;
    let report = &analysis.report;

    if verbose {
        print_diagnostics(summary, err);
    } else {
        print_unparseable_warning(analysis, err);
    }

    match &summary.output {
        Some(path) => {
            let key_count = report.key_count();
            let file_count = report.files.len();
            let _ = writeln!(
                out,
                "{} {}",
                SUCCESS_MARK.green(),
                format!(
                    "Created {} ({} {} in {} {})",
                    path.display(),
                    key_count,
                    if key_count == 1 { "key" } else { "keys" },
                    file_count,
                    if file_count == 1 { "file" } else { "files" }
                )
                .green()
            );
        }
        None if report.is_empty() => {
            let _ = writeln!(
                err,
                "{} {}",
                SUCCESS_MARK.green(),
                "No changed translation keys found".green()
            );
        }
        None => {
            let _ = writeln!(out, "{}", report.render());
        }
    }
}

fn print_diagnostics<E: Write>(summary: &ReportSummary, err: &mut E) {
    let analysis = &summary.analysis;

    let source = match &summary.config_path {
        Some(path) => format!(" (from {})", path.display()),
        None => String::new(),
    };
    let _ = writeln!(
        err,
        "{} locale file {}{}",
        "info:".bold().cyan(),
        summary.locale_file,
        source
    );
    let _ = writeln!(
        err,
        "{} scanned {} file {}, {} not matching {}",
        "info:".bold().cyan(),
        analysis.fragment_count,
        if analysis.fragment_count == 1 {
            "block"
        } else {
            "blocks"
        },
        analysis.dropped_fragment_count,
        summary.locale_file
    );

    for skipped in &analysis.skipped {
        let label = match skipped.reason {
            SkipReason::Unchanged => "skipped:".dimmed(),
            SkipReason::UnparseableAdded | SkipReason::UnparseableRemoved => {
                "warning:".bold().yellow()
            }
        };
        let _ = writeln!(
            err,
            "{} {} {} ({})",
            label, skipped.path, skipped.key, skipped.reason
        );
    }
}

fn print_unparseable_warning<E: Write>(analysis: &Analysis, err: &mut E) {
    let count = analysis
        .skipped
        .iter()
        .filter(|skipped| skipped.reason != SkipReason::Unchanged)
        .count();

    if count > 0 {
        let _ = writeln!(
            err,
            "{} {} key(s) could not be parsed (use {} for details)",
            "warning:".bold().yellow(),
            count,
            "-v".cyan()
        );
    }
}

fn print_init<O: Write, E: Write>(summary: &InitSummary, out: &mut O, err: &mut E) {
    if summary.created {
        let _ = writeln!(
            out,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    } else {
        let _ = writeln!(err, "Error: {} already exists", CONFIG_FILE_NAME);
    }
}
