//! Report formatting and printing utilities.
//!
//! Separate from core logic to allow regkit to be used as a library.
//! Progress and summaries go to stdout; warnings and errors go to stderr.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::commands::{BuildSummary, CommandResult, CommandSummary, InitSummary, InspectSummary};
use crate::core::{BuildReport, Category, IndexOutcome, IndexStats};
use crate::utils::plural;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

pub fn print(result: &CommandResult, verbose: bool) {
    print_to(
        result,
        verbose,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    );
}

/// Print a command result to custom writers.
///
/// Useful for testing or redirecting output.
pub fn print_to<O: Write, E: Write>(
    result: &CommandResult,
    verbose: bool,
    out: &mut O,
    err: &mut E,
) {
    match &result.summary {
        CommandSummary::Build(summary) => print_build(summary, verbose, out, err),
        CommandSummary::Inspect(summary) => print_inspect(summary, out, err),
        CommandSummary::Init(summary) => print_init(summary, out, err),
    }
}

// ============================================================
// build
// ============================================================

fn print_build<O: Write, E: Write>(summary: &BuildSummary, verbose: bool, out: &mut O, err: &mut E) {
    let report = &summary.report;

    if report.skipped_count > 0 {
        let _ = writeln!(
            err,
            "{} {} path(s) skipped due to access errors",
            "warning:".bold().yellow(),
            report.skipped_count
        );
    }

    if report.discovered.is_empty() {
        let _ = writeln!(
            err,
            "{} No components found under {}; registry left unchanged",
            "warning:".bold().yellow(),
            summary.source_root.display()
        );
        return;
    }

    if verbose {
        print_discovered(report, out);
        for entry in &report.entries {
            let _ = writeln!(
                out,
                "{} {}",
                SUCCESS_MARK.green(),
                format!("Generated registry for {}", entry.name).green()
            );
        }
    }

    for failure in &report.failures {
        let _ = writeln!(
            err,
            "{}: {} ({}): {}",
            "error".bold().red(),
            failure.name,
            failure.relative_path,
            failure.error
        );
    }

    print_reconciliation(report, verbose, out, err);
    print_index(&report.index, out, err);
    print_totals(report, out);
}

fn print_discovered<O: Write>(report: &BuildReport, out: &mut O) {
    let count = report.attempted();
    let _ = writeln!(
        out,
        "Discovered {} {}:",
        count,
        plural(count, "component", "components")
    );

    let name_width = report
        .discovered
        .iter()
        .map(|s| UnicodeWidthStr::width(s.name.as_str()))
        .max()
        .unwrap_or(0);

    for source in &report.discovered {
        let padding = name_width - UnicodeWidthStr::width(source.name.as_str());
        let _ = writeln!(
            out,
            "  {} {}{:padding$}  {:<6}  {}",
            "\u{2022}",
            source.name,
            "",
            source.category.dir_name(),
            source.relative_path.dimmed(),
            padding = padding
        );
    }
    let _ = writeln!(out);
}

fn print_reconciliation<O: Write, E: Write>(
    report: &BuildReport,
    verbose: bool,
    out: &mut O,
    err: &mut E,
) {
    if let Some(error) = &report.reconcile_error {
        let _ = writeln!(
            err,
            "{} Could not list existing registry units, skipping cleanup: {}",
            "warning:".bold().yellow(),
            error
        );
        return;
    }

    if report.stale_units.is_empty() {
        return;
    }

    if report.dry_run {
        let count = report.stale_units.len();
        let _ = writeln!(
            out,
            "Would remove {} obsolete {}: {}",
            count,
            plural(count, "unit", "units"),
            report.stale_units.join(", ")
        );
        return;
    }

    for removal in &report.removals {
        match &removal.result {
            Ok(()) if verbose => {
                let _ = writeln!(out, "Removed obsolete component: {}", removal.name);
            }
            Ok(()) => {}
            Err(error) => {
                let _ = writeln!(
                    err,
                    "{} Could not remove obsolete unit {}: {}",
                    "warning:".bold().yellow(),
                    removal.path.display(),
                    error
                );
            }
        }
    }

    let removed = report.removals.iter().filter(|r| r.is_ok()).count();
    if removed > 0 {
        let _ = writeln!(
            out,
            "{} {}",
            SUCCESS_MARK.green(),
            format!(
                "Cleaned up {} obsolete {}",
                removed,
                plural(removed, "component", "components")
            )
            .green()
        );
    }
}

fn print_index<O: Write, E: Write>(index: &IndexOutcome, out: &mut O, err: &mut E) {
    match index {
        IndexOutcome::Written { path, stats } => {
            let _ = writeln!(
                out,
                "{} {}",
                SUCCESS_MARK.green(),
                format!(
                    "Wrote {} with {} {}",
                    path.display(),
                    stats.total_components,
                    plural(stats.total_components, "component", "components")
                )
                .green()
            );
            print_stats(stats, out);
        }
        IndexOutcome::Planned { path, stats } => {
            let _ = writeln!(
                out,
                "Would write {} with {} {}",
                path.display(),
                stats.total_components,
                plural(stats.total_components, "component", "components")
            );
            print_stats(stats, out);
        }
        IndexOutcome::Skipped => {}
        IndexOutcome::Failed(error) => {
            let _ = writeln!(err, "{}: {}", "error".bold().red(), error);
        }
    }
}

fn print_stats<O: Write>(stats: &IndexStats, out: &mut O) {
    let _ = writeln!(
        out,
        "  Stats: {} ui, {} custom, {} with variants, {} with sizes",
        stats.ui_components,
        stats.custom_components,
        stats.components_with_variants,
        stats.components_with_sizes
    );
}

fn print_totals<O: Write>(report: &BuildReport, out: &mut O) {
    let breakdown = Category::ALL
        .iter()
        .map(|&c| {
            format!(
                "{} {}/{}",
                c.dir_name(),
                report.succeeded_in(c),
                report.attempted_in(c)
            )
        })
        .collect::<Vec<_>>()
        .join(", ");

    let verb = if report.dry_run { "Would generate" } else { "Generated" };
    let line = format!(
        "{} {}/{} components ({})",
        verb,
        report.succeeded(),
        report.attempted(),
        breakdown
    );

    let failed = report.attempted() - report.succeeded();
    if failed == 0 {
        let _ = writeln!(out, "\n{} {}", SUCCESS_MARK.green(), line.green());
    } else {
        let _ = writeln!(out, "\n{} {}", FAILURE_MARK.red(), line);
        let _ = writeln!(
            out,
            "{} {} {} failed to generate",
            "warning:".bold().yellow(),
            failed,
            plural(failed, "component", "components")
        );
    }
}

// ============================================================
// inspect / init
// ============================================================

fn print_inspect<O: Write, E: Write>(summary: &InspectSummary, out: &mut O, err: &mut E) {
    match serde_json::to_string_pretty(&summary.metadata) {
        Ok(json) => {
            let _ = writeln!(out, "{}", json);
        }
        Err(error) => {
            let _ = writeln!(err, "{}: {}: {}", "error".bold().red(), summary.name, error);
        }
    }
}

fn print_init<O: Write, E: Write>(summary: &InitSummary, out: &mut O, err: &mut E) {
    match &summary.error {
        Some(error) => {
            let _ = writeln!(err, "{}: {}", "error".bold().red(), error);
        }
        None => {
            let _ = writeln!(
                out,
                "{} {}",
                SUCCESS_MARK.green(),
                format!("Created {}", summary.path.display()).green()
            );
        }
    }
}
