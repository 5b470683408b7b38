//! Extract command - rewrite sources and generate the resource table.
//!
//! Dry-run by default: prints the files that would change and the resource
//! entries that would be generated. Use `--apply` to rewrite files in place
//! and write the resource table.

use std::fs;

use anyhow::{Context, Result};
use colored::Colorize;

use super::super::{args::ExtractCommand, exit_status::ExitStatus, report};
use super::scan_options;
use crate::core::{ResourceTable, ScanContext, build_plan};

pub fn extract(cmd: ExtractCommand) -> Result<ExitStatus> {
    let verbose = cmd.common.verbose;
    let apply = cmd.apply;
    let ctx = ScanContext::new(&scan_options(&cmd.common))?;

    let plan = build_plan(&ctx.reports, &ctx.config.resource_namespace);

    if plan.files.is_empty() {
        report::print_success(ctx.files.len());
        report::print_skipped_warning(ctx.skipped_count, verbose);
        return Ok(ExitStatus::Success);
    }

    let total_literals: usize = plan.files.iter().map(|f| f.replaced_count).sum();
    let file_count = plan.files.len();
    let table = ResourceTable::new(plan.entries);
    let resource_path = ctx.resource_path();

    if apply {
        for file in &plan.files {
            fs::write(&file.path, &file.rewritten)
                .with_context(|| format!("Failed to write file: {}", file.path))?;
        }
        table.save(&resource_path)?;

        println!(
            "{} {} literal(s) in {} file(s).",
            "Rewrote".green().bold(),
            total_literals,
            file_count
        );
        println!(
            "{} {} string resource(s) to {}",
            "Wrote".green().bold(),
            table.len(),
            resource_path.display()
        );
        report::print_skipped_warning(ctx.skipped_count, verbose);
        Ok(ExitStatus::Success)
    } else {
        for file in &plan.files {
            println!(
                "  {} {}: {} replacement(s)",
                "-->".blue(),
                file.path,
                file.replaced_count
            );
        }
        println!();
        println!(
            "{} {} literal(s) in {} file(s).",
            "Would rewrite".yellow().bold(),
            total_literals,
            file_count
        );
        println!(
            "{} {} string resource(s) to {}",
            "Would write".yellow().bold(),
            table.len(),
            resource_path.display()
        );
        println!("Run with {} to rewrite files.", "--apply".cyan());
        report::print_skipped_warning(ctx.skipped_count, verbose);
        // Pending work is signaled like a failed lint so CI can gate on it
        Ok(ExitStatus::Failure)
    }
}
