//! Check command - report hardcoded Chinese string literals.

use anyhow::Result;

use super::super::{args::CheckCommand, exit_status::ExitStatus, report};
use super::scan_options;
use crate::{
    core::{ScanContext, ScanOptions, build_plan, reference},
    issues::{HardcodedHanIssue, Issue, ReadErrorIssue},
};

pub fn check(cmd: CheckCommand) -> Result<ExitStatus> {
    let verbose = cmd.common.verbose;
    let options: ScanOptions = scan_options(&cmd.common);
    let ctx = ScanContext::new(&options)?;

    let plan = build_plan(&ctx.reports, &ctx.config.resource_namespace);

    let mut issues: Vec<Issue> = plan
        .findings
        .into_iter()
        .map(|finding| {
            Issue::HardcodedHan(HardcodedHanIssue {
                suggestion: reference(&ctx.config.resource_namespace, &finding.key),
                context: finding.context,
                text: finding.text,
            })
        })
        .collect();

    issues.extend(ctx.read_failures.iter().map(|failure| {
        Issue::ReadError(ReadErrorIssue {
            file_path: failure.path.clone(),
            error: failure.error.clone(),
        })
    }));

    if issues.is_empty() {
        report::print_success(ctx.files.len());
    } else {
        report::report(&issues);
    }
    report::print_skipped_warning(ctx.skipped_count, verbose);

    if issues.is_empty() {
        Ok(ExitStatus::Success)
    } else {
        Ok(ExitStatus::Failure)
    }
}
