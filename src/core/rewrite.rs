//! Rewrite planning.
//!
//! Turns per-file literal matches into concrete edits and resource entries.
//! A literal that is entirely Chinese collapses to a bare resource reference;
//! a mixed literal becomes a template literal with one `${...}` interpolation
//! per Chinese run. Edits are applied by byte span, back to front, so offsets
//! stay valid.

use super::extract::LiteralMatch;
use super::keygen::{KeyGenerator, prefix_for_path};
use super::lexer::QuoteKind;
use super::resource::ResourceEntry;
use super::source::SourceContext;
use std::path::Path;

/// Input to planning: one scanned file with its matches.
#[derive(Debug)]
pub struct FileReport {
    pub path: String,
    pub content: String,
    pub matches: Vec<LiteralMatch>,
}

/// One Chinese run with its assigned resource key, for reporting.
#[derive(Debug, Clone)]
pub struct Finding {
    pub context: SourceContext,
    pub text: String,
    pub key: String,
}

/// Planned rewrite of one file.
#[derive(Debug)]
pub struct FilePlan {
    pub path: String,
    pub rewritten: String,
    /// Number of literals replaced.
    pub replaced_count: usize,
}

/// The complete plan for a run: file edits, resource entries, findings.
#[derive(Debug, Default)]
pub struct RewritePlan {
    /// Files with at least one replacement, in scan order.
    pub files: Vec<FilePlan>,
    /// Unsorted resource entries; `ResourceTable::new` sorts them.
    pub entries: Vec<ResourceEntry>,
    /// Every run found, in scan order, with its key.
    pub findings: Vec<Finding>,
}

/// Build the rewrite plan for all scanned files.
///
/// Key assignment is sequential over files in their given order, which keeps
/// keys and numeric collision suffixes deterministic.
pub fn build_plan(reports: &[FileReport], namespace: &str) -> RewritePlan {
    let mut keygen = KeyGenerator::new();
    let mut plan = RewritePlan::default();

    for report in reports {
        if report.matches.is_empty() {
            continue;
        }

        let prefix = prefix_for_path(Path::new(&report.path));
        let mut edits: Vec<(std::ops::Range<usize>, String)> = Vec::new();

        for m in &report.matches {
            let keys: Vec<String> = m
                .runs
                .iter()
                .map(|run| {
                    let key = keygen.key_for(&prefix, &run.text);
                    plan.findings.push(Finding {
                        context: run.context.clone(),
                        text: run.text.clone(),
                        key: key.clone(),
                    });
                    if !plan.entries.iter().any(|e| e.name == key) {
                        plan.entries.push(ResourceEntry::new(&key, &run.text));
                    }
                    key
                })
                .collect();

            let replacement = if m.is_full() {
                reference(namespace, &keys[0])
            } else {
                interpolated_literal(m, &keys, namespace)
            };
            edits.push((m.span.clone(), replacement));
        }

        let replaced_count = edits.len();
        let mut rewritten = report.content.clone();
        for (span, replacement) in edits.into_iter().rev() {
            rewritten.replace_range(span, &replacement);
        }

        plan.files.push(FilePlan {
            path: report.path.clone(),
            rewritten,
            replaced_count,
        });
    }

    plan
}

/// A bare resource reference, replacing a whole literal.
pub fn reference(namespace: &str, key: &str) -> String {
    format!("$r('{}.{}')", namespace, key)
}

/// Rebuild a mixed literal as a template literal with each Chinese run
/// replaced by an interpolated resource reference.
fn interpolated_literal(m: &LiteralMatch, keys: &[String], namespace: &str) -> String {
    let mut out = String::from("`");
    let mut pos = 0;
    for (run, key) in m.runs.iter().zip(keys) {
        push_template_text(&mut out, &m.body[pos..run.range.start], m.quote);
        out.push_str("${");
        out.push_str(&reference(namespace, key));
        out.push('}');
        pos = run.range.end;
    }
    push_template_text(&mut out, &m.body[pos..], m.quote);
    out.push('`');
    out
}

/// Append literal text to a template body. Text that came from a single- or
/// double-quoted literal needs backticks and `${` escaped to stay literal.
fn push_template_text(out: &mut String, text: &str, original_quote: QuoteKind) {
    if original_quote == QuoteKind::Backtick {
        out.push_str(text);
    } else {
        out.push_str(&text.replace('`', "\\`").replace("${", "\\${"));
    }
}
