//! Per-file extraction of Chinese text from string literals.

use std::{ops::Range, sync::LazyLock};

use regex::Regex;

use super::lexer::{self, QuoteKind};
use super::source::{self, SourceContext};
use crate::utils::contains_han;

/// Matches runs of CJK Unified Ideographs (U+4E00..=U+9FA5).
static HAN_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\u{4e00}-\u{9fa5}]+").expect("valid regex"));

/// One Chinese run inside a literal body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HanRun {
    /// Byte range relative to the literal body.
    pub range: Range<usize>,
    pub text: String,
    /// Location of the run itself, for diagnostics.
    pub context: SourceContext,
}

/// A string literal containing at least one Chinese run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiteralMatch {
    pub quote: QuoteKind,
    /// Byte span of the whole literal in the file, quotes included.
    pub span: Range<usize>,
    /// The literal body, between the quotes.
    pub body: String,
    /// Chinese runs in body order. Never empty.
    pub runs: Vec<HanRun>,
}

impl LiteralMatch {
    /// True when the body is exactly one Chinese run and nothing else.
    pub fn is_full(&self) -> bool {
        self.runs.len() == 1 && self.runs[0].range == (0..self.body.len()) && !self.body.is_empty()
    }
}

/// Extract every Chinese-bearing string literal from `content`.
///
/// Runs listed in `ignore_texts` are dropped; a literal whose runs are all
/// ignored is not reported.
pub fn extract(file_path: &str, content: &str, ignore_texts: &[String]) -> Vec<LiteralMatch> {
    let mut out = Vec::new();

    for lit in lexer::literals(content) {
        let body = &content[lit.body.clone()];
        if !contains_han(body) {
            continue;
        }
        let runs: Vec<HanRun> = HAN_RUN
            .find_iter(body)
            .filter(|m| !ignore_texts.iter().any(|t| t == m.as_str()))
            .map(|m| {
                // the opening quote is one byte, so the body starts at span+1
                let offset = lit.span.start + 1 + m.start();
                HanRun {
                    range: m.range(),
                    text: m.as_str().to_string(),
                    context: source::context_at(file_path, content, offset),
                }
            })
            .collect();

        if runs.is_empty() {
            continue;
        }

        out.push(LiteralMatch {
            quote: lit.quote,
            span: lit.span,
            body: body.to_string(),
            runs,
        });
    }

    out
}
