//! Core scan engine.
//!
//! The pipeline runs in four phases:
//! 1. enumerate candidate files ([`scanner`])
//! 2. extract Chinese-bearing string literals per file ([`lexer`], [`extract`])
//! 3. assign resource keys ([`translate`], [`keygen`])
//! 4. plan rewrites and the resource table ([`rewrite`], [`resource`])

mod context;
mod extract;
mod keygen;
mod lexer;
mod resource;
mod rewrite;
mod scanner;
mod source;
mod translate;

pub use context::{ReadFailure, ScanContext, ScanOptions};
pub use extract::{HanRun, LiteralMatch, extract};
pub use keygen::{KeyGenerator, key_prefix, prefix_for_path};
pub use lexer::{Literal, QuoteKind, literals};
pub use resource::{ResourceEntry, ResourceTable};
pub use rewrite::{FilePlan, FileReport, Finding, RewritePlan, build_plan, reference};
pub use scanner::{ScanResult, scan_files};
pub use source::{SourceContext, SourceLocation, context_at};
pub use translate::translate;
