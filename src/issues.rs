//! Issue types for scan results.
//!
//! Each issue is self-contained with everything the reporter needs to
//! display it: location, message, severity, and an optional hint.

use enum_dispatch::enum_dispatch;

use crate::core::SourceContext;

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Rule identifier for each issue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    HardcodedHan,
    ReadError,
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::HardcodedHan => write!(f, "hardcoded-han"),
            Rule::ReadError => write!(f, "read-error"),
        }
    }
}

/// Where an issue should be reported.
pub enum ReportLocation<'a> {
    Source(&'a SourceContext),
    File { path: &'a str },
}

#[enum_dispatch]
pub trait IssueInfo {
    fn severity(&self) -> Severity;
    fn rule(&self) -> Rule;
    /// The quoted part of the report line.
    fn message(&self) -> String;
    fn location(&self) -> ReportLocation<'_>;
    fn hint(&self) -> Option<String>;
}

/// Hardcoded Chinese text in a string literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HardcodedHanIssue {
    pub context: SourceContext,
    /// The Chinese run.
    pub text: String,
    /// The resource reference that would replace it.
    pub suggestion: String,
}

impl IssueInfo for HardcodedHanIssue {
    fn severity(&self) -> Severity {
        Severity::Error
    }

    fn rule(&self) -> Rule {
        Rule::HardcodedHan
    }

    fn message(&self) -> String {
        self.text.clone()
    }

    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Source(&self.context)
    }

    fn hint(&self) -> Option<String> {
        Some(format!("replace with {}", self.suggestion))
    }
}

/// A scanned file that could not be read as UTF-8 text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadErrorIssue {
    pub file_path: String,
    pub error: String,
}

impl IssueInfo for ReadErrorIssue {
    fn severity(&self) -> Severity {
        Severity::Error
    }

    fn rule(&self) -> Rule {
        Rule::ReadError
    }

    fn message(&self) -> String {
        self.error.clone()
    }

    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::File {
            path: &self.file_path,
        }
    }

    fn hint(&self) -> Option<String> {
        None
    }
}

#[enum_dispatch(IssueInfo)]
#[derive(Debug, Clone)]
pub enum Issue {
    HardcodedHan(HardcodedHanIssue),
    ReadError(ReadErrorIssue),
}
