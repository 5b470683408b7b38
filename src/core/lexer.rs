//! Single-pass literal scanner.
//!
//! Walks source text once, skipping line and block comments, and collects
//! quoted string literals (single, double, backtick) with their byte spans.
//! Comment markers inside a literal do not end the comment scan prematurely,
//! and literals inside comments are never reported.

use std::ops::Range;

/// The quote character a literal was written with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteKind {
    Single,
    Double,
    Backtick,
}

impl QuoteKind {
    pub fn char(self) -> char {
        match self {
            QuoteKind::Single => '\'',
            QuoteKind::Double => '"',
            QuoteKind::Backtick => '`',
        }
    }

    fn from_char(c: char) -> Option<Self> {
        match c {
            '\'' => Some(QuoteKind::Single),
            '"' => Some(QuoteKind::Double),
            '`' => Some(QuoteKind::Backtick),
            _ => None,
        }
    }
}

/// A quoted string literal found in source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Literal {
    pub quote: QuoteKind,
    /// Byte span of the whole literal, quotes included.
    pub span: Range<usize>,
    /// Byte span of the body between the quotes.
    pub body: Range<usize>,
}

/// Scan `content` and return every complete string literal outside comments.
///
/// Backslash escapes are honored inside literals. Single- and double-quoted
/// literals terminate at an unescaped newline and are dropped as malformed;
/// backtick literals may span lines. Unterminated literals and block comments
/// run to end of input and are dropped.
pub fn literals(content: &str) -> Vec<Literal> {
    let mut out = Vec::new();
    let mut chars = content.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        match c {
            '/' => match chars.peek() {
                Some((_, '/')) => {
                    chars.next();
                    for (_, c) in chars.by_ref() {
                        if c == '\n' {
                            break;
                        }
                    }
                }
                Some((_, '*')) => {
                    chars.next();
                    let mut prev_star = false;
                    for (_, c) in chars.by_ref() {
                        if prev_star && c == '/' {
                            break;
                        }
                        prev_star = c == '*';
                    }
                }
                _ => {}
            },
            _ => {
                let Some(quote) = QuoteKind::from_char(c) else {
                    continue;
                };
                let body_start = i + c.len_utf8();
                let mut closed = None;
                while let Some((j, c)) = chars.next() {
                    if c == '\\' {
                        chars.next();
                        continue;
                    }
                    if c == quote.char() {
                        closed = Some(j);
                        break;
                    }
                    if c == '\n' && quote != QuoteKind::Backtick {
                        break;
                    }
                }
                if let Some(end) = closed {
                    // quote chars are ASCII, one byte each
                    out.push(Literal {
                        quote,
                        span: i..end + 1,
                        body: body_start..end,
                    });
                }
            }
        }
    }

    out
}
