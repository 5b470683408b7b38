//! Common utility functions shared across the codebase.

/// Checks if a character falls in the CJK Unified Ideographs block
/// (U+4E00..=U+9FA5), the range used for all Chinese-text detection.
///
/// # Examples
///
/// ```
/// use hanres::utils::is_han;
///
/// assert!(is_han('好'));
/// assert!(is_han('一'));
/// assert!(!is_han('a'));
/// assert!(!is_han('。'));
/// ```
pub fn is_han(c: char) -> bool {
    ('\u{4e00}'..='\u{9fa5}').contains(&c)
}

/// Checks if the text contains at least one Chinese character.
///
/// Returns false for empty strings, ASCII, and non-Han CJK punctuation.
///
/// # Examples
///
/// ```
/// use hanres::utils::contains_han;
///
/// assert!(contains_han("你好"));
/// assert!(contains_han("Hello 世界"));
/// assert!(!contains_han("Hello"));
/// assert!(!contains_han("123"));
/// assert!(!contains_han(""));
/// ```
pub fn contains_han(text: &str) -> bool {
    text.chars().any(is_han)
}
