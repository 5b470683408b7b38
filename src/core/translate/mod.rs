//! Chinese-to-identifier translation.
//!
//! Turns a Chinese string into an ASCII token usable inside a resource key.
//! Lookup order: whole-string phrase table, whole-string word table, a
//! pinyin-style heuristic for 2-3 character personal names, then greedy
//! longest-match segmentation against the word table with per-character
//! fallbacks. Characters no table knows become `u<hex>` of their code point,
//! so the result is always deterministic and identifier-safe.

mod lexicon;

use crate::utils::is_han;
use lexicon::{CHAR_MAP, PHRASE_MAP, WORD_MAP};

/// Longest phrase length tried during greedy segmentation.
const MAX_PHRASE_LEN: usize = 4;

/// Translate one character through the word table, then the char table.
fn char_token(c: char) -> Option<&'static str> {
    let mut buf = [0u8; 4];
    let s: &str = c.encode_utf8(&mut buf);
    WORD_MAP.get(s).or_else(|| CHAR_MAP.get(s)).copied()
}

fn hex_token(c: char) -> String {
    format!("u{:x}", c as u32)
}

fn char_token_or_hex(c: char) -> String {
    char_token(c)
        .map(str::to_string)
        .unwrap_or_else(|| hex_token(c))
}

/// Translate a Chinese string into an identifier-safe token.
///
/// # Examples
///
/// ```
/// use hanres::core::translate;
///
/// assert_eq!(translate("首页"), "home_page");
/// assert_eq!(translate("张伟"), "name_zhang_wei");
/// assert_eq!(translate("苹果手机"), "apple_phone");
/// ```
pub fn translate(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    if let Some(stem) = PHRASE_MAP.get(text) {
        return (*stem).to_string();
    }
    if let Some(word) = WORD_MAP.get(text) {
        return (*word).to_string();
    }

    let chars: Vec<char> = text.chars().collect();

    // Short all-Chinese strings are treated as personal names and rendered
    // character by character in pinyin form.
    if (2..=3).contains(&chars.len()) && chars.iter().copied().all(is_han) {
        let parts: Vec<String> = chars.iter().copied().map(char_token_or_hex).collect();
        return format!("name_{}", parts.join("_"));
    }

    // Greedy longest-match segmentation, phrases of length 4 down to 2.
    let mut tokens: Vec<String> = Vec::new();
    let mut i = 0;
    while i < chars.len() {
        let max_len = MAX_PHRASE_LEN.min(chars.len() - i);
        let matched = (2..=max_len).rev().find_map(|len| {
            let phrase: String = chars[i..i + len].iter().collect();
            WORD_MAP.get(phrase.as_str()).map(|word| (len, *word))
        });

        if let Some((len, word)) = matched {
            tokens.push(word.to_string());
            i += len;
            continue;
        }

        let c = chars[i];
        if is_han(c) {
            tokens.push(char_token_or_hex(c));
        } else if !c.is_whitespace() {
            tokens.push(c.to_lowercase().to_string());
        }
        i += 1;
    }

    if tokens.is_empty() {
        let parts: Vec<String> = text
            .chars()
            .map(|c| {
                if is_han(c) {
                    hex_token(c)
                } else {
                    c.to_lowercase().to_string()
                }
            })
            .collect();
        return format!("text_{}", parts.join("_"));
    }

    tokens.join("_")
}
