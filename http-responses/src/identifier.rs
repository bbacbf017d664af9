//! Reason phrase to identifier conversion.
//!
//! `"Internal Server Error"` becomes `"InternalServerError"`, `"I'm a Teapot"`
//! becomes `"ImATeapot"`. Each space-separated word gets its first character
//! uppercased and keeps the rest as written, so acronyms such as `"OK"` or
//! `"URI"` survive untouched.

use std::sync::OnceLock;

use regex::Regex;

const WORD_SEPARATOR: char = ' ';

/// Everything that may not appear in an identifier. Spelled out rather than
/// `(?i)` so Unicode case folding cannot let `ſ` or the Kelvin sign through.
const NON_IDENTIFIER_PATTERN: &str = r"[^_0-9A-Za-z]";

static NON_IDENTIFIER_REGEX: OnceLock<Regex> = OnceLock::new();

pub(crate) fn get_non_identifier_regex() -> &'static Regex {
    NON_IDENTIFIER_REGEX
        .get_or_init(|| Regex::new(NON_IDENTIFIER_PATTERN).expect("valid regex pattern"))
}

/// Derive the identifier for a reason phrase.
///
/// Words are split on single spaces; empty words (from doubled spaces) add
/// nothing. Stripping happens after concatenation, so punctuation inside a word
/// simply disappears: `"Non-Authoritative Information"` gives
/// `"NonAuthoritativeInformation"`.
pub fn to_identifier(phrase: &str) -> String {
    let joined: String = phrase
        .split(WORD_SEPARATOR)
        .map(capitalize_first)
        .collect();

    get_non_identifier_regex()
        .replace_all(&joined, "")
        .into_owned()
}

fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
