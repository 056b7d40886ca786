//! Small string helpers for titles and link targets.

use awb_domain::lang::Project;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use std::net::IpAddr;

/// Characters left literal by [`wiki_encode`].
const WIKI_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'\'')
    .remove(b'!')
    .remove(b'*')
    .remove(b'(')
    .remove(b')');

/// Uppercase the first character, unless the project keeps first letters
/// as typed.
pub fn turn_first_to_upper(input: &str, project: Project) -> String {
    if project.first_letter_case_sensitive() {
        return input.to_string();
    }
    map_first(input, |c| c.to_uppercase().collect())
}

pub fn turn_first_to_lower(input: &str) -> String {
    map_first(input, |c| c.to_lowercase().collect())
}

fn map_first(input: &str, f: impl FnOnce(char) -> String) -> String {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) => {
            let mut out = f(first);
            out.push_str(chars.as_str());
            out
        }
        None => String::new(),
    }
}

/// Turn a pasted link target such as `[[Foo_bar]]` into a plain title.
pub fn remove_syntax(text: &str) -> String {
    text.replace('_', " ")
        .trim()
        .trim_matches(['[', ']'])
        .to_string()
}

/// URL-encode a title, using underscores for spaces as MediaWiki does.
/// Escapes use lowercase hex (`%c3%a9`).
pub fn wiki_encode(title: &str) -> String {
    let underscored = title.replace(' ', "_");
    let mut out = String::with_capacity(underscored.len());
    for chunk in utf8_percent_encode(&underscored, WIKI_ENCODE_SET) {
        if chunk.starts_with('%') {
            out.push_str(&chunk.to_ascii_lowercase());
        } else {
            out.push_str(chunk);
        }
    }
    out
}

/// Whether `s` is a literal IPv4 or IPv6 address, as in the user pages of
/// anonymous editors (`User talk:192.0.2.7`).
pub fn is_ip(s: &str) -> bool {
    s.parse::<IpAddr>().is_ok()
}

/// The slice of `source` from the first `start` up to the first `end`,
/// including `start` but not `end`. Empty when either is missing or `end`
/// comes first.
pub fn string_between<'a>(source: &'a str, start: &str, end: &str) -> &'a str {
    match (source.find(start), source.find(end)) {
        (Some(from), Some(to)) if from <= to => &source[from..to],
        _ => "",
    }
}

/// Regex fragment matching `input` with either case of its first letter,
/// e.g. `"Category"` -> `"[Cc]ategory"`.
pub fn case_insensitive(input: &str) -> String {
    match input.chars().next() {
        Some(first) if first.is_alphabetic() => {
            let trimmed = input.trim();
            let mut chars = trimmed.chars();
            let Some(first) = chars.next() else {
                return String::new();
            };
            format!("[{}{}]{}", upper(first), lower(first), chars.as_str())
        }
        _ => input.to_string(),
    }
}

/// Regex fragment matching `input` in any letter case, e.g. `"Cat"` ->
/// `"[Cc][Aa][Tt]"`.
pub fn all_case_insensitive(input: &str) -> String {
    if input.is_empty() {
        return String::new();
    }
    input
        .trim()
        .chars()
        .map(|c| {
            if c.is_alphabetic() {
                format!("[{}{}]", upper(c), lower(c))
            } else {
                c.to_string()
            }
        })
        .collect()
}

fn upper(c: char) -> String {
    c.to_uppercase().collect()
}

fn lower(c: char) -> String {
    c.to_lowercase().collect()
}
