//! Phone number matching and normalization.
//!
//! The scanner recognizes two shapes, tried in this order at every position:
//!
//! * decorated: `+7` or `8`, then ten digits, each digit optionally followed
//!   by separator noise (whitespace, `-`, `.`, `(`, `)`, `"`);
//! * bare: an optional `7`/`8` followed by ten contiguous digits.
//!
//! Every accepted match is reduced to its digits and normalized through
//! [`PhoneNumber::from_digits`].

use crate::domain::model::{PhoneNumber, ResultSet};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

const SEPARATORS: &str = r#"[\s\-.()"]*"#;

static PHONE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    let decorated = format!(r"(?:\+7|8){sep}(?:[0-9]{sep}){{10}}", sep = SEPARATORS);
    let bare = r"[78]?[0-9]{10}";
    Regex::new(&format!("{}|{}", decorated, bare))
        .expect("Phone pattern regex is valid and should compile")
});

#[derive(Debug, Clone, Copy, Default)]
pub struct PhoneExtractor;

impl PhoneExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Returns the unique phone numbers found in `text`, in order of first
    /// appearance. The dedup set lives only for the duration of this call.
    pub fn extract(&self, text: &str) -> ResultSet {
        let mut seen = HashSet::new();
        let mut phones = Vec::new();

        let mut pos = 0;
        while let Some(m) = PHONE_PATTERN.find_at(text, pos) {
            if touches_digit_run(text, m.start(), m.end()) {
                // A real number may start inside the rejected span.
                pos = m.start()
                    + text[m.start()..]
                        .chars()
                        .next()
                        .map_or(1, char::len_utf8);
                continue;
            }
            pos = m.end();

            let digits: String = m.as_str().chars().filter(char::is_ascii_digit).collect();
            if let Some(phone) = PhoneNumber::from_digits(&digits) {
                if seen.insert(phone.clone()) {
                    phones.push(phone);
                }
            }
        }

        phones
    }
}

/// Shorthand for `PhoneExtractor::new().extract(text)`.
pub fn extract(text: &str) -> ResultSet {
    PhoneExtractor::new().extract(text)
}

// A match that is only a slice of a longer digit run is not a phone number.
fn touches_digit_run(text: &str, start: usize, end: usize) -> bool {
    let matched = &text[start..end];

    let starts_inside = matched.starts_with(|c: char| c.is_ascii_digit())
        && text[..start]
            .chars()
            .next_back()
            .is_some_and(|c| c.is_ascii_digit());

    let ends_inside = matched.ends_with(|c: char| c.is_ascii_digit())
        && text[end..]
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_digit());

    starts_inside || ends_inside
}
