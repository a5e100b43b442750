use crate::utils::error::PhoneError;
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// A phone number in canonical `+7(XXX)XXX-XX-XX` form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Normalizes a digits-only string.
    ///
    /// Ten digits are treated as a domestic number and get a `7` prepended.
    /// Eleven digits must start with the country/trunk marker `7` or `8`; the
    /// marker itself is dropped and always rendered as `+7`. Anything else
    /// returns `None`.
    pub fn from_digits(digits: &str) -> Option<Self> {
        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }

        let digits = match digits.len() {
            10 => format!("7{}", digits),
            11 => digits.to_string(),
            _ => return None,
        };

        if !matches!(digits.as_bytes()[0], b'7' | b'8') {
            return None;
        }

        Some(Self(format!(
            "+7({}){}-{}-{}",
            &digits[1..4],
            &digits[4..7],
            &digits[7..9],
            &digits[9..11]
        )))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PhoneNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<&str> for PhoneNumber {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Unique phone numbers in first-occurrence order.
pub type ResultSet = Vec<PhoneNumber>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    File(PathBuf),
    Stdin,
}

impl InputSource {
    pub fn label(&self) -> String {
        match self {
            InputSource::File(path) => path.display().to_string(),
            InputSource::Stdin => "<stdin>".to_string(),
        }
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

#[derive(Debug)]
pub struct InputOutcome {
    pub source: InputSource,
    pub result: Result<ResultSet, PhoneError>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InputFailure {
    pub input: String,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Aggregation {
    pub phones: ResultSet,
    pub failures: Vec<InputFailure>,
}

/// Which command produced a run. Only affects console wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Files,
    File,
    Text,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    Console,
    File { path: PathBuf, saved: bool },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub mode: Mode,
    pub phones: ResultSet,
    pub failures: Vec<InputFailure>,
    pub delivery: Delivery,
}
