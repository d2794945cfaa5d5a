//! Value objects for the search-and-pagination query engine.
//!
//! These wrappers turn raw, untrusted query-string input into values the
//! repository layer can trust: a sanitized search term and a positive page
//! number. Construction never fails; malformed input degrades to the
//! "no filter" / "first page" defaults instead of erroring.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Characters stripped from search input before it reaches the `LIKE`
/// pattern. Keeps quotes and wildcards out of the match operator.
const STRIPPED_CHARS: [char; 5] = ['\'', '"', ';', '\\', '%'];

/// Sanitized free-text search term used for the server-side prefix match.
///
/// A term that is empty after trimming and stripping does not exist: the
/// roster is listed unfiltered. An input like `"%%%"` therefore means
/// "no filter", not "match nothing".
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct SearchTerm(String);

impl SearchTerm {
    /// Trims and strips the raw input, returning `None` when nothing
    /// searchable remains.
    pub fn new<S: AsRef<str>>(raw: S) -> Option<Self> {
        let sanitized: String = raw
            .as_ref()
            .trim()
            .chars()
            .filter(|c| !STRIPPED_CHARS.contains(c))
            .collect();

        if sanitized.is_empty() {
            None
        } else {
            Some(Self(sanitized))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for SearchTerm {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One-based page number parsed leniently from a raw query-string value.
///
/// Absent, non-numeric, zero, or negative input all coerce to page 1.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct PageNumber(usize);

impl PageNumber {
    pub fn parse(raw: Option<&str>) -> Self {
        let page = raw
            .and_then(|s| s.trim().parse::<i64>().ok())
            .filter(|n| *n > 0)
            .unwrap_or(1);

        Self(page as usize)
    }

    pub const fn get(self) -> usize {
        self.0
    }
}

impl Default for PageNumber {
    fn default() -> Self {
        Self(1)
    }
}

impl Display for PageNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Formats a stored phone number as `(AAA) PPP-LLLL`.
///
/// The integer is rendered left-padded with zeros to ten digits. Values with
/// more than ten digits keep the trailing ten; the leading overflow is
/// dropped silently.
pub fn format_phone_number(phone_number: i64) -> String {
    let digits = format!("{phone_number:010}");
    let digits = &digits[digits.len() - 10..];

    format!("({}) {}-{}", &digits[..3], &digits[3..6], &digits[6..])
}
