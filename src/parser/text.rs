use std::sync::LazyLock;

use regex::Regex;
use scraper::ElementRef;

static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\s\u{a0}]+").unwrap());
static DIGIT_RUN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").unwrap());
static YEAR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b[12]\d{3}\b").unwrap());

/// Collapse a fragment's visible text into one whitespace-normalized line.
/// Runs of whitespace (non-breaking spaces included) become a single ASCII
/// space; an absent fragment normalizes to the empty string.
pub fn normalize(fragment: Option<ElementRef<'_>>) -> String {
    let Some(el) = fragment else {
        return String::new();
    };
    let raw: String = el.text().collect();
    WHITESPACE_RE.replace_all(&raw, " ").trim().to_string()
}

/// Strip the literal "Year: " label some result layouts prefix the year with.
pub fn strip_year_prefix(text: &str) -> &str {
    text.strip_prefix("Year: ").unwrap_or(text)
}

/// First contiguous digit run in already-normalized text.
pub fn first_digit_run(text: &str) -> Option<&str> {
    DIGIT_RUN_RE.find(text).map(|m| m.as_str())
}

/// First standalone four-digit group that reads as a publication year.
pub fn find_year(text: &str) -> Option<&str> {
    YEAR_RE.find(text).map(|m| m.as_str())
}
