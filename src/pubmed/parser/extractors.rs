//! Field extraction helpers

use std::sync::OnceLock;

use regex::Regex;

/// Name used when an author lacks a fore name or last name
pub(crate) const UNKNOWN: &str = "Unknown";

/// Return the first email-like substring in `text`
pub(crate) fn extract_email_from_text(text: &str) -> Option<&str> {
    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    let re = EMAIL_REGEX.get_or_init(|| {
        Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}")
            .expect("Failed to compile email regex")
    });

    re.find(text).map(|m| m.as_str())
}

/// `"ForeName LastName"`, or `"Unknown"` if either part is missing
pub(crate) fn format_author_name(fore_name: Option<&str>, last_name: Option<&str>) -> String {
    match (fore_name, last_name) {
        (Some(fore), Some(last)) => format!("{} {}", fore.trim(), last.trim()),
        _ => UNKNOWN.to_string(),
    }
}
