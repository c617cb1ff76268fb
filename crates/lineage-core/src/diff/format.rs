//! Display rendering for change values.

use serde_json::Value;

use super::model::ValueKind;
use crate::model::date::parse_calendar_date;

/// Calendar format used in change cards, e.g. "May 15, 2025"
pub const DISPLAY_DATE_FORMAT: &str = "%B %-d, %Y";

/// Render a stored date; text that is not a date is shown as written.
pub fn format_date(raw: &str) -> String {
    match parse_calendar_date(raw) {
        Some(date) => date.format(DISPLAY_DATE_FORMAT).to_string(),
        None => raw.trim().to_string(),
    }
}

pub fn format_flag(flag: bool) -> String {
    let word = if flag { "Yes" } else { "No" };
    word.to_string()
}

/// Turn a snapshot key into a label: `familyMemberName` -> "Family Member Name".
///
/// Underscores and dashes also separate words, and a run of capitals is kept
/// together (`parentID` -> "Parent ID").
pub fn humanize_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    let mut words: Vec<String> = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if c == '_' || c == '-' || c.is_whitespace() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }
        if c.is_uppercase() && !current.is_empty() {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            if prev.is_lowercase() || prev.is_ascii_digit() || (prev.is_uppercase() && next_is_lower)
            {
                words.push(std::mem::take(&mut current));
            }
        }
        current.push(c);
    }
    if !current.is_empty() {
        words.push(current);
    }

    words
        .iter()
        .map(|word| capitalize(word))
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Render an arbitrary snapshot value; `None` for null or blank values.
pub fn render_value(value: &Value) -> Option<(String, ValueKind)> {
    match value {
        Value::Null => None,
        Value::Bool(b) => Some((format_flag(*b), ValueKind::Boolean)),
        Value::Number(n) => Some((n.to_string(), ValueKind::Text)),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else if parse_calendar_date(trimmed).is_some() {
                Some((format_date(trimmed), ValueKind::Date))
            } else {
                Some((trimmed.to_string(), ValueKind::Text))
            }
        }
        Value::Array(items) if items.iter().all(Value::is_string) => {
            let parts: Vec<&str> = items
                .iter()
                .filter_map(Value::as_str)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .collect();
            (!parts.is_empty()).then(|| (parts.join(", "), ValueKind::Text))
        }
        other => Some((other.to_string(), ValueKind::Text)),
    }
}
