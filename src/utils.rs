// src/utils.rs
use serde_json::Value;

/// Trimmed string value of `key`; missing or non-string values read as empty
pub fn trimmed_field(raw: &Value, key: &str) -> String {
    raw.get(key)
        .and_then(Value::as_str)
        .map(|value| value.trim().to_string())
        .unwrap_or_default()
}

/// First non-empty trimmed value among `keys`
pub fn first_trimmed_field(raw: &Value, keys: &[&str]) -> String {
    keys.iter()
        .map(|key| trimmed_field(raw, key))
        .find(|value| !value.is_empty())
        .unwrap_or_default()
}

pub fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Caller-facing page numbers start at 1
pub fn clamp_page(page: Option<i64>) -> u32 {
    page.unwrap_or(1).clamp(1, u32::MAX as i64) as u32
}

/// Missing limit means `default`; anything else is forced into `1..=max`
pub fn clamp_limit(limit: Option<i64>, default: u32, max: u32) -> u32 {
    match limit {
        Some(limit) => limit.clamp(1, max as i64) as u32,
        None => default.min(max),
    }
}
