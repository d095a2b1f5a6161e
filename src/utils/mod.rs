// sportshub-service/src/utils/mod.rs
use chrono::{SecondsFormat, Utc};
use lazy_static::lazy_static;
use regex::Regex;
use serde_json::Value;

lazy_static! {
    // Permissive on purpose: anything@anything.anything
    static ref EMAIL_RE: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

// Returns the trimmed value when present and at least `min` characters long.
pub fn trimmed_min(field: &Option<String>, min: usize) -> Option<String> {
    let trimmed = field.as_deref()?.trim();
    if trimmed.chars().count() >= min {
        Some(trimmed.to_string())
    } else {
        None
    }
}

// Outcome of coercing a number-or-numeric-string form field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumField {
    Missing,
    Invalid,
    Value(f64),
}

// Forms submit numeric fields as JSON numbers or as strings; absent and
// empty-string both count as missing, anything unparseable is invalid.
pub fn num_field(field: &Option<Value>) -> NumField {
    match field {
        None | Some(Value::Null) => NumField::Missing,
        Some(Value::Number(n)) => match n.as_f64() {
            Some(v) => NumField::Value(v),
            None => NumField::Invalid,
        },
        Some(Value::String(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return NumField::Missing;
            }
            match trimmed.parse::<f64>() {
                Ok(v) => NumField::Value(v),
                Err(_) => NumField::Invalid,
            }
        }
        Some(_) => NumField::Invalid,
    }
}

// Stringify a number-or-string field for a spreadsheet cell.
pub fn text_field(field: &Option<Value>) -> Option<String> {
    match field {
        Some(Value::String(s)) => Some(s.clone()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    }
}

// ISO 8601 timestamp matching the JavaScript `toISOString` shape.
pub fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

// Today's date as YYYY-MM-DD.
pub fn today() -> String {
    Utc::now().format("%Y-%m-%d").to_string()
}
