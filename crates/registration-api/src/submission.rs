//! Submission field semantics: falsiness, required-field checks, email
//! format validation, and HTML-safe rendering.

use serde_json::{Map, Value};

/// A registration submission as received on the wire.
///
/// The required-field set is configuration, so the submission stays a plain
/// field map rather than a fixed struct shape.
pub type Submission = Map<String, Value>;

/// Whether a JSON value counts as absent for validation purposes.
///
/// Mirrors JavaScript truthiness for the value kinds a form can produce:
/// null, false, the empty string, and numeric zero are all falsy.
pub fn is_falsy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::Bool(b)) => !b,
        Some(Value::String(s)) => s.is_empty(),
        Some(Value::Number(n)) => n.as_f64() == Some(0.0),
        Some(Value::Array(_)) | Some(Value::Object(_)) => false,
    }
}

/// Names of required fields that are missing or falsy in the submission.
pub fn missing_fields<'a>(submission: &Submission, required: &'a [String]) -> Vec<&'a str> {
    required
        .iter()
        .filter(|name| is_falsy(submission.get(name.as_str())))
        .map(String::as_str)
        .collect()
}

/// Syntactic email check: no whitespace, exactly one `@` with a non-empty
/// local part, and a domain containing an interior dot.
///
/// Equivalent to the pattern `^[^\s@]+@[^\s@]+\.[^\s@]+$`.
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }

    // At least one character on each side of some dot in the domain
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Replace the five HTML special characters with their entities.
pub fn escape_html(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Render a submission value for embedding in an email body.
///
/// Falsy values render as the literal `Not provided`; everything else is
/// trimmed and HTML-escaped.
pub fn display_value(value: Option<&Value>) -> String {
    match value {
        Some(v) if !is_falsy(value) => {
            let raw = match v {
                Value::String(s) => s.clone(),
                Value::Number(n) => n.to_string(),
                Value::Bool(b) => b.to_string(),
                other => other.to_string(),
            };
            escape_html(raw.trim())
        }
        _ => "Not provided".to_string(),
    }
}
