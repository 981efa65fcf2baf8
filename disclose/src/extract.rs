//! # Element Values
//!
//! Turns the raw value stored for one requested element into a
//! human-readable string plus an availability flag. Extraction is total:
//! a missing key, a null, or any rendering failure degrades to the
//! "not available" marker rather than propagating, so the grouping builder
//! can always proceed.

use anyhow::{bail, Result};
use base64ct::{Base64, Encoding};
use chrono::DateTime;
use serde_json::{Map, Value};

use crate::provider::Localize;

/// The rendered value of one requested element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtractedValue {
    /// Human-readable rendering of the raw value, or the localized
    /// "not available" marker.
    pub text: String,

    /// Whether the raw value was present and renderable.
    pub is_available: bool,
}

/// Render the raw value found at `claims[namespace][element identifier]`, or
/// the absence thereof. Identical input yields identical output.
pub fn extract(raw: Option<&Value>, labels: &impl Localize) -> ExtractedValue {
    match raw.map(render) {
        Some(Ok(text)) if !text.is_empty() => ExtractedValue { text, is_available: true },
        _ => ExtractedValue { text: labels.not_available(), is_available: false },
    }
}

fn render(value: &Value) -> Result<String> {
    match value {
        Value::Object(map) => {
            let mut lines = vec![];
            flatten(map, "", &mut lines)?;
            if lines.is_empty() {
                bail!("empty composite value");
            }
            Ok(lines.join("\n"))
        }
        _ => scalar(value),
    }
}

/// One `key: value` pair per line, nested keys dotted, in the map's natural
/// key order.
fn flatten(map: &Map<String, Value>, prefix: &str, lines: &mut Vec<String>) -> Result<()> {
    for (key, value) in map {
        let path =
            if prefix.is_empty() { key.clone() } else { format!("{prefix}.{key}") };
        match value {
            Value::Object(nested) => flatten(nested, &path, lines)?,
            _ => lines.push(format!("{path}: {}", scalar(value)?)),
        }
    }
    Ok(())
}

fn scalar(value: &Value) -> Result<String> {
    match value {
        Value::Null => bail!("null element value"),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Number(n) => Ok(n.to_string()),
        Value::String(s) => Ok(normalize_date(s)),
        Value::Array(items) => {
            if items.is_empty() {
                bail!("empty array element value");
            }
            // byte payloads (portraits, signatures) render as base64 text
            if let Some(bytes) = as_bytes(items) {
                return Ok(Base64::encode_string(&bytes));
            }
            let rendered =
                items.iter().map(render).collect::<Result<Vec<_>>>()?;
            Ok(rendered.join(", "))
        }
        Value::Object(_) => render(value),
    }
}

/// `YYYY-MM-DD` portion of an RFC 3339 date-time; other strings unchanged.
fn normalize_date(text: &str) -> String {
    DateTime::parse_from_rfc3339(text)
        .map_or_else(|_| text.to_string(), |dt| dt.date_naive().format("%Y-%m-%d").to_string())
}

fn as_bytes(items: &[Value]) -> Option<Vec<u8>> {
    items.iter().map(|item| item.as_u64().and_then(|n| u8::try_from(n).ok())).collect()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::provider::Localizer;

    #[test]
    fn missing_and_null_are_unavailable() {
        let missing = extract(None, &Localizer);
        assert!(!missing.is_available);
        assert_eq!(missing.text, "Not available");

        let null = extract(Some(&Value::Null), &Localizer);
        assert!(!null.is_available);
        assert_eq!(null.text, "Not available");
    }

    #[test]
    fn scalars_render() {
        let value = json!("Alex");
        let extracted = extract(Some(&value), &Localizer);
        assert!(extracted.is_available);
        assert_eq!(extracted.text, "Alex");

        let value = json!(21);
        assert_eq!(extract(Some(&value), &Localizer).text, "21");

        let value = json!(true);
        assert_eq!(extract(Some(&value), &Localizer).text, "true");
    }

    #[test]
    fn dates_normalize() {
        let value = json!("2024-01-01T09:30:00Z");
        assert_eq!(extract(Some(&value), &Localizer).text, "2024-01-01");

        // a plain full-date passes through untouched
        let value = json!("2024-01-01");
        assert_eq!(extract(Some(&value), &Localizer).text, "2024-01-01");
    }

    #[test]
    fn byte_arrays_render_as_base64() {
        let bytes = vec![137u8, 80, 78, 71];
        let value = json!(bytes);
        let extracted = extract(Some(&value), &Localizer);
        assert!(extracted.is_available);
        assert_eq!(extracted.text, Base64::encode_string(&bytes));
    }

    #[test]
    fn composites_flatten_deterministically() {
        let value = json!({
            "vehicle_category_code": "B",
            "issue_date": "2018-08-09",
            "restrictions": {"code": "01"}
        });

        let extracted = extract(Some(&value), &Localizer);
        assert!(extracted.is_available);
        // natural key order, nested keys dotted
        assert_eq!(
            extracted.text,
            "issue_date: 2018-08-09\nrestrictions.code: 01\nvehicle_category_code: B"
        );

        // identical input, identical output
        assert_eq!(extract(Some(&value), &Localizer), extracted);
    }

    #[test]
    fn failures_degrade_to_unavailable() {
        // a null buried in a composite poisons the whole value
        let value = json!({"code": null});
        let extracted = extract(Some(&value), &Localizer);
        assert!(!extracted.is_available);
        assert_eq!(extracted.text, "Not available");

        let value = json!({});
        assert!(!extract(Some(&value), &Localizer).is_available);

        let value = json!("");
        assert!(!extract(Some(&value), &Localizer).is_available);

        let value = json!([]);
        assert!(!extract(Some(&value), &Localizer).is_available);
    }
}
