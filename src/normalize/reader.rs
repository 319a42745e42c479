use crate::SourceRecord;
use serde_json::Value;

/// Identifiers may be exported as strings or bare numbers.
fn extract_id(record: &Value, id_field: &str) -> Option<String> {
    match record.get(id_field)? {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Reads the affiliation column, accepting either a top-level key or a
/// JSON pointer such as `/fields/affiliations`.
fn extract_affiliations(record: &Value, field: &str) -> Option<String> {
    let value = if field.starts_with('/') {
        record.pointer(field)
    } else {
        record.get(field)
    };
    value
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
}

/// `None` when the record has no usable affiliation value. A missing id
/// falls back to `line_no` so the output still lines up with the input.
pub fn extract_record(
    record: &Value,
    id_field: &str,
    field: &str,
    line_no: usize,
) -> Option<SourceRecord> {
    let affiliations = extract_affiliations(record, field)?;
    let id = extract_id(record, id_field).unwrap_or_else(|| format!("line-{}", line_no));
    Some(SourceRecord { id, affiliations })
}
