use serde_json::Value;

/// One indexed capture of a URL. Only the capture-time token survives
/// parsing; every other index-supplied field is ignored.
///
/// The timestamp is an opaque, fixed-width token compared lexically. It is
/// never parsed as a date.
#[derive(Debug, Clone, PartialEq)]
pub struct CaptureRecord {
    pub timestamp: String,
}

/// Parses the index's line-delimited JSON response into capture records.
///
/// One bad line must not zero out an otherwise valid result, so lines that
/// fail to parse, decode to something other than an object, or lack a usable
/// `timestamp` are skipped rather than reported.
pub fn parse_records(body: &str) -> impl Iterator<Item = CaptureRecord> + '_ {
    body.lines().filter_map(|line| {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        let record: Value = serde_json::from_str(line).ok()?;
        timestamp_token(&record).map(|timestamp| CaptureRecord { timestamp })
    })
}

/// The index emits timestamps as strings or bare numbers; both are accepted
/// and normalized to the string form. Empty strings and zero are treated
/// like a missing field.
fn timestamp_token(record: &Value) -> Option<String> {
    match record.as_object()?.get("timestamp")? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        _ => None,
    }
}
