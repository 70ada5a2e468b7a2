//! Record formatting for raw seed rows: timestamp conversion, reference lookups, comment reshaping.
//! Every function returns new objects and leaves its input untouched.

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{Map, Value};

/// Convert an epoch-milliseconds timestamp into a UTC date.
pub fn date_from_millis(millis: i64) -> Option<DateTime<Utc>> {
    DateTime::<Utc>::from_timestamp_millis(millis)
}

fn date_value(date: DateTime<Utc>) -> Value {
    Value::String(date.to_rfc3339_opts(SecondsFormat::Millis, true))
}

/// Copy of `record` with a numeric `created_at` (epoch millis) replaced by an RFC 3339 date.
/// Records without a numeric `created_at` are copied unchanged.
pub fn convert_timestamp_to_date(record: &Map<String, Value>) -> Map<String, Value> {
    let mut out = record.clone();
    let converted = record
        .get("created_at")
        .and_then(Value::as_i64)
        .and_then(date_from_millis);
    if let Some(date) = converted {
        out.insert("created_at".into(), date_value(date));
    }
    out
}

/// Lookup from each record's `key` field to its `value` field, e.g. article title -> article_id.
/// Records missing either field are skipped.
pub fn create_ref(records: &[Map<String, Value>], key: &str, value: &str) -> Map<String, Value> {
    records
        .iter()
        .filter_map(|r| {
            let k = match r.get(key)? {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            Some((k, r.get(value)?.clone()))
        })
        .collect()
}

/// Reshape raw comments: `created_by` becomes `author`, `belongs_to` (an article title) is
/// resolved through `article_ref` into `article_id`, and `created_at` is converted to a date.
pub fn format_comments(
    comments: &[Map<String, Value>],
    article_ref: &Map<String, Value>,
) -> Vec<Map<String, Value>> {
    comments
        .iter()
        .map(|comment| {
            let mut out = convert_timestamp_to_date(comment);
            if let Some(author) = out.remove("created_by") {
                out.insert("author".into(), author);
            }
            if let Some(title) = out.remove("belongs_to") {
                let resolved = title.as_str().and_then(|t| article_ref.get(t));
                if let Some(id) = resolved {
                    out.insert("article_id".into(), id.clone());
                }
            }
            out
        })
        .collect()
}
