//! Request validation: query-string whitelists, path ids, required fields and vote deltas.
//! Everything here runs before the database is touched.

use crate::error::AppError;
use crate::sql::{Sort, SortOrder, Table};
use serde_json::Value;

pub const INVALID_ORDER: &str = "Bad Request: Invalid order query";

/// True only for exactly `asc` or `desc`.
pub fn is_valid_order(order: &str) -> bool {
    matches!(order, "asc" | "desc")
}

/// Absent means the default (descending); any other present value must be `asc` or `desc`.
pub fn check_order(order: Option<&str>) -> Result<SortOrder, AppError> {
    match order {
        None => Ok(SortOrder::default()),
        Some(o) if is_valid_order(o) => Ok(if o == "asc" { SortOrder::Asc } else { SortOrder::Desc }),
        Some(_) => Err(AppError::BadRequest(INVALID_ORDER.into())),
    }
}

/// `sort_by` must name one of the table's sortable columns.
pub fn check_sort_by(sort_by: Option<&str>, table: &Table) -> Result<&'static str, AppError> {
    match sort_by {
        None => Ok(table.default_sort),
        Some(col) => table
            .sortable
            .iter()
            .copied()
            .find(|c| *c == col)
            .ok_or_else(AppError::bad_request),
    }
}

/// Order is checked before sort_by so an invalid order reports its own message.
pub fn check_sort(sort_by: Option<&str>, order: Option<&str>, table: &Table) -> Result<Sort, AppError> {
    let order = check_order(order)?;
    let column = check_sort_by(sort_by, table)?;
    Ok(Sort { column, order })
}

/// Serial ids only: an optional `-` then ASCII digits, within `i32`. Signs, spaces
/// and anything else are a malformed request.
pub fn parse_id(id: &str) -> Result<i32, AppError> {
    let digits = id.strip_prefix('-').unwrap_or(id);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AppError::bad_request());
    }
    id.parse().map_err(|_| AppError::bad_request())
}

pub fn required<T>(field: Option<T>) -> Result<T, AppError> {
    field.ok_or_else(AppError::bad_request)
}

/// `inc_votes`: absent or null leaves votes unchanged; otherwise it must be an integer.
pub fn vote_delta(inc_votes: Option<&Value>) -> Result<i32, AppError> {
    match inc_votes {
        None | Some(Value::Null) => Ok(0),
        Some(v) => v
            .as_i64()
            .and_then(|n| i32::try_from(n).ok())
            .ok_or_else(AppError::bad_request),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sql::{ARTICLES, COMMENTS};
    use serde_json::json;

    fn message(err: AppError) -> String {
        match err {
            AppError::BadRequest(msg) => msg,
            other => panic!("expected bad request, got {other:?}"),
        }
    }

    #[test]
    fn only_exact_asc_and_desc_are_valid() {
        assert!(is_valid_order("asc"));
        assert!(is_valid_order("desc"));
        for bad in ["", "ASC", "Desc", "ascending", " asc", "not-asc-or-desc"] {
            assert!(!is_valid_order(bad), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn invalid_order_carries_its_message() {
        assert_eq!(message(check_order(Some("up")).unwrap_err()), INVALID_ORDER);
        assert_eq!(message(check_order(Some("")).unwrap_err()), INVALID_ORDER);
    }

    #[test]
    fn missing_order_defaults_to_descending() {
        assert_eq!(check_order(None).unwrap(), SortOrder::Desc);
        assert_eq!(check_order(Some("asc")).unwrap(), SortOrder::Asc);
    }

    #[test]
    fn sort_by_is_whitelisted_per_table() {
        assert_eq!(check_sort_by(None, &ARTICLES).unwrap(), "created_at");
        assert_eq!(check_sort_by(Some("title"), &ARTICLES).unwrap(), "title");
        assert_eq!(check_sort_by(Some("body"), &COMMENTS).unwrap(), "body");
        assert_eq!(message(check_sort_by(Some("not-a-column"), &ARTICLES).unwrap_err()), "Bad Request");
        assert!(check_sort_by(Some("body"), &ARTICLES).is_err());
    }

    #[test]
    fn order_is_reported_before_sort_by() {
        let err = check_sort(Some("not-a-column"), Some("sideways"), &ARTICLES).unwrap_err();
        assert_eq!(message(err), INVALID_ORDER);
    }

    #[test]
    fn ids_must_be_integers() {
        assert_eq!(parse_id("42").unwrap(), 42);
        assert!(parse_id("not-a-valid-id").is_err());
        assert!(parse_id("1.5").is_err());
        assert!(parse_id("99999999999").is_err());
    }

    #[test]
    fn ids_must_be_canonical() {
        assert_eq!(parse_id("-1").unwrap(), -1);
        for bad in ["+1", " 1", "1 ", "", "-", "0x1", "1_000"] {
            assert!(parse_id(bad).is_err(), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn vote_delta_accepts_integers_only() {
        assert_eq!(vote_delta(None).unwrap(), 0);
        assert_eq!(vote_delta(Some(&Value::Null)).unwrap(), 0);
        assert_eq!(vote_delta(Some(&json!(-5))).unwrap(), -5);
        assert!(vote_delta(Some(&json!("not a number"))).is_err());
        assert!(vote_delta(Some(&json!(1.5))).is_err());
        assert!(vote_delta(Some(&json!(i64::MAX))).is_err());
    }

    #[test]
    fn required_fields_must_be_present() {
        assert_eq!(required(Some("body")).unwrap(), "body");
        assert_eq!(message(required::<String>(None).unwrap_err()), "Bad Request");
    }
}
