//! Upstream pagination source parsing and numeric coercion
//!
//! The query layer hands request handlers a JSON object that may carry
//! pagination fields (`total`, `perPage`, `page`, `lastPage`, `data`) or may
//! be a bare row set. Parsing is deliberately permissive: any field that is
//! absent, non-numeric, or zero coerces to `None` rather than raising an
//! error, so the builder always produces an envelope.

use serde_json::Value;

/// Pagination fields read from an upstream query result.
///
/// Read-only input to [`crate::PageBuilder`]; all fields degrade to `None`
/// silently when missing or unusable.
#[derive(Debug, Clone, Default)]
pub struct PageSource {
    pub total: Option<i64>,
    pub per_page: Option<i64>,
    pub current_page: Option<i64>,
    pub last_page: Option<i64>,
    pub data: Option<Value>,
}

impl PageSource {
    /// Parse pagination fields from an upstream result object.
    ///
    /// Field names follow the query layer's convention: `total`, `perPage`,
    /// `page`, `lastPage`, `data`. A non-object value (e.g. a bare row array
    /// in custom-build mode) yields a source with every field `None`.
    pub fn from_value(value: &Value) -> Self {
        Self {
            total: numeric_field(value, "total"),
            per_page: numeric_field(value, "perPage"),
            current_page: numeric_field(value, "page"),
            last_page: numeric_field(value, "lastPage"),
            data: value.get("data").cloned(),
        }
    }
}

/// Read a named field and coerce it to a truthy integer.
fn numeric_field(value: &Value, key: &str) -> Option<i64> {
    value.get(key).and_then(coerce_number)
}

/// Coerce a JSON value to an integer, treating falsy values as missing.
///
/// Numbers and numeric strings coerce; zero coerces to `None` (a genuinely
/// zero total is indistinguishable from a missing one, which callers accept).
/// Anything non-numeric coerces to `None` without error.
pub fn coerce_number(value: &Value) -> Option<i64> {
    let number = match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64))?,
        Value::String(s) => s.trim().parse::<i64>().ok()?,
        Value::Bool(true) => 1,
        _ => return None,
    };
    if number == 0 {
        None
    } else {
        Some(number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_full_source() {
        let value = json!({
            "total": 25,
            "perPage": 10,
            "page": 1,
            "lastPage": 3,
            "data": [1, 2, 3]
        });

        let source = PageSource::from_value(&value);
        assert_eq!(source.total, Some(25));
        assert_eq!(source.per_page, Some(10));
        assert_eq!(source.current_page, Some(1));
        assert_eq!(source.last_page, Some(3));
        assert_eq!(source.data, Some(json!([1, 2, 3])));
    }

    #[test]
    fn test_parse_bare_row_set() {
        // Custom-build callers pass the raw rows as the source itself
        let value = json!([{"id": 1}, {"id": 2}]);

        let source = PageSource::from_value(&value);
        assert_eq!(source.total, None);
        assert_eq!(source.per_page, None);
        assert_eq!(source.current_page, None);
        assert_eq!(source.last_page, None);
        assert_eq!(source.data, None);
    }

    #[test]
    fn test_coerce_numeric_string() {
        assert_eq!(coerce_number(&json!("10")), Some(10));
        assert_eq!(coerce_number(&json!(" 7 ")), Some(7));
    }

    #[test]
    fn test_coerce_zero_is_missing() {
        assert_eq!(coerce_number(&json!(0)), None);
        assert_eq!(coerce_number(&json!("0")), None);
    }

    #[test]
    fn test_coerce_non_numeric() {
        assert_eq!(coerce_number(&json!("abc")), None);
        assert_eq!(coerce_number(&json!(null)), None);
        assert_eq!(coerce_number(&json!(false)), None);
        assert_eq!(coerce_number(&json!({"n": 1})), None);
    }

    #[test]
    fn test_coerce_negative_is_truthy() {
        assert_eq!(coerce_number(&json!(-2)), Some(-2));
    }

    #[test]
    fn test_coerce_float_truncates() {
        assert_eq!(coerce_number(&json!(2.9)), Some(2));
    }
}
