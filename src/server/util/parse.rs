use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::DbErr;

/// Parses a list of strings from a JSON column.
///
/// # Arguments
/// - `value` - The stored JSON value, expected to be an array of strings
///
/// # Returns
/// - `Ok(Vec<String>)` - Successfully parsed list
/// - `Err(DbErr::Json)` - The column holds something other than a string array
pub fn parse_string_list(value: serde_json::Value) -> Result<Vec<String>, DbErr> {
    serde_json::from_value(value)
        .map_err(|e| DbErr::Json(format!("Expected a list of strings: {}", e)))
}

/// Converts a list of strings into the JSON value stored in list columns.
pub fn string_list_to_json(values: &[String]) -> serde_json::Value {
    serde_json::Value::from(values.to_vec())
}

/// Returns midnight UTC of the day containing `now`.
pub fn start_of_day(now: DateTime<Utc>) -> DateTime<Utc> {
    now.date_naive()
        .and_hms_opt(0, 0, 0)
        .map(|midnight| midnight.and_utc())
        .unwrap_or(now)
}

/// Returns today's date in UTC.
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn parses_string_arrays() {
        let parsed = parse_string_list(serde_json::json!(["1", "2"])).unwrap();

        assert_eq!(parsed, vec!["1".to_string(), "2".to_string()]);
    }

    #[test]
    fn rejects_non_string_arrays() {
        assert!(parse_string_list(serde_json::json!([1, 2])).is_err());
        assert!(parse_string_list(serde_json::json!({"a": 1})).is_err());
    }

    #[test]
    fn list_survives_storage_format() {
        let roles = vec!["10".to_string(), "20".to_string()];

        assert_eq!(parse_string_list(string_list_to_json(&roles)).unwrap(), roles);
    }

    #[test]
    fn start_of_day_is_midnight_utc() {
        let now = Utc.with_ymd_and_hms(2026, 3, 14, 15, 9, 26).unwrap();

        assert_eq!(
            start_of_day(now),
            Utc.with_ymd_and_hms(2026, 3, 14, 0, 0, 0).unwrap()
        );
    }
}
