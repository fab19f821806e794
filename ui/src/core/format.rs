//! Formatting helpers for presenting report values.

use time::{macros::format_description, Date};

/// Shortest representation of an already-rounded value (`37.0` -> `37`,
/// `35.46` -> `35.46`). Negative zero prints as `0`.
pub fn format_value(value: f64) -> String {
    if !value.is_finite() {
        return "—".to_string();
    }
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{value}")
}

pub fn format_percent(value: f64) -> String {
    format!("{} %", format_value(value))
}

pub fn format_date(date: Date) -> String {
    date.format(&format_description!("[year]-[month]-[day]"))
        .unwrap_or_else(|_| "—".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn values_drop_trailing_zeroes() {
        assert_eq!(format_value(37.0), "37");
        assert_eq!(format_value(35.46), "35.46");
        assert_eq!(format_value(-0.0), "0");
        assert_eq!(format_value(f64::NAN), "—");
    }

    #[test]
    fn percents_and_dates() {
        assert_eq!(format_percent(-40.0), "-40 %");
        assert_eq!(format_percent(29.25), "29.25 %");
        assert_eq!(format_date(date!(2024 - 08 - 01)), "2024-08-01");
    }
}
