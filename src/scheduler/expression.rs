//! Cron expression validation and conversion.
//!
//! Job rows store 5-field cron expressions (minute hour day-of-month month
//! day-of-week), validated by regex when an administrative command writes
//! them. The trigger library expects a 6-field expression with a leading
//! seconds field, added only at registration time.

use once_cell::sync::Lazy;
use regex::Regex;

static CRON_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[\d*/,\-]+(\s+[\d*/,\-]+){4}$").expect("cron regex is valid")
});

/// Checks a 5-field cron expression against the write-time validation regex.
pub fn is_valid(expression: &str) -> bool {
    CRON_RE.is_match(expression.trim())
}

/// Converts a stored 5-field expression into the 6-field form the trigger
/// library runs on, firing at second zero.
pub fn to_scheduler_expression(expression: &str) -> String {
    format!("0 {}", expression.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_common_expressions() {
        assert!(is_valid("0 8 * * *"));
        assert!(is_valid("*/15 * * * *"));
        assert!(is_valid("30 20 * * 5"));
        assert!(is_valid("0 0 1,15 * *"));
        assert!(is_valid("0 9-17 * * 1-5"));
    }

    #[test]
    fn rejects_wrong_field_counts() {
        assert!(!is_valid("0 8 * *"));
        assert!(!is_valid("0 0 8 * * *"));
        assert!(!is_valid(""));
    }

    #[test]
    fn rejects_invalid_characters() {
        assert!(!is_valid("0 8 * * mon"));
        assert!(!is_valid("@daily"));
        assert!(!is_valid("0 8 * * *; drop"));
    }

    #[test]
    fn tolerates_surrounding_whitespace() {
        assert!(is_valid("  0 8 * * *  "));
    }

    #[test]
    fn prepends_seconds_field() {
        assert_eq!(to_scheduler_expression("0 8 * * *"), "0 0 8 * * *");
        assert_eq!(to_scheduler_expression(" */5 * * * * "), "0 */5 * * * *");
    }
}
