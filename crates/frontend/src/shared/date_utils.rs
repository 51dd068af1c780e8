/// Date and time display helpers
///
/// Backend timestamps arrive as RFC 3339 strings; unparseable values are
/// shown trimmed rather than erroring.
use chrono::DateTime;

/// "2026-03-15T14:02:26Z" -> "Mar 15, 2026"
pub fn format_date(value: &str) -> String {
    match DateTime::parse_from_rfc3339(value) {
        Ok(dt) => dt.format("%b %-d, %Y").to_string(),
        Err(_) => value.split('T').next().unwrap_or(value).to_string(),
    }
}

/// "2026-03-15T14:02:26Z" -> "Mar 15, 2026 14:02"
pub fn format_datetime(value: &str) -> String {
    match DateTime::parse_from_rfc3339(value) {
        Ok(dt) => dt.format("%b %-d, %Y %H:%M").to_string(),
        Err(_) => {
            let cleaned = value.replace('T', " ");
            cleaned.split('.').next().unwrap_or(&cleaned).to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2026-03-15T14:02:26Z"), "Mar 15, 2026");
        assert_eq!(format_date("2026-03-05T00:00:00+00:00"), "Mar 5, 2026");
    }

    #[test]
    fn test_format_datetime() {
        assert_eq!(format_datetime("2026-03-15T14:02:26Z"), "Mar 15, 2026 14:02");
    }

    #[test]
    fn test_unparseable_values_pass_through() {
        assert_eq!(format_date("2026-03-15"), "2026-03-15");
        assert_eq!(format_date(""), "");
        assert_eq!(format_datetime("2026-03-15 14:02:26"), "2026-03-15 14:02:26");
    }
}
