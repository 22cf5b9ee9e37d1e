//! Date canonicalization and the +1-year derivation rule
//!
//! The wire format for both product dates is ISO `YYYY-MM-DD`. User input
//! may also arrive in the slash form the list view displays (`D/M/YYYY`,
//! day first); everything else passes through untouched so callers never
//! lose what the user typed.

use std::sync::LazyLock;

use chrono::{Datelike, Local, NaiveDate};
use regex::Regex;

static ISO_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("ISO date pattern is valid")
});

static SLASH_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{1,2})/(\d{1,2})/(\d{4})$").expect("slash date pattern is valid")
});

/// Canonicalize a date string to ISO `YYYY-MM-DD`.
///
/// Accepts ISO input (returned unchanged) and `D/M/YYYY` slash input,
/// day first, matching the display format. Unrecognized strings pass
/// through unchanged, which makes the function idempotent:
/// `to_iso_date(to_iso_date(x)) == to_iso_date(x)` for every `x`.
pub fn to_iso_date(value: &str) -> String {
    if value.is_empty() || ISO_DATE.is_match(value) {
        return value.to_string();
    }
    if let Some(caps) = SLASH_DATE.captures(value) {
        let day = &caps[1];
        let month = &caps[2];
        let year = &caps[3];
        return format!("{year}-{month:0>2}-{day:0>2}");
    }
    value.to_string()
}

/// Shift a calendar date forward by exactly one year, same month and day.
///
/// Leap-day policy: `Feb 29` on a non-leap target year clamps to `Feb 28`
/// rather than rolling into March.
pub fn plus_one_year(date: NaiveDate) -> NaiveDate {
    match date.with_year(date.year() + 1) {
        Some(shifted) => shifted,
        // Only Feb 29 has no equivalent in the following year.
        None => NaiveDate::from_ymd_opt(date.year() + 1, 2, 28).unwrap_or(date),
    }
}

/// Derive the revision date from a release date string.
///
/// The input is canonicalized first, so both ISO and slash forms work.
/// Returns the empty string when the input is not a real calendar date;
/// the validators catch the empty result as a missing required field.
pub fn add_one_year(value: &str) -> String {
    let iso = to_iso_date(value);
    match NaiveDate::parse_from_str(&iso, "%Y-%m-%d") {
        Ok(date) => plus_one_year(date).format("%Y-%m-%d").to_string(),
        Err(_) => String::new(),
    }
}

/// Today's date in the local time zone.
pub fn today_local() -> NaiveDate {
    Local::now().date_naive()
}

/// Render an ISO date string as `DD/MM/YYYY` for the list view.
///
/// Non-ISO input passes through unchanged; an empty value renders empty.
pub fn format_display(value: &str) -> String {
    if !ISO_DATE.is_match(value) {
        return value.to_string();
    }
    let parts: Vec<&str> = value.splitn(3, '-').collect();
    format!("{}/{}/{}", parts[2], parts[1], parts[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iso_input_unchanged() {
        assert_eq!(to_iso_date("2025-03-10"), "2025-03-10");
    }

    #[test]
    fn test_slash_input_is_day_first() {
        assert_eq!(to_iso_date("10/3/2025"), "2025-03-10");
        assert_eq!(to_iso_date("01/12/2024"), "2024-12-01");
    }

    #[test]
    fn test_unrecognized_input_passes_through() {
        assert_eq!(to_iso_date("next tuesday"), "next tuesday");
        assert_eq!(to_iso_date(""), "");
    }

    #[test]
    fn test_canonicalization_is_idempotent() {
        for input in ["2025-03-10", "10/3/2025", "garbage", ""] {
            let once = to_iso_date(input);
            assert_eq!(to_iso_date(&once), once, "not idempotent for {input:?}");
        }
    }

    #[test]
    fn test_add_one_year_same_month_and_day() {
        assert_eq!(add_one_year("2026-01-01"), "2027-01-01");
        assert_eq!(add_one_year("2025-03-10"), "2026-03-10");
    }

    #[test]
    fn test_add_one_year_accepts_slash_input() {
        assert_eq!(add_one_year("10/3/2025"), "2026-03-10");
    }

    #[test]
    fn test_leap_day_clamps_to_feb_28() {
        assert_eq!(add_one_year("2024-02-29"), "2025-02-28");
    }

    #[test]
    fn test_feb_28_is_stable() {
        assert_eq!(add_one_year("2025-02-28"), "2026-02-28");
    }

    #[test]
    fn test_add_one_year_rejects_non_dates() {
        assert_eq!(add_one_year("2025-99-99"), "");
        assert_eq!(add_one_year(""), "");
    }

    #[test]
    fn test_plus_one_year_on_naive_dates() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        assert_eq!(
            plus_one_year(date),
            NaiveDate::from_ymd_opt(2025, 2, 28).unwrap()
        );
    }

    #[test]
    fn test_display_format_is_day_month_year() {
        assert_eq!(format_display("2025-03-10"), "10/03/2025");
        assert_eq!(format_display(""), "");
        assert_eq!(format_display("not a date"), "not a date");
    }

    #[test]
    fn test_display_of_canonicalized_slash_input_round_trips() {
        assert_eq!(format_display(&to_iso_date("10/03/2025")), "10/03/2025");
    }
}
