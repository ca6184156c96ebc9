use chrono::{Datelike, NaiveDate};
use thiserror::Error;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Unit suffix carried by stored renewal periods.
pub const YEAR_UNIT: &str = " years";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProjectionError {
    #[error("invalid calendar date {0:?}, expected YYYY-MM-DD")]
    InvalidDateFormat(String),
    #[error("projected date is outside the supported calendar range")]
    OutOfRange,
}

pub fn parse_date(input: &str) -> Result<NaiveDate, ProjectionError> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT)
        .map_err(|_| ProjectionError::InvalidDateFormat(input.to_string()))
}

/// Years encoded in a free-text renewal period. The first maximal run of
/// decimal digits wins, wherever it sits in the string; a period with no
/// digits at all means one year.
pub fn years_in_period(period: &str) -> Result<u32, ProjectionError> {
    let Some(start) = period.find(|c: char| c.is_ascii_digit()) else {
        return Ok(1);
    };
    let digits: String = period[start..]
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().map_err(|_| ProjectionError::OutOfRange)
}

/// Projects an expiration date forward by the years named in the renewal
/// period, returning the new date as `YYYY-MM-DD`.
pub fn project(current_expiration: &str, renewal_period: &str) -> Result<String, ProjectionError> {
    let date = parse_date(current_expiration)?;
    let years = years_in_period(renewal_period)?;
    let projected = shift_years(date, years).ok_or(ProjectionError::OutOfRange)?;
    Ok(projected.format(DATE_FORMAT).to_string())
}

/// Advances the year component, keeping month and day. Feb 29 mapped into a
/// non-leap year is the only combination that can go invalid under a pure
/// year shift; it rolls forward to Mar 1 of the target year.
pub fn shift_years(date: NaiveDate, years: u32) -> Option<NaiveDate> {
    let year = date.year().checked_add(i32::try_from(years).ok()?)?;
    NaiveDate::from_ymd_opt(year, date.month(), date.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, date.month() + 1, 1))
}

/// A purely numeric stored period gains the unit suffix; anything else is
/// kept as entered.
pub fn display_period(stored: &str) -> String {
    if !stored.is_empty() && stored.chars().all(|c| c.is_ascii_digit()) {
        format!("{stored}{YEAR_UNIT}")
    } else {
        stored.to_string()
    }
}

/// Inverse of [`display_period`] for numeric-entry edit fields: a trailing
/// unit suffix is stripped, anything else passes through.
pub fn editable_period(stored: &str) -> String {
    stored.strip_suffix(YEAR_UNIT).unwrap_or(stored).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adds_years_from_digit_run() {
        assert_eq!(project("2024-01-15", "3").unwrap(), "2027-01-15");
        assert_eq!(project("2024-01-15", "1 years").unwrap(), "2025-01-15");
        assert_eq!(project("2024-01-15", "1年").unwrap(), "2025-01-15");
    }

    #[test]
    fn defaults_to_one_year_without_digits() {
        assert_eq!(project("2024-01-15", "").unwrap(), "2025-01-15");
        assert_eq!(project("2024-01-15", "annual").unwrap(), "2025-01-15");
    }

    #[test]
    fn first_digit_run_wins_regardless_of_surrounding_text() {
        assert_eq!(years_in_period("2 years").unwrap(), 2);
        assert_eq!(years_in_period("every 12").unwrap(), 12);
        assert_eq!(years_in_period("renews 5, then 10").unwrap(), 5);
        assert_eq!(years_in_period("10年").unwrap(), 10);
    }

    #[test]
    fn zero_years_projects_unchanged() {
        assert_eq!(project("2024-01-15", "0").unwrap(), "2024-01-15");
    }

    #[test]
    fn leap_day_rolls_forward_to_march_first() {
        assert_eq!(project("2024-02-29", "1").unwrap(), "2025-03-01");
        // Four years later is a leap year again, so the day survives.
        assert_eq!(project("2024-02-29", "4").unwrap(), "2028-02-29");
    }

    #[test]
    fn rejects_malformed_dates() {
        for input in ["", "not-a-date", "2024/01/15", "2024-13-01", "2024-02-30"] {
            assert_eq!(
                project(input, "1").unwrap_err(),
                ProjectionError::InvalidDateFormat(input.to_string()),
            );
        }
    }

    #[test]
    fn oversized_digit_run_is_out_of_range() {
        assert_eq!(
            project("2024-01-15", "99999999999999999999").unwrap_err(),
            ProjectionError::OutOfRange,
        );
    }

    #[test]
    fn projection_is_repeatable() {
        let first = project("2026-08-07", "2 years").unwrap();
        let second = project("2026-08-07", "2 years").unwrap();
        assert_eq!(first, second);
        assert_eq!(first, "2028-08-07");
    }

    #[test]
    fn period_unit_round_trips() {
        assert_eq!(display_period("3"), "3 years");
        assert_eq!(editable_period("3 years"), "3");
        assert_eq!(editable_period(&display_period("3")), "3");
        assert_eq!(display_period(&editable_period("5 years")), "5 years");
    }

    #[test]
    fn non_numeric_periods_pass_through_unchanged() {
        assert_eq!(display_period("biennial"), "biennial");
        assert_eq!(display_period(""), "");
        assert_eq!(editable_period("biennial"), "biennial");
    }
}
