use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpiryStatus {
    Success,
    Warning,
    Danger,
}

impl ExpiryStatus {
    /// Thresholds are strict lower bounds: a domain sitting exactly on its
    /// warning threshold still counts as healthy.
    pub fn classify(days_remaining: i64, warning_threshold: i64, danger_threshold: i64) -> Self {
        if days_remaining < danger_threshold {
            Self::Danger
        } else if days_remaining < warning_threshold {
            Self::Warning
        } else {
            Self::Success
        }
    }

    /// Presentation color used by the dashboard's progress circles.
    pub fn color(self) -> &'static str {
        match self {
            Self::Success => "#198754",
            Self::Warning => "#ffc107",
            Self::Danger => "#dc3545",
        }
    }
}

/// Whole days from today until expiration, clamped at zero once lapsed.
pub fn days_remaining(expiration: NaiveDate, today: NaiveDate) -> i64 {
    (expiration - today).num_days().max(0)
}

/// Share of the registration-to-expiration span still ahead, as a percentage
/// rounded to one decimal. Zero when the registration date is unknown or the
/// span is not positive.
pub fn progress_percentage(
    registration: Option<NaiveDate>,
    expiration: NaiveDate,
    today: NaiveDate,
) -> f64 {
    let Some(registration) = registration else {
        return 0.0;
    };
    let total_days = (expiration - registration).num_days();
    if total_days <= 0 {
        return 0.0;
    }
    let remaining = days_remaining(expiration, today) as f64;
    (remaining / total_days as f64 * 1000.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(input: &str) -> NaiveDate {
        NaiveDate::parse_from_str(input, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn days_remaining_counts_forward_and_clamps() {
        let today = date("2026-08-07");
        assert_eq!(days_remaining(date("2026-08-17"), today), 10);
        assert_eq!(days_remaining(today, today), 0);
        assert_eq!(days_remaining(date("2026-08-01"), today), 0);
    }

    #[test]
    fn status_thresholds_are_strict() {
        assert_eq!(ExpiryStatus::classify(6, 30, 7), ExpiryStatus::Danger);
        assert_eq!(ExpiryStatus::classify(7, 30, 7), ExpiryStatus::Warning);
        assert_eq!(ExpiryStatus::classify(29, 30, 7), ExpiryStatus::Warning);
        assert_eq!(ExpiryStatus::classify(30, 30, 7), ExpiryStatus::Success);
        assert_eq!(ExpiryStatus::classify(365, 30, 7), ExpiryStatus::Success);
    }

    #[test]
    fn status_colors_match_the_dashboard_palette() {
        assert_eq!(ExpiryStatus::Success.color(), "#198754");
        assert_eq!(ExpiryStatus::Warning.color(), "#ffc107");
        assert_eq!(ExpiryStatus::Danger.color(), "#dc3545");
    }

    #[test]
    fn progress_is_the_remaining_share_of_the_span() {
        let registration = date("2026-01-01");
        let expiration = date("2027-01-01");
        let halfway = date("2026-07-02");
        let progress = progress_percentage(Some(registration), expiration, halfway);
        assert!((progress - 50.1).abs() < f64::EPSILON, "got {progress}");
    }

    #[test]
    fn progress_rounds_to_one_decimal() {
        let progress = progress_percentage(
            Some(date("2026-01-01")),
            date("2026-01-04"),
            date("2026-01-02"),
        );
        assert!((progress - 66.7).abs() < f64::EPSILON, "got {progress}");
    }

    #[test]
    fn progress_is_zero_without_a_registration_date() {
        assert_eq!(
            progress_percentage(None, date("2027-01-01"), date("2026-08-07")),
            0.0
        );
    }

    #[test]
    fn progress_is_zero_for_an_empty_or_inverted_span() {
        let day = date("2026-08-07");
        assert_eq!(progress_percentage(Some(day), day, day), 0.0);
        assert_eq!(
            progress_percentage(Some(date("2027-01-01")), date("2026-01-01"), day),
            0.0
        );
    }
}
