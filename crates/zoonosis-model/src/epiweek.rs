//! Epidemiological week arithmetic.
//!
//! Notifications are keyed by `(year, week)`. The date attached to a case is
//! an approximation: the first day of the year plus `week - 1` whole weeks.
//! Monthly bucketing uses four weeks per month, so it drifts from the
//! calendar and weeks 45 to 53 all land in December.

use chrono::{Days, NaiveDate};

pub const MIN_WEEK: u32 = 1;
pub const MAX_WEEK: u32 = 53;

pub const SENTINEL_YEAR: i32 = 2000;

/// Month labels used by seasonal series, January first.
pub const MONTH_LABELS: [&str; 12] = [
    "Enero",
    "Febrero",
    "Marzo",
    "Abril",
    "Mayo",
    "Junio",
    "Julio",
    "Agosto",
    "Septiembre",
    "Octubre",
    "Noviembre",
    "Diciembre",
];

/// Date used when a notification's year or week cannot be interpreted.
pub fn sentinel_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(SENTINEL_YEAR, 1, 1).unwrap_or(NaiveDate::MIN)
}

/// Clamp an out-of-range week to week 1.
pub fn normalize_week(week: i64) -> u32 {
    match u32::try_from(week) {
        Ok(week) if (MIN_WEEK..=MAX_WEEK).contains(&week) => week,
        _ => MIN_WEEK,
    }
}

/// Approximate notification date for a `(year, week)` pair.
///
/// Missing inputs or a year chrono cannot represent give [`sentinel_date`].
pub fn notification_date(year: Option<i32>, week: Option<i64>) -> NaiveDate {
    let (Some(year), Some(week)) = (year, week) else {
        return sentinel_date();
    };
    let week = normalize_week(week);
    NaiveDate::from_ymd_opt(year, 1, 1)
        .and_then(|start| start.checked_add_days(Days::new(u64::from(week - 1) * 7)))
        .unwrap_or_else(sentinel_date)
}

/// Month (1-12) a week falls into under the four-weeks-per-month rule.
pub fn week_to_month(week: u32) -> u32 {
    let month = (i64::from(week) - 1).div_euclid(4) + 1;
    month.clamp(1, 12) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn first_week_is_new_year() {
        assert_eq!(notification_date(Some(2023), Some(1)), date(2023, 1, 1));
    }

    #[test]
    fn later_weeks_add_whole_weeks() {
        assert_eq!(notification_date(Some(2023), Some(2)), date(2023, 1, 8));
        assert_eq!(notification_date(Some(2023), Some(53)), date(2023, 12, 31));
    }

    #[test]
    fn invalid_week_clamps_to_first() {
        assert_eq!(notification_date(Some(2023), Some(54)), date(2023, 1, 1));
        assert_eq!(notification_date(Some(2023), Some(0)), date(2023, 1, 1));
        assert_eq!(notification_date(Some(2023), Some(-3)), date(2023, 1, 1));
    }

    #[test]
    fn unparseable_inputs_fall_back_to_sentinel() {
        assert_eq!(notification_date(None, Some(3)), date(2000, 1, 1));
        assert_eq!(notification_date(Some(2023), None), date(2000, 1, 1));
        assert_eq!(notification_date(Some(i32::MAX), Some(1)), date(2000, 1, 1));
    }

    #[test]
    fn weeks_bucket_into_months() {
        assert_eq!(week_to_month(1), 1);
        assert_eq!(week_to_month(4), 1);
        assert_eq!(week_to_month(5), 2);
        assert_eq!(week_to_month(48), 12);
        assert_eq!(week_to_month(53), 12);
        assert_eq!(week_to_month(0), 1);
    }
}
