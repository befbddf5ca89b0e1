//! Toll-free date detection.
//!
//! This module decides whether a calendar date is exempt from congestion
//! tax: weekends, configured holidays and the day before a holiday.

use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Why a date carries no congestion tax.
///
/// # Example
///
/// ```
/// use congestion_tax::calculation::TollFreeReason;
///
/// let reason = TollFreeReason::DayBeforeHoliday;
/// assert_eq!(reason.to_string(), "Day before holiday");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TollFreeReason {
    /// Saturday or Sunday.
    Weekend,
    /// A configured holiday.
    Holiday,
    /// The calendar day immediately preceding a configured holiday.
    DayBeforeHoliday,
}

impl std::fmt::Display for TollFreeReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TollFreeReason::Weekend => write!(f, "Weekend"),
            TollFreeReason::Holiday => write!(f, "Holiday"),
            TollFreeReason::DayBeforeHoliday => write!(f, "Day before holiday"),
        }
    }
}

/// Determines why a date is toll-free, if it is.
///
/// Weekends take precedence over holidays, and a holiday over the day
/// before another holiday.
///
/// # Example
///
/// ```
/// use std::collections::BTreeSet;
/// use congestion_tax::calculation::{toll_free_reason, TollFreeReason};
/// use chrono::NaiveDate;
///
/// let christmas = NaiveDate::from_ymd_opt(2013, 12, 25).unwrap();
/// let holidays: BTreeSet<NaiveDate> = [christmas].into_iter().collect();
///
/// // 2013-12-24 is a Tuesday
/// let eve = NaiveDate::from_ymd_opt(2013, 12, 24).unwrap();
/// assert_eq!(toll_free_reason(eve, &holidays), Some(TollFreeReason::DayBeforeHoliday));
///
/// // 2013-12-23 is a Monday, two days before the holiday
/// let monday = NaiveDate::from_ymd_opt(2013, 12, 23).unwrap();
/// assert_eq!(toll_free_reason(monday, &holidays), None);
/// ```
pub fn toll_free_reason(date: NaiveDate, holidays: &BTreeSet<NaiveDate>) -> Option<TollFreeReason> {
    if matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
        return Some(TollFreeReason::Weekend);
    }

    if holidays.contains(&date) {
        return Some(TollFreeReason::Holiday);
    }

    let next_day_is_holiday = date
        .succ_opt()
        .is_some_and(|next| holidays.contains(&next));
    if next_day_is_holiday {
        return Some(TollFreeReason::DayBeforeHoliday);
    }

    None
}

/// Returns true if no congestion tax is charged on `date`.
pub fn is_toll_free_date(date: NaiveDate, holidays: &BTreeSet<NaiveDate>) -> bool {
    toll_free_reason(date, holidays).is_some()
}
