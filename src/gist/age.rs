//! Inclusive calendar age between two instants.
//!
//! The end instant's own day counts, so the bound is pushed one day forward
//! before comparing. Years, then months, then days are found by counting up
//! one unit at a time until the shifted start stops being before the bound.
//! Month and year lengths vary, so a closed-form day count would disagree with
//! the calendar.

use chrono::{DateTime, Datelike, NaiveDate, TimeDelta, Utc};

use crate::error::Result;
use crate::models::TimeSpan;

/// Calendar addition with normalization: months past December roll into the
/// next year and days past the end of a month roll into the following month
/// (Jan 31 + 1 month = Mar 3 in a common year). Time of day is kept.
///
/// Returns `None` when the result is outside chrono's supported range.
pub fn add_date(t: DateTime<Utc>, years: i32, months: i32, days: i64) -> Option<DateTime<Utc>> {
    let total_months = t
        .year()
        .checked_mul(12)?
        .checked_add(t.month0() as i32)?
        .checked_add(years.checked_mul(12)?)?
        .checked_add(months)?;
    let year = total_months.div_euclid(12);
    let month = total_months.rem_euclid(12) as u32 + 1;

    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let offset = TimeDelta::try_days(i64::from(t.day()) - 1 + days)?;
    let date = first.checked_add_signed(offset)?;
    Some(date.and_time(t.time()).and_utc())
}

/// Largest `n` for which `fits(n)` still holds, counting up from zero.
fn count_up(mut fits: impl FnMut(u32) -> bool) -> u32 {
    let mut n = 0;
    while fits(n) {
        n += 1;
    }
    n.saturating_sub(1)
}

/// Years, months and days from `from` to `to`, counting `to`'s day.
///
/// A `from` later than `to` is treated as the same instant.
pub fn compute_age(from: DateTime<Utc>, to: DateTime<Utc>) -> TimeSpan {
    let to = to.max(from);
    let Some(bound) = add_date(to, 0, 0, 1) else {
        return TimeSpan::default();
    };
    let before = |years: u32, months: u32, days: u32| {
        add_date(from, years as i32, months as i32, i64::from(days)).is_some_and(|t| t < bound)
    };

    let years = count_up(|n| before(n, 0, 0));
    // not capped at 11; normalization already rolls the 12th month into a year
    let months = count_up(|n| before(years, n, 0));
    let days = count_up(|n| before(years, months, n));

    TimeSpan::new(years, months, days)
}

/// Parses an RFC 3339 timestamp such as a `relative-time` `datetime` attribute.
pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>> {
    Ok(DateTime::parse_from_rfc3339(value.trim())?.with_timezone(&Utc))
}
