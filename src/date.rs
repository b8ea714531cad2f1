//! Parsing of `year/month/day` date strings, such as `2020/01/02`, as UTC midnight.

use chrono::{DateTime, NaiveDate, NaiveTime, TimeDelta, TimeZone, Utc};
use derive_more::{Display, Error};

#[derive(Debug, Display, Clone, PartialEq, Eq, Error)]
#[display("invalid datestr format")]
pub struct InvalidDatestrError;

/// Parses `year/month/day` into the start of that day in UTC. Leading zeros are optional.
///
/// Fails unless there are exactly three numeric segments. Months and days outside their usual
/// range roll over into the neighbouring ones, so `2020/13/01` is `2021/01/01` and `2020/1/0` is
/// `2019/12/31`.
pub fn datestr_to_time(datestr: &str) -> Result<DateTime<Utc>, InvalidDatestrError> {
    let mut segments = datestr.split('/');
    let (Some(year), Some(month), Some(day), None) =
        (segments.next(), segments.next(), segments.next(), segments.next())
    else {
        return Err(InvalidDatestrError);
    };

    let year: i64 = year.parse().map_err(|_| InvalidDatestrError)?;
    let month: i64 = month.parse().map_err(|_| InvalidDatestrError)?;
    let day: i64 = day.parse().map_err(|_| InvalidDatestrError)?;

    let date = normalized_date(year, month, day).ok_or(InvalidDatestrError)?;
    Ok(Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN)))
}

/// `None` only when the result falls outside of what [`NaiveDate`] can represent.
fn normalized_date(year: i64, month: i64, day: i64) -> Option<NaiveDate> {
    let months = year.checked_mul(12)?.checked_add(month.checked_sub(1)?)?;
    let first = NaiveDate::from_ymd_opt(
        i32::try_from(months.div_euclid(12)).ok()?,
        u32::try_from(months.rem_euclid(12) + 1).ok()?,
        1,
    )?;
    first.checked_add_signed(TimeDelta::try_days(day.checked_sub(1)?)?)
}

/// [`datestr_to_time`] as a Unix timestamp in seconds.
pub fn datestr_to_int(datestr: &str) -> Result<i64, InvalidDatestrError> {
    Ok(datestr_to_time(datestr)?.timestamp())
}
