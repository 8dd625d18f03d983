//! Relative-time phrases and calendar helpers.
//!
//! The centerpiece is [`to_relative_time`], which buckets an elapsed
//! duration into a human-readable English phrase ("A few seconds ago",
//! "2 months from now"). The rest of the module is small calendar
//! conveniences: month windows, day windows, weekday hops and copyright
//! ranges.

use chrono::{
    DateTime, Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Timelike, Utc,
    Weekday,
};

use crate::error::{NicetiesError, Result};


const MINUTES_PER_HOUR: f64 = 60.0;
const MINUTES_PER_DAY: f64 = 1_440.0;
const MINUTES_PER_MONTH: f64 = 43_200.0;
const MINUTES_PER_YEAR: f64 = 525_600.0;

/// Phrase family for one relative-time bucket.
#[derive(Debug, Clone, Copy)]
enum Span {
    FewSeconds,
    AMinute,
    Minutes,
    AnHour,
    Hours,
    ADay,
    Days,
    AMonth,
    Months,
    AYear,
    Years,
}

impl Span {
    fn phrase(self, magnitude: f64) -> String {
        match self {
            Span::FewSeconds => "A few seconds".to_string(),
            Span::AMinute => "A minute".to_string(),
            Span::Minutes => format!("{} minutes", magnitude.round()),
            Span::AnHour => "An hour".to_string(),
            Span::Hours => format!("{} hours", (magnitude / MINUTES_PER_HOUR).round()),
            Span::ADay => "A day".to_string(),
            Span::Days => format!("{} days", (magnitude / MINUTES_PER_DAY).floor()),
            Span::AMonth => "A month".to_string(),
            Span::Months => format!("{} months", (magnitude / MINUTES_PER_MONTH).floor()),
            Span::AYear => "A year".to_string(),
            Span::Years => format!("{} years", (magnitude / MINUTES_PER_YEAR).floor()),
        }
    }
}

/// Ordered bucket table: the first entry whose upper bound (exclusive, in
/// minutes) exceeds the elapsed magnitude supplies the phrase. Bounds are
/// strictly increasing and the final bucket is unbounded, so lookup is
/// total. Built once, never mutated.
const BUCKETS: &[(f64, Span)] = &[
    (0.75, Span::FewSeconds),
    (1.5, Span::AMinute),
    (45.0, Span::Minutes),
    (90.0, Span::AnHour),
    (MINUTES_PER_DAY, Span::Hours),
    (2.0 * MINUTES_PER_DAY, Span::ADay),
    (MINUTES_PER_MONTH, Span::Days),
    (2.0 * MINUTES_PER_MONTH, Span::AMonth),
    (MINUTES_PER_YEAR, Span::Months),
    (2.0 * MINUTES_PER_YEAR, Span::AYear),
    (f64::INFINITY, Span::Years),
];

/// Formats an instant as a relative-time phrase against the current time.
///
/// Past instants get an `" ago"` suffix, future instants `" from now"`.
/// Output is always English.
///
/// # Examples
///
/// ```
/// use chrono::{Duration, Utc};
/// use niceties::time::to_relative_time;
///
/// let two_hours_ago = Utc::now() - Duration::minutes(120);
/// assert_eq!(to_relative_time(&two_hours_ago), "2 hours ago");
/// ```
pub fn to_relative_time<Tz: TimeZone>(instant: &DateTime<Tz>) -> String {
    to_relative_time_between(instant, &Utc::now().with_timezone(&instant.timezone()))
}

/// Formats an instant as a relative-time phrase against an explicit `now`.
///
/// # Examples
///
/// ```
/// use chrono::{Duration, Utc};
/// use niceties::time::to_relative_time_between;
///
/// let now = Utc::now();
/// let instant = now + Duration::seconds(1);
/// assert_eq!(to_relative_time_between(&instant, &now), "A few seconds from now");
/// ```
pub fn to_relative_time_between<Tz: TimeZone>(instant: &DateTime<Tz>, now: &DateTime<Tz>) -> String {
    let elapsed_minutes = now
        .clone()
        .signed_duration_since(instant.clone())
        .num_milliseconds() as f64
        / 60_000.0;

    let (magnitude, suffix) = if elapsed_minutes < 0.0 {
        (-elapsed_minutes, "from now")
    } else {
        (elapsed_minutes, "ago")
    };

    let span = BUCKETS
        .iter()
        .find(|(upper_bound, _)| magnitude < *upper_bound)
        .map(|(_, span)| *span)
        .unwrap_or(Span::Years);

    format!("{} {}", span.phrase(magnitude), suffix)
}

/// Formats a copyright year range ending at the given date's year.
///
/// A start year equal to the date's year renders as a single year
/// (`"2016"`), an earlier start year as a range (`"2015 - 2016"`).
///
/// # Errors
///
/// Returns [`NicetiesError::OutOfRange`] when `start_year` is later than
/// the date's year.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use niceties::time::to_copyright;
///
/// # fn main() -> niceties::Result<()> {
/// let date = NaiveDate::from_ymd_opt(2016, 11, 1).unwrap();
/// assert_eq!(to_copyright(date, 2016)?, "2016");
/// assert_eq!(to_copyright(date, 2015)?, "2015 - 2016");
/// # Ok(())
/// # }
/// ```
pub fn to_copyright(date: NaiveDate, start_year: i32) -> Result<String> {
    if start_year > date.year() {
        return Err(NicetiesError::out_of_range(
            "start_year",
            format!("must not be later than {}", date.year()),
        ));
    }

    if start_year == date.year() {
        Ok(date.year().to_string())
    } else {
        Ok(format!("{} - {}", start_year, date.year()))
    }
}

/// Returns the same date-time moved to the first day of its month.
pub fn to_first_day_of_month(date_time: NaiveDateTime) -> NaiveDateTime {
    // Day 1 exists in every month
    date_time.with_day(1).unwrap_or(date_time)
}

/// Returns the same date-time moved to the last day of its month.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use niceties::time::to_last_day_of_month;
///
/// let dt = NaiveDate::from_ymd_opt(2016, 2, 10).unwrap().and_hms_opt(9, 30, 0).unwrap();
/// assert_eq!(to_last_day_of_month(dt).to_string(), "2016-02-29 09:30:00");
/// ```
pub fn to_last_day_of_month(date_time: NaiveDateTime) -> NaiveDateTime {
    let (year, month) = if date_time.month() == 12 {
        (date_time.year() + 1, 1)
    } else {
        (date_time.year(), date_time.month() + 1)
    };

    // Last day of this month = day before the first day of the next month
    let last_day = NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|first_of_next| first_of_next.pred_opt())
        .map(|d| d.day())
        .unwrap_or(date_time.day());

    date_time.with_day(last_day).unwrap_or(date_time)
}

/// Returns the date-time with its clock set to the given components.
///
/// A `None` millisecond keeps the source value's millisecond.
///
/// # Errors
///
/// Returns [`NicetiesError::OutOfRange`] when the components do not form a
/// valid wall-clock time.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use niceties::time::with_time;
///
/// # fn main() -> niceties::Result<()> {
/// let dt = NaiveDate::from_ymd_opt(2016, 11, 1).unwrap().and_hms_opt(9, 30, 15).unwrap();
/// assert_eq!(with_time(dt, 13, 5, 0, None)?.to_string(), "2016-11-01 13:05:00");
/// assert!(with_time(dt, 24, 0, 0, None).is_err());
/// # Ok(())
/// # }
/// ```
pub fn with_time(
    date_time: NaiveDateTime,
    hour: u32,
    minute: u32,
    second: u32,
    millisecond: Option<u32>,
) -> Result<NaiveDateTime> {
    let millisecond = millisecond.unwrap_or_else(|| date_time.nanosecond() / 1_000_000);

    let time = NaiveTime::from_hms_milli_opt(hour, minute, second, millisecond).ok_or_else(|| {
        NicetiesError::out_of_range(
            "time",
            format!("{hour:02}:{minute:02}:{second:02}.{millisecond:03} is not a valid time of day"),
        )
    })?;

    Ok(date_time.date().and_time(time))
}

/// Returns the date-time with its clock set to the start of the day
/// (00:00:00.000).
pub fn to_start_of_day(date_time: NaiveDateTime) -> NaiveDateTime {
    date_time.date().and_time(NaiveTime::MIN)
}

/// Returns the date-time with its clock set to the end of the day
/// (23:59:59.999).
pub fn to_end_of_day(date_time: NaiveDateTime) -> NaiveDateTime {
    at(date_time, 23, 59, 59, 999)
}

/// Returns the date-time with its clock set to midday (12:00:00.000).
pub fn to_midday(date_time: NaiveDateTime) -> NaiveDateTime {
    at(date_time, 12, 0, 0, 0)
}

// Internal clock setter for statically valid wall-clock components.
fn at(date_time: NaiveDateTime, hour: u32, minute: u32, second: u32, milli: u32) -> NaiveDateTime {
    NaiveTime::from_hms_milli_opt(hour, minute, second, milli)
        .map(|time| date_time.date().and_time(time))
        .unwrap_or(date_time)
}

/// Returns the next occurrence of the given weekday after the date-time.
///
/// When the date-time already falls on that weekday the result is 7 days
/// later.
///
/// # Examples
///
/// ```
/// use chrono::{NaiveDate, Weekday};
/// use niceties::time::to_next;
///
/// // 2016-11-01 was a Tuesday
/// let dt = NaiveDate::from_ymd_opt(2016, 11, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
/// assert_eq!(to_next(dt, Weekday::Fri).to_string(), "2016-11-04 00:00:00");
/// assert_eq!(to_next(dt, Weekday::Tue).to_string(), "2016-11-08 00:00:00");
/// ```
pub fn to_next(date_time: NaiveDateTime, weekday: Weekday) -> NaiveDateTime {
    let start = date_time.weekday().num_days_from_monday() as i64;
    let end = weekday.num_days_from_monday() as i64;

    let days_ahead = if end <= start {
        end + 7 - start
    } else {
        end - start
    };
    date_time + Duration::days(days_ahead)
}

/// Returns the previous occurrence of the given weekday before the
/// date-time.
///
/// When the date-time already falls on that weekday the result is 7 days
/// earlier.
pub fn to_previous(date_time: NaiveDateTime, weekday: Weekday) -> NaiveDateTime {
    let start = date_time.weekday().num_days_from_monday() as i64;
    let end = weekday.num_days_from_monday() as i64;

    let days_back = if end >= start {
        start + 7 - end
    } else {
        start - end
    };
    date_time - Duration::days(days_back)
}

/// Checks whether the date falls on a weekend (Saturday or Sunday).
///
/// Not culture aware; the weekend is always Saturday and Sunday.
pub fn is_weekend(date: &impl Datelike) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Checks whether the date falls on a weekday (not Saturday or Sunday).
pub fn is_weekday(date: &impl Datelike) -> bool {
    !is_weekend(date)
}

/// Checks whether a date is an anniversary of the comparison date: the
/// same month and day, at least one year later.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use niceties::time::is_anniversary_of;
///
/// let original = NaiveDate::from_ymd_opt(2015, 11, 1).unwrap();
/// let next_year = NaiveDate::from_ymd_opt(2016, 11, 1).unwrap();
/// assert!(is_anniversary_of(&next_year, &original));
/// assert!(!is_anniversary_of(&original, &original));
/// ```
pub fn is_anniversary_of(date: &impl Datelike, comparison: &impl Datelike) -> bool {
    date.year() > comparison.year()
        && date.month() == comparison.month()
        && date.day() == comparison.day()
}
