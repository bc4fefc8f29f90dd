//! The [`Date`] value type.

use std::ops;

use chrono::{DateTime, Datelike, Month, NaiveDate, NaiveDateTime, NaiveTime, Utc, Weekday};
use diesel::{AsExpression, FromSqlRow};

/// Days in one 400-year Gregorian cycle.
const DAYS_PER_CYCLE: i64 = 146_097;

/// A calendar date with no time of day and no timezone.
///
/// Internally a `NaiveDateTime` pinned to midnight. The naive datetime carries no
/// offset, so a date never picks up a shift from a zone. The default value is
/// `0001-01-01`.
///
/// ```
/// use calday_core::Date;
///
/// let jan = Date::new(2020, 1, 32);
/// assert_eq!(jan.to_string(), "2020-02-01");
/// assert!(jan.equal(Date::new(2020, 2, 1)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, AsExpression, FromSqlRow)]
#[diesel(sql_type = diesel::sql_types::Date)]
#[diesel(sql_type = diesel::sql_types::Timestamp)]
#[diesel(sql_type = diesel::sql_types::Timestamptz)]
#[diesel(sql_type = diesel::sql_types::Text)]
pub struct Date {
    instant: NaiveDateTime,
}

impl Date {
    /// ## Summary
    /// Builds a date from year, month and day, carrying out-of-range values into
    /// neighbouring months and years.
    ///
    /// Month 13 of 2020 is January 2021, day 0 of January is the last day of the
    /// previous December and day -1 is the day before that. This never fails: results
    /// beyond the calendar engine's range saturate at its first or last date.
    #[must_use]
    pub fn new(year: i32, month: i32, day: i32) -> Self {
        Self::from_civil(normalize(year, month, day))
    }

    /// Same as [`Date::new`] with a typed month.
    #[must_use]
    pub fn from_month(year: i32, month: Month, day: i32) -> Self {
        let month = i32::try_from(month.number_from_month()).unwrap_or(1);
        Self::new(year, month, day)
    }

    /// The zero value, `0001-01-01`.
    #[must_use]
    pub fn zero() -> Self {
        Self::new(1, 1, 1)
    }

    /// Every way into the type goes through here, so the stored instant is always
    /// midnight.
    pub(crate) fn from_civil(date: NaiveDate) -> Self {
        Self {
            instant: date.and_time(NaiveTime::MIN),
        }
    }

    /// Reports whether this is the zero value, `0001-01-01`.
    #[must_use]
    pub fn is_zero(self) -> bool {
        self == Self::zero()
    }

    #[must_use]
    pub fn year(self) -> i32 {
        self.instant.year()
    }

    #[must_use]
    pub fn month(self) -> Month {
        u8::try_from(self.instant.month())
            .ok()
            .and_then(|month| Month::try_from(month).ok())
            .unwrap_or(Month::January)
    }

    /// Month of the year, 1 through 12.
    #[must_use]
    pub fn month_number(self) -> u32 {
        self.instant.month()
    }

    #[must_use]
    pub fn day(self) -> u32 {
        self.instant.day()
    }

    #[must_use]
    pub fn weekday(self) -> Weekday {
        self.instant.weekday()
    }

    /// Reports whether `self` falls strictly before `other`.
    #[must_use]
    pub fn before(self, other: Self) -> bool {
        self.instant < other.instant
    }

    /// Reports whether `self` falls strictly after `other`.
    #[must_use]
    pub fn after(self, other: Self) -> bool {
        self.instant > other.instant
    }

    /// Reports whether both dates name the same civil year, month and day,
    /// regardless of how each was constructed.
    #[must_use]
    pub fn equal(self, other: Self) -> bool {
        (self.year(), self.month_number(), self.day())
            == (other.year(), other.month_number(), other.day())
    }

    /// ## Summary
    /// Returns `self - other` in days.
    ///
    /// Both sides sit at midnight, so the result is always a whole number.
    #[must_use]
    #[expect(
        clippy::should_implement_trait,
        reason = "`ops::Sub` is implemented too; the named method mirrors before/after/equal"
    )]
    pub fn sub(self, other: Self) -> f64 {
        <Self as ops::Sub>::sub(self, other)
    }

    /// The date at midnight UTC.
    #[must_use]
    pub fn timestamp(self) -> DateTime<Utc> {
        self.instant.and_utc()
    }

    /// The stored midnight instant.
    #[must_use]
    pub const fn as_naive(&self) -> &NaiveDateTime {
        &self.instant
    }
}

impl Default for Date {
    fn default() -> Self {
        Self::zero()
    }
}

impl ops::Sub for Date {
    type Output = f64;

    #[expect(
        clippy::cast_precision_loss,
        reason = "hours between representable dates stay well below 2^53"
    )]
    fn sub(self, rhs: Self) -> f64 {
        self.instant.signed_duration_since(rhs.instant).num_hours() as f64 / 24.0
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Self::from_civil(date)
    }
}

impl From<Date> for NaiveDate {
    fn from(date: Date) -> Self {
        date.instant.date()
    }
}

impl From<Date> for NaiveDateTime {
    fn from(date: Date) -> Self {
        date.instant
    }
}

/// Counts days from the first of the carried month, shifting the year by whole
/// 400-year cycles so only the final day number has to fit chrono's range.
fn normalize(year: i32, month: i32, day: i32) -> NaiveDate {
    let months = i64::from(month) - 1;
    let year = i64::from(year) + months.div_euclid(12);
    let month = u32::try_from(months.rem_euclid(12) + 1).unwrap_or(1);

    let cycles = year.div_euclid(400);
    let first_in_cycle = i32::try_from(year.rem_euclid(400))
        .ok()
        .and_then(|year| NaiveDate::from_ymd_opt(year, month, 1))
        .map_or(0, |first| i64::from(first.num_days_from_ce()));
    let days = cycles * DAYS_PER_CYCLE + first_in_cycle + i64::from(day) - 1;

    i32::try_from(days)
        .ok()
        .and_then(NaiveDate::from_num_days_from_ce_opt)
        .unwrap_or_else(|| {
            let below = days < i64::from(NaiveDate::MIN.num_days_from_ce());
            saturate(year, month, day, below)
        })
}

fn saturate(year: i64, month: u32, day: i32, below: bool) -> NaiveDate {
    tracing::warn!(
        year,
        month,
        day,
        "Date outside the supported calendar range, saturating"
    );
    if below { NaiveDate::MIN } else { NaiveDate::MAX }
}
