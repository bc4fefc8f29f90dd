//! Diesel mappings for [`Date`] on `PostgreSQL`.
//!
//! `DATE` columns map directly. `TIMESTAMP` and `TIMESTAMPTZ` columns are truncated to
//! their civil date on read and written as midnight UTC. `TEXT` columns use the strict
//! `YYYY-MM-DD` form. SQL `NULL` reads as the zero value in every case.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use diesel::deserialize::{self, FromSql};
use diesel::pg::{Pg, PgValue};
use diesel::serialize::{self, IsNull, Output, ToSql};
use diesel::sql_types::{Date as SqlDate, Text, Timestamp, Timestamptz};
use std::io::Write;

use crate::convert::{ExternalValue, Scan, TextMarshal};
use crate::date::Date;

/// Runs a raw column value through [`Scan`].
fn scanned(value: ExternalValue) -> deserialize::Result<Date> {
    let mut date = Date::zero();
    date.scan(value)?;
    Ok(date)
}

fn null_as_zero(
    bytes: Option<PgValue<'_>>,
    from_sql: impl FnOnce(PgValue<'_>) -> deserialize::Result<Date>,
) -> deserialize::Result<Date> {
    bytes.map_or_else(|| Ok(Date::zero()), from_sql)
}

impl FromSql<SqlDate, Pg> for Date {
    fn from_sql(bytes: PgValue<'_>) -> deserialize::Result<Self> {
        let date = <NaiveDate as FromSql<SqlDate, Pg>>::from_sql(bytes)?;
        Ok(Self::from(date))
    }

    fn from_nullable_sql(bytes: Option<PgValue<'_>>) -> deserialize::Result<Self> {
        null_as_zero(bytes, <Self as FromSql<SqlDate, Pg>>::from_sql)
    }
}

impl ToSql<SqlDate, Pg> for Date {
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Pg>) -> serialize::Result {
        let date = NaiveDate::from(*self);
        <NaiveDate as ToSql<SqlDate, Pg>>::to_sql(&date, &mut out.reborrow())
    }
}

impl FromSql<Timestamp, Pg> for Date {
    fn from_sql(bytes: PgValue<'_>) -> deserialize::Result<Self> {
        let ts = <NaiveDateTime as FromSql<Timestamp, Pg>>::from_sql(bytes)?;
        scanned(ExternalValue::from(ts))
    }

    fn from_nullable_sql(bytes: Option<PgValue<'_>>) -> deserialize::Result<Self> {
        null_as_zero(bytes, <Self as FromSql<Timestamp, Pg>>::from_sql)
    }
}

impl ToSql<Timestamp, Pg> for Date {
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Pg>) -> serialize::Result {
        <NaiveDateTime as ToSql<Timestamp, Pg>>::to_sql(self.as_naive(), out)
    }
}

impl FromSql<Timestamptz, Pg> for Date {
    fn from_sql(bytes: PgValue<'_>) -> deserialize::Result<Self> {
        let ts = <DateTime<Utc> as FromSql<Timestamptz, Pg>>::from_sql(bytes)?;
        scanned(ExternalValue::from(ts))
    }

    fn from_nullable_sql(bytes: Option<PgValue<'_>>) -> deserialize::Result<Self> {
        null_as_zero(bytes, <Self as FromSql<Timestamptz, Pg>>::from_sql)
    }
}

impl ToSql<Timestamptz, Pg> for Date {
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Pg>) -> serialize::Result {
        let ts = self.timestamp();
        <DateTime<Utc> as ToSql<Timestamptz, Pg>>::to_sql(&ts, &mut out.reborrow())
    }
}

impl FromSql<Text, Pg> for Date {
    fn from_sql(bytes: PgValue<'_>) -> deserialize::Result<Self> {
        scanned(ExternalValue::from(bytes.as_bytes()))
    }

    fn from_nullable_sql(bytes: Option<PgValue<'_>>) -> deserialize::Result<Self> {
        null_as_zero(bytes, <Self as FromSql<Text, Pg>>::from_sql)
    }
}

impl ToSql<Text, Pg> for Date {
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Pg>) -> serialize::Result {
        out.write_all(&self.marshal_text())?;
        Ok(IsNull::No)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DateError;

    #[test]
    fn scanned_text_column() {
        let date = scanned(ExternalValue::from(b"2020-02-29".as_slice())).unwrap();
        assert_eq!(date, Date::new(2020, 2, 29));

        let date = scanned(ExternalValue::from(b"".as_slice())).unwrap();
        assert!(date.is_zero());
    }

    #[test]
    fn scanned_text_column_error_keeps_date_error() {
        let err = scanned(ExternalValue::from(b"2020-13-01".as_slice())).unwrap_err();
        let err = err.downcast::<DateError>().unwrap();
        assert!(matches!(*err, DateError::Parse { .. }));
    }

    #[test]
    fn null_column_reads_as_zero() {
        let reads = [
            <Date as FromSql<SqlDate, Pg>>::from_nullable_sql(None),
            <Date as FromSql<Timestamp, Pg>>::from_nullable_sql(None),
            <Date as FromSql<Timestamptz, Pg>>::from_nullable_sql(None),
            <Date as FromSql<Text, Pg>>::from_nullable_sql(None),
        ];
        for date in reads {
            assert_eq!(date.unwrap(), Date::zero());
        }
    }

    #[test]
    fn null_as_zero_skips_the_decoder() {
        let date = null_as_zero(None, |_| Ok(Date::new(2020, 1, 1))).unwrap();
        assert!(date.is_zero());
    }

    #[test]
    fn scanned_timestamp_column_truncates() {
        let ts = NaiveDate::from_ymd_opt(2021, 6, 30)
            .unwrap()
            .and_hms_opt(18, 45, 0)
            .unwrap();
        assert_eq!(
            scanned(ExternalValue::from(ts)).unwrap(),
            Date::new(2021, 6, 30)
        );
    }
}
