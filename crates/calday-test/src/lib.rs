//! Scenario tables shared by the integration tests in `tests/`.

use calday_core::Date;

/// `(year, month, day)` fed to `Date::new`, with the date it normalizes to.
pub const CONSTRUCTION: &[((i32, i32, i32), &str)] = &[
    ((-1, 1, 1), "-0001-01-01"),
    ((0, 1, 1), "0000-01-01"),
    ((2020, 1, 1), "2020-01-01"),
    ((2020, 1, 32), "2020-02-01"),
    ((2020, 1, 0), "2019-12-31"),
    ((2020, 1, -1), "2019-12-30"),
    ((2020, 12, 32), "2021-01-01"),
    ((2020, 2, 30), "2020-03-01"),
    ((2019, 2, 29), "2019-03-01"),
    ((2020, 13, 1), "2021-01-01"),
    ((2020, 0, 15), "2019-12-15"),
    ((2020, 1, 366), "2020-12-31"),
];

/// Text that `Date::parse` must refuse.
pub const INVALID_TEXT: &[&str] = &[
    "2020/01/02",
    "01/2020/02",
    "01-02-2020",
    "01-02",
    "2020 01 02",
    "-0001-01-01",
    "2020-13-01",
    "2020-01-50",
    "2020-02-30",
    "2020-01-02 10:00:00",
    "invalid",
];

/// Text that `Date::parse` must accept unchanged.
pub const VALID_TEXT: &[&str] = &["0001-01-01", "2020-01-31", "2020-02-29", "1999-12-31"];

#[must_use]
pub fn ymd(date: Date) -> (i32, u32, u32) {
    (date.year(), date.month_number(), date.day())
}

/// Builds a date from a `CONSTRUCTION` row.
#[must_use]
pub fn construct(fields: (i32, i32, i32)) -> Date {
    Date::new(fields.0, fields.1, fields.2)
}
