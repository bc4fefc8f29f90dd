//! Text forms of a [`Date`].
//!
//! The canonical form is the ISO 8601 extended calendar date, `YYYY-MM-DD`. Parsing is
//! strict: four-digit unsigned year, two-digit month and day, nothing before or after.
//! Printing also covers dates the parser refuses, so negative years print as
//! `-0001-01-01` and years past 9999 print all their digits.
//!
//! [`Date::format`] renders through chrono's strftime vocabulary. The specifiers most
//! useful for a date are:
//!
//! | Specifier | Example | Meaning |
//! |-----------|---------|---------|
//! | `%Y` | `2020` | year |
//! | `%m` | `01` | zero-padded month |
//! | `%d` | `05` | zero-padded day |
//! | `%e` | ` 5` | space-padded day |
//! | `%B` | `January` | full month name |
//! | `%b` | `Jan` | abbreviated month name |
//! | `%A` | `Wednesday` | full weekday name |
//! | `%a` | `Wed` | abbreviated weekday name |
//! | `%j` | `005` | day of the year |
//! | `%%` | `%` | literal percent sign |
//!
//! Time specifiers render midnight. Offset and zone specifiers are rejected because a
//! date has neither.

use std::fmt::{self, Write as _};
use std::str::FromStr;

use chrono::NaiveDate;
use chrono::format::StrftimeItems;

use crate::date::Date;
use crate::error::{DateError, DateResult, ParseErrorKind};

/// Length of `YYYY-MM-DD`.
const ISO_LEN: usize = 10;

impl Date {
    /// ## Summary
    /// Parses an ISO 8601 extended date such as `2020-01-31`.
    ///
    /// Unlike [`Date::new`], out-of-range fields are rejected rather than carried:
    /// `2020-01-50` and `2020-13-01` are errors.
    ///
    /// ## Errors
    /// Returns [`DateError::Parse`] if the text is not exactly `YYYY-MM-DD` or does not
    /// name a real calendar day.
    pub fn parse(text: &str) -> DateResult<Self> {
        parse_iso(text)
            .map(Self::from_civil)
            .map_err(|kind| {
                tracing::debug!(input = %text, %kind, "Rejected date text");
                DateError::parse(text, kind)
            })
    }

    /// ## Summary
    /// Renders the date through a strftime layout, e.g. `"%B %d, %Y"`.
    ///
    /// ## Errors
    /// Returns [`DateError::Layout`] if the layout contains an unknown specifier or one
    /// that needs data a date does not have.
    pub fn format(&self, layout: &str) -> DateResult<String> {
        let items = StrftimeItems::new(layout)
            .parse()
            .map_err(|err| DateError::Layout(format!("{layout:?}: {err}")))?;

        let mut out = String::new();
        write!(out, "{}", self.as_naive().format_with_items(items.iter())).map_err(|_err| {
            DateError::Layout(format!("{layout:?}: specifier not applicable to a date"))
        })?;
        Ok(out)
    }
}

impl FromStr for Date {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let year = self.year();
        if year < 0 {
            f.write_char('-')?;
        }
        write!(
            f,
            "{:04}-{:02}-{:02}",
            year.unsigned_abs(),
            self.month_number(),
            self.day()
        )
    }
}

fn parse_iso(text: &str) -> Result<NaiveDate, ParseErrorKind> {
    let bytes = text.as_bytes();
    let head: [u8; ISO_LEN] = bytes
        .get(..ISO_LEN)
        .and_then(|head| head.try_into().ok())
        .ok_or(ParseErrorKind::Layout)?;

    if head[4] != b'-' || head[7] != b'-' {
        return Err(ParseErrorKind::Layout);
    }
    let year = digits(&head[..4]).ok_or(ParseErrorKind::Layout)?;
    let month = digits(&head[5..7]).ok_or(ParseErrorKind::Layout)?;
    let day = digits(&head[8..]).ok_or(ParseErrorKind::Layout)?;

    if bytes.len() > ISO_LEN {
        return Err(ParseErrorKind::ExtraText);
    }
    if !(1..=12).contains(&month) {
        return Err(ParseErrorKind::MonthOutOfRange);
    }

    let year = i32::try_from(year).map_err(|_err| ParseErrorKind::Layout)?;
    NaiveDate::from_ymd_opt(year, month, day).ok_or(ParseErrorKind::DayOutOfRange)
}

fn digits(bytes: &[u8]) -> Option<u32> {
    bytes.iter().try_fold(0u32, |acc, &b| {
        b.is_ascii_digit()
            .then(|| acc * 10 + u32::from(b - b'0'))
    })
}
