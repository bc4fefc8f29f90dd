//! A calendar date value type: year, month and day with no time of day and no
//! timezone.
//!
//! [`Date::new`] never fails and carries out-of-range fields into neighbouring months
//! and years, while [`Date::parse`] validates untrusted text strictly.
//!
//! ```
//! use calday_core::Date;
//!
//! let d1 = Date::new(2020, 1, 1);
//! let d2: Date = "2020-01-15".parse().unwrap();
//!
//! assert!(d1.before(d2));
//! assert_eq!(d2.sub(d1), 14.0);
//! assert_eq!(d2.format("%A, %B %d").unwrap(), "Wednesday, January 15");
//! assert!(Date::parse("2020-01-50").is_err());
//! ```

pub mod convert;
pub mod date;
pub mod db;
pub mod error;
pub mod format;

pub use convert::{ExternalValue, IntoExternal, Scan, TextMarshal};
pub use date::Date;
pub use error::{DateError, DateResult, ParseErrorKind};
