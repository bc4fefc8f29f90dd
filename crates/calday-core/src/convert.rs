//! Conversions between [`Date`] and values owned by the outside world.
//!
//! [`ExternalValue`] mirrors the value kinds a database driver hands back. [`Scan`]
//! and [`TextMarshal::unmarshal_text`] overwrite the receiver in place and leave it at
//! the zero value whenever they fail.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::date::Date;
use crate::error::{DateError, DateResult, ParseErrorKind};

/// A value read from, or written to, a persistence layer.
#[derive(Debug, Clone, PartialEq)]
pub enum ExternalValue {
    Null,
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Bytes(Vec<u8>),
    Text(String),
    Timestamp(DateTime<FixedOffset>),
}

impl ExternalValue {
    /// Name of the variant, for error messages.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Integer(_) => "integer",
            Self::Float(_) => "float",
            Self::Boolean(_) => "boolean",
            Self::Bytes(_) => "bytes",
            Self::Text(_) => "text",
            Self::Timestamp(_) => "timestamp",
        }
    }
}

impl From<&str> for ExternalValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for ExternalValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&[u8]> for ExternalValue {
    fn from(b: &[u8]) -> Self {
        Self::Bytes(b.to_vec())
    }
}

impl From<Vec<u8>> for ExternalValue {
    fn from(b: Vec<u8>) -> Self {
        Self::Bytes(b)
    }
}

impl From<i64> for ExternalValue {
    fn from(i: i64) -> Self {
        Self::Integer(i)
    }
}

impl From<f64> for ExternalValue {
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}

impl From<bool> for ExternalValue {
    fn from(b: bool) -> Self {
        Self::Boolean(b)
    }
}

impl From<DateTime<FixedOffset>> for ExternalValue {
    fn from(ts: DateTime<FixedOffset>) -> Self {
        Self::Timestamp(ts)
    }
}

impl From<DateTime<Utc>> for ExternalValue {
    fn from(ts: DateTime<Utc>) -> Self {
        Self::Timestamp(ts.fixed_offset())
    }
}

/// Read as UTC.
impl From<NaiveDateTime> for ExternalValue {
    fn from(ts: NaiveDateTime) -> Self {
        Self::from(ts.and_utc())
    }
}

impl From<NaiveDate> for ExternalValue {
    fn from(date: NaiveDate) -> Self {
        Self::from(Date::from(date).timestamp())
    }
}

impl<T: Into<Self>> From<Option<T>> for ExternalValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

/// Overwrites a value in place from an [`ExternalValue`].
pub trait Scan {
    /// ## Errors
    /// Returns an error if the value cannot be read as `Self`.
    fn scan(&mut self, value: ExternalValue) -> DateResult<()>;
}

/// Hands a value to a persistence layer.
pub trait IntoExternal {
    #[must_use]
    fn to_external(&self) -> ExternalValue;
}

/// Byte-level text encoding.
pub trait TextMarshal {
    #[must_use]
    fn marshal_text(&self) -> Vec<u8>;

    /// ## Errors
    /// Returns an error if the bytes are not a valid encoding of `Self`.
    fn unmarshal_text(&mut self, data: &[u8]) -> DateResult<()>;
}

impl Scan for Date {
    /// ## Summary
    /// Null, empty text and empty bytes read as the zero value. Non-empty text or
    /// bytes go through [`Date::parse`]. A timestamp is truncated to its civil date in
    /// its own offset.
    ///
    /// ## Errors
    /// Returns [`DateError::Parse`] for unparsable text and [`DateError::TypeMismatch`]
    /// for numbers and booleans. Either way `self` is reset to the zero value.
    fn scan(&mut self, value: ExternalValue) -> DateResult<()> {
        let scanned = match value {
            ExternalValue::Null => Ok(Self::zero()),
            ExternalValue::Bytes(bytes) => scan_text(&bytes),
            ExternalValue::Text(text) => scan_text(text.as_bytes()),
            ExternalValue::Timestamp(ts) => Ok(Self::from_civil(ts.date_naive())),
            other @ (ExternalValue::Integer(_)
            | ExternalValue::Float(_)
            | ExternalValue::Boolean(_)) => {
                tracing::debug!(kind = other.kind(), "Unsupported value scanned into date");
                Err(DateError::TypeMismatch {
                    kind: other.kind(),
                    value: format!("{other:?}"),
                })
            }
        };

        match scanned {
            Ok(date) => {
                *self = date;
                Ok(())
            }
            Err(err) => {
                *self = Self::zero();
                Err(err)
            }
        }
    }
}

fn scan_text(bytes: &[u8]) -> DateResult<Date> {
    if bytes.is_empty() {
        return Ok(Date::zero());
    }
    let text = std::str::from_utf8(bytes).map_err(|_err| {
        DateError::parse(bytes.escape_ascii().to_string(), ParseErrorKind::Layout)
    })?;
    Date::parse(text)
}

impl IntoExternal for Date {
    /// Always a timestamp at civil midnight with a zero offset.
    fn to_external(&self) -> ExternalValue {
        ExternalValue::from(self.timestamp())
    }
}

impl TextMarshal for Date {
    fn marshal_text(&self) -> Vec<u8> {
        self.to_string().into_bytes()
    }

    /// Empty input reads as the zero value.
    fn unmarshal_text(&mut self, data: &[u8]) -> DateResult<()> {
        self.scan(ExternalValue::from(data))
    }
}

impl Serialize for Date {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Date {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = Option::<String>::deserialize(deserializer)?;
        let mut date = Self::zero();
        date.unmarshal_text(text.unwrap_or_default().as_bytes())
            .map_err(serde::de::Error::custom)?;
        Ok(date)
    }
}
