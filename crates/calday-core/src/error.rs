use thiserror::Error;

/// Errors produced while bringing outside data into a [`Date`](crate::Date).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    #[error("Parse error: cannot parse {input:?} as YYYY-MM-DD: {kind}")]
    Parse { input: String, kind: ParseErrorKind },

    #[error("Layout error: {0}")]
    Layout(String),

    #[error("Type mismatch: {kind} {value} is not a meaningful date")]
    TypeMismatch { kind: &'static str, value: String },
}

impl DateError {
    #[must_use]
    pub fn parse(input: impl Into<String>, kind: ParseErrorKind) -> Self {
        Self::Parse {
            input: input.into(),
            kind,
        }
    }

    /// Returns the parse failure classification, if this is a parse error.
    #[must_use]
    pub const fn parse_kind(&self) -> Option<ParseErrorKind> {
        match self {
            Self::Parse { kind, .. } => Some(*kind),
            Self::Layout(_) | Self::TypeMismatch { .. } => None,
        }
    }
}

/// Why a piece of text was rejected as a date.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    #[error("text does not match the YYYY-MM-DD layout")]
    Layout,

    #[error("extra text after the date")]
    ExtraText,

    #[error("month out of range")]
    MonthOutOfRange,

    #[error("day out of range")]
    DayOutOfRange,
}

pub type DateResult<T> = std::result::Result<T, DateError>;
