//! Scan, text and serde contracts as seen by a caller moving dates in and out of storage.

use calday_core::{Date, DateError, ExternalValue, IntoExternal, Scan, TextMarshal};
use calday_test::INVALID_TEXT;
use chrono::{FixedOffset, NaiveTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Row {
    id: u32,
    due: Date,
    done: Option<Date>,
}

fn assert_midnight(date: Date) {
    assert_eq!(date.as_naive().time(), NaiveTime::MIN, "{date}");
}

#[test_log::test]
fn scan_contract() {
    let cases: Vec<(ExternalValue, &str, bool)> = vec![
        (ExternalValue::from(b"invalid".as_slice()), "0001-01-01", true),
        (ExternalValue::from("invalid"), "0001-01-01", true),
        (ExternalValue::from("2020-13-01"), "0001-01-01", true),
        (ExternalValue::from("2020-01-32"), "0001-01-01", true),
        (ExternalValue::from("-0001-01-01"), "0001-01-01", true),
        (ExternalValue::from("2020-01-01 10:00:00"), "0001-01-01", true),
        (ExternalValue::Integer(20_200_102), "0001-01-01", true),
        (ExternalValue::Null, "0001-01-01", false),
        (ExternalValue::from(""), "0001-01-01", false),
        (ExternalValue::from(b"".as_slice()), "0001-01-01", false),
        (ExternalValue::from(b"2020-01-02".as_slice()), "2020-01-02", false),
        (ExternalValue::from("2020-01-02"), "2020-01-02", false),
        (
            ExternalValue::from(Utc.with_ymd_and_hms(2020, 1, 1, 12, 0, 0).unwrap()),
            "2020-01-01",
            false,
        ),
    ];

    for (value, expected, expect_err) in cases {
        let mut date = Date::new(2000, 6, 15);
        let description = format!("{value:?}");
        let result = date.scan(value);

        assert_eq!(result.is_err(), expect_err, "{description}");
        assert_eq!(date.to_string(), expected, "{description}");
        assert_midnight(date);
    }
}

#[test]
fn scan_type_mismatch_is_distinct_from_parse_error() {
    let mut date = Date::new(2000, 6, 15);
    let err = date.scan(ExternalValue::Boolean(false)).unwrap_err();
    assert!(matches!(err, DateError::TypeMismatch { kind: "boolean", .. }));
    assert!(date.is_zero());
}

#[test]
fn scan_late_evening_with_offset_keeps_local_date() {
    let offset = FixedOffset::west_opt(5 * 3600).unwrap();
    let ts = offset.with_ymd_and_hms(2020, 3, 1, 23, 30, 0).unwrap();

    let mut date = Date::default();
    date.scan(ExternalValue::from(ts)).unwrap();
    assert_eq!(date, Date::new(2020, 3, 1));
}

#[test]
fn value_is_midnight_for_normalized_dates() {
    for (date, expected) in [
        (Date::default(), (1, 1, 1)),
        (Date::new(2020, 1, 32), (2020, 2, 1)),
        (Date::new(2020, 1, 0), (2019, 12, 31)),
    ] {
        let ExternalValue::Timestamp(ts) = date.to_external() else {
            panic!("expected a timestamp for {date}");
        };
        let expected = Utc
            .with_ymd_and_hms(expected.0, expected.1, expected.2, 0, 0, 0)
            .unwrap();
        assert_eq!(ts, expected);
    }
}

#[test]
fn unmarshal_text_contract() {
    for text in INVALID_TEXT {
        let mut date = Date::new(2000, 6, 15);
        assert!(date.unmarshal_text(text.as_bytes()).is_err(), "{text:?}");
        assert!(date.is_zero(), "{text:?}");
        assert_midnight(date);
    }

    let mut date = Date::new(2000, 6, 15);
    date.unmarshal_text(b"").unwrap();
    assert!(date.is_zero());

    date.unmarshal_text(b"2020-01-31").unwrap();
    assert_eq!(date.marshal_text(), b"2020-01-31");
}

#[test]
fn marshal_text_of_normalized_dates() {
    assert_eq!(Date::default().marshal_text(), b"0001-01-01");
    assert_eq!(Date::new(-1, 1, 1).marshal_text(), b"-0001-01-01");
    assert_eq!(Date::new(2020, 1, 32).marshal_text(), b"2020-02-01");
}

#[test]
fn serde_in_a_struct() {
    let row = Row {
        id: 7,
        due: Date::new(2020, 1, 32),
        done: None,
    };
    let json = serde_json::to_string(&row).unwrap();
    assert_eq!(json, r#"{"id":7,"due":"2020-02-01","done":null}"#);

    let back: Row = serde_json::from_str(&json).unwrap();
    assert_eq!(back, row);

    let row: Row = serde_json::from_str(r#"{"id":1,"due":"","done":"2020-02-29"}"#).unwrap();
    assert!(row.due.is_zero());
    assert_eq!(row.done, Some(Date::new(2020, 2, 29)));

    assert!(serde_json::from_str::<Row>(r#"{"id":1,"due":"2020/01/01","done":null}"#).is_err());
}
