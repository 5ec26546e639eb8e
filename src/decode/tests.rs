//! Tests for decoder module

use super::*;
use crate::types::JsonValue;
use chrono::{NaiveDate, NaiveDateTime, Timelike};
use pretty_assertions::assert_eq;
use serde::{Deserialize, Serialize};
use serde_json::json;
use serde_with::serde_as;

fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, min, s)
        .unwrap()
}

// ============================================================================
// Date Format Tests
// ============================================================================

#[test]
fn test_date_time_format() {
    assert_eq!(
        DateFormat::DateTime.parse("2024-05-01 13:15:00"),
        Some(at(2024, 5, 1, 13, 15, 0))
    );
    assert_eq!(DateFormat::DateTime.parse("2024-05-01T13:15:00"), None);
    assert_eq!(
        DateFormat::DateTime.format(&at(2024, 5, 1, 13, 15, 0)),
        "2024-05-01 13:15:00"
    );
}

#[test]
fn test_date_time_separated_format() {
    assert_eq!(
        DateFormat::DateTimeSeparated.parse("2024-05-01T06:45:30"),
        Some(at(2024, 5, 1, 6, 45, 30))
    );
    assert_eq!(DateFormat::DateTimeSeparated.parse("2024-05-01 06:45:30"), None);
}

#[test]
fn test_date_time_offset_format() {
    let parsed = DateFormat::parse_offset("2024-05-01T06:45:00+02:00").unwrap();
    assert_eq!(parsed.offset().local_minus_utc(), 7200);
    assert_eq!(parsed.naive_utc(), at(2024, 5, 1, 4, 45, 0));
    assert_eq!(
        DateFormat::DateTimeOffset.parse("2024-05-01T06:45:00+02:00"),
        Some(at(2024, 5, 1, 6, 45, 0))
    );
    assert!(DateFormat::parse_offset("2024-05-01T06:45:00").is_none());
}

#[test]
fn test_date_format() {
    assert_eq!(
        DateFormat::Date.parse("2024-05-01"),
        Some(at(2024, 5, 1, 0, 0, 0))
    );
    assert_eq!(
        DateFormat::parse_date("2024-02-29"),
        NaiveDate::from_ymd_opt(2024, 2, 29)
    );
    assert_eq!(DateFormat::parse_date("01/05/2024"), None);
    assert_eq!(DateFormat::Date.format(&at(2024, 5, 1, 23, 0, 0)), "2024-05-01");
}

#[test]
fn test_distant_past() {
    let sentinel = distant_past();
    assert_eq!(sentinel, at(1, 1, 1, 0, 0, 0));
    assert_eq!(sentinel.hour(), 0);
}

#[serde_as]
#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct Stamped {
    #[serde_as(as = "ApiDateTime")]
    at: NaiveDateTime,
    #[serde_as(as = "Option<ApiDate>")]
    day: Option<NaiveDate>,
    #[serde_as(as = "FlexibleDate")]
    #[serde(default)]
    loose: Option<NaiveDateTime>,
}

#[test]
fn test_adapters_decode() {
    let stamped: Stamped = serde_json::from_value(json!({
        "at": "2023-12-31 23:59:59",
        "day": "2023-12-31",
        "loose": "2023-12-31"
    }))
    .unwrap();
    assert_eq!(stamped.at, at(2023, 12, 31, 23, 59, 59));
    assert_eq!(stamped.day, NaiveDate::from_ymd_opt(2023, 12, 31));
    assert_eq!(stamped.loose, Some(at(2023, 12, 31, 0, 0, 0)));
}

#[test]
fn test_adapters_reject_malformed_strict_date() {
    let err = serde_json::from_value::<Stamped>(json!({ "at": "yesterday" })).unwrap_err();
    assert!(err.to_string().contains("Invalid date: yesterday"));
}

#[test]
fn test_flexible_date_tolerates_garbage_and_absence() {
    let stamped: Stamped =
        serde_json::from_value(json!({ "at": "2023-01-01 00:00:00", "loose": "soon" })).unwrap();
    assert_eq!(stamped.loose, None);
    assert_eq!(stamped.day, None);

    let stamped: Stamped = serde_json::from_value(json!({ "at": "2023-01-01 00:00:00" })).unwrap();
    assert_eq!(stamped.loose, None);
}

#[test]
fn test_adapters_encode() {
    let stamped = Stamped {
        at: at(2023, 6, 1, 8, 0, 0),
        day: NaiveDate::from_ymd_opt(2023, 6, 1),
        loose: None,
    };
    let value = serde_json::to_value(&stamped).unwrap();
    assert_eq!(
        value,
        json!({ "at": "2023-06-01 08:00:00", "day": "2023-06-01", "loose": null })
    );
}

// ============================================================================
// Wire Enum Tests
// ============================================================================

wire_enum! {
    enum Fruit: lenient(Other) {
        Apple => "APPLE",
        Pear => "PEAR",
        Other => "OTHER",
    }
}

wire_enum! {
    enum Color: strict("fruit color") {
        Red => "Red",
        Green => "Green",
    }
}

#[test]
fn test_lenient_enum_falls_back() {
    assert_eq!(Fruit::from_wire("PEAR"), Fruit::Pear);
    assert_eq!(Fruit::from_wire("Banana"), Fruit::Other);
    let fruit: Fruit = serde_json::from_str("\"Banana\"").unwrap();
    assert_eq!(fruit, Fruit::Other);
}

#[test]
fn test_strict_enum_fails() {
    assert_eq!(Color::from_wire("Green").unwrap(), Color::Green);

    let err = Color::from_wire("Blue").unwrap_err();
    assert_eq!(err.to_string(), "Error while decoding. Unknown fruit color: Blue");

    let err = serde_json::from_str::<Color>("\"Blue\"").unwrap_err();
    assert!(err.to_string().contains("Unknown fruit color: Blue"));
}

#[test]
fn test_wire_enum_serializes_wire_string() {
    assert_eq!(serde_json::to_string(&Fruit::Apple).unwrap(), "\"APPLE\"");
    assert_eq!(Color::Red.to_string(), "Red");
    assert_eq!(Fruit::ALL, &[Fruit::Apple, Fruit::Pear, Fruit::Other]);
}

// ============================================================================
// JsonDecoder Tests
// ============================================================================

#[derive(Debug, Deserialize, PartialEq)]
struct Wrapped {
    count: u32,
}

#[test]
fn test_json_decoder_unwraps_envelope() {
    let body = br#"{"sites": {"count": 3}}"#;
    let decoded: Wrapped = JsonDecoder::with_envelope("sites").decode(body).unwrap();
    assert_eq!(decoded, Wrapped { count: 3 });
}

#[test]
fn test_json_decoder_nested_envelope() {
    let body = br#"{"reporters": {"count": 2, "list": [1, 2]}}"#;
    let list: Vec<u32> = JsonDecoder::with_envelope("reporters.list").decode(body).unwrap();
    assert_eq!(list, vec![1, 2]);
}

#[test]
fn test_json_decoder_missing_envelope() {
    let body = br#"{"other": {}}"#;
    let err = JsonDecoder::with_envelope("energy")
        .decode::<JsonValue>(body)
        .unwrap_err();
    assert_eq!(err.to_string(), "Error while decoding. missing 'energy' envelope");
}

#[test]
fn test_json_decoder_envelope_on_non_object() {
    let err = JsonDecoder::with_envelope("energy")
        .decode::<JsonValue>(b"[1, 2]")
        .unwrap_err();
    assert!(err.is_decoding());
}

#[test]
fn test_json_decoder_without_envelope() {
    let decoded: Wrapped = JsonDecoder::new().decode(br#"{"count": 9}"#).unwrap();
    assert_eq!(decoded.count, 9);
}

#[test]
fn test_json_decoder_invalid_json() {
    let err = JsonDecoder::new().decode::<JsonValue>(b"{not json").unwrap_err();
    assert!(err.to_string().starts_with("Error while decoding. Failed to parse JSON"));
}

#[test]
fn test_json_decoder_object() {
    let object = JsonDecoder::new()
        .decode_object(br#"{"data": {"count": 1}}"#)
        .unwrap();
    assert!(object.contains_key("data"));

    let err = JsonDecoder::new().decode_object(b"[]").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Error while decoding. expected a JSON object, found an array"
    );
}

// ============================================================================
// Energy Compare Tests
// ============================================================================

fn compare_body(month: JsonValue) -> Vec<u8> {
    serde_json::to_vec(&json!({
        "energyCompare": {
            "month": month,
            "quarter": { "xAxis": ["Q1"], "2023": { "Q1": 900 } },
            "year": { "xAxis": ["2022", "2023"], "2022": { "2022": 4000 }, "2023": { "2023": 4200 } }
        }
    }))
    .unwrap()
}

#[test]
fn test_energy_compare_reshaping() {
    let body = compare_body(json!({
        "xAxis": ["01", "02"],
        "2023": { "01": 100, "02": 200 },
        "2024": { "01": 110.0 }
    }));
    let compare = decode_energy_compare(&body).unwrap();

    assert_eq!(compare.month.x_axis, vec!["01", "02"]);
    assert_eq!(compare.month.values["2023"]["01"], 100);
    assert_eq!(compare.month.values["2023"]["02"], 200);
    assert_eq!(compare.month.values["2024"]["01"], 110);
    assert!(!compare.month.values.contains_key("xAxis"));
    assert_eq!(compare.quarter.values["2023"]["Q1"], 900);
    assert_eq!(compare.year.values.len(), 2);
}

#[test]
fn test_energy_compare_missing_x_axis_names_section() {
    let body = compare_body(json!({ "2023": { "01": 100 } }));
    let err = decode_energy_compare(&body).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Error while decoding. Error with data from energyCompare in month"
    );
}

#[test]
fn test_energy_compare_bad_value_names_section() {
    let body = compare_body(json!({ "xAxis": ["01"], "2023": { "01": "lots" } }));
    let err = decode_energy_compare(&body).unwrap_err();
    assert!(err.to_string().ends_with("in month"));
}

#[test]
fn test_energy_compare_missing_root() {
    let err = decode_energy_compare(br#"{"month": {}}"#).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Error while decoding. Error with data from energyCompare"
    );
}
