//! Tests for the convert module.

use std::thread;

use super::*;
use crate::models::Zone;

fn utc(date: &str, time: &str, timezone: &str) -> String {
    convert(date, time, timezone)
        .expect("Failed to convert")
        .to_string()
}

#[test]
fn test_utc_is_identity() {
    for (date, time) in [
        ("2024-06-15", "14:00"),
        ("2024-01-01", "00:00"),
        ("2023-12-31", "23:59"),
        ("2024-02-29", "12:34"),
    ] {
        assert_eq!(utc(date, time, "UTC"), format!("{date}T{time}:00Z"));
    }
}

#[test]
fn test_fixed_offset_zone() {
    assert_eq!(
        utc("2024-06-15", "14:00", "America/Regina"),
        "2024-06-15T20:00:00Z"
    );
    assert_eq!(
        utc("2024-01-15", "14:00", "America/Regina"),
        "2024-01-15T20:00:00Z"
    );
}

#[test]
fn test_same_wall_time_across_dst() {
    assert_eq!(
        utc("2024-01-15", "12:00", "America/New_York"),
        "2024-01-15T17:00:00Z"
    );
    assert_eq!(
        utc("2024-07-15", "12:00", "America/New_York"),
        "2024-07-15T16:00:00Z"
    );
}

#[test]
fn test_zones_east_of_utc() {
    assert_eq!(
        utc("2024-07-01", "12:00", "Europe/Paris"),
        "2024-07-01T10:00:00Z"
    );
    assert_eq!(
        utc("2024-06-15", "09:00", "Asia/Kolkata"),
        "2024-06-15T03:30:00Z"
    );
}

#[test]
fn test_southern_hemisphere_dst() {
    assert_eq!(
        utc("2024-01-15", "12:00", "Australia/Sydney"),
        "2024-01-15T01:00:00Z"
    );
    assert_eq!(
        utc("2024-07-15", "12:00", "Australia/Sydney"),
        "2024-07-15T02:00:00Z"
    );
}

#[test]
fn test_date_rolls_back_across_midnight() {
    assert_eq!(
        utc("2024-01-01", "00:30", "Europe/Paris"),
        "2023-12-31T23:30:00Z"
    );
}

#[test]
fn test_date_rolls_forward_across_midnight() {
    assert_eq!(
        utc("2024-12-31", "22:00", "America/Los_Angeles"),
        "2025-01-01T06:00:00Z"
    );
}

#[test]
fn test_gap_uses_offset_before_transition() {
    let local = LocalDateTime::parse("2024-03-10", "02:30", "America/New_York")
        .expect("Failed to parse");
    let (instant, resolution) = local.resolve().expect("Failed to resolve");

    assert_eq!(resolution, Resolution::Gap);
    assert_eq!(instant.to_string(), "2024-03-10T07:30:00Z");
}

#[test]
fn test_fold_uses_earlier_instant() {
    let local = LocalDateTime::parse("2024-11-03", "01:30", "America/New_York")
        .expect("Failed to parse");
    let (instant, resolution) = local.resolve().expect("Failed to resolve");

    assert_eq!(resolution, Resolution::Fold);
    assert_eq!(instant.to_string(), "2024-11-03T05:30:00Z");
}

#[test]
fn test_gap_and_fold_east_of_utc() {
    let (gap, resolution) = LocalDateTime::parse("2024-03-31", "02:30", "Europe/Paris")
        .and_then(|local| local.resolve())
        .expect("Failed to resolve gap");
    assert_eq!(resolution, Resolution::Gap);
    assert_eq!(gap.to_string(), "2024-03-31T01:30:00Z");

    let (fold, resolution) = LocalDateTime::parse("2024-10-27", "02:30", "Europe/Paris")
        .and_then(|local| local.resolve())
        .expect("Failed to resolve fold");
    assert_eq!(resolution, Resolution::Fold);
    assert_eq!(fold.to_string(), "2024-10-27T00:30:00Z");
}

#[test]
fn test_exact_resolution_outside_transitions() {
    let (_, resolution) = LocalDateTime::parse("2024-03-10", "03:30", "America/New_York")
        .and_then(|local| local.resolve())
        .expect("Failed to resolve");
    assert_eq!(resolution, Resolution::Exact);
}

#[test]
fn test_round_trip_reproduces_wall_clock() {
    let cases = [
        ("2024-01-15", "12:00", "America/New_York"),
        ("2024-07-15", "08:45", "America/New_York"),
        ("2024-06-15", "14:00", "America/Regina"),
        ("2024-01-01", "00:30", "Europe/Paris"),
        ("2024-06-15", "23:59", "Asia/Kolkata"),
        ("2024-11-03", "01:30", "America/New_York"),
        ("2024-02-29", "06:15", "Pacific/Auckland"),
        ("2024-06-15", "14:00", "UTC"),
    ];

    for (date, time, timezone) in cases {
        let zone = Zone::get(timezone).expect("Failed to look up zone");
        let instant = convert(date, time, timezone).expect("Failed to convert");
        let wall = instant.to_wall_clock(&zone);

        assert_eq!(wall.date_string(), date, "date for {date} {time} {timezone}");
        assert_eq!(wall.time_string(), time, "time for {date} {time} {timezone}");
    }
}

#[test]
fn test_gap_round_trip_moves_forward() {
    let zone = Zone::get("America/New_York").expect("Failed to look up zone");
    let instant = convert("2024-03-10", "02:30", "America/New_York").expect("Failed to convert");

    assert_eq!(instant.to_wall_clock(&zone).to_string(), "2024-03-10 03:30");
}

#[test]
fn test_conversion_is_pure() {
    let first = convert("2024-07-15", "12:00", "America/New_York").expect("Failed to convert");
    let second = convert("2024-07-15", "12:00", "America/New_York").expect("Failed to convert");
    assert_eq!(first, second);
}

#[test]
fn test_concurrent_conversions_are_independent() {
    let handles: Vec<_> = ["America/New_York", "Europe/Paris", "Asia/Kolkata", "UTC"]
        .into_iter()
        .map(|timezone| {
            thread::spawn(move || {
                (0..50)
                    .map(|_| {
                        convert("2024-07-15", "12:00", timezone)
                            .expect("Failed to convert")
                            .to_string()
                    })
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let expected = [
        "2024-07-15T16:00:00Z",
        "2024-07-15T10:00:00Z",
        "2024-07-15T06:30:00Z",
        "2024-07-15T12:00:00Z",
    ];
    for (handle, expected) in handles.into_iter().zip(expected) {
        let results = handle.join().expect("Conversion thread panicked");
        assert!(results.iter().all(|r| r == expected));
    }
}

#[test]
fn test_invalid_timezone() {
    let err = convert("2024-06-15", "14:00", "Not/AZone").unwrap_err();
    assert!(matches!(err, HealthError::InvalidTimezone { ref name } if name == "Not/AZone"));
}

#[test]
fn test_malformed_time() {
    let err = convert("2024-06-15", "25:99", "UTC").unwrap_err();
    assert!(matches!(err, HealthError::InvalidInput { ref field, .. } if field == "time"));
}

#[test]
fn test_malformed_date() {
    let err = convert("2024-02-30", "12:00", "America/New_York").unwrap_err();
    assert!(matches!(err, HealthError::InvalidInput { ref field, .. } if field == "date"));
}

#[test]
fn test_last_representable_day() {
    assert_eq!(utc("9999-12-30", "12:00", "UTC"), "9999-12-30T12:00:00Z");
    assert_eq!(utc("9999-12-30", "22:00", "UTC"), "9999-12-30T22:00:00Z");
}

#[test]
fn test_past_end_of_range_is_rejected() {
    for (date, time) in [("9999-12-30", "23:00"), ("9999-12-31", "00:00")] {
        let err = convert(date, time, "UTC").unwrap_err();
        assert!(
            matches!(err, HealthError::InvalidInput { ref field, .. } if field == "date and time"),
            "expected range error for {date} {time}, got {err:?}"
        );
    }
}

#[test]
fn test_earliest_four_digit_year() {
    assert_eq!(utc("0000-01-01", "00:00", "UTC"), "0000-01-01T00:00:00Z");
}

#[test]
fn test_resolution_display() {
    assert_eq!(Resolution::Exact.to_string(), "exact");
    assert_eq!(Resolution::Gap.to_string(), "gap");
    assert_eq!(Resolution::Fold.to_string(), "fold");
}
