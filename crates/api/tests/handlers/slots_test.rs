use axum::http::StatusCode;
use chrono::{NaiveDate, NaiveDateTime};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use teetime_core::models::{
    booking::{AvailableSlotsResponse, CheckSlotResponse},
    duration::DurationConfig,
    venue::OperatingHours,
};

use crate::test_utils::TestContext;

fn at(hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 6, 1)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}

#[tokio::test]
async fn test_check_slot_partial_overlap() {
    let server = TestContext::new().server();

    let response = server
        .post("/api/slots/check")
        .json(&json!({
            "candidate": { "start": "2024-06-01T14:30:00", "end": "2024-06-01T15:30:00" },
            "existing": [
                { "start": "2024-06-01T14:00:00", "end": "2024-06-01T15:00:00" }
            ]
        }))
        .await;
    response.assert_status_ok();

    let body: CheckSlotResponse = response.json();
    assert!(!body.available);
    assert_eq!(body.duration_minutes, 60);
    assert!(!body.crosses_midnight);
}

#[tokio::test]
async fn test_check_slot_adjacent_is_available() {
    let server = TestContext::new().server();

    let response = server
        .post("/api/slots/check")
        .json(&json!({
            "candidate": { "start": "2024-06-01T15:00:00", "end": "2024-06-01T16:00:00" },
            "existing": [
                { "start": "2024-06-01T14:00:00", "end": "2024-06-01T15:00:00" }
            ]
        }))
        .await;

    let body: CheckSlotResponse = response.json();
    assert!(body.available);
}

#[tokio::test]
async fn test_check_slot_admin_block_counts_as_reservation() {
    let server = TestContext::new().server();

    let response = server
        .post("/api/slots/check")
        .json(&json!({
            "candidate": { "start": "2024-06-01T10:00:00", "end": "2024-06-01T11:00:00" },
            "existing": [
                {
                    "start": "2024-06-01T09:00:00",
                    "end": "2024-06-01T12:00:00",
                    "kind": "admin_block"
                }
            ]
        }))
        .await;

    let body: CheckSlotResponse = response.json();
    assert!(!body.available);
}

#[tokio::test]
async fn test_check_slot_reports_midnight_crossing() {
    let server = TestContext::new().server();

    let response = server
        .post("/api/slots/check")
        .json(&json!({
            "candidate": { "start": "2024-06-01T23:00:00", "end": "2024-06-02T00:30:00" }
        }))
        .await;
    response.assert_status_ok();

    let body: CheckSlotResponse = response.json();
    assert!(body.available);
    assert!(body.crosses_midnight);
    assert_eq!(body.duration_minutes, 90);
}

#[tokio::test]
async fn test_check_slot_rejects_backwards_candidate() {
    let server = TestContext::new().server();

    let response = server
        .post("/api/slots/check")
        .json(&json!({
            "candidate": { "start": "2024-06-01T15:00:00", "end": "2024-06-01T14:00:00" }
        }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().starts_with("Invalid time slot"));
}

#[tokio::test]
async fn test_check_slot_rejects_empty_reservation() {
    let server = TestContext::new().server();

    let response = server
        .post("/api/slots/check")
        .json(&json!({
            "candidate": { "start": "2024-06-01T09:00:00", "end": "2024-06-01T10:00:00" },
            "existing": [
                { "start": "2024-06-01T12:00:00", "end": "2024-06-01T12:00:00" }
            ]
        }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("Invalid time slot"));
}

#[tokio::test]
async fn test_available_slots_open_day() {
    let server = TestContext::new().server();

    let response = server
        .post("/api/slots/available")
        .json(&json!({ "day": "2024-06-01" }))
        .await;
    response.assert_status_ok();

    let body: AvailableSlotsResponse = response.json();
    assert_eq!(body.day, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());

    let first = &body.slots[0];
    assert_eq!((first.start, first.end, first.duration_minutes), (at(6, 0), at(7, 0), 60));

    let last = body.slots.last().unwrap();
    assert_eq!((last.start, last.end), (at(22, 0), at(23, 0)));
    assert!(body.slots.iter().all(|slot| slot.end <= at(23, 0)));
}

#[tokio::test]
async fn test_available_slots_skip_reservations() {
    let server = TestContext::new().server();

    let response = server
        .post("/api/slots/available")
        .json(&json!({
            "day": "2024-06-01",
            "existing": [
                { "start": "2024-06-01T11:00:00", "end": "2024-06-01T12:00:00" },
                {
                    "start": "2024-06-01T14:00:00",
                    "end": "2024-06-01T23:00:00",
                    "kind": "admin_block"
                }
            ],
            "config": {
                "min_duration_minutes": 60,
                "max_duration_minutes": 120,
                "increment_after_first_hour_minutes": 60
            },
            "operating_hours": { "start_hour": 10, "end_hour": 23 }
        }))
        .await;
    response.assert_status_ok();

    let body: AvailableSlotsResponse = response.json();
    let pairs: Vec<_> = body
        .slots
        .iter()
        .map(|slot| (slot.start, slot.end, slot.duration_minutes))
        .collect();

    assert_eq!(
        pairs,
        vec![
            (at(10, 0), at(11, 0), 60),
            (at(12, 0), at(13, 0), 60),
            (at(12, 0), at(14, 0), 120),
            (at(12, 30), at(13, 30), 60),
            (at(13, 0), at(14, 0), 60),
        ]
    );
}

#[tokio::test]
async fn test_available_slots_use_venue_hours() {
    let config = DurationConfig::default();
    let hours = OperatingHours::new(20, 22).unwrap();
    let server = TestContext::with_rules(config, hours).server();

    let response = server
        .post("/api/slots/available")
        .json(&json!({ "day": "2024-06-01" }))
        .await;

    let body: AvailableSlotsResponse = response.json();
    let starts: Vec<_> = body
        .slots
        .iter()
        .map(|slot| (slot.start, slot.duration_minutes))
        .collect();
    assert_eq!(
        starts,
        vec![
            (at(20, 0), 60),
            (at(20, 0), 90),
            (at(20, 0), 120),
            (at(20, 30), 60),
            (at(20, 30), 90),
            (at(21, 0), 60),
        ]
    );
}

#[tokio::test]
async fn test_available_slots_reject_bad_hours() {
    let server = TestContext::new().server();

    let response = server
        .post("/api/slots/available")
        .json(&json!({
            "day": "2024-06-01",
            "operating_hours": { "start_hour": 22, "end_hour": 8 }
        }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_available_slots_reject_day_past_calendar_end() {
    let server = TestContext::new().server();

    let response = server
        .post("/api/slots/available")
        .json(&json!({
            "day": NaiveDate::MAX,
            "operating_hours": { "start_hour": 6, "end_hour": 24 }
        }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().starts_with("Validation error"));
}

#[tokio::test]
async fn test_available_slots_on_last_calendar_day() {
    let server = TestContext::new().server();

    let response = server
        .post("/api/slots/available")
        .json(&json!({ "day": NaiveDate::MAX }))
        .await;
    response.assert_status_ok();

    let body: AvailableSlotsResponse = response.json();
    let last = body.slots.last().unwrap();
    assert_eq!(last.end, NaiveDate::MAX.and_hms_opt(23, 0, 0).unwrap());
}
