use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;
use teetime_core::models::{booking::PriceQuoteResponse, pricing::CustomerTier};

use crate::test_utils::TestContext;

#[tokio::test]
async fn test_quote_price_with_discount() {
    let server = TestContext::new().server();

    let response = server
        .post("/api/pricing/quote")
        .json(&json!({
            "duration_minutes": 120,
            "hourly_rate": 30.0,
            "discount_percent": 10.0,
            "tier": "member"
        }))
        .await;
    response.assert_status_ok();

    let body: PriceQuoteResponse = response.json();
    assert_eq!(body.price.base_price, 60.0);
    assert_eq!(body.price.discount, 6.0);
    assert_eq!(body.price.final_price, 54.0);
    assert_eq!(body.formatted_duration, "2 hours");
    assert_eq!(body.tier, CustomerTier::Member);
}

#[tokio::test]
async fn test_quote_price_defaults() {
    let server = TestContext::new().server();

    let response = server
        .post("/api/pricing/quote")
        .json(&json!({ "duration_minutes": 90, "hourly_rate": 45.0 }))
        .await;
    response.assert_status_ok();

    let body: PriceQuoteResponse = response.json();
    assert_eq!(body.price.base_price, 67.5);
    assert_eq!(body.price.discount, 0.0);
    assert_eq!(body.price.final_price, 67.5);
    assert_eq!(body.tier, CustomerTier::New);
}

#[tokio::test]
async fn test_quote_price_rejects_negative_rate() {
    let server = TestContext::new().server();

    let response = server
        .post("/api/pricing/quote")
        .json(&json!({ "duration_minutes": 60, "hourly_rate": -5.0 }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_quote_price_rejects_discount_over_100() {
    let server = TestContext::new().server();

    let response = server
        .post("/api/pricing/quote")
        .json(&json!({ "duration_minutes": 60, "hourly_rate": 40.0, "discount_percent": 150.0 }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
}
