//! Integration tests for the Finnhub API client
//!
//! Tests marked `#[ignore]` make real API calls and should be run sparingly
//! to avoid exhausting API quota. Run with:
//!
//! ```sh
//! cargo test --test integration_tests -- --ignored --test-threads=1
//! ```
//!
//! Ensure FINNHUB_API_KEY is set in your environment or .env file.

use finnhub::request::common::Frequency;
use finnhub::rest;
use finnhub::{Finnhub, Result};

/// Helper to initialize the client from environment
fn setup() -> Result<Finnhub> {
    dotenvy::dotenv().ok();
    std::env::var("FINNHUB_API_KEY")
        .map(|key| Finnhub::default().with_key(key))
        .map_err(|_| finnhub::Error::Custom("FINNHUB_API_KEY not found. Set it in .env or environment.".to_string()))
}

#[tokio::test]
#[ignore]
async fn test_fetch_intel() {
    let client = setup().expect("Failed to initialize client");

    let result = finnhub::fetch(&client, "INTC", "2022-01-01".parse().unwrap()).await;

    assert!(result.is_ok(), "Failed to fetch financials: {:?}", result.err());

    let response = result.unwrap();
    assert_eq!(response.status, 200, "Unexpected status, body:\n{}", response.body);
    assert!(response.body.contains("\"data\""), "Response should contain filings");
}

#[tokio::test]
#[ignore]
async fn test_typed_quarterly() {
    let client = setup().expect("Failed to initialize client");

    let report = rest::financials::financials_reported(&client, "MSFT")
        .freq(Frequency::Quarterly)
        .from("2023-01-01".parse().unwrap())
        .typed()
        .get()
        .await
        .expect("Failed to fetch quarterly financials");

    assert_eq!(report.symbol, "MSFT");
    assert!(report.data.iter().all(|f| !f.is_annual()));
}

#[tokio::test]
#[ignore]
async fn test_invalid_key() {
    let client = Finnhub::default().with_key("definitely-not-a-key");

    let result = rest::financials::financials_reported(&client, "INTC").typed().get().await;

    match result {
        Err(finnhub::Error::Api { status, .. }) => assert_eq!(status, 401),
        other => panic!("expected an API error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_missing_api_key() {
    // Fails before any network traffic
    let client = Finnhub::default();

    let result = rest::financials::financials_reported(&client, "INTC").get().await;

    assert!(result.is_err(), "Request without API key should fail");

    if let Err(e) = result {
        assert!(e.is_construction(), "unexpected error: {e:?}");
        let error_msg = e.to_string();
        assert!(error_msg.contains("API key"), "Error should mention API key: {}", error_msg);
    }
}

#[tokio::test]
async fn test_client_initialization() {
    // Test that we can create a client (doesn't make API calls)
    let client = Finnhub::default().with_key("test_key");
    assert_eq!(client.api_key(), Some("test_key"));
    assert_eq!(client.base_url(), "https://finnhub.io/api/v1");

    let local = client.with_base_url("http://127.0.0.1:8080/api/v1/");
    assert_eq!(local.base_url(), "http://127.0.0.1:8080/api/v1");
}

#[tokio::test]
async fn test_builder_pattern() {
    // Builder methods only shape the URL (doesn't make API calls)
    let client = Finnhub::default().with_key("test_key");

    let request = rest::financials::financials_reported(&client, "TEST")
        .from("2022-01-01".parse().unwrap())
        .to("2022-12-31".parse().unwrap())
        .freq(Frequency::Annual);

    assert_eq!(
        request.url().unwrap(),
        "https://finnhub.io/api/v1/stock/financials-reported?symbol=TEST&freq=annual&from=2022-01-01&to=2022-12-31"
    );
}
