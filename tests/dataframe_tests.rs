//! DataFrame conversion tests for the financials-reported endpoint
#![cfg(feature = "table")]

use finnhub::Finnhub;
use finnhub::processor::Table;
use finnhub::rest::financials::financials_reported;
use polars_core::prelude::DataType;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn server_with(body: serde_json::Value) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/stock/financials-reported"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;
    server
}

fn client(base_url: &str) -> Finnhub {
    Finnhub::default().with_key("test-key").with_base_url(base_url)
}

fn column_names(df: &polars_core::frame::DataFrame) -> Vec<String> {
    df.get_column_names().iter().map(|name| name.as_str().to_string()).collect()
}

#[tokio::test]
async fn test_dataframe_has_one_row_per_line_item() {
    let server = server_with(serde_json::json!({
        "cik": "50863",
        "symbol": "INTC",
        "data": [
            {
                "accessNumber": "0000050863-23-000006",
                "year": 2022,
                "quarter": 0,
                "form": "10-K",
                "report": {
                    "bs": [{"concept": "us-gaap_Assets", "label": "Total assets", "unit": "usd", "value": 182103000000_i64}],
                    "cf": [{"concept": "us-gaap_DepreciationDepletionAndAmortization", "label": "Depreciation", "unit": "usd", "value": 11128000000_i64}],
                    "ic": [{"concept": "us-gaap_Revenues", "label": "Net revenue", "unit": "usd", "value": 63054000000_i64}]
                }
            },
            {
                "accessNumber": "0000050863-22-000043",
                "year": 2022,
                "quarter": 3,
                "form": "10-Q",
                "report": {
                    "ic": [{"concept": "us-gaap_Revenues", "label": "Net revenue", "unit": "usd", "value": 15338000000_i64}]
                }
            }
        ]
    }))
    .await;

    let df = financials_reported(&client(&server.uri()), "INTC").as_dataframe().get().await.unwrap();

    assert_eq!(df.height(), 4);
    assert_eq!(column_names(&df), Table::COLUMNS);
    assert_eq!(df.column("value").unwrap().dtype(), &DataType::Int64);
    assert_eq!(df.column("year").unwrap().dtype(), &DataType::Int64);

    let statements: Vec<Option<&str>> = df.column("statement").unwrap().as_materialized_series().str().unwrap().into_iter().collect();
    assert_eq!(statements, vec![Some("bs"), Some("cf"), Some("ic"), Some("ic")]);
}

#[tokio::test]
async fn test_empty_report_keeps_the_schema() {
    let server = server_with(serde_json::json!({"cik": "123", "data": [], "symbol": "INTC"})).await;

    let df = financials_reported(&client(&server.uri()), "INTC").as_dataframe().get().await.unwrap();

    assert_eq!(df.height(), 0);
    assert_eq!(column_names(&df), Table::COLUMNS);
    assert_eq!(df.column("quarter").unwrap().dtype(), &DataType::Int64);
    assert_eq!(df.column("label").unwrap().dtype(), &DataType::String);
}

#[tokio::test]
async fn test_filings_without_line_items_give_an_empty_frame() {
    let server = server_with(serde_json::json!({
        "cik": "123",
        "symbol": "INTC",
        "data": [{"accessNumber": "0000000123-22-000001", "year": 2021, "quarter": 0, "form": "10-K", "report": {}}]
    }))
    .await;

    let df = financials_reported(&client(&server.uri()), "INTC").as_dataframe().get().await.unwrap();

    assert_eq!(df.height(), 0);
    assert_eq!(df.width(), Table::COLUMNS.len());
}
