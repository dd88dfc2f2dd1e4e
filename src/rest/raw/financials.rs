//! Financial statement endpoints

use crate::client::Finnhub;
use crate::processor::Raw;
use crate::request::Request;
use crate::request::financials::FinancialsReported;

/// Get financial statements as reported in SEC filings
///
/// Returns a request builder that will return results as raw JSON string.
///
/// # Example
/// ```no_run
/// # use finnhub::Finnhub;
/// # async fn example() {
/// # let client = Finnhub::default().with_key("api-key");
/// let from = "2022-01-01".parse().unwrap();
/// let json = finnhub::rest::financials::financials_reported(&client, "INTC")
///     .from(from)
///     .get()
///     .await
///     .unwrap();
/// # }
/// ```
pub fn financials_reported<'a, Client: Request>(
    client: &'a Finnhub<Client>,
    symbol: impl Into<String>,
) -> FinancialsReported<'a, Client, Raw> {
    FinancialsReported::new(client, symbol)
}
