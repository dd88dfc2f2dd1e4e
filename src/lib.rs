//! Rust client for the Finnhub financials-as-reported API
//!
//! # Quick Start
//!
//! ```no_run
//! use finnhub::Finnhub;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Finnhub::default().with_key("your_api_key");
//!     let response = finnhub::fetch(&client, "INTC", "2022-01-01".parse()?).await?;
//!     println!("{}", response.body);
//!     Ok(())
//! }
//! ```
//!
//! # Endpoint API
//!
//! The endpoint returns a request builder. Pick a processor, then call `.get()`:
//!
//! ```no_run
//! use finnhub::Finnhub;
//! use finnhub::request::common::Frequency;
//! use finnhub::rest::financials;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Finnhub::default().with_key("your_api_key");
//!
//! // Raw JSON body
//! let json = financials::financials_reported(&client, "INTC").get().await?;
//!
//! // Decoded into the data model
//! let report = financials::financials_reported(&client, "INTC")
//!     .freq(Frequency::Annual)
//!     .typed()
//!     .get()
//!     .await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Features
//!
//! - **`hyper`** (default) - Uses [`hyper`](https://docs.rs/hyper) as the HTTP client (lightweight and fast).
//!
//! - **`reqwest`** - Alternative HTTP client using [`reqwest`](https://docs.rs/reqwest) (more features).
//!   To use reqwest instead: `default-features = false, features = ["reqwest"]`.
//!
//! - **`dotenvy`** (default) - Loads `FINNHUB_API_KEY` from `.env` in [`Finnhub::from_env`]
//!   and makes `Finnhub::new()` fallible.
//!
//! - **`table`** - Enables Polars DataFrame output via [`polars`](https://docs.rs/polars).

#![warn(missing_docs)]

pub mod client;
pub mod error;
pub mod model;
pub mod money;
pub mod request;
pub mod response;
pub mod rest;

pub mod execute;
pub mod processor;

pub use error::{Error, Result};
pub use request::Request;
pub use response::{RawResponse, Response};

/// The Finnhub API client with the default HTTP client.
///
/// - When `hyper` feature is enabled (default): uses `HyperClient`
/// - When `reqwest` feature is enabled: uses `reqwest::Client`
/// - Otherwise: use `client::Finnhub<YourClient>` directly
#[cfg(feature = "reqwest")]
pub type Finnhub = client::Finnhub<reqwest::Client>;

/// The Finnhub API client with the default HTTP client.
///
/// - When `hyper` feature is enabled (default): uses `HyperClient`
/// - When `reqwest` feature is enabled: uses `reqwest::Client`
/// - Otherwise: use `client::Finnhub<YourClient>` directly
#[cfg(all(feature = "hyper", not(feature = "reqwest")))]
pub type Finnhub = client::Finnhub<request::HyperClient>;

// When neither reqwest nor hyper is enabled, re-export the generic Finnhub
#[cfg(not(any(feature = "reqwest", feature = "hyper")))]
pub use client::Finnhub;

/// Fetch the filings of `symbol` reported on or after `from`.
///
/// Sends one GET with the API key in the `x-finnhub-token` header and reads
/// the whole body. The status is not inspected.
pub async fn fetch<C: Request>(
    client: &client::Finnhub<C>,
    symbol: impl Into<String>,
    from: chrono::NaiveDate,
) -> Result<RawResponse> {
    rest::financials::financials_reported(client, symbol)
        .from(from)
        .with_metadata()
        .get()
        .await
}
