//! Financials-as-reported request builder

use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::client::{Finnhub, TOKEN_HEADER};
use crate::error::{Error, Result};
use crate::execute::Execute;
use crate::model::Report;
use crate::processor::{Full, Processor, Raw, Typed};
use crate::request::Request;
use crate::request::common::Frequency;
use crate::response::Response;

/// Endpoint path below the API root
pub const PATH: &str = "stock/financials-reported";

/// Financials-as-reported request builder
pub struct FinancialsReported<'a, Client: Request, P: Processor = Raw> {
    client: &'a Finnhub<Client>,
    /// Query parameters
    pub params: Params,
    processor: P,
}

// Constructor - always starts with Raw
impl<'a, C: Request> FinancialsReported<'a, C, Raw> {
    /// Create new financials-as-reported request (returns raw JSON by default)
    pub fn new(client: &'a Finnhub<C>, symbol: impl Into<String>) -> Self {
        Self {
            client,
            params: Params {
                symbol: symbol.into(),
                ..Params::default()
            },
            processor: Raw,
        }
    }
}

// Processor conversion and builder methods work on any processor type
impl<'a, C: Request, P: Processor + 'a> FinancialsReported<'a, C, P> {
    /// Execute the request and return the result
    pub fn get(self) -> impl std::future::Future<Output = Result<P::Output>> + 'a {
        Execute::get(self)
    }

    /// Only filings on or after this date
    pub fn from(mut self, date: NaiveDate) -> Self {
        self.params.from = Some(date);
        self
    }

    /// Only filings on or before this date
    pub fn to(mut self, date: NaiveDate) -> Self {
        self.params.to = Some(date);
        self
    }

    /// Annual or quarterly filings
    pub fn freq(mut self, freq: Frequency) -> Self {
        self.params.freq = Some(freq);
        self
    }

    /// Select the issuer by CIK instead of (or in addition to) the symbol
    pub fn cik(mut self, cik: impl Into<String>) -> Self {
        self.params.cik = Some(cik.into());
        self
    }

    /// Select a single filing by accession number
    pub fn access_number(mut self, access_number: impl Into<String>) -> Self {
        self.params.access_number = Some(access_number.into());
        self
    }

    /// Return status and headers along with the body
    pub fn with_metadata(self) -> FinancialsReported<'a, C, Full> {
        self.with_processor(Full)
    }

    /// Decode the body into a [`Report`]
    pub fn typed(self) -> FinancialsReported<'a, C, Typed<Report>> {
        self.with_processor(Typed::new())
    }

    /// Convert to DataFrame output (Polars DataFrame), one row per line item
    #[cfg(feature = "table")]
    pub fn as_dataframe(self) -> FinancialsReported<'a, C, crate::processor::Table> {
        self.with_processor(crate::processor::Table)
    }

    fn with_processor<Q: Processor>(self, processor: Q) -> FinancialsReported<'a, C, Q> {
        FinancialsReported {
            client: self.client,
            params: self.params,
            processor,
        }
    }

    /// The full request URL. The API key is not part of it.
    pub fn url(&self) -> Result<String> {
        let query = self.params.query()?;
        Ok(format!("{}/{PATH}?{query}", self.client.base_url()))
    }
}

impl<'a, C: Request, P: Processor + 'a> Execute for FinancialsReported<'a, C, P> {
    type Output = P::Output;

    #[allow(refining_impl_trait_reachable)]
    async fn get(self) -> Result<P::Output> {
        let api_key = self.client.api_key().ok_or(Error::MissingApiKey)?;
        let url = self.url()?;

        tracing::debug!(%url, "sending financials-reported request");
        let response = self.client.client().get(&url, &[(TOKEN_HEADER, api_key)]).await;

        match &response {
            Ok(resp) => tracing::debug!(
                status = resp.status(),
                bytes = resp.body().len(),
                "received response"
            ),
            Err(e) => tracing::debug!(error = %e, "request failed"),
        }

        // Process using associated Processor type
        self.processor.process(response)
    }
}

/// JSON-serializable parameters (no client reference).
///
/// Field order is the query string order; unset filters are omitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Params {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    /// Stock symbol
    pub symbol: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Central Index Key
    pub cik: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Accession number of a single filing
    pub access_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Annual or quarterly
    pub freq: Option<Frequency>,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Inclusive lower bound on the filing date (YYYY-MM-DD)
    pub from: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Inclusive upper bound on the filing date (YYYY-MM-DD)
    pub to: Option<NaiveDate>,
}

impl Params {
    /// Check the parameters and encode them as a query string
    pub fn query(&self) -> Result<String> {
        if self.symbol.trim().is_empty() && self.cik.is_none() && self.access_number.is_none() {
            return Err(Error::RequestConstruction(
                "one of symbol, cik or accessNumber is required".to_string(),
            ));
        }
        if let (Some(from), Some(to)) = (self.from, self.to) {
            if from > to {
                return Err(Error::RequestConstruction(format!("from ({from}) is after to ({to})")));
            }
        }
        serde_urlencoded::to_string(self).map_err(|e| Error::RequestConstruction(format!("Failed to encode query: {e}")))
    }
}
