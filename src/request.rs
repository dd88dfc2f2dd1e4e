//! HTTP request trait and request parameter types

use crate::error::Result;
use crate::response::Response;

use std::future::Future;

pub mod common;
pub mod financials;

/// Trait for HTTP clients that can make requests to the Finnhub API.
///
/// Implement this trait to use custom HTTP clients with the Finnhub client.
/// Implementations must keep the error classes apart: a failure to build the
/// request is [`Error::RequestConstruction`](crate::Error::RequestConstruction),
/// a failure before the response head is [`Error::Network`](crate::Error::Network),
/// and a failure while reading the body is [`Error::Io`](crate::Error::Io).
pub trait Request: Send + Sync {
    /// Associated response type
    type Response: Response;

    /// Create a new instance of the HTTP client
    fn new() -> Self
    where
        Self: Sized;

    /// Make an HTTP GET request to the given URL with the given extra headers
    fn get(&self, url: &str, headers: &[(&str, &str)]) -> impl Future<Output = Result<Self::Response>> + Send;
}

/// HTTP response implementation
pub struct HttpResponse {
    status: u16,
    headers: Vec<(String, String)>,
    body: String,
    request_id: Option<String>,
}

impl Response for HttpResponse {
    fn status(&self) -> u16 {
        self.status
    }

    fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    fn body(&self) -> &str {
        &self.body
    }

    fn request_id(&self) -> &Option<String> {
        &self.request_id
    }
}

#[cfg(any(feature = "reqwest", feature = "hyper"))]
fn request_id(headers: &[(String, String)]) -> Option<String> {
    headers
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case("x-request-id"))
        .map(|(_, v)| v.clone())
}

#[cfg(feature = "reqwest")]
fn collect_headers(map: &reqwest::header::HeaderMap) -> Vec<(String, String)> {
    map.iter()
        .map(|(k, v)| (k.as_str().to_string(), String::from_utf8_lossy(v.as_bytes()).into_owned()))
        .collect()
}

#[cfg(feature = "reqwest")]
impl Request for reqwest::Client {
    type Response = HttpResponse;

    fn new() -> Self {
        reqwest::Client::new()
    }

    async fn get(&self, url: &str, headers: &[(&str, &str)]) -> Result<Self::Response> {
        use crate::error::Error;

        let mut builder = reqwest::Client::get(self, url);
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }

        let response = builder.send().await.map_err(|e| {
            if e.is_builder() {
                Error::RequestConstruction(e.to_string())
            } else {
                Error::Network(e.to_string())
            }
        })?;

        let status = response.status().as_u16();
        let headers = collect_headers(response.headers());
        let request_id = request_id(&headers);
        let body_bytes = response
            .bytes()
            .await
            .map_err(|e| Error::Io(format!("Failed to read response body: {e}")))?;

        let body = String::from_utf8(body_bytes.to_vec())
            .map_err(|e| Error::Io(format!("Invalid UTF-8 in response: {e}")))?;

        Ok(HttpResponse {
            status,
            headers,
            body,
            request_id,
        })
    }
}

#[cfg(feature = "hyper")]
/// Hyper client wrapper
#[derive(Clone)]
pub struct HyperClient {
    client: std::sync::Arc<
        hyper_util::client::legacy::Client<
            hyper_tls::HttpsConnector<hyper_util::client::legacy::connect::HttpConnector>,
            http_body_util::Full<hyper::body::Bytes>,
        >,
    >,
}

#[cfg(feature = "hyper")]
impl std::fmt::Debug for HyperClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HyperClient").finish_non_exhaustive()
    }
}

#[cfg(feature = "hyper")]
impl Request for HyperClient {
    type Response = HttpResponse;

    fn new() -> Self {
        let https = hyper_tls::HttpsConnector::new();
        let client = hyper_util::client::legacy::Client::builder(hyper_util::rt::TokioExecutor::new()).build(https);
        Self {
            client: std::sync::Arc::new(client),
        }
    }

    async fn get(&self, url: &str, headers: &[(&str, &str)]) -> Result<Self::Response> {
        use crate::error::Error;
        use http_body_util::BodyExt;

        let uri: hyper::Uri = url
            .parse()
            .map_err(|e| Error::RequestConstruction(format!("Invalid URL: {e}")))?;

        let mut builder = hyper::Request::builder().method(hyper::Method::GET).uri(uri);
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }
        let req = builder
            .body(http_body_util::Full::new(hyper::body::Bytes::new()))
            .map_err(|e| Error::RequestConstruction(format!("Failed to build request: {e}")))?;

        let response = self
            .client
            .request(req)
            .await
            .map_err(|e| Error::Network(format!("HTTP request failed: {e}")))?;

        let status = response.status().as_u16();
        let headers: Vec<(String, String)> = response
            .headers()
            .iter()
            .map(|(k, v)| (k.as_str().to_string(), String::from_utf8_lossy(v.as_bytes()).into_owned()))
            .collect();
        let request_id = request_id(&headers);

        let body_bytes = response
            .into_body()
            .collect()
            .await
            .map_err(|e| Error::Io(format!("Failed to read response body: {e}")))?
            .to_bytes();

        let body = String::from_utf8(body_bytes.to_vec())
            .map_err(|e| Error::Io(format!("Invalid UTF-8 in response: {e}")))?;

        Ok(HttpResponse {
            status,
            headers,
            body,
            request_id,
        })
    }
}
