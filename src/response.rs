//! Response types for the Finnhub API

/// Trait for HTTP response objects
pub trait Response {
    /// Get the HTTP status code
    fn status(&self) -> u16;

    /// Get the response headers in the order the server sent them
    fn headers(&self) -> &[(String, String)];

    /// Get the response body as a string
    fn body(&self) -> &str;

    /// The ID of the corresponding request
    fn request_id(&self) -> &Option<String>;
}

/// An owned response: status line, headers and the full body text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// HTTP status code
    pub status: u16,
    /// Header names and values
    pub headers: Vec<(String, String)>,
    /// Body text, read to the end
    pub body: String,
    /// Value of the `X-Request-Id` header, if any
    pub request_id: Option<String>,
}

impl RawResponse {
    /// Copy any [`Response`] into an owned value
    pub fn from_response<R: Response>(resp: &R) -> Self {
        Self {
            status: resp.status(),
            headers: resp.headers().to_vec(),
            body: resp.body().to_owned(),
            request_id: resp.request_id().clone(),
        }
    }

    /// First header value matching `name`, case-insensitively
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Write the metadata dump followed by the exact body text.
    ///
    /// ```text
    /// HTTP 200
    /// content-type: application/json
    ///
    /// {"cik":"123","data":[],"symbol":"INTC"}
    /// ```
    pub fn write_to<W: std::io::Write>(&self, mut out: W) -> std::io::Result<()> {
        writeln!(out, "HTTP {}", self.status)?;
        for (name, value) in &self.headers {
            writeln!(out, "{name}: {value}")?;
        }
        writeln!(out)?;
        writeln!(out, "{}", self.body)?;
        out.flush()
    }
}

impl Response for RawResponse {
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
