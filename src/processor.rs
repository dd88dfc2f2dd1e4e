//! Response processors
//!
//! A processor turns the outcome of an HTTP call into the value an endpoint
//! builder returns. Builders start with [`Raw`] and switch processors with
//! methods such as `.with_metadata()` or `.typed()`.
use crate::error::Result;
use crate::response::{RawResponse, Response};

mod typed;
#[cfg(feature = "table")]
mod table;

pub use typed::Typed;
#[cfg(feature = "table")]
pub use table::Table;

/// Converts a response into an output value
pub trait Processor {
    /// The value produced on success
    type Output;

    /// Process the response, or pass its error through unchanged
    fn process<R: Response>(&self, response: Result<R>) -> Result<Self::Output>;
}

/// Returns the body text as-is, whatever the status
#[derive(Debug, Clone, Copy, Default)]
pub struct Raw;

impl Processor for Raw {
    type Output = String;

    fn process<R: Response>(&self, response: Result<R>) -> Result<String> {
        Ok(response?.body().to_owned())
    }
}

/// Returns status, headers and body, whatever the status
#[derive(Debug, Clone, Copy, Default)]
pub struct Full;

impl Processor for Full {
    type Output = RawResponse;

    fn process<R: Response>(&self, response: Result<R>) -> Result<RawResponse> {
        Ok(RawResponse::from_response(&response?))
    }
}

/// Fail with [`Error::Api`](crate::Error::Api) unless the status is 200
pub(crate) fn ensure_ok<R: Response>(resp: &R) -> Result<()> {
    if resp.status() != 200 {
        return Err(crate::error::Error::Api {
            request_id: resp.request_id().to_owned(),
            status: resp.status(),
            message: resp.body().to_owned(),
        });
    }
    Ok(())
}
