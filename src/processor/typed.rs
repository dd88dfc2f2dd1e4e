//! Typed processor decoding JSON bodies with serde
use std::marker::PhantomData;

use serde::de::DeserializeOwned;

use crate::error::Result;
use crate::processor::{Processor, ensure_ok};
use crate::response::Response;

/// Decodes a 200 response body into `T`
pub struct Typed<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> Typed<T> {
    /// Create a new typed processor
    pub fn new() -> Self {
        Self { _marker: PhantomData }
    }
}

impl<T> Default for Typed<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: DeserializeOwned> Processor for Typed<T> {
    type Output = T;

    fn process<R: Response>(&self, response: Result<R>) -> Result<T> {
        let resp = response?;
        ensure_ok(&resp)?;
        let decoded = serde_json::from_str(resp.body())?;
        Ok(decoded)
    }
}
