//! Execute trait for running API requests
//!
//! The `Execute` trait provides the `.get()` method used by endpoint builders
//! to send the request and hand the response to the builder's processor.

use crate::error::Result;

/// Trait for executing API requests
///
/// Implemented by all endpoint request builders.
pub trait Execute {
    /// The output type of the request
    type Output;

    /// Execute the request and return the result
    fn get(self) -> impl std::future::Future<Output = Result<Self::Output>>;
}
