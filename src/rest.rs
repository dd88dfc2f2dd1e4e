//! REST API endpoints for Finnhub
pub mod raw;

// Re-export raw module for convenience.
pub use raw::*;
