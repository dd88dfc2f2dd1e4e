//! Endpoint constructors returning raw JSON strings by default

pub mod financials;
