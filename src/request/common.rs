//! Common types used across multiple endpoints
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Reporting frequency filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    /// Annual filings (10-K, 20-F)
    Annual,
    /// Quarterly filings (10-Q)
    Quarterly,
}

impl FromStr for Frequency {
    type Err = crate::error::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "annual" => Ok(Frequency::Annual),
            "quarterly" => Ok(Frequency::Quarterly),
            _ => Err(crate::error::Error::Custom(format!("Invalid frequency: {s}"))),
        }
    }
}

impl std::fmt::Display for Frequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Frequency::Annual => write!(f, "annual"),
            Frequency::Quarterly => write!(f, "quarterly"),
        }
    }
}
