//! Typed view of the `stock/financials-reported` response
//!
//! The model is read-only: it mirrors what the provider sends and is never
//! mutated after decoding.
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};

/// Top-level response: the issuer and its filings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Report {
    /// SEC Central Index Key
    #[serde(default)]
    pub cik: String,
    /// Ticker symbol
    #[serde(default)]
    pub symbol: String,
    /// Filings, newest first as sent by the API
    #[serde(default)]
    pub data: Vec<Filing>,
}

impl FromStr for Report {
    type Err = crate::error::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(serde_json::from_str(s)?)
    }
}

/// One periodic disclosure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Filing {
    /// Timestamp the filing was accepted
    #[serde(default)]
    pub accepted_date: String,
    /// Accession number
    #[serde(default)]
    pub access_number: String,
    /// Filer CIK
    #[serde(default)]
    pub cik: String,
    /// Filer ticker
    #[serde(default)]
    pub symbol: String,
    /// First day of the reporting period
    #[serde(default)]
    pub start_date: String,
    /// Last day of the reporting period
    #[serde(default)]
    pub end_date: String,
    /// Date the filing was submitted
    #[serde(default)]
    pub filed_date: String,
    /// Form type, e.g. `10-K`
    #[serde(default)]
    pub form: String,
    /// Fiscal quarter, 0 for annual filings
    #[serde(default)]
    pub quarter: i64,
    /// Fiscal year
    #[serde(default)]
    pub year: i64,
    /// Reported statements
    #[serde(default)]
    pub report: FinancialReport,
}

impl Filing {
    /// Annual filings carry quarter 0
    pub fn is_annual(&self) -> bool {
        self.quarter == 0
    }

    /// Number of line items across all three statements
    pub fn line_item_count(&self) -> usize {
        self.report.bs.len() + self.report.cf.len() + self.report.ic.len()
    }
}

/// The three statements of a filing. A missing statement decodes as empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FinancialReport {
    /// Balance sheet
    #[serde(default)]
    pub bs: Vec<LineItem>,
    /// Cash flow statement
    #[serde(default)]
    pub cf: Vec<LineItem>,
    /// Income statement
    #[serde(default)]
    pub ic: Vec<LineItem>,
}

impl FinancialReport {
    /// Line items of one statement
    pub fn statement(&self, statement: Statement) -> &[LineItem] {
        match statement {
            Statement::BalanceSheet => &self.bs,
            Statement::CashFlow => &self.cf,
            Statement::IncomeStatement => &self.ic,
        }
    }
}

/// Statement selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum Statement {
    /// `bs`
    #[serde(rename = "bs")]
    BalanceSheet,
    /// `cf`
    #[serde(rename = "cf")]
    CashFlow,
    /// `ic`
    #[serde(rename = "ic")]
    IncomeStatement,
}

impl Statement {
    /// All statements in response order
    pub const ALL: [Statement; 3] = [Statement::BalanceSheet, Statement::CashFlow, Statement::IncomeStatement];

    /// JSON key of the statement
    pub fn key(self) -> &'static str {
        match self {
            Statement::BalanceSheet => "bs",
            Statement::CashFlow => "cf",
            Statement::IncomeStatement => "ic",
        }
    }
}

/// A single reported figure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct LineItem {
    /// XBRL concept, e.g. `us-gaap_Revenues`
    #[serde(default)]
    pub concept: String,
    /// Human-readable label
    #[serde(default)]
    pub label: String,
    /// Unit of measure, e.g. `usd`
    #[serde(default)]
    pub unit: String,
    /// Value in the filer's base unit
    #[serde(deserialize_with = "integer_value")]
    #[schemars(with = "i64")]
    pub value: i64,
}

// The API occasionally sends integral figures as floats.
fn integer_value<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    let number = serde_json::Number::deserialize(deserializer)?;
    if let Some(v) = number.as_i64() {
        return Ok(v);
    }
    match number.as_f64() {
        Some(f) if f.is_finite() && f.abs() < i64::MAX as f64 => Ok(f.trunc() as i64),
        _ => Err(serde::de::Error::custom(format!("line item value out of range: {number}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "cik": "50863",
        "data": [{
            "accessNumber": "0000050863-23-000006",
            "symbol": "INTC",
            "cik": "50863",
            "year": 2022,
            "quarter": 0,
            "form": "10-K",
            "startDate": "2021-12-26 00:00:00",
            "endDate": "2022-12-31 00:00:00",
            "filedDate": "2023-01-27 00:00:00",
            "acceptedDate": "2023-01-26 20:30:11",
            "report": {
                "bs": [{"concept": "us-gaap_Assets", "label": "Total assets", "unit": "usd", "value": 182103000000}],
                "cf": [],
                "ic": [{"concept": "us-gaap_EarningsPerShareBasic", "label": "Basic EPS", "unit": "usd/share", "value": 1.94}]
            }
        }],
        "symbol": "INTC"
    }"#;

    #[test]
    fn test_decode_report() {
        let report: Report = SAMPLE.parse().unwrap();
        assert_eq!(report.symbol, "INTC");
        assert_eq!(report.data.len(), 1);

        let filing = &report.data[0];
        assert!(filing.is_annual());
        assert_eq!(filing.form, "10-K");
        assert_eq!(filing.access_number, "0000050863-23-000006");
        assert_eq!(filing.report.statement(Statement::BalanceSheet)[0].value, 182_103_000_000);
        assert!(filing.report.cf.is_empty());
        // fractional figures are truncated
        assert_eq!(filing.report.ic[0].value, 1);
        assert_eq!(filing.line_item_count(), 2);
    }

    #[test]
    fn test_missing_statements_decode_empty() {
        let report: Report = r#"{"cik":"1","symbol":"X","data":[{"quarter":2,"year":2023,"report":{"bs":[]}}]}"#
            .parse()
            .unwrap();
        let filing = &report.data[0];
        assert!(!filing.is_annual());
        for statement in Statement::ALL {
            assert!(filing.report.statement(statement).is_empty());
        }
    }

    #[test]
    fn test_empty_report() {
        let report: Report = r#"{"cik":"123","data":[],"symbol":"INTC"}"#.parse().unwrap();
        assert_eq!(report.cik, "123");
        assert!(report.data.is_empty());
    }

    #[test]
    fn test_non_numeric_value_is_an_error() {
        let result: Result<LineItem, _> = serde_json::from_str(r#"{"concept":"c","label":"l","unit":"usd","value":"N/A"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_statement_keys() {
        assert_eq!(serde_json::to_string(&Statement::CashFlow).unwrap(), "\"cf\"");
        assert_eq!(Statement::IncomeStatement.key(), "ic");
    }
}
