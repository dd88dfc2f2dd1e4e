//! Table processor using Polars DataFrames
use crate::error::Result;
use crate::model::{Report, Statement};
use crate::processor::{Processor, ensure_ok};
use crate::response::Response;
use polars_core::prelude::{Column, DataFrame, DataType, Series};
use polars_io::prelude::*;
use serde::Serialize;
use std::io::Cursor;

/// Flattens every line item of every filing into one DataFrame row.
///
/// The frame always carries the columns of [`Table::COLUMNS`] in that
/// order, even when the report has no line items.
pub struct Table;

impl Table {
    /// Column names of the produced frame
    pub const COLUMNS: [&'static str; 9] = [
        "accessNumber",
        "year",
        "quarter",
        "form",
        "statement",
        "concept",
        "label",
        "unit",
        "value",
    ];

    fn dtype(column: &str) -> DataType {
        match column {
            "year" | "quarter" | "value" => DataType::Int64,
            _ => DataType::String,
        }
    }

    fn empty() -> Result<DataFrame> {
        let columns: Vec<Column> = Self::COLUMNS
            .iter()
            .map(|name| Column::from(Series::new_empty((*name).into(), &Self::dtype(name))))
            .collect();
        DataFrame::new(columns).map_err(table_error)
    }
}

fn table_error(e: impl std::fmt::Display) -> crate::error::Error {
    crate::error::Error::Custom(format!("Failed to build DataFrame from line items: {e}"))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Row<'a> {
    access_number: &'a str,
    year: i64,
    quarter: i64,
    form: &'a str,
    statement: &'static str,
    concept: &'a str,
    label: &'a str,
    unit: &'a str,
    value: i64,
}

fn rows(report: &Report) -> Vec<Row<'_>> {
    report
        .data
        .iter()
        .flat_map(|filing| {
            Statement::ALL.into_iter().flat_map(move |statement| {
                filing.report.statement(statement).iter().map(move |item| Row {
                    access_number: &filing.access_number,
                    year: filing.year,
                    quarter: filing.quarter,
                    form: &filing.form,
                    statement: statement.key(),
                    concept: &item.concept,
                    label: &item.label,
                    unit: &item.unit,
                    value: item.value,
                })
            })
        })
        .collect()
}

impl Processor for Table {
    type Output = DataFrame;

    fn process<R: Response>(&self, response: Result<R>) -> Result<DataFrame> {
        let resp = response?;
        ensure_ok(&resp)?;

        let report: Report = serde_json::from_str(resp.body())?;
        let rows = rows(&report);
        if rows.is_empty() {
            return Self::empty();
        }

        let json_bytes = serde_json::to_vec(&rows)?;
        let df = JsonReader::new(Cursor::new(json_bytes)).finish().map_err(table_error)?;
        df.select(Self::COLUMNS).map_err(table_error)
    }
}
