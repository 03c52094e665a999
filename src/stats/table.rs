use std::collections::HashSet;
use std::io::Write;

use serde_json::{Map, Value};

use crate::stats::types::{FieldValue, Record};
use crate::Result;

/// Records materialized as rows under the union of their field names.
///
/// Columns appear in the order each field was first seen. A record that lacks
/// a column gets [`FieldValue::Null`] in that cell.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<FieldValue>>,
}

impl Table {
    pub fn from_records(records: &[Record]) -> Self {
        let mut columns: Vec<String> = Vec::new();
        let mut seen: HashSet<&str> = HashSet::new();
        for name in records.iter().flat_map(|record| record.field_names()) {
            if seen.insert(name) {
                columns.push(name.to_string());
            }
        }

        let rows = records
            .iter()
            .map(|record| {
                columns
                    .iter()
                    .map(|column| record.get(column).cloned().unwrap_or(FieldValue::Null))
                    .collect()
            })
            .collect();

        Self { columns, rows }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<FieldValue>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cell at `row` under `column`, if both exist.
    pub fn cell(&self, row: usize, column: &str) -> Option<&FieldValue> {
        let index = self.columns.iter().position(|c| c == column)?;
        self.rows.get(row).and_then(|cells| cells.get(index))
    }

    /// Write a header row followed by one row per record.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<()> {
        let mut wtr = csv::Writer::from_writer(writer);
        wtr.write_record(&self.columns)?;
        for row in &self.rows {
            wtr.write_record(row.iter().map(FieldValue::to_cell))?;
        }
        wtr.flush()?;
        Ok(())
    }

    /// Rows as a JSON array of objects, every column present in each object.
    pub fn to_json(&self) -> Value {
        Value::Array(
            self.rows
                .iter()
                .map(|row| {
                    let object: Map<String, Value> = self
                        .columns
                        .iter()
                        .zip(row)
                        .map(|(column, cell)| (column.clone(), Value::from(cell)))
                        .collect();
                    Value::Object(object)
                })
                .collect(),
        )
    }
}
