//! In-memory table: a schema plus an ordered row collection.

use crate::error::{Error, Result};
use crate::row::Row;
use crate::schema::{Field, Schema};

#[derive(Debug, Clone)]
pub struct Table {
    pub name: String,
    schema: Schema,
    rows: Vec<Row>,
}

impl Table {
    pub fn new(name: impl Into<String>, schema: Schema) -> Self {
        Self {
            name: name.into(),
            schema,
            rows: Vec::new(),
        }
    }

    pub fn with_rows(name: impl Into<String>, schema: Schema, rows: Vec<Row>) -> Result<Self> {
        let mut table = Self::new(name, schema);
        for row in rows {
            table.insert(row)?;
        }
        Ok(table)
    }

    /// Append a row. Its arity must match the schema.
    pub fn insert(&mut self, row: Row) -> Result<()> {
        if row.size() != self.schema.len() {
            return Err(Error::Schema(format!(
                "table '{}' has {} columns, row has {}",
                self.name,
                self.schema.len(),
                row.size()
            )));
        }
        self.rows.push(row);
        Ok(())
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn columns(&self) -> &[Field] {
        &self.schema.fields
    }

    pub fn n_columns(&self) -> usize {
        self.schema.len()
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
