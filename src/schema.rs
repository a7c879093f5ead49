//! Schema providers consumed by row views.
//!
//! A row set never looks inside a schema. It hands the same provider to every
//! [`RowReader`](crate::row::RowReader) it builds and compares providers by
//! address only.

use std::fmt::Debug;
use std::sync::Arc;

use auto_impl::auto_impl;

use crate::col::Column;
use crate::constant::FieldType;
use crate::protocol::response::SchemaDescription;

/// Field layout of the rows in a row set
#[auto_impl(&, Box, Arc)]
pub trait SchemaProvider: Debug {
    fn version(&self) -> i32 {
        0
    }

    fn num_fields(&self) -> usize;

    fn field_name(&self, index: usize) -> Option<&str>;

    fn field_type(&self, index: usize) -> Option<FieldType>;

    fn field_index(&self, name: &str) -> Option<usize> {
        (0..self.num_fields()).find(|&i| self.field_name(i) == Some(name))
    }
}

/// Schema built from the description embedded in a query response
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultSchema {
    columns: Vec<Column>,
}

impl ResultSchema {
    pub fn new(columns: Vec<Column>) -> Self {
        Self { columns }
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn into_shared(self) -> Arc<dyn SchemaProvider + Send + Sync> {
        Arc::new(self)
    }
}

impl From<SchemaDescription> for ResultSchema {
    fn from(desc: SchemaDescription) -> Self {
        Self::new(desc.columns.into_iter().map(Column::from).collect())
    }
}

impl SchemaProvider for ResultSchema {
    fn num_fields(&self) -> usize {
        self.columns.len()
    }

    fn field_name(&self, index: usize) -> Option<&str> {
        self.columns.get(index).map(|c| c.name.as_str())
    }

    fn field_type(&self, index: usize) -> Option<FieldType> {
        self.columns.get(index).map(|c| c.field_type)
    }
}
