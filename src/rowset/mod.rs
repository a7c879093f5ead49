//! Row sets: a buffer of `[varint length][payload]` records plus the schema
//! needed to read them.
//!
//! A [`RowSet`] either owns both parts (built from a [`QueryResponse`]) or
//! borrows both from the caller. Iteration is lazy: nothing is decoded until a
//! cursor is created with [`RowSet::begin`] or [`RowSet::iter`].
//!
//! ```ignore
//! let rows = RowSet::from_response(&mut resp);
//! for row in &rows {
//!     handle(row.data());
//! }
//! ```

mod iter;

pub use iter::RowIter;

#[cfg(test)]
mod iter_test;

use crate::error::Result;
use crate::opts::Opts;
use crate::protocol::response::QueryResponse;
use crate::schema::{ResultSchema, SchemaProvider};

/// Where the schema and the row buffer live
#[derive(Debug)]
enum Storage<'a> {
    /// Moved out of a response; dropped with the row set
    Owned {
        schema: Option<ResultSchema>,
        data: Vec<u8>,
    },
    /// Supplied by the caller, who keeps both alive for `'a`
    Borrowed {
        schema: &'a dyn SchemaProvider,
        data: &'a [u8],
    },
}

#[derive(Debug)]
pub struct RowSet<'a> {
    storage: Storage<'a>,
    opts: Opts,
}

impl RowSet<'static> {
    /// Take the schema description and row buffer out of `resp`.
    ///
    /// The buffer is moved only when a schema is present; without a schema the
    /// rows cannot be read and the row set is empty.
    #[tracing::instrument(skip_all)]
    pub fn from_response(resp: &mut QueryResponse) -> Self {
        let schema = resp.take_schema().map(ResultSchema::from);

        let data = match schema {
            Some(_) => resp.take_data().unwrap_or_default(),
            None => {
                if resp.data.is_some() {
                    tracing::debug!("response carries row data without a schema, no rows to read");
                }
                Vec::new()
            }
        };

        Self {
            storage: Storage::Owned { schema, data },
            opts: Opts::default(),
        }
    }
}

impl From<QueryResponse> for RowSet<'static> {
    fn from(mut resp: QueryResponse) -> Self {
        Self::from_response(&mut resp)
    }
}

impl<'a> RowSet<'a> {
    /// Read rows from a caller-owned schema and buffer. Dropping the row set
    /// leaves both untouched.
    pub fn borrowed(schema: &'a dyn SchemaProvider, data: &'a [u8]) -> Self {
        Self {
            storage: Storage::Borrowed { schema, data },
            opts: Opts::default(),
        }
    }

    pub fn with_opts(mut self, opts: Opts) -> Result<Self> {
        opts.validate()?;
        self.opts = opts;
        Ok(self)
    }

    pub fn opts(&self) -> &Opts {
        &self.opts
    }

    pub fn is_owned(&self) -> bool {
        matches!(self.storage, Storage::Owned { .. })
    }

    pub fn schema(&self) -> Option<&dyn SchemaProvider> {
        match &self.storage {
            Storage::Owned { schema, .. } => schema.as_ref().map(|s| s as &dyn SchemaProvider),
            Storage::Borrowed { schema, .. } => Some(*schema),
        }
    }

    /// The whole row buffer, length prefixes included
    pub fn data(&self) -> &[u8] {
        match &self.storage {
            Storage::Owned { data, .. } => data.as_slice(),
            Storage::Borrowed { data, .. } => *data,
        }
    }

    /// Cursor positioned on the first row, or equal to `end()` if there is none
    pub fn begin(&self) -> RowIter<'_> {
        RowIter::new(self.schema(), self.data(), 0, self.opts)
    }

    pub fn end(&self) -> RowIter<'_> {
        RowIter::new(self.schema(), self.data(), self.data().len(), self.opts)
    }

    pub fn iter(&self) -> RowIter<'_> {
        self.begin()
    }
}

impl<'r> IntoIterator for &'r RowSet<'_> {
    type Item = crate::row::RowReader<'r>;
    type IntoIter = RowIter<'r>;

    fn into_iter(self) -> Self::IntoIter {
        self.begin()
    }
}
