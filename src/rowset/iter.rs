use std::iter::FusedIterator;

use crate::error::Error;
use crate::opts::Opts;
use crate::protocol::read_row_frame;
use crate::row::RowReader;
use crate::schema::SchemaProvider;

/// Outcome of decoding the record at the current offset
enum Step<'a> {
    Row(RowReader<'a>, usize),
    End,
    Malformed(Error),
}

/// Forward cursor over the rows of a [`RowSet`](super::RowSet).
///
/// The cursor is always either positioned on a decoded row
/// (`offset < data.len()`) or exhausted (`offset == data.len()`). A record that
/// cannot be decoded ends the iteration early; the error is logged and never
/// returned.
#[derive(Debug, Clone)]
pub struct RowIter<'a> {
    schema: Option<&'a dyn SchemaProvider>,
    data: &'a [u8],
    offset: usize,
    /// Wire size of the current record, prefix included
    len: usize,
    reader: Option<RowReader<'a>>,
    opts: Opts,
}

impl<'a> RowIter<'a> {
    pub(super) fn new(
        schema: Option<&'a dyn SchemaProvider>,
        data: &'a [u8],
        offset: usize,
        opts: Opts,
    ) -> Self {
        let mut iter = Self {
            schema,
            data,
            offset,
            len: 0,
            reader: None,
            opts,
        };
        iter.len = iter.prepare_reader();
        iter
    }

    fn step(&self) -> Step<'a> {
        if self.offset >= self.data.len() {
            return Step::End;
        }
        let Some(schema) = self.schema else {
            return Step::End;
        };
        match read_row_frame(self.data, self.offset, &self.opts) {
            Ok(frame) => Step::Row(RowReader::new(schema, frame.payload), frame.total_len()),
            Err(err) => Step::Malformed(err),
        }
    }

    /// Decode the record at `offset` and return its wire size
    fn prepare_reader(&mut self) -> usize {
        match self.step() {
            Step::Row(reader, len) => {
                self.reader = Some(reader);
                len
            }
            Step::End => {
                self.offset = self.data.len();
                self.reader = None;
                0
            }
            Step::Malformed(err) => {
                tracing::error!(offset = self.offset, error = %err, "Failed to read the row length");
                self.offset = self.data.len();
                self.reader = None;
                0
            }
        }
    }

    /// Move past the current record and decode the next one
    pub fn advance(&mut self) {
        self.offset += self.len;
        self.len = self.prepare_reader();
    }

    /// `true` while the cursor is positioned on a row
    pub fn is_valid(&self) -> bool {
        self.offset < self.data.len()
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Wire size of the current record, 0 once exhausted
    pub fn row_len(&self) -> usize {
        self.len
    }

    pub fn get(&self) -> Option<&RowReader<'a>> {
        self.reader.as_ref()
    }

    /// The current row.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is exhausted. Check [`is_valid`](Self::is_valid) first.
    #[expect(clippy::expect_used)]
    pub fn row(&self) -> &RowReader<'a> {
        self.reader
            .as_ref()
            .expect("RowIter::row called on an exhausted cursor")
    }
}

impl PartialEq for RowIter<'_> {
    /// Position equality: same schema object, same buffer, same offset
    fn eq(&self, other: &Self) -> bool {
        let same_schema = match (self.schema, other.schema) {
            (Some(a), Some(b)) => std::ptr::addr_eq(a, b),
            (None, None) => true,
            _ => false,
        };
        same_schema && std::ptr::eq(self.data, other.data) && self.offset == other.offset
    }
}

impl Eq for RowIter<'_> {}

impl<'a> Iterator for RowIter<'a> {
    type Item = RowReader<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let row = self.reader?;
        self.advance();
        Some(row)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.reader.is_none() {
            return (0, Some(0));
        }
        // Every record takes at least one prefix byte
        (1, Some(self.data.len() - self.offset))
    }
}

impl FusedIterator for RowIter<'_> {}
