use crate::error::{Error, Result};
use crate::opts::Opts;
use crate::protocol::primitive::{read_string_fix, read_uvarint};

/// One `[varint length][payload]` record located in a row set buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowFrame<'a> {
    pub prefix_len: usize,
    pub payload: &'a [u8],
}

impl RowFrame<'_> {
    /// Bytes taken by the record on the wire, prefix included
    pub fn total_len(&self) -> usize {
        self.prefix_len + self.payload.len()
    }
}

/// Read the record starting at `offset`
///
/// The length prefix is decoded from at most `opts.prefix_window` bytes and the
/// payload must lie entirely inside `data`.
pub fn read_row_frame<'a>(data: &'a [u8], offset: usize, opts: &Opts) -> Result<RowFrame<'a>> {
    let rest = data.get(offset..).ok_or(Error::UnexpectedEof)?;
    let window = &rest[..rest.len().min(opts.prefix_window)];

    let (len, after) = read_uvarint(window)?;
    let prefix_len = window.len() - after.len();

    let len = usize::try_from(len)
        .ok()
        .filter(|&len| len <= opts.max_row_len)
        .ok_or(Error::RowTooLong {
            len,
            max: opts.max_row_len,
        })?;

    let (payload, _rest) =
        read_string_fix(&rest[prefix_len..], len).map_err(|_| Error::RowOutOfBounds {
            offset,
            len,
            available: rest.len() - prefix_len,
        })?;

    Ok(RowFrame {
        prefix_len,
        payload,
    })
}
