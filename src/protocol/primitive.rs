use crate::constant::MAX_VARINT_LEN;
use crate::error::{Error, Result};

/// Read little-endian base-128 unsigned integer
///
/// Decoding never looks past `data`; callers bound the scan by slicing the window.
/// Fails with `UnexpectedEof` when `data` ends before the terminating byte and with
/// `VarintOverflow` when the value does not fit in 10 bytes / 64 bits.
pub fn read_uvarint(data: &[u8]) -> Result<(u64, &[u8])> {
    let mut value = 0u64;
    for (i, &byte) in data.iter().take(MAX_VARINT_LEN).enumerate() {
        // 10th byte holds only bit 63
        if i == MAX_VARINT_LEN - 1 && byte > 0x01 {
            return Err(Error::VarintOverflow);
        }
        value |= u64::from(byte & 0x7F) << (7 * i);
        if byte & 0x80 == 0 {
            return Ok((value, &data[i + 1..]));
        }
    }
    Err(Error::UnexpectedEof)
}

/// Read fixed-length string
pub fn read_string_fix(data: &[u8], len: usize) -> Result<(&[u8], &[u8])> {
    if data.len() < len {
        return Err(Error::UnexpectedEof);
    }
    Ok((&data[..len], &data[len..]))
}
