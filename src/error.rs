use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Unexpected end of buffer")]
    UnexpectedEof,

    #[error("Varint does not terminate within 10 bytes or overflows u64")]
    VarintOverflow,

    #[error("Row length {len} exceeds the limit of {max} bytes")]
    RowTooLong { len: u64, max: usize },

    #[error("Row at offset {offset} declares {len} bytes but only {available} remain")]
    RowOutOfBounds {
        offset: usize,
        len: usize,
        available: usize,
    },

    #[error("Row payload of {len} bytes does not match the layout of {type_name}")]
    PayloadLayout { type_name: &'static str, len: usize },

    #[error("Bad config error: {0}")]
    BadConfigError(String),
}

pub type Result<T> = std::result::Result<T, Error>;
