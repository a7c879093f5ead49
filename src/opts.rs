use smart_default::SmartDefault;

use crate::constant::{DEFAULT_MAX_ROW_LEN, MAX_VARINT_LEN};
use crate::error::{Error, Result};

/// A configuration for row set decoding
///
/// ```rs
/// let mut opts1 = Opts::default();
/// opts1.max_row_len = 1 << 20;
///
/// let opts2 = Opts::try_from("max_row_len=4096&prefix_window=5")?;
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, SmartDefault)]
pub struct Opts {
    /// Rows declaring a longer payload are treated as malformed
    #[default(DEFAULT_MAX_ROW_LEN)]
    pub max_row_len: usize,

    /// Number of bytes scanned for a row length prefix.
    /// Must be in `1..=MAX_VARINT_LEN`.
    #[default(MAX_VARINT_LEN)]
    pub prefix_window: usize,
}

impl Opts {
    pub fn validate(&self) -> Result<()> {
        if self.prefix_window == 0 || self.prefix_window > MAX_VARINT_LEN {
            return Err(Error::BadConfigError(format!(
                "prefix_window must be in 1..={}, got {}",
                MAX_VARINT_LEN, self.prefix_window
            )));
        }
        if self.max_row_len == 0 {
            return Err(Error::BadConfigError(
                "max_row_len must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

impl TryFrom<&str> for Opts {
    type Error = Error;

    fn try_from(query: &str) -> Result<Self> {
        let mut opts = Self::default();
        let query = query.strip_prefix('?').unwrap_or(query);

        for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
            let parsed = value.parse::<usize>().map_err(|e| {
                Error::BadConfigError(format!("Invalid value '{}' for '{}': {}", value, key, e))
            })?;
            match key.as_ref() {
                "max_row_len" => opts.max_row_len = parsed,
                "prefix_window" => opts.prefix_window = parsed,
                _ => {
                    return Err(Error::BadConfigError(format!(
                        "Unknown option '{}'",
                        key
                    )));
                }
            }
        }

        opts.validate()?;
        Ok(opts)
    }
}
