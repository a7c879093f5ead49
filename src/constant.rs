/// Maximum encoded size of a u64 varint, and the widest window scanned for a row length prefix
pub const MAX_VARINT_LEN: usize = 10;

/// Row lengths are signed 32-bit on the producing side
pub const DEFAULT_MAX_ROW_LEN: usize = i32::MAX as usize;

/// Field types carried by a schema description
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    Unknown = 0,
    Bool = 1,
    Int = 2,
    Vid = 3,
    Float = 4,
    Double = 5,
    String = 6,
    Timestamp = 21,
    Year = 22,
    YearMonth = 23,
    Date = 24,
    DateTime = 25,
    Path = 41,
}

impl FieldType {
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Unknown),
            1 => Some(Self::Bool),
            2 => Some(Self::Int),
            3 => Some(Self::Vid),
            4 => Some(Self::Float),
            5 => Some(Self::Double),
            6 => Some(Self::String),
            21 => Some(Self::Timestamp),
            22 => Some(Self::Year),
            23 => Some(Self::YearMonth),
            24 => Some(Self::Date),
            25 => Some(Self::DateTime),
            41 => Some(Self::Path),
            _ => None,
        }
    }

    /// Wire size of the type when it has one
    pub fn fixed_size(self) -> Option<usize> {
        match self {
            Self::Bool => Some(1),
            Self::Float => Some(4),
            Self::Int | Self::Vid | Self::Double | Self::Timestamp => Some(8),
            Self::Unknown
            | Self::String
            | Self::Year
            | Self::YearMonth
            | Self::Date
            | Self::DateTime
            | Self::Path => None,
        }
    }
}
