use crate::constant::FieldType;
use crate::protocol::response::ColumnDesc;

/// Column of an owned result schema
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub name: String,
    pub field_type: FieldType,
}

impl Column {
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
        }
    }
}

impl From<ColumnDesc> for Column {
    /// Type codes this crate does not know become `FieldType::Unknown`
    fn from(desc: ColumnDesc) -> Self {
        Self {
            name: desc.name,
            field_type: FieldType::from_u8(desc.type_code).unwrap_or(FieldType::Unknown),
        }
    }
}
