/// Column entry of a schema description as it arrives in a response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDesc {
    pub name: String,
    /// Raw `FieldType` code
    pub type_code: u8,
}

impl ColumnDesc {
    pub fn new(name: impl Into<String>, type_code: u8) -> Self {
        Self {
            name: name.into(),
            type_code,
        }
    }
}

/// Schema description embedded in a response
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaDescription {
    pub columns: Vec<ColumnDesc>,
}

/// Query response carrying an optional schema and an optional row buffer
///
/// Both parts are independently optional. A row set built from the response
/// moves them out, leaving the rest of the response untouched.
#[derive(Debug, Clone, Default)]
pub struct QueryResponse {
    pub schema: Option<SchemaDescription>,
    pub data: Option<Vec<u8>>,
}

impl QueryResponse {
    pub fn new(schema: Option<SchemaDescription>, data: Option<Vec<u8>>) -> Self {
        Self { schema, data }
    }

    pub fn take_schema(&mut self) -> Option<SchemaDescription> {
        self.schema.take()
    }

    pub fn take_data(&mut self) -> Option<Vec<u8>> {
        self.data.take()
    }
}
