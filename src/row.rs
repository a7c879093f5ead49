use zerocopy::{FromBytes, Immutable, KnownLayout};

use crate::constant::FieldType;
use crate::error::{Error, Result};
use crate::schema::SchemaProvider;

/// Zero-copy view of one row payload bound to the row set's schema.
/// Interpreting the field bytes is left to the caller.
#[derive(Debug, Clone, Copy)]
pub struct RowReader<'a> {
    schema: &'a dyn SchemaProvider,
    data: &'a [u8],
}

impl<'a> RowReader<'a> {
    pub fn new(schema: &'a dyn SchemaProvider, data: &'a [u8]) -> Self {
        Self { schema, data }
    }

    pub fn schema(&self) -> &'a dyn SchemaProvider {
        self.schema
    }

    /// Raw payload bytes, without the length prefix
    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn num_fields(&self) -> usize {
        self.schema.num_fields()
    }

    pub fn field_index(&self, name: &str) -> Option<usize> {
        self.schema.field_index(name)
    }

    pub fn field_type(&self, name: &str) -> Option<FieldType> {
        self.schema.field_type(self.field_index(name)?)
    }

    /// Reinterpret the whole payload as a fixed-layout struct without copying.
    ///
    /// Use `#[repr(C, packed)]` structs of little-endian zerocopy types so the
    /// layout does not depend on alignment or host byte order.
    pub fn ref_from_payload<T>(&self) -> Result<&'a T>
    where
        T: FromBytes + KnownLayout + Immutable,
    {
        T::ref_from_bytes(self.data).map_err(|_| Error::PayloadLayout {
            type_name: std::any::type_name::<T>(),
            len: self.data.len(),
        })
    }
}
