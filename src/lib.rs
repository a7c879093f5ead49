pub mod col;
mod opts;
pub mod constant;
pub mod error;
pub mod protocol;
pub mod row;
pub mod rowset;
pub mod schema;

pub use opts::Opts;
pub use row::RowReader;
pub use rowset::{RowIter, RowSet};
pub use schema::{ResultSchema, SchemaProvider};
