pub mod primitive;
pub mod response;
mod row;

pub use row::{RowFrame, read_row_frame};
