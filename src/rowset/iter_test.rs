use pretty_assertions::assert_eq;

use crate::Opts;
use crate::col::Column;
use crate::constant::FieldType;
use crate::rowset::RowIter;
use crate::schema::{ResultSchema, SchemaProvider};

fn schema() -> ResultSchema {
    ResultSchema::new(vec![Column::new("id", FieldType::Int)])
}

// [2]"ab" [0]"" [3]"xyz"
static DATA: &[u8] = &[0x02, b'a', b'b', 0x00, 0x03, b'x', b'y', b'z'];

#[test]
fn test_new_at_zero_is_positioned() {
    let schema = schema();
    let iter = RowIter::new(Some(&schema), DATA, 0, Opts::default());
    assert!(iter.is_valid());
    assert_eq!(iter.offset(), 0);
    assert_eq!(iter.row_len(), 3);
    assert_eq!(iter.row().data(), b"ab");
}

#[test]
fn test_new_mid_buffer_decodes_there() {
    let schema = schema();
    let iter = RowIter::new(Some(&schema), DATA, 4, Opts::default());
    assert_eq!(iter.row().data(), b"xyz");
    assert_eq!(iter.row_len(), 4);
}

#[test]
fn test_advance_walks_records() {
    let schema = schema();
    let mut iter = RowIter::new(Some(&schema), DATA, 0, Opts::default());

    iter.advance();
    assert_eq!(iter.offset(), 3);
    assert_eq!(iter.row_len(), 1);
    assert!(iter.row().is_empty());

    iter.advance();
    assert_eq!(iter.offset(), 4);
    assert_eq!(iter.row().data(), b"xyz");

    iter.advance();
    assert!(!iter.is_valid());
    assert_eq!(iter.offset(), DATA.len());
    assert_eq!(iter.row_len(), 0);
    assert!(iter.get().is_none());

    // Advancing an exhausted cursor stays put
    iter.advance();
    assert_eq!(iter.offset(), DATA.len());
}

#[test]
fn test_offset_past_end_is_clamped() {
    let schema = schema();
    let iter = RowIter::new(Some(&schema), DATA, DATA.len() + 5, Opts::default());
    assert!(!iter.is_valid());
    assert_eq!(iter.offset(), DATA.len());
}

#[test]
fn test_no_schema_is_exhausted() {
    let iter = RowIter::new(None, DATA, 0, Opts::default());
    assert!(!iter.is_valid());
    assert_eq!(iter.offset(), DATA.len());
    assert!(iter.get().is_none());
}

#[test]
fn test_equality_is_positional() {
    let schema = schema();
    let a = RowIter::new(Some(&schema), DATA, 0, Opts::default());
    let mut b = RowIter::new(Some(&schema), DATA, 0, Opts::default());
    assert_eq!(a, b);

    let before = b.clone();
    b.advance();
    assert_ne!(b, before);
    assert_ne!(a, b);
}

#[test]
fn test_equality_uses_schema_identity() {
    let s1 = schema();
    let s2 = schema();
    // Same content, different objects
    assert_eq!(s1, s2);

    let a = RowIter::new(Some(&s1), DATA, 0, Opts::default());
    let b = RowIter::new(Some(&s2), DATA, 0, Opts::default());
    assert_ne!(a, b);
}

#[test]
fn test_equality_uses_buffer_identity() {
    let schema = schema();
    let copy = DATA.to_vec();
    let a = RowIter::new(Some(&schema), DATA, 0, Opts::default());
    let b = RowIter::new(Some(&schema), &copy, 0, Opts::default());
    assert_ne!(a, b);

    // A shorter view over the same bytes is a different buffer
    let c = RowIter::new(Some(&schema), &DATA[..3], 0, Opts::default());
    assert_ne!(a, c);
}

#[test]
fn test_malformed_prefix_forces_end() {
    let schema = schema();
    let data = [0x02, b'a', b'b', 0xFF, 0xFF];
    let mut iter = RowIter::new(Some(&schema), &data, 0, Opts::default());
    assert!(iter.is_valid());

    iter.advance();
    assert!(!iter.is_valid());
    assert_eq!(iter.offset(), data.len());
    assert!(iter.get().is_none());

    let end = RowIter::new(Some(&schema), &data, data.len(), Opts::default());
    assert_eq!(iter, end);
}

#[test]
fn test_rows_share_the_schema() {
    let schema = schema();
    let iter = RowIter::new(Some(&schema), DATA, 0, Opts::default());
    let row = iter.row();
    assert!(std::ptr::addr_eq(row.schema(), &schema as &dyn SchemaProvider));
    assert_eq!(row.num_fields(), 1);
}

#[test]
fn test_size_hint() {
    let schema = schema();
    let iter = RowIter::new(Some(&schema), DATA, 0, Opts::default());
    assert_eq!(iter.size_hint(), (1, Some(DATA.len())));

    let end = RowIter::new(Some(&schema), DATA, DATA.len(), Opts::default());
    assert_eq!(end.size_hint(), (0, Some(0)));
}

#[test]
#[should_panic(expected = "exhausted")]
fn test_row_on_exhausted_cursor_panics() {
    let schema = schema();
    let iter = RowIter::new(Some(&schema), DATA, DATA.len(), Opts::default());
    let _ = iter.row();
}
