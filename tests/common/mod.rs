//! Buffer builders shared by the integration tests.

use zero_rowset::col::Column;
use zero_rowset::constant::FieldType;
use zero_rowset::protocol::response::{ColumnDesc, SchemaDescription};
use zero_rowset::ResultSchema;

pub fn write_uvarint(out: &mut Vec<u8>, mut value: u64) {
    while value >= 0x80 {
        out.push((value as u8) | 0x80);
        value >>= 7;
    }
    out.push(value as u8);
}

/// Concatenate `[varint len][payload]` records
pub fn encode_rows<P: AsRef<[u8]>>(rows: &[P]) -> Vec<u8> {
    let mut out = Vec::new();
    for row in rows {
        let row = row.as_ref();
        write_uvarint(&mut out, row.len() as u64);
        out.extend_from_slice(row);
    }
    out
}

/// Deterministic payloads of varying length, some long enough for 2- and 3-byte prefixes
pub fn sample_rows(n: usize) -> Vec<Vec<u8>> {
    let mut seed: u32 = 0x9E37_79B9;
    (0..n)
        .map(|i| {
            let len = match i % 5 {
                0 => 0,
                1 => 7,
                2 => 127,
                3 => 128,
                _ => 20_000,
            };
            (0..len)
                .map(|_| {
                    seed ^= seed << 13;
                    seed ^= seed >> 17;
                    seed ^= seed << 5;
                    seed as u8
                })
                .collect()
        })
        .collect()
}

pub fn description() -> SchemaDescription {
    SchemaDescription {
        columns: vec![
            ColumnDesc::new("id", FieldType::Vid as u8),
            ColumnDesc::new("name", FieldType::String as u8),
            ColumnDesc::new("score", FieldType::Double as u8),
        ],
    }
}

pub fn schema() -> ResultSchema {
    ResultSchema::new(vec![
        Column::new("id", FieldType::Vid),
        Column::new("name", FieldType::String),
        Column::new("score", FieldType::Double),
    ])
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}
