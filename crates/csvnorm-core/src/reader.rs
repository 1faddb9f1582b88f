//! CSV input handling.
//!
//! Records are read as byte records and decoded with lossy UTF-8 so that
//! bytes unrepresentable in the working encoding become U+FFFD and flow
//! through pass-through columns unchanged. Field values are trimmed, and
//! record lengths are flexible: short records read missing trailing
//! fields as empty.

use std::io::Read;

use csv::{ByteRecord, ReaderBuilder};

use csvnorm_model::{HeaderSet, RawRow};

/// Build the CSV reader used by the pipeline.
///
/// Header handling is done by the pipeline itself (the first record is
/// read explicitly), so the reader is configured without one.
pub fn csv_reader<R: Read>(input: R) -> csv::Reader<R> {
    ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(input)
}

/// Decode the header record into the run's column header set.
pub fn header_set(record: &ByteRecord) -> HeaderSet {
    HeaderSet::from_fields(record.iter().map(String::from_utf8_lossy))
}

/// Decode a data record into a raw row with trimmed field values.
pub fn decode_record(record: &ByteRecord, record_number: u64) -> RawRow {
    let values = record
        .iter()
        .map(|field| String::from_utf8_lossy(field).trim().to_string())
        .collect();
    RawRow::new(record_number, values)
}
