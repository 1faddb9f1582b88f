//! The single-pass normalization pipeline.
//!
//! Wires the stages together: csv reader, row processor, csv writer.
//! Per-row failures are reported to the diagnostic channel (tracing) and
//! the run continues; stream-level read or write failures abort the run.

use std::io::{Read, Write};

use anyhow::{Context, Result};
use csv::ByteRecord;
use tracing::{debug, info, warn};

use csvnorm_model::NormalizeOptions;
use csvnorm_transform::RuleSet;

use crate::processor::RowProcessor;
use crate::reader::{csv_reader, decode_record, header_set};

/// Counts for one completed run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    pub rows_read: u64,
    pub rows_emitted: u64,
    pub rows_dropped: u64,
}

/// Normalize a CSV stream from `input` to `output` in one pass.
///
/// The first record defines the column header set and is echoed to the
/// output (deduplicated, original order). Each data row is normalized
/// through the rule set; rows that fail are dropped with a warning
/// carrying the row number, column, raw value, and cause. An empty input
/// produces empty output.
pub fn normalize_stream<R: Read, W: Write>(
    input: R,
    output: W,
    rules: &RuleSet,
    options: &NormalizeOptions,
) -> Result<RunStats> {
    let mut reader = csv_reader(input);

    let mut header_record = ByteRecord::new();
    if !reader
        .read_byte_record(&mut header_record)
        .context("read csv header")?
    {
        debug!("input stream is empty; nothing to write");
        return Ok(RunStats::default());
    }
    let headers = header_set(&header_record);
    for name in headers.dropped_duplicates() {
        warn!(column = %name, "duplicate header column dropped; first occurrence wins");
    }

    let mut writer = csv::Writer::from_writer(output);
    writer
        .write_record(headers.names())
        .context("write csv header")?;

    let mut stats = RunStats::default();
    let mut rows_read = 0u64;
    let mut read_error: Option<csv::Error> = None;
    {
        let rows = reader.byte_records().map_while(|record| match record {
            Ok(record) => {
                rows_read += 1;
                Some(decode_record(&record, rows_read))
            }
            Err(error) => {
                read_error = Some(error);
                None
            }
        });
        for outcome in RowProcessor::new(&headers, rules, options, rows) {
            match outcome {
                Ok(row) => {
                    writer.write_record(&row).context("write csv record")?;
                    stats.rows_emitted += 1;
                }
                Err(dropped) => {
                    warn!(
                        row = dropped.record_number,
                        error = %dropped.error,
                        "dropping row"
                    );
                    stats.rows_dropped += 1;
                }
            }
        }
    }
    if let Some(error) = read_error {
        return Err(error).context("read csv record");
    }
    stats.rows_read = rows_read;
    writer.flush().context("flush csv output")?;
    info!(
        rows_read = stats.rows_read,
        rows_emitted = stats.rows_emitted,
        rows_dropped = stats.rows_dropped,
        "normalization complete"
    );
    Ok(stats)
}
