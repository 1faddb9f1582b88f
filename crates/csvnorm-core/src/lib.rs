//! Row processing for the CSV normalizer.
//!
//! - **reader**: CSV input handling (header extraction, lossy decoding)
//! - **processor**: the lazy per-row normalization iterator
//! - **pipeline**: single-pass reader-to-writer wiring with the
//!   drop-and-report policy for failed rows

pub mod pipeline;
pub mod processor;
pub mod reader;

pub use pipeline::{RunStats, normalize_stream};
pub use processor::{DroppedRow, RowProcessor, normalize_row};
pub use reader::{csv_reader, decode_record, header_set};
