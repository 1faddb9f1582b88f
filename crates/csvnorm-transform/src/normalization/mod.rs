//! Per-column normalization functions.
//!
//! - **timestamp**: 12-hour US-formatted local times to ISO 8601
//! - **zip**: left zero-padding to five characters
//! - **name**: invariant Unicode case folding
//! - **duration**: `hours:minutes:seconds[.fraction]` to total seconds,
//!   plus the derived sum of the two duration columns

pub mod duration;
pub mod name;
pub mod timestamp;
pub mod zip;
