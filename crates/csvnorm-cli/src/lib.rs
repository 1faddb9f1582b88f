//! Library surface of the CSV normalizer CLI.
//!
//! Only the logging setup lives here so the binary and tests share one
//! subscriber configuration.

pub mod logging;
