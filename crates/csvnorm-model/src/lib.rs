pub mod error;
pub mod options;
pub mod table;

pub use error::{NormalizeError, Result};
pub use options::{CaseFolding, NormalizeOptions};
pub use table::{HeaderSet, NormalizedRow, RawRow};
