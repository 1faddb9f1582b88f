//! Row and header types shared across the normalizer.

use std::collections::HashMap;

/// Ordered set of unique column names read once from the input's first
/// record.
///
/// Names are trimmed (a leading UTF-8 BOM is stripped as well) and looked
/// up case-insensitively. Duplicate names keep the first occurrence; later
/// duplicates are dropped from the set and recorded so callers can warn.
/// The set defines both input field lookup and output column order and is
/// immutable for the duration of a run.
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderSet {
    names: Vec<String>,
    /// Lowercased name -> field position in the original input record.
    positions: HashMap<String, usize>,
    duplicates: Vec<String>,
}

impl HeaderSet {
    pub fn from_fields<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut names = Vec::new();
        let mut positions = HashMap::new();
        let mut duplicates = Vec::new();
        for (position, field) in fields.into_iter().enumerate() {
            let name = field.as_ref().trim_start_matches('\u{feff}').trim();
            let key = name.to_lowercase();
            if positions.contains_key(&key) {
                duplicates.push(name.to_string());
                continue;
            }
            positions.insert(key, position);
            names.push(name.to_string());
        }
        Self {
            names,
            positions,
            duplicates,
        }
    }

    /// Column names in output order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Field position for a column name, matched case-insensitively.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.positions.get(&name.to_lowercase()).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Duplicate names that were dropped (first occurrence wins).
    pub fn dropped_duplicates(&self) -> &[String] {
        &self.duplicates
    }
}

/// One input record: trimmed field values plus a 1-based record number
/// for diagnostics. Never mutated; read-only source for normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    record_number: u64,
    values: Vec<String>,
}

impl RawRow {
    pub fn new(record_number: u64, values: Vec<String>) -> Self {
        Self {
            record_number,
            values,
        }
    }

    pub fn record_number(&self) -> u64 {
        self.record_number
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Field value for a column, resolved through the header set.
    ///
    /// Unknown columns and missing trailing fields (short records) read
    /// as the empty string.
    pub fn get<'a>(&'a self, headers: &HeaderSet, name: &str) -> &'a str {
        headers
            .position(name)
            .and_then(|position| self.values.get(position))
            .map_or("", String::as_str)
    }
}

/// One output record: transformed field values in header order. Either
/// written in full or the source row was dropped; never partial.
pub type NormalizedRow = Vec<String>;
