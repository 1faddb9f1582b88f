//! The row processor.
//!
//! Rows are processed independently, in input order, one at a time. Each
//! row either normalizes completely or fails as a whole; the outcome is
//! an explicit per-row result rather than control-flow interruption, so
//! the caller decides what to do with failures.

use csvnorm_model::{HeaderSet, NormalizeError, NormalizedRow, NormalizeOptions, RawRow};
use csvnorm_transform::{BAR_DURATION, FOO_DURATION, RuleSet, is_total_duration, total_duration};

/// Normalize one raw row into output field values in header order.
///
/// The derived total-duration column bypasses rule dispatch and is
/// computed from the row's two duration fields; every other column goes
/// through the rule set. The first failing field fails the whole row.
pub fn normalize_row(
    headers: &HeaderSet,
    row: &RawRow,
    rules: &RuleSet,
    options: &NormalizeOptions,
) -> csvnorm_model::Result<NormalizedRow> {
    let mut fields = Vec::with_capacity(headers.len());
    for name in headers.names() {
        let field = if is_total_duration(name) {
            total_duration(row.get(headers, FOO_DURATION), row.get(headers, BAR_DURATION))?
        } else {
            rules.normalize(name, row.get(headers, name), options)?
        };
        fields.push(field);
    }
    Ok(fields)
}

/// A row discarded by the processor, with enough context to report it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DroppedRow {
    pub record_number: u64,
    pub error: NormalizeError,
}

/// Lazy, single-pass iterator over raw rows yielding per-row outcomes.
///
/// Consumes the input sequence exactly once and holds no cross-row
/// state; memory use is bounded to one row at a time.
pub struct RowProcessor<'a, I> {
    headers: &'a HeaderSet,
    rules: &'a RuleSet,
    options: &'a NormalizeOptions,
    rows: I,
}

impl<'a, I> RowProcessor<'a, I>
where
    I: Iterator<Item = RawRow>,
{
    pub fn new(
        headers: &'a HeaderSet,
        rules: &'a RuleSet,
        options: &'a NormalizeOptions,
        rows: I,
    ) -> Self {
        Self {
            headers,
            rules,
            options,
            rows,
        }
    }
}

impl<I> Iterator for RowProcessor<'_, I>
where
    I: Iterator<Item = RawRow>,
{
    type Item = Result<NormalizedRow, DroppedRow>;

    fn next(&mut self) -> Option<Self::Item> {
        let row = self.rows.next()?;
        Some(
            normalize_row(self.headers, &row, self.rules, self.options).map_err(|error| {
                DroppedRow {
                    record_number: row.record_number(),
                    error,
                }
            }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(record_number: u64, values: &[&str]) -> RawRow {
        RawRow::new(
            record_number,
            values.iter().map(|v| (*v).to_string()).collect(),
        )
    }

    #[test]
    fn rows_normalize_in_header_order() {
        let headers = HeaderSet::from_fields(["Column1", "FullName", "ZIP"]);
        let row = raw(1, &["Test", "name1", "1"]);
        let normalized = normalize_row(
            &headers,
            &row,
            &RuleSet::default(),
            &NormalizeOptions::default(),
        )
        .unwrap();
        assert_eq!(normalized, ["Test", "NAME1", "00001"]);
    }

    #[test]
    fn total_duration_bypasses_dispatch() {
        let headers = HeaderSet::from_fields(["FooDuration", "BarDuration", "TotalDuration"]);
        let row = raw(1, &["1:23:45.678", "1:23:32.123", "ignored input"]);
        let normalized = normalize_row(
            &headers,
            &row,
            &RuleSet::default(),
            &NormalizeOptions::default(),
        )
        .unwrap();
        assert_eq!(normalized, ["5025.678", "5012.123", "10037.801"]);
    }

    #[test]
    fn total_duration_without_source_columns_fails_the_row() {
        let headers = HeaderSet::from_fields(["TotalDuration"]);
        let row = raw(1, &["whatever"]);
        let error = normalize_row(
            &headers,
            &row,
            &RuleSet::default(),
            &NormalizeOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(error, NormalizeError::Number { .. }));
    }

    #[test]
    fn processor_yields_outcomes_per_row_in_order() {
        let headers = HeaderSet::from_fields(["FullName", "FooDuration"]);
        let rules = RuleSet::default();
        let options = NormalizeOptions::default();
        let rows = vec![
            raw(1, &["good", "0:01:00"]),
            raw(2, &["bad", "0a:25:36.159"]),
            raw(3, &["also good", "0:00:01"]),
        ];
        let outcomes: Vec<_> =
            RowProcessor::new(&headers, &rules, &options, rows.into_iter()).collect();
        assert_eq!(outcomes.len(), 3);
        assert_eq!(outcomes[0], Ok(vec!["GOOD".to_string(), "60".to_string()]));
        let dropped = outcomes[1].as_ref().unwrap_err();
        assert_eq!(dropped.record_number, 2);
        assert_eq!(dropped.error.column(), "FooDuration");
        assert!(outcomes[2].is_ok());
    }
}
