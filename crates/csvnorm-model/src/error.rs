use thiserror::Error;

/// Row-scoped normalization failures.
///
/// Both kinds carry the column name, the raw value, and the underlying
/// cause so the diagnostic output is enough to debug the source data.
/// Neither is fatal to a run: the row processor drops the offending row
/// and continues.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormalizeError {
    #[error("column {column}: cannot parse {value:?} as a date/time: {reason}")]
    Parse {
        column: String,
        value: String,
        reason: String,
    },
    #[error("column {column}: {value:?} is not a valid number: {reason}")]
    Number {
        column: String,
        value: String,
        reason: String,
    },
}

impl NormalizeError {
    pub fn parse(
        column: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::Parse {
            column: column.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    pub fn number(
        column: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::Number {
            column: column.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Name of the column the failure occurred in.
    pub fn column(&self) -> &str {
        match self {
            Self::Parse { column, .. } | Self::Number { column, .. } => column,
        }
    }
}

pub type Result<T> = std::result::Result<T, NormalizeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_column_value_and_cause() {
        let error = NormalizeError::parse("Timestamp", "not a date", "bad pattern");
        assert_eq!(error.column(), "Timestamp");
        let text = error.to_string();
        assert!(text.contains("Timestamp"));
        assert!(text.contains("not a date"));
        assert!(text.contains("bad pattern"));

        let error = NormalizeError::number("FooDuration", "0a:25:36", "invalid digit");
        assert_eq!(error.column(), "FooDuration");
        assert!(error.to_string().contains("0a:25:36"));
    }
}
