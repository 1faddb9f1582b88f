//! Column-to-rule dispatch.
//!
//! Dispatch is a lookup table rather than a branching construct: each
//! recognized column name maps to a [`Rule`] variant, and adding a column
//! means registering another entry, not editing a match over names.

use std::collections::HashMap;

use csvnorm_model::{NormalizeOptions, Result};

use crate::normalization::duration::normalize_duration;
use crate::normalization::name::normalize_full_name;
use crate::normalization::timestamp::normalize_timestamp;
use crate::normalization::zip::normalize_zip;

pub const TIMESTAMP: &str = "Timestamp";
pub const ZIP: &str = "ZIP";
pub const FULL_NAME: &str = "FullName";
pub const FOO_DURATION: &str = "FooDuration";
pub const BAR_DURATION: &str = "BarDuration";
/// Derived output column, computed from the two duration columns by the
/// row processor rather than through rule dispatch.
pub const TOTAL_DURATION: &str = "TotalDuration";

/// Returns true if the column is the derived total-duration column.
pub fn is_total_duration(column: &str) -> bool {
    column.eq_ignore_ascii_case(TOTAL_DURATION)
}

/// A per-column normalization strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// 12-hour source-zone timestamp to ISO 8601 in the target zone.
    Timestamp,
    /// Left zero-padding to five characters.
    ZeroPadZip,
    /// Invariant Unicode uppercasing.
    UppercaseName,
    /// `hours:minutes:seconds[.fraction]` to total seconds.
    DurationSeconds,
}

impl Rule {
    /// Short human-readable description, used by the `columns` listing.
    pub fn description(self) -> &'static str {
        match self {
            Rule::Timestamp => "convert source-zone timestamp to ISO 8601 in the target zone",
            Rule::ZeroPadZip => "left-pad with zeros to five characters",
            Rule::UppercaseName => "uppercase with invariant Unicode case folding",
            Rule::DurationSeconds => "convert hours:minutes:seconds to total seconds",
        }
    }
}

/// Lookup table mapping column names (case-insensitively) to rules.
///
/// Columns without an entry get the identity transform, including values
/// carrying U+FFFD substitutions made by the lossy input decoding.
#[derive(Debug, Clone)]
pub struct RuleSet {
    /// Lowercased column name -> rule.
    rules: HashMap<String, Rule>,
    /// Canonical column names in registration order, for listings.
    order: Vec<String>,
}

impl Default for RuleSet {
    /// The recognized column set of the normalizer.
    fn default() -> Self {
        Self::empty()
            .with_rule(TIMESTAMP, Rule::Timestamp)
            .with_rule(ZIP, Rule::ZeroPadZip)
            .with_rule(FULL_NAME, Rule::UppercaseName)
            .with_rule(FOO_DURATION, Rule::DurationSeconds)
            .with_rule(BAR_DURATION, Rule::DurationSeconds)
    }
}

impl RuleSet {
    /// A rule set with no entries; every column passes through unchanged.
    pub fn empty() -> Self {
        Self {
            rules: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Register a rule for a column. Re-registering an existing column
    /// replaces its rule and keeps the original listing position.
    #[must_use]
    pub fn with_rule(mut self, column: &str, rule: Rule) -> Self {
        let key = column.to_lowercase();
        if self.rules.insert(key, rule).is_none() {
            self.order.push(column.to_string());
        }
        self
    }

    /// The rule registered for a column, if any.
    pub fn rule_for(&self, column: &str) -> Option<Rule> {
        self.rules.get(&column.to_lowercase()).copied()
    }

    /// Registered columns and rules in registration order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, Rule)> {
        self.order.iter().map(|name| {
            let rule = self.rules[&name.to_lowercase()];
            (name.as_str(), rule)
        })
    }

    /// Normalize one field value by dispatching on its column name.
    ///
    /// Unrecognized columns are returned unchanged.
    pub fn normalize(&self, column: &str, value: &str, options: &NormalizeOptions) -> Result<String> {
        match self.rule_for(column) {
            Some(Rule::Timestamp) => {
                normalize_timestamp(column, value, options.source_zone, options.target_zone)
            }
            Some(Rule::ZeroPadZip) => Ok(normalize_zip(value)),
            Some(Rule::UppercaseName) => Ok(normalize_full_name(value, options.case_folding)),
            Some(Rule::DurationSeconds) => normalize_duration(column, value),
            None => Ok(value.to_string()),
        }
    }
}
