//! Value normalization rules for the CSV normalizer.
//!
//! This crate holds the pure, stateless transformation logic:
//!
//! - **normalization**: the per-column rules (timestamp, zip, full name,
//!   duration) and the derived total-duration computation
//! - **registry**: the column-to-rule lookup table driving dispatch
//!
//! Everything here is pure given its inputs; failure is signaled through
//! [`csvnorm_model::NormalizeError`] rather than side effects.

pub mod normalization;
pub mod registry;

pub use normalization::duration::{duration_seconds, normalize_duration, total_duration};
pub use normalization::name::normalize_full_name;
pub use normalization::timestamp::normalize_timestamp;
pub use normalization::zip::normalize_zip;
pub use registry::{
    BAR_DURATION, FOO_DURATION, FULL_NAME, Rule, RuleSet, TIMESTAMP, TOTAL_DURATION, ZIP,
    is_total_duration,
};
