//! Full-name normalization.

use csvnorm_model::CaseFolding;

/// Uppercase a name using locale-independent Unicode case folding.
///
/// Multi-byte and non-ASCII scripts are folded without corruption; code
/// points with no uppercase form pass through unchanged. `Preserve` mode
/// returns the value as-is.
pub fn normalize_full_name(value: &str, mode: CaseFolding) -> String {
    match mode {
        CaseFolding::Invariant => value.to_uppercase(),
        CaseFolding::Preserve => value.to_string(),
    }
}
