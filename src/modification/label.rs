//! Human-readable labels for modification calls.

use std::collections::HashMap;
use std::sync::LazyLock;

/// The label used for codes that are not in the code table.
pub const UNKNOWN: &str = "Unknown";

/// The largest likelihood value (which represents certainty).
const MAX_LIKELIHOOD: u32 = u8::MAX as u32;

/// The fixed table of modification codes to their names.
static NAMES: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        ("m", "5mC"),
        ("h", "5hmC"),
        ("f", "5fC"),
        ("c", "5caC"),
        ("g", "5hmU"),
        ("e", "5fU"),
        ("b", "5caU"),
        ("a", "6mA"),
        ("o", "8xoG"),
        ("n", "Xao"),
        ("C", "Unknown C"),
        ("T", "Unknown T"),
        ("A", "Unknown A"),
        ("G", "Unknown G"),
        ("N", UNKNOWN),
    ])
});

/// Looks up the name of a modification code in the fixed code table.
///
/// # Examples
///
/// ```
/// use modtags::modification::label;
///
/// assert_eq!(label::lookup("m"), Some("5mC"));
/// assert_eq!(label::lookup("C"), Some("Unknown C"));
/// assert_eq!(label::lookup("z"), None);
/// ```
pub fn lookup(code: &str) -> Option<&'static str> {
    NAMES.get(code).copied()
}

/// Converts a likelihood byte to a whole percentage.
///
/// The likelihood is scaled linearly over `0..=255` and rounded half up.
///
/// # Examples
///
/// ```
/// use modtags::modification::label;
///
/// assert_eq!(label::percentage(0), 0);
/// assert_eq!(label::percentage(128), 50);
/// assert_eq!(label::percentage(255), 100);
/// ```
pub fn percentage(likelihood: u8) -> u8 {
    // floor((100 * l) / 255 + 1/2) in integer arithmetic.
    ((u32::from(likelihood) * 200 + MAX_LIKELIHOOD) / (2 * MAX_LIKELIHOOD)) as u8
}

/// Formats a modification code and likelihood for display.
///
/// Codes that are not in the code table are labeled as [`UNKNOWN`]. ChEBI
/// identifiers are not in the table, so they are labeled as [`UNKNOWN`] here.
/// [`BaseModificationSet::label()`](crate::BaseModificationSet::label) shows
/// the identifier instead. This function never fails.
///
/// # Examples
///
/// ```
/// use modtags::label;
///
/// assert_eq!(label("m", 255), "Base modification: 5mC (100%)");
/// assert_eq!(label("z", 128), "Base modification: Unknown (50%)");
/// ```
pub fn label(code: &str, likelihood: u8) -> String {
    format_name(lookup(code).unwrap_or(UNKNOWN), likelihood)
}

/// Formats an already resolved modification name and likelihood.
pub(crate) fn format_name(name: &str, likelihood: u8) -> String {
    format!("Base modification: {} ({}%)", name, percentage(likelihood))
}

/// An alias for [`label()`].
pub fn value_string(code: &str, likelihood: u8) -> String {
    label(code, likelihood)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes() {
        assert_eq!(label("m", 255), "Base modification: 5mC (100%)");
        assert_eq!(label("h", 0), "Base modification: 5hmC (0%)");
        assert_eq!(label("a", 191), "Base modification: 6mA (75%)");
        assert_eq!(label("N", 255), "Base modification: Unknown (100%)");
        assert_eq!(label("G", 255), "Base modification: Unknown G (100%)");
    }

    #[test]
    fn unknown_codes() {
        assert_eq!(value_string("z", 128), "Base modification: Unknown (50%)");
        assert_eq!(label("76792", 255), "Base modification: Unknown (100%)");
        assert_eq!(label("", 1), "Base modification: Unknown (0%)");
    }

    #[test]
    fn percentages_round_half_up() {
        // 100 * 1 / 255 = 0.39
        assert_eq!(percentage(1), 0);
        // 100 * 2 / 255 = 0.78
        assert_eq!(percentage(2), 1);
        // 100 * 127 / 255 = 49.8
        assert_eq!(percentage(127), 50);
        // 100 * 254 / 255 = 99.6
        assert_eq!(percentage(254), 100);
    }
}
