//! Display formatting for parameter and power outputs.

use num_bigint::{BigInt, Sign};

use crate::core::types::DisplayText;

/// Placeholder shown wherever a value is unavailable.
pub const NO_VALUE: &str = "???";

/// U+2212 MINUS SIGN, used for a negative base.
pub const MINUS: char = '\u{2212}';

/// Render a value (or its absence) for display.
///
/// A negative base is rendered with [`MINUS`] and flagged for
/// parenthesization; every other value uses its plain decimal form.
pub fn format(value: Option<&BigInt>, is_base: bool) -> DisplayText {
    match value {
        None => DisplayText {
            text: NO_VALUE.to_string(),
            requires_parens: false,
        },
        Some(value) if is_base && value.sign() == Sign::Minus => DisplayText {
            text: format!("{MINUS}{}", value.magnitude()),
            requires_parens: true,
        },
        Some(value) => DisplayText {
            text: value.to_string(),
            requires_parens: false,
        },
    }
}
