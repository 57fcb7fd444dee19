//! Parameter slots: one validated value per user input.

use num_bigint::BigInt;
use thiserror::Error;

use crate::core::format::format;
use crate::core::lexer::{self, ParseError};
use crate::core::range::{Predicate, validate};
use crate::core::types::{DisplayText, ParameterKind, ParameterView};

/// Why a slot currently holds no value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SlotError {
    #[error("empty input")]
    EmptyInput,
    #[error("not an integer literal")]
    MalformedInteger,
    #[error("{}", .0.describe())]
    OutOfRange(Predicate),
}

impl From<ParseError> for SlotError {
    fn from(err: ParseError) -> Self {
        match err {
            ParseError::Empty => SlotError::EmptyInput,
            ParseError::Malformed => SlotError::MalformedInteger,
        }
    }
}

/// Range check applied to each kind unless overridden.
pub fn default_predicate(kind: ParameterKind) -> Predicate {
    match kind {
        ParameterKind::Base => Predicate::Any,
        ParameterKind::Exponent => Predicate::NonNegative,
        ParameterKind::Modulus => Predicate::NonZero,
    }
}

/// Holds the validated value of one parameter.
///
/// `value` is only ever the result of the most recent [`reparse`]; a failed
/// reparse clears it.
///
/// [`reparse`]: ParameterSlot::reparse
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterSlot {
    kind: ParameterKind,
    predicate: Predicate,
    value: Option<BigInt>,
    error: Option<SlotError>,
}

impl ParameterSlot {
    pub fn new(kind: ParameterKind) -> Self {
        Self::with_predicate(kind, default_predicate(kind))
    }

    pub fn with_predicate(kind: ParameterKind, predicate: Predicate) -> Self {
        Self {
            kind,
            predicate,
            value: None,
            error: None,
        }
    }

    pub fn kind(&self) -> ParameterKind {
        self.kind
    }

    pub fn predicate(&self) -> Predicate {
        self.predicate
    }

    pub fn value(&self) -> Option<&BigInt> {
        self.value.as_ref()
    }

    /// Failure from the last reparse; `None` if valid or never parsed.
    pub fn error(&self) -> Option<SlotError> {
        self.error
    }

    /// Parse and range-check `raw`, replacing the stored value.
    ///
    /// Returns true iff a value is stored afterwards.
    pub fn reparse(&mut self, raw: &str) -> bool {
        let checked = lexer::parse(raw)
            .into_result()
            .map_err(SlotError::from)
            .and_then(|value| {
                validate(value, self.predicate).ok_or(SlotError::OutOfRange(self.predicate))
            });
        match checked {
            Ok(value) => {
                self.value = Some(value);
                self.error = None;
            }
            Err(err) => {
                self.value = None;
                self.error = Some(err);
            }
        }
        self.value.is_some()
    }

    pub fn display(&self) -> DisplayText {
        match self.kind {
            ParameterKind::Base => format(self.value(), true),
            ParameterKind::Exponent | ParameterKind::Modulus => format(self.value(), false),
        }
    }

    pub fn view(&self) -> ParameterView {
        ParameterView {
            name: self.kind.name(),
            display: self.display(),
            error: self.error.map(|err| err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reparse_stores_valid_value() {
        let mut slot = ParameterSlot::new(ParameterKind::Exponent);
        assert!(slot.reparse(" 12 "));
        assert_eq!(slot.value(), Some(&BigInt::from(12)));
        assert_eq!(slot.error(), None);
    }

    #[test]
    fn reparse_failure_clears_previous_value() {
        let mut slot = ParameterSlot::new(ParameterKind::Modulus);
        assert!(slot.reparse("13"));
        assert!(!slot.reparse("0"));
        assert_eq!(slot.value(), None);
        assert_eq!(
            slot.error(),
            Some(SlotError::OutOfRange(Predicate::NonZero))
        );
    }

    #[test]
    fn parse_and_range_failures_are_distinguished_internally() {
        let mut slot = ParameterSlot::new(ParameterKind::Exponent);
        assert!(!slot.reparse(""));
        assert_eq!(slot.error(), Some(SlotError::EmptyInput));
        assert!(!slot.reparse("x"));
        assert_eq!(slot.error(), Some(SlotError::MalformedInteger));
        assert!(!slot.reparse("-1"));
        assert_eq!(slot.view().error.as_deref(), Some("must be non-negative"));
    }

    #[test]
    fn base_accepts_negative_and_displays_with_parens() {
        let mut slot = ParameterSlot::new(ParameterKind::Base);
        assert!(slot.reparse("-7"));
        let view = slot.view();
        assert_eq!(view.name, "base");
        assert_eq!(view.display.text, "\u{2212}7");
        assert!(view.display.requires_parens);
    }

    #[test]
    fn fresh_slot_displays_placeholder() {
        let slot = ParameterSlot::new(ParameterKind::Base);
        assert_eq!(slot.display().text, "???");
        assert_eq!(slot.view().error, None);
    }

    #[test]
    fn custom_predicate_overrides_default() {
        let mut slot = ParameterSlot::with_predicate(ParameterKind::Base, Predicate::NonZero);
        assert_eq!(slot.predicate(), Predicate::NonZero);
        assert!(!slot.reparse("0"));
    }
}
