//! Per-parameter range predicates.

use num_bigint::{BigInt, Sign};

/// Range check attached to a parameter slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Predicate {
    /// Every integer is accepted.
    Any,
    /// `value >= 0`.
    NonNegative,
    /// `value != 0`.
    NonZero,
}

impl Predicate {
    pub fn holds(self, value: &BigInt) -> bool {
        match self {
            Predicate::Any => true,
            Predicate::NonNegative => value.sign() != Sign::Minus,
            Predicate::NonZero => value.sign() != Sign::NoSign,
        }
    }

    /// Human-readable requirement, used in failure reasons.
    pub fn describe(self) -> &'static str {
        match self {
            Predicate::Any => "none",
            Predicate::NonNegative => "must be non-negative",
            Predicate::NonZero => "must be nonzero",
        }
    }
}

/// Return `value` unchanged if it satisfies `predicate`.
pub fn validate(value: BigInt, predicate: Predicate) -> Option<BigInt> {
    predicate.holds(&value).then_some(value)
}
