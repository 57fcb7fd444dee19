//! Modular exponentiation over signed arbitrary-precision integers.
//!
//! Results use the floored residue: the result carries the sign of the
//! modulus, so it lies in `[0, m)` for `m > 0` and in `(m, 0]` for `m < 0`.
//! This matches `num_bigint::BigInt::modpow`, which backs [`EngineKind::Native`].

use num_bigint::{BigInt, Sign};
use num_integer::Integer;
use num_traits::{One, Signed, Zero};
use serde::{Deserialize, Serialize};

/// Computes `base^exponent mod modulus`.
///
/// Callers guarantee `exponent >= 0` and `modulus != 0`.
pub trait ModPow {
    fn modpow(&self, base: &BigInt, exponent: &BigInt, modulus: &BigInt) -> BigInt;
}

/// Engine selected once at startup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngineKind {
    /// Square-and-multiply, see [`modpow`].
    #[default]
    Binary,
    /// The big-integer library's own `modpow`.
    Native,
}

impl EngineKind {
    pub fn name(self) -> &'static str {
        match self {
            EngineKind::Binary => "binary",
            EngineKind::Native => "native",
        }
    }
}

impl ModPow for EngineKind {
    fn modpow(&self, base: &BigInt, exponent: &BigInt, modulus: &BigInt) -> BigInt {
        match self {
            EngineKind::Binary => modpow(base, exponent, modulus),
            EngineKind::Native if modulus.abs().is_one() => BigInt::zero(),
            EngineKind::Native => base.modpow(exponent, modulus),
        }
    }
}

/// Binary modular exponentiation, scanning exponent bits from least to most
/// significant and reducing after every multiplication.
///
/// # Panics
///
/// Panics if `exponent` is negative or `modulus` is zero.
pub fn modpow(base: &BigInt, exponent: &BigInt, modulus: &BigInt) -> BigInt {
    assert!(
        exponent.sign() != Sign::Minus,
        "modpow: exponent must be non-negative"
    );
    assert!(!modulus.is_zero(), "modpow: modulus must be nonzero");

    if modulus.abs().is_one() {
        return BigInt::zero();
    }

    // 1 mod m is 1 for m > 1 but m + 1 for m < -1.
    let mut acc = BigInt::one().mod_floor(modulus);
    let mut power = base.mod_floor(modulus);
    for bit in 0..exponent.bits() {
        if exponent.bit(bit) {
            acc = (&acc * &power).mod_floor(modulus);
        }
        power = (&power * &power).mod_floor(modulus);
    }
    acc
}
