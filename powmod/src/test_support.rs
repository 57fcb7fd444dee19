//! Test-only helpers for building pipelines and inspecting engine calls.

use std::cell::Cell;

use num_bigint::BigInt;

use crate::core::modexp::{ModPow, modpow};
use crate::core::types::Inputs;
use crate::pipeline::UpdatePipeline;

/// Shorthand for a small `BigInt`.
pub fn int(value: i64) -> BigInt {
    BigInt::from(value)
}

/// Engine that counts invocations and delegates to the binary algorithm.
#[derive(Debug, Default)]
pub struct RecordingEngine {
    calls: Cell<usize>,
}

impl RecordingEngine {
    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl ModPow for RecordingEngine {
    fn modpow(&self, base: &BigInt, exponent: &BigInt, modulus: &BigInt) -> BigInt {
        self.calls.set(self.calls.get() + 1);
        modpow(base, exponent, modulus)
    }
}

/// Pipeline with a recording engine after one pass over the given texts.
pub fn recorded_pass(
    base: &str,
    exponent: &str,
    modulus: &str,
) -> UpdatePipeline<RecordingEngine> {
    let mut pipeline = UpdatePipeline::new(RecordingEngine::default());
    pipeline.recompute(&Inputs::new(base, exponent, modulus));
    pipeline
}
