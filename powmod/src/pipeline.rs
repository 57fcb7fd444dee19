//! One recomputation pass over every parameter.
//!
//! The pipeline owns the three parameter slots and the latest result. Each
//! call to [`UpdatePipeline::recompute`] re-validates every slot (no
//! short-circuit on the first failure) and only consults the engine when all
//! of them hold a value.

use tracing::{debug, instrument};

use crate::core::format::format;
use crate::core::modexp::ModPow;
use crate::core::slot::ParameterSlot;
use crate::core::types::{ComputationResult, Inputs, ParameterKind, Snapshot};

/// Owned parameter slots, one per [`ParameterKind`].
#[derive(Debug, Clone, PartialEq, Eq)]
struct Slots {
    base: ParameterSlot,
    exponent: ParameterSlot,
    modulus: ParameterSlot,
}

impl Slots {
    fn new() -> Self {
        Self {
            base: ParameterSlot::new(ParameterKind::Base),
            exponent: ParameterSlot::new(ParameterKind::Exponent),
            modulus: ParameterSlot::new(ParameterKind::Modulus),
        }
    }

    fn get(&self, kind: ParameterKind) -> &ParameterSlot {
        match kind {
            ParameterKind::Base => &self.base,
            ParameterKind::Exponent => &self.exponent,
            ParameterKind::Modulus => &self.modulus,
        }
    }

    fn get_mut(&mut self, kind: ParameterKind) -> &mut ParameterSlot {
        match kind {
            ParameterKind::Base => &mut self.base,
            ParameterKind::Exponent => &mut self.exponent,
            ParameterKind::Modulus => &mut self.modulus,
        }
    }
}

/// Recomputation pipeline for `base^exponent mod modulus`.
#[derive(Debug)]
pub struct UpdatePipeline<E: ModPow> {
    engine: E,
    slots: Slots,
    result: ComputationResult,
}

impl<E: ModPow> UpdatePipeline<E> {
    pub fn new(engine: E) -> Self {
        Self {
            engine,
            slots: Slots::new(),
            result: ComputationResult::Unavailable,
        }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn slot(&self, kind: ParameterKind) -> &ParameterSlot {
        self.slots.get(kind)
    }

    /// Result of the most recent pass.
    pub fn result(&self) -> &ComputationResult {
        &self.result
    }

    /// Reparse a single slot and re-derive the result from the slot values.
    ///
    /// The other slots keep the values of their own last reparse.
    pub fn reparse(&mut self, kind: ParameterKind, raw: &str) -> bool {
        let valid = self.slots.get_mut(kind).reparse(raw);
        let all_valid = ParameterKind::ALL
            .into_iter()
            .all(|kind| self.slots.get(kind).value().is_some());
        self.refresh_result(all_valid);
        valid
    }

    /// Run one full pass over `inputs`.
    #[instrument(skip_all)]
    pub fn recompute(&mut self, inputs: &Inputs) -> &ComputationResult {
        let mut all_valid = true;
        for kind in ParameterKind::ALL {
            // Reparse first so a failure never skips the remaining slots.
            let valid = self.slots.get_mut(kind).reparse(inputs.get(kind));
            all_valid = valid && all_valid;
        }
        self.refresh_result(all_valid);

        debug!(
            all_valid,
            computed = self.result.is_computed(),
            "pass complete"
        );
        &self.result
    }

    /// Compute the power iff `all_valid`, else mark it unavailable.
    fn refresh_result(&mut self, all_valid: bool) {
        if !all_valid {
            self.result = ComputationResult::Unavailable;
            return;
        }
        // A valid slot always holds a value.
        self.result = match (
            self.slots.base.value(),
            self.slots.exponent.value(),
            self.slots.modulus.value(),
        ) {
            (Some(base), Some(exponent), Some(modulus)) => {
                ComputationResult::Computed(self.engine.modpow(base, exponent, modulus))
            }
            _ => ComputationResult::Unavailable,
        };
    }

    /// Display state after the most recent pass.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            base: self.slots.base.view(),
            exponent: self.slots.exponent.view(),
            modulus: self.slots.modulus.view(),
            power: format(self.result.value(), false),
            computed: self.result.is_computed(),
        }
    }
}
