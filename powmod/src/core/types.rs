//! Shared deterministic types for the powmod core.
//!
//! These types define the contracts between the lexer, slots, engine and
//! pipeline. They carry no I/O and serialize to stable JSON for the CLI.

use num_bigint::BigInt;
use serde::Serialize;

/// One of the three user-supplied parameters of `base^exponent mod modulus`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterKind {
    Base,
    Exponent,
    Modulus,
}

impl ParameterKind {
    /// All kinds in display order.
    pub const ALL: [ParameterKind; 3] = [
        ParameterKind::Base,
        ParameterKind::Exponent,
        ParameterKind::Modulus,
    ];

    /// Stable lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            ParameterKind::Base => "base",
            ParameterKind::Exponent => "exponent",
            ParameterKind::Modulus => "modulus",
        }
    }

    /// Look up a kind by name. `mod` is accepted as an alias for `modulus`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "base" => Some(ParameterKind::Base),
            "exponent" => Some(ParameterKind::Exponent),
            "modulus" | "mod" => Some(ParameterKind::Modulus),
            _ => None,
        }
    }
}

/// Raw text for every parameter, as last supplied by the presentation layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inputs {
    pub base: String,
    pub exponent: String,
    pub modulus: String,
}

impl Inputs {
    pub fn new(
        base: impl Into<String>,
        exponent: impl Into<String>,
        modulus: impl Into<String>,
    ) -> Self {
        Self {
            base: base.into(),
            exponent: exponent.into(),
            modulus: modulus.into(),
        }
    }

    pub fn get(&self, kind: ParameterKind) -> &str {
        match kind {
            ParameterKind::Base => &self.base,
            ParameterKind::Exponent => &self.exponent,
            ParameterKind::Modulus => &self.modulus,
        }
    }

    pub fn set(&mut self, kind: ParameterKind, text: impl Into<String>) {
        let text = text.into();
        match kind {
            ParameterKind::Base => self.base = text,
            ParameterKind::Exponent => self.exponent = text,
            ParameterKind::Modulus => self.modulus = text,
        }
    }
}

/// Outcome of one pipeline pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComputationResult {
    Computed(BigInt),
    /// At least one parameter is currently invalid.
    Unavailable,
}

impl ComputationResult {
    pub fn value(&self) -> Option<&BigInt> {
        match self {
            ComputationResult::Computed(value) => Some(value),
            ComputationResult::Unavailable => None,
        }
    }

    pub fn is_computed(&self) -> bool {
        matches!(self, ComputationResult::Computed(_))
    }
}

/// Display text for one output field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayText {
    pub text: String,
    /// Only ever set for a negative base: the presentation layer should wrap
    /// the value in parentheses so `(−7)^2` is not read as `−(7^2)`.
    pub requires_parens: bool,
}

/// Display state of one parameter after a pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParameterView {
    pub name: &'static str,
    #[serde(flatten)]
    pub display: DisplayText,
    /// Why the parameter is invalid, if it is.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Everything the presentation layer needs to render after a pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub base: ParameterView,
    pub exponent: ParameterView,
    pub modulus: ParameterView,
    pub power: DisplayText,
    pub computed: bool,
}

impl Snapshot {
    pub fn parameter(&self, kind: ParameterKind) -> &ParameterView {
        match kind {
            ParameterKind::Base => &self.base,
            ParameterKind::Exponent => &self.exponent,
            ParameterKind::Modulus => &self.modulus,
        }
    }
}
