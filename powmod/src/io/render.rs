//! Rendering of pass snapshots for the terminal.
//!
//! Text output mirrors the calculator layout, `(−7)^3 mod 10 = 7`, followed by
//! one indented line per invalid parameter. JSON output is one object per
//! snapshot, suitable for line-oriented consumers.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::core::types::{DisplayText, ParameterKind, Snapshot};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Render a snapshot without a trailing newline.
pub fn render(snapshot: &Snapshot, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(snapshot)),
        OutputFormat::Json => serde_json::to_string(snapshot).context("serialize snapshot json"),
    }
}

fn render_text(snapshot: &Snapshot) -> String {
    let mut out = format!(
        "{}^{} mod {} = {}",
        wrapped(&snapshot.base.display),
        snapshot.exponent.display.text,
        snapshot.modulus.display.text,
        snapshot.power.text
    );
    for kind in ParameterKind::ALL {
        let view = snapshot.parameter(kind);
        if let Some(error) = &view.error {
            out.push_str(&format!("\n  {}: {}", view.name, error));
        }
    }
    out
}

fn wrapped(display: &DisplayText) -> String {
    if display.requires_parens {
        format!("({})", display.text)
    } else {
        display.text.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::modexp::EngineKind;
    use crate::core::types::Inputs;
    use crate::pipeline::UpdatePipeline;

    fn snapshot(base: &str, exponent: &str, modulus: &str) -> Snapshot {
        let mut pipeline = UpdatePipeline::new(EngineKind::Binary);
        pipeline.recompute(&Inputs::new(base, exponent, modulus));
        pipeline.snapshot()
    }

    #[test]
    fn text_wraps_negative_base() {
        let out = render(&snapshot("-7", "3", "10"), OutputFormat::Text).expect("render");
        assert_eq!(out, "(\u{2212}7)^3 mod 10 = 7");
    }

    #[test]
    fn text_lists_invalid_parameters() {
        let out = render(&snapshot("2", "-1", ""), OutputFormat::Text).expect("render");
        assert_eq!(
            out,
            "2^??? mod ??? = ???\n  exponent: must be non-negative\n  modulus: empty input"
        );
    }

    #[test]
    fn json_has_flat_parameter_fields() {
        let out = render(&snapshot("-7", "2", "10"), OutputFormat::Json).expect("render");
        let value: serde_json::Value = serde_json::from_str(&out).expect("json");
        assert_eq!(value["base"]["name"], "base");
        assert_eq!(value["base"]["text"], "\u{2212}7");
        assert_eq!(value["base"]["requires_parens"], true);
        assert_eq!(value["power"]["text"], "9");
        assert_eq!(value["computed"], true);
        assert!(value["exponent"].get("error").is_none());
    }

    #[test]
    fn json_includes_error_reason() {
        let out = render(&snapshot("2", "3", "0"), OutputFormat::Json).expect("render");
        let value: serde_json::Value = serde_json::from_str(&out).expect("json");
        assert_eq!(value["modulus"]["error"], "must be nonzero");
        assert_eq!(value["power"]["text"], "???");
        assert_eq!(value["computed"], false);
    }
}
