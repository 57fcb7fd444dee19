//! CLI configuration stored in `powmod.toml`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

use crate::core::modexp::EngineKind;
use crate::core::types::{Inputs, ParameterKind};
use crate::io::render::OutputFormat;

/// Default config file name, resolved against the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "powmod.toml";

/// powmod configuration (TOML).
///
/// Missing fields default to the values the calculator starts with.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PowmodConfig {
    /// Modular exponentiation engine (`binary` or `native`).
    pub engine: EngineKind,

    /// Snapshot output format (`text` or `json`).
    pub output: OutputFormat,

    pub initial: InitialConfig,
}

/// Raw texts used for the first pass of a session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct InitialConfig {
    pub base: String,
    pub exponent: String,
    pub modulus: String,
}

impl Default for InitialConfig {
    fn default() -> Self {
        Self {
            base: "2".to_string(),
            exponent: "10".to_string(),
            modulus: "1000".to_string(),
        }
    }
}

impl InitialConfig {
    pub fn inputs(&self) -> Inputs {
        Inputs::new(&self.base, &self.exponent, &self.modulus)
    }
}

impl PowmodConfig {
    pub fn validate(&self) -> Result<()> {
        let inputs = self.initial.inputs();
        for kind in ParameterKind::ALL {
            if inputs.get(kind).contains(['\n', '\r']) {
                return Err(anyhow!("initial.{} must be a single line", kind.name()));
            }
        }
        Ok(())
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `PowmodConfig::default()`.
pub fn load_config(path: &Path) -> Result<PowmodConfig> {
    if !path.exists() {
        let cfg = PowmodConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: PowmodConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Atomically write config to disk (temp file + rename).
pub fn write_config(path: &Path, cfg: &PowmodConfig) -> Result<()> {
    cfg.validate()?;
    let mut buf = toml::to_string_pretty(cfg).context("serialize config toml")?;
    buf.push('\n');
    write_atomic(path, &buf)
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("create directory {}", parent.display()))?;
    }
    let tmp_path = path.with_extension("toml.tmp");
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp config {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace config {}", path.display()))?;
    Ok(())
}
