// ─────────────────────────────────────────────────────────────────────
// Transient Fit Core — Config
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use serde::{Deserialize, Serialize};

use crate::error::{TransientError, TransientResult};

/// Top-level model configuration.
/// Every section and field is optional in JSON and falls back to defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    pub model_name: String,
    #[serde(default)]
    pub densecore: DenseCoreConfig,
    #[serde(default)]
    pub eigen: EigenConfig,
}

/// Dense core + power-law envelope photosphere parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DenseCoreConfig {
    /// Power-law index of the low-mass envelope, ρ ∝ r^-n (default: 10)
    #[serde(default = "default_envelope_slope")]
    pub envelope_slope: f64,
    /// Temperature carried into the first optically thin epoch [K] (default: 2e4)
    #[serde(default = "default_initial_temperature")]
    pub initial_temperature: f64,
    /// Envelope optical depth above which the photosphere sits in the envelope (default: 0.667)
    #[serde(default = "default_envelope_tau_threshold")]
    pub envelope_tau_threshold: f64,
}

fn default_envelope_slope() -> f64 {
    10.0
}
fn default_initial_temperature() -> f64 {
    2.0e4
}
fn default_envelope_tau_threshold() -> f64 {
    0.667
}

impl Default for DenseCoreConfig {
    fn default() -> Self {
        DenseCoreConfig {
            envelope_slope: default_envelope_slope(),
            initial_temperature: default_initial_temperature(),
            envelope_tau_threshold: default_envelope_tau_threshold(),
        }
    }
}

impl DenseCoreConfig {
    pub fn validate(&self) -> TransientResult<()> {
        if !self.envelope_slope.is_finite() || self.envelope_slope <= 1.0 {
            return Err(TransientError::ConfigError(format!(
                "densecore envelope_slope must be finite and > 1, got {}",
                self.envelope_slope
            )));
        }
        if !self.initial_temperature.is_finite() || self.initial_temperature <= 0.0 {
            return Err(TransientError::ConfigError(format!(
                "densecore initial_temperature must be finite and > 0, got {}",
                self.initial_temperature
            )));
        }
        if !self.envelope_tau_threshold.is_finite() || self.envelope_tau_threshold <= 0.0 {
            return Err(TransientError::ConfigError(format!(
                "densecore envelope_tau_threshold must be finite and > 0, got {}",
                self.envelope_tau_threshold
            )));
        }
        Ok(())
    }
}

/// Dust extinction curve parameterisation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ExtinctionLaw {
    /// Cardelli, Clayton & Mathis (1989)
    Ccm89,
    /// O'Donnell (1994) optical update of CCM89
    #[default]
    Odonnell94,
}

/// Eigen (PCA) SED parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EigenConfig {
    #[serde(default)]
    pub law: ExtinctionLaw,
    /// Host galaxy total-to-selective extinction (default: 3.1)
    #[serde(default = "default_rv")]
    pub rv_host: f64,
    /// Milky Way total-to-selective extinction (default: 3.1)
    #[serde(default = "default_rv")]
    pub rv_mw: f64,
    /// Seed for PCA coefficient draws. `None` seeds from OS entropy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

fn default_rv() -> f64 {
    3.1
}

impl Default for EigenConfig {
    fn default() -> Self {
        EigenConfig {
            law: ExtinctionLaw::default(),
            rv_host: default_rv(),
            rv_mw: default_rv(),
            seed: None,
        }
    }
}

impl EigenConfig {
    pub fn validate(&self) -> TransientResult<()> {
        for (name, rv) in [("rv_host", self.rv_host), ("rv_mw", self.rv_mw)] {
            if !rv.is_finite() || rv <= 0.0 {
                return Err(TransientError::ConfigError(format!(
                    "eigen {name} must be finite and > 0, got {rv}"
                )));
            }
        }
        Ok(())
    }
}

impl ModelConfig {
    /// Load from JSON file and validate every section.
    pub fn from_file(path: &str) -> TransientResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> TransientResult<()> {
        self.densecore.validate()?;
        self.eigen.validate()
    }
}
