// ─────────────────────────────────────────────────────────────────────
// Transient Fit Core — Photosphere
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Common interface for photosphere models.

use transient_types::error::{TransientError, TransientResult};
use transient_types::state::PhotosphereResult;

/// Per-call inputs shared by all photosphere models.
#[derive(Debug, Clone, Copy)]
pub struct PhotosphereInput<'a> {
    /// Explosion epoch [day]
    pub texplosion: f64,
    /// Observation epochs [day]
    pub times: &'a [f64],
    /// Bolometric luminosity at each epoch [erg/s]
    pub luminosities: &'a [f64],
    /// Ejecta velocity [km/s]
    pub vejecta: f64,
    /// Ejecta mass [M_sun]
    pub mejecta: f64,
    /// Grey opacity [cm²/g]
    pub kappa: f64,
}

impl PhotosphereInput<'_> {
    pub fn n_epochs(&self) -> usize {
        self.times.len()
    }

    pub fn validate(&self) -> TransientResult<()> {
        if self.luminosities.len() != self.times.len() {
            return Err(TransientError::InputMismatch {
                name: "luminosities",
                expected: self.times.len(),
                got: self.luminosities.len(),
            });
        }
        if !self.texplosion.is_finite() {
            return Err(TransientError::PhysicsViolation(format!(
                "texplosion must be finite, got {}",
                self.texplosion
            )));
        }
        for (name, value) in [
            ("vejecta", self.vejecta),
            ("mejecta", self.mejecta),
            ("kappa", self.kappa),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(TransientError::PhysicsViolation(format!(
                    "{name} must be finite and > 0, got {value}"
                )));
            }
        }
        if let Some(t) = self.times.iter().find(|t| !t.is_finite()) {
            return Err(TransientError::PhysicsViolation(format!(
                "times must be finite, got {t}"
            )));
        }
        if let Some(l) = self
            .luminosities
            .iter()
            .find(|l| !l.is_finite() || **l < 0.0)
        {
            return Err(TransientError::PhysicsViolation(format!(
                "luminosities must be finite and >= 0, got {l}"
            )));
        }
        Ok(())
    }
}

/// A photosphere model: luminosity history in, radius and temperature out.
pub trait Photosphere {
    fn name(&self) -> &'static str;

    fn process(&self, input: &PhotosphereInput<'_>) -> TransientResult<PhotosphereResult>;
}
