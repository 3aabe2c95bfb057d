// ─────────────────────────────────────────────────────────────────────
// Transient Fit Core — Dense Core Photosphere
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Expanding/receding photosphere of a homologous dense core wrapped in a
//! low-mass power-law envelope.
//!
//! Per epoch:
//!   R      = v_ej · (t − t_exp)
//!   ρ_core = 3 M_ej / (4π R³)
//!   τ_core = κ ρ_core R,   τ_env = τ_core / (n − 1)
//!
//! While the envelope is optically thick (τ_env > 2/3) the photosphere sits
//! in the envelope at R·(3τ_env/2)^(1/(n−1)); otherwise it recedes into the
//! core to n R/(n−1) − 2/(3κρ_core). Once the core itself turns optically
//! thin the temperature freezes at its last value and the radius follows
//! from L = 4πσ R² T⁴.

use log::debug;
use transient_types::config::DenseCoreConfig;
use transient_types::constants::{DAY_CGS, FOUR_PI, KM_CGS, M_SUN_CGS, STEF_CONST};
use transient_types::error::TransientResult;
use transient_types::state::PhotosphereResult;

use crate::photosphere::{Photosphere, PhotosphereInput};

/// Core optical depth above which the photospheric temperature is taken
/// from the Stefan-Boltzmann law.
const TAU_CORE_THICK: f64 = 1.0;

/// Photosphere state at a single epoch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EpochPhotosphere {
    /// Photospheric radius [cm]
    pub radius_phot: f64,
    /// Photospheric temperature [K]
    pub temperature_phot: f64,
    /// Optical depth through the core
    pub tau_core: f64,
    /// Optical depth through the envelope
    pub tau_envelope: f64,
}

impl EpochPhotosphere {
    /// True when the temperature came from the core rather than being carried over.
    pub fn is_optically_thick(&self) -> bool {
        self.tau_core > TAU_CORE_THICK
    }
}

/// Dense core + power-law envelope photosphere.
#[derive(Debug, Clone, Default)]
pub struct DenseCore {
    config: DenseCoreConfig,
}

impl DenseCore {
    pub fn new(config: DenseCoreConfig) -> TransientResult<Self> {
        config.validate()?;
        Ok(DenseCore { config })
    }

    pub fn config(&self) -> &DenseCoreConfig {
        &self.config
    }

    /// Photosphere for one epoch given the ejecta outer radius [cm].
    ///
    /// `temperature_last` is used when the core is optically thin, including
    /// epochs at or before the explosion (radius ≤ 0).
    pub fn epoch(
        &self,
        radius: f64,
        luminosity: f64,
        kappa: f64,
        mejecta: f64,
        temperature_last: f64,
    ) -> EpochPhotosphere {
        let slope = self.config.envelope_slope;

        if radius <= 0.0 {
            return EpochPhotosphere {
                radius_phot: thin_radius(luminosity, temperature_last),
                temperature_phot: temperature_last,
                tau_core: 0.0,
                tau_envelope: 0.0,
            };
        }

        let rho_core = 3.0 * mejecta * M_SUN_CGS / (FOUR_PI * radius.powi(3));
        let tau_core = kappa * rho_core * radius;
        let tau_envelope = tau_core / (slope - 1.0);

        // (2(n−1) / (3κρR^n))^(1/(1−n)) rewritten as R·(3τ_env/2)^(1/(n−1)),
        // which never forms R^n.
        let radius_phot = if tau_envelope > self.config.envelope_tau_threshold {
            radius * (1.5 * tau_envelope).powf(1.0 / (slope - 1.0))
        } else {
            slope * radius / (slope - 1.0) - 2.0 / (3.0 * kappa * rho_core)
        };

        if tau_core > TAU_CORE_THICK {
            EpochPhotosphere {
                radius_phot,
                temperature_phot: (luminosity / (radius_phot.powi(2) * STEF_CONST)).powf(0.25),
                tau_core,
                tau_envelope,
            }
        } else {
            EpochPhotosphere {
                radius_phot: thin_radius(luminosity, temperature_last),
                temperature_phot: temperature_last,
                tau_core,
                tau_envelope,
            }
        }
    }
}

/// Blackbody radius that radiates `luminosity` at `temperature`.
fn thin_radius(luminosity: f64, temperature: f64) -> f64 {
    if luminosity <= 0.0 {
        return 0.0;
    }
    (luminosity / (temperature.powi(4) * STEF_CONST)).sqrt()
}

impl Photosphere for DenseCore {
    fn name(&self) -> &'static str {
        "densecore"
    }

    fn process(&self, input: &PhotosphereInput<'_>) -> TransientResult<PhotosphereResult> {
        input.validate()?;

        let mut result = PhotosphereResult::with_capacity(input.n_epochs());
        let mut temperature_last = self.config.initial_temperature;
        let mut n_thin = 0usize;

        for (&time, &luminosity) in input.times.iter().zip(input.luminosities) {
            let radius = input.vejecta * KM_CGS * (time - input.texplosion) * DAY_CGS;
            let epoch = self.epoch(
                radius,
                luminosity,
                input.kappa,
                input.mejecta,
                temperature_last,
            );
            if !epoch.is_optically_thick() {
                n_thin += 1;
            }
            // A dark thick epoch has T = 0; keep the last radiating temperature.
            if epoch.temperature_phot > 0.0 {
                temperature_last = epoch.temperature_phot;
            }
            result.push(epoch.radius_phot, epoch.temperature_phot);
        }

        debug!(
            "{}: {} epochs, {} with optically thin core",
            self.name(),
            result.len(),
            n_thin
        );
        Ok(result)
    }
}
