// ─────────────────────────────────────────────────────────────────────
// Transient Fit Core — SED
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Common interface for spectral energy distribution models.

use ndarray::{Array1, ArrayView1};
use transient_types::constants::{ANG_CGS, C_CGS};
use transient_types::error::{TransientError, TransientResult};
use transient_types::state::SedResult;

/// Per-call inputs shared by all SED models.
#[derive(Debug, Clone, Copy)]
pub struct SedInput<'a> {
    /// Bolometric luminosity at each epoch [erg/s]
    pub luminosities: &'a [f64],
    pub redshift: f64,
    /// Host galaxy V-band extinction [mag]
    pub av_host: f64,
    /// Milky Way colour excess E(B−V) [mag]
    pub ebv_mw: f64,
    /// Model coefficients per epoch. `None` lets the model draw its own.
    pub coefficients: Option<&'a [Vec<f64>]>,
}

impl SedInput<'_> {
    pub fn n_epochs(&self) -> usize {
        self.luminosities.len()
    }

    /// Check shapes against a model with `n_coefficients` per epoch.
    pub fn validate(&self, n_coefficients: usize) -> TransientResult<()> {
        if let Some(l) = self
            .luminosities
            .iter()
            .find(|l| !l.is_finite() || **l < 0.0)
        {
            return Err(TransientError::PhysicsViolation(format!(
                "luminosities must be finite and >= 0, got {l}"
            )));
        }
        for (name, value) in [
            ("redshift", self.redshift),
            ("av_host", self.av_host),
            ("ebv_mw", self.ebv_mw),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(TransientError::PhysicsViolation(format!(
                    "{name} must be finite and >= 0, got {value}"
                )));
            }
        }
        if let Some(coefficients) = self.coefficients {
            if coefficients.len() != self.n_epochs() {
                return Err(TransientError::InputMismatch {
                    name: "coefficient sets",
                    expected: self.n_epochs(),
                    got: coefficients.len(),
                });
            }
            if let Some(bad) = coefficients.iter().find(|c| c.len() != n_coefficients) {
                return Err(TransientError::InputMismatch {
                    name: "coefficients per epoch",
                    expected: n_coefficients,
                    got: bad.len(),
                });
            }
        }
        Ok(())
    }
}

/// A spectral model: luminosities in, spectra on a wavelength grid out.
pub trait Sed {
    fn name(&self) -> &'static str;

    fn process(&mut self, input: &SedInput<'_>) -> TransientResult<SedResult>;
}

/// Convert L_λ [erg s⁻¹ Å⁻¹] to L_ν [erg s⁻¹ Hz⁻¹] on grid `wavelengths` [Å].
///
/// L_ν = L_λ λ² / c, with λ and L_λ taken per cm.
pub fn l_lambda_to_l_nu(
    wavelengths: ArrayView1<f64>,
    l_lambda: ArrayView1<f64>,
) -> TransientResult<Array1<f64>> {
    if wavelengths.len() != l_lambda.len() {
        return Err(TransientError::InputMismatch {
            name: "L_λ",
            expected: wavelengths.len(),
            got: l_lambda.len(),
        });
    }
    let mut l_nu = l_lambda.to_owned();
    l_nu.zip_mut_with(&wavelengths, |l, &lambda| {
        let lambda_cm = lambda * ANG_CGS;
        *l = (*l / ANG_CGS) * lambda_cm * lambda_cm / C_CGS;
    });
    Ok(l_nu)
}
