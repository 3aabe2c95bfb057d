// ─────────────────────────────────────────────────────────────────────
// Transient Fit Core — Eigen SED
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! SED drawn from a PCA spectral basis, with host and Milky Way extinction.
//!
//! Per epoch the spectrum is reconstructed from the basis, normalised so its
//! rest-frame integral equals the bolometric luminosity, dimmed by host dust
//! in the rest frame, redshifted, and dimmed by Galactic dust in the
//! observer frame.

use log::{debug, warn};
use ndarray::Array1;
use rand::rngs::StdRng;
use rand::SeedableRng;
use transient_math::integrate::trapezoid_weights;
use transient_types::config::EigenConfig;
use transient_types::error::{TransientError, TransientResult};
use transient_types::state::SedResult;

use crate::extinction::{apply_extinction, extinction_curve};
use crate::pca::PcaBasis;
use crate::sed::{Sed, SedInput};

/// PCA spectral model with dust extinction.
#[derive(Debug, Clone)]
pub struct Eigen {
    basis: PcaBasis,
    config: EigenConfig,
    rng: StdRng,
    // Filled once by `preprocess`.
    preprocessed: bool,
    weights: Array1<f64>,
    host_curve: Array1<f64>,
}

impl Eigen {
    pub fn new(basis: PcaBasis, config: EigenConfig) -> TransientResult<Self> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(Eigen {
            basis,
            config,
            rng,
            preprocessed: false,
            weights: Array1::zeros(0),
            host_curve: Array1::zeros(0),
        })
    }

    pub fn basis(&self) -> &PcaBasis {
        &self.basis
    }

    pub fn config(&self) -> &EigenConfig {
        &self.config
    }

    /// Quadrature weights and host A_λ/A_V on the rest-frame grid.
    ///
    /// Runs once; later calls return immediately. Fails if the rest-frame
    /// grid leaves the extinction law's wavelength range.
    pub fn preprocess(&mut self) -> TransientResult<()> {
        if self.preprocessed {
            return Ok(());
        }
        let wavelengths = self.basis.wavelengths();
        self.host_curve = extinction_curve(self.config.law, wavelengths, self.config.rv_host)?;
        self.weights = trapezoid_weights(wavelengths);
        self.preprocessed = true;
        debug!(
            "eigen: preprocessed {} wavelengths, {} components",
            self.basis.n_wavelengths(),
            self.basis.n_components()
        );
        Ok(())
    }

    pub fn is_preprocessed(&self) -> bool {
        self.preprocessed
    }
}

impl Sed for Eigen {
    fn name(&self) -> &'static str {
        "eigen"
    }

    fn process(&mut self, input: &SedInput<'_>) -> TransientResult<SedResult> {
        input.validate(self.basis.n_components())?;
        self.preprocess()?;

        let one_plus_z = 1.0 + input.redshift;
        let observed = self.basis.wavelengths().mapv(|w| w * one_plus_z);
        let host_a = (input.av_host > 0.0).then(|| &self.host_curve * input.av_host);
        let mw_a = if input.ebv_mw > 0.0 {
            let a_v = input.ebv_mw * self.config.rv_mw;
            Some(extinction_curve(self.config.law, observed.view(), self.config.rv_mw)? * a_v)
        } else {
            None
        };

        let mut result = SedResult::new(observed);
        result.seds.reserve(input.n_epochs());

        for (i, &luminosity) in input.luminosities.iter().enumerate() {
            let drawn;
            let coefficients: &[f64] = match input.coefficients {
                Some(all) => &all[i],
                None => {
                    drawn = self.basis.draw_coefficients(&mut self.rng);
                    &drawn
                }
            };

            let mut spectrum = self.basis.reconstruct(coefficients)?;
            let n_negative = spectrum.iter().filter(|&&f| f < 0.0).count();
            if n_negative > 0 {
                warn!(
                    "eigen: epoch {i} has {n_negative} negative flux bins, clipping to zero"
                );
                spectrum.mapv_inplace(|f| f.max(0.0));
            }

            if luminosity > 0.0 {
                let integral = self.weights.dot(&spectrum);
                if !(integral.is_finite() && integral > 0.0) {
                    return Err(TransientError::PhysicsViolation(format!(
                        "eigen: epoch {i} spectrum integrates to {integral}, cannot carry L = {luminosity}"
                    )));
                }
                spectrum *= luminosity / integral;
            } else {
                spectrum.fill(0.0);
            }

            if let Some(a) = &host_a {
                apply_extinction(&mut spectrum, a.view())?;
            }
            spectrum /= one_plus_z;
            if let Some(a) = &mw_a {
                apply_extinction(&mut spectrum, a.view())?;
            }
            result.seds.push(spectrum);
        }

        debug!(
            "{}: {} epochs at z = {}, A_V(host) = {}, E(B-V)(MW) = {}",
            self.name(),
            result.n_epochs(),
            input.redshift,
            input.av_host,
            input.ebv_mw
        );
        Ok(result)
    }
}
