// ─────────────────────────────────────────────────────────────────────
// Transient Fit Core — PCA Spectral Basis
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Principal-component spectral basis: mean spectrum plus eigenspectra.

use ndarray::{Array1, Array2, ArrayView1};
use rand::Rng;
use rand_distr::StandardNormal;
use transient_types::error::{TransientError, TransientResult};

/// Rest-frame spectral basis on a shared wavelength grid.
#[derive(Debug, Clone)]
pub struct PcaBasis {
    wavelengths: Array1<f64>, // Rest-frame wavelength [Å], strictly increasing
    mean: Array1<f64>,        // Mean spectrum [n_wave]
    components: Array2<f64>,  // Eigenspectra [n_comp, n_wave]
    variances: Array1<f64>,   // Variance of each component's coefficient [n_comp]
}

impl PcaBasis {
    pub fn new(
        wavelengths: Array1<f64>,
        mean: Array1<f64>,
        components: Array2<f64>,
        variances: Array1<f64>,
    ) -> TransientResult<Self> {
        let n_wave = wavelengths.len();
        if n_wave < 2 {
            return Err(TransientError::ConfigError(format!(
                "PCA basis needs at least 2 wavelengths, got {n_wave}"
            )));
        }
        if mean.len() != n_wave {
            return Err(TransientError::InputMismatch {
                name: "mean spectrum",
                expected: n_wave,
                got: mean.len(),
            });
        }
        if components.ncols() != n_wave {
            return Err(TransientError::InputMismatch {
                name: "eigenspectrum",
                expected: n_wave,
                got: components.ncols(),
            });
        }
        if variances.len() != components.nrows() {
            return Err(TransientError::InputMismatch {
                name: "component variances",
                expected: components.nrows(),
                got: variances.len(),
            });
        }
        if wavelengths.iter().any(|w| !w.is_finite() || *w <= 0.0)
            || wavelengths
                .iter()
                .zip(wavelengths.iter().skip(1))
                .any(|(lo, hi)| hi <= lo)
        {
            return Err(TransientError::ConfigError(
                "PCA wavelengths must be finite, positive and strictly increasing".to_string(),
            ));
        }
        if variances.iter().any(|v| !v.is_finite() || *v < 0.0) {
            return Err(TransientError::ConfigError(
                "PCA component variances must be finite and >= 0".to_string(),
            ));
        }
        if mean.iter().chain(components.iter()).any(|v| !v.is_finite()) {
            return Err(TransientError::ConfigError(
                "PCA mean and eigenspectra must be finite".to_string(),
            ));
        }
        Ok(PcaBasis {
            wavelengths,
            mean,
            components,
            variances,
        })
    }

    pub fn wavelengths(&self) -> ArrayView1<'_, f64> {
        self.wavelengths.view()
    }

    pub fn n_wavelengths(&self) -> usize {
        self.wavelengths.len()
    }

    pub fn n_components(&self) -> usize {
        self.components.nrows()
    }

    /// mean + Σₖ cₖ · componentₖ
    pub fn reconstruct(&self, coefficients: &[f64]) -> TransientResult<Array1<f64>> {
        if coefficients.len() != self.n_components() {
            return Err(TransientError::InputMismatch {
                name: "PCA coefficients",
                expected: self.n_components(),
                got: coefficients.len(),
            });
        }
        let c = ArrayView1::from(coefficients);
        Ok(&self.mean + &self.components.t().dot(&c))
    }

    /// Draw cₖ ~ N(0, σₖ²) with σₖ² the component variances.
    pub fn draw_coefficients<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<f64> {
        self.variances
            .iter()
            .map(|&var| {
                let z: f64 = rng.sample(StandardNormal);
                z * var.sqrt()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn small_basis() -> PcaBasis {
        PcaBasis::new(
            array![4000.0, 5000.0, 6000.0],
            array![1.0, 2.0, 1.0],
            array![[1.0, 0.0, -1.0], [0.0, 1.0, 0.0]],
            array![0.25, 4.0],
        )
        .unwrap()
    }

    #[test]
    fn test_reconstruct_mean_with_zero_coefficients() {
        let basis = small_basis();
        assert_eq!(basis.n_components(), 2);
        assert_eq!(basis.n_wavelengths(), 3);
        let spec = basis.reconstruct(&[0.0, 0.0]).unwrap();
        assert_eq!(spec, array![1.0, 2.0, 1.0]);
    }

    #[test]
    fn test_reconstruct_linear_combination() {
        let spec = small_basis().reconstruct(&[0.5, -1.0]).unwrap();
        assert_eq!(spec, array![1.5, 1.0, 0.5]);
    }

    #[test]
    fn test_reconstruct_wrong_length() {
        assert!(matches!(
            small_basis().reconstruct(&[1.0]),
            Err(TransientError::InputMismatch { expected: 2, got: 1, .. })
        ));
    }

    #[test]
    fn test_seeded_draws_reproducible() {
        let basis = small_basis();
        let a = basis.draw_coefficients(&mut StdRng::seed_from_u64(7));
        let b = basis.draw_coefficients(&mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
        assert_eq!(a.len(), 2);
    }

    #[test]
    fn test_draw_spread_follows_variance() {
        let basis = small_basis();
        let mut rng = StdRng::seed_from_u64(2026);
        let n = 20_000;
        let mut sum_sq = [0.0_f64; 2];
        for _ in 0..n {
            let c = basis.draw_coefficients(&mut rng);
            sum_sq[0] += c[0] * c[0];
            sum_sq[1] += c[1] * c[1];
        }
        let var0 = sum_sq[0] / n as f64;
        let var1 = sum_sq[1] / n as f64;
        assert!((var0 - 0.25).abs() < 0.02, "var0 = {var0}");
        assert!((var1 - 4.0).abs() < 0.3, "var1 = {var1}");
    }

    #[test]
    fn test_zero_variance_draws_zero() {
        let basis = PcaBasis::new(
            array![4000.0, 5000.0],
            array![1.0, 1.0],
            array![[1.0, 1.0]],
            array![0.0],
        )
        .unwrap();
        let c = basis.draw_coefficients(&mut StdRng::seed_from_u64(1));
        assert_eq!(c[0].abs(), 0.0);
    }

    #[test]
    fn test_rejects_bad_shapes() {
        assert!(PcaBasis::new(
            array![4000.0],
            array![1.0],
            Array2::zeros((0, 1)),
            Array1::zeros(0)
        )
        .is_err());
        assert!(PcaBasis::new(
            array![4000.0, 5000.0],
            array![1.0],
            Array2::zeros((1, 2)),
            array![1.0]
        )
        .is_err());
        assert!(PcaBasis::new(
            array![4000.0, 5000.0],
            array![1.0, 1.0],
            Array2::zeros((1, 3)),
            array![1.0]
        )
        .is_err());
        assert!(PcaBasis::new(
            array![4000.0, 5000.0],
            array![1.0, 1.0],
            Array2::zeros((2, 2)),
            array![1.0]
        )
        .is_err());
    }

    #[test]
    fn test_rejects_unsorted_wavelengths() {
        let err = PcaBasis::new(
            array![5000.0, 4000.0],
            array![1.0, 1.0],
            Array2::zeros((1, 2)),
            array![1.0],
        )
        .unwrap_err();
        assert!(err.to_string().contains("increasing"), "{err}");
    }

    #[test]
    fn test_rejects_negative_variance() {
        assert!(PcaBasis::new(
            array![4000.0, 5000.0],
            array![1.0, 1.0],
            Array2::zeros((1, 2)),
            array![-1.0],
        )
        .is_err());
    }
}
