// ─────────────────────────────────────────────────────────────────────
// Transient Fit Core — Dust Extinction
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Galactic dust extinction curves.
//!
//! A_λ / A_V = a(x) + b(x) / R_V with x = 1/λ in μm⁻¹, piecewise over
//! infrared (0.3–1.1), optical (1.1–3.3), ultraviolet (3.3–8) and far
//! ultraviolet (8–10). Cardelli, Clayton & Mathis (1989), ApJ 345, 245;
//! O'Donnell (1994), ApJ 422, 158 replaces the optical polynomials.

use ndarray::{Array1, ArrayView1};
use transient_math::poly::horner;
use transient_types::config::ExtinctionLaw;
use transient_types::constants::ANG_PER_MICRON;
use transient_types::error::{TransientError, TransientResult};

/// Lower validity bound [μm⁻¹] (λ ≈ 3.33 μm).
pub const X_MIN: f64 = 0.3;

/// Upper validity bound [μm⁻¹] (λ = 1000 Å).
pub const X_MAX: f64 = 10.0;

const X_IR_OPTICAL: f64 = 1.1;
const X_OPTICAL_UV: f64 = 3.3;
const X_UV_FUV: f64 = 8.0;
const X_UV_BUMP: f64 = 5.9;

/// Optical polynomial pivot, y = x − 1.82 (V band).
const Y_PIVOT: f64 = 1.82;

const CCM89_OPTICAL_A: [f64; 8] = [
    1.0, 0.17699, -0.50447, -0.02427, 0.72085, 0.01979, -0.77530, 0.32999,
];
const CCM89_OPTICAL_B: [f64; 8] = [
    0.0, 1.41338, 2.28305, 1.07233, -5.38434, -0.62251, 5.30260, -2.09002,
];

const OD94_OPTICAL_A: [f64; 9] = [
    1.0, 0.104, -0.609, 0.701, 1.137, -1.718, -0.827, 1.647, -0.505,
];
const OD94_OPTICAL_B: [f64; 9] = [
    0.0, 1.952, 2.908, -3.989, -7.985, 11.102, 5.491, -10.805, 3.347,
];

const FUV_A: [f64; 4] = [-1.073, -0.628, 0.137, -0.070];
const FUV_B: [f64; 4] = [13.670, 4.257, -0.420, 0.374];

/// (a, b) coefficients at inverse wavelength `x` [μm⁻¹].
pub fn coefficients(law: ExtinctionLaw, x: f64) -> TransientResult<(f64, f64)> {
    if !(X_MIN..=X_MAX).contains(&x) {
        return Err(TransientError::WavelengthOutOfRange {
            wavelength_angstrom: ANG_PER_MICRON / x,
            min: ANG_PER_MICRON / X_MAX,
            max: ANG_PER_MICRON / X_MIN,
        });
    }

    let ab = if x < X_IR_OPTICAL {
        let xp = x.powf(1.61);
        (0.574 * xp, -0.527 * xp)
    } else if x < X_OPTICAL_UV {
        let y = x - Y_PIVOT;
        match law {
            ExtinctionLaw::Ccm89 => (horner(&CCM89_OPTICAL_A, y), horner(&CCM89_OPTICAL_B, y)),
            ExtinctionLaw::Odonnell94 => (horner(&OD94_OPTICAL_A, y), horner(&OD94_OPTICAL_B, y)),
        }
    } else if x < X_UV_FUV {
        let (fa, fb) = if x >= X_UV_BUMP {
            let d = x - X_UV_BUMP;
            (
                -0.04473 * d * d - 0.009779 * d.powi(3),
                0.2130 * d * d + 0.1207 * d.powi(3),
            )
        } else {
            (0.0, 0.0)
        };
        (
            1.752 - 0.316 * x - 0.104 / ((x - 4.67).powi(2) + 0.341) + fa,
            -3.090 + 1.825 * x + 1.206 / ((x - 4.62).powi(2) + 0.263) + fb,
        )
    } else {
        let d = x - X_UV_FUV;
        (horner(&FUV_A, d), horner(&FUV_B, d))
    };
    Ok(ab)
}

/// A_λ / A_V on a wavelength grid [Å].
pub fn extinction_curve(
    law: ExtinctionLaw,
    wavelengths: ArrayView1<f64>,
    r_v: f64,
) -> TransientResult<Array1<f64>> {
    let mut curve = Array1::zeros(wavelengths.len());
    for (c, &lambda) in curve.iter_mut().zip(wavelengths.iter()) {
        let (a, b) = coefficients(law, ANG_PER_MICRON / lambda)?;
        *c = a + b / r_v;
    }
    Ok(curve)
}

/// Total extinction A_λ [mag] on a wavelength grid [Å].
pub fn a_lambda(
    law: ExtinctionLaw,
    wavelengths: ArrayView1<f64>,
    a_v: f64,
    r_v: f64,
) -> TransientResult<Array1<f64>> {
    Ok(extinction_curve(law, wavelengths, r_v)? * a_v)
}

/// Dim `flux` in place by `a_lambda` magnitudes.
pub fn apply_extinction(flux: &mut Array1<f64>, a_lambda: ArrayView1<f64>) -> TransientResult<()> {
    if flux.len() != a_lambda.len() {
        return Err(TransientError::InputMismatch {
            name: "A_λ",
            expected: flux.len(),
            got: a_lambda.len(),
        });
    }
    flux.zip_mut_with(&a_lambda, |f, &a| *f *= 10f64.powf(-0.4 * a));
    Ok(())
}
