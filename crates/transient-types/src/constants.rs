// ─────────────────────────────────────────────────────────────────────
// Transient Fit Core — Constants
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Physical constants in CGS units.

use std::f64::consts::PI;

/// One day (s)
pub const DAY_CGS: f64 = 86400.0;

/// One kilometre (cm)
pub const KM_CGS: f64 = 1.0e5;

/// One Ångström (cm)
pub const ANG_CGS: f64 = 1.0e-8;

/// Solar mass (g), IAU 2015 nominal GM / CODATA 2018 G.
pub const M_SUN_CGS: f64 = 1.988409870698051e33;

/// Speed of light (cm/s)
pub const C_CGS: f64 = 2.99792458e10;

/// Stefan-Boltzmann constant (erg cm⁻² s⁻¹ K⁻⁴)
pub const SIGMA_SB_CGS: f64 = 5.670374419e-5;

pub const FOUR_PI: f64 = 4.0 * PI;

/// 4π σ_SB, so that a blackbody sphere radiates L = STEF_CONST · R² · T⁴.
pub const STEF_CONST: f64 = FOUR_PI * SIGMA_SB_CGS;

/// Ångström per micron, for inverse-micron extinction coordinates.
pub const ANG_PER_MICRON: f64 = 1.0e4;
