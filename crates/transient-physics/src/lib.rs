// ─────────────────────────────────────────────────────────────────────
// Transient Fit Core — Transient Physics
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Photosphere and SED modules for transient light-curve models.
//!
//! Photospheres turn a bolometric light curve plus ejecta parameters into
//! photospheric radius and temperature per epoch. SEDs turn luminosities
//! into spectra and apply host and Milky Way dust extinction.

pub mod densecore;
pub mod eigen;
pub mod extinction;
pub mod pca;
pub mod photosphere;
pub mod sed;

pub use densecore::{DenseCore, EpochPhotosphere};
pub use eigen::Eigen;
pub use extinction::{a_lambda, apply_extinction, extinction_curve};
pub use pca::PcaBasis;
pub use photosphere::{Photosphere, PhotosphereInput};
pub use sed::{Sed, SedInput};
