// ─────────────────────────────────────────────────────────────────────
// Transient Fit Core — State
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use ndarray::Array1;

/// Photosphere evolution, one entry per epoch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PhotosphereResult {
    pub radius_phot: Vec<f64>,      // Photospheric radius [cm]
    pub temperature_phot: Vec<f64>, // Photospheric temperature [K]
}

impl PhotosphereResult {
    pub fn with_capacity(n: usize) -> Self {
        PhotosphereResult {
            radius_phot: Vec::with_capacity(n),
            temperature_phot: Vec::with_capacity(n),
        }
    }

    pub fn push(&mut self, radius: f64, temperature: f64) {
        self.radius_phot.push(radius);
        self.temperature_phot.push(temperature);
    }

    pub fn len(&self) -> usize {
        self.radius_phot.len()
    }

    pub fn is_empty(&self) -> bool {
        self.radius_phot.is_empty()
    }
}

/// Spectral energy distributions on a shared observer-frame grid.
#[derive(Debug, Clone)]
pub struct SedResult {
    pub wavelengths: Array1<f64>, // Observer-frame wavelength [Å]
    pub seds: Vec<Array1<f64>>,   // Specific luminosity per epoch [erg s⁻¹ Å⁻¹]
}

impl SedResult {
    pub fn new(wavelengths: Array1<f64>) -> Self {
        SedResult {
            wavelengths,
            seds: Vec::new(),
        }
    }

    pub fn n_epochs(&self) -> usize {
        self.seds.len()
    }
}
