//! Polynomial evaluation.

/// Evaluate Σ cₖ·xᵏ with coefficients in ascending order (Horner scheme).
pub fn horner(coeffs: &[f64], x: f64) -> f64 {
    coeffs.iter().rev().fold(0.0, |acc, &c| acc * x + c)
}
