//! Trapezoid quadrature on non-uniform grids.
//!
//! Spectra are integrated many times on the same wavelength grid, so the
//! weights are exposed separately and reduce each integral to a dot product.

use ndarray::{Array1, ArrayView1};

/// Trapezoid weights for grid `x`.
///
/// Σ wᵢ·fᵢ equals the trapezoid integral of f over x. Grids with fewer
/// than two points have zero weight everywhere.
pub fn trapezoid_weights(x: ArrayView1<f64>) -> Array1<f64> {
    let n = x.len();
    let mut w = Array1::zeros(n);
    if n < 2 {
        return w;
    }
    for i in 0..n - 1 {
        let half = 0.5 * (x[i + 1] - x[i]);
        w[i] += half;
        w[i + 1] += half;
    }
    w
}

/// Trapezoid integral of y over x.
///
/// # Panics
/// If `x` and `y` differ in length.
pub fn trapz(x: ArrayView1<f64>, y: ArrayView1<f64>) -> f64 {
    assert_eq!(x.len(), y.len(), "trapz: x and y must have equal length");
    trapezoid_weights(x).dot(&y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_weights_uniform_grid() {
        let x = Array1::linspace(0.0, 4.0, 5);
        let w = trapezoid_weights(x.view());
        assert_eq!(w, array![0.5, 1.0, 1.0, 1.0, 0.5]);
    }

    #[test]
    fn test_weights_sum_to_span() {
        let x = array![1.0, 1.5, 3.0, 7.0];
        let w = trapezoid_weights(x.view());
        assert!((w.sum() - 6.0).abs() < 1e-12);
    }

    #[test]
    fn test_degenerate_grids() {
        assert_eq!(trapezoid_weights(Array1::<f64>::zeros(0).view()).len(), 0);
        assert_eq!(trapezoid_weights(array![3.0].view()), array![0.0]);
    }

    #[test]
    fn test_trapz_exact_for_linear() {
        let x = array![0.0, 0.3, 1.1, 2.0];
        let y = x.mapv(|v| 2.0 * v + 1.0);
        // ∫₀² (2x + 1) dx = 6
        assert!((trapz(x.view(), y.view()) - 6.0).abs() < 1e-12);
    }

    #[test]
    fn test_trapz_converges_for_quadratic() {
        let x = Array1::linspace(0.0, 1.0, 1001);
        let y = x.mapv(|v| v * v);
        assert!((trapz(x.view(), y.view()) - 1.0 / 3.0).abs() < 1e-6);
    }

    #[test]
    #[should_panic]
    fn test_trapz_length_mismatch_panics() {
        trapz(array![0.0, 1.0].view(), array![1.0].view());
    }
}
