//! Concrete in compression: parabola-rectangle diagram (EN 1992-1-1 3.1.7).
//!
//! ```text
//!  σc
//!  fcd ┤      ┌──────────┐
//!      │    ╱            │
//!      │   ╱             │
//!      │  ╱              │
//!      └─┴───────┴───────┴──── εc
//!        0      εc2     εcu
//! ```
//!
//! Compression is positive. Concrete carries no tension and no stress past
//! the crushing strain.

use super::MaterialParams;

/// Concrete compressive stress (MPa) for strain `eps` (compression positive).
///
/// - ε ≤ 0: 0 (no tension)
/// - 0 < ε ≤ εc2: fcd·[1 − (1 − ε/εc2)²]
/// - εc2 < ε ≤ εcu: fcd
/// - ε > εcu: 0 (crushed)
#[inline]
pub fn concrete_stress(eps: f64, params: &MaterialParams) -> f64 {
    if eps <= 0.0 {
        return 0.0;
    }
    let fcd = params.fcd();
    if eps <= params.eps_c2 {
        let eta = 1.0 - eps / params.eps_c2;
        return fcd * (1.0 - eta * eta);
    }
    if eps <= params.eps_cu {
        return fcd;
    }
    0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundary_values() {
        let mat = MaterialParams::default();
        assert_eq!(concrete_stress(0.0, &mat), 0.0);
        assert!((concrete_stress(mat.eps_c2, &mat) - mat.fcd()).abs() < 1e-12);
        assert!((concrete_stress(mat.eps_cu, &mat) - mat.fcd()).abs() < 1e-12);
        assert_eq!(concrete_stress(-0.001, &mat), 0.0);
    }

    #[test]
    fn test_parabolic_branch() {
        let mat = MaterialParams::default();
        // ε = εc2/2: η = 0.5 → σ = 0.75·fcd
        let sigma = concrete_stress(0.001, &mat);
        assert!((sigma - 0.75 * 17.0).abs() < 1e-9);
    }

    #[test]
    fn test_crushed_beyond_ultimate() {
        let mat = MaterialParams::default();
        assert_eq!(concrete_stress(0.0036, &mat), 0.0);
    }

    #[test]
    fn test_monotonic_up_to_plateau() {
        let mat = MaterialParams::default();
        let mut prev = 0.0;
        for i in 1..=35 {
            let sigma = concrete_stress(i as f64 * 1e-4, &mat);
            assert!(sigma >= prev);
            prev = sigma;
        }
    }
}
