//! Complex polynomial helpers used by IIR design and response evaluation
//!
//! Coefficients are ordered highest power first, `c[0]*x^n + ... + c[n]`,
//! matching the `b`/`a` convention of transfer functions in `z^-1`.

use crate::constants::{ROOT_FINDER_MAX_ITERATIONS, ROOT_FINDER_TOLERANCE};
use crate::error::{FilterError, Result};
use num_complex::Complex64;

/// Expand `prod (x - r)` into its coefficients
///
/// An empty root set yields the constant polynomial `[1]`.
pub fn poly_from_roots(roots: &[Complex64]) -> Vec<Complex64> {
    let mut coeffs = vec![Complex64::new(1.0, 0.0)];
    for &root in roots {
        coeffs.push(Complex64::new(0.0, 0.0));
        for k in (1..coeffs.len()).rev() {
            let prev = coeffs[k - 1];
            coeffs[k] -= root * prev;
        }
    }
    coeffs
}

/// Evaluate a real-coefficient polynomial at a complex point (Horner's rule)
pub fn eval_real(coeffs: &[f64], x: Complex64) -> Complex64 {
    coeffs
        .iter()
        .fold(Complex64::new(0.0, 0.0), |acc, &c| acc * x + c)
}

/// Evaluate a complex-coefficient polynomial at a complex point (Horner's rule)
pub fn eval_complex(coeffs: &[Complex64], x: Complex64) -> Complex64 {
    coeffs
        .iter()
        .fold(Complex64::new(0.0, 0.0), |acc, &c| acc * x + c)
}

/// Find all roots of a real-coefficient polynomial
///
/// Uses the Durand-Kerner simultaneous iteration, bounded by
/// `ROOT_FINDER_MAX_ITERATIONS` sweeps. Leading zero coefficients are
/// dropped; a constant polynomial has no roots.
///
/// # Errors
/// Returns `FilterError::InvalidParameter` if every coefficient is zero
/// or any coefficient is not finite
pub fn roots(coeffs: &[f64]) -> Result<Vec<Complex64>> {
    if coeffs.iter().any(|c| !c.is_finite()) {
        return Err(FilterError::invalid("polynomial coefficients must be finite"));
    }
    let first = coeffs
        .iter()
        .position(|&c| c != 0.0)
        .ok_or_else(|| FilterError::invalid("zero polynomial has no defined roots"))?;

    let lead = coeffs[first];
    let monic: Vec<Complex64> = coeffs[first..]
        .iter()
        .map(|&c| Complex64::new(c / lead, 0.0))
        .collect();
    let degree = monic.len() - 1;
    if degree == 0 {
        return Ok(Vec::new());
    }

    // Start points spread on a circle bounding the roots (Cauchy bound)
    let radius = 1.0 + monic[1..].iter().map(|c| c.norm()).fold(0.0, f64::max);
    let seed = Complex64::new(0.4, 0.9);
    let mut estimates: Vec<Complex64> = (0..degree)
        .map(|k| seed.powu(k as u32 + 1) / seed.norm().powi(k as i32 + 1) * radius)
        .collect();

    for _ in 0..ROOT_FINDER_MAX_ITERATIONS {
        let mut max_step = 0.0f64;
        for i in 0..degree {
            let xi = estimates[i];
            let mut denom = Complex64::new(1.0, 0.0);
            for (j, &xj) in estimates.iter().enumerate() {
                if j != i {
                    denom *= xi - xj;
                }
            }
            if denom.norm() == 0.0 {
                // Coincident estimates; nudge apart and retry next sweep
                estimates[i] = xi + Complex64::new(1e-9, 1e-9);
                max_step = f64::INFINITY;
                continue;
            }
            let step = eval_complex(&monic, xi) / denom;
            estimates[i] = xi - step;
            max_step = max_step.max(step.norm() / (1.0 + xi.norm()));
        }
        if max_step < ROOT_FINDER_TOLERANCE {
            break;
        }
    }

    Ok(estimates)
}

/// Real parts of a polynomial expanded from conjugate-paired roots
pub fn real_coefficients(coeffs: &[Complex64]) -> Vec<f64> {
    coeffs.iter().map(|c| c.re).collect()
}
