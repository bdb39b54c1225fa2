use crate::constants::{HALF_POWER_GAIN, RESPONSE_POLE_EPSILON};
use crate::error::{FilterError, Result};
use crate::signal_processing::TransferFunction;
use crate::signal_processing::polynomial::eval_real;
use num_complex::Complex64;
use std::f64::consts::PI;

/// Complex gain of a filter at one angular frequency
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResponsePoint {
    /// Angular frequency in radians/sample, in [0, π)
    pub omega: f64,
    pub gain: Complex64,
}

impl ResponsePoint {
    pub fn magnitude(&self) -> f64 {
        self.gain.norm()
    }

    pub fn magnitude_db(&self) -> f64 {
        20.0 * self.gain.norm().log10()
    }

    /// Phase in radians, (-π, π]
    pub fn phase(&self) -> f64 {
        self.gain.arg()
    }

    /// Frequency as a fraction of Nyquist
    pub fn normalized_frequency(&self) -> f64 {
        self.omega / PI
    }

    pub fn frequency_hz(&self, sample_rate_hz: f64) -> f64 {
        self.omega / PI * sample_rate_hz / 2.0
    }
}

/// Sampled frequency response over [0, π)
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyResponse {
    points: Vec<ResponsePoint>,
}

impl FrequencyResponse {
    pub fn points(&self) -> &[ResponsePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn magnitudes(&self) -> Vec<f64> {
        self.points.iter().map(ResponsePoint::magnitude).collect()
    }

    pub fn magnitudes_db(&self) -> Vec<f64> {
        self.points.iter().map(ResponsePoint::magnitude_db).collect()
    }

    pub fn phases(&self) -> Vec<f64> {
        self.points.iter().map(ResponsePoint::phase).collect()
    }

    pub fn frequencies_hz(&self, sample_rate_hz: f64) -> Vec<f64> {
        self.points
            .iter()
            .map(|p| p.frequency_hz(sample_rate_hz))
            .collect()
    }

    /// Point whose frequency is closest to `frequency_hz`
    pub fn nearest(&self, frequency_hz: f64, sample_rate_hz: f64) -> Option<&ResponsePoint> {
        self.points.iter().min_by(|a, b| {
            let da = (a.frequency_hz(sample_rate_hz) - frequency_hz).abs();
            let db = (b.frequency_hz(sample_rate_hz) - frequency_hz).abs();
            da.total_cmp(&db)
        })
    }

    /// Magnitude at the point nearest `frequency_hz`
    pub fn gain_at(&self, frequency_hz: f64, sample_rate_hz: f64) -> Option<f64> {
        self.nearest(frequency_hz, sample_rate_hz)
            .map(ResponsePoint::magnitude)
    }

    pub fn peak_magnitude(&self) -> f64 {
        self.points
            .iter()
            .map(ResponsePoint::magnitude)
            .fold(0.0, f64::max)
    }

    /// First frequency (Hz) at which the magnitude falls below the
    /// half-power level relative to the DC gain
    ///
    /// Linearly interpolated between the bracketing points. `None` when
    /// the response never drops that far.
    pub fn half_power_frequency(&self, sample_rate_hz: f64) -> Option<f64> {
        let reference = self.points.first()?.magnitude();
        let level = reference * HALF_POWER_GAIN;

        self.points.windows(2).find_map(|pair| {
            let (m0, m1) = (pair[0].magnitude(), pair[1].magnitude());
            if m0 >= level && m1 < level {
                let f0 = pair[0].frequency_hz(sample_rate_hz);
                let f1 = pair[1].frequency_hz(sample_rate_hz);
                Some(f0 + (m0 - level) / (m0 - m1) * (f1 - f0))
            } else {
                None
            }
        })
    }
}

/// Evaluate `H(e^jω) = B(e^-jω) / A(e^-jω)` at `num_points` angles
///
/// Angles are `ω_k = π k / num_points`, uniformly covering [0, π). Both
/// polynomials are evaluated in `e^-jω` by Horner's rule. A denominator
/// that vanishes at some ω yields an infinite gain at that point.
///
/// # Errors
/// Returns `FilterError::InvalidParameter` if `num_points` is zero or a
/// coefficient sequence is empty
pub fn evaluate(b: &[f64], a: &[f64], num_points: usize) -> Result<FrequencyResponse> {
    if num_points < 1 {
        return Err(FilterError::invalid("frequency response needs at least one point"));
    }
    if b.is_empty() || a.is_empty() {
        return Err(FilterError::invalid("transfer function coefficients must not be empty"));
    }

    // Coefficients are in ascending powers of z^-1; Horner wants highest first
    let b_rev: Vec<f64> = b.iter().rev().copied().collect();
    let a_rev: Vec<f64> = a.iter().rev().copied().collect();

    let points = (0..num_points)
        .map(|k| {
            let omega = PI * k as f64 / num_points as f64;
            let z_inv = Complex64::from_polar(1.0, -omega);
            let num = eval_real(&b_rev, z_inv);
            let den = eval_real(&a_rev, z_inv);
            let gain = if den.norm() < RESPONSE_POLE_EPSILON {
                Complex64::new(f64::INFINITY, 0.0)
            } else {
                num / den
            };
            ResponsePoint { omega, gain }
        })
        .collect();

    Ok(FrequencyResponse { points })
}

/// Frequency response of any filter exposing its transfer function
pub fn evaluate_filter<F: TransferFunction + ?Sized>(
    filter: &F,
    num_points: usize,
) -> Result<FrequencyResponse> {
    evaluate(filter.numerator(), filter.denominator(), num_points)
}
