//! Numeric constants shared by the design and evaluation code
//!
//! Tolerances here govern the root finder and the checks made on
//! designed coefficients.

/// Offset from the FIR center tap below which the sinc limit value is used.
pub const SINC_CENTER_EPSILON: f64 = 1e-12;

/// Maximum number of Durand-Kerner sweeps before the root finder gives up.
pub const ROOT_FINDER_MAX_ITERATIONS: usize = 500;

/// Largest correction in a sweep below which the roots are considered converged.
pub const ROOT_FINDER_TOLERANCE: f64 = 1e-14;

/// Denominator magnitude below which a frequency-response point is treated as a pole.
pub const RESPONSE_POLE_EPSILON: f64 = 1e-300;

/// Gain of a half-power (-3 dB) point relative to unity.
pub const HALF_POWER_GAIN: f64 = std::f64::consts::FRAC_1_SQRT_2;
