use crate::constants::SINC_CENTER_EPSILON;
use crate::error::{FilterError, Result};
use crate::signal_processing::spec::normalized_cutoff;
use crate::signal_processing::window::{WindowKind, generate_window};
use crate::signal_processing::TransferFunction;
use std::f64::consts::PI;

const UNITY_DENOMINATOR: [f64; 1] = [1.0];

/// Taps of a windowed-sinc low-pass FIR filter
///
/// Taps are symmetric about the center index, giving linear phase with a
/// group delay of `(N - 1) / 2` samples.
#[derive(Debug, Clone, PartialEq)]
pub struct FirCoefficients {
    taps: Vec<f64>,
}

impl FirCoefficients {
    /// Wrap an arbitrary tap sequence
    ///
    /// # Errors
    /// Returns `FilterError::InvalidParameter` if `taps` is empty
    pub fn new(taps: Vec<f64>) -> Result<Self> {
        if taps.is_empty() {
            return Err(FilterError::invalid("FIR coefficients must not be empty"));
        }
        Ok(Self { taps })
    }

    pub fn taps(&self) -> &[f64] {
        &self.taps
    }

    pub fn num_taps(&self) -> usize {
        self.taps.len()
    }

    /// Gain at DC, the sum of the taps
    ///
    /// Near but generally not exactly 1.0 for a windowed design.
    pub fn dc_gain(&self) -> f64 {
        self.taps.iter().sum()
    }

    /// Group delay in samples (half the filter length for linear phase)
    pub fn group_delay_samples(&self) -> f64 {
        (self.taps.len() - 1) as f64 / 2.0
    }

    pub fn is_symmetric(&self, tolerance: f64) -> bool {
        let n = self.taps.len();
        (0..n / 2).all(|i| (self.taps[i] - self.taps[n - 1 - i]).abs() <= tolerance)
    }

    pub fn into_taps(self) -> Vec<f64> {
        self.taps
    }
}

impl TransferFunction for FirCoefficients {
    fn numerator(&self) -> &[f64] {
        &self.taps
    }

    fn denominator(&self) -> &[f64] {
        &UNITY_DENOMINATOR
    }
}

/// Windowed-sinc low-pass FIR designer
///
/// # Algorithm
/// 1. Normalize the cutoff to a fraction of Nyquist, `wc`
/// 2. Sample the ideal response `wc * sinc(wc * (n - (N-1)/2))`
/// 3. Multiply by the window weights
///
/// With `scale_to_unity` set, the taps are finally divided by their sum so
/// the DC gain is exactly 1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FirDesigner {
    pub window: WindowKind,
    pub scale_to_unity: bool,
}

impl FirDesigner {
    pub fn new(window: WindowKind) -> Self {
        Self {
            window,
            scale_to_unity: false,
        }
    }

    /// Truncated sinc with no window
    pub fn plain() -> Self {
        Self::new(WindowKind::Rectangular)
    }

    pub fn with_unity_dc_gain(mut self) -> Self {
        self.scale_to_unity = true;
        self
    }

    /// Design the low-pass taps
    ///
    /// # Arguments
    /// * `num_taps` - Number of taps N (odd recommended for a Type I filter)
    /// * `cutoff_hz` - Cutoff frequency in Hz
    /// * `sample_rate_hz` - Sample rate in Hz
    ///
    /// # Errors
    /// Returns `FilterError::InvalidParameter` if `num_taps` is zero or the
    /// cutoff is not strictly between 0 and Nyquist
    pub fn design(
        &self,
        num_taps: usize,
        cutoff_hz: f64,
        sample_rate_hz: f64,
    ) -> Result<FirCoefficients> {
        if num_taps < 1 {
            return Err(FilterError::invalid("FIR tap count must be at least 1"));
        }
        let wc = normalized_cutoff(cutoff_hz, sample_rate_hz)?;
        let window = generate_window(self.window, num_taps)?;

        let center = (num_taps - 1) as f64 / 2.0;
        let mut taps: Vec<f64> = window
            .iter()
            .enumerate()
            .map(|(n, &w)| wc * sinc(wc * (n as f64 - center)) * w)
            .collect();

        if self.scale_to_unity {
            let sum: f64 = taps.iter().sum();
            if sum.abs() > 0.0 {
                taps.iter_mut().for_each(|h| *h /= sum);
            }
        }

        let coeffs = FirCoefficients { taps };
        log::debug!(
            "FIR design: {} taps, {} window, wc={:.4}, DC gain {:.6}",
            num_taps,
            self.window,
            wc,
            coeffs.dc_gain()
        );
        Ok(coeffs)
    }
}

impl Default for FirDesigner {
    fn default() -> Self {
        Self::new(WindowKind::default())
    }
}

/// Normalized sinc, sin(πx)/(πx)
fn sinc(x: f64) -> f64 {
    if x.abs() < SINC_CENTER_EPSILON {
        1.0
    } else {
        let px = PI * x;
        px.sin() / px
    }
}

/// Design a windowed-sinc low-pass filter
///
/// Shorthand for `FirDesigner::new(window).design(..)`.
pub fn design_lowpass_fir(
    num_taps: usize,
    cutoff_hz: f64,
    sample_rate_hz: f64,
    window: WindowKind,
) -> Result<FirCoefficients> {
    FirDesigner::new(window).design(num_taps, cutoff_hz, sample_rate_hz)
}
