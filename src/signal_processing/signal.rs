use crate::error::{FilterError, Result};

/// Real samples at a fixed sample rate
///
/// Filtering never mutates a signal; it yields a new one of equal length.
#[derive(Debug, Clone, PartialEq)]
pub struct Signal {
    samples: Vec<f64>,
    sample_rate_hz: f64,
}

impl Signal {
    /// # Errors
    /// Returns `FilterError::InvalidParameter` if the sample rate is not a
    /// positive finite number
    pub fn new(samples: Vec<f64>, sample_rate_hz: f64) -> Result<Self> {
        if !sample_rate_hz.is_finite() || sample_rate_hz <= 0.0 {
            return Err(FilterError::invalid(format!(
                "sample rate must be positive, got {} Hz",
                sample_rate_hz
            )));
        }
        Ok(Self {
            samples,
            sample_rate_hz,
        })
    }

    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    pub fn sample_rate_hz(&self) -> f64 {
        self.sample_rate_hz
    }

    pub fn nyquist_hz(&self) -> f64 {
        self.sample_rate_hz / 2.0
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn duration_secs(&self) -> f64 {
        self.samples.len() as f64 / self.sample_rate_hz
    }

    /// Sample times `i / fs` in seconds, starting at zero
    pub fn time_axis(&self) -> Vec<f64> {
        (0..self.samples.len())
            .map(|i| i as f64 / self.sample_rate_hz)
            .collect()
    }

    pub fn rms(&self) -> f64 {
        if self.samples.is_empty() {
            return 0.0;
        }
        (self.samples.iter().map(|x| x * x).sum::<f64>() / self.samples.len() as f64).sqrt()
    }

    /// New signal at the same rate from a length-preserving transform
    pub(crate) fn filtered_with<F>(&self, filter: F) -> Result<Signal>
    where
        F: FnOnce(&[f64]) -> Result<Vec<f64>>,
    {
        let samples = filter(&self.samples)?;
        debug_assert_eq!(samples.len(), self.samples.len());
        Ok(Signal {
            samples,
            sample_rate_hz: self.sample_rate_hz,
        })
    }

    pub fn into_samples(self) -> Vec<f64> {
        self.samples
    }
}
