use crate::error::{FilterError, Result};
use crate::signal_processing::Signal;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};
use std::f64::consts::PI;

/// Parameters of a sine tone buried in white Gaussian noise
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
#[serde(default)]
pub struct NoisySineConfig {
    pub duration_secs: f64,
    pub frequency_hz: f64,
    pub amplitude: f64,
    /// Standard deviation of the additive noise
    pub noise_std: f64,
    pub seed: u64,
}

impl Default for NoisySineConfig {
    fn default() -> Self {
        Self {
            duration_secs: 1.0,
            frequency_hz: 50.0,
            amplitude: 1.0,
            noise_std: 0.5,
            seed: 0,
        }
    }
}

impl NoisySineConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_noise_std(mut self, noise_std: f64) -> Self {
        self.noise_std = noise_std;
        self
    }

    pub fn with_frequency(mut self, frequency_hz: f64) -> Self {
        self.frequency_hz = frequency_hz;
        self
    }
}

/// Sine of `frequency_hz` sampled at `t = i / fs` for `floor(fs * duration)` samples
pub fn generate_sine(
    sample_rate_hz: f64,
    duration_secs: f64,
    frequency_hz: f64,
    amplitude: f64,
) -> Result<Signal> {
    let num_samples = (sample_rate_hz * duration_secs).max(0.0) as usize;
    let omega = 2.0 * PI * frequency_hz / sample_rate_hz;
    let samples = (0..num_samples)
        .map(|i| amplitude * (omega * i as f64).sin())
        .collect();
    Signal::new(samples, sample_rate_hz)
}

/// Add zero-mean Gaussian noise of standard deviation `noise_std`
///
/// The same seed always produces the same noise sequence.
pub fn add_white_noise(samples: &mut [f64], noise_std: f64, seed: u64) -> Result<()> {
    if !noise_std.is_finite() || noise_std < 0.0 {
        return Err(FilterError::invalid(format!(
            "noise std must be non-negative, got {}",
            noise_std
        )));
    }
    if noise_std == 0.0 {
        return Ok(());
    }
    let normal = Normal::new(0.0, noise_std).map_err(|e| {
        FilterError::InvalidParameter(format!("noise std {}: {}", noise_std, e))
    })?;
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    for sample in samples.iter_mut() {
        *sample += normal.sample(&mut rng);
    }
    Ok(())
}

/// Generate the clean tone and its noisy copy
///
/// Returns `(clean, noisy)`, both at `sample_rate_hz` and of equal length.
pub fn generate_noisy_sine(
    sample_rate_hz: f64,
    config: &NoisySineConfig,
) -> Result<(Signal, Signal)> {
    let clean = generate_sine(
        sample_rate_hz,
        config.duration_secs,
        config.frequency_hz,
        config.amplitude,
    )?;
    let mut noisy = clean.samples().to_vec();
    add_white_noise(&mut noisy, config.noise_std, config.seed)?;
    let noisy = Signal::new(noisy, sample_rate_hz)?;
    Ok((clean, noisy))
}
