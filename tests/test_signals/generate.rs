use std::f64::consts::PI;

/// Sine of `frequency_hz` sampled at `t = i / sample_rate`
pub fn sine(frequency_hz: f64, sample_rate: f64, num_samples: usize, amplitude: f64) -> Vec<f64> {
    (0..num_samples)
        .map(|i| amplitude * (2.0 * PI * frequency_hz * i as f64 / sample_rate).sin())
        .collect()
}

/// Sum of two unit-amplitude sines
#[allow(dead_code)]
pub fn two_tone(low_hz: f64, high_hz: f64, sample_rate: f64, num_samples: usize) -> Vec<f64> {
    sine(low_hz, sample_rate, num_samples, 1.0)
        .into_iter()
        .zip(sine(high_hz, sample_rate, num_samples, 1.0))
        .map(|(a, b)| a + b)
        .collect()
}

/// Unit impulse at index `at`
#[allow(dead_code)]
pub fn impulse(num_samples: usize, at: usize) -> Vec<f64> {
    let mut x = vec![0.0; num_samples];
    if at < num_samples {
        x[at] = 1.0;
    }
    x
}

/// Amplitude of the `frequency_hz` component of `signal`
///
/// Single-bin DFT; exact when the slice spans whole periods of the tone.
#[allow(dead_code)]
pub fn tone_amplitude(signal: &[f64], frequency_hz: f64, sample_rate: f64) -> f64 {
    let omega = 2.0 * PI * frequency_hz / sample_rate;
    let (re, im) = signal
        .iter()
        .enumerate()
        .fold((0.0, 0.0), |(re, im), (i, &x)| {
            let phase = omega * i as f64;
            (re + x * phase.cos(), im - x * phase.sin())
        });
    2.0 * (re * re + im * im).sqrt() / signal.len() as f64
}
