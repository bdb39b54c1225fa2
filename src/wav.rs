use crate::error::{FilterError, Result};
use crate::signal_processing::Signal;
use hound::{SampleFormat, WavReader, WavSpec, WavWriter};
use std::path::Path;

fn wav_err(e: hound::Error) -> FilterError {
    FilterError::Wav(e.to_string())
}

/// Load a WAV file as a mono signal
///
/// Multi-channel files are averaged down to one channel. Integer samples
/// are scaled to [-1, 1).
pub fn load_wav(path: &Path) -> Result<Signal> {
    let mut reader = WavReader::open(path).map_err(wav_err)?;
    let spec = reader.spec();
    let channels = spec.channels.max(1) as usize;

    let interleaved: Vec<f64> = match spec.sample_format {
        SampleFormat::Float => reader
            .samples::<f32>()
            .map(|s| s.map(f64::from))
            .collect::<std::result::Result<_, _>>()
            .map_err(wav_err)?,
        SampleFormat::Int => {
            let full_scale = (1i64 << (spec.bits_per_sample - 1)) as f64;
            reader
                .samples::<i32>()
                .map(|s| s.map(|v| v as f64 / full_scale))
                .collect::<std::result::Result<_, _>>()
                .map_err(wav_err)?
        }
    };

    let samples: Vec<f64> = interleaved
        .chunks_exact(channels)
        .map(|frame| frame.iter().sum::<f64>() / channels as f64)
        .collect();

    log::info!(
        "Loaded {} ({} Hz, {} channel(s), {} frames)",
        path.display(),
        spec.sample_rate,
        channels,
        samples.len()
    );
    Signal::new(samples, spec.sample_rate as f64)
}

/// Save a signal as a mono 32-bit float WAV file
///
/// The sample rate is rounded to the nearest integer Hz.
pub fn save_wav(path: &Path, signal: &Signal) -> Result<()> {
    let spec = WavSpec {
        channels: 1,
        sample_rate: signal.sample_rate_hz().round() as u32,
        bits_per_sample: 32,
        sample_format: SampleFormat::Float,
    };

    let mut writer = WavWriter::create(path, spec).map_err(wav_err)?;
    for &sample in signal.samples() {
        writer.write_sample(sample as f32).map_err(wav_err)?;
    }
    writer.finalize().map_err(wav_err)?;

    log::debug!("Wrote {} samples to {}", signal.len(), path.display());
    Ok(())
}
