use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use std::path::{Path, PathBuf};

use lowpass_lab::DesignConfig;
use lowpass_lab::config::Frequency;
use lowpass_lab::save_wav;
use lowpass_lab::signal_processing::{Signal, TransferFunction, WindowKind};
use lowpass_lab::simulation::{NoisySineConfig, generate_noisy_sine};

#[derive(Parser, Debug)]
#[command(name = "noisy_demo")]
#[command(about = "Filter a seeded noisy sine with FIR and IIR low-pass designs")]
struct Args {
    /// TOML design configuration
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Tone frequency in Hz
    #[arg(long, default_value_t = 50.0)]
    tone: f64,

    /// Noise standard deviation
    #[arg(long, default_value_t = 0.5)]
    noise_std: f64,

    /// Signal duration in seconds
    #[arg(short, long, default_value_t = 1.0)]
    duration: f64,

    /// Noise seed for reproducibility
    #[arg(short, long, default_value_t = 0)]
    seed: u64,

    /// Cutoff for both filters (overrides config)
    #[arg(long)]
    cutoff: Option<Frequency>,

    /// FIR window (overrides config)
    #[arg(short, long, value_enum)]
    window: Option<WindowKind>,

    /// Directory for clean, noisy and filtered WAV files
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Emit the report as JSON
    #[arg(long)]
    json: bool,

    /// Increase output verbosity
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Serialize)]
struct FilterReport {
    filter: &'static str,
    rms_error: f64,
    /// RMS error after skipping the start-up transient
    settled_rms_error: f64,
}

#[derive(Debug, Serialize)]
struct DemoReport {
    sample_rate: f64,
    cutoff_hz: f64,
    tone_hz: f64,
    noise_std: f64,
    seed: u64,
    noisy_rms_error: f64,
    filters: Vec<FilterReport>,
}

fn rms_error(a: &[f64], b: &[f64]) -> f64 {
    let n = a.len().min(b.len());
    if n == 0 {
        return 0.0;
    }
    let sum: f64 = a.iter().zip(b).map(|(x, y)| (x - y) * (x - y)).sum();
    (sum / n as f64).sqrt()
}

fn write_outputs(dir: &Path, signals: &[(&str, &Signal)]) -> Result<()> {
    std::fs::create_dir_all(dir).context("Failed to create output directory")?;
    for (name, signal) in signals {
        let path = dir.join(format!("{}.wav", name));
        save_wav(&path, signal).with_context(|| format!("Failed to write {}", path.display()))?;
        log::info!("Wrote {}", path.display());
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let mut config = match &args.config {
        Some(path) => DesignConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => DesignConfig::default(),
    };
    if let Some(cutoff) = args.cutoff {
        config = config.with_cutoff(cutoff);
    }
    if let Some(window) = args.window {
        config.fir.window = window;
    }

    let tone = NoisySineConfig {
        duration_secs: args.duration,
        frequency_hz: args.tone,
        amplitude: 1.0,
        noise_std: args.noise_std,
        seed: args.seed,
    };
    let (clean, noisy) = generate_noisy_sine(config.sample_rate, &tone)
        .context("Failed to generate test signal")?;

    let [fir_spec, iir_spec] = config.filter_specs();
    let fir = fir_spec.design().context("FIR design failed")?;
    let iir = iir_spec.design().context("IIR design failed")?;

    let fir_out = fir.apply_signal(&noisy)?;
    let iir_out = iir.apply_signal(&noisy)?;

    // Start-up transients of both filters are over after this many samples
    let settle = (fir.numerator().len() + 10 * iir.order()).min(clean.len());
    let mut filters = Vec::new();
    for (label, out) in [("FIR", &fir_out), ("IIR", &iir_out)] {
        filters.push(FilterReport {
            filter: label,
            rms_error: rms_error(out.samples(), clean.samples()),
            settled_rms_error: rms_error(&out.samples()[settle..], &clean.samples()[settle..]),
        });
    }

    let report = DemoReport {
        sample_rate: config.sample_rate,
        cutoff_hz: config.fir.cutoff.as_hz(),
        tone_hz: tone.frequency_hz,
        noise_std: tone.noise_std,
        seed: tone.seed,
        noisy_rms_error: rms_error(noisy.samples(), clean.samples()),
        filters,
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!(
            "{} Hz tone, noise std {} (seed {}), cutoff {} Hz @ {} Hz",
            report.tone_hz, report.noise_std, report.seed, report.cutoff_hz, report.sample_rate
        );
        println!("noisy: RMS error {:.4}", report.noisy_rms_error);
        for f in &report.filters {
            println!(
                "{}:   RMS error {:.4} (settled {:.4})",
                f.filter, f.rms_error, f.settled_rms_error
            );
        }
    }

    if let Some(ref dir) = args.output_dir {
        write_outputs(
            dir,
            &[
                ("clean", &clean),
                ("noisy", &noisy),
                ("fir", &fir_out),
                ("iir", &iir_out),
            ],
        )?;
    }

    Ok(())
}
