use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use lowpass_lab::DesignConfig;
use lowpass_lab::config::Frequency;
use lowpass_lab::output::{OutputFormat, create_formatter};
use lowpass_lab::signal_processing::{
    DesignedFilter, ResponseComparison, Signal, TransferFunction, WindowKind,
};
use lowpass_lab::wav::{load_wav, save_wav};

#[derive(Parser, Debug)]
#[command(name = "lowpass-lab")]
#[command(about = "Design and compare windowed-sinc FIR and Chebyshev IIR low-pass filters", long_about = None)]
struct Args {
    /// TOML design configuration
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Sample rate in Hz
    #[arg(long)]
    sample_rate: Option<f64>,

    /// Cutoff for both filters (e.g., "150", "150hz", "1.2khz")
    #[arg(long)]
    cutoff: Option<Frequency>,

    /// Number of FIR taps
    #[arg(long)]
    taps: Option<usize>,

    /// FIR window
    #[arg(short = 'w', long, value_enum)]
    window: Option<WindowKind>,

    /// Scale FIR taps for exactly unity DC gain
    #[arg(long)]
    unity_dc: bool,

    /// Chebyshev filter order
    #[arg(long)]
    order: Option<usize>,

    /// Chebyshev passband ripple in dB
    #[arg(long)]
    ripple: Option<f64>,

    /// Number of frequency response points
    #[arg(long)]
    points: Option<usize>,

    /// Output format: text, csv, json
    #[arg(short = 'f', long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Print the full response curves after the summaries
    #[arg(long)]
    curves: bool,

    /// Print filter coefficients
    #[arg(long)]
    coefficients: bool,

    /// WAV file to filter with both designs
    #[arg(short = 'i', long)]
    input: Option<PathBuf>,

    /// Where to write the FIR-filtered input
    #[arg(long, requires = "input")]
    output_fir: Option<PathBuf>,

    /// Where to write the IIR-filtered input
    #[arg(long, requires = "input")]
    output_iir: Option<PathBuf>,

    /// Increase output verbosity
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn build_config(args: &Args) -> Result<DesignConfig> {
    let mut config = match &args.config {
        Some(path) => DesignConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => DesignConfig::default(),
    };

    if let Some(fs) = args.sample_rate {
        config.sample_rate = fs;
    }
    if let Some(cutoff) = args.cutoff {
        config = config.with_cutoff(cutoff);
    }
    if let Some(taps) = args.taps {
        config.fir.num_taps = taps;
    }
    if let Some(window) = args.window {
        config.fir.window = window;
    }
    if args.unity_dc {
        config.fir.scale_to_unity = true;
    }
    if let Some(order) = args.order {
        config.iir.order = order;
    }
    if let Some(ripple) = args.ripple {
        config.iir.ripple_db = ripple;
    }
    if let Some(points) = args.points {
        config.response.num_points = points;
    }
    Ok(config)
}

fn print_coefficients(filter: &DesignedFilter) {
    let join = |c: &[f64]| {
        c.iter()
            .map(|v| format!("{:.10e}", v))
            .collect::<Vec<_>>()
            .join(", ")
    };
    println!("{} b = [{}]", filter.label(), join(filter.numerator()));
    println!("{} a = [{}]", filter.label(), join(filter.denominator()));
}

fn filter_file(
    comparison: &ResponseComparison,
    signal: &Signal,
    fir_path: Option<&PathBuf>,
    iir_path: Option<&PathBuf>,
) -> Result<()> {
    if (signal.sample_rate_hz() - comparison.sample_rate_hz).abs() > 1e-6 {
        log::warn!(
            "Input is {} Hz but filters were designed for {} Hz",
            signal.sample_rate_hz(),
            comparison.sample_rate_hz
        );
    }

    for (filter, path) in [(&comparison.fir, fir_path), (&comparison.iir, iir_path)] {
        let filtered = filter.apply_signal(signal)?;
        println!(
            "{}: input RMS {:.5}, output RMS {:.5}",
            filter.label(),
            signal.rms(),
            filtered.rms()
        );
        if let Some(path) = path {
            save_wav(path, &filtered)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("Wrote {}", path.display());
        }
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

    let config = build_config(&args)?;
    let [fir_spec, iir_spec] = config.filter_specs();
    let comparison = ResponseComparison::new(fir_spec, iir_spec, config.response.num_points)
        .context("Filter design failed")?;

    log::info!(
        "Designed {}-tap {} FIR and order {} Chebyshev IIR at {} Hz / {} Hz",
        config.fir.num_taps,
        config.fir.window,
        config.iir.order,
        config.fir.cutoff.as_hz(),
        config.sample_rate
    );

    if args.coefficients {
        print_coefficients(&comparison.fir);
        print_coefficients(&comparison.iir);
    }

    let formatter = create_formatter(args.format, args.verbose > 0);
    if let Some(header) = formatter.header() {
        println!("{}", header);
    }
    for summary in comparison.summaries() {
        println!("{}", formatter.format(&summary));
    }

    if args.curves {
        for line in formatter.format_curves(&comparison) {
            println!("{}", line);
        }
    }

    if let Some(ref input) = args.input {
        let signal =
            load_wav(input).with_context(|| format!("Failed to read {}", input.display()))?;
        filter_file(
            &comparison,
            &signal,
            args.output_fir.as_ref(),
            args.output_iir.as_ref(),
        )?;
    }

    Ok(())
}
