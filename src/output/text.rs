use super::{Formatter, curve_rows};
use crate::signal_processing::{ResponseComparison, ResponseSummary};

pub struct TextFormatter {
    verbose: bool,
}

impl TextFormatter {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }
}

fn db(gain: f64) -> f64 {
    20.0 * gain.log10()
}

impl Formatter for TextFormatter {
    fn format(&self, summary: &ResponseSummary) -> String {
        let half_power = summary
            .half_power_hz
            .map_or("n/a".to_string(), |hz| format!("{:.1} Hz", hz));
        if self.verbose {
            format!(
                "{}: {} coeffs, DC {:.4} ({:.2} dB), cutoff {:.4} ({:.2} dB), stopband {:.2} dB, Nyquist {:.2} dB, -3 dB at {}",
                summary.label,
                summary.num_coefficients,
                summary.dc_gain,
                db(summary.dc_gain),
                summary.cutoff_gain,
                db(summary.cutoff_gain),
                db(summary.stopband_gain),
                db(summary.nyquist_gain),
                half_power
            )
        } else {
            format!(
                "{}: DC {:.3}, cutoff {:.3}, -3 dB at {}",
                summary.label, summary.dc_gain, summary.cutoff_gain, half_power
            )
        }
    }

    fn format_curves(&self, comparison: &ResponseComparison) -> Vec<String> {
        // Text output thins the curve to about 50 lines
        let step = (comparison.fir_response.len() / 50).max(1);
        curve_rows(comparison)
            .step_by(step)
            .map(|(hz, fir, iir)| format!("{:>9.2} Hz  FIR {:>8.5}  IIR {:>8.5}", hz, fir, iir))
            .collect()
    }
}
