use super::{Formatter, curve_rows};
use crate::signal_processing::{ResponseComparison, ResponseSummary};

pub struct CsvFormatter;

fn optional(value: Option<f64>) -> String {
    value.map_or(String::new(), |v| format!("{:.3}", v))
}

impl Formatter for CsvFormatter {
    fn format(&self, summary: &ResponseSummary) -> String {
        format!(
            "{},{},{:.6},{:.6},{:.6},{:.6},{}",
            summary.label,
            summary.num_coefficients,
            summary.dc_gain,
            summary.cutoff_gain,
            summary.stopband_gain,
            summary.nyquist_gain,
            optional(summary.half_power_hz)
        )
    }

    fn header(&self) -> Option<&'static str> {
        Some("filter,coefficients,dc_gain,cutoff_gain,stopband_gain,nyquist_gain,half_power_hz")
    }

    fn format_curves(&self, comparison: &ResponseComparison) -> Vec<String> {
        std::iter::once("frequency_hz,fir_gain,iir_gain".to_string())
            .chain(
                curve_rows(comparison)
                    .map(|(hz, fir, iir)| format!("{:.4},{:.8},{:.8}", hz, fir, iir)),
            )
            .collect()
    }
}
