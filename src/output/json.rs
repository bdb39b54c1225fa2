use super::{Formatter, curve_rows};
use crate::signal_processing::{ResponseComparison, ResponseSummary};

pub struct JsonFormatter;

#[derive(serde::Serialize)]
struct CurvePoint {
    frequency_hz: f64,
    fir_gain: f64,
    iir_gain: f64,
}

impl Formatter for JsonFormatter {
    fn format(&self, summary: &ResponseSummary) -> String {
        serde_json::to_string(summary).unwrap_or_else(|e| format!(r#"{{"error":"{}"}}"#, e))
    }

    fn format_curves(&self, comparison: &ResponseComparison) -> Vec<String> {
        curve_rows(comparison)
            .map(|(frequency_hz, fir_gain, iir_gain)| CurvePoint {
                frequency_hz,
                fir_gain,
                iir_gain,
            })
            .map(|p| serde_json::to_string(&p).unwrap_or_default())
            .collect()
    }
}
