mod csv;
mod json;
mod text;

use crate::signal_processing::{ResponseComparison, ResponseSummary};

pub use self::csv::CsvFormatter;
pub use self::json::JsonFormatter;
pub use self::text::TextFormatter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Csv,
}

/// Renders filter response summaries and response curves
pub trait Formatter: Send {
    fn format(&self, summary: &ResponseSummary) -> String;

    fn header(&self) -> Option<&'static str> {
        None
    }

    /// Render both response curves, one line per frequency point
    fn format_curves(&self, comparison: &ResponseComparison) -> Vec<String>;
}

pub fn create_formatter(format: OutputFormat, verbose: bool) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(verbose)),
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Csv => Box::new(CsvFormatter),
    }
}

/// `(frequency_hz, fir_gain, iir_gain)` for every evaluated point
pub fn curve_rows(comparison: &ResponseComparison) -> impl Iterator<Item = (f64, f64, f64)> + '_ {
    let fs = comparison.sample_rate_hz;
    comparison
        .fir_response
        .points()
        .iter()
        .zip(comparison.iir_response.points())
        .map(move |(f, i)| (f.frequency_hz(fs), f.magnitude(), i.magnitude()))
}
