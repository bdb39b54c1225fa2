use crate::error::Result;
use crate::signal_processing::response::FrequencyResponse;
use crate::signal_processing::spec::{DesignedFilter, FilterSpec};

/// Headline figures of one filter's magnitude response
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ResponseSummary {
    pub label: &'static str,
    /// Coefficient count: taps for FIR, `len(b) + len(a)` for IIR
    pub num_coefficients: usize,
    pub dc_gain: f64,
    pub cutoff_gain: f64,
    pub nyquist_gain: f64,
    /// Gain at the probe frequency in the stopband
    pub stopband_gain: f64,
    /// Frequency where the gain first falls 3 dB below DC, in Hz
    pub half_power_hz: Option<f64>,
}

impl ResponseSummary {
    pub fn from_response(
        filter: &DesignedFilter,
        response: &FrequencyResponse,
        cutoff_hz: f64,
        stopband_probe_hz: f64,
        sample_rate_hz: f64,
    ) -> Self {
        let num_coefficients = match filter {
            DesignedFilter::Fir(h) => h.num_taps(),
            DesignedFilter::Iir(c) => c.b().len() + c.a().len(),
        };
        let gain = |hz: f64| response.gain_at(hz, sample_rate_hz).unwrap_or(f64::NAN);

        Self {
            label: filter.label(),
            num_coefficients,
            dc_gain: gain(0.0),
            cutoff_gain: gain(cutoff_hz),
            nyquist_gain: response
                .points()
                .last()
                .map(|p| p.magnitude())
                .unwrap_or(f64::NAN),
            stopband_gain: gain(stopband_probe_hz),
            half_power_hz: response.half_power_frequency(sample_rate_hz),
        }
    }
}

/// Side-by-side FIR and IIR designs for the same cutoff
#[derive(Debug, Clone)]
pub struct ResponseComparison {
    pub sample_rate_hz: f64,
    pub cutoff_hz: f64,
    pub fir: DesignedFilter,
    pub iir: DesignedFilter,
    pub fir_response: FrequencyResponse,
    pub iir_response: FrequencyResponse,
}

impl ResponseComparison {
    /// Design both filters and evaluate their responses on the same grid
    pub fn new(fir: FilterSpec, iir: FilterSpec, num_points: usize) -> Result<Self> {
        let fir_filter = fir.design()?;
        let iir_filter = iir.design()?;
        let fir_response = fir_filter.frequency_response(num_points)?;
        let iir_response = iir_filter.frequency_response(num_points)?;

        if fir.sample_rate_hz() != iir.sample_rate_hz() || fir.cutoff_hz() != iir.cutoff_hz() {
            log::warn!(
                "Comparing filters with different parameters: FIR {} Hz @ {} Hz, IIR {} Hz @ {} Hz",
                fir.cutoff_hz(),
                fir.sample_rate_hz(),
                iir.cutoff_hz(),
                iir.sample_rate_hz()
            );
        }

        Ok(Self {
            sample_rate_hz: fir.sample_rate_hz(),
            cutoff_hz: fir.cutoff_hz(),
            fir: fir_filter,
            iir: iir_filter,
            fir_response,
            iir_response,
        })
    }

    /// Summaries with the stopband probed at twice the cutoff (capped below Nyquist)
    pub fn summaries(&self) -> [ResponseSummary; 2] {
        let nyquist = self.sample_rate_hz / 2.0;
        let probe = (2.0 * self.cutoff_hz).min(0.95 * nyquist);
        [
            ResponseSummary::from_response(
                &self.fir,
                &self.fir_response,
                self.cutoff_hz,
                probe,
                self.sample_rate_hz,
            ),
            ResponseSummary::from_response(
                &self.iir,
                &self.iir_response,
                self.cutoff_hz,
                probe,
                self.sample_rate_hz,
            ),
        ]
    }
}
