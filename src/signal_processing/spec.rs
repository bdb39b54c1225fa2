use crate::error::{FilterError, Result};
use crate::signal_processing::chebyshev::{ChebyshevDesigner, IirCoefficients};
use crate::signal_processing::fir_design::{FirCoefficients, FirDesigner};
use crate::signal_processing::response::{FrequencyResponse, evaluate_filter};
use crate::signal_processing::signal::Signal;
use crate::signal_processing::window::WindowKind;
use crate::signal_processing::{TransferFunction, apply_fir, apply_iir};

/// Cutoff as a fraction of Nyquist, strictly inside (0, 1)
///
/// # Errors
/// Returns `FilterError::InvalidParameter` if the sample rate is not a
/// positive finite number or the cutoff is not strictly between 0 and
/// `sample_rate_hz / 2`
pub fn normalized_cutoff(cutoff_hz: f64, sample_rate_hz: f64) -> Result<f64> {
    if !sample_rate_hz.is_finite() || sample_rate_hz <= 0.0 {
        return Err(FilterError::invalid(format!(
            "sample rate must be positive, got {} Hz",
            sample_rate_hz
        )));
    }
    let nyquist = sample_rate_hz / 2.0;
    let wc = cutoff_hz / nyquist;
    if !(wc > 0.0 && wc < 1.0) {
        return Err(FilterError::invalid(format!(
            "cutoff {} Hz must lie strictly between 0 and Nyquist ({} Hz)",
            cutoff_hz, nyquist
        )));
    }
    Ok(wc)
}

/// Windowed-sinc FIR request
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FirSpec {
    pub num_taps: usize,
    pub cutoff_hz: f64,
    pub sample_rate_hz: f64,
    pub window: WindowKind,
    pub scale_to_unity: bool,
}

impl FirSpec {
    pub fn new(num_taps: usize, cutoff_hz: f64, sample_rate_hz: f64, window: WindowKind) -> Self {
        Self {
            num_taps,
            cutoff_hz,
            sample_rate_hz,
            window,
            scale_to_unity: false,
        }
    }

    pub fn with_unity_dc_gain(mut self) -> Self {
        self.scale_to_unity = true;
        self
    }

    pub fn design(&self) -> Result<FirCoefficients> {
        let designer = FirDesigner {
            window: self.window,
            scale_to_unity: self.scale_to_unity,
        };
        designer.design(self.num_taps, self.cutoff_hz, self.sample_rate_hz)
    }
}

/// Chebyshev Type I IIR request
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IirSpec {
    pub order: usize,
    pub cutoff_hz: f64,
    pub sample_rate_hz: f64,
    pub ripple_db: f64,
}

impl IirSpec {
    pub fn new(order: usize, cutoff_hz: f64, sample_rate_hz: f64, ripple_db: f64) -> Self {
        Self {
            order,
            cutoff_hz,
            sample_rate_hz,
            ripple_db,
        }
    }

    pub fn design(&self) -> Result<IirCoefficients> {
        ChebyshevDesigner::new(self.order, self.ripple_db).design(self.cutoff_hz, self.sample_rate_hz)
    }
}

/// Immutable description of a low-pass filter to design
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FilterSpec {
    Fir(FirSpec),
    Iir(IirSpec),
}

impl FilterSpec {
    pub fn sample_rate_hz(&self) -> f64 {
        match self {
            FilterSpec::Fir(s) => s.sample_rate_hz,
            FilterSpec::Iir(s) => s.sample_rate_hz,
        }
    }

    pub fn cutoff_hz(&self) -> f64 {
        match self {
            FilterSpec::Fir(s) => s.cutoff_hz,
            FilterSpec::Iir(s) => s.cutoff_hz,
        }
    }

    pub fn design(&self) -> Result<DesignedFilter> {
        match self {
            FilterSpec::Fir(s) => s.design().map(DesignedFilter::Fir),
            FilterSpec::Iir(s) => s.design().map(DesignedFilter::Iir),
        }
    }
}

impl From<FirSpec> for FilterSpec {
    fn from(spec: FirSpec) -> Self {
        FilterSpec::Fir(spec)
    }
}

impl From<IirSpec> for FilterSpec {
    fn from(spec: IirSpec) -> Self {
        FilterSpec::Iir(spec)
    }
}

/// Coefficients produced from a `FilterSpec`
#[derive(Debug, Clone, PartialEq)]
pub enum DesignedFilter {
    Fir(FirCoefficients),
    Iir(IirCoefficients),
}

impl DesignedFilter {
    pub fn label(&self) -> &'static str {
        match self {
            DesignedFilter::Fir(_) => "FIR",
            DesignedFilter::Iir(_) => "IIR",
        }
    }

    /// Filter a signal: "same" convolution for FIR, recursion for IIR
    pub fn apply(&self, samples: &[f64]) -> Result<Vec<f64>> {
        match self {
            DesignedFilter::Fir(h) => apply_fir(samples, h.taps()),
            DesignedFilter::Iir(c) => apply_iir(samples, c.b(), c.a()),
        }
    }

    pub fn apply_signal(&self, signal: &Signal) -> Result<Signal> {
        signal.filtered_with(|x| self.apply(x))
    }

    pub fn frequency_response(&self, num_points: usize) -> Result<FrequencyResponse> {
        evaluate_filter(self, num_points)
    }
}

impl TransferFunction for DesignedFilter {
    fn numerator(&self) -> &[f64] {
        match self {
            DesignedFilter::Fir(h) => h.numerator(),
            DesignedFilter::Iir(c) => c.numerator(),
        }
    }

    fn denominator(&self) -> &[f64] {
        match self {
            DesignedFilter::Fir(h) => h.denominator(),
            DesignedFilter::Iir(c) => c.denominator(),
        }
    }
}
