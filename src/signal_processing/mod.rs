pub mod apply;
pub mod chebyshev;
pub mod compare;
pub mod filter;
pub mod fir_design;
pub mod polynomial;
pub mod response;
pub mod signal;
pub mod spec;
pub mod window;

pub use apply::{apply_fir, apply_iir};
pub use chebyshev::{
    AnalogZpk, ChebyshevDesigner, DigitalZpk, IirCoefficients, chebyshev1_prototype,
    design_chebyshev_lowpass,
};
pub use compare::{ResponseComparison, ResponseSummary};
pub use filter::TransferFunction;
pub use fir_design::{FirCoefficients, FirDesigner, design_lowpass_fir};
pub use response::{FrequencyResponse, ResponsePoint, evaluate, evaluate_filter};
pub use signal::Signal;
pub use spec::{DesignedFilter, FilterSpec, FirSpec, IirSpec, normalized_cutoff};
pub use window::{WindowKind, generate_window};
