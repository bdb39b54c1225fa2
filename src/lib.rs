pub mod config;
pub mod constants;
pub mod error;
pub mod output;
pub mod signal_processing;
pub mod wav;

#[cfg(feature = "simulation")]
pub mod simulation;

pub use config::DesignConfig;
pub use error::{FilterError, Result};
pub use signal_processing::{
    DesignedFilter, FilterSpec, FirSpec, FrequencyResponse, IirSpec, Signal, WindowKind,
    apply_fir, apply_iir, design_chebyshev_lowpass, design_lowpass_fir, evaluate,
};
pub use wav::{load_wav, save_wav};
