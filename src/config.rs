//! Configuration for filter design and comparison runs.
//!
//! Defaults reproduce the comparison scenario: 1 kHz sampling, 150 Hz
//! cutoff, a 51-tap Hann FIR against a 4th-order 1 dB Chebyshev IIR.
//!
//! ## TOML layout
//!
//! ```toml
//! sample_rate = 1000.0
//!
//! [fir]
//! num_taps = 51
//! cutoff = "150hz"
//! window = "hann"
//!
//! [iir]
//! order = 4
//! cutoff = 150.0
//! ripple_db = 1.0
//!
//! [response]
//! num_points = 8000
//! ```
//!
//! Every field is optional; missing fields keep their defaults.

use crate::error::{FilterError, Result};
use crate::signal_processing::{FilterSpec, FirSpec, IirSpec, WindowKind};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Frequency in Hz
///
/// # Parsing formats
/// - `150` or `150.0` - Hz (no suffix)
/// - `150hz` or `150Hz` - Hz (explicit)
/// - `1.5khz` or `1.5kHz` - kilohertz
///
/// # Example
/// ```
/// use lowpass_lab::config::Frequency;
///
/// let f: Frequency = "1.5khz".parse().unwrap();
/// assert!((f.as_hz() - 1500.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frequency(f64);

impl Frequency {
    pub fn from_hz(hz: f64) -> Self {
        Self(hz)
    }

    pub fn as_hz(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}hz", self.0)
    }
}

impl FromStr for Frequency {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let s = s.trim();
        let lower = s.to_ascii_lowercase();

        let (num, scale) = if let Some(num) = lower.strip_suffix("khz") {
            (num, 1000.0)
        } else if let Some(num) = lower.strip_suffix("hz") {
            (num, 1.0)
        } else {
            (lower.as_str(), 1.0)
        };

        let value: f64 = num
            .trim()
            .parse()
            .map_err(|_| format!("invalid frequency: {}", s))?;
        if !value.is_finite() || value <= 0.0 {
            return Err("frequency must be positive".to_string());
        }
        Ok(Self(value * scale))
    }
}

impl<'de> serde::Deserialize<'de> for Frequency {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(f64),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Number(hz) => Ok(Frequency(hz)),
            Raw::Text(s) => s.parse().map_err(serde::de::Error::custom),
        }
    }
}

/// Top-level design configuration
///
/// # Example
/// ```
/// use lowpass_lab::config::DesignConfig;
///
/// let mut config = DesignConfig::default();
/// config.fir.num_taps = 31;
/// assert!(config.fir_spec().design().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
#[serde(default)]
pub struct DesignConfig {
    /// Sample rate in Hz shared by both designs
    pub sample_rate: f64,
    pub fir: FirConfig,
    pub iir: IirConfig,
    pub response: ResponseConfig,
}

/// Windowed-sinc FIR parameters
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
#[serde(default)]
pub struct FirConfig {
    /// Number of taps (odd for a Type I linear-phase filter)
    pub num_taps: usize,
    pub cutoff: Frequency,
    pub window: WindowKind,
    /// Divide taps by their sum so the DC gain is exactly 1
    pub scale_to_unity: bool,
}

/// Chebyshev Type I IIR parameters
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
#[serde(default)]
pub struct IirConfig {
    pub order: usize,
    pub cutoff: Frequency,
    /// Passband ripple in dB
    pub ripple_db: f64,
}

/// Frequency response sampling
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
#[serde(default)]
pub struct ResponseConfig {
    /// Number of points across [0, Nyquist)
    pub num_points: usize,
}

impl Default for DesignConfig {
    fn default() -> Self {
        Self {
            sample_rate: 1000.0,
            fir: FirConfig::default(),
            iir: IirConfig::default(),
            response: ResponseConfig::default(),
        }
    }
}

impl Default for FirConfig {
    fn default() -> Self {
        Self {
            num_taps: 51,
            cutoff: Frequency::from_hz(150.0),
            window: WindowKind::Hann,
            scale_to_unity: false,
        }
    }
}

impl Default for IirConfig {
    fn default() -> Self {
        Self {
            order: 4,
            cutoff: Frequency::from_hz(150.0),
            ripple_db: 1.0,
        }
    }
}

impl Default for ResponseConfig {
    fn default() -> Self {
        Self { num_points: 8000 }
    }
}

impl DesignConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| FilterError::Config(e.to_string()))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| FilterError::Config(format!("{}: {}", path.display(), e)))?;
        let config = Self::from_toml_str(&content)?;
        log::info!("Loaded design configuration from {}", path.display());
        Ok(config)
    }

    /// Set both cutoffs at once
    pub fn with_cutoff(mut self, cutoff: Frequency) -> Self {
        self.fir.cutoff = cutoff;
        self.iir.cutoff = cutoff;
        self
    }

    pub fn fir_spec(&self) -> FirSpec {
        let spec = FirSpec::new(
            self.fir.num_taps,
            self.fir.cutoff.as_hz(),
            self.sample_rate,
            self.fir.window,
        );
        if self.fir.scale_to_unity {
            spec.with_unity_dc_gain()
        } else {
            spec
        }
    }

    pub fn iir_spec(&self) -> IirSpec {
        IirSpec::new(
            self.iir.order,
            self.iir.cutoff.as_hz(),
            self.sample_rate,
            self.iir.ripple_db,
        )
    }

    pub fn filter_specs(&self) -> [FilterSpec; 2] {
        [self.fir_spec().into(), self.iir_spec().into()]
    }
}
