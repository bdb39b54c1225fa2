use crate::error::{FilterError, Result};
use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

/// Window applied to the truncated sinc in FIR design
///
/// All windows are the symmetric form, evaluated over n = 0..=M-1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowKind {
    /// w[n] = 1
    Rectangular,
    /// w[n] = 0.5 - 0.5 cos(2πn/(M-1))
    Hann,
    /// w[n] = 0.54 - 0.46 cos(2πn/(M-1))
    #[default]
    Hamming,
    /// w[n] = 0.42 - 0.5 cos(2πn/(M-1)) + 0.08 cos(4πn/(M-1))
    Blackman,
    /// w[n] = 1 - |2n/(M-1) - 1|
    Bartlett,
}

impl WindowKind {
    pub const ALL: [WindowKind; 5] = [
        WindowKind::Rectangular,
        WindowKind::Hann,
        WindowKind::Hamming,
        WindowKind::Blackman,
        WindowKind::Bartlett,
    ];

    /// Weight at index `n` of a window of `length` samples (`length >= 2`)
    fn weight(&self, n: usize, length: usize) -> f64 {
        let span = (length - 1) as f64;
        let x = n as f64 / span;
        match self {
            WindowKind::Rectangular => 1.0,
            WindowKind::Hann => 0.5 - 0.5 * (2.0 * PI * x).cos(),
            WindowKind::Hamming => 0.54 - 0.46 * (2.0 * PI * x).cos(),
            WindowKind::Blackman => {
                0.42 - 0.5 * (2.0 * PI * x).cos() + 0.08 * (4.0 * PI * x).cos()
            }
            WindowKind::Bartlett => 1.0 - (2.0 * x - 1.0).abs(),
        }
    }
}

impl fmt::Display for WindowKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WindowKind::Rectangular => "rectangular",
            WindowKind::Hann => "hann",
            WindowKind::Hamming => "hamming",
            WindowKind::Blackman => "blackman",
            WindowKind::Bartlett => "bartlett",
        };
        f.write_str(name)
    }
}

impl FromStr for WindowKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rectangular" | "boxcar" | "none" => Ok(WindowKind::Rectangular),
            "hann" | "hanning" => Ok(WindowKind::Hann),
            "hamming" => Ok(WindowKind::Hamming),
            "blackman" => Ok(WindowKind::Blackman),
            "bartlett" | "triangular" => Ok(WindowKind::Bartlett),
            other => Err(format!("unknown window: {}", other)),
        }
    }
}

/// Generate `length` window weights, each in [0, 1]
///
/// A single-sample window is `[1.0]` for every kind.
///
/// # Errors
/// Returns `FilterError::InvalidParameter` if `length` is zero
pub fn generate_window(kind: WindowKind, length: usize) -> Result<Vec<f64>> {
    if length < 1 {
        return Err(FilterError::invalid("window length must be at least 1"));
    }
    if length == 1 {
        return Ok(vec![1.0]);
    }

    // Blackman endpoints come out at about -1e-17; clamp keeps weights in range
    Ok((0..length)
        .map(|n| kind.weight(n, length).clamp(0.0, 1.0))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_lengths_and_range() {
        for kind in WindowKind::ALL {
            for length in [1, 2, 7, 31, 64] {
                let w = generate_window(kind, length).unwrap();
                assert_eq!(w.len(), length);
                assert!(
                    w.iter().all(|&x| (0.0..=1.0).contains(&x)),
                    "{} window out of range",
                    kind
                );
            }
        }
    }

    #[test]
    fn test_window_symmetry() {
        for kind in WindowKind::ALL {
            let w = generate_window(kind, 31).unwrap();
            for i in 0..w.len() / 2 {
                assert!((w[i] - w[w.len() - 1 - i]).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn test_window_center_and_endpoints() {
        let length = 31;
        let center = length / 2;

        let hann = generate_window(WindowKind::Hann, length).unwrap();
        let hamming = generate_window(WindowKind::Hamming, length).unwrap();
        let blackman = generate_window(WindowKind::Blackman, length).unwrap();
        let bartlett = generate_window(WindowKind::Bartlett, length).unwrap();

        for w in [&hann, &hamming, &blackman, &bartlett] {
            assert!((w[center] - 1.0).abs() < 1e-12);
        }

        assert!(hann[0].abs() < 1e-12);
        assert!((hamming[0] - 0.08).abs() < 1e-12);
        assert!(blackman[0].abs() < 1e-12);
        assert!(bartlett[0].abs() < 1e-12);
        assert!((bartlett[7] - 14.0 / 30.0).abs() < 1e-12);
    }

    #[test]
    fn test_rectangular_window() {
        let w = generate_window(WindowKind::Rectangular, 100).unwrap();
        assert!(w.iter().all(|&x| x == 1.0));
    }

    #[test]
    fn test_zero_length_rejected() {
        assert!(matches!(
            generate_window(WindowKind::Hann, 0),
            Err(FilterError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_window_kind_parse() {
        assert_eq!("Hamming".parse::<WindowKind>().unwrap(), WindowKind::Hamming);
        assert_eq!("hanning".parse::<WindowKind>().unwrap(), WindowKind::Hann);
        assert_eq!("boxcar".parse::<WindowKind>().unwrap(), WindowKind::Rectangular);
        assert!("kaiser".parse::<WindowKind>().is_err());
        assert_eq!(WindowKind::Blackman.to_string(), "blackman");
    }
}
