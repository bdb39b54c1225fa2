use crate::error::{FilterError, Result};
use crate::signal_processing::polynomial::{poly_from_roots, real_coefficients, roots};
use crate::signal_processing::spec::normalized_cutoff;
use crate::signal_processing::TransferFunction;
use num_complex::Complex64;
use std::f64::consts::PI;

/// Analog filter in zero/pole/gain form, `H(s) = k * prod(s - z) / prod(s - p)`
#[derive(Debug, Clone, PartialEq)]
pub struct AnalogZpk {
    pub zeros: Vec<Complex64>,
    pub poles: Vec<Complex64>,
    pub gain: f64,
}

/// Digital filter in zero/pole/gain form over `z`
#[derive(Debug, Clone, PartialEq)]
pub struct DigitalZpk {
    pub zeros: Vec<Complex64>,
    pub poles: Vec<Complex64>,
    pub gain: f64,
}

/// Chebyshev Type I analog low-pass prototype with a 1 rad/s passband edge
///
/// Poles lie on an ellipse in the left half plane:
/// `p_m = -sinh(mu + j*theta_m)`, `theta_m = π m / (2N)` for
/// `m = -N+1, -N+3, ..., N-1`, with `mu = asinh(1/epsilon) / N`.
/// The gain puts the passband peak at unity; even orders start the
/// passband at the bottom of the ripple, `1/sqrt(1 + epsilon^2)`.
///
/// # Errors
/// Returns `FilterError::InvalidParameter` if `order` is zero or
/// `ripple_db` is not a positive finite number
pub fn chebyshev1_prototype(order: usize, ripple_db: f64) -> Result<AnalogZpk> {
    if order < 1 {
        return Err(FilterError::invalid("IIR order must be at least 1"));
    }
    if !ripple_db.is_finite() || ripple_db < 0.0 {
        return Err(FilterError::invalid(format!(
            "passband ripple must be positive, got {} dB",
            ripple_db
        )));
    }
    if ripple_db == 0.0 {
        return Err(FilterError::invalid(
            "passband ripple of 0 dB leaves the Chebyshev prototype undefined",
        ));
    }

    let n = order as f64;
    let epsilon = (10f64.powf(ripple_db / 10.0) - 1.0).sqrt();
    let mu = (1.0 / epsilon).asinh() / n;

    let poles: Vec<Complex64> = (0..order)
        .map(|i| {
            let m = -(order as f64) + 1.0 + 2.0 * i as f64;
            let theta = PI * m / (2.0 * n);
            -Complex64::new(mu, theta).sinh()
        })
        .collect();

    let mut gain = poles.iter().map(|&p| -p).product::<Complex64>().re;
    if order.is_multiple_of(2) {
        gain /= (1.0 + epsilon * epsilon).sqrt();
    }

    Ok(AnalogZpk {
        zeros: Vec::new(),
        poles,
        gain,
    })
}

impl AnalogZpk {
    /// Move the passband edge from 1 rad/s to `omega` rad/s (`s -> s / omega`)
    pub fn scale_frequency(&self, omega: f64) -> AnalogZpk {
        let degree = self.poles.len() as i32 - self.zeros.len() as i32;
        AnalogZpk {
            zeros: self.zeros.iter().map(|&z| z * omega).collect(),
            poles: self.poles.iter().map(|&p| p * omega).collect(),
            gain: self.gain * omega.powi(degree),
        }
    }

    /// Map to the z-plane with `s = 2*fs * (z - 1) / (z + 1)`
    ///
    /// Each left-half-plane pole lands inside the unit circle. Zeros at
    /// infinity are placed at `z = -1` (Nyquist).
    pub fn bilinear(&self, sample_rate_hz: f64) -> DigitalZpk {
        let fs2 = Complex64::new(2.0 * sample_rate_hz, 0.0);
        let degree = self.poles.len().saturating_sub(self.zeros.len());

        let mut zeros: Vec<Complex64> = self.zeros.iter().map(|&z| (fs2 + z) / (fs2 - z)).collect();
        zeros.extend(std::iter::repeat_n(Complex64::new(-1.0, 0.0), degree));
        let poles = self.poles.iter().map(|&p| (fs2 + p) / (fs2 - p)).collect();

        let num: Complex64 = self.zeros.iter().map(|&z| fs2 - z).product();
        let den: Complex64 = self.poles.iter().map(|&p| fs2 - p).product();
        let gain = self.gain * (num / den).re;

        DigitalZpk { zeros, poles, gain }
    }
}

impl DigitalZpk {
    /// Expand into transfer function polynomials with `a[0] = 1`
    pub fn to_coefficients(&self) -> IirCoefficients {
        let b = real_coefficients(&poly_from_roots(&self.zeros))
            .into_iter()
            .map(|c| c * self.gain)
            .collect();
        let a = real_coefficients(&poly_from_roots(&self.poles));
        IirCoefficients {
            b,
            a,
            poles: Some(self.poles.clone()),
        }
    }

    /// Largest pole modulus; below 1.0 for a stable filter
    pub fn max_pole_radius(&self) -> f64 {
        self.poles.iter().map(|p| p.norm()).fold(0.0, f64::max)
    }
}

/// Numerator and denominator of a rational transfer function in `z^-1`
///
/// Coefficients expanded from a zero/pole/gain design keep its poles.
#[derive(Debug, Clone, PartialEq)]
pub struct IirCoefficients {
    b: Vec<f64>,
    a: Vec<f64>,
    poles: Option<Vec<Complex64>>,
}

impl IirCoefficients {
    /// Wrap arbitrary coefficients, normalizing so that `a[0] == 1`
    ///
    /// # Errors
    /// Returns `FilterError::InvalidParameter` if either sequence is empty
    /// or `a[0]` is zero
    pub fn new(b: Vec<f64>, a: Vec<f64>) -> Result<Self> {
        if b.is_empty() || a.is_empty() {
            return Err(FilterError::invalid("IIR coefficients must not be empty"));
        }
        let a0 = a[0];
        if a0 == 0.0 {
            return Err(FilterError::invalid("leading denominator coefficient is zero"));
        }
        Ok(Self {
            b: b.into_iter().map(|c| c / a0).collect(),
            a: a.into_iter().map(|c| c / a0).collect(),
            poles: None,
        })
    }

    pub fn b(&self) -> &[f64] {
        &self.b
    }

    pub fn a(&self) -> &[f64] {
        &self.a
    }

    pub fn order(&self) -> usize {
        self.a.len().max(self.b.len()) - 1
    }

    /// Gain at DC, `sum(b) / sum(a)`
    pub fn dc_gain(&self) -> f64 {
        self.b.iter().sum::<f64>() / self.a.iter().sum::<f64>()
    }

    /// Roots of the denominator in the z-plane
    ///
    /// Designed filters return their exact poles. Coefficients built with
    /// `new` fall back to the root finder, which loses accuracy when
    /// poles cluster tightly.
    pub fn poles(&self) -> Result<Vec<Complex64>> {
        match &self.poles {
            Some(poles) => Ok(poles.clone()),
            None => roots(&self.a),
        }
    }

    /// True when every pole lies strictly inside the unit circle
    pub fn is_stable(&self) -> bool {
        self.poles()
            .map(|p| p.iter().all(|z| z.norm() < 1.0))
            .unwrap_or(false)
    }

    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>) {
        (self.b, self.a)
    }
}

impl TransferFunction for IirCoefficients {
    fn numerator(&self) -> &[f64] {
        &self.b
    }

    fn denominator(&self) -> &[f64] {
        &self.a
    }
}

/// Chebyshev Type I low-pass designer
///
/// Prototype, pre-warp, frequency scaling and bilinear transform in turn;
/// `zpk` exposes the intermediate digital zero/pole/gain form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChebyshevDesigner {
    pub order: usize,
    pub ripple_db: f64,
}

impl ChebyshevDesigner {
    pub fn new(order: usize, ripple_db: f64) -> Self {
        Self { order, ripple_db }
    }

    /// Digital zero/pole/gain of the low-pass filter
    ///
    /// # Errors
    /// Returns `FilterError::InvalidParameter` on a zero order, negative
    /// or zero ripple, or a cutoff outside (0, Nyquist)
    pub fn zpk(&self, cutoff_hz: f64, sample_rate_hz: f64) -> Result<DigitalZpk> {
        let wc = normalized_cutoff(cutoff_hz, sample_rate_hz)?;
        let prototype = chebyshev1_prototype(self.order, self.ripple_db)?;

        // Pre-warp so the bilinear transform lands the edge exactly on wc
        let warped = 2.0 * sample_rate_hz * (PI * wc / 2.0).tan();
        let digital = prototype.scale_frequency(warped).bilinear(sample_rate_hz);

        log::debug!(
            "Chebyshev I design: order {}, ripple {} dB, wc={:.4}, max pole radius {:.6}",
            self.order,
            self.ripple_db,
            wc,
            digital.max_pole_radius()
        );
        Ok(digital)
    }

    pub fn design(&self, cutoff_hz: f64, sample_rate_hz: f64) -> Result<IirCoefficients> {
        Ok(self.zpk(cutoff_hz, sample_rate_hz)?.to_coefficients())
    }
}

/// Design a Chebyshev Type I low-pass filter
///
/// Shorthand for `ChebyshevDesigner::new(order, ripple_db).design(..)`.
pub fn design_chebyshev_lowpass(
    order: usize,
    cutoff_hz: f64,
    sample_rate_hz: f64,
    ripple_db: f64,
) -> Result<IirCoefficients> {
    ChebyshevDesigner::new(order, ripple_db).design(cutoff_hz, sample_rate_hz)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prototype_poles_left_half_plane() {
        for order in 1..=8 {
            let proto = chebyshev1_prototype(order, 1.0).unwrap();
            assert_eq!(proto.poles.len(), order);
            assert!(proto.zeros.is_empty());
            assert!(proto.poles.iter().all(|p| p.re < 0.0));
        }
    }

    #[test]
    fn test_prototype_first_order() {
        // Single real pole at -sinh(asinh(1/eps))= -1/eps, unity DC gain
        let proto = chebyshev1_prototype(1, 1.0).unwrap();
        let epsilon = (10f64.powf(0.1) - 1.0).sqrt();
        assert!((proto.poles[0].re + 1.0 / epsilon).abs() < 1e-12);
        assert!(proto.poles[0].im.abs() < 1e-12);
        assert!((proto.gain - 1.0 / epsilon).abs() < 1e-12);
    }

    #[test]
    fn test_design_lengths_and_normalization() {
        let iir = design_chebyshev_lowpass(4, 150.0, 1000.0, 1.0).unwrap();
        assert_eq!(iir.a().len(), 5);
        assert_eq!(iir.b().len(), 5);
        assert_eq!(iir.a()[0], 1.0);
        assert_eq!(iir.order(), 4);
    }

    #[test]
    fn test_numerator_is_binomial() {
        // All zeros at z = -1 give b proportional to (1, 4, 6, 4, 1)
        let iir = design_chebyshev_lowpass(4, 150.0, 1000.0, 1.0).unwrap();
        let b = iir.b();
        let k = b[0];
        for (got, binom) in b.iter().zip([1.0, 4.0, 6.0, 4.0, 1.0]) {
            assert!((got - k * binom).abs() < 1e-12);
        }
    }

    #[test]
    fn test_dc_gain_follows_order_parity() {
        let ripple_db: f64 = 1.0;
        let valley = 10f64.powf(-ripple_db / 20.0);

        let even = design_chebyshev_lowpass(4, 150.0, 1000.0, ripple_db).unwrap();
        assert!((even.dc_gain() - valley).abs() < 1e-9, "even DC {}", even.dc_gain());

        let odd = design_chebyshev_lowpass(5, 150.0, 1000.0, ripple_db).unwrap();
        assert!((odd.dc_gain() - 1.0).abs() < 1e-9, "odd DC {}", odd.dc_gain());
    }

    #[test]
    fn test_digital_poles_inside_unit_circle() {
        for order in 1..=8 {
            for cutoff in [10.0, 150.0, 400.0, 490.0] {
                let zpk = ChebyshevDesigner::new(order, 0.5)
                    .zpk(cutoff, 1000.0)
                    .unwrap();
                assert!(
                    zpk.max_pole_radius() < 1.0,
                    "order {} cutoff {} unstable",
                    order,
                    cutoff
                );
            }
        }
    }

    #[test]
    fn test_root_finder_agrees_with_construction() {
        let designer = ChebyshevDesigner::new(4, 1.0);
        let zpk = designer.zpk(150.0, 1000.0).unwrap();
        let (b, a) = zpk.to_coefficients().into_parts();
        let found = IirCoefficients::new(b, a).unwrap().poles().unwrap();
        for p in &zpk.poles {
            let nearest = found
                .iter()
                .map(|f| (f - p).norm())
                .fold(f64::INFINITY, f64::min);
            assert!(nearest < 1e-8);
        }
        assert!(zpk.to_coefficients().is_stable());
    }

    #[test]
    fn test_designed_poles_kept_for_clustered_designs() {
        // Narrow cutoffs cluster the poles near z = 1
        for (order, cutoff) in [(6, 1.0), (12, 20.0), (15, 1.0)] {
            let designer = ChebyshevDesigner::new(order, 1.0);
            let zpk = designer.zpk(cutoff, 1000.0).unwrap();
            let coeffs = designer.design(cutoff, 1000.0).unwrap();
            assert_eq!(coeffs.poles().unwrap(), zpk.poles);
            assert!(coeffs.is_stable(), "order {} cutoff {}", order, cutoff);
        }
    }

    #[test]
    fn test_user_coefficients_use_root_finder() {
        // a = (1 - 0.5 z^-1)(1 + 0.25 z^-1)
        let coeffs = IirCoefficients::new(vec![1.0], vec![1.0, -0.25, -0.125]).unwrap();
        let mut radii: Vec<f64> = coeffs.poles().unwrap().iter().map(|p| p.norm()).collect();
        radii.sort_by(f64::total_cmp);
        assert!((radii[0] - 0.25).abs() < 1e-10);
        assert!((radii[1] - 0.5).abs() < 1e-10);
        assert!(coeffs.is_stable());

        let unstable = IirCoefficients::new(vec![1.0], vec![1.0, -1.5]).unwrap();
        assert!(!unstable.is_stable());
    }

    #[test]
    fn test_ripple_must_be_positive() {
        for ripple in [-1.0, 0.0, f64::NAN] {
            match chebyshev1_prototype(4, ripple) {
                Err(FilterError::InvalidParameter(msg)) => assert!(msg.contains("ripple")),
                other => panic!("ripple {} accepted: {:?}", ripple, other),
            }
        }
        let Err(FilterError::InvalidParameter(msg)) = chebyshev1_prototype(4, -1.0) else {
            panic!("negative ripple accepted");
        };
        assert!(msg.contains("must be positive"));
    }

    #[test]
    fn test_invalid_parameters() {
        assert!(design_chebyshev_lowpass(0, 150.0, 1000.0, 1.0).is_err());
        assert!(design_chebyshev_lowpass(4, 150.0, 1000.0, -1.0).is_err());
        assert!(design_chebyshev_lowpass(4, 150.0, 1000.0, 0.0).is_err());
        assert!(design_chebyshev_lowpass(4, 0.0, 1000.0, 1.0).is_err());
        assert!(design_chebyshev_lowpass(4, 500.0, 1000.0, 1.0).is_err());
        assert!(design_chebyshev_lowpass(4, 150.0, -1000.0, 1.0).is_err());
    }

    #[test]
    fn test_coefficient_normalization() {
        let iir = IirCoefficients::new(vec![2.0, 1.0], vec![2.0, -1.0]).unwrap();
        assert_eq!(iir.b(), &[1.0, 0.5]);
        assert_eq!(iir.a(), &[1.0, -0.5]);
        assert!(IirCoefficients::new(vec![1.0], vec![0.0, 1.0]).is_err());
        assert!(IirCoefficients::new(vec![], vec![1.0]).is_err());
    }
}
