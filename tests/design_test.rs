use approx::assert_abs_diff_eq;
use lowpass_lab::signal_processing::{
    ChebyshevDesigner, FirDesigner, TransferFunction, WindowKind, design_chebyshev_lowpass,
    design_lowpass_fir, evaluate, evaluate_filter,
};

#[test]
fn test_fir_length_and_symmetry_for_all_windows() {
    for window in WindowKind::ALL {
        for num_taps in [1, 2, 3, 16, 31, 50, 51, 101] {
            for cutoff in [10.0, 50.0, 150.0, 240.0] {
                let h = design_lowpass_fir(num_taps, cutoff, 500.0, window)
                    .unwrap()
                    .into_taps();
                assert_eq!(h.len(), num_taps);
                for n in 0..num_taps {
                    assert!(
                        (h[n] - h[num_taps - 1 - n]).abs() < 1e-12,
                        "{} window, {} taps: h[{}] != h[{}]",
                        window,
                        num_taps,
                        n,
                        num_taps - 1 - n
                    );
                }
            }
        }
    }
}

#[test]
fn test_fir_hamming_scenario() {
    // 31 taps, 50 Hz cutoff at 500 Hz
    let h = design_lowpass_fir(31, 50.0, 500.0, WindowKind::Hamming).unwrap();
    let response = evaluate(h.taps(), &[1.0], 8000).unwrap();
    let points = response.points();
    assert_eq!(points.len(), 8000);

    assert_abs_diff_eq!(points[0].magnitude(), 1.0, epsilon = 1e-2);
    assert_abs_diff_eq!(points[10].magnitude(), 1.0, epsilon = 1e-2);

    // k = 1600 is exactly 0.2 * Nyquist = 50 Hz
    assert_abs_diff_eq!(points[1600].frequency_hz(500.0), 50.0, epsilon = 1e-9);
    assert_abs_diff_eq!(points[1600].magnitude(), 0.5, epsilon = 1e-2);

    assert!(points[7999].magnitude() < 1e-2);
}

#[test]
fn test_fir_dc_gain_near_but_not_exactly_one() {
    for window in WindowKind::ALL {
        let h = FirDesigner::new(window).design(51, 150.0, 1000.0).unwrap();
        assert!((h.dc_gain() - 1.0).abs() < 0.05, "{}: {}", window, h.dc_gain());
    }
    let h = FirDesigner::new(WindowKind::Hamming).design(31, 50.0, 500.0).unwrap();
    assert!(h.dc_gain() != 1.0);

    let scaled = FirDesigner::new(WindowKind::Hamming)
        .with_unity_dc_gain()
        .design(31, 50.0, 500.0)
        .unwrap();
    assert_abs_diff_eq!(scaled.dc_gain(), 1.0, epsilon = 1e-12);
}

#[test]
fn test_designs_are_deterministic() {
    let a = design_lowpass_fir(51, 150.0, 1000.0, WindowKind::Blackman).unwrap();
    let b = design_lowpass_fir(51, 150.0, 1000.0, WindowKind::Blackman).unwrap();
    assert_eq!(a, b);

    let c = design_chebyshev_lowpass(5, 120.0, 1000.0, 0.5).unwrap();
    let d = design_chebyshev_lowpass(5, 120.0, 1000.0, 0.5).unwrap();
    assert_eq!(c, d);
}

#[test]
fn test_chebyshev_scenario_coefficients() {
    let (b, a) = design_chebyshev_lowpass(4, 150.0, 1000.0, 1.0)
        .unwrap()
        .into_parts();
    assert_eq!(b.len(), 5);
    assert_eq!(a.len(), 5);
    assert_eq!(a[0], 1.0);

    let expected_b = [0.008363, 0.033453, 0.050179, 0.033453, 0.008363];
    let expected_a = [1.0, -2.37412, 2.70566, -1.59171, 0.41032];
    for (got, want) in b.iter().zip(expected_b) {
        assert_abs_diff_eq!(*got, want, epsilon = 1e-5);
    }
    for (got, want) in a.iter().zip(expected_a) {
        assert_abs_diff_eq!(*got, want, epsilon = 1e-4);
    }
}

#[test]
fn test_chebyshev_lengths_follow_order() {
    for order in 1..=10 {
        let (b, a) = design_chebyshev_lowpass(order, 100.0, 1000.0, 0.5)
            .unwrap()
            .into_parts();
        assert_eq!(b.len(), order + 1);
        assert_eq!(a.len(), order + 1);
        assert_eq!(a[0], 1.0);
    }
}

#[test]
fn test_chebyshev_poles_inside_unit_circle() {
    for order in 1..=12 {
        for ripple in [0.1, 0.5, 1.0, 3.0, 6.0] {
            for cutoff in [1.0, 5.0, 20.0, 150.0, 400.0, 495.0, 499.0] {
                let designer = ChebyshevDesigner::new(order, ripple);
                let coeffs = designer.design(cutoff, 1000.0).unwrap();
                let radius = designer.zpk(cutoff, 1000.0).unwrap().max_pole_radius();
                let reported = coeffs
                    .poles()
                    .unwrap()
                    .iter()
                    .map(|p| p.norm())
                    .fold(0.0, f64::max);
                assert_eq!(reported, radius);
                assert!(
                    coeffs.is_stable(),
                    "order {} ripple {} cutoff {} is unstable",
                    order,
                    ripple,
                    cutoff
                );
            }
        }
    }
}

#[test]
fn test_chebyshev_passband_ripple_and_stopband() {
    let coeffs = ChebyshevDesigner::new(4, 1.0).design(150.0, 1000.0).unwrap();
    let response = evaluate_filter(&coeffs, 4000).unwrap();
    let floor = 10f64.powf(-1.0 / 20.0);

    for point in response.points() {
        let f = point.frequency_hz(1000.0);
        let m = point.magnitude();
        if f <= 150.0 {
            assert!(m <= 1.0 + 1e-6 && m >= floor - 1e-6, "{} Hz: {}", f, m);
        }
    }

    // Monotonically falling above the cutoff
    let stopband: Vec<f64> = response
        .points()
        .iter()
        .filter(|p| p.frequency_hz(1000.0) > 150.0)
        .map(|p| p.magnitude())
        .collect();
    for pair in stopband.windows(2) {
        assert!(pair[1] <= pair[0] + 1e-12);
    }

    assert_abs_diff_eq!(response.gain_at(150.0, 1000.0).unwrap(), floor, epsilon = 1e-3);
    assert!(response.gain_at(300.0, 1000.0).unwrap() < 0.01);
}

#[test]
fn test_dc_gain_exceeds_nyquist_gain() {
    let filters: Vec<(Vec<f64>, Vec<f64>)> = vec![
        (
            design_lowpass_fir(31, 50.0, 500.0, WindowKind::Hamming)
                .unwrap()
                .into_taps(),
            vec![1.0],
        ),
        (
            design_lowpass_fir(15, 200.0, 1000.0, WindowKind::Rectangular)
                .unwrap()
                .into_taps(),
            vec![1.0],
        ),
        design_chebyshev_lowpass(2, 100.0, 1000.0, 3.0)
            .unwrap()
            .into_parts(),
        design_chebyshev_lowpass(7, 300.0, 1000.0, 0.2)
            .unwrap()
            .into_parts(),
    ];
    for (b, a) in filters {
        let response = evaluate(&b, &a, 512).unwrap();
        let first = response.points()[0].magnitude();
        let last = response.points()[511].magnitude();
        assert!(first > last, "DC {} <= Nyquist {}", first, last);
    }
}

#[test]
fn test_invalid_parameters_rejected() {
    assert!(design_lowpass_fir(0, 50.0, 500.0, WindowKind::Hann).is_err());
    assert!(design_lowpass_fir(31, 0.0, 500.0, WindowKind::Hann).is_err());
    assert!(design_lowpass_fir(31, 250.0, 500.0, WindowKind::Hann).is_err());
    assert!(design_lowpass_fir(31, 50.0, 0.0, WindowKind::Hann).is_err());

    assert!(design_chebyshev_lowpass(0, 150.0, 1000.0, 1.0).is_err());
    assert!(design_chebyshev_lowpass(4, 500.0, 1000.0, 1.0).is_err());
    assert!(design_chebyshev_lowpass(4, 150.0, 1000.0, -1.0).is_err());
    assert!(design_chebyshev_lowpass(4, 150.0, 1000.0, 0.0).is_err());
}

#[test]
fn test_transfer_function_views() {
    let fir = FirDesigner::default().design(31, 50.0, 500.0).unwrap();
    assert_eq!(fir.denominator(), &[1.0]);
    assert_eq!(TransferFunction::order(&fir), 30);

    let iir = ChebyshevDesigner::new(6, 0.5).design(100.0, 1000.0).unwrap();
    assert_eq!(iir.numerator().len(), 7);
    assert_eq!(iir.order(), 6);
}
