use crate::error::{FilterError, Result};

/// Convolve `signal` with FIR `taps`, keeping the centered "same" portion
///
/// Output sample `i` is full-convolution index `i + (N - 1) / 2`
/// (integer division), with zeros assumed outside the signal. The output
/// always has the signal's length, including when the filter is longer.
///
/// # Errors
/// Returns `FilterError::InvalidParameter` if either input is empty
pub fn apply_fir(signal: &[f64], taps: &[f64]) -> Result<Vec<f64>> {
    if signal.is_empty() {
        return Err(FilterError::invalid("signal must not be empty"));
    }
    if taps.is_empty() {
        return Err(FilterError::invalid("FIR coefficients must not be empty"));
    }

    let len = signal.len() as isize;
    let offset = ((taps.len() - 1) / 2) as isize;

    let output: Vec<f64> = (0..len)
        .map(|i| {
            let full_idx = i + offset;
            // y[k] = sum_j h[j] * x[k - j] over the j keeping k - j in range
            let j_start = (full_idx - len + 1).max(0) as usize;
            let j_end = (full_idx as usize).min(taps.len() - 1);
            (j_start..=j_end)
                .map(|j| taps[j] * signal[full_idx as usize - j])
                .sum::<f64>()
        })
        .collect();

    Ok(output)
}

/// Run the rational filter `b / a` over `signal` from rest
///
/// Evaluates `a[0] y[n] = sum b[k] x[n-k] - sum_{k>=1} a[k] y[n-k]`
/// left to right using transposed direct form II state, which is exactly
/// equivalent to the difference equation with zero initial conditions.
///
/// # Errors
/// Returns `FilterError::InvalidParameter` if any input is empty or `a[0]`
/// is zero
pub fn apply_iir(signal: &[f64], b: &[f64], a: &[f64]) -> Result<Vec<f64>> {
    if signal.is_empty() {
        return Err(FilterError::invalid("signal must not be empty"));
    }
    if b.is_empty() || a.is_empty() {
        return Err(FilterError::invalid("IIR coefficients must not be empty"));
    }
    let a0 = a[0];
    if a0 == 0.0 {
        return Err(FilterError::invalid("leading denominator coefficient is zero"));
    }

    let n = b.len().max(a.len());
    let coeff = |c: &[f64], k: usize| c.get(k).copied().unwrap_or(0.0) / a0;
    let b_norm: Vec<f64> = (0..n).map(|k| coeff(b, k)).collect();
    let a_norm: Vec<f64> = (0..n).map(|k| coeff(a, k)).collect();

    // state[k] holds the partial sum feeding y[n + k + 1]
    let mut state = vec![0.0f64; n - 1];
    let mut output = Vec::with_capacity(signal.len());

    for &x in signal {
        let y = b_norm[0] * x + state.first().copied().unwrap_or(0.0);
        for k in 1..n {
            let carry = if k < n - 1 { state[k] } else { 0.0 };
            state[k - 1] = b_norm[k] * x - a_norm[k] * y + carry;
        }
        output.push(y);
    }

    Ok(output)
}
