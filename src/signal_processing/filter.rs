/// Rational transfer function `B(z) / A(z)` in ascending powers of `z^-1`
///
/// Implemented by FIR taps (denominator `[1]`) and IIR coefficients so
/// both can be fed to the frequency response evaluator.
pub trait TransferFunction {
    /// Numerator coefficients `b`
    fn numerator(&self) -> &[f64];

    /// Denominator coefficients `a`
    fn denominator(&self) -> &[f64];

    /// Number of delay elements needed to realise the filter
    fn order(&self) -> usize {
        self.numerator().len().max(self.denominator().len()) - 1
    }
}
