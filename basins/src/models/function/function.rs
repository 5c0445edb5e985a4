use complex_rs::complex::Complex;

/// The function whose roots are being mapped.
///
/// The engine never inspects the function's structure; it only evaluates it.
/// Any `Fn(Complex) -> Complex` closure qualifies.
pub trait TargetFunction {
    fn eval(&self, z: Complex) -> Complex;
}

impl<F> TargetFunction for F
where
    F: Fn(Complex) -> Complex,
{
    fn eval(&self, z: Complex) -> Complex {
        self(z)
    }
}
