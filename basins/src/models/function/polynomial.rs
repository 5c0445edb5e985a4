use complex_rs::complex::Complex;
use serde::{Deserialize, Serialize};

/// Polynomial given by its coefficients, lowest degree first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Polynomial {
    pub coefficients: Vec<Complex>,
}

impl Polynomial {
    pub fn new(coefficients: Vec<Complex>) -> Self {
        Self { coefficients }
    }

    /// Horner evaluation. An empty coefficient list evaluates to zero.
    pub fn eval(&self, z: Complex) -> Complex {
        let mut acc = Complex::new(0.0, 0.0);
        for coefficient in self.coefficients.iter().rev() {
            acc = acc * z + *coefficient;
        }
        acc
    }
}
