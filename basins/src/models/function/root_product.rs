use complex_rs::complex::Complex;
use serde::{Deserialize, Serialize};

/// Product of linear factors `(z - r_i)`, one per listed root.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RootProduct {
    pub roots: Vec<Complex>,
}

impl RootProduct {
    pub fn new(roots: Vec<Complex>) -> Self {
        Self { roots }
    }

    pub fn eval(&self, z: Complex) -> Complex {
        let mut acc = Complex::new(1.0, 0.0);
        for root in &self.roots {
            acc = acc * (z - *root);
        }
        acc
    }
}
