use complex_rs::complex::Complex;
use serde::{Deserialize, Serialize};

use super::function::TargetFunction;
use super::{polynomial::Polynomial, root_product::RootProduct};

/// Serializable description of a target function, for render tasks and the
/// command line. The engine itself only ever sees a [`TargetFunction`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum FunctionDescriptor {
    Polynomial(Polynomial),
    RootProduct(RootProduct),
}

impl FunctionDescriptor {
    pub fn eval(&self, z: Complex) -> Complex {
        match self {
            FunctionDescriptor::Polynomial(polynomial) => polynomial.eval(z),
            FunctionDescriptor::RootProduct(product) => product.eval(z),
        }
    }

    /// An owned callable evaluating this descriptor.
    pub fn target(&self) -> Box<dyn TargetFunction> {
        let descriptor = self.clone();
        Box::new(move |z| descriptor.eval(z))
    }
}
