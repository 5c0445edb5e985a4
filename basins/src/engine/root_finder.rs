use complex_rs::complex::Complex;
use serde::{Deserialize, Serialize};

use crate::models::function::function::TargetFunction;

/// Finite-difference Newton–Raphson iterator.
///
/// The derivative is approximated with a secant through a randomly perturbed
/// evaluation, so the method only needs the function to be evaluable; it
/// never sees its algebraic form. The price is an occasional degenerate
/// secant, surfaced as [`IterationOutcome::NotConverged`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RootFinder {
    pub result_tolerance: f64,
    pub derivative_step_length: f64,
    pub max_iterations: u32,
}

#[derive(Debug, Clone, Copy)]
pub enum IterationOutcome {
    /// `iterations_used` is the budget REMAINING at convergence; lower means
    /// more iterations were consumed.
    Converged { root: Complex, iterations_used: u32 },
    NotConverged,
}

impl Default for RootFinder {
    fn default() -> Self {
        Self {
            result_tolerance: 1e-8,
            derivative_step_length: 1e-12,
            max_iterations: 200,
        }
    }
}

impl RootFinder {
    pub fn new(result_tolerance: f64, derivative_step_length: f64, max_iterations: u32) -> Self {
        Self {
            result_tolerance,
            derivative_step_length,
            max_iterations,
        }
    }

    pub fn iterate(&self, initial_guess: Complex, f: &dyn TargetFunction) -> IterationOutcome {
        let mut guess = initial_guess;
        let mut steps = self.max_iterations;

        loop {
            let f_guess = f.eval(guess);
            let guess_eps = guess + Complex::random_unit(self.derivative_step_length);
            let f_guess_eps = f.eval(guess_eps);

            let secant = f_guess_eps - f_guess;
            if secant.arg_sq() == 0.0 {
                // Perturbed evaluation coincides with the unperturbed one;
                // the step below would divide by zero.
                return IterationOutcome::NotConverged;
            }

            let l = -f_guess / secant;
            let new_guess = guess + l * (guess_eps - guess);

            if f.eval(new_guess).norm() <= self.result_tolerance {
                return IterationOutcome::Converged {
                    root: new_guess,
                    iterations_used: steps,
                };
            }

            if steps == 0 {
                return IterationOutcome::NotConverged;
            }
            steps -= 1;
            guess = new_guess;
        }
    }
}
