use thiserror::Error;
use twine_solvers::equation::bisection;

use crate::correlation::CorrelationError;

/// Errors that can occur while solving for a saturation temperature.
#[derive(Debug, Error)]
pub enum SaturationTemperatureError {
    /// The vapor pressure correlation could not be evaluated, or the target
    /// pressure lies outside the search bracket.
    #[error(transparent)]
    Correlation(#[from] CorrelationError),

    /// The bisection solver encountered an error.
    #[error("bisection solver error")]
    Bisection(#[from] bisection::Error),

    /// The solver reached the iteration limit without converging.
    #[error("solver hit iteration limit: residual={residual:e}")]
    MaxIters {
        /// Best residual `ln(Psat(T) / P)` achieved.
        residual: f64,

        /// Iteration count performed by the solver.
        iters: usize,
    },
}
