use twine_solvers::equation::bisection;
use uom::si::{f64::TemperatureInterval, temperature_interval::kelvin as delta_kelvin};

/// Solver configuration for inverting the Wagner saturation curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SaturationTemperatureConfig {
    /// Maximum iteration count for the bisection solve.
    pub max_iters: usize,

    /// Absolute tolerance on the temperature search variable.
    pub temperature_tol: TemperatureInterval,

    /// Absolute tolerance on the residual `ln(Psat(T) / P)`.
    pub residual_tol: f64,

    /// Lower end of the search bracket as a fraction of `Tc`.
    ///
    /// Must lie in `(0, 1)`. The upper end is always `Tc`.
    pub min_reduced_temperature: f64,
}

impl Default for SaturationTemperatureConfig {
    fn default() -> Self {
        Self {
            max_iters: 200,
            temperature_tol: TemperatureInterval::new::<delta_kelvin>(1e-10),
            residual_tol: 1e-12,
            min_reduced_temperature: 0.3,
        }
    }
}

impl SaturationTemperatureConfig {
    /// Converts this configuration into a bisection solver configuration.
    pub(super) fn bisection(&self) -> bisection::Config {
        bisection::Config {
            max_iters: self.max_iters,
            x_abs_tol: self.temperature_tol.get::<delta_kelvin>(),
            x_rel_tol: 0.0,
            residual_tol: self.residual_tol,
        }
    }
}
