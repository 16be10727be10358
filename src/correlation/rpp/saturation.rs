//! Iterative saturation temperature for the Wagner vapor pressure equation.
//!
//! Bisection runs on `ln(Psat(T) / P)` over `[r_min·Tc, Tc]`, where the
//! residual is negative at the lower end and positive at `Tc` for any target
//! pressure the curve reaches.

mod config;
mod error;
mod problem;

pub use config::SaturationTemperatureConfig;
pub use error::SaturationTemperatureError;

use tracing::{debug, warn};
use twine_solvers::equation::bisection;
use uom::si::{
    f64::{Pressure, ThermodynamicTemperature},
    pressure::pascal,
    thermodynamic_temperature::kelvin,
};

use crate::support::constraint::{Constraint, StrictlyPositive};

use super::{CoefficientSet, CorrelationError, CriticalPoint, LABELS, saturation_pressure};

use problem::{SaturationPressureModel, SaturationTemperatureProblem};

/// Solves `Psat(T) = pressure` for `T` on the Wagner saturation curve.
///
/// # Errors
///
/// Returns [`SaturationTemperatureError::Correlation`] if a coefficient is
/// missing, `config.min_reduced_temperature` is outside `(0, 1)`, the
/// pressure is not strictly positive, or it lies outside
/// `[Psat(r_min·Tc), Pc]`. Returns the other variants if the solver fails or
/// does not converge.
pub fn saturation_temperature(
    coeffs: &CoefficientSet,
    pressure: Pressure,
    critical: &CriticalPoint,
    config: SaturationTemperatureConfig,
) -> Result<ThermodynamicTemperature, SaturationTemperatureError> {
    coeffs.require(LABELS)?;

    let r_min = config.min_reduced_temperature;
    if !(r_min > 0.0 && r_min < 1.0) {
        return Err(CorrelationError::domain(format!(
            "min_reduced_temperature = {r_min} must lie in (0, 1)"
        ))
        .into());
    }

    let target = pressure.get::<pascal>();
    StrictlyPositive::check(&target)
        .map_err(|err| CorrelationError::domain(format!("P = {target} Pa: {err}")))?;

    let t_c = critical.temperature();
    let p_c = critical.pressure();
    if pressure == p_c {
        return Ok(t_c);
    }
    if pressure > p_c {
        return Err(CorrelationError::domain(format!(
            "P = {target} Pa is above the critical pressure {} Pa",
            p_c.get::<pascal>()
        ))
        .into());
    }

    let t_lo = t_c * r_min;
    let p_lo = saturation_pressure(coeffs, t_lo, critical)?;
    if pressure < p_lo {
        return Err(CorrelationError::domain(format!(
            "P = {target} Pa is below Psat = {} Pa at the bracket floor {} K",
            p_lo.get::<pascal>(),
            t_lo.get::<kelvin>()
        ))
        .into());
    }

    debug!(
        target_pa = target,
        t_lo = t_lo.get::<kelvin>(),
        t_hi = t_c.get::<kelvin>(),
        "solving for saturation temperature"
    );

    let model = SaturationPressureModel::new(coeffs, critical);
    let problem = SaturationTemperatureProblem::new(pressure);

    let solution = bisection::solve(
        &model,
        &problem,
        [t_lo.get::<kelvin>(), t_c.get::<kelvin>()],
        &config.bisection(),
        |event: &bisection::Event<'_, _, _>| {
            // The correlation is undefined above `Tc`, where `Psat` would
            // exceed any reachable target.
            if event.result().is_err() {
                return Some(bisection::Action::assume_positive());
            }
            None
        },
    )?;

    if solution.status != bisection::Status::Converged {
        warn!(
            target_pa = target,
            residual = solution.residual,
            iters = solution.iters,
            "saturation temperature did not converge"
        );
        return Err(SaturationTemperatureError::MaxIters {
            residual: solution.residual,
            iters: solution.iters,
        });
    }

    let temperature = solution.snapshot.output.temperature;
    debug!(
        target_pa = target,
        temperature_k = temperature.get::<kelvin>(),
        iters = solution.iters,
        "saturation temperature converged"
    );

    Ok(temperature)
}
