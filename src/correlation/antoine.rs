//! Antoine equation for saturation pressure.
//!
//! ```text
//! log10(Psat) = A − B / (T + C)
//! ```
//!
//! with `T` in kelvin. The Antoine `A`, `B`, `C` are unrelated to the Shomate
//! coefficients of the same name.
//!
//! NIST publishes Antoine coefficients on a bar basis, which is what
//! [`saturation_pressure`] assumes. A set whose `A` has been shifted by `+5`
//! yields pascals instead; evaluate such a set with [`saturation_pressure_in`]
//! and [`PressureBasis::Pascal`].

use std::f64::consts::LN_10;

use serde::{Deserialize, Serialize};
use uom::si::{
    f64::{Pressure, TemperatureInterval, ThermodynamicTemperature},
    pressure::{bar, pascal},
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::kelvin,
};

use crate::support::{
    constraint::{Constraint, StrictlyPositive},
    units::PressureTemperatureSlope,
};

use super::{
    CoefficientSet, CorrelationError,
    domain::{absolute_temperature, denominator, finite},
};

const LABELS: [char; 3] = ['A', 'B', 'C'];

/// Pressure unit that a set of Antoine coefficients produces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PressureBasis {
    /// `log10(P / bar)`, the NIST convention.
    #[default]
    Bar,
    /// `log10(P / Pa)`, i.e. a bar-basis `A` shifted by `+5`.
    Pascal,
}

impl PressureBasis {
    fn pressure(self, value: f64) -> Pressure {
        match self {
            Self::Bar => Pressure::new::<bar>(value),
            Self::Pascal => Pressure::new::<pascal>(value),
        }
    }

    fn value(self, pressure: Pressure) -> f64 {
        match self {
            Self::Bar => pressure.get::<bar>(),
            Self::Pascal => pressure.get::<pascal>(),
        }
    }
}

/// Computes saturation pressure from bar-basis coefficients.
///
/// # Errors
///
/// Returns [`CorrelationError::MissingCoefficient`] if any of `A`–`C` is
/// absent, or [`CorrelationError::Domain`] if `T + C = 0` or `T ≤ 0`.
///
/// # Example
///
/// ```
/// use twine_pure::correlation::{CoefficientSet, antoine};
/// use uom::si::{f64::ThermodynamicTemperature, pressure::bar, thermodynamic_temperature::kelvin};
///
/// let coeffs = CoefficientSet::from([('A', 5.0), ('B', 1000.0), ('C', -50.0)]);
/// let p = antoine::saturation_pressure(&coeffs, ThermodynamicTemperature::new::<kelvin>(150.0))?;
///
/// // 10^(5 − 1000/100)
/// assert!((p.get::<bar>() / 1e-5 - 1.0).abs() < 1e-12);
/// # Ok::<(), twine_pure::correlation::CorrelationError>(())
/// ```
pub fn saturation_pressure(
    coeffs: &CoefficientSet,
    temperature: ThermodynamicTemperature,
) -> Result<Pressure, CorrelationError> {
    saturation_pressure_in(coeffs, temperature, PressureBasis::Bar)
}

/// Computes saturation pressure from coefficients on the given `basis`.
///
/// # Errors
///
/// Same as [`saturation_pressure`].
pub fn saturation_pressure_in(
    coeffs: &CoefficientSet,
    temperature: ThermodynamicTemperature,
    basis: PressureBasis,
) -> Result<Pressure, CorrelationError> {
    let [a, b, c] = coeffs.require(LABELS)?;
    let t = absolute_temperature(temperature, "T")?;
    let t_plus_c = denominator(t + c, "T + C")?;

    let p = finite(10f64.powf(a - b / t_plus_c), "saturation pressure")?;

    Ok(basis.pressure(p))
}

/// Computes `dPsat/dT = Psat · ln(10) · B / (T + C)²` from bar-basis coefficients.
///
/// # Errors
///
/// Same as [`saturation_pressure`].
pub fn saturation_pressure_derivative(
    coeffs: &CoefficientSet,
    temperature: ThermodynamicTemperature,
) -> Result<PressureTemperatureSlope, CorrelationError> {
    saturation_pressure_derivative_in(coeffs, temperature, PressureBasis::Bar)
}

/// Computes `dPsat/dT` from coefficients on the given `basis`.
///
/// # Errors
///
/// Same as [`saturation_pressure`].
pub fn saturation_pressure_derivative_in(
    coeffs: &CoefficientSet,
    temperature: ThermodynamicTemperature,
    basis: PressureBasis,
) -> Result<PressureTemperatureSlope, CorrelationError> {
    let [_, b, c] = coeffs.require(LABELS)?;
    let p_sat = saturation_pressure_in(coeffs, temperature, basis)?;
    let t_plus_c = temperature.get::<kelvin>() + c;

    let per_kelvin = finite(LN_10 * b / t_plus_c.powi(2), "saturation pressure slope")?;

    Ok(p_sat * per_kelvin / TemperatureInterval::new::<delta_kelvin>(1.0))
}

/// Inverts the Antoine equation: `T = B / (A − log10(P)) − C`.
///
/// `pressure` is converted to bar before inversion.
///
/// # Errors
///
/// Returns [`CorrelationError::MissingCoefficient`] if any of `A`–`C` is
/// absent, or [`CorrelationError::Domain`] if `P ≤ 0`, `A = log10(P)`, the
/// solution lies on the far side of the `T = −C` pole (`T + C ≤ 0`), or the
/// resulting temperature is not strictly positive.
pub fn saturation_temperature(
    coeffs: &CoefficientSet,
    pressure: Pressure,
) -> Result<ThermodynamicTemperature, CorrelationError> {
    saturation_temperature_in(coeffs, pressure, PressureBasis::Bar)
}

/// Inverts the Antoine equation for coefficients on the given `basis`.
///
/// # Errors
///
/// Same as [`saturation_temperature`].
pub fn saturation_temperature_in(
    coeffs: &CoefficientSet,
    pressure: Pressure,
    basis: PressureBasis,
) -> Result<ThermodynamicTemperature, CorrelationError> {
    let [a, b, c] = coeffs.require(LABELS)?;

    let p = basis.value(pressure);
    StrictlyPositive::check(&p)
        .map_err(|err| CorrelationError::domain(format!("P = {p} ({basis:?}): {err}")))?;

    let t_plus_c = b / denominator(a - p.log10(), "A − log10(P)")?;
    if t_plus_c <= 0.0 {
        return Err(CorrelationError::domain(format!(
            "P = {p} ({basis:?}) is beyond the T = −C pole of the Antoine curve"
        )));
    }

    let t = t_plus_c - c;
    if StrictlyPositive::check(&t).is_err() {
        return Err(CorrelationError::domain(format!(
            "no positive saturation temperature for P = {p} ({basis:?}), got {t} K"
        )));
    }

    Ok(ThermodynamicTemperature::new::<kelvin>(t))
}
