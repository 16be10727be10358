//! Input and output guards shared by the correlations.

use uom::si::{f64::ThermodynamicTemperature, thermodynamic_temperature::kelvin};

use crate::support::constraint::{Constraint, NonZero, StrictlyPositive};

use super::CorrelationError;

/// Returns the temperature in kelvin if it is strictly positive.
pub(super) fn absolute_temperature(
    temperature: ThermodynamicTemperature,
    name: &str,
) -> Result<f64, CorrelationError> {
    let value = temperature.get::<kelvin>();
    StrictlyPositive::check(&value)
        .map_err(|err| CorrelationError::domain(format!("{name} = {value} K: {err}")))?;
    Ok(value)
}

/// Returns `value` if it can safely be used as a denominator.
pub(super) fn denominator(value: f64, name: &str) -> Result<f64, CorrelationError> {
    NonZero::check(&value).map_err(|err| CorrelationError::domain(format!("{name}: {err}")))?;
    Ok(value)
}

/// Rejects `NaN` and infinite results so they never reach the caller silently.
pub(super) fn finite(value: f64, property: &str) -> Result<f64, CorrelationError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CorrelationError::domain(format!(
            "{property} evaluated to {value}"
        )))
    }
}
