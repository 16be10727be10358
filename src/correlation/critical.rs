use serde::{Deserialize, Serialize};
use uom::si::{
    f64::{Pressure, ThermodynamicTemperature},
    pressure::pascal,
    thermodynamic_temperature::kelvin,
};

use crate::support::constraint::{Constraint, ConstraintResult, StrictlyPositive};

/// Critical temperature and pressure of a pure component.
///
/// Both values are strictly positive once constructed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCriticalPoint", into = "RawCriticalPoint")]
pub struct CriticalPoint {
    temperature: ThermodynamicTemperature,
    pressure: Pressure,
}

impl CriticalPoint {
    /// Creates a critical point.
    ///
    /// # Errors
    ///
    /// Returns an error if either value is not strictly positive.
    pub fn new(temperature: ThermodynamicTemperature, pressure: Pressure) -> ConstraintResult<Self> {
        StrictlyPositive::check(&temperature.get::<kelvin>())?;
        StrictlyPositive::check(&pressure)?;
        Ok(Self {
            temperature,
            pressure,
        })
    }

    /// Creates a critical point without validation.
    ///
    /// The caller must ensure both values are strictly positive.
    pub(crate) fn new_unchecked(temperature: ThermodynamicTemperature, pressure: Pressure) -> Self {
        Self {
            temperature,
            pressure,
        }
    }

    /// Critical temperature, `Tc`.
    #[must_use]
    pub fn temperature(&self) -> ThermodynamicTemperature {
        self.temperature
    }

    /// Critical pressure, `Pc`.
    #[must_use]
    pub fn pressure(&self) -> Pressure {
        self.pressure
    }
}

/// Serialized form, in kelvin and pascal.
#[derive(Serialize, Deserialize)]
struct RawCriticalPoint {
    temperature: f64,
    pressure: f64,
}

impl TryFrom<RawCriticalPoint> for CriticalPoint {
    type Error = crate::support::constraint::ConstraintError;

    fn try_from(raw: RawCriticalPoint) -> Result<Self, Self::Error> {
        Self::new(
            ThermodynamicTemperature::new::<kelvin>(raw.temperature),
            Pressure::new::<pascal>(raw.pressure),
        )
    }
}

impl From<CriticalPoint> for RawCriticalPoint {
    fn from(critical: CriticalPoint) -> Self {
        Self {
            temperature: critical.temperature.get::<kelvin>(),
            pressure: critical.pressure.get::<pascal>(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::pressure::bar;

    #[test]
    fn rejects_non_physical_values() {
        let t_c = ThermodynamicTemperature::new::<kelvin>(647.3);
        let p_c = Pressure::new::<bar>(221.2);

        assert!(CriticalPoint::new(t_c, p_c).is_ok());
        assert!(CriticalPoint::new(ThermodynamicTemperature::new::<kelvin>(0.0), p_c).is_err());
        assert!(CriticalPoint::new(t_c, Pressure::new::<bar>(-1.0)).is_err());
    }

    #[test]
    fn deserializes_in_si_units() {
        let critical: CriticalPoint =
            serde_json::from_str(r#"{"temperature": 562.2, "pressure": 4.89e6}"#).unwrap();

        assert_eq!(critical.temperature().get::<kelvin>(), 562.2);
        assert_eq!(critical.pressure().get::<pascal>(), 4.89e6);

        let invalid = serde_json::from_str::<CriticalPoint>(r#"{"temperature": -1, "pressure": 1}"#);
        assert!(invalid.is_err());
    }
}
