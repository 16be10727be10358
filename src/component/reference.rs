use serde::{Deserialize, Serialize};
use uom::si::{
    f64::{Pressure, ThermodynamicTemperature},
    pressure::pascal,
    thermodynamic_temperature::kelvin,
};

use crate::support::constraint::{Constraint, ConstraintError, ConstraintResult, StrictlyPositive};

/// Reference temperature and pressure for a component's enthalpy and entropy.
///
/// Formation values in [`ComponentParameters`] are taken at this temperature.
/// The pressure is the standard-state pressure for ideal-gas entropy.
///
/// [`ComponentParameters`]: super::ComponentParameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawReferenceState", into = "RawReferenceState")]
pub struct ReferenceState {
    temperature: ThermodynamicTemperature,
    pressure: Pressure,
}

impl ReferenceState {
    /// Creates a reference state.
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

    /// Standard reference state: 298.15 K and 1 bar.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            temperature: ThermodynamicTemperature::new::<kelvin>(298.15),
            pressure: Pressure::new::<pascal>(1e5),
        }
    }

    #[must_use]
    pub fn temperature(&self) -> ThermodynamicTemperature {
        self.temperature
    }

    #[must_use]
    pub fn pressure(&self) -> Pressure {
        self.pressure
    }
}

impl Default for ReferenceState {
    fn default() -> Self {
        Self::standard()
    }
}

/// Serialized form, in kelvin and pascal.
#[derive(Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawReferenceState {
    temperature: f64,
    pressure: f64,
}

impl TryFrom<RawReferenceState> for ReferenceState {
    type Error = ConstraintError;

    fn try_from(raw: RawReferenceState) -> Result<Self, Self::Error> {
        Self::new(
            ThermodynamicTemperature::new::<kelvin>(raw.temperature),
            Pressure::new::<pascal>(raw.pressure),
        )
    }
}

impl From<ReferenceState> for RawReferenceState {
    fn from(reference: ReferenceState) -> Self {
        Self {
            temperature: reference.temperature.get::<kelvin>(),
            pressure: reference.pressure.get::<pascal>(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::pressure::bar;

    #[test]
    fn default_is_standard() {
        let reference = ReferenceState::default();
        assert_eq!(reference.temperature().get::<kelvin>(), 298.15);
        assert_eq!(reference.pressure().get::<bar>(), 1.0);
    }

    #[test]
    fn rejects_non_positive_values() {
        assert_eq!(
            ReferenceState::new(
                ThermodynamicTemperature::new::<kelvin>(0.0),
                Pressure::new::<bar>(1.0)
            ),
            Err(ConstraintError::Zero)
        );
        assert_eq!(
            ReferenceState::new(
                ThermodynamicTemperature::new::<kelvin>(300.0),
                Pressure::new::<bar>(-1.0)
            ),
            Err(ConstraintError::Negative)
        );
    }

    #[test]
    fn deserializes_from_kelvin_and_pascal() {
        let reference: ReferenceState =
            serde_json::from_str(r#"{ "temperature": 273.15, "pressure": 101325.0 }"#).unwrap();

        assert_eq!(reference.temperature().get::<kelvin>(), 273.15);
        assert_eq!(reference.pressure().get::<pascal>(), 101_325.0);
    }
}
