//! Problem formulation for inverting the Wagner saturation curve.

use std::convert::Infallible;

use twine_core::{EquationProblem, Model};
use uom::si::{
    f64::{Pressure, ThermodynamicTemperature},
    ratio::ratio,
    thermodynamic_temperature::kelvin,
};

use crate::correlation::{CoefficientSet, CorrelationError, CriticalPoint, rpp};

/// A point on the saturation curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct SaturationPoint {
    pub(super) temperature: ThermodynamicTemperature,
    pub(super) pressure: Pressure,
}

/// Model adapter exposing the Wagner correlation as `T -> (T, Psat)`.
pub(super) struct SaturationPressureModel<'a> {
    coeffs: &'a CoefficientSet,
    critical: &'a CriticalPoint,
}

impl<'a> SaturationPressureModel<'a> {
    pub(super) fn new(coeffs: &'a CoefficientSet, critical: &'a CriticalPoint) -> Self {
        Self { coeffs, critical }
    }
}

impl Model for SaturationPressureModel<'_> {
    type Input = ThermodynamicTemperature;
    type Output = SaturationPoint;
    type Error = CorrelationError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let pressure = rpp::saturation_pressure(self.coeffs, *input, self.critical)?;
        Ok(SaturationPoint {
            temperature: *input,
            pressure,
        })
    }
}

/// Equation problem matching a target saturation pressure.
///
/// The residual is `ln(Psat(T) / P_target)`, which keeps the scale uniform
/// across the many decades the saturation curve spans.
pub(super) struct SaturationTemperatureProblem {
    target: Pressure,
}

impl SaturationTemperatureProblem {
    pub(super) fn new(target: Pressure) -> Self {
        Self { target }
    }
}

impl EquationProblem<1> for SaturationTemperatureProblem {
    type Input = ThermodynamicTemperature;
    type Output = SaturationPoint;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<Self::Input, Self::Error> {
        Ok(ThermodynamicTemperature::new::<kelvin>(x[0]))
    }

    fn residuals(
        &self,
        _input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; 1], Self::Error> {
        Ok([(output.pressure / self.target).get::<ratio>().ln()])
    }
}
