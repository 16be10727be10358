//! Built-in component data.
//!
//! Sources:
//! - RPP: Reid, Prausnitz & Poling, *The Properties of Gases & Liquids*, 4th ed.
//! - Perry's: *Perry's Chemical Engineers' Handbook*, 7th ed.
//! - NIST: Chemistry WebBook, SRD 69.

use uom::si::{
    f64::{Pressure, ThermodynamicTemperature},
    pressure::pascal,
    thermodynamic_temperature::kelvin,
};

use crate::{
    component::{
        ComponentParameters, IdealGasMethod, LiquidMethod, Methods, PureComponent,
        SaturationMethod,
    },
    correlation::{CoefficientSet, CriticalPoint},
};

fn aromatic() -> Methods {
    Methods::default()
        .with_ideal_gas(IdealGasMethod::Rpp)
        .with_saturation(SaturationMethod::Rpp)
        .with_liquid(LiquidMethod::Perrys)
}

fn critical(temperature: f64, pressure: f64) -> CriticalPoint {
    CriticalPoint::new_unchecked(
        ThermodynamicTemperature::new::<kelvin>(temperature),
        Pressure::new::<pascal>(pressure),
    )
}

pub(super) fn benzene() -> PureComponent {
    PureComponent::new(
        "benzene",
        aromatic(),
        ComponentParameters {
            molar_mass: Some(78.1136e-3),
            critical: Some(critical(562.2, 48.9e5)),
            ideal_gas_cp: Some(CoefficientSet::from([
                ('A', -3.392e1),
                ('B', 4.739e-1),
                ('C', -3.017e-4),
                ('D', 7.130e-8),
            ])),
            vapor_formation_enthalpy: Some(82.9e3),
            saturation_pressure: Some(CoefficientSet::from([
                ('A', -6.98273),
                ('B', 1.33213),
                ('C', -2.62863),
                ('D', -3.33399),
            ])),
            liquid_cp: Some(CoefficientSet::from([
                ('1', 1.29e5),
                ('2', -1.7e2),
                ('3', 6.48e-1),
                ('4', 0.0),
                ('5', 0.0),
            ])),
            liquid_density: Some(CoefficientSet::from([
                ('1', 1.0162e3),
                ('2', 0.2655),
                ('3', 562.16),
                ('4', 0.28212),
            ])),
            liquid_formation_enthalpy: Some(49.0e3),
            ..ComponentParameters::default()
        },
    )
}

pub(super) fn toluene() -> PureComponent {
    PureComponent::new(
        "toluene",
        aromatic(),
        ComponentParameters {
            molar_mass: Some(92.1405e-3),
            critical: Some(critical(591.8, 41.0e5)),
            ideal_gas_cp: Some(CoefficientSet::from([
                ('A', -2.435e1),
                ('B', 5.125e-1),
                ('C', -2.765e-4),
                ('D', 4.911e-8),
            ])),
            vapor_formation_enthalpy: Some(50.1e3),
            saturation_pressure: Some(CoefficientSet::from([
                ('A', -7.28607),
                ('B', 1.38091),
                ('C', -2.83433),
                ('D', -2.79168),
            ])),
            liquid_cp: Some(CoefficientSet::from([
                ('1', 1.40e5),
                ('2', -1.52e2),
                ('3', 6.95e-1),
                ('4', 0.0),
                ('5', 0.0),
            ])),
            liquid_density: Some(CoefficientSet::from([
                ('1', 0.8488e3),
                ('2', 0.26655),
                ('3', 591.8),
                ('4', 0.2878),
            ])),
            liquid_formation_enthalpy: Some(12.0e3),
            ..ComponentParameters::default()
        },
    )
}

/// Shomate data cover 500–1700 K; Antoine data cover 255.9–373 K.
pub(super) fn water() -> PureComponent {
    PureComponent::new(
        "water",
        Methods::default()
            .with_ideal_gas(IdealGasMethod::Nist)
            .with_saturation(SaturationMethod::Antoine)
            .with_liquid(LiquidMethod::Perrys),
        ComponentParameters {
            molar_mass: Some(18.0153e-3),
            critical: Some(critical(647.096, 220.64e5)),
            ideal_gas_cp: Some(CoefficientSet::from([
                ('A', 30.09200),
                ('B', 6.832514),
                ('C', 6.793435),
                ('D', -2.534480),
                ('E', 0.082139),
                ('F', -250.8810),
                ('G', 223.3967),
                ('H', -241.8264),
            ])),
            vapor_formation_enthalpy: Some(-241.826e3),
            saturation_pressure: Some(CoefficientSet::from([
                ('A', 4.6543),
                ('B', 1435.264),
                ('C', -64.848),
            ])),
            liquid_cp: Some(CoefficientSet::from([
                ('1', 2.7637e5),
                ('2', -2.0901e3),
                ('3', 8.1250),
                ('4', -1.4116e-2),
                ('5', 9.3701e-6),
            ])),
            liquid_density: Some(CoefficientSet::from([
                ('1', 5.459e3),
                ('2', 0.30542),
                ('3', 647.13),
                ('4', 0.081),
            ])),
            liquid_formation_enthalpy: Some(-285.83e3),
            liquid_formation_entropy: Some(69.95),
            ..ComponentParameters::default()
        },
    )
}
