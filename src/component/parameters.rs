use serde::{Deserialize, Serialize};

use crate::correlation::{CoefficientSet, CriticalPoint, antoine::PressureBasis};

/// Raw parameter data for one component.
///
/// Scalars are in base SI units on a molar basis: kg/mol, J/mol and J/mol·K.
/// Every field is optional; the methods selected for a component determine
/// which ones must be present.
///
/// Formation enthalpies and entropies are the values at the component's
/// reference temperature (see [`ReferenceState`]).
///
/// [`ReferenceState`]: super::ReferenceState
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ComponentParameters {
    /// Molar mass [kg/mol].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub molar_mass: Option<f64>,

    /// Critical temperature and pressure, required by the Wagner equation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub critical: Option<CriticalPoint>,

    /// Ideal-gas heat capacity coefficients (Shomate `A`–`H` or RPP `A`–`D`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ideal_gas_cp: Option<CoefficientSet>,

    /// Ideal-gas enthalpy at the reference temperature [J/mol].
    ///
    /// Defaults to zero when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vapor_formation_enthalpy: Option<f64>,

    /// Ideal-gas entropy at the reference temperature [J/mol·K].
    ///
    /// Required by the RPP method; Shomate entropy is absolute through `G`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vapor_formation_entropy: Option<f64>,

    /// Saturation pressure coefficients (Antoine `A`–`C` or Wagner `A`–`D`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saturation_pressure: Option<CoefficientSet>,

    /// Pressure unit of the Antoine coefficients.
    #[serde(default)]
    pub antoine_basis: PressureBasis,

    /// Perry's liquid heat capacity coefficients `1`–`5` [J/kmol·K].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub liquid_cp: Option<CoefficientSet>,

    /// Perry's liquid density coefficients `1`–`4` [mol/m³].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub liquid_density: Option<CoefficientSet>,

    /// Liquid enthalpy at the reference temperature [J/mol].
    ///
    /// Defaults to zero when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub liquid_formation_enthalpy: Option<f64>,

    /// Liquid entropy at the reference temperature [J/mol·K].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub liquid_formation_entropy: Option<f64>,
}
