//! Liquid-phase correlations from Perry's Chemical Engineers' Handbook.
//!
//! Source: 7th ed. (1997). Coefficients are labelled `1`–`5` as in the
//! handbook tables, which report heat capacity in J/kmol·K; results here are
//! per mole.
//!
//! ```text
//! cp = (C1 + C2·T + C3·T² + C4·T³ + C5·T⁴) / 1000           [J/mol·K]
//! ρ  = C1 / C2^(1 + (1 − T/C3)^C4)                           [mol/m³]
//! ```
//!
//! Density coefficients must already carry the factor of 1000 that converts
//! the handbook's kmol/m³ to mol/m³.

use uom::si::{
    f64::{MolarConcentration, MolarHeatCapacity, ThermodynamicTemperature},
    molar_concentration::mole_per_cubic_meter,
    molar_energy::joule_per_mole,
    molar_heat_capacity::joule_per_kelvin_mole,
};

use crate::support::{
    constraint::{Constraint, StrictlyPositive},
    units::{MolarEnthalpy, MolarEntropy},
};

use super::{
    CoefficientSet, CorrelationError,
    domain::{absolute_temperature, finite},
};

const HEAT_CAPACITY: [char; 5] = ['1', '2', '3', '4', '5'];
const DENSITY: [char; 4] = ['1', '2', '3', '4'];

/// Per-kmol to per-mol.
const PER_MOLE: f64 = 1e-3;

/// Computes liquid molar heat capacity.
///
/// # Errors
///
/// Returns [`CorrelationError::MissingCoefficient`] if any of `1`–`5` is
/// absent, or [`CorrelationError::Domain`] if the temperature is not strictly
/// positive.
pub fn heat_capacity(
    coeffs: &CoefficientSet,
    temperature: ThermodynamicTemperature,
) -> Result<MolarHeatCapacity, CorrelationError> {
    let [c1, c2, c3, c4, c5] = coeffs.require(HEAT_CAPACITY)?;
    let t = absolute_temperature(temperature, "T")?;

    let cp = PER_MOLE * (c1 + c2 * t + c3 * t.powi(2) + c4 * t.powi(3) + c5 * t.powi(4));

    Ok(MolarHeatCapacity::new::<joule_per_kelvin_mole>(finite(
        cp,
        "heat capacity",
    )?))
}

/// Computes liquid molar enthalpy, `h = h_ref + ∫ cp dT` from `reference_temperature`.
///
/// # Errors
///
/// Returns [`CorrelationError::MissingCoefficient`] if any of `1`–`5` is
/// absent, or [`CorrelationError::Domain`] if either temperature is not
/// strictly positive.
pub fn enthalpy(
    coeffs: &CoefficientSet,
    temperature: ThermodynamicTemperature,
    reference_temperature: ThermodynamicTemperature,
    reference_enthalpy: MolarEnthalpy,
) -> Result<MolarEnthalpy, CorrelationError> {
    let [c1, c2, c3, c4, c5] = coeffs.require(HEAT_CAPACITY)?;
    let t = absolute_temperature(temperature, "T")?;
    let t_ref = absolute_temperature(reference_temperature, "T_ref")?;

    let dh = PER_MOLE
        * (c1 * (t - t_ref)
            + c2 / 2.0 * (t.powi(2) - t_ref.powi(2))
            + c3 / 3.0 * (t.powi(3) - t_ref.powi(3))
            + c4 / 4.0 * (t.powi(4) - t_ref.powi(4))
            + c5 / 5.0 * (t.powi(5) - t_ref.powi(5)));

    Ok(reference_enthalpy + MolarEnthalpy::new::<joule_per_mole>(finite(dh, "enthalpy")?))
}

/// Computes liquid molar entropy, `s = s_ref + ∫ cp/T dT` from `reference_temperature`.
///
/// # Errors
///
/// Same as [`enthalpy`].
pub fn entropy(
    coeffs: &CoefficientSet,
    temperature: ThermodynamicTemperature,
    reference_temperature: ThermodynamicTemperature,
    reference_entropy: MolarEntropy,
) -> Result<MolarEntropy, CorrelationError> {
    let [c1, c2, c3, c4, c5] = coeffs.require(HEAT_CAPACITY)?;
    let t = absolute_temperature(temperature, "T")?;
    let t_ref = absolute_temperature(reference_temperature, "T_ref")?;

    let ds = PER_MOLE
        * (c1 * (t / t_ref).ln()
            + c2 * (t - t_ref)
            + c3 / 2.0 * (t.powi(2) - t_ref.powi(2))
            + c4 / 3.0 * (t.powi(3) - t_ref.powi(3))
            + c5 / 4.0 * (t.powi(4) - t_ref.powi(4)));

    Ok(reference_entropy + MolarEntropy::new::<joule_per_kelvin_mole>(finite(ds, "entropy")?))
}

/// Computes liquid molar density, `ρ = C1 / C2^(1 + (1 − T/C3)^C4)`.
///
/// # Errors
///
/// Returns [`CorrelationError::MissingCoefficient`] if any of `1`–`4` is
/// absent, or [`CorrelationError::Domain`] if `T` is not strictly positive,
/// `C2` or `C3` is not strictly positive, or `T > C3`.
pub fn density(
    coeffs: &CoefficientSet,
    temperature: ThermodynamicTemperature,
) -> Result<MolarConcentration, CorrelationError> {
    let [c1, c2, c3, c4] = coeffs.require(DENSITY)?;
    let t = absolute_temperature(temperature, "T")?;

    for (label, value) in [('2', c2), ('3', c3)] {
        StrictlyPositive::check(&value).map_err(|err| {
            CorrelationError::domain(format!("density coefficient {label} = {value}: {err}"))
        })?;
    }
    if t > c3 {
        return Err(CorrelationError::domain(format!(
            "T = {t} K is above the density correlation limit {c3} K"
        )));
    }

    let rho = c1 / c2.powf(1.0 + (1.0 - t / c3).powf(c4));

    Ok(MolarConcentration::new::<mole_per_cubic_meter>(finite(
        rho, "density",
    )?))
}
