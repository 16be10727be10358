//! Ideal-gas and vapor-pressure methods from Reid, Prausnitz & Poling.
//!
//! Source: *The Properties of Gases & Liquids*, 4th ed. (1987). Coefficient
//! labels follow the book.
//!
//! # Ideal gas
//!
//! Heat capacity is a cubic in absolute temperature,
//! `cp = A + B·T + C·T² + D·T³` [J/mol·K]. Enthalpy and entropy integrate it
//! from a reference temperature and add the formation values at that
//! reference:
//!
//! ```text
//! h = h_ref + ∫ cp dT
//! s = s_ref + ∫ cp/T dT
//! ```
//!
//! # Vapor pressure
//!
//! The Wagner form, in `x = 1 − T/Tc`:
//!
//! ```text
//! ln(Psat/Pc) = (A·x + B·x^1.5 + C·x³ + D·x⁶) / (1 − x)
//! ```
//!
//! valid for `0 < T ≤ Tc`. Its inverse has no closed form;
//! [`saturation_temperature`] solves it by bisection.

mod saturation;

use uom::si::{
    f64::{MolarHeatCapacity, Pressure, TemperatureInterval, ThermodynamicTemperature},
    molar_energy::joule_per_mole,
    molar_heat_capacity::joule_per_kelvin_mole,
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::kelvin,
};

use crate::support::units::{MolarEnthalpy, MolarEntropy, PressureTemperatureSlope};

use super::{
    CoefficientSet, CorrelationError, CriticalPoint,
    domain::{absolute_temperature, finite},
};

pub use saturation::{SaturationTemperatureConfig, SaturationTemperatureError, saturation_temperature};

const LABELS: [char; 4] = ['A', 'B', 'C', 'D'];

/// Computes ideal-gas molar heat capacity, `cp = A + B·T + C·T² + D·T³`.
///
/// # Errors
///
/// Returns [`CorrelationError::MissingCoefficient`] if any of `A`–`D` is
/// absent, or [`CorrelationError::Domain`] if the temperature is not strictly
/// positive.
pub fn heat_capacity(
    coeffs: &CoefficientSet,
    temperature: ThermodynamicTemperature,
) -> Result<MolarHeatCapacity, CorrelationError> {
    let [a, b, c, d] = coeffs.require(LABELS)?;
    let t = absolute_temperature(temperature, "T")?;

    let cp = a + b * t + c * t.powi(2) + d * t.powi(3);

    Ok(MolarHeatCapacity::new::<joule_per_kelvin_mole>(finite(
        cp,
        "heat capacity",
    )?))
}

/// Computes ideal-gas molar enthalpy,
/// `h = h_ref + A·(T − T_ref) + B/2·(T² − T_ref²) + C/3·(T³ − T_ref³) + D/4·(T⁴ − T_ref⁴)`.
///
/// # Errors
///
/// Returns [`CorrelationError::MissingCoefficient`] if any of `A`–`D` is
/// absent, or [`CorrelationError::Domain`] if either temperature is not
/// strictly positive.
pub fn enthalpy(
    coeffs: &CoefficientSet,
    temperature: ThermodynamicTemperature,
    reference_temperature: ThermodynamicTemperature,
    reference_enthalpy: MolarEnthalpy,
) -> Result<MolarEnthalpy, CorrelationError> {
    let [a, b, c, d] = coeffs.require(LABELS)?;
    let t = absolute_temperature(temperature, "T")?;
    let t_ref = absolute_temperature(reference_temperature, "T_ref")?;

    let dh = a * (t - t_ref)
        + b / 2.0 * (t.powi(2) - t_ref.powi(2))
        + c / 3.0 * (t.powi(3) - t_ref.powi(3))
        + d / 4.0 * (t.powi(4) - t_ref.powi(4));

    Ok(reference_enthalpy + MolarEnthalpy::new::<joule_per_mole>(finite(dh, "enthalpy")?))
}

/// Computes ideal-gas molar entropy,
/// `s = s_ref + A·ln(T/T_ref) + B·(T − T_ref) + C/2·(T² − T_ref²) + D/3·(T³ − T_ref³)`.
///
/// # Errors
///
/// Returns [`CorrelationError::MissingCoefficient`] if any of `A`–`D` is
/// absent, or [`CorrelationError::Domain`] if either temperature is not
/// strictly positive.
pub fn entropy(
    coeffs: &CoefficientSet,
    temperature: ThermodynamicTemperature,
    reference_temperature: ThermodynamicTemperature,
    reference_entropy: MolarEntropy,
) -> Result<MolarEntropy, CorrelationError> {
    let [a, b, c, d] = coeffs.require(LABELS)?;
    let t = absolute_temperature(temperature, "T")?;
    let t_ref = absolute_temperature(reference_temperature, "T_ref")?;

    let ds = a * (t / t_ref).ln()
        + b * (t - t_ref)
        + c / 2.0 * (t.powi(2) - t_ref.powi(2))
        + d / 3.0 * (t.powi(3) - t_ref.powi(3));

    Ok(reference_entropy + MolarEntropy::new::<joule_per_kelvin_mole>(finite(ds, "entropy")?))
}

/// Computes saturation pressure with the Wagner equation.
///
/// # Errors
///
/// Returns [`CorrelationError::MissingCoefficient`] if any of `A`–`D` is
/// absent, or [`CorrelationError::Domain`] unless `0 < T ≤ Tc` and the
/// result is representable as a positive pressure.
pub fn saturation_pressure(
    coeffs: &CoefficientSet,
    temperature: ThermodynamicTemperature,
    critical: &CriticalPoint,
) -> Result<Pressure, CorrelationError> {
    let k = coeffs.require(LABELS)?;
    let x = wagner_x(temperature, critical)?;

    let ln_pr = finite(wagner_f(k, x) / (1.0 - x), "saturation pressure")?;

    let pr = finite(ln_pr.exp(), "saturation pressure")?;
    if pr <= 0.0 {
        return Err(CorrelationError::domain(format!(
            "saturation pressure underflows at T = {} K (ln(P/Pc) = {ln_pr})",
            temperature.get::<kelvin>()
        )));
    }

    Ok(critical.pressure() * pr)
}

/// Computes the slope of the Wagner saturation curve, `dPsat/dT`.
///
/// # Errors
///
/// Same as [`saturation_pressure`].
pub fn saturation_pressure_derivative(
    coeffs: &CoefficientSet,
    temperature: ThermodynamicTemperature,
    critical: &CriticalPoint,
) -> Result<PressureTemperatureSlope, CorrelationError> {
    let k = coeffs.require(LABELS)?;
    let x = wagner_x(temperature, critical)?;
    let p_sat = saturation_pressure(coeffs, temperature, critical)?;
    let t_c = absolute_temperature(critical.temperature(), "Tc")?;

    // d(ln Psat)/dT = −(1/Tc)·[f'(x)/(1 − x) + f(x)/(1 − x)²]
    let tau = 1.0 - x;
    let dln_dt = -(wagner_df(k, x) / tau + wagner_f(k, x) / tau.powi(2)) / t_c;
    let dln_dt = finite(dln_dt, "saturation pressure slope")?;

    Ok(p_sat * dln_dt / TemperatureInterval::new::<delta_kelvin>(1.0))
}

/// Returns `x = 1 − T/Tc`, checking `0 < T ≤ Tc`.
fn wagner_x(
    temperature: ThermodynamicTemperature,
    critical: &CriticalPoint,
) -> Result<f64, CorrelationError> {
    let t = absolute_temperature(temperature, "T")?;
    let t_c = absolute_temperature(critical.temperature(), "Tc")?;

    if t > t_c {
        return Err(CorrelationError::domain(format!(
            "T = {t} K is above the critical temperature {t_c} K"
        )));
    }

    Ok(1.0 - t / t_c)
}

fn wagner_f([a, b, c, d]: [f64; 4], x: f64) -> f64 {
    a * x + b * x * x.sqrt() + c * x.powi(3) + d * x.powi(6)
}

fn wagner_df([a, b, c, d]: [f64; 4], x: f64) -> f64 {
    a + 1.5 * b * x.sqrt() + 3.0 * c * x.powi(2) + 6.0 * d * x.powi(5)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        pressure::{bar, pascal},
        thermodynamic_temperature::kelvin,
    };

    fn kelvins(value: f64) -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<kelvin>(value)
    }

    fn water_ideal_gas() -> CoefficientSet {
        CoefficientSet::from([
            ('A', 3.224e1),
            ('B', 1.924e-3),
            ('C', 1.055e-5),
            ('D', -3.596e-9),
        ])
    }

    fn water_vapor_pressure() -> CoefficientSet {
        CoefficientSet::from([
            ('A', -7.76451),
            ('B', 1.45838),
            ('C', -2.77580),
            ('D', -1.23303),
        ])
    }

    fn water_critical() -> CriticalPoint {
        CriticalPoint::new(kelvins(647.3), Pressure::new::<bar>(221.2)).unwrap()
    }

    fn t_ref() -> ThermodynamicTemperature {
        kelvins(273.15)
    }

    fn h_form() -> MolarEnthalpy {
        MolarEnthalpy::new::<joule_per_mole>(-241.83e3)
    }

    fn s_form() -> MolarEntropy {
        MolarEntropy::new::<joule_per_kelvin_mole>(188.84)
    }

    #[test]
    fn heat_capacity_of_water_vapor() -> Result<(), CorrelationError> {
        let coeffs = water_ideal_gas();

        let cp = heat_capacity(&coeffs, kelvins(298.15))?;
        assert_relative_eq!(cp.get::<joule_per_kelvin_mole>(), 33.656, epsilon = 1e-3);

        let cp = heat_capacity(&coeffs, kelvins(400.0))?;
        assert_relative_eq!(cp.get::<joule_per_kelvin_mole>(), 34.467, epsilon = 1e-3);

        Ok(())
    }

    #[test]
    fn enthalpy_of_water_vapor() -> Result<(), CorrelationError> {
        let coeffs = water_ideal_gas();

        let h = enthalpy(&coeffs, kelvins(298.15), t_ref(), h_form())?;
        assert_relative_eq!(h.get::<joule_per_mole>(), -240_990.825, epsilon = 1e-3);

        let h = enthalpy(&coeffs, kelvins(400.0), t_ref(), h_form())?;
        assert_relative_eq!(h.get::<joule_per_mole>(), -237_522.824, epsilon = 1e-3);

        let h = enthalpy(&coeffs, t_ref(), t_ref(), h_form())?;
        assert_eq!(h, h_form());

        Ok(())
    }

    #[test]
    fn entropy_of_water_vapor() -> Result<(), CorrelationError> {
        let coeffs = water_ideal_gas();

        let s = entropy(&coeffs, kelvins(298.15), t_ref(), s_form())?;
        assert_relative_eq!(s.get::<joule_per_kelvin_mole>(), 191.780, epsilon = 1e-3);

        let s = entropy(&coeffs, kelvins(400.0), t_ref(), s_form())?;
        assert_relative_eq!(s.get::<joule_per_kelvin_mole>(), 201.780, epsilon = 1e-3);

        Ok(())
    }

    #[test]
    fn saturation_pressure_of_water() -> Result<(), CorrelationError> {
        let coeffs = water_vapor_pressure();
        let critical = water_critical();

        let p = saturation_pressure(&coeffs, kelvins(298.15), &critical)?;
        assert_relative_eq!(p.get::<pascal>(), 3171.4391, epsilon = 1e-3);

        let p = saturation_pressure(&coeffs, kelvins(373.15), &critical)?;
        assert_relative_eq!(p.get::<pascal>(), 101_378.0, max_relative = 1e-4);

        Ok(())
    }

    #[test]
    fn saturation_pressure_equals_critical_pressure_at_critical_temperature() {
        let critical = water_critical();

        let p = saturation_pressure(&water_vapor_pressure(), critical.temperature(), &critical)
            .unwrap();
        assert_relative_eq!(p.get::<bar>(), 221.2, max_relative = 1e-12);
    }

    #[test]
    fn saturation_pressure_above_critical_temperature_is_a_domain_error() {
        let critical = water_critical();

        assert!(matches!(
            saturation_pressure(&water_vapor_pressure(), kelvins(700.0), &critical),
            Err(CorrelationError::Domain { .. })
        ));
    }

    #[test]
    fn saturation_pressure_underflow_is_a_domain_error() {
        // ln(P/Pc) ≈ −6700 at 1 K, far below the smallest positive f64.
        let result = saturation_pressure(&water_vapor_pressure(), kelvins(1.0), &water_critical());
        assert!(matches!(result, Err(CorrelationError::Domain { .. })));

        let result =
            saturation_pressure_derivative(&water_vapor_pressure(), kelvins(1.0), &water_critical());
        assert!(matches!(result, Err(CorrelationError::Domain { .. })));
    }

    #[test]
    fn saturation_pressure_derivative_matches_finite_difference() -> Result<(), CorrelationError> {
        let coeffs = water_vapor_pressure();
        let critical = water_critical();
        let delta = 1e-4;

        for t in [298.15, 373.15, 550.0] {
            let slope = saturation_pressure_derivative(&coeffs, kelvins(t), &critical)?;

            let p_hi = saturation_pressure(&coeffs, kelvins(t + delta), &critical)?;
            let p_lo = saturation_pressure(&coeffs, kelvins(t - delta), &critical)?;
            let expected = (p_hi - p_lo).get::<pascal>() / (2.0 * delta);

            let per_kelvin = slope * TemperatureInterval::new::<delta_kelvin>(1.0);
            assert_relative_eq!(per_kelvin.get::<pascal>(), expected, max_relative = 1e-4);
        }

        Ok(())
    }

    #[test]
    fn enthalpy_and_entropy_are_consistent_with_heat_capacity() -> Result<(), CorrelationError> {
        let coeffs = water_ideal_gas();
        let delta = 1e-3;

        for t in [300.0, 650.0, 1000.0] {
            let cp = heat_capacity(&coeffs, kelvins(t))?.get::<joule_per_kelvin_mole>();

            let dh = enthalpy(&coeffs, kelvins(t + delta), t_ref(), h_form())?
                - enthalpy(&coeffs, kelvins(t - delta), t_ref(), h_form())?;
            assert_relative_eq!(
                dh.get::<joule_per_mole>() / (2.0 * delta),
                cp,
                max_relative = 1e-5
            );

            let ds = entropy(&coeffs, kelvins(t + delta), t_ref(), s_form())?
                - entropy(&coeffs, kelvins(t - delta), t_ref(), s_form())?;
            assert_relative_eq!(
                ds.get::<joule_per_kelvin_mole>() / (2.0 * delta),
                cp / t,
                max_relative = 1e-5
            );
        }

        Ok(())
    }

    #[test]
    fn missing_coefficient() {
        let coeffs = CoefficientSet::from([('A', 1.0), ('B', 1.0), ('C', 1.0)]);

        assert_eq!(
            heat_capacity(&coeffs, kelvins(300.0)),
            Err(CorrelationError::MissingCoefficient { label: 'D' })
        );
        assert_eq!(
            saturation_pressure(&coeffs, kelvins(300.0), &water_critical()),
            Err(CorrelationError::MissingCoefficient { label: 'D' })
        );
    }
}
