//! NIST Shomate correlations for ideal-gas properties.
//!
//! The Shomate equation expresses ideal-gas heat capacity in the reduced
//! temperature `t = T / 1000 K`:
//!
//! ```text
//! cp = A + B·t + C·t² + D·t³ + E/t²                       [J/mol·K]
//! ```
//!
//! Enthalpy and entropy follow by integration, with the integration constants
//! `F`, `G` and `H` published alongside `A`–`E` (NIST WebBook convention):
//!
//! ```text
//! Φ(t) = A·t + B·t²/2 + C·t³/3 + D·t⁴/4 − E/t + F − H     [kJ/mol]
//! s    = A·ln(t) + B·t + C·t²/2 + D·t³/3 − E/(2·t²) + G   [J/mol·K]
//! ```
//!
//! `Φ(t)` is the tabulated `H°(T) − H°(298.15 K)`. The offsets are treated as
//! opaque data; nothing here checks that they are consistent with a
//! particular reference temperature.
//!
//! # Required coefficients
//!
//! | Property        | Labels                  |
//! |-----------------|-------------------------|
//! | heat capacity   | `A`–`E`                 |
//! | enthalpy        | `A`–`F`, `H`            |
//! | entropy         | `A`–`E`, `G`            |
//!
//! # Example
//!
//! ```
//! use twine_pure::correlation::{CoefficientSet, shomate};
//! use uom::si::{
//!     f64::ThermodynamicTemperature, molar_heat_capacity::joule_per_kelvin_mole,
//!     thermodynamic_temperature::kelvin,
//! };
//!
//! // Water vapor, 500–1700 K.
//! let water = CoefficientSet::from([
//!     ('A', 30.092),
//!     ('B', 6.832514),
//!     ('C', 6.793435),
//!     ('D', -2.53448),
//!     ('E', 0.082139),
//! ]);
//!
//! let cp = shomate::heat_capacity(&water, ThermodynamicTemperature::new::<kelvin>(1000.0))?;
//! assert!((cp.get::<joule_per_kelvin_mole>() - 41.27).abs() < 0.01);
//! # Ok::<(), twine_pure::correlation::CorrelationError>(())
//! ```

use uom::si::{
    f64::{MolarHeatCapacity, ThermodynamicTemperature},
    molar_energy::kilojoule_per_mole,
    molar_heat_capacity::joule_per_kelvin_mole,
    thermodynamic_temperature::kelvin,
};

use crate::support::units::{MolarEnthalpy, MolarEntropy};

use super::{
    CoefficientSet, CorrelationError,
    domain::{absolute_temperature, finite},
};

const HEAT_CAPACITY: [char; 5] = ['A', 'B', 'C', 'D', 'E'];
const ENTHALPY: [char; 7] = ['A', 'B', 'C', 'D', 'E', 'F', 'H'];
const ENTROPY: [char; 6] = ['A', 'B', 'C', 'D', 'E', 'G'];

/// Temperature at which NIST anchors the `F` and `H` offsets.
#[must_use]
pub fn standard_temperature() -> ThermodynamicTemperature {
    ThermodynamicTemperature::new::<kelvin>(298.15)
}

/// Computes ideal-gas molar heat capacity, `cp = A + B·t + C·t² + D·t³ + E/t²`.
///
/// # Errors
///
/// Returns [`CorrelationError::MissingCoefficient`] if any of `A`–`E` is
/// absent, or [`CorrelationError::Domain`] if the temperature is not strictly
/// positive.
pub fn heat_capacity(
    coeffs: &CoefficientSet,
    temperature: ThermodynamicTemperature,
) -> Result<MolarHeatCapacity, CorrelationError> {
    let [a, b, c, d, e] = coeffs.require(HEAT_CAPACITY)?;
    let t = reduced_temperature(temperature, "T")?;

    let cp = a + b * t + c * t.powi(2) + d * t.powi(3) + e / t.powi(2);

    Ok(MolarHeatCapacity::new::<joule_per_kelvin_mole>(finite(
        cp,
        "heat capacity",
    )?))
}

/// Computes ideal-gas molar enthalpy relative to `reference_temperature`.
///
/// Evaluates `1000·[Φ(t) − Φ(t_ref)]`, which expands to
/// `A·(t − t_ref) + B/2·(t² − t_ref²) + C/3·(t³ − t_ref³) + D/4·(t⁴ − t_ref⁴)
/// − E·(1/t − 1/t_ref)`, scaled from kJ/mol. The result is exactly zero when
/// `temperature == reference_temperature`.
///
/// # Errors
///
/// Returns [`CorrelationError::MissingCoefficient`] if any of `A`–`F` or `H`
/// is absent, or [`CorrelationError::Domain`] if either temperature is not
/// strictly positive.
pub fn enthalpy(
    coeffs: &CoefficientSet,
    temperature: ThermodynamicTemperature,
    reference_temperature: ThermodynamicTemperature,
) -> Result<MolarEnthalpy, CorrelationError> {
    let k = coeffs.require(ENTHALPY)?;
    let t = reduced_temperature(temperature, "T")?;
    let t_ref = reduced_temperature(reference_temperature, "T_ref")?;

    let h = finite(phi(k, t) - phi(k, t_ref), "enthalpy")?;

    Ok(MolarEnthalpy::new::<kilojoule_per_mole>(h))
}

/// Computes `H°(T) − H°(298.15 K)` in NIST's tabulated form, `1000·Φ(t)`.
///
/// # Errors
///
/// Same as [`enthalpy`].
pub fn standard_enthalpy(
    coeffs: &CoefficientSet,
    temperature: ThermodynamicTemperature,
) -> Result<MolarEnthalpy, CorrelationError> {
    let k = coeffs.require(ENTHALPY)?;
    let t = reduced_temperature(temperature, "T")?;

    Ok(MolarEnthalpy::new::<kilojoule_per_mole>(finite(
        phi(k, t),
        "enthalpy",
    )?))
}

/// Computes ideal-gas molar entropy,
/// `s = A·ln(t) + B·t + C/2·t² + D/3·t³ − E/(2·t²) + G`.
///
/// # Errors
///
/// Returns [`CorrelationError::MissingCoefficient`] if any of `A`–`E` or `G`
/// is absent, or [`CorrelationError::Domain`] if `t ≤ 0`.
pub fn entropy(
    coeffs: &CoefficientSet,
    temperature: ThermodynamicTemperature,
) -> Result<MolarEntropy, CorrelationError> {
    let [a, b, c, d, e, g] = coeffs.require(ENTROPY)?;
    let t = reduced_temperature(temperature, "T")?;

    let s = a * t.ln() + b * t + c / 2.0 * t.powi(2) + d / 3.0 * t.powi(3)
        - e / (2.0 * t.powi(2))
        + g;

    Ok(MolarEntropy::new::<joule_per_kelvin_mole>(finite(
        s, "entropy",
    )?))
}

fn reduced_temperature(
    temperature: ThermodynamicTemperature,
    name: &str,
) -> Result<f64, CorrelationError> {
    Ok(absolute_temperature(temperature, name)? / 1000.0)
}

/// `H°(t) − H°(298.15 K)` in kJ/mol.
fn phi([a, b, c, d, e, f, h]: [f64; 7], t: f64) -> f64 {
    a * t + b / 2.0 * t.powi(2) + c / 3.0 * t.powi(3) + d / 4.0 * t.powi(4) - e / t + f - h
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::molar_energy::joule_per_mole;

    fn water() -> CoefficientSet {
        CoefficientSet::from([
            ('A', 30.092),
            ('B', 6.832514),
            ('C', 6.793435),
            ('D', -2.53448),
            ('E', 0.082139),
            ('F', -250.881),
            ('G', 223.3967),
            ('H', -241.8264),
        ])
    }

    fn kelvins(value: f64) -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<kelvin>(value)
    }

    #[test]
    fn unit_leading_coefficient_gives_exactly_one() {
        let coeffs = CoefficientSet::from([
            ('A', 1.0),
            ('B', 0.0),
            ('C', 0.0),
            ('D', 0.0),
            ('E', 0.0),
        ]);

        let cp = heat_capacity(&coeffs, kelvins(1000.0)).unwrap();
        assert_eq!(cp.get::<joule_per_kelvin_mole>(), 1.0);
    }

    #[test]
    fn water_vapor_matches_nist_tables() -> Result<(), CorrelationError> {
        let water = water();

        // (T [K], cp [J/mol·K], H − H298 [kJ/mol], S [J/mol·K])
        let table = [
            (500.0, 35.22, 6.92, 206.53),
            (1000.0, 41.27, 26.00, 232.74),
            (1500.0, 47.11, 48.15, 250.62),
        ];

        for (temperature, cp, dh, s) in table {
            let t = kelvins(temperature);
            assert_relative_eq!(
                heat_capacity(&water, t)?.get::<joule_per_kelvin_mole>(),
                cp,
                epsilon = 0.01
            );
            assert_relative_eq!(
                standard_enthalpy(&water, t)?.get::<kilojoule_per_mole>(),
                dh,
                epsilon = 0.01
            );
            assert_relative_eq!(
                entropy(&water, t)?.get::<joule_per_kelvin_mole>(),
                s,
                epsilon = 0.01
            );
        }

        Ok(())
    }

    #[test]
    fn enthalpy_vanishes_at_reference_temperature() -> Result<(), CorrelationError> {
        let sets = [
            water(),
            water().with('F', 0.0).with('H', 12.5),
            CoefficientSet::from([
                ('A', -3.0),
                ('B', 1e3),
                ('C', -7.5),
                ('D', 0.25),
                ('E', -4.0),
                ('F', 100.0),
                ('H', -100.0),
            ]),
        ];

        for coeffs in &sets {
            for t_ref in [1e-3, 100.0, 298.15, 1234.5, 6000.0] {
                let h = enthalpy(coeffs, kelvins(t_ref), kelvins(t_ref))?;
                assert_eq!(h.get::<joule_per_mole>(), 0.0);
            }
        }

        Ok(())
    }

    #[test]
    fn enthalpy_is_difference_of_standard_enthalpies() -> Result<(), CorrelationError> {
        let water = water();
        let (t, t_ref) = (kelvins(1200.0), kelvins(600.0));

        let expected = standard_enthalpy(&water, t)? - standard_enthalpy(&water, t_ref)?;
        assert_relative_eq!(
            enthalpy(&water, t, t_ref)?.get::<joule_per_mole>(),
            expected.get::<joule_per_mole>(),
            max_relative = 1e-12
        );

        Ok(())
    }

    #[test]
    fn enthalpy_and_entropy_are_consistent_with_heat_capacity() -> Result<(), CorrelationError> {
        let water = water();
        let t_ref = standard_temperature();
        let delta = 1e-3;

        for temperature in [600.0, 900.0, 1400.0] {
            let cp = heat_capacity(&water, kelvins(temperature))?.get::<joule_per_kelvin_mole>();

            let h_hi = enthalpy(&water, kelvins(temperature + delta), t_ref)?;
            let h_lo = enthalpy(&water, kelvins(temperature - delta), t_ref)?;
            let dh_dt = (h_hi - h_lo).get::<joule_per_mole>() / (2.0 * delta);
            assert_relative_eq!(dh_dt, cp, max_relative = 1e-6);

            let s_hi = entropy(&water, kelvins(temperature + delta))?;
            let s_lo = entropy(&water, kelvins(temperature - delta))?;
            let ds_dt = (s_hi - s_lo).get::<joule_per_kelvin_mole>() / (2.0 * delta);
            assert_relative_eq!(ds_dt, cp / temperature, max_relative = 1e-6);
        }

        Ok(())
    }

    #[test]
    fn heat_capacity_needs_only_a_through_e() {
        let coeffs = CoefficientSet::from([
            ('A', 30.092),
            ('B', 6.832514),
            ('C', 6.793435),
            ('D', -2.53448),
            ('E', 0.082139),
        ]);
        let t = kelvins(800.0);

        assert!(heat_capacity(&coeffs, t).is_ok());
        assert_eq!(
            enthalpy(&coeffs, t, standard_temperature()),
            Err(CorrelationError::MissingCoefficient { label: 'F' })
        );
        assert_eq!(
            entropy(&coeffs, t),
            Err(CorrelationError::MissingCoefficient { label: 'G' })
        );
    }

    #[test]
    fn enthalpy_needs_h_but_not_g() {
        let without_h = water()
            .iter()
            .filter(|&(label, _)| label != 'H')
            .collect::<CoefficientSet>();
        let without_g = water()
            .iter()
            .filter(|&(label, _)| label != 'G')
            .collect::<CoefficientSet>();
        let t = kelvins(800.0);

        assert_eq!(
            enthalpy(&without_h, t, standard_temperature()),
            Err(CorrelationError::MissingCoefficient { label: 'H' })
        );
        assert!(enthalpy(&without_g, t, standard_temperature()).is_ok());
    }

    #[test]
    fn missing_coefficient_is_reported_before_domain() {
        let coeffs = CoefficientSet::from([('A', 1.0)]);
        assert_eq!(
            heat_capacity(&coeffs, kelvins(0.0)),
            Err(CorrelationError::MissingCoefficient { label: 'B' })
        );
    }

    #[test]
    fn entropy_rejects_non_positive_temperature() {
        let water = water();

        for temperature in [0.0, -1.0, -500.0] {
            assert!(matches!(
                entropy(&water, kelvins(temperature)),
                Err(CorrelationError::Domain { .. })
            ));
        }
    }

    #[test]
    fn enthalpy_rejects_zero_temperatures() {
        let water = water();

        assert!(matches!(
            enthalpy(&water, kelvins(0.0), standard_temperature()),
            Err(CorrelationError::Domain { .. })
        ));
        assert!(matches!(
            enthalpy(&water, kelvins(500.0), kelvins(0.0)),
            Err(CorrelationError::Domain { .. })
        ));
    }

    #[test]
    fn heat_capacity_rejects_nan_temperature() {
        assert!(matches!(
            heat_capacity(&water(), kelvins(f64::NAN)),
            Err(CorrelationError::Domain { .. })
        ));
    }
}
