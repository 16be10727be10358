//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for all physical units. Pure-component correlations
//! report molar properties, and [`uom`] has no dedicated molar enthalpy or
//! molar entropy quantities, so they are defined here as dimensional aliases.
//!
//! ```
//! use twine_pure::support::units::MolarEnthalpy;
//! use uom::si::molar_energy::{joule_per_mole, kilojoule_per_mole};
//!
//! let h = MolarEnthalpy::new::<kilojoule_per_mole>(-241.826);
//! assert!((h.get::<joule_per_mole>() + 241_826.0).abs() < 1e-9);
//! ```

mod quantities;

pub use quantities::{MolarEnthalpy, MolarEntropy, PressureTemperatureSlope};
