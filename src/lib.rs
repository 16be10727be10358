//! # Twine Pure
//!
//! Pure-component thermophysical property correlations for
//! [Twine](https://github.com/isentropic-dev/twine).
//!
//! ## Crate layout
//!
//! - [`correlation`]: Stateless closed-form correlations (Shomate, Antoine,
//!   RPP, Perry's) evaluated from a [`correlation::CoefficientSet`].
//! - [`component`]: Pure components that bind parameter data to a method per
//!   property group, and a JSON-loadable [`component::ComponentLibrary`].
//! - [`support`]: Supporting utilities used by the correlations.
//!
//! ## Example
//!
//! ```
//! use twine_pure::correlation::{CoefficientSet, shomate};
//! use uom::si::{
//!     f64::ThermodynamicTemperature, molar_heat_capacity::joule_per_kelvin_mole,
//!     thermodynamic_temperature::kelvin,
//! };
//!
//! // NIST water vapor, 500–1700 K.
//! let water = CoefficientSet::from([
//!     ('A', 30.09200),
//!     ('B', 6.832514),
//!     ('C', 6.793435),
//!     ('D', -2.534480),
//!     ('E', 0.082139),
//! ]);
//!
//! let cp = shomate::heat_capacity(&water, ThermodynamicTemperature::new::<kelvin>(1000.0))?;
//! assert!((cp.get::<joule_per_kelvin_mole>() - 41.27).abs() < 0.01);
//! # Ok::<(), twine_pure::correlation::CorrelationError>(())
//! ```
//!
//! ## Utility code lifecycle
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.

pub mod component;
pub mod correlation;
pub mod support;
