use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is strictly positive.
///
/// Absolute temperatures, critical constants and pressures handed to the
/// correlations all carry this constraint.
///
/// # Examples
///
/// ```
/// use twine_pure::support::constraint::StrictlyPositive;
/// use uom::si::{
///     f64::{Pressure, ThermodynamicTemperature},
///     pressure::pascal,
///     thermodynamic_temperature::kelvin,
/// };
///
/// let p = StrictlyPositive::new(Pressure::new::<pascal>(101_325.0)).unwrap();
/// assert_eq!(p.into_inner().get::<pascal>(), 101_325.0);
///
/// // `ThermodynamicTemperature` has no `Zero`; check its kelvin value instead.
/// let t = ThermodynamicTemperature::new::<kelvin>(298.15);
/// let t_k = StrictlyPositive::new(t.get::<kelvin>()).unwrap();
/// assert_eq!(t_k.into_inner(), 298.15);
///
/// assert!(StrictlyPositive::new(0.0).is_err());
/// assert!(StrictlyPositive::new(-1.0).is_err());
/// assert!(StrictlyPositive::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StrictlyPositive;

impl StrictlyPositive {
    /// Constructs a [`Constrained<T, StrictlyPositive>`] if the value is strictly positive.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is zero, negative, or not a number (`NaN`).
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> Result<Constrained<T, StrictlyPositive>, ConstraintError> {
        Constrained::<T, StrictlyPositive>::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for StrictlyPositive {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater) => Ok(()),
            Some(Ordering::Equal) => Err(ConstraintError::Zero),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}
