use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is not equal to zero.
///
/// Used for denominators such as the Antoine term `T + C`.
///
/// # Examples
///
/// ```
/// use twine_pure::support::constraint::NonZero;
///
/// assert_eq!(NonZero::new(-50.0).unwrap().into_inner(), -50.0);
/// assert!(NonZero::new(0.0).is_err());
/// assert!(NonZero::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NonZero;

impl NonZero {
    /// Constructs a [`Constrained<T, NonZero>`] if the value is not zero.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is zero or not a number (`NaN`).
    pub fn new<T: PartialOrd + Zero>(value: T) -> Result<Constrained<T, NonZero>, ConstraintError> {
        Constrained::<T, NonZero>::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for NonZero {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater | Ordering::Less) => Ok(()),
            Some(Ordering::Equal) => Err(ConstraintError::Zero),
            None => Err(ConstraintError::NotANumber),
        }
    }
}
