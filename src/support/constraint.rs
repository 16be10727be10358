//! Type-level numeric constraints.
//!
//! Property correlations are only defined over part of the real line: absolute
//! temperatures must be strictly positive, an Antoine denominator must not
//! vanish, and so on. This module expresses those requirements as marker types
//! used with the generic [`Constrained<T, C>`] wrapper.
//!
//! # Provided constraints
//!
//! - [`StrictlyPositive`]: Greater than zero
//! - [`NonZero`]: Not equal to zero
//!
//! Both markers reject `NaN`, so a value that passes a check is always a
//! number.

mod non_zero;
mod strictly_positive;

use std::marker::PhantomData;

use thiserror::Error;

pub use non_zero::NonZero;
pub use strictly_positive::StrictlyPositive;

/// A trait for enforcing numeric invariants at construction time.
pub trait Constraint<T> {
    /// Checks that the given value satisfies this constraint.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if the value does not satisfy the constraint.
    fn check(value: &T) -> Result<(), ConstraintError>;
}

/// An error returned when a [`Constraint`] is violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConstraintError {
    #[error("value must not be negative")]
    Negative,
    #[error("value must not be zero")]
    Zero,
    #[error("value is not a number")]
    NotANumber,
}

/// A result type alias to use with [`Constraint`].
pub type ConstraintResult<T, E = ConstraintError> = Result<T, E>;

/// A value that is known to satisfy the constraint `C`.
///
/// # Example
///
/// ```
/// use twine_pure::support::constraint::{Constrained, StrictlyPositive};
/// use uom::si::{f64::Pressure, pressure::bar};
///
/// let p = Constrained::<_, StrictlyPositive>::new(Pressure::new::<bar>(1.0)).unwrap();
/// assert_eq!(p.into_inner().get::<bar>(), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Constrained<T, C: Constraint<T>> {
    value: T,
    _marker: PhantomData<C>,
}

impl<T, C: Constraint<T>> Constrained<T, C> {
    /// Constructs a new constrained value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value does not satisfy the constraint.
    pub fn new(value: T) -> Result<Self, ConstraintError> {
        C::check(&value)?;
        Ok(Self {
            value,
            _marker: PhantomData,
        })
    }

    /// Consumes the wrapper and returns the inner value.
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T, C: Constraint<T>> AsRef<T> for Constrained<T, C> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}
