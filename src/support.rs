//! Supporting utilities shared by the property correlations.
//!
//! These modules are public because they are useful to callers assembling
//! their own property methods, but their APIs are not stable.

pub mod constraint;
pub mod units;
