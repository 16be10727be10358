//! Closed-form pure-component property correlations.
//!
//! Every function in this module is a pure, deterministic evaluation of
//! `(coefficients, temperature[, reference]) -> property`. Nothing is cached
//! and nothing is mutated, so any number of callers may evaluate correlations
//! concurrently.
//!
//! Coefficients are supplied as a [`CoefficientSet`] keyed by single-character
//! labels. Each function checks for the labels it needs before doing any
//! arithmetic and reports [`CorrelationError::MissingCoefficient`] for the
//! first one that is absent. Inputs that make a closed form undefined, such
//! as a zero temperature under a logarithm, are reported as
//! [`CorrelationError::Domain`] rather than as `NaN`.
//!
//! # Methods
//!
//! - [`shomate`]: NIST ideal-gas heat capacity, enthalpy and entropy.
//! - [`antoine`]: Antoine saturation pressure and its inverse.
//! - [`rpp`]: Reid, Prausnitz & Poling ideal-gas polynomial and Wagner
//!   saturation pressure.
//! - [`perrys`]: Perry's liquid heat capacity, enthalpy, entropy and density.

mod coefficients;
mod critical;
mod domain;
mod error;

pub mod antoine;
pub mod perrys;
pub mod rpp;
pub mod shomate;

pub use coefficients::CoefficientSet;
pub use critical::CriticalPoint;
pub use error::CorrelationError;
