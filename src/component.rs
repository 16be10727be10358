//! Pure-component property evaluation.
//!
//! A [`PureComponent`] binds one component's parameter data to a choice of
//! correlation for each property group:
//!
//! | Group       | Methods                                      |
//! |-------------|----------------------------------------------|
//! | Ideal gas   | [`IdealGasMethod::Nist`], [`IdealGasMethod::Rpp`] |
//! | Saturation  | [`SaturationMethod::Antoine`], [`SaturationMethod::Rpp`] |
//! | Liquid      | [`LiquidMethod::Perrys`]                     |
//!
//! A group with no method selected reports [`ComponentError::NoMethod`] when
//! one of its properties is requested. Parameters are checked lazily, so a
//! component only needs the data for the properties it is asked for.
//!
//! Components are usually obtained from a [`ComponentLibrary`], either the
//! built-in set or one loaded from JSON.

mod error;
mod library;
mod method;
mod parameters;
mod pure;
mod reference;

pub use error::{ComponentError, LibraryError};
pub use library::ComponentLibrary;
pub use method::{IdealGasMethod, LiquidMethod, Methods, SaturationMethod};
pub use parameters::ComponentParameters;
pub use pure::PureComponent;
pub use reference::ReferenceState;
