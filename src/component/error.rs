use thiserror::Error;

use crate::correlation::{CorrelationError, rpp::SaturationTemperatureError};

/// Errors that may occur when evaluating a property of a [`PureComponent`].
///
/// [`PureComponent`]: super::PureComponent
#[derive(Debug, Error)]
pub enum ComponentError {
    /// No method is selected for the requested property group.
    #[error("`{component}` has no {group} method")]
    NoMethod {
        component: String,
        group: &'static str,
    },

    /// The selected method needs a parameter the component does not carry.
    #[error("`{component}` is missing parameter `{parameter}`")]
    MissingParameter {
        component: String,
        parameter: &'static str,
    },

    /// The underlying correlation could not be evaluated.
    #[error(transparent)]
    Correlation(#[from] CorrelationError),

    /// The saturation temperature solve failed.
    #[error(transparent)]
    SaturationTemperature(#[from] SaturationTemperatureError),
}

/// Errors that may occur when loading or querying a [`ComponentLibrary`].
///
/// [`ComponentLibrary`]: super::ComponentLibrary
#[derive(Debug, Error)]
pub enum LibraryError {
    /// The component document is not valid JSON or does not match the schema.
    #[error("invalid component data")]
    Parse(#[from] serde_json::Error),

    /// No component with this name is in the library.
    #[error("unknown component `{name}`")]
    UnknownComponent { name: String },
}
