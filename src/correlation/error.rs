use thiserror::Error;

/// Errors that may occur when evaluating a property correlation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CorrelationError {
    /// A coefficient required by the requested property is absent.
    ///
    /// Reported before any arithmetic is done.
    #[error("missing coefficient `{label}`")]
    MissingCoefficient { label: char },

    /// The inputs make the closed-form expression undefined.
    ///
    /// For example, a zero temperature under a reciprocal or logarithm, or a
    /// vanishing Antoine denominator `T + C`.
    #[error("out of domain: {context}")]
    Domain { context: String },
}

impl CorrelationError {
    pub(crate) fn domain(context: impl Into<String>) -> Self {
        Self::Domain {
            context: context.into(),
        }
    }
}
