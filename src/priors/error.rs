use thiserror::Error;

/// Error types that can occur while constructing or evaluating priors.
///
/// Out-of-support evaluation is not an error. It is reported as a
/// log-probability of `f64::NEG_INFINITY` so that samplers can reject the
/// proposal through the usual acceptance test.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PriorError {
    /// Construction parameters violate the invariants of the distribution.
    ///
    /// This can happen if:
    /// - A parameter is NaN or infinite
    /// - A standard deviation is not strictly positive
    /// - A lower bound is not strictly below the upper bound
    /// - A Jeffreys bound is not strictly positive
    #[error("Invalid parameter for {prior} prior: {message}")]
    InvalidParameter { prior: String, message: String },

    #[error("{0} is not implemented")]
    NotImplemented(String),

    #[error("Number of parameters does not match number of priors: params={params}, priors={priors}")]
    LengthMismatch { params: usize, priors: usize },

    #[error("Failed to parse prior: {0}")]
    Parse(String),
}

impl PriorError {
    pub(crate) fn invalid(prior: &str, message: impl Into<String>) -> Self {
        PriorError::InvalidParameter {
            prior: prior.to_string(),
            message: message.into(),
        }
    }
}
