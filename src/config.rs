//! Named prior tables for a fit.
//!
//! A `PriorConfig` fixes the order of the fit parameters and the prior of each
//! one. In JSON it looks like this:
//!
//! ```json
//! {
//!   "priors": [
//!     { "name": "sma", "prior": "Jeffreys(0.001, 10000)" },
//!     { "name": "ecc", "prior": "Uniform(0, 1)" },
//!     { "name": "inc", "prior": "Sin()" }
//!   ]
//! }
//! ```

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::priors::{all_lnpriors, Prior, PriorError};

/// The prior of a single named fit parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterPrior {
    pub name: String,
    pub prior: Prior,
}

impl ParameterPrior {
    pub fn new(name: impl Into<String>, prior: impl Into<Prior>) -> Self {
        Self {
            name: name.into(),
            prior: prior.into(),
        }
    }
}

/// Ordered list of parameter priors. Entry order defines parameter order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriorConfig {
    pub priors: Vec<ParameterPrior>,
}

impl PriorConfig {
    pub fn new(priors: Vec<ParameterPrior>) -> Self {
        Self { priors }
    }

    /// Checks that every parameter name is non-empty and unique.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for entry in &self.priors {
            if entry.name.trim().is_empty() {
                return Err(ConfigError::EmptyName);
            }
            if !seen.insert(entry.name.as_str()) {
                return Err(ConfigError::DuplicateName(entry.name.clone()));
            }
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.priors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.priors.is_empty()
    }

    /// Parameter names in fit order.
    pub fn names(&self) -> Vec<&str> {
        self.priors.iter().map(|p| p.name.as_str()).collect()
    }

    /// Priors in fit order, ready for [`all_lnpriors`] or [`crate::priors::draw_walkers`].
    pub fn priors(&self) -> Vec<Prior> {
        self.priors.iter().map(|p| p.prior.clone()).collect()
    }

    pub fn get(&self, name: &str) -> Option<&Prior> {
        self.priors
            .iter()
            .find(|p| p.name == name)
            .map(|p| &p.prior)
    }

    /// Total log-prior of a parameter vector ordered like this config.
    pub fn lnprior(&self, params: &[f64]) -> Result<f64, PriorError> {
        all_lnpriors(params, &self.priors())
    }
}

#[derive(Debug, thiserror::Error, Clone, PartialEq)]
pub enum ConfigError {
    /// Indicates that a parameter name is empty or only whitespace.
    #[error("Parameter names must not be empty")]
    EmptyName,
    /// Indicates that the same parameter name appears more than once.
    #[error("Duplicate parameter name: {0}")]
    DuplicateName(String),
}
