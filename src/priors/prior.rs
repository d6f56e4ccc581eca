//! A closed set of prior distributions with string parsing support.
//!
//! The `Prior` enum lets a sampler hold one heterogeneous, ordered list of
//! priors (one per fit parameter) while still dispatching statically to the
//! concrete distributions.
//!
//! # String Format
//!
//! Priors can be specified with a parentheses format and case-insensitive
//! names. Both full names and abbreviated forms are supported:
//!
//! - Gaussian priors: `Gaussian(mu, sigma)`, `Normal(mu, sigma)` or `N(mu, sigma)`
//! - Jeffreys priors: `Jeffreys(min, max)`, `LogUniform(min, max)` or `J(min, max)`
//! - Uniform priors: `Uniform(min, max)` or `U(min, max)`
//! - Sine priors: `Sin()` or `Sine()`
//! - Linear priors: `Linear(m, b)`
//!
//! Whitespace is ignored and parameters may use scientific notation. The
//! `Display` implementation writes the canonical form, which parses back to
//! an equal prior. This is also the serde representation, so prior tables can
//! be written as plain strings in configuration files.

use std::{fmt, str::FromStr};

use lazy_static::lazy_static;
use ndarray::{Array1, ArrayView1};
use rand::Rng;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::{
    distribution::PriorDistribution, error::PriorError, gaussian::GaussianPrior,
    jeffreys::JeffreysPrior, linear::LinearPrior, sin::SinPrior, uniform::UniformPrior,
};

lazy_static! {
    static ref PRIOR_REGEX: Regex = Regex::new(r"^([a-zA-Z]+)\s*\(\s*([^)]*)\s*\)$")
        .expect("prior regex is valid");
}

/// Enumeration of the supported prior distributions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Prior {
    /// Gaussian prior for parameters with a known estimate and uncertainty.
    Gaussian(GaussianPrior),
    /// Log-uniform prior for scale parameters spanning orders of magnitude,
    /// such as semi-major axes.
    Jeffreys(JeffreysPrior),
    /// Flat prior over a bounded interval.
    Uniform(UniformPrior),
    /// Isotropic prior for inclination angles on `[0, π]`.
    Sin(SinPrior),
    /// Placeholder without sampling or evaluation support.
    Linear(LinearPrior),
}

/// Intermediate representation of a parsed prior string: lowercase name plus
/// the numeric parameters in order.
#[derive(Debug)]
struct PriorSpec {
    name: String,
    params: Vec<f64>,
}

impl Prior {
    pub const AVAILABLE_PRIORS: [&'static str; 5] =
        ["gaussian", "jeffreys", "uniform", "sin", "linear"];

    /// Name of the variant as used in the string format.
    pub fn name(&self) -> &'static str {
        match self {
            Prior::Gaussian(_) => "Gaussian",
            Prior::Jeffreys(_) => "Jeffreys",
            Prior::Uniform(_) => "Uniform",
            Prior::Sin(_) => "Sin",
            Prior::Linear(_) => "Linear",
        }
    }

    /// Split a prior string into its name and parameter list.
    ///
    /// # Errors
    ///
    /// - Missing or mismatched parentheses
    /// - Parameters that are not floating-point numbers
    fn parse_spec(s: &str) -> Result<PriorSpec, PriorError> {
        let s = s.trim();

        let captures = PRIOR_REGEX.captures(s).ok_or_else(|| {
            PriorError::Parse(format!(
                "Invalid format: '{s}'. Use 'PriorName(param1, param2, ...)'"
            ))
        })?;

        let name = captures[1].to_lowercase();
        let params_str = &captures[2];
        let params = if params_str.trim().is_empty() {
            Vec::new()
        } else {
            Self::parse_parameters(params_str)?
        };

        Ok(PriorSpec { name, params })
    }

    fn parse_parameters(params_str: &str) -> Result<Vec<f64>, PriorError> {
        params_str
            .split(',')
            .map(|p| p.trim().parse::<f64>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| PriorError::Parse(format!("Failed to parse parameters '{params_str}': {e}")))
    }

    /// Construct a validated `Prior` from a parsed specification.
    ///
    /// Parameter values are validated by the constructors of the concrete
    /// priors, so the errors here are the same as for direct construction.
    fn from_spec(spec: PriorSpec) -> Result<Self, PriorError> {
        let PriorSpec { name, params } = spec;
        match name.as_str() {
            "gaussian" | "normal" | "n" => {
                Self::validate_param_count(&name, &params, 2)?;
                Ok(Prior::Gaussian(GaussianPrior::new(params[0], params[1])?))
            }
            "jeffreys" | "loguniform" | "j" => {
                Self::validate_param_count(&name, &params, 2)?;
                Ok(Prior::Jeffreys(JeffreysPrior::new(params[0], params[1])?))
            }
            "uniform" | "u" => {
                Self::validate_param_count(&name, &params, 2)?;
                Ok(Prior::Uniform(UniformPrior::new(params[0], params[1])?))
            }
            "sin" | "sine" => {
                Self::validate_param_count(&name, &params, 0)?;
                Ok(Prior::Sin(SinPrior::new()))
            }
            "linear" => {
                Self::validate_param_count(&name, &params, 2)?;
                Ok(Prior::Linear(LinearPrior::new(params[0], params[1])?))
            }
            _ => Err(PriorError::Parse(format!(
                "Unknown prior type: '{name}'. Available priors: {}",
                Self::AVAILABLE_PRIORS.join(", ")
            ))),
        }
    }

    fn validate_param_count(name: &str, params: &[f64], expected: usize) -> Result<(), PriorError> {
        if params.len() != expected {
            return Err(PriorError::Parse(format!(
                "{} prior requires exactly {} parameter{}, got {}",
                name,
                expected,
                if expected == 1 { "" } else { "s" },
                params.len()
            )));
        }
        Ok(())
    }
}

impl PriorDistribution for Prior {
    fn draw_samples<R: Rng + ?Sized>(
        &self,
        num_samples: usize,
        rng: &mut R,
    ) -> Result<Array1<f64>, PriorError> {
        match self {
            Prior::Gaussian(prior) => prior.draw_samples(num_samples, rng),
            Prior::Jeffreys(prior) => prior.draw_samples(num_samples, rng),
            Prior::Uniform(prior) => prior.draw_samples(num_samples, rng),
            Prior::Sin(prior) => prior.draw_samples(num_samples, rng),
            Prior::Linear(prior) => prior.draw_samples(num_samples, rng),
        }
    }

    #[inline(always)]
    fn lnprob(&self, x: f64) -> Result<f64, PriorError> {
        match self {
            Prior::Gaussian(prior) => prior.lnprob(x),
            Prior::Jeffreys(prior) => prior.lnprob(x),
            Prior::Uniform(prior) => prior.lnprob(x),
            Prior::Sin(prior) => prior.lnprob(x),
            Prior::Linear(prior) => prior.lnprob(x),
        }
    }

    fn compute_lnprob(&self, element_array: ArrayView1<f64>) -> Result<Array1<f64>, PriorError> {
        match self {
            Prior::Gaussian(prior) => prior.compute_lnprob(element_array),
            Prior::Jeffreys(prior) => prior.compute_lnprob(element_array),
            Prior::Uniform(prior) => prior.compute_lnprob(element_array),
            Prior::Sin(prior) => prior.compute_lnprob(element_array),
            Prior::Linear(prior) => prior.compute_lnprob(element_array),
        }
    }
}

impl From<GaussianPrior> for Prior {
    fn from(prior: GaussianPrior) -> Self {
        Prior::Gaussian(prior)
    }
}

impl From<JeffreysPrior> for Prior {
    fn from(prior: JeffreysPrior) -> Self {
        Prior::Jeffreys(prior)
    }
}

impl From<UniformPrior> for Prior {
    fn from(prior: UniformPrior) -> Self {
        Prior::Uniform(prior)
    }
}

impl From<SinPrior> for Prior {
    fn from(prior: SinPrior) -> Self {
        Prior::Sin(prior)
    }
}

impl From<LinearPrior> for Prior {
    fn from(prior: LinearPrior) -> Self {
        Prior::Linear(prior)
    }
}

impl fmt::Display for Prior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Prior::Gaussian(p) => write!(f, "Gaussian({}, {})", p.mu(), p.sigma()),
            Prior::Jeffreys(p) => write!(f, "Jeffreys({}, {})", p.minval(), p.maxval()),
            Prior::Uniform(p) => write!(f, "Uniform({}, {})", p.minval(), p.maxval()),
            Prior::Sin(_) => write!(f, "Sin()"),
            Prior::Linear(p) => write!(f, "Linear({}, {})", p.m(), p.b()),
        }
    }
}

impl FromStr for Prior {
    type Err = PriorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let spec = Self::parse_spec(s)?;
        let prior = Self::from_spec(spec)?;
        log::debug!("Parsed prior '{}' as {prior}", s.trim());
        Ok(prior)
    }
}

impl TryFrom<String> for Prior {
    type Error = PriorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Prior> for String {
    fn from(prior: Prior) -> Self {
        prior.to_string()
    }
}
