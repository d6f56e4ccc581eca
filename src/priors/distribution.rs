//! The capability contract shared by every prior distribution.
//!
//! A prior has to do two things for the orbit fitter:
//!
//! 1. **Draw samples** to initialize or perturb sampler walkers.
//! 2. **Evaluate log-probabilities** to weight proposals in the posterior.
//!
//! The log-probabilities returned here are allowed to be unnormalized. Callers
//! only compare them against each other in acceptance ratios, so constant
//! offsets are irrelevant. Values outside the support of a distribution map to
//! `f64::NEG_INFINITY`.
//!
//! # Randomness
//!
//! Sampling never touches a process-wide generator. The caller hands in a
//! `rand::Rng` handle, which makes seeded, reproducible draws trivial:
//!
//! ```rust,ignore
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let samples = prior.draw_samples(100, &mut rng)?;
//! ```

use ndarray::{Array1, ArrayView1};
use rand::{distributions::Distribution, Rng};

use super::error::PriorError;

/// A prior probability distribution over a single real-valued parameter.
///
/// # Type Requirements
///
/// - `Clone`: priors are cheap value objects that samplers copy freely
/// - `Send + Sync`: priors are shared read-only across parallel chains
pub trait PriorDistribution: Clone + Send + Sync {
    /// Draws `num_samples` independent samples from the distribution.
    ///
    /// # Arguments
    ///
    /// * `num_samples` - Number of samples to draw. Zero yields an empty array.
    /// * `rng` - Random source owned by the caller
    ///
    /// # Returns
    ///
    /// An array of length `num_samples`, or an error if the prior cannot be
    /// sampled.
    fn draw_samples<R: Rng + ?Sized>(
        &self,
        num_samples: usize,
        rng: &mut R,
    ) -> Result<Array1<f64>, PriorError>;

    /// Computes the (unnormalized) log-probability of a single value.
    fn lnprob(&self, x: f64) -> Result<f64, PriorError>;

    /// Computes the (unnormalized) log-probability of every element of an array.
    ///
    /// The output has the same length as the input. Elements outside the
    /// support map to `f64::NEG_INFINITY`.
    fn compute_lnprob(&self, element_array: ArrayView1<f64>) -> Result<Array1<f64>, PriorError> {
        element_array
            .iter()
            .map(|&x| self.lnprob(x))
            .collect::<Result<Array1<f64>, PriorError>>()
    }
}

/// Collects `num_samples` draws of `dist` into an array.
pub(crate) fn sample_array<D, R>(dist: &D, num_samples: usize, rng: &mut R) -> Array1<f64>
where
    D: Distribution<f64>,
    R: Rng + ?Sized,
{
    (0..num_samples).map(|_| dist.sample(rng)).collect()
}

/// Log-probability of a bounded flat density: zero inside `[minval, maxval]`,
/// negative infinity outside. Both bounds are inclusive.
#[inline]
pub(crate) fn bounded_lnprob(x: f64, minval: f64, maxval: f64) -> f64 {
    if x > maxval || x < minval {
        f64::NEG_INFINITY
    } else {
        0.0
    }
}

/// Rejects NaN and infinite construction parameters.
pub(crate) fn validate_finite(prior: &str, name: &str, value: f64) -> Result<(), PriorError> {
    if !value.is_finite() {
        return Err(PriorError::invalid(
            prior,
            format!("{name} must be finite, got {value}"),
        ));
    }
    Ok(())
}

/// Rejects bounds that do not satisfy `minval < maxval` or whose width
/// `maxval - minval` overflows.
pub(crate) fn validate_bounds(prior: &str, minval: f64, maxval: f64) -> Result<(), PriorError> {
    validate_finite(prior, "minval", minval)?;
    validate_finite(prior, "maxval", maxval)?;
    if minval >= maxval {
        return Err(PriorError::invalid(
            prior,
            format!("minval must be less than maxval, got [{minval}, {maxval}]"),
        ));
    }
    if !(maxval - minval).is_finite() {
        return Err(PriorError::invalid(
            prior,
            format!("width of [{minval}, {maxval}] is not finite"),
        ));
    }
    Ok(())
}
