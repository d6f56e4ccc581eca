//! Jeffreys (log-uniform) prior.

use ndarray::{Array1, ArrayView1};
use rand::Rng;
use statrs::distribution::Uniform;

use super::distribution::{bounded_lnprob, sample_array, validate_bounds, PriorDistribution};
use super::error::PriorError;

/// Jeffreys prior `p(x) ∝ 1/x` on `[minval, maxval]`.
///
/// Without finite bounds the density has a singularity at zero and infinite
/// integrated probability, so both bounds are required and must be strictly
/// positive.
///
/// Sampling uses inverse-transform sampling: draw uniformly in
/// `[ln(minval), ln(maxval)]` and exponentiate. The log-probability is zero
/// inside the bounds and negative infinity outside (the `-ln(x)` term is
/// dropped).
#[derive(Debug, Clone, PartialEq)]
pub struct JeffreysPrior {
    minval: f64,
    maxval: f64,
    logmin: f64,
    logmax: f64,
    log_uniform: Uniform,
}

impl JeffreysPrior {
    /// Creates a new Jeffreys prior on `[minval, maxval]`.
    ///
    /// # Errors
    ///
    /// Returns `PriorError::InvalidParameter` unless `0 < minval < maxval`
    /// and both bounds are finite.
    pub fn new(minval: f64, maxval: f64) -> Result<Self, PriorError> {
        validate_bounds("Jeffreys", minval, maxval)?;
        if minval <= 0.0 {
            return Err(PriorError::invalid(
                "Jeffreys",
                format!("bounds must be positive, got minval={minval}"),
            ));
        }

        let logmin = minval.ln();
        let logmax = maxval.ln();
        let log_uniform =
            Uniform::new(logmin, logmax).map_err(|e| PriorError::invalid("Jeffreys", e.to_string()))?;

        Ok(Self {
            minval,
            maxval,
            logmin,
            logmax,
            log_uniform,
        })
    }

    pub fn minval(&self) -> f64 {
        self.minval
    }

    pub fn maxval(&self) -> f64 {
        self.maxval
    }

    pub fn logmin(&self) -> f64 {
        self.logmin
    }

    pub fn logmax(&self) -> f64 {
        self.logmax
    }
}

impl PriorDistribution for JeffreysPrior {
    fn draw_samples<R: Rng + ?Sized>(
        &self,
        num_samples: usize,
        rng: &mut R,
    ) -> Result<Array1<f64>, PriorError> {
        // sample in log space, then map back to linear space
        let samples = sample_array(&self.log_uniform, num_samples, rng).mapv_into(f64::exp);

        // exp(ln(x)) can land a rounding error outside the bounds
        Ok(samples.mapv_into(|x| x.clamp(self.minval, self.maxval)))
    }

    #[inline]
    fn lnprob(&self, x: f64) -> Result<f64, PriorError> {
        Ok(bounded_lnprob(x, self.minval, self.maxval))
    }

    fn compute_lnprob(&self, element_array: ArrayView1<f64>) -> Result<Array1<f64>, PriorError> {
        Ok(element_array.mapv(|x| bounded_lnprob(x, self.minval, self.maxval)))
    }
}
