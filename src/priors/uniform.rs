//! Bounded uniform prior.

use ndarray::{Array1, ArrayView1};
use rand::Rng;
use statrs::distribution::Uniform;

use super::distribution::{bounded_lnprob, sample_array, validate_bounds, PriorDistribution};
use super::error::PriorError;

/// Uniform prior `p(x) ∝ const` on `[minval, maxval]`.
#[derive(Debug, Clone, PartialEq)]
pub struct UniformPrior {
    minval: f64,
    maxval: f64,
    uniform: Uniform,
}

impl UniformPrior {
    /// Creates a new uniform prior on `[minval, maxval]`.
    ///
    /// # Errors
    ///
    /// Returns `PriorError::InvalidParameter` unless both bounds are finite
    /// and `minval < maxval`.
    pub fn new(minval: f64, maxval: f64) -> Result<Self, PriorError> {
        validate_bounds("Uniform", minval, maxval)?;
        let uniform =
            Uniform::new(minval, maxval).map_err(|e| PriorError::invalid("Uniform", e.to_string()))?;

        Ok(Self {
            minval,
            maxval,
            uniform,
        })
    }

    pub fn minval(&self) -> f64 {
        self.minval
    }

    pub fn maxval(&self) -> f64 {
        self.maxval
    }
}

impl PriorDistribution for UniformPrior {
    fn draw_samples<R: Rng + ?Sized>(
        &self,
        num_samples: usize,
        rng: &mut R,
    ) -> Result<Array1<f64>, PriorError> {
        Ok(sample_array(&self.uniform, num_samples, rng))
    }

    #[inline]
    fn lnprob(&self, x: f64) -> Result<f64, PriorError> {
        Ok(bounded_lnprob(x, self.minval, self.maxval))
    }

    fn compute_lnprob(&self, element_array: ArrayView1<f64>) -> Result<Array1<f64>, PriorError> {
        Ok(element_array.mapv(|x| bounded_lnprob(x, self.minval, self.maxval)))
    }
}
