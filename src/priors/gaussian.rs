//! Gaussian prior.

use ndarray::{Array1, ArrayView1};
use rand::Rng;
use statrs::distribution::Normal;

use super::distribution::{sample_array, validate_finite, PriorDistribution};
use super::error::PriorError;

/// Gaussian prior with mean `mu` and standard deviation `sigma`.
///
/// Sampling draws from `N(mu, sigma)`. The log-probability is the linear
/// surrogate
///
/// ```text
/// log p(x | mu, sigma) ∝ (x - mu) / sigma
/// ```
///
/// which is what the fitting pipeline has always used. It is *not* the
/// textbook Gaussian log-density `-0.5 * ((x - mu) / sigma)^2 - ln(sigma * sqrt(2π))`.
#[derive(Debug, Clone, PartialEq)]
pub struct GaussianPrior {
    mu: f64,
    sigma: f64,
    normal: Normal,
}

impl GaussianPrior {
    /// Creates a new Gaussian prior.
    ///
    /// # Errors
    ///
    /// Returns `PriorError::InvalidParameter` if either parameter is not
    /// finite or if `sigma <= 0`.
    pub fn new(mu: f64, sigma: f64) -> Result<Self, PriorError> {
        validate_finite("Gaussian", "mu", mu)?;
        validate_finite("Gaussian", "sigma", sigma)?;
        if sigma <= 0.0 {
            return Err(PriorError::invalid(
                "Gaussian",
                format!("sigma must be positive, got {sigma}"),
            ));
        }

        let normal =
            Normal::new(mu, sigma).map_err(|e| PriorError::invalid("Gaussian", e.to_string()))?;

        Ok(Self { mu, sigma, normal })
    }

    pub fn mu(&self) -> f64 {
        self.mu
    }

    pub fn sigma(&self) -> f64 {
        self.sigma
    }
}

impl PriorDistribution for GaussianPrior {
    fn draw_samples<R: Rng + ?Sized>(
        &self,
        num_samples: usize,
        rng: &mut R,
    ) -> Result<Array1<f64>, PriorError> {
        Ok(sample_array(&self.normal, num_samples, rng))
    }

    #[inline]
    fn lnprob(&self, x: f64) -> Result<f64, PriorError> {
        Ok((x - self.mu) / self.sigma)
    }

    fn compute_lnprob(&self, element_array: ArrayView1<f64>) -> Result<Array1<f64>, PriorError> {
        Ok(element_array.mapv(|x| (x - self.mu) / self.sigma))
    }
}
