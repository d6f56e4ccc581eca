//! Sine prior on `[0, π]`.

use ndarray::{Array1, ArrayView1};
use rand::{distributions::Uniform, Rng};

use super::distribution::{sample_array, PriorDistribution};
use super::error::PriorError;

/// Sine prior `p(x) ∝ sin(x)` on `[0, π]`, the isotropic prior for
/// inclination angles.
///
/// The CDF on `[0, π]` is `(1 - cos(x)) / 2`, so inverse-transform sampling
/// reduces to `acos(u)` with `u ~ U(-1, 1)`.
///
/// The log-probability returned is `sin(x)` itself, not `ln(sin(x))`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SinPrior;

impl SinPrior {
    pub fn new() -> Self {
        SinPrior
    }
}

impl PriorDistribution for SinPrior {
    fn draw_samples<R: Rng + ?Sized>(
        &self,
        num_samples: usize,
        rng: &mut R,
    ) -> Result<Array1<f64>, PriorError> {
        let cosine = Uniform::new_inclusive(-1.0, 1.0);
        Ok(sample_array(&cosine, num_samples, rng).mapv_into(f64::acos))
    }

    #[inline]
    fn lnprob(&self, x: f64) -> Result<f64, PriorError> {
        Ok(x.sin())
    }

    fn compute_lnprob(&self, element_array: ArrayView1<f64>) -> Result<Array1<f64>, PriorError> {
        Ok(element_array.mapv(f64::sin))
    }
}
