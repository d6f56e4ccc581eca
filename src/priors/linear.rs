//! Linear prior placeholder.

use ndarray::{Array1, ArrayView1};
use rand::Rng;

use super::distribution::{validate_finite, PriorDistribution};
use super::error::PriorError;

/// Linear prior `p(x) ∝ m*x + b`.
///
/// Only the parameters are stored. No support interval or normalization has
/// been settled for this density, so sampling and evaluation both return
/// `PriorError::NotImplemented` instead of a value that could pass for a
/// real log-probability.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearPrior {
    m: f64,
    b: f64,
}

impl LinearPrior {
    pub fn new(m: f64, b: f64) -> Result<Self, PriorError> {
        validate_finite("Linear", "m", m)?;
        validate_finite("Linear", "b", b)?;
        Ok(Self { m, b })
    }

    pub fn m(&self) -> f64 {
        self.m
    }

    pub fn b(&self) -> f64 {
        self.b
    }

    fn not_implemented(operation: &str) -> PriorError {
        PriorError::NotImplemented(format!("LinearPrior::{operation}"))
    }
}

impl PriorDistribution for LinearPrior {
    fn draw_samples<R: Rng + ?Sized>(
        &self,
        _num_samples: usize,
        _rng: &mut R,
    ) -> Result<Array1<f64>, PriorError> {
        Err(Self::not_implemented("draw_samples"))
    }

    fn lnprob(&self, _x: f64) -> Result<f64, PriorError> {
        Err(Self::not_implemented("lnprob"))
    }

    fn compute_lnprob(&self, _element_array: ArrayView1<f64>) -> Result<Array1<f64>, PriorError> {
        Err(Self::not_implemented("compute_lnprob"))
    }
}

#[cfg(test)]
mod tests {
    use ndarray::array;
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    #[test]
    fn test_operations_are_not_implemented() {
        let prior = LinearPrior::new(2.0, 1.0).unwrap();
        let mut rng = StdRng::seed_from_u64(0);

        assert!(matches!(
            prior.draw_samples(10, &mut rng),
            Err(PriorError::NotImplemented(_))
        ));
        assert!(matches!(
            prior.compute_lnprob(array![0.5].view()),
            Err(PriorError::NotImplemented(_))
        ));
        assert!(matches!(
            prior.lnprob(0.5),
            Err(PriorError::NotImplemented(_))
        ));
    }

    #[test]
    fn test_empty_input_still_fails() {
        let prior = LinearPrior::new(1.0, 0.0).unwrap();
        let empty: [f64; 0] = [];
        assert!(prior.compute_lnprob(ArrayView1::from(&empty)).is_err());
    }

    #[test]
    fn test_parameters_are_stored() {
        let prior = LinearPrior::new(-0.5, 3.0).unwrap();
        assert_eq!(prior.m(), -0.5);
        assert_eq!(prior.b(), 3.0);
    }
}
