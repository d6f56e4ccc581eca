//! Combining priors across a full parameter vector.
//!
//! A fit holds one prior per parameter, ordered like the parameter vector.
//! [`all_lnpriors`] turns a parameter vector into the prior term of the log
//! posterior, and [`draw_walkers`] draws a starting ensemble for a sampler.

use ndarray::Array2;
use rand::{rngs::StdRng, Rng, SeedableRng};
use rayon::prelude::*;

use super::{distribution::PriorDistribution, error::PriorError};

/// Sums the log-prior of every parameter against its positional prior.
///
/// # Arguments
///
/// * `params` - Parameter vector of length N
/// * `priors` - N priors, `priors[i]` applying to `params[i]`
///
/// # Returns
///
/// The total log-prior. This is `f64::NEG_INFINITY` as soon as one parameter
/// lies outside the support of its prior.
///
/// # Errors
///
/// * `PriorError::LengthMismatch` - If `params` and `priors` differ in length
/// * Any error returned by an individual prior, e.g. `PriorError::NotImplemented`
pub fn all_lnpriors<P: PriorDistribution>(params: &[f64], priors: &[P]) -> Result<f64, PriorError> {
    if params.len() != priors.len() {
        return Err(PriorError::LengthMismatch {
            params: params.len(),
            priors: priors.len(),
        });
    }

    let mut logp = 0.0;
    for (param, prior) in params.iter().zip(priors) {
        logp += prior.lnprob(*param)?;
    }

    if logp == f64::NEG_INFINITY {
        log::trace!("Parameter vector {params:?} lies outside the prior support");
    }

    Ok(logp)
}

/// Draws an initial walker ensemble from a list of priors.
///
/// Returns an array of shape `(num_walkers, priors.len())` where column `j`
/// holds `num_walkers` samples from `priors[j]`.
///
/// Every prior gets its own `StdRng`, seeded from `rng` in prior order before
/// any sampling happens. The columns are then drawn in parallel, and the
/// result is still reproducible for a seeded `rng`.
///
/// # Errors
///
/// Propagates the first error returned by a prior, e.g.
/// `PriorError::NotImplemented` for a linear prior.
pub fn draw_walkers<P, R>(
    priors: &[P],
    num_walkers: usize,
    rng: &mut R,
) -> Result<Array2<f64>, PriorError>
where
    P: PriorDistribution,
    R: Rng + ?Sized,
{
    let seeds: Vec<u64> = priors.iter().map(|_| rng.gen()).collect();

    let columns = priors
        .par_iter()
        .zip(seeds.par_iter())
        .map(|(prior, &seed)| {
            let mut column_rng = StdRng::seed_from_u64(seed);
            prior.draw_samples(num_walkers, &mut column_rng)
        })
        .collect::<Result<Vec<_>, PriorError>>()?;

    let mut walkers = Array2::zeros((num_walkers, priors.len()));
    for (j, column) in columns.iter().enumerate() {
        walkers.column_mut(j).assign(column);
    }

    log::debug!(
        "Drew {num_walkers} walkers for {} parameters",
        priors.len()
    );

    Ok(walkers)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use ndarray::array;

    use super::*;
    use crate::priors::{GaussianPrior, JeffreysPrior, LinearPrior, Prior, SinPrior, UniformPrior};

    fn fit_priors() -> Vec<Prior> {
        vec![
            JeffreysPrior::new(1.0, 100.0).unwrap().into(),
            UniformPrior::new(0.0, 1.0).unwrap().into(),
            SinPrior.into(),
            GaussianPrior::new(1.3, 0.2).unwrap().into(),
        ]
    }

    #[test]
    fn test_sum_of_individual_lnprobs() {
        let priors = fit_priors();
        let params = [10.0, 0.5, 1.0, 1.5];

        let expected: f64 = params
            .iter()
            .zip(&priors)
            .map(|(x, p)| p.compute_lnprob(array![*x].view()).unwrap()[0])
            .sum();

        let total = all_lnpriors(&params, &priors).unwrap();
        assert_relative_eq!(total, expected, epsilon = 1e-12);
        assert_relative_eq!(total, 1f64.sin() + 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_out_of_support_is_negative_infinity() {
        let priors = fit_priors();
        let total = all_lnpriors(&[500.0, 0.5, 1.0, 1.3], &priors).unwrap();
        assert_eq!(total, f64::NEG_INFINITY);
    }

    #[test]
    fn test_length_mismatch() {
        let priors = fit_priors();
        let err = all_lnpriors(&[10.0, 0.5], &priors).unwrap_err();
        assert_eq!(err, PriorError::LengthMismatch { params: 2, priors: 4 });
    }

    #[test]
    fn test_empty_inputs_sum_to_zero() {
        let priors: Vec<Prior> = vec![];
        assert_eq!(all_lnpriors(&[], &priors).unwrap(), 0.0);
    }

    #[test]
    fn test_linear_prior_error_propagates() {
        let priors: Vec<Prior> = vec![
            UniformPrior::new(0.0, 1.0).unwrap().into(),
            LinearPrior::new(1.0, 0.0).unwrap().into(),
        ];
        let err = all_lnpriors(&[0.5, 0.5], &priors).unwrap_err();
        assert!(matches!(err, PriorError::NotImplemented(_)));
    }

    #[test]
    fn test_walkers_shape_and_support() {
        let priors = fit_priors();
        let mut rng = StdRng::seed_from_u64(1);
        let walkers = draw_walkers(&priors, 200, &mut rng).unwrap();

        assert_eq!(walkers.dim(), (200, 4));
        for row in walkers.rows() {
            let row = row.to_vec();
            assert!(all_lnpriors(&row, &priors).unwrap().is_finite());
        }
    }

    #[test]
    fn test_walkers_are_reproducible() {
        let priors = fit_priors();
        let first = draw_walkers(&priors, 16, &mut StdRng::seed_from_u64(99)).unwrap();
        let second = draw_walkers(&priors, 16, &mut StdRng::seed_from_u64(99)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_walkers_linear_prior_fails() {
        let priors = vec![LinearPrior::new(1.0, 0.0).unwrap()];
        let mut rng = StdRng::seed_from_u64(0);
        assert!(draw_walkers(&priors, 4, &mut rng).is_err());
    }
}
