//! Comparison of an analytic reference distribution with a Monte Carlo
//! sample set.
//!
//! Both example models in this crate follow the same pattern: the failure
//! probability is known in closed form and estimated again by sampling, and
//! the two numbers are reported side by side. This module is that pattern,
//! written once.
use crate::analytic::Gaussian;
use crate::error::DomainError;
use num_traits::Float;
use serde::{Deserialize, Serialize};

/// The empirical probability that a sampled quantity does not exceed
/// `threshold`: the number of samples below or at the threshold divided by
/// the total sample count.
///
/// By the law of large numbers this estimate converges to the true tail
/// probability as the sample count grows.
///
/// # Errors
///
/// [`DomainError::EmptySampleSet`] if `samples` is empty.
pub fn empirical_failure_fraction<T: Float>(
    samples: &[T],
    threshold: T,
) -> Result<T, DomainError> {
    if samples.is_empty() {
        return Err(DomainError::EmptySampleSet);
    }

    let mut below = T::zero();
    let mut total = T::zero();

    for &sample in samples {
        total = total + T::one();

        if sample <= threshold {
            below = below + T::one();
        }
    }

    Ok(below / total)
}

/// The result of comparing analytic and sampled threshold-exceedance
/// probabilities.
#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
pub struct TailComparison {
    threshold: f64,
    analytic: f64,
    empirical: f64,
}

impl TailComparison {
    /// Returns the threshold both probabilities refer to.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Returns the analytic probability, $P(X \le t)$, from the reference
    /// distribution.
    pub fn analytic(&self) -> f64 {
        self.analytic
    }

    /// Returns the empirical probability estimated from the sample set.
    pub fn empirical(&self) -> f64 {
        self.empirical
    }

    /// Returns the absolute deviation of the empirical estimate from the
    /// analytic reference.
    pub fn absolute_error(&self) -> f64 {
        (self.analytic - self.empirical).abs()
    }
}

/// Compare the tail probability of the analytic `reference` distribution at
/// `threshold` with the empirical estimate obtained from `samples`.
///
/// The sample set is treated as an opaque sequence of draws; any sampler
/// that targets the same quantity as the reference can be validated this
/// way.
///
/// # Errors
///
/// [`DomainError::EmptySampleSet`] if `samples` is empty.
pub fn compare_tail(
    reference: &Gaussian,
    samples: &[f64],
    threshold: f64,
) -> Result<TailComparison, DomainError> {
    let empirical = empirical_failure_fraction(samples, threshold)?;

    Ok(TailComparison {
        threshold,
        analytic: reference.cdf(threshold),
        empirical,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn empirical_fraction_counts_inclusive() {
        let samples = [-1.0, 0.0, 1.0, 2.0];

        assert_approx_eq!(
            empirical_failure_fraction(&samples, 0.0).unwrap(),
            0.5,
            1e-12
        );
        assert_approx_eq!(
            empirical_failure_fraction(&samples, -2.0).unwrap(),
            0.0,
            1e-12
        );
        assert_approx_eq!(
            empirical_failure_fraction(&samples, 2.0).unwrap(),
            1.0,
            1e-12
        );
    }

    #[test]
    fn empty_sample_sets_are_rejected() {
        assert_eq!(
            empirical_failure_fraction::<f64>(&[], 0.0),
            Err(DomainError::EmptySampleSet)
        );
    }

    #[test]
    fn comparison_reports_both_estimates() {
        let reference = Gaussian::new(0.0, 1.0).unwrap();
        let samples = [-0.5, 0.5, 1.5];

        let comparison = compare_tail(&reference, &samples, 0.0).unwrap();

        assert_eq!(comparison.threshold(), 0.0);
        assert_approx_eq!(comparison.analytic(), 0.5, 1e-12);
        assert_approx_eq!(comparison.empirical(), 1.0 / 3.0, 1e-12);
        assert_approx_eq!(comparison.absolute_error(), 0.5 - 1.0 / 3.0, 1e-12);
    }
}
