//! The core module: named input distributions, the stochastic model trait
//! and checkpoints.
pub mod estimators;

use crate::error::DomainError;
use crate::histograms::{HistogramEstimators, HistogramSpecification};
use crate::moments::{beta_params, lognormal_params};
use num_traits::{Float, ToPrimitive};
use rand::distributions::Distribution;
use rand::Rng;
use rand_distr::{Beta, LogNormal, Normal, Open01, StandardNormal};
use serde::{Deserialize, Serialize};

/// Lossy conversion for error reporting only.
fn lossy<T: ToPrimitive>(x: T) -> f64 {
    x.to_f64().unwrap_or(f64::NAN)
}

/// A validated sampling distribution for a single model input.
///
/// Values of this type are built through the checked constructors, so every
/// instance denotes a well-defined distribution. Sampling happens through
/// the [`Distribution`] trait from the `rand` crate.
#[derive(Clone, Debug)]
pub struct InputDistribution<T>(Sampler<T>)
where
    T: Float,
    Open01: Distribution<T>,
    StandardNormal: Distribution<T>;

#[derive(Clone, Debug)]
enum Sampler<T>
where
    T: Float,
    Open01: Distribution<T>,
    StandardNormal: Distribution<T>,
{
    Normal(Normal<T>),
    LogNormal(LogNormal<T>),
    Beta(Beta<T>),
    Fixed(T),
}

impl<T> InputDistribution<T>
where
    T: Float,
    Open01: Distribution<T>,
    StandardNormal: Distribution<T>,
{
    /// A normally distributed input with the given mean and standard
    /// deviation. A zero standard deviation yields a point mass at the
    /// mean.
    ///
    /// # Errors
    ///
    /// [`DomainError::NegativeStdDev`] if `sd` is negative or NaN.
    pub fn normal(mean: T, sd: T) -> Result<Self, DomainError> {
        let normal =
            Normal::new(mean, sd).map_err(|_| DomainError::NegativeStdDev { sd: lossy(sd) })?;

        Ok(Self(Sampler::Normal(normal)))
    }

    /// A log-normally distributed input given the native parameters `mu`
    /// and `sigma` of the underlying normal distribution.
    ///
    /// # Errors
    ///
    /// [`DomainError::InvalidLogNormal`] if `sigma` is negative or NaN.
    pub fn log_normal(mu: T, sigma: T) -> Result<Self, DomainError> {
        let log_normal = LogNormal::new(mu, sigma).map_err(|_| DomainError::InvalidLogNormal {
            mu: lossy(mu),
            sigma: lossy(sigma),
        })?;

        Ok(Self(Sampler::LogNormal(log_normal)))
    }

    /// A log-normally distributed input with the given mean and variance,
    /// derived via moment matching (see
    /// [`lognormal_params`](crate::moments::lognormal_params)).
    ///
    /// # Errors
    ///
    /// Propagates [`DomainError`] from the moment conversion.
    pub fn log_normal_from_moments(mean: T, variance: T) -> Result<Self, DomainError> {
        let params = lognormal_params(mean, variance)?;

        Self::log_normal(params.mu(), params.sigma())
    }

    /// A beta distributed input with the given mean and standard deviation,
    /// derived via moment matching (see
    /// [`beta_params`](crate::moments::beta_params)).
    ///
    /// # Errors
    ///
    /// Propagates [`DomainError`] from the moment conversion.
    pub fn beta_from_moments(mean: T, sd: T) -> Result<Self, DomainError> {
        let params = beta_params(mean, sd)?;
        let beta = Beta::new(params.alpha(), params.beta()).map_err(|_| {
            DomainError::BetaVarianceOutOfRange {
                mean: lossy(mean),
                variance: lossy(sd * sd),
                limit: lossy(mean * (T::one() - mean)),
            }
        })?;

        Ok(Self(Sampler::Beta(beta)))
    }

    /// An input held at a fixed, deterministic value.
    pub fn fixed(value: T) -> Self {
        Self(Sampler::Fixed(value))
    }
}

impl<T> Distribution<T> for InputDistribution<T>
where
    T: Float,
    Open01: Distribution<T>,
    StandardNormal: Distribution<T>,
{
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> T {
        match &self.0 {
            Sampler::Normal(normal) => normal.sample(rng),
            Sampler::LogNormal(log_normal) => log_normal.sample(rng),
            Sampler::Beta(beta) => beta.sample(rng),
            Sampler::Fixed(value) => *value,
        }
    }
}

/// A named model input together with its sampling distribution.
#[derive(Clone, Debug)]
pub struct Input<T>
where
    T: Float,
    Open01: Distribution<T>,
    StandardNormal: Distribution<T>,
{
    name: String,
    distribution: InputDistribution<T>,
}

impl<T> Input<T>
where
    T: Float,
    Open01: Distribution<T>,
    StandardNormal: Distribution<T>,
{
    /// Constructor.
    pub fn new(name: &str, distribution: InputDistribution<T>) -> Self {
        Self {
            name: name.to_string(),
            distribution,
        }
    }

    /// Returns the name of this input.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the sampling distribution of this input.
    pub fn distribution(&self) -> &InputDistribution<T> {
        &self.distribution
    }
}

/// Trait which every uncertainty propagation model must implement.
///
/// A model is an explicit value: a named collection of input distributions
/// together with the deterministic map producing the derived quantity.
/// There is no ambient registration; models are passed directly into a
/// sampler call.
pub trait StochasticModel<T>
where
    T: Float,
    Open01: Distribution<T>,
    StandardNormal: Distribution<T>,
{
    /// The named input variables and their sampling distributions.
    ///
    /// The order is fixed and defines the order in which the joint draws
    /// are handed to [`propagate`](Self::propagate).
    fn inputs(&self) -> Vec<Input<T>>;

    /// Deterministically maps one joint draw of the inputs to the derived
    /// output quantity.
    fn propagate(&self, x: &[T]) -> T;

    /// Histograms of the propagated output to record while sampling.
    fn histograms(&self) -> Vec<HistogramSpecification<T>> {
        vec![]
    }
}

/// A checkpoint saves the state of the sampler after an iteration together
/// with everything estimated during it, including the drawn sample set.
///
/// Checkpoints can be serialized, and sampling can be resumed from the
/// stored generator state without a difference in the results.
#[derive(Debug, Deserialize, Serialize)]
pub struct Checkpoint<T, R, E>
where
    T: Copy,
{
    rng_before: R,
    rng_after: R,
    estimators: E,
    histograms: Vec<HistogramEstimators<T>>,
    trace: Vec<T>,
}

impl<T, R, E> Checkpoint<T, R, E>
where
    T: Copy,
{
    /// Constructor.
    pub(crate) fn new(
        rng_before: R,
        rng_after: R,
        estimators: E,
        histograms: Vec<HistogramEstimators<T>>,
        trace: Vec<T>,
    ) -> Self {
        Self {
            rng_before,
            rng_after,
            estimators,
            histograms,
            trace,
        }
    }

    /// Returns the random number generator before generation of this
    /// checkpoint.
    pub fn rng_before(&self) -> &R {
        &self.rng_before
    }

    /// Returns the random number generator after generation of this
    /// checkpoint.
    pub fn rng_after(&self) -> &R {
        &self.rng_after
    }

    /// Returns the estimators of this checkpoint.
    pub fn estimators(&self) -> &E {
        &self.estimators
    }

    /// Access the histograms.
    pub fn histograms(&self) -> &Vec<HistogramEstimators<T>> {
        &self.histograms
    }

    /// Returns the sample set drawn during this iteration, in draw order.
    /// Draws whose propagated value was non-finite are not part of the
    /// trace.
    pub fn trace(&self) -> &[T] {
        &self.trace
    }
}
