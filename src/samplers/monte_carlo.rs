//! Plain Monte Carlo sampling of a stochastic model.
use crate::callbacks::Callback;
use crate::core::estimators::{BasicEstimators, Estimators};
use crate::core::{Checkpoint, StochasticModel};
use num_traits::{Float, FromPrimitive};
use rand::distributions::Distribution;
use rand::Rng;
use rand_distr::{Open01, StandardNormal};
use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign};

/// Estimators for the plain Monte Carlo sampler.
///
/// `mean` and `var` estimate the first two moments of the *propagated
/// output distribution*; `var` is the unbiased sample variance, not the
/// squared standard error of the mean. Both are computed over the finite
/// draws only and are meaningful once at least two finite draws were taken.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct SampleEstimators<T> {
    sum: T,
    sumsq: T,
    draws: usize,
    non_finite_draws: usize,
}

impl<T: Float> Default for SampleEstimators<T> {
    fn default() -> Self {
        Self {
            sum: T::zero(),
            sumsq: T::zero(),
            draws: 0,
            non_finite_draws: 0,
        }
    }
}

impl<T: Float> Add for SampleEstimators<T> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            sum: self.sum + other.sum,
            sumsq: self.sumsq + other.sumsq,
            draws: self.draws + other.draws,
            non_finite_draws: self.non_finite_draws + other.non_finite_draws,
        }
    }
}

impl<T> SampleEstimators<T>
where
    T: Float + FromPrimitive,
{
    /// Returns the number of finite draws the estimates are computed over.
    fn finite_draws(&self) -> T {
        T::from_usize(self.draws - self.non_finite_draws).unwrap()
    }

    /// Returns the standard error of the mean estimate,
    /// $\sqrt{V / N_\mathrm{finite}}$.
    pub fn standard_error(&self) -> T {
        (self.var() / self.finite_draws()).sqrt()
    }
}

impl<T> BasicEstimators<T> for SampleEstimators<T>
where
    T: Float + FromPrimitive,
{
    fn mean(&self) -> T {
        self.sum / self.finite_draws()
    }

    fn var(&self) -> T {
        let draws = self.finite_draws();
        (self.sumsq - self.sum * self.sum / draws) / (draws - T::one())
    }
}

impl<T> Estimators<T> for SampleEstimators<T>
where
    T: Float + FromPrimitive,
{
    fn draws(&self) -> usize {
        self.draws
    }

    fn non_finite_draws(&self) -> usize {
        self.non_finite_draws
    }
}

/// Perform a single iteration of `draws` joint draws from the model.
fn sample_iteration<T, R, M>(model: &M, rng: &R, draws: usize) -> Checkpoint<T, R, SampleEstimators<T>>
where
    T: AddAssign + Float + FromPrimitive,
    R: Clone + Rng,
    M: StochasticModel<T>,
    Open01: Distribution<T>,
    StandardNormal: Distribution<T>,
{
    let inputs = model.inputs();
    let mut rng_local = rng.clone();

    // reuse one buffer for the joint draws instead of allocating per draw
    let mut x = vec![T::zero(); inputs.len()];
    let mut histograms = model
        .histograms()
        .iter()
        .map(|h| h.accumulator())
        .collect::<Vec<_>>();
    let mut estimators = SampleEstimators::default();
    let mut trace = Vec::with_capacity(draws);

    for _ in 0..draws {
        for (value, input) in x.iter_mut().zip(inputs.iter()) {
            *value = input.distribution().sample(&mut rng_local);
        }

        let value = model.propagate(&x);

        estimators.draws += 1;

        if value.is_finite() {
            estimators.sum += value;
            estimators.sumsq += value * value;

            for histogram in histograms.iter_mut() {
                histogram.fill(value, T::one());
            }

            trace.push(value);
        } else {
            estimators.non_finite_draws += 1;
        }
    }

    let finite_draws = trace.len();

    Checkpoint::new(
        rng.clone(),
        rng_local,
        estimators,
        histograms
            .into_iter()
            .map(|h| h.into_estimators(finite_draws))
            .collect(),
        trace,
    )
}

/// Draw samples from the `model`.
///
/// The random number generator in its initial state is provided in `rng`
/// together with a `callback` that reports estimates after each iteration.
/// The number of joint draws per iteration is stored in the slice
/// `iterations`.
///
/// Sampling is single-threaded and synchronous; the results are completely
/// reproducible from the generator state, and each returned checkpoint
/// carries the generator states bracketing its iteration so a run can be
/// resumed from any of them.
pub fn sample<T, R, M>(
    model: &M,
    rng: &R,
    callback: &impl Callback<T, R, SampleEstimators<T>>,
    iterations: &[usize],
) -> Vec<Checkpoint<T, R, SampleEstimators<T>>>
where
    T: AddAssign + Float + FromPrimitive,
    R: Clone + Rng,
    M: StochasticModel<T>,
    Open01: Distribution<T>,
    StandardNormal: Distribution<T>,
{
    let mut checkpoints = Vec::with_capacity(iterations.len());
    let mut rng_global = rng.clone();

    for &draws in iterations {
        let checkpoint = sample_iteration(model, &rng_global, draws);

        // synchronize the random number generation
        rng_global = checkpoint.rng_after().clone();

        checkpoints.push(checkpoint);
        callback.print(&checkpoints);
    }

    checkpoints
}
