//! This module contains everything related to estimators.
use num_traits::Float;
use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign};

/// Basic estimators, like the mean, variance, and the standard deviation.
pub trait BasicEstimators<T: Float> {
    /// Returns the mean value.
    fn mean(&self) -> T;

    /// Returns the variance, $V$.
    fn var(&self) -> T;

    /// Returns the standard deviation, $\sigma = \sqrt{V}$.
    fn std(&self) -> T {
        self.var().sqrt()
    }
}

/// Estimators that also keep track of how the underlying sample set was
/// drawn.
pub trait Estimators<T: Float>: BasicEstimators<T> {
    /// Returns the number of draws, $N$, taken from the model.
    fn draws(&self) -> usize;

    /// Returns the number of draws, $N_\mathrm{nf}$, whose propagated value
    /// was non-finite. Such draws are excluded from all other estimates.
    fn non_finite_draws(&self) -> usize;
}

/// A struct implementing the `BasicEstimators<T>` trait.
#[derive(Deserialize, Serialize, Clone, Copy, Debug)]
pub struct MeanVar<T> {
    mean: T,
    var: T,
}

impl<T: std::ops::Add<Output = T>> Add for MeanVar<T> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            mean: self.mean + other.mean,
            var: self.var + other.var,
        }
    }
}

impl<T: std::ops::Add<Output = T> + AddAssign> AddAssign for MeanVar<T> {
    fn add_assign(&mut self, other: Self) {
        self.mean += other.mean;
        self.var += other.var;
    }
}

impl<T> MeanVar<T> {
    /// Constructor.
    pub const fn new(mean: T, var: T) -> Self {
        Self { mean, var }
    }
}

impl<T: Float> BasicEstimators<T> for MeanVar<T> {
    fn mean(&self) -> T {
        self.mean
    }

    fn var(&self) -> T {
        self.var
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_var_add() {
        let mv_1 = MeanVar::<f64>::new(1.1, 0.5);
        let mv_2 = MeanVar::<f64>::new(5.3, 1.2);
        let sum = mv_1 + mv_2;

        assert_eq!(sum.mean(), 6.4);
        assert_eq!(sum.var(), 1.7);
        assert_eq!(sum.std(), 1.7_f64.sqrt());
    }

    #[test]
    fn test_mean_var_add_assign() {
        let mut mv_1 = MeanVar::<f64>::new(1.1, 0.5);
        mv_1 += MeanVar::<f64>::new(5.3, 1.2);

        assert_eq!(mv_1.mean(), 6.4);
        assert_eq!(mv_1.var(), 1.7);
        assert_eq!(mv_1.std(), 1.7_f64.sqrt());
    }
}
