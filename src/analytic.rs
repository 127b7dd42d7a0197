//! Closed-form reference distributions.
//!
//! Where a propagated quantity is a linear combination of independent normal
//! inputs, its distribution is known exactly and serves as the oracle
//! against which every sampling-based estimate is validated.

use crate::error::DomainError;
use statrs::distribution::{Continuous, ContinuousCDF, Normal as StatsNormal};

/// A normal distribution given by its mean and standard deviation.
///
/// A zero standard deviation is accepted and collapses the distribution to a
/// point mass at the mean; probabilities then become step functions and the
/// density is no longer defined.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Gaussian {
    mean: f64,
    sd: f64,
    // `None` for the degenerate point mass
    normal: Option<StatsNormal>,
}

impl Gaussian {
    /// Creates a new normal distribution with the given mean and standard
    /// deviation.
    ///
    /// # Errors
    ///
    /// [`DomainError::NonFiniteMean`] if `mean` is not finite and
    /// [`DomainError::NegativeStdDev`] if `sd` is negative or not finite.
    pub fn new(mean: f64, sd: f64) -> Result<Self, DomainError> {
        if !mean.is_finite() {
            return Err(DomainError::NonFiniteMean { mean });
        }

        if !sd.is_finite() || sd < 0.0 {
            return Err(DomainError::NegativeStdDev { sd });
        }

        let normal = if sd == 0.0 {
            None
        } else {
            Some(StatsNormal::new(mean, sd).map_err(|_| DomainError::NegativeStdDev { sd })?)
        };

        Ok(Self { mean, sd, normal })
    }

    /// Returns the mean.
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Returns the standard deviation.
    pub fn sd(&self) -> f64 {
        self.sd
    }

    /// Returns `true` if this distribution is a point mass at the mean.
    pub fn is_degenerate(&self) -> bool {
        self.normal.is_none()
    }

    /// The distribution of the difference of two independent normal
    /// variables, `self - other`:
    ///
    /// $$ \mu = \mu_1 - \mu_2, \qquad \sigma = \sqrt{\sigma_1^2 + \sigma_2^2} $$
    ///
    /// # Errors
    ///
    /// [`DomainError::NonFiniteMean`] or [`DomainError::NegativeStdDev`] if
    /// the combined parameters overflow to a non-finite value.
    pub fn difference(&self, other: &Self) -> Result<Self, DomainError> {
        Self::new(self.mean - other.mean, self.sd.hypot(other.sd))
    }

    /// The cumulative distribution function, $P(X \le x)$.
    ///
    /// For a point mass this is the unit step at the mean.
    pub fn cdf(&self, x: f64) -> f64 {
        match &self.normal {
            Some(normal) => normal.cdf(x),
            None => {
                if x >= self.mean {
                    1.0
                } else {
                    0.0
                }
            }
        }
    }

    /// The probability density function.
    ///
    /// A point mass has no density; this returns zero everywhere for a
    /// degenerate distribution.
    pub fn pdf(&self, x: f64) -> f64 {
        match &self.normal {
            Some(normal) => normal.pdf(x),
            None => 0.0,
        }
    }

    /// The probability that the quantity does not exceed `threshold`,
    /// $P(X \le t)$.
    ///
    /// With the margin convention (strength minus load) and the default
    /// threshold of zero this is the failure probability.
    pub fn failure_probability(&self, threshold: f64) -> f64 {
        self.cdf(threshold)
    }
}

/// The margin distribution of independent, normally distributed `strength`
/// and `load`, that is the distribution of `strength - load`.
///
/// # Errors
///
/// Propagates [`DomainError`] from [`Gaussian::difference`].
pub fn margin(strength: &Gaussian, load: &Gaussian) -> Result<Gaussian, DomainError> {
    strength.difference(load)
}
