//! Moment matching: deriving native distribution parameters from a target
//! mean and variance.
//!
//! Engineering inputs are usually characterized by their first two moments,
//! estimated from a handful of experiments, while samplers want native
//! parameters. The conversions in this module are exact, so the resulting
//! distributions reproduce the requested moments without truncation bias.

use crate::error::DomainError;
use num_traits::{Float, ToPrimitive};
use serde::{Deserialize, Serialize};

/// Lossy conversion for error reporting only.
fn lossy<T: ToPrimitive>(x: T) -> f64 {
    x.to_f64().unwrap_or(f64::NAN)
}

/// Location and squared scale of the normal distribution underlying a
/// log-normal random variable.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
pub struct LogNormalParams<T> {
    mu: T,
    sigma2: T,
}

impl<T: Float> LogNormalParams<T> {
    /// Returns the location parameter $\mu$.
    pub fn mu(&self) -> T {
        self.mu
    }

    /// Returns the squared scale parameter $\sigma^2$.
    pub fn sigma2(&self) -> T {
        self.sigma2
    }

    /// Returns the scale parameter $\sigma$.
    pub fn sigma(&self) -> T {
        self.sigma2.sqrt()
    }
}

/// Matches the first two moments of a log-normal random variable.
///
/// Returns the parameters $(\mu, \sigma^2)$ of the underlying normal
/// distribution such that its exponential has exactly mean `mean` and
/// variance `variance`:
///
/// $$ \sigma^2 = \ln \left( 1 + \frac{v}{m^2} \right), \qquad
///    \mu = \ln m - \frac{\sigma^2}{2} $$
///
/// A zero variance is accepted and yields the degenerate point distribution
/// at `mean`, that is $\sigma^2 = 0$ and $\mu = \ln m$.
///
/// # Errors
///
/// [`DomainError::NonPositiveMean`] if `mean <= 0` and
/// [`DomainError::NegativeVariance`] if `variance < 0`.
pub fn lognormal_params<T: Float>(
    mean: T,
    variance: T,
) -> Result<LogNormalParams<T>, DomainError> {
    if mean <= T::zero() {
        return Err(DomainError::NonPositiveMean { mean: lossy(mean) });
    }

    if variance < T::zero() {
        return Err(DomainError::NegativeVariance {
            variance: lossy(variance),
        });
    }

    let two = T::one() + T::one();
    let sigma2 = (T::one() + variance / (mean * mean)).ln();
    let mu = mean.ln() - sigma2 / two;

    Ok(LogNormalParams { mu, sigma2 })
}

/// Shape parameters of a beta distribution.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
pub struct BetaParams<T> {
    alpha: T,
    beta: T,
}

impl<T: Float> BetaParams<T> {
    /// Returns the first shape parameter $\alpha$.
    pub fn alpha(&self) -> T {
        self.alpha
    }

    /// Returns the second shape parameter $\beta$.
    pub fn beta(&self) -> T {
        self.beta
    }
}

/// Matches the first two moments of a beta random variable.
///
/// Returns the shape parameters $(\alpha, \beta)$ such that the beta
/// distribution has exactly mean `mean` and standard deviation `sd`:
///
/// $$ \kappa = \frac{m (1 - m)}{s^2} - 1, \qquad
///    \alpha = m \kappa, \qquad \beta = (1 - m) \kappa $$
///
/// The moments are representable only for `0 < mean < 1` and
/// `0 < sd^2 < mean * (1 - mean)`; a point mass on the unit interval has no
/// beta representation.
///
/// # Errors
///
/// [`DomainError::BetaMeanOutOfRange`], [`DomainError::NegativeStdDev`] or
/// [`DomainError::BetaVarianceOutOfRange`] when the constraints above are
/// violated.
pub fn beta_params<T: Float>(mean: T, sd: T) -> Result<BetaParams<T>, DomainError> {
    if mean <= T::zero() || mean >= T::one() {
        return Err(DomainError::BetaMeanOutOfRange { mean: lossy(mean) });
    }

    if sd < T::zero() {
        return Err(DomainError::NegativeStdDev { sd: lossy(sd) });
    }

    let variance = sd * sd;
    let limit = mean * (T::one() - mean);

    if variance <= T::zero() || variance >= limit {
        return Err(DomainError::BetaVarianceOutOfRange {
            mean: lossy(mean),
            variance: lossy(variance),
            limit: lossy(limit),
        });
    }

    let kappa = limit / variance - T::one();

    Ok(BetaParams {
        alpha: mean * kappa,
        beta: (T::one() - mean) * kappa,
    })
}
