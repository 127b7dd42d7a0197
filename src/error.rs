//! Error types shared across the crate.

use thiserror::Error;

/// Invalid numeric input to one of the distribution constructors or
/// estimation routines.
///
/// Every failure is surfaced immediately to the caller. Degenerate but
/// well-defined inputs, such as a zero variance or a zero standard
/// deviation, are *not* errors; they yield point-mass distributions whose
/// probabilities are step functions.
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum DomainError {
    /// The mean of a log-normally distributed quantity must be strictly
    /// positive.
    #[error("mean must be strictly positive, got {mean}")]
    NonPositiveMean {
        /// The offending mean.
        mean: f64,
    },
    /// The mean of an analytic reference distribution must be finite.
    #[error("mean must be finite, got {mean}")]
    NonFiniteMean {
        /// The offending mean.
        mean: f64,
    },
    /// Variances are second central moments and cannot be negative.
    #[error("variance must be non-negative, got {variance}")]
    NegativeVariance {
        /// The offending variance.
        variance: f64,
    },
    /// Standard deviations must be finite and non-negative.
    #[error("standard deviation must be finite and non-negative, got {sd}")]
    NegativeStdDev {
        /// The offending standard deviation.
        sd: f64,
    },
    /// A beta-distributed quantity lives on the open unit interval.
    #[error("beta mean must lie strictly between 0 and 1, got {mean}")]
    BetaMeanOutOfRange {
        /// The offending mean.
        mean: f64,
    },
    /// Moment matching for the beta distribution requires
    /// `0 < variance < mean * (1 - mean)`.
    #[error("beta variance {variance} must lie strictly between 0 and {limit} for mean {mean}")]
    BetaVarianceOutOfRange {
        /// The requested mean.
        mean: f64,
        /// The offending variance.
        variance: f64,
        /// The largest representable variance, `mean * (1 - mean)`.
        limit: f64,
    },
    /// The parameters of the normal distribution underlying a log-normal
    /// must be finite with a non-negative scale.
    #[error("invalid log-normal parameters: mu = {mu}, sigma = {sigma}")]
    InvalidLogNormal {
        /// The location parameter.
        mu: f64,
        /// The scale parameter.
        sigma: f64,
    },
    /// An empirical estimate was requested from an empty sample set.
    #[error("sample set is empty")]
    EmptySampleSet,
}
