#![warn(clippy::all, clippy::cargo, clippy::nursery, clippy::pedantic)]
#![warn(missing_docs)]

//! The crate `mcprop` provides [Monte Carlo] uncertainty-propagation routines for small
//! engineering models: given a set of uncertain inputs with known distributions and a
//! deterministic function mapping them to a derived quantity, it estimates the distribution of
//! that quantity by sampling and validates the estimate against closed-form references where
//! they exist.
//!
//! # Features
//!
//! This library was designed with the following features as essential in mind:
//!
//! - **Explicit models**. A model is an ordinary value: a named collection of input
//! distributions plus the deterministic map. There are no ambient registration lists or global
//! model registries; models are passed directly into a sampler call.
//! - **Moment matching**. Inputs characterized by a measured mean and variance are converted
//! exactly into native distribution parameters. For a log-normal input
//!
//! $$ \sigma^2 = \ln \left( 1 + \frac{v}{m^2} \right), \qquad
//!    \mu = \ln m - \frac{\sigma^2}{2} $$
//!
//! and similar conversions exist for beta-distributed inputs.
//! - **Analytic references**. Linear combinations of independent normal inputs have exactly
//! known distributions; these serve as oracles against which the sampled estimates are
//! compared, including threshold-exceedance (failure) probabilities from the closed-form CDF.
//! - **Generic numeric type**. The numeric type of the sampling core is a generic parameter,
//! so models can be evaluated with either `f32`, `f64`, or a custom type implementing the
//! `Float` trait from the `num-traits` crate.
//! - **Generic random number generator**. Every random number generator implementing the `Rng`
//! trait from the `rand` crate can drive the sampler.
//! - **Reproducibility**. All results only depend on the used random number generator and the
//! chosen seed. Each checkpoint stores the generator states bracketing its iteration, so a run
//! can be resumed or replayed from any checkpoint without a difference in the final results.
//! - **Non-finite sample filtering**. Propagated outputs are sometimes non-finite in extreme
//! regions of the input space due to finite numerical precision. Such draws are counted and
//! excluded instead of destroying the estimate.
//! - **Histograms**. The density of the propagated output can be estimated along with the
//! scalar moments, without any additional model evaluations, and handed to a plotting sink.
//!
//! # What is ...?
//!
//! This section is a dictionary of terms that are used in this documentation.
//!
//! - the number of *draws* or the *sample size* is $N$, the number of times a joint sample of
//! all inputs is taken and propagated through the model. We assume that this is the expensive
//! operation;
//! - the *model* maps one joint draw of the inputs, $x_1, x_2, \ldots, x_d$, to the derived
//! output quantity;
//! - the *trace* is the ordered sample set of propagated outputs of one iteration;
//! - the *margin* of a structure with strength $S$ and load $L$ is $S - L$; failure occurs when
//! the margin drops to zero or below;
//! - the *failure probability* at a threshold $t$ is $P(X \le t)$, estimated empirically as
//! the fraction of the trace at or below $t$ and analytically from a reference CDF.
//!
//! [Monte Carlo]: https://en.wikipedia.org/wiki/Monte_Carlo_method

pub mod analytic;
pub mod callbacks;
pub mod comparison;
pub mod core;
pub mod error;
pub mod histograms;
pub mod moments;
pub mod samplers;

pub use crate::core::*;
pub use crate::error::DomainError;
