use mcprop::analytic::{margin, Gaussian};
use mcprop::callbacks::SinkCallback;
use mcprop::comparison::{compare_tail, empirical_failure_fraction};
use mcprop::core::{Input, InputDistribution, StochasticModel};
use mcprop::estimators::{BasicEstimators, Estimators};
use mcprop::samplers::monte_carlo;

use assert_approx_eq::assert_approx_eq;
use rand_pcg::Pcg64;

struct RodModel {}

impl StochasticModel<f64> for RodModel {
    fn inputs(&self) -> Vec<Input<f64>> {
        vec![
            Input::new("strength", InputDistribution::normal(100.0, 5.0).unwrap()),
            Input::new("load", InputDistribution::normal(85.0, 10.0).unwrap()),
        ]
    }

    fn propagate(&self, x: &[f64]) -> f64 {
        x[0] - x[1]
    }
}

/// The margin model propagated through a single moment-matched log-normal
/// input. The propagated mean must recover the requested one.
struct LogNormalThickness {}

impl StochasticModel<f64> for LogNormalThickness {
    fn inputs(&self) -> Vec<Input<f64>> {
        vec![Input::new(
            "thickness",
            InputDistribution::log_normal_from_moments(10.0, 4.0).unwrap(),
        )]
    }

    fn propagate(&self, x: &[f64]) -> f64 {
        x[0]
    }
}

#[test]
fn analytic_margin_matches_the_closed_form() {
    let strength = Gaussian::new(100.0, 5.0).unwrap();
    let load = Gaussian::new(85.0, 10.0).unwrap();
    let margin_rv = margin(&strength, &load).unwrap();

    assert_approx_eq!(margin_rv.mean(), 15.0, 1e-12);
    assert_approx_eq!(margin_rv.sd(), 11.180339887498949, 1e-12);
    assert_approx_eq!(margin_rv.failure_probability(0.0), 0.089856, 1e-5);
}

#[test]
fn empirical_failure_probability_converges_to_the_analytic_value() {
    let strength = Gaussian::new(100.0, 5.0).unwrap();
    let load = Gaussian::new(85.0, 10.0).unwrap();
    let margin_rv = margin(&strength, &load).unwrap();

    let rng = Pcg64::new(0xcafef00dd15ea5e5, 0xa02bdbf7bb3c0a7ac28fa16a64abf96);
    let checkpoints = monte_carlo::sample(&RodModel {}, &rng, &SinkCallback {}, &[100_000]);

    let comparison = compare_tail(&margin_rv, checkpoints[0].trace(), 0.0).unwrap();

    // with 100_000 draws the standard error of the empirical fraction is
    // sqrt(p (1 - p) / N), roughly 9e-4
    assert!(comparison.absolute_error() < 0.01);
}

#[test]
fn the_empirical_error_shrinks_with_the_sample_count() {
    let strength = Gaussian::new(100.0, 5.0).unwrap();
    let load = Gaussian::new(85.0, 10.0).unwrap();
    let margin_rv = margin(&strength, &load).unwrap();

    let rng = Pcg64::new(0xcafef00dd15ea5e5, 0xa02bdbf7bb3c0a7ac28fa16a64abf96);
    let checkpoints = monte_carlo::sample(
        &RodModel {},
        &rng,
        &SinkCallback {},
        &[100, 100_000],
    );

    let analytic = margin_rv.failure_probability(0.0);

    let small = empirical_failure_fraction(checkpoints[0].trace(), 0.0).unwrap();
    let large = empirical_failure_fraction(checkpoints[1].trace(), 0.0).unwrap();

    // the tolerance achievable at N=100 draws
    assert!((small - analytic).abs() < 0.1);
    // two orders of magnitude more draws tighten it by one
    assert!((large - analytic).abs() < 0.01);
}

#[test]
fn sampled_moments_match_the_margin_distribution() {
    let rng = Pcg64::new(0xcafef00dd15ea5e5, 0xa02bdbf7bb3c0a7ac28fa16a64abf96);
    let checkpoints = monte_carlo::sample(&RodModel {}, &rng, &SinkCallback {}, &[100_000]);

    let estimators = checkpoints[0].estimators();

    assert_eq!(estimators.draws(), 100_000);
    assert_eq!(estimators.non_finite_draws(), 0);
    assert_approx_eq!(estimators.mean(), 15.0, 0.2);
    assert_approx_eq!(estimators.std(), 11.18, 0.2);
}

#[test]
fn moment_matched_lognormal_input_recovers_its_mean() {
    let rng = Pcg64::new(0xcafef00dd15ea5e5, 0xa02bdbf7bb3c0a7ac28fa16a64abf96);
    let checkpoints =
        monte_carlo::sample(&LogNormalThickness {}, &rng, &SinkCallback {}, &[100_000]);

    let estimators = checkpoints[0].estimators();

    // mean 10, variance 4: standard error is 2 / sqrt(100_000)
    assert_approx_eq!(estimators.mean(), 10.0, 0.05);
    assert_approx_eq!(estimators.var(), 4.0, 0.2);
}

#[test]
fn degenerate_margin_has_a_step_failure_probability() {
    // both sds zero: the margin is a point mass at 15
    let strength = Gaussian::new(100.0, 0.0).unwrap();
    let load = Gaussian::new(85.0, 0.0).unwrap();
    let margin_rv = margin(&strength, &load).unwrap();

    assert!(margin_rv.is_degenerate());
    assert_eq!(margin_rv.failure_probability(0.0), 0.0);
    assert_eq!(margin_rv.failure_probability(15.0), 1.0);
    assert_eq!(margin_rv.failure_probability(20.0), 1.0);
}
