//! Rod example of Monte Carlo methods for engineering uncertainty.
//!
//! The strength of a rod and the maximum load applied to it are independent,
//! normally distributed quantities. The margin (strength minus load) is then
//! itself normally distributed, so the failure probability is known in
//! closed form and the Monte Carlo estimate can be checked against it.

use mcprop::analytic::{margin, Gaussian};
use mcprop::callbacks::SimpleCumulativeCallback;
use mcprop::comparison::compare_tail;
use mcprop::core::{Input, InputDistribution, StochasticModel};
use mcprop::error::DomainError;
use mcprop::histograms::HistogramSpecification;
use mcprop::samplers::monte_carlo;

use rand_pcg::Pcg64;

// Assume the rod strength is normally distributed
const STRENGTH_MEAN: f64 = 100.0;
const STRENGTH_SD: f64 = 5.0;

// Assume the max. load is normally distributed
const LOAD_MEAN: f64 = 85.0;
const LOAD_SD: f64 = 10.0;

struct RodModel {
    inputs: Vec<Input<f64>>,
}

impl RodModel {
    fn new() -> Result<Self, DomainError> {
        Ok(Self {
            inputs: vec![
                Input::new(
                    "strength",
                    InputDistribution::normal(STRENGTH_MEAN, STRENGTH_SD)?,
                ),
                Input::new("load", InputDistribution::normal(LOAD_MEAN, LOAD_SD)?),
            ],
        })
    }
}

impl StochasticModel<f64> for RodModel {
    fn inputs(&self) -> Vec<Input<f64>> {
        self.inputs.clone()
    }

    fn propagate(&self, x: &[f64]) -> f64 {
        x[0] - x[1]
    }

    fn histograms(&self) -> Vec<HistogramSpecification<f64>> {
        let m_mean = STRENGTH_MEAN - LOAD_MEAN;
        let m_sd = STRENGTH_SD.hypot(LOAD_SD);

        vec![HistogramSpecification::with_labels(
            m_mean - 4.0 * m_sd,
            m_mean + 4.0 * m_sd,
            40,
            "margin",
            "margin",
            "prob. density",
        )]
    }
}

fn main() -> Result<(), DomainError> {
    // Analytic solution: the margin (strength - load) distribution and the
    // probability of failure from its cdf.
    let strength = Gaussian::new(STRENGTH_MEAN, STRENGTH_SD)?;
    let load = Gaussian::new(LOAD_MEAN, LOAD_SD)?;
    let margin_rv = margin(&strength, &load)?;

    println!(
        "Analytic failure probability: {:.4}",
        margin_rv.failure_probability(0.0)
    );

    // Monte Carlo solution.
    let model = RodModel::new()?;
    let names = model
        .inputs()
        .iter()
        .map(|input| input.name().to_string())
        .collect::<Vec<_>>();
    println!("sampling margin from inputs: {}", names.join(", "));

    let rng = Pcg64::new(0xcafef00dd15ea5e5, 0xa02bdbf7bb3c0a7ac28fa16a64abf96);
    let callback = SimpleCumulativeCallback {};
    let checkpoints = monte_carlo::sample(&model, &rng, &callback, &[1000, 10_000, 100_000]);

    let samples = checkpoints
        .iter()
        .flat_map(|chkpt| chkpt.trace().iter().copied())
        .collect::<Vec<_>>();
    let comparison = compare_tail(&margin_rv, &samples, 0.0)?;

    println!(
        "Monte-Carlo failure probability: {:.4}",
        comparison.empirical()
    );
    println!(
        "absolute deviation from the analytic value: {:.4}",
        comparison.absolute_error()
    );

    // Feed the sampled density and the analytic pdf to the reporting sink;
    // here that sink is a plain text table.
    let histogram = &checkpoints[checkpoints.len() - 1].histograms()[0];
    let specification = histogram.specification();

    println!(
        "\n{:>10} {:>14} {:>14}",
        specification.x_label(),
        "sampled",
        "analytic"
    );

    for (x, density) in histogram.density() {
        println!("{:10.2} {:14.6} {:14.6}", x, density, margin_rv.pdf(x));
    }

    Ok(())
}
