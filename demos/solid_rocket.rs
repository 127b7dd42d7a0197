//! Monte Carlo method applied to solid rocket motor chamber pressure
//! uncertainty.
//!
//! We are trying to predict the expected chamber pressure of a new solid
//! rocket motor design, and to understand the uncertainty of this estimate.
//! We assume that distributions for the input factors (e.g. propellant
//! properties) have been estimated from small-scale experiments, and wish to
//! determine how uncertainty in these inputs propagates into uncertainty in
//! the (time-average) chamber pressure.
//!
//! The STAR-27 apogee motor serves as an example; nominal values are taken
//! from Rocket Propulsion Elements, 8th edition, table 12-3. The
//! distributions around them are guesses.
//!
//! Unlike the rod example, the chamber pressure is a nonlinear function of
//! its inputs, so there is no closed-form reference; the sampled moments and
//! the density are the result.

use mcprop::callbacks::FileWriterCallback;
use mcprop::core::{Input, InputDistribution, StochasticModel};
use mcprop::error::DomainError;
use mcprop::estimators::{BasicEstimators, Estimators};
use mcprop::histograms::HistogramSpecification;
use mcprop::samplers::monte_carlo;

use rand_pcg::Pcg64;
use std::path::Path;

/// Characteristic velocity [units: meter second**-1]
const C_STAR: f64 = 1579.0;

struct ChamberPressureModel {
    inputs: Vec<Input<f64>>,
}

impl ChamberPressureModel {
    fn new() -> Result<Self, DomainError> {
        Ok(Self {
            inputs: vec![
                // Burning area, time averaged [units: meter**2]
                Input::new("burning_area", InputDistribution::normal(0.899, 0.01)?),
                // Throat area [units: 1e-3 meter**2]
                Input::new(
                    "throat_area_scaled",
                    InputDistribution::normal(3.81, 0.03)?,
                ),
                // Propellant solid density [units: kilogram meter**-3]
                Input::new(
                    "propellant_density",
                    InputDistribution::normal(1774.0, 20.0)?,
                ),
                Input::new(
                    "characteristic_velocity",
                    InputDistribution::fixed(C_STAR),
                ),
                // Burn rate coefficient [units: 1e-5 meter second**-1 pascal**-n]
                Input::new(
                    "burn_rate_coefficient_scaled",
                    InputDistribution::log_normal(2.16, 0.058)?,
                ),
                // Burn rate exponent [units: dimensionless]
                Input::new(
                    "burn_rate_exponent",
                    InputDistribution::beta_from_moments(0.28, 0.01)?,
                ),
            ],
        })
    }
}

impl StochasticModel<f64> for ChamberPressureModel {
    fn inputs(&self) -> Vec<Input<f64>> {
        self.inputs.clone()
    }

    fn propagate(&self, x: &[f64]) -> f64 {
        let burning_area = x[0];
        let throat_area = x[1] * 1e-3;
        let density = x[2];
        let c_star = x[3];
        let burn_rate_coefficient = x[4] * 1e-5;
        let burn_rate_exponent = x[5];

        // Chamber pressure [units: megapascal]
        ((burning_area / throat_area) * density * c_star * burn_rate_coefficient)
            .powf(1.0 / (1.0 - burn_rate_exponent))
            * 1e-6
    }

    fn histograms(&self) -> Vec<HistogramSpecification<f64>> {
        vec![HistogramSpecification::with_labels(
            1.0,
            10.0,
            72,
            "p_c",
            "chamber pressure [MPa]",
            "prob. density",
        )]
    }
}

fn main() -> Result<(), DomainError> {
    let model = ChamberPressureModel::new()?;

    println!("propagating chamber pressure from:");
    for input in model.inputs() {
        println!("  {}", input.name());
    }

    let rng = Pcg64::new(0xcafef00dd15ea5e5, 0xa02bdbf7bb3c0a7ac28fa16a64abf96);
    let trace_path = Path::new("solid_rocket_traces.json");
    let callback = FileWriterCallback::new(trace_path);
    let checkpoints = monte_carlo::sample(&model, &rng, &callback, &[1000]);

    let estimators = checkpoints[0].estimators();

    println!(
        "\nchamber pressure: {:.3} \u{b1} {:.3} MPa (N={})",
        estimators.mean(),
        estimators.std(),
        estimators.draws()
    );
    println!(
        "standard error of the mean: {:.4} MPa",
        estimators.standard_error()
    );

    if estimators.non_finite_draws() > 0 {
        println!(
            "discarded {} non-finite draws",
            estimators.non_finite_draws()
        );
    }

    let histogram = &checkpoints[0].histograms()[0];
    let specification = histogram.specification();

    println!(
        "\n{:>24} {:>14}",
        specification.x_label(),
        specification.y_label()
    );

    for (x, density) in histogram.density() {
        if density > 0.0 {
            println!("{:24.3} {:14.6}", x, density);
        }
    }

    println!("\ncheckpoints written to {}", trace_path.display());

    Ok(())
}
