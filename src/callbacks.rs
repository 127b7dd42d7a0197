//! Implementation of different callback functions.
//!
//! Callbacks are the crate's reporting seam: the sampler hands every
//! finished iteration to the callback, which may print it, accumulate it or
//! persist it. Plot rendering belongs behind this seam as well and is not
//! part of this crate.
use crate::core::estimators::Estimators;
use crate::core::Checkpoint;
use num_traits::{Float, FromPrimitive};
use serde::Serialize;
use std::fmt::Display;
use std::ops::AddAssign;
use std::path::{Path, PathBuf};

/// Trait for implementing callbacks for iterative Monte Carlo sampling.
pub trait Callback<T, R, E>
where
    T: Copy,
{
    /// This method is called after each successfully finished iteration and
    /// may report information about it.
    fn print(&self, chkpts: &[Checkpoint<T, R, E>]);
}

/// A callback function that does nothing.
pub struct SinkCallback {}

impl<T, R, E> Callback<T, R, E> for SinkCallback
where
    T: Copy,
{
    fn print(&self, _: &[Checkpoint<T, R, E>]) {}
}

/// A callback function that prints the result of each individual iteration.
pub struct SimpleCallback {}

impl<T, R, E> Callback<T, R, E> for SimpleCallback
where
    T: AddAssign + Display + Float + FromPrimitive,
    E: Estimators<T>,
{
    fn print(&self, chkpts: &[Checkpoint<T, R, E>]) {
        let iteration = chkpts.len();
        // Make sure that there is at least one checkpoint
        // otherwise do nothing.
        if let Some(chkpt) = chkpts.last() {
            let estimators = chkpt.estimators();
            println!("iteration {} finished.", iteration - 1);
            println!(
                "this iteration: N={} mean={} \u{b1} {}",
                estimators.draws(),
                estimators.mean(),
                estimators.std()
            );
        }
    }
}

/// Simple cumulative callback that shows the result of the individual
/// iteration together with the cumulative result combining it with the
/// previous iterations.
pub struct SimpleCumulativeCallback {}

impl<T, R, E> Callback<T, R, E> for SimpleCumulativeCallback
where
    T: AddAssign + Display + Float + FromPrimitive,
    E: Clone + Estimators<T> + std::default::Default + std::ops::Add<Output = E>,
{
    fn print(&self, chkpts: &[Checkpoint<T, R, E>]) {
        let iteration = chkpts.len();

        if iteration == 0 {
            return;
        }

        let it_draws = chkpts[iteration - 1].estimators().draws();
        let it_mean = chkpts[iteration - 1].estimators().mean();
        let it_std = chkpts[iteration - 1].estimators().std();

        // Compute the cumulative result.
        let cumulative = chkpts
            .iter()
            .map(|c| c.estimators())
            .fold(E::default(), |acc, e| acc + e.clone());

        println!(
            "[iteration {}: N={} mean={} \u{b1} {}] [cumulative: N={}, mean={} \u{b1} {}]",
            iteration - 1,
            it_draws,
            it_mean,
            it_std,
            cumulative.draws(),
            cumulative.mean(),
            cumulative.std()
        );
    }
}

/// A callback that serializes all checkpoints, including their sample
/// traces, to a JSON file after every iteration.
///
/// The file is rewritten each time, so it always holds the complete run up
/// to the latest finished iteration.
pub struct FileWriterCallback {
    path: PathBuf,
}

impl FileWriterCallback {
    /// Create a callback writing to `path`.
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }
}

impl<T, R, E> Callback<T, R, E> for FileWriterCallback
where
    T: Copy + Serialize,
    R: Serialize,
    E: Serialize,
{
    fn print(&self, chkpts: &[Checkpoint<T, R, E>]) {
        let result = serde_json::to_string(chkpts)
            .map_err(std::io::Error::from)
            .and_then(|json| std::fs::write(&self.path, json));

        if let Err(err) = result {
            eprintln!(
                "failed to write checkpoints to {}: {}",
                self.path.display(),
                err
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::core::estimators::BasicEstimators;
    use crate::core::{Input, InputDistribution, StochasticModel};
    use crate::samplers::monte_carlo::{self, SampleEstimators};
    use rand_pcg::Pcg64;
    use std::fs::read_to_string;
    use tempfile::NamedTempFile;

    struct Doubler {}

    impl StochasticModel<f64> for Doubler {
        fn inputs(&self) -> Vec<Input<f64>> {
            vec![Input::new("x", InputDistribution::normal(1.0, 0.1).unwrap())]
        }

        fn propagate(&self, x: &[f64]) -> f64 {
            2.0 * x[0]
        }
    }

    #[test]
    fn file_writer_round_trip() {
        let file = NamedTempFile::new().unwrap();
        let path = file.path();

        let rng = Pcg64::new(0xcafef00dd15ea5e5, 0xa02bdbf7bb3c0a7ac28fa16a64abf96);
        let callback = FileWriterCallback::new(path);
        let original = monte_carlo::sample(&Doubler {}, &rng, &callback, &[100, 50]);

        let json = read_to_string(path).expect("unable to read the checkpoint file");
        let read: Vec<Checkpoint<f64, Pcg64, SampleEstimators<f64>>> =
            serde_json::from_str(&json).expect("unable to deserialize checkpoints from json");

        assert_eq!(read.len(), original.len());

        for (read, original) in read.iter().zip(original.iter()) {
            assert_eq!(read.estimators().draws(), original.estimators().draws());
            assert_eq!(read.estimators().mean(), original.estimators().mean());
            assert_eq!(read.estimators().var(), original.estimators().var());
            assert_eq!(read.trace(), original.trace());

            // the stored generator states allow an identical resume
            assert_eq!(
                serde_json::to_string(read.rng_after()).unwrap(),
                serde_json::to_string(original.rng_after()).unwrap()
            );
        }
    }
}
