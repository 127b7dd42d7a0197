//! This module contains everything related to histograms.
//!
//! Histograms record the density of the propagated output alongside the
//! scalar estimators, without any additional model evaluations. The
//! estimated density, together with the bin centers and the axis labels, is
//! the payload a plotting sink consumes; rendering is not this crate's
//! concern.
use crate::core::estimators::{BasicEstimators, MeanVar};
use num_traits::{Float, FromPrimitive};
use serde::{Deserialize, Serialize};
use std::ops::AddAssign;

/// Define a histogram of the propagated output to be filled while sampling.
///
/// A histogram is defined by the number of `bins` into which the range from
/// `left` (inclusive) to `right` (exclusive) is subdivided, together with a
/// name and labels for the two axes.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct HistogramSpecification<T>
where
    T: Copy,
{
    left: T,
    right: T,
    bins: usize,
    name: String,
    x_label: String,
    y_label: String,
}

impl<T> HistogramSpecification<T>
where
    T: Copy + Float + FromPrimitive,
{
    /// Constructs a histogram in which the range from `left` (inclusive) to
    /// `right` (exclusive) is subdivided into `bins` number of bins.
    pub fn new(left: T, right: T, bins: usize) -> Self {
        debug_assert!(left < right);
        debug_assert!(bins > 0);
        Self {
            left,
            right,
            bins,
            name: String::new(),
            x_label: String::new(),
            y_label: String::new(),
        }
    }

    /// Constructs a histogram that additionally has a `name` and labels for
    /// its two axes, `x_label` and `y_label`.
    pub fn with_labels(
        left: T,
        right: T,
        bins: usize,
        name: &str,
        x_label: &str,
        y_label: &str,
    ) -> Self {
        Self {
            name: name.to_string(),
            x_label: x_label.to_string(),
            y_label: y_label.to_string(),
            ..Self::new(left, right, bins)
        }
    }

    /// Returns the left boundary of the binned range.
    pub fn left(&self) -> T {
        self.left
    }

    /// Returns the right boundary of the binned range.
    pub fn right(&self) -> T {
        self.right
    }

    /// Returns the number of bins this histogram has.
    pub fn bins(&self) -> usize {
        self.bins
    }

    /// Returns the name of this histogram.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the label of the x-axis.
    pub fn x_label(&self) -> &str {
        &self.x_label
    }

    /// Returns the label of the y-axis.
    pub fn y_label(&self) -> &str {
        &self.y_label
    }

    /// Returns the width of a single bin.
    pub fn bin_width(&self) -> T {
        (self.right - self.left) / T::from_usize(self.bins).unwrap()
    }

    /// Get an empty accumulator for this histogram.
    pub(crate) fn accumulator(&self) -> HistogramAccumulator<T> {
        HistogramAccumulator {
            sums: vec![(T::zero(), T::zero()); self.bins],
            specification: self.clone(),
        }
    }

    /// Compute the index of the bin into which `x` belongs.
    fn compute_bin(&self, x: T) -> Option<usize> {
        if x < self.left || x >= self.right {
            return None;
        }

        let bins = T::from_usize(self.bins).unwrap();
        let index = ((x - self.left) / (self.right - self.left) * bins)
            .to_usize()
            .unwrap();

        // x == right is excluded above, but rounding in the division can
        // still land exactly on `bins`
        Some(index.min(self.bins - 1))
    }
}

/// Intermediate representation of a histogram.
///
/// For each bin, the sum and the sum of the squares of the filled weights
/// are stored. Once an iteration finishes, the accumulator is converted into
/// a [`HistogramEstimators`] holding a [`MeanVar`] per bin.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct HistogramAccumulator<T>
where
    T: Copy,
{
    sums: Vec<(T, T)>,
    specification: HistogramSpecification<T>,
}

impl<T> HistogramAccumulator<T>
where
    T: Copy + Float + FromPrimitive + AddAssign,
{
    /// Add `weight` to the bin containing `x`.
    ///
    /// Values outside the binned range and non-finite weights are ignored.
    pub fn fill(&mut self, x: T, weight: T) {
        if !x.is_finite() || !weight.is_finite() {
            return;
        }

        if let Some(bin) = self.specification.compute_bin(x) {
            self.sums[bin].0 += weight;
            self.sums[bin].1 += weight * weight;
        }
    }

    /// Convert this accumulator into a `HistogramEstimators`, where `draws`
    /// is the number of finite draws of the iteration that filled it.
    pub fn into_estimators(self, draws: usize) -> HistogramEstimators<T> {
        let calls = T::from_usize(draws).unwrap();
        HistogramEstimators {
            draws,
            mean_var: self
                .sums
                .into_iter()
                .map(|(sum, sumsq)| {
                    MeanVar::new(
                        sum / calls,
                        (sumsq - sum * sum / calls) / calls / (calls - T::one()),
                    )
                })
                .collect(),
            specification: self.specification,
        }
    }
}

/// Estimators for histograms.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct HistogramEstimators<T>
where
    T: Copy,
{
    specification: HistogramSpecification<T>,
    draws: usize,
    mean_var: Vec<MeanVar<T>>,
}

impl<T> HistogramEstimators<T>
where
    T: Copy + Float + FromPrimitive,
{
    /// Returns the estimators for all bins.
    pub fn bins(&self) -> &Vec<MeanVar<T>> {
        &self.mean_var
    }

    /// Returns the specification this histogram was filled from.
    pub fn specification(&self) -> &HistogramSpecification<T> {
        &self.specification
    }

    /// Returns the number of finite draws of the iteration that filled this
    /// histogram.
    pub fn draws(&self) -> usize {
        self.draws
    }

    /// Returns the estimated probability density as (bin center, density)
    /// pairs. Integrating the density over the binned range yields the
    /// fraction of draws that fell inside it.
    pub fn density(&self) -> Vec<(T, T)> {
        let width = self.specification.bin_width();
        let two = T::one() + T::one();

        self.mean_var
            .iter()
            .enumerate()
            .map(|(bin, mv)| {
                let center = self.specification.left()
                    + width * (T::from_usize(bin).unwrap() + T::one() / two);
                (center, mv.mean() / width)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn fill_and_estimate() {
        let spec = HistogramSpecification::with_labels(0.0, 10.0, 5, "margin", "x", "density");
        let mut acc = spec.accumulator();

        acc.fill(1.1, 1.0);
        acc.fill(3.2, 1.0);
        acc.fill(3.9, 1.0);
        // outside the range, ignored
        acc.fill(-0.5, 1.0);
        acc.fill(10.0, 1.0);
        acc.fill(f64::NAN, 1.0);

        let estimators = acc.into_estimators(4);

        assert_eq!(estimators.draws(), 4);
        assert_eq!(estimators.bins().len(), 5);
        assert_approx_eq!(estimators.bins()[0].mean(), 0.25, 1e-12);
        assert_approx_eq!(estimators.bins()[1].mean(), 0.5, 1e-12);
        assert_approx_eq!(estimators.bins()[2].mean(), 0.0, 1e-12);
    }

    #[test]
    fn density_integrates_to_the_covered_fraction() {
        let spec = HistogramSpecification::new(0.0, 1.0, 4);
        let mut acc = spec.accumulator();

        for x in &[0.1, 0.3, 0.6, 0.9] {
            acc.fill(*x, 1.0);
        }

        let density = acc.into_estimators(4).density();
        let integral: f64 = density.iter().map(|(_, d)| d * 0.25).sum();

        assert_approx_eq!(integral, 1.0, 1e-12);
        assert_approx_eq!(density[0].0, 0.125, 1e-12);
    }

    #[test]
    fn values_on_the_right_edge_are_excluded() {
        let spec = HistogramSpecification::new(-1.0, 1.0, 10);
        let mut acc = spec.accumulator();

        acc.fill(1.0, 1.0);
        let estimators = acc.into_estimators(1);

        assert!(estimators.bins().iter().all(|mv| mv.mean() == 0.0));
    }
}
