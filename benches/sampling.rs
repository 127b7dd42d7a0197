use criterion::{criterion_group, criterion_main, Criterion};

use mcprop::callbacks::SinkCallback;
use mcprop::core::{Input, InputDistribution, StochasticModel};
use mcprop::samplers::monte_carlo;

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

fn benchmark_sampling(c: &mut Criterion) {
    let rng = Pcg64::new(0xcafef00dd15ea5e5, 0xa02bdbf7bb3c0a7ac28fa16a64abf96);
    let model = RodModel {};
    let callback = SinkCallback {};

    c.bench_function("rod margin, 10k draws", |b| {
        b.iter(|| monte_carlo::sample(&model, &rng, &callback, &[10_000]))
    });
}

criterion_group!(benches, benchmark_sampling);
criterion_main!(benches);
