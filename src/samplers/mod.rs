//! Samplers that drive a stochastic model.
pub mod monte_carlo;
