//! Synthetic test signals with seeded, reproducible noise

mod signal;

pub use signal::{NoisySineConfig, add_white_noise, generate_noisy_sine, generate_sine};
