pub mod generate;

pub use generate::{impulse, sine, tone_amplitude, two_tone};
