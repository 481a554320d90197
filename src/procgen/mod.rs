pub mod noise;
pub mod rng;
pub mod seed;

pub use noise::NoiseField;
pub use rng::RandomSource;
pub use seed::{NoiseSeedConfig, SeedSource, seed_from_noise, seed_from_pattern};
