use rand::rngs::SmallRng;
use rand::{Rng, RngCore, SeedableRng};

/// Seeded pseudo-random source for procedural seeding.
///
/// Same seed, same sequence. Not suitable for anything security-sensitive.
#[derive(Debug, Clone)]
pub struct RandomSource {
    seed: u64,
    rng: SmallRng,
}

impl RandomSource {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// The seed this source was created from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform float in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        self.rng.random::<f64>()
    }

    /// True with probability `p`. `p <= 0` is never true, `p >= 1` always is.
    ///
    /// Always consumes exactly one draw so that sequences stay aligned
    /// regardless of `p`.
    pub fn bernoulli(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }
}

impl RngCore for RandomSource {
    fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        self.rng.fill_bytes(dst)
    }
}
