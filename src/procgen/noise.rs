use rand::seq::SliceRandom;

use super::rng::RandomSource;

const TABLE_SIZE: usize = 256;

/// 2D Perlin gradient noise over a permutation table shuffled once at
/// construction.
///
/// Output is normalized to `[0, 1]`. Integer lattice points always sample to
/// exactly `0.5`, so callers sampling grid cells should scale coordinates
/// down (see `NoiseSeedConfig::scale`).
#[derive(Debug, Clone)]
pub struct NoiseField {
    /// Permutation of `0..256` repeated twice so `perm[i + 1]` never needs wrapping.
    perm: [u8; TABLE_SIZE * 2],
}

impl NoiseField {
    pub fn new(rng: &mut RandomSource) -> Self {
        let mut table: Vec<u8> = (0..=u8::MAX).collect();
        table.shuffle(rng);

        let mut perm = [0u8; TABLE_SIZE * 2];
        for (i, slot) in perm.iter_mut().enumerate() {
            *slot = table[i % TABLE_SIZE];
        }
        Self { perm }
    }

    fn hash(&self, xi: usize, yi: usize) -> u8 {
        self.perm[self.perm[xi] as usize + yi]
    }

    /// Sample the field at `(x, y)`.
    pub fn noise(&self, x: f64, y: f64) -> f64 {
        let x0 = x.floor();
        let y0 = y.floor();
        let xi = (x0 as i64).rem_euclid(TABLE_SIZE as i64) as usize;
        let yi = (y0 as i64).rem_euclid(TABLE_SIZE as i64) as usize;
        let xf = x - x0;
        let yf = y - y0;

        let u = fade(xf);
        let v = fade(yf);

        let aa = self.hash(xi, yi);
        let ab = self.hash(xi, yi + 1);
        let ba = self.hash(xi + 1, yi);
        let bb = self.hash(xi + 1, yi + 1);

        let x1 = lerp(grad(aa, xf, yf), grad(ba, xf - 1.0, yf), u);
        let x2 = lerp(grad(ab, xf, yf - 1.0), grad(bb, xf - 1.0, yf - 1.0), u);

        (lerp(x1, x2, v) * 0.5 + 0.5).clamp(0.0, 1.0)
    }

    /// Fractal sum of `octaves` noise layers, each at double the frequency
    /// and `persistence` times the amplitude of the previous one.
    ///
    /// Normalized back to `[0, 1]`. Zero octaves is treated as one.
    pub fn fractal(&self, x: f64, y: f64, octaves: u32, persistence: f64) -> f64 {
        let mut total = 0.0;
        let mut amplitude = 1.0;
        let mut frequency = 1.0;
        let mut max = 0.0;

        for _ in 0..octaves.max(1) {
            total += (self.noise(x * frequency, y * frequency) * 2.0 - 1.0) * amplitude;
            max += amplitude;
            amplitude *= persistence;
            frequency *= 2.0;
        }

        if max == 0.0 {
            return 0.5;
        }
        (total / max * 0.5 + 0.5).clamp(0.0, 1.0)
    }
}

fn fade(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + t * (b - a)
}

/// Dot product with one of four diagonal gradients picked by `hash`.
fn grad(hash: u8, x: f64, y: f64) -> f64 {
    let u = if hash & 1 == 0 { x } else { -x };
    let v = if hash & 2 == 0 { y } else { -y };
    u + v
}
