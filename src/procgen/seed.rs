use serde::{Deserialize, Serialize};

use super::noise::NoiseField;
use super::rng::RandomSource;
use crate::apg::{self, ApgCode};
use crate::error::ApgError;
use crate::grid::ToroidalGrid;
use crate::model::{CellState, Coord};

/// Parameters for seeding a grid from noise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoiseSeedConfig {
    /// Multiplier applied to cell coordinates before sampling. Integer
    /// lattice points all sample to 0.5, so this should not be a whole number.
    pub scale: f64,
    /// A cell is a candidate when its noise value is at least this.
    pub threshold: f64,
    /// Probability that a candidate cell actually starts alive.
    pub density: f64,
    /// Noise octaves summed per sample.
    pub octaves: u32,
    /// Amplitude falloff between octaves.
    pub persistence: f64,
}

impl Default for NoiseSeedConfig {
    fn default() -> Self {
        Self {
            scale: 0.1,
            threshold: 0.6,
            density: 1.0,
            octaves: 1,
            persistence: 0.5,
        }
    }
}

/// Where a simulation's initial live cells come from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeedSource {
    Noise(NoiseSeedConfig),
    /// Decode an apgcode and stamp it at `origin`, or centered when absent.
    Pattern {
        code: String,
        #[serde(default)]
        origin: Option<Coord>,
    },
}

impl Default for SeedSource {
    fn default() -> Self {
        SeedSource::Noise(NoiseSeedConfig::default())
    }
}

/// Set cells alive where thresholded noise and a Bernoulli trial agree.
///
/// Cells already alive are left alive. Returns the number of cells set.
pub fn seed_from_noise(
    grid: &mut ToroidalGrid<CellState>,
    noise: &NoiseField,
    rng: &mut RandomSource,
    config: &NoiseSeedConfig,
) -> usize {
    if !(0.0..=1.0).contains(&config.density) {
        tracing::warn!(
            density = config.density,
            "noise seed density outside [0, 1]"
        );
    }

    let mut seeded = 0;
    for y in 0..grid.height() as i64 {
        for x in 0..grid.width() as i64 {
            let n = noise.fractal(
                x as f64 * config.scale,
                y as f64 * config.scale,
                config.octaves,
                config.persistence,
            );
            if n >= config.threshold && rng.bernoulli(config.density) {
                grid.set(x, y, CellState::Alive);
                seeded += 1;
            }
        }
    }
    tracing::debug!(seeded, seed = rng.seed(), "seeded grid from noise");
    seeded
}

/// Origin that centers a decoded pattern on the grid.
pub fn centered_origin(grid: &ToroidalGrid<CellState>, cells: &[Coord]) -> Coord {
    match apg::bounding_box(cells) {
        Some((min, max)) => Coord::new(
            (grid.width() as i64 - (max.x - min.x + 1)) / 2 - min.x,
            (grid.height() as i64 - (max.y - min.y + 1)) / 2 - min.y,
        ),
        None => Coord::default(),
    }
}

/// Stamp a decoded apgcode onto the grid, wrapping around the edges.
///
/// The whole pattern is decoded before any cell is written, so a malformed
/// code leaves the grid untouched. `None` centers the pattern. Returns the
/// number of cells set.
pub fn seed_from_pattern(
    grid: &mut ToroidalGrid<CellState>,
    code: &ApgCode,
    origin: Option<Coord>,
) -> Result<usize, ApgError> {
    let cells = code.decode()?;
    let origin = match origin {
        Some(o) => grid.wrap(o.x, o.y),
        None => centered_origin(grid, &cells),
    };
    for &offset in &cells {
        let c = origin + offset;
        grid.set(c.x, c.y, CellState::Alive);
    }
    tracing::debug!(
        code = %code,
        kind = %code.kind(),
        period = code.period(),
        %origin,
        "seeded grid from pattern"
    );
    Ok(cells.len())
}
