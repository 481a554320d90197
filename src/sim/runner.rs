use serde::{Deserialize, Serialize};

use super::engine::LifeEngine;
use super::rule::LifeRule;
use crate::apg::ApgCode;
use crate::error::{ConfigError, Error};
use crate::grid::ToroidalGrid;
use crate::model::CellState;
use crate::procgen::{NoiseField, RandomSource, SeedSource, seed_from_noise, seed_from_pattern};

/// Configuration for a simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub width: i64,
    pub height: i64,
    /// RNG seed for noise seeding. Ignored by pattern seeding.
    pub seed: u64,
    pub rule: LifeRule,
    pub source: SeedSource,
}

impl SimConfig {
    pub fn new(width: i64, height: i64, seed: u64) -> Self {
        Self {
            width,
            height,
            seed,
            ..Self::default()
        }
    }

    /// Config seeded from an apgcode, centered on the grid.
    pub fn with_pattern(width: i64, height: i64, code: &str) -> Self {
        Self {
            width,
            height,
            source: SeedSource::Pattern {
                code: code.to_string(),
                origin: None,
            },
            ..Self::default()
        }
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        // 1280x512 canvas at 8px tiles
        Self {
            width: 160,
            height: 64,
            seed: 0,
            rule: LifeRule::CONWAY,
            source: SeedSource::default(),
        }
    }
}

/// Receives the grid after seeding and after every tick.
///
/// Renderers implement this; closures taking `(generation, grid)` do too.
pub trait Observer {
    fn observe(&mut self, generation: u64, grid: &ToroidalGrid<CellState>);
}

impl<F> Observer for F
where
    F: FnMut(u64, &ToroidalGrid<CellState>),
{
    fn observe(&mut self, generation: u64, grid: &ToroidalGrid<CellState>) {
        self(generation, grid)
    }
}

/// Outcome of [`run`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Ticks actually executed.
    pub ticks: u64,
    pub final_population: usize,
    /// True if the run ended early because a tick changed nothing.
    pub stabilized: bool,
}

/// A seeded grid plus the engine that advances it.
#[derive(Debug, Clone)]
pub struct Simulation {
    grid: ToroidalGrid<CellState>,
    engine: LifeEngine,
    generation: u64,
}

impl Simulation {
    /// Build and seed a grid as described by `config`.
    pub fn new(config: &SimConfig) -> Result<Self, Error> {
        let mut grid = ToroidalGrid::new(config.width, config.height, CellState::Dead)?;

        let seeded = match &config.source {
            SeedSource::Noise(noise_config) => {
                let mut rng = RandomSource::new(config.seed);
                let noise = NoiseField::new(&mut rng);
                seed_from_noise(&mut grid, &noise, &mut rng, noise_config)
            }
            SeedSource::Pattern { code, origin } => {
                let code = ApgCode::parse(code)?;
                seed_from_pattern(&mut grid, &code, *origin)?
            }
        };
        tracing::info!(
            width = config.width,
            height = config.height,
            rule = %config.rule,
            seeded,
            "simulation seeded"
        );

        Ok(Self::from_grid(grid, LifeEngine::new(config.rule)))
    }

    /// Wrap an already-populated grid.
    pub fn from_grid(grid: ToroidalGrid<CellState>, engine: LifeEngine) -> Self {
        Self {
            grid,
            engine,
            generation: 0,
        }
    }

    pub fn grid(&self) -> &ToroidalGrid<CellState> {
        &self.grid
    }

    pub fn engine(&self) -> &LifeEngine {
        &self.engine
    }

    /// Number of ticks applied so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> usize {
        LifeEngine::population(&self.grid)
    }

    /// Advance one generation. Returns the number of cells that changed.
    pub fn tick(&mut self) -> usize {
        let changed = self.engine.step(&mut self.grid);
        self.generation += 1;
        tracing::debug!(
            generation = self.generation,
            changed,
            population = self.population(),
            "tick"
        );
        changed
    }

    /// Consume the simulation, returning its grid.
    pub fn into_grid(self) -> ToroidalGrid<CellState> {
        self.grid
    }
}

/// Tick `sim` up to `generations` times, showing each generation to `observer`.
///
/// The observer first sees the current grid, then the grid after every
/// tick. With `stop_when_stable`, the run ends after the first tick that
/// changes no cells (that generation is still observed).
pub fn run(
    sim: &mut Simulation,
    generations: u64,
    stop_when_stable: bool,
    observer: &mut dyn Observer,
) -> RunSummary {
    observer.observe(sim.generation(), sim.grid());

    let mut ticks = 0;
    let mut stabilized = false;
    while ticks < generations {
        let changed = sim.tick();
        ticks += 1;
        observer.observe(sim.generation(), sim.grid());
        if stop_when_stable && changed == 0 {
            stabilized = true;
            break;
        }
    }

    let summary = RunSummary {
        ticks,
        final_population: sim.population(),
        stabilized,
    };
    tracing::info!(
        ticks = summary.ticks,
        population = summary.final_population,
        stabilized,
        "run finished"
    );
    summary
}
