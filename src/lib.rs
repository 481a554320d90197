pub mod apg;
pub mod error;
pub mod grid;
pub mod model;
pub mod procgen;
pub mod sim;

pub use apg::ApgCode;
pub use error::{ApgError, Error, GridError};
pub use grid::ToroidalGrid;
pub use model::{CellState, Coord, PatternKind};
pub use procgen::{NoiseField, RandomSource};
pub use sim::{LifeEngine, LifeRule, SimConfig, Simulation};
