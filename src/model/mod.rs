#[macro_use]
mod macros;

pub mod cell;
pub mod coord;
pub mod pattern;

pub use cell::CellState;
pub use coord::Coord;
pub use pattern::PatternKind;
