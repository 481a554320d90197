mod engine;
mod rule;
mod runner;

pub use engine::LifeEngine;
pub use rule::LifeRule;
pub use runner::{Observer, RunSummary, SimConfig, Simulation, run};
