mod cell;
pub mod config;
pub mod engine;
pub mod grid;
mod patterns;
mod rules;

pub use cell::Cell;
pub use config::{ConfigError, EngineConfig};
pub use engine::{Heuristic, LifeEngine, MAX_AGE, StepReport};
pub use grid::{CELL_COUNT, Grid, HEIGHT, WIDTH};
pub use patterns::{Pattern, presets};
pub use rules::Growth;
