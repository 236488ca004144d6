// Domain layer - the automaton engine
pub mod domain;

// Application layer - tick scheduling
pub mod application;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Cell, Grid, Pattern, presets, LifeEngine, EngineConfig, StepReport};
pub use application::Simulation;
pub use ui::Button;
