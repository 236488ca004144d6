use crate::domain::{LifeEngine, StepReport, presets};

/// Default tick interval of the effect, 150 ms
pub const DEFAULT_UPDATES_PER_SECOND: f32 = 1000.0 / 150.0;

/// Simulation schedules the engine against wall-clock frames.
/// This is the application layer that coordinates domain logic.
pub struct Simulation {
    pub engine: LifeEngine,
    pub is_running: bool,
    pub generation: u64,
    pub update_timer: f32,
    pub updates_per_second: f32,
    /// Outcome of the most recent step, if any ran since the last reset
    pub last_report: Option<StepReport>,
}

impl Simulation {
    /// Start from the startup gliders, running
    pub fn new(engine: LifeEngine) -> Self {
        let mut simulation = Self {
            engine,
            is_running: true,
            generation: 0,
            update_timer: 0.0,
            updates_per_second: DEFAULT_UPDATES_PER_SECOND,
            last_report: None,
        };
        simulation.engine.reset(&presets::STARTUP_GLIDERS);
        simulation
    }

    /// Set running state (builder pattern)
    pub fn with_running(mut self, running: bool) -> Self {
        self.is_running = running;
        self
    }

    /// Toggle play/pause state
    pub fn toggle_running(mut self) -> Self {
        self.is_running = !self.is_running;
        self
    }

    /// Put the startup gliders back and reset the generation counter
    pub fn reset(mut self) -> Self {
        self.engine.reset(&presets::STARTUP_GLIDERS);
        self.generation = 0;
        self.update_timer = 0.0;
        self.last_report = None;
        self
    }

    /// Ask the engine to inject random cells on its next step
    pub fn request_seed(mut self) -> Self {
        self.engine.request_seed();
        self
    }

    /// Adjust simulation speed
    pub fn adjust_speed(mut self, delta: f32) -> Self {
        self.updates_per_second = (self.updates_per_second + delta).clamp(1.0, 60.0);
        self
    }

    /// Advance by one frame; steps the engine at most once
    pub fn tick(mut self, delta_time: f32) -> Self {
        if !self.is_running {
            return self;
        }

        self.update_timer += delta_time;
        let update_interval = 1.0 / self.updates_per_second;

        if self.update_timer >= update_interval {
            self.last_report = Some(self.engine.step());
            self.generation += 1;
            self.update_timer = 0.0;
        }

        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn simulation() -> Simulation {
        Simulation::new(LifeEngine::with_seed(1))
    }

    #[test]
    fn test_starts_with_gliders() {
        let sim = simulation();
        assert!(sim.is_running);
        assert_eq!(sim.generation, 0);
        assert_eq!(sim.engine.live_count(), 10);
    }

    #[test]
    fn test_paused_does_not_step() {
        let sim = simulation().with_running(false).tick(10.0);
        assert_eq!(sim.generation, 0);
        assert!(sim.last_report.is_none());
    }

    #[test]
    fn test_steps_once_per_interval() {
        let mut sim = simulation();
        sim = sim.tick(0.1);
        assert_eq!(sim.generation, 0);

        sim = sim.tick(0.06);
        assert_eq!(sim.generation, 1);
        assert_eq!(sim.last_report.map(|r| r.live), Some(10));

        // A long frame still advances only one generation
        sim = sim.tick(5.0);
        assert_eq!(sim.generation, 2);
    }

    #[test]
    fn test_speed_is_clamped() {
        let sim = simulation().adjust_speed(100.0);
        assert_eq!(sim.updates_per_second, 60.0);

        let sim = sim.adjust_speed(-100.0);
        assert_eq!(sim.updates_per_second, 1.0);
    }

    #[test]
    fn test_toggle_running() {
        let sim = simulation().toggle_running();
        assert!(!sim.is_running);
        assert!(sim.toggle_running().is_running);
    }

    #[test]
    fn test_request_seed_latches_on_engine() {
        let sim = simulation().request_seed();
        assert!(sim.engine.is_seed_requested());

        let sim = sim.tick(1.0);
        assert!(!sim.engine.is_seed_requested());
        assert!(sim.last_report.is_some());
    }

    #[test]
    fn test_reset_restores_gliders() {
        let mut sim = simulation();
        for _ in 0..20 {
            sim = sim.tick(1.0);
        }
        assert_eq!(sim.generation, 20);

        let sim = sim.reset();
        assert_eq!(sim.generation, 0);
        assert_eq!(sim.engine.live_count(), 10);
        assert!(sim.last_report.is_none());
    }
}
