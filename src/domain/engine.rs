//! The Game of Life effect for the 16x5 LED matrix.
//!
//! [`LifeEngine`] advances one generation per [`LifeEngine::step`] and keeps
//! the board interesting on its own: an empty board is reseeded after a few
//! ticks, and a population that stops changing gets one generation of
//! relaxed births to shake it loose.

use log::{debug, trace};
use rand::{Rng, SeedableRng, rngs::StdRng};

use super::config::{ConfigError, EngineConfig, SEED_DRAW_RANGE};
use super::grid::{CELL_COUNT, HEIGHT, WIDTH};
use super::{Cell, Grid, Growth, Pattern, presets};

/// Age at which a surviving cell stops getting older
pub const MAX_AGE: u8 = 16;

/// Heuristic that fired at the end of a step
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Heuristic {
    /// The board stayed empty too long and was seeded with `added` cells
    Reseeded { added: usize },
    /// The population stagnated; the next step uses [`Growth::Expanded`]
    ExpansionArmed,
}

/// What happened during one call to [`LifeEngine::step`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct StepReport {
    /// Cells added by a pending seed request before the generation ran
    pub injected: usize,
    pub births: usize,
    pub deaths: usize,
    /// Live cells in the committed generation. When the board is reseeded
    /// this is the count before the reseed; see [`LifeEngine::live_count`]
    /// for the board as it stands.
    pub live: usize,
    /// Whether this generation used the relaxed birth rule
    pub expanded: bool,
    pub heuristic: Option<Heuristic>,
}

/// LifeEngine owns the double-buffered board, the per-cell ages and the
/// stagnation counters.
///
/// All coordinate accessors panic when `x >= 16` or `y >= 5`.
#[derive(Clone, Debug)]
pub struct LifeEngine {
    current: Grid,
    next: Grid,
    ages: [u8; CELL_COUNT],
    live_count: usize,
    previous_live_count: usize,
    empty_streak: u8,
    stable_streak: u8,
    growth: Growth,
    seed_requested: bool,
    config: EngineConfig,
    rng: StdRng,
}

impl Default for LifeEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl LifeEngine {
    /// Create an engine with an empty board, seeded from the thread RNG
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_rng(&mut rand::rng()))
    }

    /// Create an engine whose random draws are reproducible
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        Self {
            current: Grid::new(),
            next: Grid::new(),
            ages: [0; CELL_COUNT],
            live_count: 0,
            previous_live_count: 0,
            empty_streak: 0,
            stable_streak: 0,
            growth: Growth::Standard,
            seed_requested: false,
            config: EngineConfig::default(),
            rng,
        }
    }

    /// Replace the heuristic parameters (builder pattern)
    pub fn with_config(mut self, config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    /// Clear the board, ages and counters, then drop a glider at each offset
    pub fn reset(&mut self, gliders: &[(usize, usize)]) {
        self.current.clear();
        self.next.clear();
        self.ages = [0; CELL_COUNT];
        self.live_count = 0;
        self.previous_live_count = 0;
        self.empty_streak = 0;
        self.stable_streak = 0;
        self.growth = Growth::Standard;
        self.seed_requested = false;

        let glider = presets::glider();
        for &(x, y) in gliders {
            glider.place_on(&mut self.current, x, y);
        }
        self.live_count = self.current.count_alive();
        debug!("reset with {} glider(s), {} live cells", gliders.len(), self.live_count);
    }

    /// Bring a pattern to life with its top-left corner at (x, y).
    /// Existing live cells are kept.
    pub fn place(&mut self, pattern: &Pattern, x: usize, y: usize) {
        pattern.place_on(&mut self.current, x, y);
        self.live_count = self.current.count_alive();
    }

    /// Give every cell a chance to come alive: a draw in `0..10` strictly
    /// greater than `density` sets it. Live cells are never cleared.
    /// Returns the number of cells that were brought to life.
    pub fn randomize(&mut self, density: u8) -> usize {
        let mut added = 0;
        for y in 0..HEIGHT {
            for x in 0..WIDTH {
                let draw: u8 = self.rng.random_range(0..SEED_DRAW_RANGE);
                if draw > density && !self.current.get(x, y).is_alive() {
                    self.current.set(x, y, Cell::Alive);
                    added += 1;
                }
            }
        }
        self.live_count = self.current.count_alive();
        added
    }

    /// Latch an "inject randomness" request for the next step.
    /// Repeated requests before that step collapse into one.
    pub fn request_seed(&mut self) {
        self.seed_requested = true;
    }

    pub fn is_seed_requested(&self) -> bool {
        self.seed_requested
    }

    /// Live neighbors of (x, y) on the torus
    pub fn neighbor_count(&self, x: usize, y: usize) -> u8 {
        self.current.count_live_neighbors(x, y)
    }

    /// Advance the board by one generation and run the stagnation checks
    pub fn step(&mut self) -> StepReport {
        let mut report = StepReport::default();

        if std::mem::take(&mut self.seed_requested) {
            report.injected = self.randomize(self.config.inject_density);
            debug!("seed request added {} cells", report.injected);
        }

        let growth = std::mem::take(&mut self.growth);
        report.expanded = growth.is_expanded();

        for y in 0..HEIGHT {
            for x in 0..WIDTH {
                let cell = Grid::index(x, y);
                let current = self.current.at(cell);
                let neighbors = self.current.count_live_neighbors(x, y);
                let next = growth.evolve(current, neighbors);

                match (current.is_alive(), next.is_alive()) {
                    (true, true) => {
                        if self.ages[cell] < MAX_AGE {
                            self.ages[cell] += 1;
                        }
                    }
                    (true, false) => {
                        self.ages[cell] = 0;
                        report.deaths += 1;
                    }
                    (false, true) => {
                        self.ages[cell] = 0;
                        report.births += 1;
                    }
                    (false, false) => self.ages[cell] = 0,
                }
                self.next.set(x, y, next);
            }
        }

        std::mem::swap(&mut self.current, &mut self.next);
        let committed = self.current.count_alive();
        self.live_count = committed;
        report.live = committed;
        report.heuristic = self.check_stagnation(committed);
        self.previous_live_count = committed;

        trace!(
            "step: {} born, {} died, {} live{}",
            report.births,
            report.deaths,
            report.live,
            if report.expanded { " (expanded)" } else { "" }
        );
        report
    }

    fn check_stagnation(&mut self, committed: usize) -> Option<Heuristic> {
        if committed == 0 {
            self.empty_streak = self.empty_streak.saturating_add(1);
            if self.empty_streak > self.config.empty_threshold {
                self.empty_streak = 0;
                let added = self.randomize(self.config.reseed_density);
                debug!("board empty too long, reseeded {added} cells");
                return Some(Heuristic::Reseeded { added });
            }
            return None;
        }

        if committed == self.previous_live_count {
            self.stable_streak = self.stable_streak.saturating_add(1);
            if self.stable_streak > self.config.stable_threshold {
                self.stable_streak = 0;
                self.growth = Growth::Expanded;
                debug!("population stuck at {committed}, expanding next generation");
                return Some(Heuristic::ExpansionArmed);
            }
        } else {
            self.stable_streak = 0;
        }
        None
    }

    /// Whether (x, y) is alive in the last committed generation
    pub fn cell_state(&self, x: usize, y: usize) -> bool {
        self.current.get(x, y).is_alive()
    }

    /// Generations (x, y) has survived, capped at [`MAX_AGE`]; 0 when dead
    pub fn cell_age(&self, x: usize, y: usize) -> u8 {
        self.ages[Grid::index(x, y)]
    }

    pub fn live_count(&self) -> usize {
        self.live_count
    }

    /// Whether the next step will use the relaxed birth rule
    pub fn is_expansion_armed(&self) -> bool {
        self.growth.is_expanded()
    }

    /// The last committed generation
    pub fn grid(&self) -> &Grid {
        &self.current
    }
}
