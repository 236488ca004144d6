use super::grid::{HEIGHT, WIDTH};
use super::{Cell, Grid};

/// Represents a pattern that can be placed on the grid
#[derive(Clone, Debug)]
pub struct Pattern {
    pub cells: Vec<(usize, usize)>, // Relative coordinates of alive cells
}

impl Pattern {
    /// Create a new pattern from alive cell coordinates
    pub fn new(cells: Vec<(usize, usize)>) -> Self {
        Self { cells }
    }

    /// Place pattern on grid with its top-left corner at (x, y).
    /// The anchor must be on the matrix; pattern cells wrap around the edges.
    pub fn place_on(&self, grid: &mut Grid, x: usize, y: usize) {
        assert!(
            x < WIDTH && y < HEIGHT,
            "pattern anchor ({x}, {y}) is outside the {WIDTH}x{HEIGHT} matrix"
        );
        for (dx, dy) in &self.cells {
            grid.set((x + dx) % WIDTH, (y + dy) % HEIGHT, Cell::Alive);
        }
    }
}

/// Patterns that fit on the 16x5 matrix
pub mod presets {
    use super::*;

    /// Glider - moves one cell right and down every 4 generations
    #[rustfmt::skip]
    pub fn glider() -> Pattern {
        Pattern::new(vec![
            (2, 0),
            (0, 1), (2, 1),
            (1, 2), (2, 2),
        ])
    }

    /// Blinker - period 2 oscillator
    #[rustfmt::skip]
    pub fn blinker() -> Pattern {
        Pattern::new(vec![
            (0, 1), (1, 1), (2, 1),
        ])
    }

    /// Block - simple still life
    #[rustfmt::skip]
    pub fn block() -> Pattern {
        Pattern::new(vec![
            (0, 0), (1, 0),
            (0, 1), (1, 1),
        ])
    }

    /// Glider offsets used when the effect starts
    pub const STARTUP_GLIDERS: [(usize, usize); 2] = [(0, 0), (8, 1)];
}
