use super::Cell;

/// Matrix width in LEDs
pub const WIDTH: usize = 16;
/// Matrix height in LEDs
pub const HEIGHT: usize = 5;
/// Total number of cells on the matrix
pub const CELL_COUNT: usize = WIDTH * HEIGHT;

/// Grid is one generation of the 16x5 toroidal board.
/// Cells are stored row-major, `index = y * WIDTH + x`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Grid {
    cells: [Cell; CELL_COUNT],
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Grid {
    /// Create a new grid with all cells initially dead
    pub const fn new() -> Self {
        Self {
            cells: [Cell::Dead; CELL_COUNT],
        }
    }

    /// Convert 2D coordinates to 1D index.
    ///
    /// # Panics
    /// If `x >= WIDTH` or `y >= HEIGHT`.
    #[inline]
    pub fn index(x: usize, y: usize) -> usize {
        assert!(
            x < WIDTH && y < HEIGHT,
            "cell ({x}, {y}) is outside the {WIDTH}x{HEIGHT} matrix"
        );
        y * WIDTH + x
    }

    /// Get cell at position
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Cell {
        self.cells[Self::index(x, y)]
    }

    /// Set cell at position
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) {
        self.cells[Self::index(x, y)] = cell;
    }

    /// Get cell by linear index
    #[inline]
    pub fn at(&self, index: usize) -> Cell {
        self.cells[index]
    }

    /// The 8 toroidally adjacent positions of (x, y), row by row.
    /// Columns wrap at WIDTH and rows wrap at HEIGHT, so every position
    /// returned lies inside the matrix.
    #[rustfmt::skip]
    pub fn neighbor_positions(x: usize, y: usize) -> [(usize, usize); 8] {
        assert!(
            x < WIDTH && y < HEIGHT,
            "cell ({x}, {y}) is outside the {WIDTH}x{HEIGHT} matrix"
        );
        let left = (x + WIDTH - 1) % WIDTH;
        let right = (x + 1) % WIDTH;
        let up = (y + HEIGHT - 1) % HEIGHT;
        let down = (y + 1) % HEIGHT;

        [
            (left, up), (x, up), (right, up),
            (left, y), (right, y),
            (left, down), (x, down), (right, down),
        ]
    }

    /// Count live neighbors using toroidal wrapping (grid wraps like a torus)
    pub fn count_live_neighbors(&self, x: usize, y: usize) -> u8 {
        Self::neighbor_positions(x, y)
            .iter()
            .map(|&(nx, ny)| self.get(nx, ny).weight())
            .sum()
    }

    /// Count total alive cells
    pub fn count_alive(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Clear all cells to dead state
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Dead);
    }

    /// Iterate over all cells with their positions, row by row
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &cell)| (i % WIDTH, i / WIDTH, cell))
    }
}
