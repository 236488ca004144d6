use super::Cell;

/// Birth rule in effect for a single generation.
///
/// `Expanded` is a one-shot state: the engine arms it when the population
/// stagnates and takes it back to `Standard` as soon as one generation has
/// been computed with it.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Growth {
    /// B3/S23 - Classic
    #[default]
    Standard,
    /// B3/S23 plus birth on any count above 1
    Expanded,
}

impl Growth {
    /// Apply the rule to compute the next state of a cell
    pub const fn evolve(self, current: Cell, neighbors: u8) -> Cell {
        match (current, neighbors, self) {
            (Cell::Alive, 2 | 3, _) => Cell::Alive,
            (Cell::Dead, 3, _) => Cell::Alive,
            (Cell::Dead, n, Growth::Expanded) if n > 1 => Cell::Alive,
            _ => Cell::Dead,
        }
    }

    pub const fn is_expanded(self) -> bool {
        matches!(self, Growth::Expanded)
    }
}
