/// Cell represents one LED position on the matrix.
/// Each cell is either Dead or Alive.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
}

impl Cell {
    /// Check if the cell is currently alive
    pub const fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }

    /// Live cells contribute 1 to a neighbor sum, dead cells 0
    pub const fn weight(self) -> u8 {
        match self {
            Cell::Alive => 1,
            Cell::Dead => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_dead() {
        assert_eq!(Cell::default(), Cell::Dead);
        assert!(!Cell::default().is_alive());
    }

    #[test]
    fn test_weight() {
        assert_eq!(Cell::Alive.weight(), 1);
        assert_eq!(Cell::Dead.weight(), 0);
    }
}
