/// Cell represents the fundamental unit of the universe.
///
/// Stored as a single byte so a whole grid can be read as raw bytes
/// (`Dead = 0`, `Alive = 1`) without any per-cell conversion.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash)]
pub enum Cell {
    #[default]
    Dead = 0,
    Alive = 1,
}

impl Cell {
    /// Check if the cell is currently alive
    pub const fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }

    /// Flip between Alive and Dead
    pub const fn toggle(self) -> Self {
        match self {
            Cell::Alive => Cell::Dead,
            Cell::Dead => Cell::Alive,
        }
    }

    /// Compute the next state from the number of live neighbors:
    /// 1. Live cell with fewer than 2 neighbors dies
    /// 2. Live cell with 2-3 neighbors survives
    /// 3. Live cell with more than 3 neighbors dies
    /// 4. Dead cell with exactly 3 neighbors becomes alive
    pub const fn evolve(self, neighbors: u8) -> Self {
        match (self, neighbors) {
            (Cell::Alive, n) if n < 2 => Cell::Dead,
            (Cell::Alive, 2 | 3) => Cell::Alive,
            (Cell::Alive, _) => Cell::Dead,
            (Cell::Dead, 3) => Cell::Alive,
            (otherwise, _) => otherwise,
        }
    }

    /// Symbol used by the text rendering of a universe
    pub const fn symbol(self) -> char {
        match self {
            Cell::Dead => '◻',
            Cell::Alive => '◼',
        }
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive { Cell::Alive } else { Cell::Dead }
    }
}
