use std::fmt;
use std::time::Instant;

use rayon::prelude::*;
use tracing::{debug, debug_span, trace};

use super::{Cell, Strategy, UniverseError};
use crate::config::{
    DEFAULT_HEIGHT, DEFAULT_WIDTH, Seeding, UniverseConfig, check_dimensions, formula_cells,
};

/// Universe is a fixed-size toroidal grid evolving under Conway's rules.
///
/// Cells are stored row-major, `index(row, col) = row * width + col`, and
/// every coordinate is taken modulo the grid extents, so the grid has no
/// edges. Two buffers of equal length are kept: `tick` writes the next
/// generation into the scratch buffer while reading only the current one,
/// then swaps them.
#[derive(Clone, Debug)]
pub struct Universe {
    width: u32,
    height: u32,
    cells: Vec<Cell>,
    scratch: Vec<Cell>,
    strategy: Strategy,
}

impl Universe {
    /// Create a 64x64 universe seeded with the default formula
    pub fn new() -> Self {
        let cells = formula_cells(DEFAULT_WIDTH as usize * DEFAULT_HEIGHT as usize);
        Self::assemble(DEFAULT_WIDTH, DEFAULT_HEIGHT, cells, Strategy::default())
    }

    /// Create a universe of the given size, seeded with the default formula
    pub fn with_dimensions(width: u32, height: u32) -> Result<Self, UniverseError> {
        Self::from_config(&UniverseConfig::default().with_dimensions(width, height))
    }

    /// Create a universe with every cell dead
    pub fn empty(width: u32, height: u32) -> Result<Self, UniverseError> {
        Self::from_config(
            &UniverseConfig::default()
                .with_dimensions(width, height)
                .with_seeding(Seeding::Empty),
        )
    }

    /// Create a universe where each cell is alive with probability `density`.
    /// The same `seed` always yields the same grid.
    pub fn random(width: u32, height: u32, density: f64, seed: u64) -> Result<Self, UniverseError> {
        Self::from_config(
            &UniverseConfig::default()
                .with_dimensions(width, height)
                .with_seeding(Seeding::Random { density, seed }),
        )
    }

    pub fn from_config(config: &UniverseConfig) -> Result<Self, UniverseError> {
        config.validate()?;
        let len = config.width as usize * config.height as usize;
        let cells = config.seeding.populate(len)?;
        debug!(
            width = config.width,
            height = config.height,
            seeding = config.seeding.name(),
            "Universe created"
        );
        Ok(Self::assemble(config.width, config.height, cells, config.strategy))
    }

    fn assemble(width: u32, height: u32, cells: Vec<Cell>, strategy: Strategy) -> Self {
        let scratch = vec![Cell::Dead; cells.len()];
        Self {
            width,
            height,
            cells,
            scratch,
            strategy,
        }
    }

    pub const fn width(&self) -> u32 {
        self.width
    }

    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Read-only view of the current generation, `width * height` cells long.
    ///
    /// The returned slice borrows the universe, so it cannot be held across
    /// `tick`, `toggle_cell` or a resize; the buffer behind it may be swapped
    /// or reallocated by any of those.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// The current generation as raw bytes, one per cell: `0` dead, `1` alive.
    /// Same lifetime contract as [`Universe::cells`].
    pub fn as_bytes(&self) -> &[u8] {
        // SAFETY: Cell is #[repr(u8)] with discriminants 0 and 1 only, so a
        // slice of cells has the same layout as a byte slice of equal length.
        unsafe { std::slice::from_raw_parts(self.cells.as_ptr().cast::<u8>(), self.cells.len()) }
    }

    pub const fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn set_strategy(&mut self, strategy: Strategy) {
        self.strategy = strategy;
    }

    /// Row-major index of a wrapped coordinate
    fn index(&self, row: u32, col: u32) -> usize {
        let row = (row % self.height) as usize;
        let col = (col % self.width) as usize;
        row * self.width as usize + col
    }

    /// Cell at (row, col), coordinates wrap
    pub fn get(&self, row: u32, col: u32) -> Cell {
        self.cells[self.index(row, col)]
    }

    /// Count live cells among the 8 toroidally wrapped neighbors of (row, col)
    pub fn live_neighbor_count(&self, row: u32, col: u32) -> u8 {
        count_live_neighbors(
            &self.cells,
            self.width as usize,
            self.height as usize,
            (row % self.height) as usize,
            (col % self.width) as usize,
        )
    }

    /// Number of alive cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Advance one generation.
    ///
    /// Every cell of the next generation is computed from the current one
    /// before any cell is replaced.
    pub fn tick(&mut self) {
        let width = self.width as usize;
        let height = self.height as usize;
        let strategy = self.strategy.resolve(self.cells.len());

        let span = debug_span!("universe_tick", width, height, strategy = strategy.name());
        let _enter = span.enter();
        let start = Instant::now();

        let current = &self.cells;
        let next = &mut self.scratch;
        match strategy {
            Strategy::Parallel => next
                .par_chunks_mut(width)
                .enumerate()
                .for_each(|(row, out)| evolve_row(current, width, height, row, out)),
            _ => next
                .chunks_mut(width)
                .enumerate()
                .for_each(|(row, out)| evolve_row(current, width, height, row, out)),
        }
        std::mem::swap(&mut self.cells, &mut self.scratch);

        trace!(elapsed_us = start.elapsed().as_micros() as u64, "tick complete");
    }

    /// Advance `generations` generations
    pub fn tick_n(&mut self, generations: usize) {
        for _ in 0..generations {
            self.tick();
        }
    }

    /// Flip the cell at (row, col); coordinates wrap
    pub fn toggle_cell(&mut self, row: u32, col: u32) {
        let idx = self.index(row, col);
        self.cells[idx] = self.cells[idx].toggle();
    }

    /// Mark each listed (row, col) alive; coordinates wrap
    pub fn set_cells(&mut self, cells: &[(u32, u32)]) {
        for &(row, col) in cells {
            let idx = self.index(row, col);
            self.cells[idx] = Cell::Alive;
        }
    }

    /// Kill every cell, keeping the dimensions
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Dead);
        debug!(width = self.width, height = self.height, "Universe cleared");
    }

    /// Set the width of the universe.
    ///
    /// Resets all cells to the dead state.
    pub fn set_width(&mut self, width: u32) -> Result<(), UniverseError> {
        check_dimensions(width, self.height)?;
        self.width = width;
        self.reset_buffers();
        Ok(())
    }

    /// Set the height of the universe.
    ///
    /// Resets all cells to the dead state.
    pub fn set_height(&mut self, height: u32) -> Result<(), UniverseError> {
        check_dimensions(self.width, height)?;
        self.height = height;
        self.reset_buffers();
        Ok(())
    }

    fn reset_buffers(&mut self) {
        let len = self.width as usize * self.height as usize;
        self.cells = vec![Cell::Dead; len];
        self.scratch = vec![Cell::Dead; len];
        debug!(width = self.width, height = self.height, "Universe reset");
    }

    /// Text rendering, one line per row
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl Default for Universe {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Universe {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for line in self.cells.chunks(self.width as usize) {
            for &cell in line {
                write!(f, "{}", cell.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Neighbor offsets are {height-1, 0, 1} x {width-1, 0, 1} minus the center
/// slot, each added to the coordinate and reduced modulo the extent. Exactly
/// 8 slots are read: on an extent of 1 or 2 several slots land on the same
/// cell (possibly the cell itself) and each one counts.
fn count_live_neighbors(cells: &[Cell], width: usize, height: usize, row: usize, col: usize) -> u8 {
    let mut count = 0;
    for (i, delta_row) in [height - 1, 0, 1].into_iter().enumerate() {
        for (j, delta_col) in [width - 1, 0, 1].into_iter().enumerate() {
            if i == 1 && j == 1 {
                continue;
            }
            let neighbor_row = (row + delta_row) % height;
            let neighbor_col = (col + delta_col) % width;
            count += cells[neighbor_row * width + neighbor_col] as u8;
        }
    }
    count
}

fn evolve_row(current: &[Cell], width: usize, height: usize, row: usize, out: &mut [Cell]) {
    let base = row * width;
    for (col, slot) in out.iter_mut().enumerate() {
        let neighbors = count_live_neighbors(current, width, height, row, col);
        *slot = current[base + col].evolve(neighbors);
    }
}
