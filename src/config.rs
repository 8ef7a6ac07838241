//! Construction-time configuration for a [`Universe`](crate::Universe).
//!
//! A config bundles the grid extents, how the first generation is seeded and
//! which tick strategy to use. Nothing here is read after construction except
//! the strategy, which can also be changed later on the universe itself.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::domain::{Cell, Strategy, UniverseError};

pub const DEFAULT_WIDTH: u32 = 64;
pub const DEFAULT_HEIGHT: u32 = 64;

/// How the first generation is filled.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum Seeding {
    /// Cell `i` (row-major) is alive iff `i % 2 == 0 || i % 7 == 0`
    #[default]
    Formula,
    /// Every cell dead
    Empty,
    /// Each cell alive with probability `density`, reproducible from `seed`
    Random { density: f64, seed: u64 },
}

impl Seeding {
    /// Fill a buffer of `len` cells according to this seeding.
    pub fn populate(&self, len: usize) -> Result<Vec<Cell>, UniverseError> {
        match *self {
            Seeding::Formula => Ok(formula_cells(len)),
            Seeding::Empty => Ok(vec![Cell::Dead; len]),
            Seeding::Random { density, seed } => {
                if !(0.0..=1.0).contains(&density) {
                    return Err(UniverseError::InvalidDensity(density));
                }
                let mut rng = StdRng::seed_from_u64(seed);
                Ok((0..len).map(|_| Cell::from(rng.random_bool(density))).collect())
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Seeding::Formula => "formula",
            Seeding::Empty => "empty",
            Seeding::Random { .. } => "random",
        }
    }
}

/// Universe configuration (builder style).
#[derive(Clone, Debug, PartialEq)]
pub struct UniverseConfig {
    pub width: u32,
    pub height: u32,
    pub seeding: Seeding,
    pub strategy: Strategy,
}

impl Default for UniverseConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            seeding: Seeding::default(),
            strategy: Strategy::default(),
        }
    }
}

impl UniverseConfig {
    pub fn with_dimensions(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_seeding(mut self, seeding: Seeding) -> Self {
        self.seeding = seeding;
        self
    }

    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Reject configs that cannot produce a universe.
    pub fn validate(&self) -> Result<(), UniverseError> {
        check_dimensions(self.width, self.height)?;
        if let Seeding::Random { density, .. } = self.seeding {
            if !(0.0..=1.0).contains(&density) {
                return Err(UniverseError::InvalidDensity(density));
            }
        }
        Ok(())
    }
}

pub(crate) fn formula_cells(len: usize) -> Vec<Cell> {
    (0..len).map(|i| Cell::from(i % 2 == 0 || i % 7 == 0)).collect()
}

/// Both extents must be non-zero; every index is taken modulo them.
pub(crate) fn check_dimensions(width: u32, height: u32) -> Result<(), UniverseError> {
    if width == 0 || height == 0 {
        return Err(UniverseError::ZeroDimension { width, height });
    }
    Ok(())
}
