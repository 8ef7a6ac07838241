//! Strategy enum for selecting how a generation is computed.
//!
//! Every strategy reads only the previous generation, so they all produce
//! identical grids and differ only in how the work is scheduled.

/// Grids with at least this many cells use the parallel stepper under `Auto`.
pub const PARALLEL_THRESHOLD: usize = 256 * 256;

/// Available tick strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Row by row on the calling thread
    Serial,
    /// Rows partitioned across the rayon thread pool
    Parallel,
    /// Serial for small grids, parallel from `PARALLEL_THRESHOLD` cells up
    #[default]
    Auto,
}

impl Strategy {
    /// Get all available strategies
    pub fn all() -> Vec<Strategy> {
        vec![Strategy::Serial, Strategy::Parallel, Strategy::Auto]
    }

    /// Short display name
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Serial => "Serial",
            Strategy::Parallel => "Parallel",
            Strategy::Auto => "Auto",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Strategy::Serial => "Whole grid on one thread",
            Strategy::Parallel => "Rows split across rayon workers",
            Strategy::Auto => "Parallel above 65536 cells",
        }
    }

    /// Resolve `Auto` to a concrete strategy for a grid of `cell_count` cells
    pub fn resolve(self, cell_count: usize) -> Strategy {
        match self {
            Strategy::Auto if cell_count >= PARALLEL_THRESHOLD => Strategy::Parallel,
            Strategy::Auto => Strategy::Serial,
            concrete => concrete,
        }
    }
}
