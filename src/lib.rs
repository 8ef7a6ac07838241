// Domain layer - grid, cells and the step function
pub mod domain;

// Construction-time configuration
pub mod config;

// Re-exports for convenience
pub use domain::{Cell, Pattern, Strategy, Universe, UniverseError, presets};
pub use config::{Seeding, UniverseConfig};
