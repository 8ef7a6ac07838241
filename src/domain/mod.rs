mod cell;
mod error;
mod patterns;
mod strategy;
mod universe;

pub use cell::Cell;
pub use error::UniverseError;
pub use patterns::{Pattern, presets};
pub use strategy::{PARALLEL_THRESHOLD, Strategy};
pub use universe::Universe;
