//! Puzzle domains solved by the generic solver.

pub mod crossing;
pub mod slide;
pub mod strings;

pub use crossing::{Bank, CrossingConfig, Side};
pub use slide::{Coordinate, SlideConfig};
pub use strings::{Alphabet, StringsConfig};
