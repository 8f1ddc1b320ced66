//! Generic breadth-first puzzle solver.
//!
//! Any puzzle whose states implement [`Configuration`] can be handed to a
//! [`Solver`], which finds a shortest sequence of moves to a goal state.
//! Three puzzles ship with the crate: a river crossing, a string ladder and
//! sliding tile boards, the latter with a small console for playing by hand.

pub mod configuration;
pub mod console;
pub mod error;
pub mod puzzles;
pub mod solver;

// Re-export main types
pub use configuration::Configuration;
pub use console::{Console, Hint, SlideModel};
pub use error::{PuzzleError, Result};
pub use puzzles::{Alphabet, Bank, Coordinate, CrossingConfig, Side, SlideConfig, StringsConfig};
pub use solver::{SolveReport, Solver, SolverConfig};
