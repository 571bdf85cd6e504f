//! A depth-limited game agent for 'Square 4', a Connect 4 variant
//!
//! Pieces fall into a 6x7 grid as in Connect 4, but a player wins by
//! filling a 2x2 square with their own colour. The agent picks its moves
//! with a minimax search using alpha-beta pruning and a static heuristic
//! at the search horizon.
//!
//! # Basic Usage
//!
//! ```
//! use square4_ai::{board::Board, config::EngineConfig, search::Searcher};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! let mut searcher = Searcher::new(EngineConfig::new(1)?);
//! let best_move = searcher.best_move(&Board::new());
//!
//! assert_eq!(best_move, Some(3));
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod board;

pub mod eval;

pub mod search;

pub mod config;

pub mod game;


/// The width of the game board in tiles
pub const WIDTH: usize = 7;

/// The height of the game board in tiles
pub const HEIGHT: usize = 6;

/// The length of a diagonal window scored by the heuristic
pub const WINDOW_LENGTH: usize = 4;

// a 2x2 square and at least one diagonal window must fit on the board
const_assert!(WIDTH >= 2 && HEIGHT >= 2);
const_assert!(WIDTH >= WINDOW_LENGTH && HEIGHT >= WINDOW_LENGTH);
