//! Settings chosen once at the start of a game

use anyhow::{anyhow, Result};

use crate::game::Turn;

/// The shallowest search depth the engine accepts
pub const MIN_DEPTH: u32 = 1;
/// The deepest search depth the engine accepts
pub const MAX_DEPTH: u32 = 5;

/// Environment variable that pre-selects the search depth in the binary
pub const DEPTH_ENV_VAR: &str = "SQUARE4_DEPTH";

/// Immutable search settings handed to a `Searcher`
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct EngineConfig {
    depth: u32,
}

impl EngineConfig {
    /// Creates a config, rejecting depths outside `MIN_DEPTH..=MAX_DEPTH`
    pub fn new(depth: u32) -> Result<Self> {
        if !(MIN_DEPTH..=MAX_DEPTH).contains(&depth) {
            return Err(anyhow!(
                "Invalid depth {}, depth must be between {} and {}",
                depth,
                MIN_DEPTH,
                MAX_DEPTH
            ));
        }
        Ok(Self { depth })
    }

    /// Parses a depth typed by the user
    pub fn parse(input: &str) -> Result<Self> {
        let depth = input
            .trim()
            .parse::<u32>()
            .map_err(|_| anyhow!("could not parse '{}' as a depth", input.trim()))?;
        Self::new(depth)
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self { depth: 4 }
    }
}

/// Everything the front end needs to run a game
#[derive(Clone, Debug)]
pub struct GameConfig {
    pub engine: EngineConfig,
    pub player_name: String,
    pub ai_name: String,
    pub first_turn: Turn,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            engine: EngineConfig::default(),
            player_name: String::from("Player 1"),
            ai_name: String::from("James Bond"),
            first_turn: Turn::Player,
        }
    }
}
