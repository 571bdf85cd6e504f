//! Turn order and outcome tracking for a single game

use anyhow::{anyhow, Result};
use log::info;

use std::io::{stdout, Write};
use std::time::{Duration, Instant};

use crate::{board::*, config::GameConfig, search::Searcher};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Turn {
    Player,
    Ai,
}

impl Turn {
    pub fn piece(&self) -> Piece {
        match self {
            Turn::Player => Piece::Player,
            Turn::Ai => Piece::Ai,
        }
    }

    pub fn other(&self) -> Turn {
        match self {
            Turn::Player => Turn::Ai,
            Turn::Ai => Turn::Player,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum GameState {
    Playing,
    PlayerWin,
    AiWin,
    Draw,
}

/// The authoritative board of a game plus whose turn it is
pub struct Game {
    board: Board,
    config: GameConfig,
    turn: Turn,
    total_moves: usize,
    last_move: Option<(usize, usize)>,
    state: GameState,
    start: Instant,
}

impl Game {
    pub fn new(config: GameConfig) -> Self {
        Self {
            board: Board::new(),
            turn: config.first_turn,
            config,
            total_moves: 0,
            last_move: None,
            state: GameState::Playing,
            start: Instant::now(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn turn(&self) -> Turn {
        self.turn
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn total_moves(&self) -> usize {
        self.total_moves
    }

    /// Row and column of the most recent piece
    pub fn last_move(&self) -> Option<(usize, usize)> {
        self.last_move
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Name of the side to move
    pub fn current_name(&self) -> &str {
        match self.turn {
            Turn::Player => &self.config.player_name,
            Turn::Ai => &self.config.ai_name,
        }
    }

    /// Plays a 0-indexed column for the side to move
    pub fn play(&mut self, column: usize) -> Result<GameState> {
        if self.state != GameState::Playing {
            return Err(anyhow!("Invalid move, the game is already over"));
        }
        let piece = self.turn.piece();
        let row = self.board.play_checked(column, piece)?;
        self.total_moves += 1;
        self.last_move = Some((row, column));
        info!(
            "{} played column {} (row {})",
            self.current_name(),
            column + 1,
            row + 1
        );

        self.state = if self.board.winning_move(piece) {
            match self.turn {
                Turn::Player => GameState::PlayerWin,
                Turn::Ai => GameState::AiWin,
            }
        } else if self.board.is_full() {
            GameState::Draw
        } else {
            GameState::Playing
        };
        self.turn = self.turn.other();

        Ok(self.state)
    }

    /// Lets `searcher` choose and play the AI's move
    pub fn ai_move(&mut self, searcher: &mut Searcher) -> Result<GameState> {
        if self.turn != Turn::Ai {
            return Err(anyhow!("Invalid move, it is not the AI's turn"));
        }
        let column = searcher
            .best_move(&self.board)
            .ok_or_else(|| anyhow!("Invalid move, the game is already over"))?;
        self.play(column)
    }

    /// Draws the board to `out` with the last move highlighted
    pub fn render<W: Write>(&self, out: &mut W) -> Result<()> {
        self.board.render(
            out,
            self.last_move,
            &self.config.player_name,
            &self.config.ai_name,
        )
    }

    pub fn display(&self) -> Result<()> {
        self.render(&mut stdout())
    }

    /// End of game report in the form "Total Moves: 9, Time Elapsed: 4.20 seconds"
    pub fn summary(&self) -> String {
        format!(
            "Total Moves: {}, Time Elapsed: {:.2} seconds",
            self.total_moves,
            self.elapsed().as_secs_f64()
        )
    }
}
