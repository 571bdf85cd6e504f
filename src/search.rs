//! A depth-limited minimax agent for Square 4

use log::debug;

use crate::{board::*, config::EngineConfig, eval::*};

/// Score of a position where the AI owns a square
pub const AI_WIN_SCORE: Score = 1_000_000_000_000_000_000_000;
/// Score of a position where the human owns a square
///
/// Deliberately larger in magnitude than `AI_WIN_SCORE`
pub const PLAYER_WIN_SCORE: Score = -100_000_000_000_000_000_000_000;

/// Stand-ins for the unbounded alpha-beta window
pub const NEG_INFINITY: Score = Score::MIN;
pub const INFINITY: Score = Score::MAX;

/// Minimax search with alpha-beta pruning
///
/// Returns the chosen column and its score. Leaves have no column. When no
/// child beats the initial bound the lowest valid column is returned.
/// The caller's board is never modified, every child is searched on a copy.
pub fn minimax(
    board: &Board,
    depth: u32,
    alpha: Score,
    beta: Score,
    maximizing: bool,
) -> (Option<usize>, Score) {
    let mut node_count = 0;
    search(board, depth, alpha, beta, maximizing, &mut node_count)
}

fn search(
    board: &Board,
    depth: u32,
    mut alpha: Score,
    mut beta: Score,
    maximizing: bool,
    node_count: &mut usize,
) -> (Option<usize>, Score) {
    *node_count += 1;

    if depth == 0 || board.is_terminal() {
        return (None, leaf_score(board));
    }

    let valid_locations = board.valid_locations();
    // is_terminal covers the full board, so there is at least one column
    let mut column = valid_locations[0];

    let (piece, mut value) = if maximizing {
        (Piece::Ai, NEG_INFINITY)
    } else {
        (Piece::Player, INFINITY)
    };

    for &col in valid_locations.iter() {
        let mut next = *board;
        let row = next.next_open_row(col);
        next.drop_piece(row, col, piece);

        let (_, score) = search(&next, depth - 1, alpha, beta, !maximizing, node_count);
        if maximizing {
            if score > value {
                value = score;
                column = col;
            }
            alpha = alpha.max(value);
        } else {
            if score < value {
                value = score;
                column = col;
            }
            beta = beta.min(value);
        }
        if alpha >= beta {
            break;
        }
    }
    (Some(column), value)
}

/// Score of a position at the search horizon or at the end of the game
///
/// Non-terminal positions are always scored for the AI, whichever side
/// is to move.
fn leaf_score(board: &Board) -> Score {
    if board.winning_move(Piece::Ai) {
        AI_WIN_SCORE
    } else if board.winning_move(Piece::Player) {
        PLAYER_WIN_SCORE
    } else if board.is_full() {
        0
    } else {
        score_position(board, Piece::Ai)
    }
}

/// Greedy one-ply move choice for `piece`
///
/// Returns the column whose placement gives the highest `score_position`,
/// the first column wins ties. `None` if the board is full.
pub fn pick_best_move(board: &Board, piece: Piece) -> Option<usize> {
    let valid_locations = board.valid_locations();
    let mut best_column = *valid_locations.first()?;
    let mut best_score: Score = -10000;

    for &column in valid_locations.iter() {
        let mut temp_board = *board;
        let row = temp_board.next_open_row(column);
        temp_board.drop_piece(row, column, piece);

        let score = score_position(&temp_board, piece);
        if score > best_score {
            best_score = score;
            best_column = column;
        }
    }
    Some(best_column)
}

/// An agent choosing AI moves with a fixed search depth
#[derive(Clone, Debug)]
pub struct Searcher {
    config: EngineConfig,

    /// The number of nodes searched by this `Searcher` so far (for diagnostics only)
    pub node_count: usize,
}

impl Searcher {
    /// Creates a new `Searcher` searching to the configured depth
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            node_count: 0,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Searches `board` with the AI to move
    ///
    /// Returns the chosen column and its score, the column is `None`
    /// only when the board is already terminal.
    pub fn search(&mut self, board: &Board) -> (Option<usize>, Score) {
        let mut nodes = 0;
        let result = search(
            board,
            self.config.depth(),
            NEG_INFINITY,
            INFINITY,
            true,
            &mut nodes,
        );
        self.node_count += nodes;

        debug!(
            "depth {} search chose column {:?} with score {} ({} nodes)",
            self.config.depth(),
            result.0,
            result.1,
            nodes
        );
        result
    }

    /// The column the AI should play, if any
    pub fn best_move(&mut self, board: &Board) -> Option<usize> {
        self.search(board).0
    }
}
