//! Static evaluation of non-terminal positions

use crate::{board::*, WIDTH, HEIGHT, WINDOW_LENGTH};

/// Position scores, wide enough to hold the win/loss sentinels exactly
pub type Score = i128;

/// Bonus per own piece in the centre column
pub const CENTER_WEIGHT: Score = 3;

/// Scores a single window of cells from `piece`'s perspective
///
/// The own-piece patterns and the opponent threat are scored independently,
/// so a window can collect both a bonus and the penalty.
pub fn evaluate_window(window: &[Piece], piece: Piece) -> Score {
    let opp_piece = piece.opponent();
    let count = |p: Piece| window.iter().filter(|&&x| x == p).count();

    let own = count(piece);
    let empty = count(Piece::Empty);
    let opp = count(opp_piece);

    let mut score = 0;
    if own == 4 {
        score += 100;
    } else if own == 3 && empty == 1 {
        score += 5;
    } else if own == 2 && empty == 2 {
        score += 2;
    }

    if opp == 3 && empty == 1 {
        score -= 4;
    }
    score
}

/// Heuristic score of `board` for `piece`
///
/// Only windows running up and to the right, `(r + i, c + i)`, are scored.
pub fn score_position(board: &Board, piece: Piece) -> Score {
    let center_count = board.column(WIDTH / 2).filter(|&x| x == piece).count();
    let mut score = center_count as Score * CENTER_WEIGHT;

    let mut window = [Piece::Empty; WINDOW_LENGTH];
    for column in 0..=WIDTH - WINDOW_LENGTH {
        for row in 0..=HEIGHT - WINDOW_LENGTH {
            for (i, cell) in window.iter_mut().enumerate() {
                *cell = board.get(row + i, column + i);
            }
            score += evaluate_window(&window, piece);
        }
    }
    score
}
