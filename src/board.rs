//! The game grid and the 2x2 square win rule

use anyhow::{anyhow, Result};
use crossterm::{
    style::{style, Attribute, Color, PrintStyledContent},
    QueueableCommand,
};

use std::io::Write;

use crate::{HEIGHT, WIDTH};

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Piece {
    Empty,
    Player,
    Ai,
}

impl Piece {
    pub fn is_empty(&self) -> bool {
        match self {
            Piece::Empty => true,
            _ => false,
        }
    }

    /// Character drawn for the piece on the terminal
    pub fn glyph(&self) -> char {
        match self {
            Piece::Player => 'X',
            Piece::Ai => 'O',
            Piece::Empty => '.',
        }
    }

    /// The piece of the other side, `Empty` has no opponent
    pub fn opponent(&self) -> Piece {
        match self {
            Piece::Player => Piece::Ai,
            Piece::Ai => Piece::Player,
            Piece::Empty => Piece::Empty,
        }
    }
}

/// A 6x7 grid of pieces
///
/// Row 0 is the bottom of the board and column 0 is the leftmost column.
/// Boards are `Copy` so the search can branch on throwaway copies
/// without touching the caller's board.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Board {
    cells: [Piece; WIDTH * HEIGHT], // cells are stored left-to-right, bottom-to-top
}

impl Board {
    /// Creates an empty board
    pub fn new() -> Self {
        Self {
            cells: [Piece::Empty; WIDTH * HEIGHT],
        }
    }

    /// Builds a board from a string of 1-indexed columns, alternating
    /// pieces starting with the human player
    pub fn from_moves<S: AsRef<str>>(moves: S) -> Result<Self> {
        let mut board = Self::new();
        let mut piece = Piece::Player;

        for column_char in moves.as_ref().chars() {
            match column_char.to_digit(10).map(|c| c as usize) {
                Some(column @ 1..=WIDTH) => {
                    board.play_checked(column - 1, piece)?;
                    piece = piece.opponent();
                }
                _ => return Err(anyhow!("could not parse '{}' as a valid move", column_char)),
            }
        }
        Ok(board)
    }

    pub fn get(&self, row: usize, column: usize) -> Piece {
        assert!(
            row < HEIGHT && column < WIDTH,
            "cell ({}, {}) is off the board",
            row,
            column
        );
        self.cells[column + WIDTH * row]
    }

    /// A column can be played while its top cell is empty
    pub fn is_valid_location(&self, column: usize) -> bool {
        assert!(column < WIDTH, "column {} out of range", column);
        self.get(HEIGHT - 1, column).is_empty()
    }

    /// The lowest empty row of `column`
    ///
    /// # Panics
    /// Panics if the column is full, check `is_valid_location` first
    pub fn next_open_row(&self, column: usize) -> usize {
        assert!(column < WIDTH, "column {} out of range", column);
        match (0..HEIGHT).find(|&row| self.get(row, column).is_empty()) {
            Some(row) => row,
            None => panic!("no open row in full column {}", column),
        }
    }

    /// Sets a single cell, the caller is responsible for the placement being legal
    pub fn drop_piece(&mut self, row: usize, column: usize, piece: Piece) {
        assert!(
            row < HEIGHT && column < WIDTH,
            "cell ({}, {}) is off the board",
            row,
            column
        );
        self.cells[column + WIDTH * row] = piece;
    }

    /// Drops `piece` into `column`, returning the row it landed in
    pub fn play_checked(&mut self, column: usize, piece: Piece) -> Result<usize> {
        if column >= WIDTH {
            return Err(anyhow!(
                "Invalid move, column {} out of range. Columns must be between 1 and {}",
                column + 1,
                WIDTH
            ));
        }
        if !self.is_valid_location(column) {
            return Err(anyhow!("Invalid move, column {} full", column + 1));
        }
        let row = self.next_open_row(column);
        self.drop_piece(row, column, piece);
        Ok(row)
    }

    /// Playable columns in ascending order
    pub fn valid_locations(&self) -> Vec<usize> {
        (0..WIDTH).filter(|&c| self.is_valid_location(c)).collect()
    }

    /// Checks every 2x2 square of the board for one filled with `piece`
    pub fn winning_move(&self, piece: Piece) -> bool {
        if piece.is_empty() {
            return false;
        }
        for column in 0..WIDTH - 1 {
            for row in 0..HEIGHT - 1 {
                if self.get(row, column) == piece
                    && self.get(row, column + 1) == piece
                    && self.get(row + 1, column) == piece
                    && self.get(row + 1, column + 1) == piece
                {
                    return true;
                }
            }
        }
        false
    }

    pub fn is_full(&self) -> bool {
        (0..WIDTH).all(|c| !self.is_valid_location(c))
    }

    /// The game is over once either side owns a square or no column is playable
    pub fn is_terminal(&self) -> bool {
        self.winning_move(Piece::Player) || self.winning_move(Piece::Ai) || self.is_full()
    }

    pub fn num_moves(&self) -> usize {
        self.cells.iter().filter(|x| !x.is_empty()).count()
    }

    /// The pieces of a single column, bottom to top
    pub fn column(&self, column: usize) -> impl Iterator<Item = Piece> + '_ {
        (0..HEIGHT).map(move |row| self.get(row, column))
    }

    /// Draws the board top row first, with column numbers and a legend
    /// underneath. The cell at `last_move` is highlighted.
    pub fn render<W: Write>(
        &self,
        out: &mut W,
        last_move: Option<(usize, usize)>,
        player_name: &str,
        ai_name: &str,
    ) -> Result<()> {
        for row in (0..HEIGHT).rev() {
            for column in 0..WIDTH {
                let piece = self.get(row, column);
                let mut cell = style(piece.glyph()).on(Color::DarkYellow).with(match piece {
                    Piece::Player => Color::Black,
                    Piece::Ai => Color::White,
                    Piece::Empty => Color::Grey,
                });
                if last_move == Some((row, column)) {
                    cell = cell.attribute(Attribute::Reverse);
                } else if !piece.is_empty() {
                    cell = cell.attribute(Attribute::Bold);
                }
                out.queue(PrintStyledContent(cell))?;
            }
            writeln!(out)?;
        }

        let cols: String = (1..=WIDTH).map(|x| x.to_string()).collect();
        writeln!(out, "{}", cols)?;
        writeln!(
            out,
            "{} {}  {} {}",
            Piece::Player.glyph(),
            player_name,
            Piece::Ai.glyph(),
            ai_name
        )?;
        out.flush()?;
        Ok(())
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
