//! Board position representation and basic operations

use std::{
    fmt,
    hash::{Hash, Hasher},
};

use serde::{Deserialize, Serialize};

use super::lines::LineAnalyzer;

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }
}

/// A player in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

/// A board configuration together with its ply depth.
///
/// Cells are row-major: indices 0-2 are the top row, 3-5 the middle,
/// 6-8 the bottom. The depth equals the number of marks placed since the
/// empty board, so even depth means X is to move. A position never changes
/// after construction; transformations return new positions.
///
/// This type implements `Copy` since it's only a few bytes of cells plus
/// the depth counter.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Position {
    cells: [Cell; 9],
    depth: usize,
}

/// Equality and hashing consider cells only; depth is excluded.
impl PartialEq for Position {
    fn eq(&self, other: &Self) -> bool {
        self.cells == other.cells
    }
}

impl Eq for Position {}

impl Hash for Position {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.cells.hash(state);
    }
}

impl Position {
    /// Create a position from raw cells and a ply depth.
    ///
    /// The caller guarantees the cells describe a reachable board; no
    /// validation is performed here.
    pub fn new(cells: [Cell; 9], depth: usize) -> Self {
        Position { cells, depth }
    }

    /// The empty board at depth 0
    pub fn empty() -> Self {
        Position::new([Cell::Empty; 9], 0)
    }

    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// The player whose turn it is, derived from depth parity
    pub fn to_move(&self) -> Player {
        if self.depth.is_multiple_of(2) {
            Player::X
        } else {
            Player::O
        }
    }

    /// Check if a cell is empty
    pub fn is_empty(&self, pos: usize) -> bool {
        self.cells[pos] == Cell::Empty
    }

    /// Get all empty cell indices
    pub fn empty_cells(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| i)
            .collect()
    }

    /// Place a mark on an empty cell, returning the successor position at
    /// depth + 1. Callers guarantee the cell is empty; placing on an
    /// occupied cell is a programming error.
    #[must_use = "place returns a new position; the original is unchanged"]
    pub fn place(&self, pos: usize, player: Player) -> Position {
        debug_assert!(self.is_empty(pos), "cell {pos} is occupied");
        let mut cells = self.cells;
        cells[pos] = player.to_cell();
        Position::new(cells, self.depth + 1)
    }

    /// Get the winner if there is one.
    ///
    /// X's lines are checked before O's, so a board carrying lines for both
    /// players (unreachable under legal play) reports X. `None` means the
    /// position is not yet decided, which is not the same as a draw.
    pub fn winner(&self) -> Option<Player> {
        if LineAnalyzer::has_won(&self.cells, Player::X) {
            Some(Player::X)
        } else if LineAnalyzer::has_won(&self.cells, Player::O) {
            Some(Player::O)
        } else {
            None
        }
    }

    /// A position is a leaf when it is decided or the board is full
    pub fn is_leaf(&self) -> bool {
        self.winner().is_some() || !self.cells.contains(&Cell::Empty)
    }

    /// Bounds-checked character for a single cell, for board rendering.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::PositionOutOfBounds`] when `pos` is not in 0-8.
    pub fn cell_char(&self, pos: usize) -> crate::Result<char> {
        if pos >= 9 {
            return Err(crate::Error::PositionOutOfBounds { position: pos });
        }
        Ok(self.cells[pos].to_char())
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            write!(
                f,
                " {} {} {}",
                self.cells[3 * row].to_char(),
                self.cells[3 * row + 1].to_char(),
                self.cells[3 * row + 2].to_char()
            )?;
            if row < 2 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board() {
        let position = Position::empty();
        assert_eq!(position.depth(), 0);
        assert_eq!(position.to_move(), Player::X);
        for i in 0..9 {
            assert!(position.is_empty(i));
        }
    }

    #[test]
    fn test_place_returns_successor() {
        let position = Position::empty();
        let next = position.place(4, Player::X);

        assert_eq!(next.cells()[4], Cell::X);
        assert_eq!(next.depth(), 1);
        assert_eq!(next.to_move(), Player::O);
        // the original is untouched
        assert!(position.is_empty(4));
    }

    #[test]
    fn test_winner_horizontal() {
        let mut position = Position::empty();
        position = position.place(0, Player::X);
        position = position.place(3, Player::O);
        position = position.place(1, Player::X);
        position = position.place(4, Player::O);
        position = position.place(2, Player::X);

        assert_eq!(position.winner(), Some(Player::X));
        assert!(position.is_leaf());
    }

    #[test]
    fn test_winner_vertical() {
        let mut position = Position::empty();
        position = position.place(0, Player::X);
        position = position.place(1, Player::O);
        position = position.place(2, Player::X);
        position = position.place(4, Player::O);
        position = position.place(5, Player::X);
        position = position.place(7, Player::O);

        assert_eq!(position.winner(), Some(Player::O));
        assert!(position.is_leaf());
    }

    #[test]
    fn test_winner_diagonal() {
        let mut position = Position::empty();
        position = position.place(0, Player::X);
        position = position.place(1, Player::O);
        position = position.place(4, Player::X);
        position = position.place(2, Player::O);
        position = position.place(8, Player::X);

        assert_eq!(position.winner(), Some(Player::X));
    }

    #[test]
    fn test_undecided_is_not_a_leaf() {
        let position = Position::empty().place(0, Player::X);
        assert_eq!(position.winner(), None);
        assert!(!position.is_leaf());
    }

    #[test]
    fn test_full_board_without_winner_is_a_leaf() {
        // X O X / X O O / O X X
        let mut position = Position::empty();
        for (pos, player) in [
            (0, Player::X),
            (1, Player::O),
            (2, Player::X),
            (4, Player::O),
            (3, Player::X),
            (5, Player::O),
            (7, Player::X),
            (6, Player::O),
            (8, Player::X),
        ] {
            position = position.place(pos, player);
        }

        assert_eq!(position.winner(), None);
        assert!(position.is_leaf());
        assert_eq!(position.depth(), 9);
    }

    #[test]
    fn test_equality_ignores_depth() {
        let cells = {
            let mut cells = [Cell::Empty; 9];
            cells[0] = Cell::X;
            cells
        };
        let a = Position::new(cells, 1);
        let b = Position::new(cells, 5);

        assert_eq!(a, b);
    }

    #[test]
    fn test_cell_char_bounds() {
        let position = Position::empty().place(0, Player::X);
        assert_eq!(position.cell_char(0).unwrap(), 'X');
        assert_eq!(position.cell_char(8).unwrap(), ' ');

        let err = position.cell_char(9).unwrap_err();
        assert!(err.to_string().contains("out of bounds"));
    }

    #[test]
    fn test_display() {
        let position = Position::empty()
            .place(0, Player::X)
            .place(1, Player::O)
            .place(8, Player::X);
        let rendered = format!("{position}");
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines, vec![" X O  ", "      ", "     X"]);
    }

    #[test]
    fn test_empty_cells() {
        let position = Position::empty().place(4, Player::X);
        let empty = position.empty_cells();

        assert_eq!(empty.len(), 8);
        assert!(!empty.contains(&4));
        assert!(empty.contains(&0));
    }
}
