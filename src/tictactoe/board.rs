//! Board representation and basic operations

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::{Error, InvalidMoveKind, Result};

/// Number of cells on the board
pub const CELL_COUNT: usize = 9;

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | '-' | '_' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' => Some(Cell::O),
            _ => None,
        }
    }

    /// The symbol occupying this cell, if any
    pub fn symbol(self) -> Option<Symbol> {
        match self {
            Cell::Empty => None,
            Cell::X => Some(Symbol::X),
            Cell::O => Some(Symbol::O),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// One of the two marks a player places
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Symbol {
    X,
    O,
}

impl Symbol {
    /// Both symbols, X first
    pub const ALL: [Symbol; 2] = [Symbol::X, Symbol::O];

    /// The complementary symbol
    pub fn other(self) -> Symbol {
        match self {
            Symbol::X => Symbol::O,
            Symbol::O => Symbol::X,
        }
    }

    pub fn to_cell(self) -> Cell {
        match self {
            Symbol::X => Cell::X,
            Symbol::O => Cell::O,
        }
    }
}

impl From<Symbol> for Cell {
    fn from(symbol: Symbol) -> Self {
        symbol.to_cell()
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::X => f.write_str("X"),
            Symbol::O => f.write_str("O"),
        }
    }
}

impl FromStr for Symbol {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "X" | "x" => Ok(Symbol::X),
            "O" | "o" => Ok(Symbol::O),
            other => Err(Error::InvalidSymbol {
                input: other.to_string(),
            }),
        }
    }
}

/// A 3x3 board, cells indexed 0-8 row-major.
///
/// ```text
///   0 1 2
///   3 4 5
///   6 7 8
/// ```
///
/// Boards are plain values: every operation that places a symbol returns a
/// new board and leaves the original untouched. Once a cell holds a symbol
/// it is never overwritten through [`Board::apply_move`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// The empty board
    pub const EMPTY: Board = Board {
        cells: [Cell::Empty; CELL_COUNT],
    };

    /// Create an empty board
    pub fn new() -> Self {
        Self::EMPTY
    }

    /// Build a board from raw cells.
    ///
    /// No reachability check is made; any combination of cells is accepted,
    /// which is what search and analysis code needs.
    pub fn from_cells(cells: [Cell; CELL_COUNT]) -> Self {
        Board { cells }
    }

    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Get cell at position (0-8)
    pub fn get(&self, pos: usize) -> Option<Cell> {
        self.cells.get(pos).copied()
    }

    /// Check if a position is on the board and empty
    pub fn is_empty(&self, pos: usize) -> bool {
        self.get(pos).is_some_and(Cell::is_empty)
    }

    /// Get all empty positions in index order
    pub fn empty_positions(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| i)
            .collect()
    }

    /// Number of cells holding `symbol`
    pub fn count(&self, symbol: Symbol) -> usize {
        let target = symbol.to_cell();
        self.cells.iter().filter(|&&cell| cell == target).count()
    }

    /// Count the number of occupied cells on the board
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    /// Place `symbol` at `position` and return the resulting board.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidMove`] when `position` is outside 0-8 or the
    /// cell is already occupied. The original board is never modified.
    #[must_use = "apply_move returns a new board; the original is unchanged"]
    pub fn apply_move(&self, position: usize, symbol: Symbol) -> Result<Board> {
        let cell = self.get(position).ok_or(Error::InvalidMove {
            position,
            kind: InvalidMoveKind::OutOfRange,
        })?;

        if let Some(occupant) = cell.symbol() {
            return Err(Error::InvalidMove {
                position,
                kind: InvalidMoveKind::Occupied(occupant),
            });
        }

        let mut next = *self;
        next.cells[position] = symbol.to_cell();
        Ok(next)
    }

    /// Nine-character encoding, `.` for empty cells
    pub fn encode(&self) -> String {
        self.cells.iter().map(|&c| c.to_char()).collect()
    }

    /// Multi-line grid with row separators, for terminal output
    pub fn grid(&self) -> String {
        self.cells
            .chunks(3)
            .map(|row| {
                row.iter()
                    .map(|c| c.to_char().to_string())
                    .collect::<Vec<_>>()
                    .join(" | ")
            })
            .collect::<Vec<_>>()
            .join("\n--+---+--\n")
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c: Vec<char> = self.cells.iter().map(|&cell| cell.to_char()).collect();
        write!(
            f,
            "{}{}{} / {}{}{} / {}{}{}",
            c[0], c[1], c[2], c[3], c[4], c[5], c[6], c[7], c[8]
        )
    }
}

impl FromStr for Board {
    type Err = Error;

    /// Parse a board from nine cell characters.
    ///
    /// `X`/`O` (either case) are symbols, `.`, `-` and `_` are empty.
    /// Whitespace, `/` and `|` are ignored so both `XO.......` and
    /// `XO. / ... / ...` are accepted.
    fn from_str(s: &str) -> Result<Self> {
        let chars: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '/' && *c != '|')
            .collect();

        if chars.len() != CELL_COUNT {
            return Err(Error::InvalidBoardLength {
                expected: CELL_COUNT,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [Cell::Empty; CELL_COUNT];
        for (i, &c) in chars.iter().enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
        }

        Ok(Board { cells })
    }
}
