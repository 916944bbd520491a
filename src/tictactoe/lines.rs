//! Win-line analysis for Tic-Tac-Toe

use super::{Cell, Symbol};

/// Three cell indices forming a row, column or diagonal
pub type WinLine = [usize; 3];

/// Win-line indices on the 3x3 board, in the fixed scan order
pub const WIN_LINES: [WinLine; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Utility for analyzing win lines
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// First line, in [`WIN_LINES`] order, whose three cells hold the same symbol
    pub fn completed_line(cells: &[Cell; 9]) -> Option<(Symbol, WinLine)> {
        WIN_LINES.iter().find_map(|&line| {
            let [a, b, c] = line;
            let symbol = cells[a].symbol()?;
            (cells[a] == cells[b] && cells[b] == cells[c]).then_some((symbol, line))
        })
    }

    /// First empty cell, in [`WIN_LINES`] order, that would give `symbol`
    /// three in a row
    pub fn first_completing_cell(cells: &[Cell; 9], symbol: Symbol) -> Option<usize> {
        WIN_LINES
            .iter()
            .find_map(|line| Self::completing_cell(cells, symbol, line))
    }

    /// All cells that would immediately complete a line for `symbol`, in
    /// line order without duplicates
    pub fn completing_cells(cells: &[Cell; 9], symbol: Symbol) -> Vec<usize> {
        let mut moves = Vec::new();
        for line in &WIN_LINES {
            if let Some(pos) = Self::completing_cell(cells, symbol, line)
                && !moves.contains(&pos)
            {
                moves.push(pos);
            }
        }
        moves
    }

    /// The empty cell of `line` when the other two hold `symbol`
    pub fn completing_cell(cells: &[Cell; 9], symbol: Symbol, line: &WinLine) -> Option<usize> {
        let target = symbol.to_cell();
        let mut count = 0;
        let mut empty_pos = None;

        for &idx in line {
            match cells[idx] {
                Cell::Empty => {
                    if empty_pos.is_some() {
                        return None;
                    }
                    empty_pos = Some(idx);
                }
                c if c == target => count += 1,
                _ => return None,
            }
        }

        if count == 2 { empty_pos } else { None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completed_line_vertical() {
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::O;
        cells[3] = Cell::O;
        cells[6] = Cell::O;

        assert_eq!(
            LineAnalyzer::completed_line(&cells),
            Some((Symbol::O, [0, 3, 6]))
        );
    }

    #[test]
    fn no_line_on_scattered_board() {
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::X;
        cells[4] = Cell::O;
        cells[8] = Cell::X;

        assert_eq!(LineAnalyzer::completed_line(&cells), None);
    }

    #[test]
    fn completed_line_reports_first_in_scan_order() {
        // XXX
        // X..
        // X..
        let mut cells = [Cell::Empty; 9];
        for idx in [0, 1, 2, 3, 6] {
            cells[idx] = Cell::X;
        }

        assert_eq!(
            LineAnalyzer::completed_line(&cells),
            Some((Symbol::X, [0, 1, 2]))
        );
    }

    #[test]
    fn test_completing_cells_multiple() {
        // XX.
        // X..
        // ...
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::X;
        cells[1] = Cell::X;
        cells[3] = Cell::X;

        assert_eq!(LineAnalyzer::completing_cells(&cells, Symbol::X), vec![2, 6]);
        assert_eq!(LineAnalyzer::first_completing_cell(&cells, Symbol::X), Some(2));
    }

    #[test]
    fn blocked_line_has_no_completing_cell() {
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::X;
        cells[1] = Cell::X;
        cells[2] = Cell::O;

        assert_eq!(LineAnalyzer::first_completing_cell(&cells, Symbol::X), None);
        assert_eq!(LineAnalyzer::first_completing_cell(&cells, Symbol::O), None);
    }
}
