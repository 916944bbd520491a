//! Game record: the moves of one round and the board they produce

use serde::{Deserialize, Serialize};

use super::{
    board::{Board, Symbol},
    rules::{GameOutcome, evaluate},
};
use crate::Error;

/// A move in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub position: usize,
    pub symbol: Symbol,
}

/// A round with its history.
///
/// The board is kept alongside the moves so it does not have to be replayed
/// on every query; [`Game::replay`] rebuilds it from the moves alone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    moves: Vec<Move>,
}

impl Game {
    /// Create a new game on an empty board
    pub fn new() -> Self {
        Self::default()
    }

    /// Play a move
    ///
    /// # Errors
    ///
    /// Returns [`Error::GameOver`] once the board is won or drawn and
    /// [`Error::InvalidMove`] for an out-of-range or occupied cell.
    pub fn play(&mut self, position: usize, symbol: Symbol) -> Result<GameOutcome, Error> {
        if self.outcome().is_terminal() {
            return Err(Error::GameOver);
        }

        self.board = self.board.apply_move(position, symbol)?;
        self.moves.push(Move { position, symbol });
        Ok(self.outcome())
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn outcome(&self) -> GameOutcome {
        evaluate(&self.board)
    }

    /// Rebuild the board from a move list
    ///
    /// # Errors
    ///
    /// Returns error if any move in the history is invalid for the board
    /// reached so far. This indicates corrupted game data.
    pub fn replay(moves: &[Move]) -> Result<Board, Error> {
        moves
            .iter()
            .try_fold(Board::EMPTY, |board, m| board.apply_move(m.position, m.symbol))
    }

    /// Get the sequence of boards, starting with the empty one
    pub fn board_sequence(&self) -> Result<Vec<Board>, Error> {
        let mut boards = Vec::with_capacity(self.moves.len() + 1);
        let mut board = Board::EMPTY;
        boards.push(board);
        for m in &self.moves {
            board = board.apply_move(m.position, m.symbol)?;
            boards.push(board);
        }
        Ok(boards)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn play_records_moves_and_stops_at_win() {
        let mut game = Game::new();
        for (pos, symbol) in [(0, Symbol::X), (3, Symbol::O), (1, Symbol::X), (4, Symbol::O)] {
            assert_eq!(game.play(pos, symbol).unwrap(), GameOutcome::InProgress);
        }
        assert_eq!(
            game.play(2, Symbol::X).unwrap(),
            GameOutcome::Won(Symbol::X, [0, 1, 2])
        );
        assert!(matches!(game.play(5, Symbol::O), Err(Error::GameOver)));
        assert_eq!(game.moves().len(), 5);
    }

    #[test]
    fn replay_matches_live_board() {
        let mut game = Game::new();
        game.play(4, Symbol::X).unwrap();
        game.play(0, Symbol::O).unwrap();
        game.play(8, Symbol::X).unwrap();

        assert_eq!(Game::replay(game.moves()).unwrap(), *game.board());
        let boards = game.board_sequence().unwrap();
        assert_eq!(boards.len(), 4);
        assert_eq!(boards[0], Board::EMPTY);
        assert_eq!(boards[3], *game.board());
    }

    #[test]
    fn rejected_move_leaves_game_untouched() {
        let mut game = Game::new();
        game.play(4, Symbol::X).unwrap();
        assert!(game.play(4, Symbol::O).unwrap_err().is_invalid_move());
        assert_eq!(game.moves().len(), 1);
    }
}
