//! Human-vs-computer session: turn order, symbol assignment and scores
//!
//! The rules engine knows nothing about whose turn it is. A [`Session`] is the
//! caller-side state that does: it checks turn legality, routes every move
//! through [`Board::apply_move`](crate::tictactoe::Board::apply_move), asks its
//! [`Opponent`] for the computer's moves and tallies finished rounds.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::{
    Error, Result,
    config::SessionConfig,
    strategy::{Difficulty, Opponent},
    tictactoe::{Board, Game, GameOutcome, Move, Symbol},
};

/// In-memory tally of finished rounds
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    pub human_wins: u32,
    pub computer_wins: u32,
    pub draws: u32,
}

impl Scoreboard {
    /// Record a finished round; `InProgress` is ignored
    pub fn record(&mut self, outcome: GameOutcome, human: Symbol) {
        match outcome {
            GameOutcome::Won(winner, _) if winner == human => self.human_wins += 1,
            GameOutcome::Won(_, _) => self.computer_wins += 1,
            GameOutcome::Draw => self.draws += 1,
            GameOutcome::InProgress => {}
        }
    }

    pub fn rounds(&self) -> u32 {
        self.human_wins + self.computer_wins + self.draws
    }
}

/// A series of rounds between one human and the computer
pub struct Session {
    game: Game,
    current_player: Symbol,
    human_symbol: Symbol,
    difficulty: Difficulty,
    seed: Option<u64>,
    difficulty_changes: u64,
    opponent: Box<dyn Opponent>,
    scores: Scoreboard,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("board", self.game.board())
            .field("current_player", &self.current_player)
            .field("human_symbol", &self.human_symbol)
            .field("difficulty", &self.difficulty)
            .field("opponent", &self.opponent.name())
            .field("scores", &self.scores)
            .finish()
    }
}

impl Session {
    /// Start a session with an empty board; X opens.
    pub fn new(config: SessionConfig) -> Self {
        Self {
            game: Game::new(),
            current_player: Symbol::X,
            human_symbol: config.human_symbol,
            difficulty: config.difficulty,
            seed: config.seed,
            difficulty_changes: 0,
            opponent: config.difficulty.into_boxed_opponent(config.seed),
            scores: Scoreboard::default(),
        }
    }

    pub fn board(&self) -> &Board {
        self.game.board()
    }

    pub fn moves(&self) -> &[Move] {
        self.game.moves()
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn outcome(&self) -> GameOutcome {
        self.game.outcome()
    }

    pub fn is_over(&self) -> bool {
        self.outcome().is_terminal()
    }

    pub fn current_player(&self) -> Symbol {
        self.current_player
    }

    pub fn human_symbol(&self) -> Symbol {
        self.human_symbol
    }

    pub fn computer_symbol(&self) -> Symbol {
        self.human_symbol.other()
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn scores(&self) -> &Scoreboard {
        &self.scores
    }

    /// True while the round runs and the computer is to move
    pub fn is_computer_turn(&self) -> bool {
        !self.is_over() && self.current_player == self.computer_symbol()
    }

    /// Play the human's move.
    ///
    /// # Errors
    ///
    /// - [`Error::GameOver`] if the round is finished
    /// - [`Error::NotYourTurn`] if the computer is to move
    /// - [`Error::InvalidMove`] for an out-of-range or occupied cell
    pub fn play_human(&mut self, index: usize) -> Result<GameOutcome> {
        self.play(index, self.human_symbol)
    }

    /// Ask the opponent for a move and play it.
    ///
    /// Returns the chosen cell and the outcome after it.
    pub fn play_computer(&mut self) -> Result<(usize, GameOutcome)> {
        let computer = self.computer_symbol();
        self.check_turn(computer)?;

        let index = self.opponent.select_move(self.game.board(), computer)?;
        let outcome = self.play(index, computer)?;
        Ok((index, outcome))
    }

    /// Clear the board for a new round; X opens, scores are kept.
    pub fn start_round(&mut self, human_symbol: Symbol) {
        self.game = Game::new();
        self.current_player = Symbol::X;
        self.human_symbol = human_symbol;
        debug!(human = %human_symbol, "new round");
    }

    /// Symbol the human should take next round.
    ///
    /// The winner of a decided round gets X (and so the opening move); a
    /// draw or an unfinished round keeps the current assignment.
    pub fn next_human_symbol(&self) -> Symbol {
        match self.outcome() {
            GameOutcome::Won(winner, _) if winner == self.human_symbol => Symbol::X,
            GameOutcome::Won(_, _) => Symbol::O,
            GameOutcome::Draw | GameOutcome::InProgress => self.human_symbol,
        }
    }

    /// Change the computer's strength; takes effect on its next move.
    ///
    /// In a seeded session the new opponent is seeded from the session seed
    /// offset by the number of changes so far, so switching back to a tier
    /// continues with fresh random choices instead of replaying old ones.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        if difficulty != self.difficulty {
            self.difficulty = difficulty;
            self.difficulty_changes += 1;
            self.opponent = difficulty.into_boxed_opponent(self.opponent_seed());
        }
    }

    fn opponent_seed(&self) -> Option<u64> {
        self.seed.map(|seed| seed.wrapping_add(self.difficulty_changes))
    }

    fn check_turn(&self, symbol: Symbol) -> Result<()> {
        if self.is_over() {
            return Err(Error::GameOver);
        }
        if symbol != self.current_player {
            return Err(Error::NotYourTurn {
                expected: self.current_player,
                got: symbol,
            });
        }
        Ok(())
    }

    #[instrument(skip(self), fields(board = %self.game.board()))]
    fn play(&mut self, index: usize, symbol: Symbol) -> Result<GameOutcome> {
        self.check_turn(symbol)?;

        let outcome = self.game.play(index, symbol)?;
        if outcome.is_terminal() {
            self.scores.record(outcome, self.human_symbol);
            info!(?outcome, moves = self.game.moves().len(), "round finished");
        } else {
            self.current_player = symbol.other();
        }
        Ok(outcome)
    }
}
