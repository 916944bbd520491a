//! Easy tier: uniform random play

use rand::{Rng, SeedableRng, random, rngs::StdRng};

use super::{Difficulty, Opponent, ensure_in_progress};
use crate::{
    Error, Result,
    tictactoe::{Board, Symbol},
};

/// Pick an empty cell uniformly at random
pub fn random_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Result<usize> {
    ensure_in_progress(board)?;
    let moves = board.empty_positions();
    if moves.is_empty() {
        return Err(Error::NoLegalMove);
    }
    let index = rng.random_range(0..moves.len());
    Ok(moves[index])
}

/// Random opponent (baseline)
pub struct RandomOpponent {
    rng: StdRng,
}

impl RandomOpponent {
    /// Create a new random opponent, seeded from `seed` or from entropy
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed.unwrap_or_else(random::<u64>)),
        }
    }
}

impl Opponent for RandomOpponent {
    fn difficulty(&self) -> Difficulty {
        Difficulty::Easy
    }

    fn name(&self) -> &str {
        "Random"
    }

    fn select_move(&mut self, board: &Board, _computer: Symbol) -> Result<usize> {
        random_move(board, &mut self.rng)
    }

    fn set_rng_seed(&mut self, seed: u64) -> Result<()> {
        self.rng = StdRng::seed_from_u64(seed);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn only_picks_empty_cells() {
        let board: Board = "XOXO.XOX.".parse().unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        let seen: HashSet<usize> = (0..50)
            .map(|_| random_move(&board, &mut rng).unwrap())
            .collect();
        assert_eq!(seen, HashSet::from([4, 8]));
    }

    #[test]
    fn reseeding_repeats_sequence() {
        let mut opponent = RandomOpponent::new(Some(11));
        let first: Vec<usize> = (0..10)
            .map(|_| opponent.select_move(&Board::EMPTY, Symbol::O).unwrap())
            .collect();
        opponent.set_rng_seed(11).unwrap();
        let second: Vec<usize> = (0..10)
            .map(|_| opponent.select_move(&Board::EMPTY, Symbol::O).unwrap())
            .collect();
        assert_eq!(first, second);
    }
}
