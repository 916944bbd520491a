//! Common test utilities for the tictactoe-engine test suite.
//!
//! Board construction from strings and enumeration of every position
//! reachable in legal play.

#![allow(dead_code)]

use std::collections::HashSet;

use tictactoe_engine::{Board, GameOutcome, Symbol, evaluate};

/// Parse a board literal, panicking on malformed input
pub fn board(s: &str) -> Board {
    s.parse()
        .unwrap_or_else(|e| panic!("bad board literal {s:?}: {e}"))
}

/// Symbol to move on a board reached by alternating play with X first
pub fn to_move(board: &Board) -> Symbol {
    if board.count(Symbol::X) == board.count(Symbol::O) {
        Symbol::X
    } else {
        Symbol::O
    }
}

/// Every board reachable from the empty one by legal alternating play,
/// terminal boards included
pub fn reachable_boards() -> Vec<Board> {
    let mut seen = HashSet::new();
    let mut stack = vec![Board::EMPTY];
    let mut boards = Vec::new();

    while let Some(board) = stack.pop() {
        if !seen.insert(board) {
            continue;
        }
        boards.push(board);

        let mover = to_move(&board);
        for pos in board.legal_moves() {
            let child = board.apply_move(pos, mover).unwrap();
            stack.push(child);
        }
    }
    boards
}

/// Reachable boards where the game is still running
pub fn open_boards() -> Vec<Board> {
    reachable_boards()
        .into_iter()
        .filter(|b| evaluate(b) == GameOutcome::InProgress)
        .collect()
}

/// Plain minimax without pruning, scored from `computer`'s perspective with
/// the same depth bias as the engine
pub fn reference_value(board: &Board, computer: Symbol, mover: Symbol, depth: i32) -> i32 {
    match evaluate(board) {
        GameOutcome::Won(winner, _) if winner == computer => 10 - depth,
        GameOutcome::Won(_, _) => depth - 10,
        GameOutcome::Draw => 0,
        GameOutcome::InProgress => {
            let values = board.legal_moves().into_iter().map(|pos| {
                let child = board.apply_move(pos, mover).unwrap();
                reference_value(&child, computer, mover.other(), depth + 1)
            });
            if mover == computer {
                values.max().unwrap()
            } else {
                values.min().unwrap()
            }
        }
    }
}

/// Play every possible sequence of human moves against a deterministic
/// computer policy and collect the final outcomes
pub fn play_out_all<F>(
    board: Board,
    mover: Symbol,
    computer: Symbol,
    policy: &F,
    out: &mut Vec<(Board, GameOutcome)>,
) where
    F: Fn(&Board) -> usize,
{
    let outcome = evaluate(&board);
    if outcome.is_terminal() {
        out.push((board, outcome));
        return;
    }

    if mover == computer {
        let child = board.apply_move(policy(&board), computer).unwrap();
        play_out_all(child, mover.other(), computer, policy, out);
    } else {
        for pos in board.legal_moves() {
            let child = board.apply_move(pos, mover).unwrap();
            play_out_all(child, mover.other(), computer, policy, out);
        }
    }
}
