mod common;

use common::{board, open_boards, play_out_all, reference_value, to_move};
use rand::{SeedableRng, rngs::StdRng};
use tictactoe_engine::{
    Board, Difficulty, Error, GameOutcome, Symbol, evaluate, select_move,
    strategy::{MinimaxSearch, heuristic_move, minimax_move, random_move, score_moves, winning_cell},
};

fn pick(b: &str, computer: Symbol, difficulty: Difficulty, seed: u64) -> usize {
    let mut rng = StdRng::seed_from_u64(seed);
    select_move(&board(b), computer, computer.other(), difficulty, &mut rng).unwrap()
}

#[test]
fn normal_blocks_open_two() {
    for seed in 0..10 {
        assert_eq!(pick("XX.......", Symbol::O, Difficulty::Normal, seed), 2);
    }
}

#[test]
fn win_is_preferred_over_block() {
    // X can win at 2 while O threatens 5
    for difficulty in [Difficulty::Normal, Difficulty::Hard] {
        assert_eq!(pick("XX.OO....", Symbol::X, difficulty, 3), 2);
    }
}

#[test]
fn hard_opens_in_the_centre() {
    assert_eq!(pick(".........", Symbol::X, Difficulty::Hard, 0), 4);
}

#[test]
fn every_tier_rejects_finished_boards() {
    for difficulty in Difficulty::ALL {
        for b in ["XXXOO....", "XOXXOOOXX"] {
            let mut rng = StdRng::seed_from_u64(0);
            let result = select_move(&board(b), Symbol::O, Symbol::X, difficulty, &mut rng);
            assert!(matches!(result, Err(Error::NoLegalMove)), "{difficulty} on {b}");
        }
    }
}

#[test]
fn same_symbol_for_both_sides_is_rejected() {
    let mut rng = StdRng::seed_from_u64(0);
    let result = select_move(&board("........."), Symbol::X, Symbol::X, Difficulty::Easy, &mut rng);
    assert!(matches!(result, Err(Error::SymbolConflict { symbol: Symbol::X })));
}

#[test]
fn seeded_selection_is_reproducible() {
    for difficulty in Difficulty::ALL {
        for seed in [1, 17, 99] {
            let first = pick("X...O....", Symbol::X, difficulty, seed);
            let second = pick("X...O....", Symbol::X, difficulty, seed);
            assert_eq!(first, second);
        }
    }
}

#[test]
fn easy_covers_every_empty_cell() {
    let b = board(".........");
    let mut rng = StdRng::seed_from_u64(2024);
    let mut hits = [0u32; 9];
    for _ in 0..500 {
        hits[random_move(&b, &mut rng).unwrap()] += 1;
    }
    assert!(hits.iter().all(|&n| n > 0), "{hits:?}");
}

#[test]
fn chosen_cells_are_always_legal() {
    let mut rng = StdRng::seed_from_u64(11);
    for b in open_boards().into_iter().step_by(13) {
        let computer = to_move(&b);
        for difficulty in Difficulty::ALL {
            let pos = select_move(&b, computer, computer.other(), difficulty, &mut rng).unwrap();
            assert!(b.is_empty(pos), "{difficulty} chose {pos} on {b}");
        }
    }
}

#[test]
fn available_win_is_always_taken() {
    let mut rng = StdRng::seed_from_u64(5);
    for b in open_boards() {
        let computer = to_move(&b);
        if winning_cell(&b, computer).is_none() {
            continue;
        }

        let normal = heuristic_move(&b, computer, computer.other(), &mut rng).unwrap();
        let hard = minimax_move(&b, computer).unwrap();
        for pos in [normal, hard] {
            let after = b.apply_move(pos, computer).unwrap();
            assert_eq!(evaluate(&after).winner(), Some(computer), "on {b}");
        }
    }
}

#[test]
fn hard_never_loses_as_second_player() {
    let policy = |b: &Board| minimax_move(b, Symbol::O).unwrap();
    let mut finals = Vec::new();
    play_out_all(board("........."), Symbol::X, Symbol::O, &policy, &mut finals);

    assert!(!finals.is_empty());
    for (b, outcome) in finals {
        assert_ne!(outcome.winner(), Some(Symbol::X), "human won on {b}");
    }
}

#[test]
fn hard_never_loses_as_first_player() {
    let policy = |b: &Board| minimax_move(b, Symbol::X).unwrap();
    let mut finals = Vec::new();
    play_out_all(board("........."), Symbol::X, Symbol::X, &policy, &mut finals);

    assert!(!finals.is_empty());
    for (b, outcome) in finals {
        assert_ne!(outcome.winner(), Some(Symbol::O), "human won on {b}");
        assert_ne!(outcome, GameOutcome::InProgress);
    }
}

#[test]
fn pruned_search_matches_plain_minimax() {
    for b in open_boards().into_iter().filter(|b| b.occupied_count() >= 3) {
        let computer = to_move(&b);
        let mut search = MinimaxSearch::new(computer);
        assert_eq!(
            search.value(&b, computer, 0),
            reference_value(&b, computer, computer, 0),
            "value differs on {b}"
        );
    }
}

#[test]
fn move_scores_are_exact_and_best_move_is_their_maximum() {
    for b in open_boards().into_iter().filter(|b| b.occupied_count() >= 4) {
        let computer = to_move(&b);
        let scores = score_moves(&b, computer).unwrap();

        for &(pos, score) in &scores {
            let child = b.apply_move(pos, computer).unwrap();
            assert_eq!(score, reference_value(&child, computer, computer.other(), 1));
        }

        let best = MinimaxSearch::new(computer).best_move(&b).unwrap();
        let top = scores.iter().map(|&(_, s)| s).max().unwrap();
        assert_eq!(best.score, top, "on {b}");
        // Ties go to the earliest cell in search order
        let first_top = scores.iter().find(|&&(_, s)| s == top).unwrap().0;
        assert_eq!(best.position, first_top, "on {b}");
    }
}
