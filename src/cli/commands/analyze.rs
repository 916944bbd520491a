//! Analyze command - Minimax scores and heuristic choice for a position

use anyhow::Result;
use clap::Parser;
use rand::{SeedableRng, rngs::StdRng};

use crate::{
    cli::output::{format_number, print_kv, print_section, print_subsection},
    strategy::{MinimaxSearch, heuristic_choice, score_moves},
    tictactoe::{Board, LineAnalyzer, Symbol},
};

#[derive(Parser, Debug)]
#[command(about = "Show minimax scores for every legal move")]
pub struct AnalyzeArgs {
    /// Board as nine cells (X, O, or . for empty)
    pub board: Board,

    /// Symbol to move
    #[arg(long, short = 'c', default_value = "O")]
    pub computer: Symbol,

    /// Seed for the heuristic's random fallback
    #[arg(long, default_value_t = 0)]
    pub seed: u64,
}

pub fn execute(args: AnalyzeArgs) -> Result<()> {
    let board = args.board;
    let computer = args.computer;

    print_section(&format!("Position ({computer} to move)"));
    println!("{}", board.grid());

    print_subsection("Threats");
    for symbol in Symbol::ALL {
        let cells = LineAnalyzer::completing_cells(board.cells(), symbol);
        print_kv(&format!("{symbol} completes at"), &format!("{cells:?}"));
    }

    print_subsection("Minimax scores (search order)");
    for (position, score) in score_moves(&board, computer)? {
        let verdict = match score {
            s if s > 0 => format!("wins in {} plies", 10 - s),
            s if s < 0 => format!("loses in {} plies", 10 + s),
            _ => "draw".to_string(),
        };
        println!("  cell {position}: {score:>3}  {verdict}");
    }

    let mut search = MinimaxSearch::new(computer);
    let best = search.best_move(&board)?;

    print_subsection("Hard");
    print_kv("Move", &best.position.to_string());
    print_kv("Score", &best.score.to_string());
    print_kv("Nodes", &format_number(search.nodes()));
    print_kv("Cutoffs", &format_number(search.cutoffs()));

    let mut rng = StdRng::seed_from_u64(args.seed);
    let (position, stage) = heuristic_choice(&board, computer, computer.other(), &mut rng)?;

    print_subsection("Normal");
    print_kv("Move", &position.to_string());
    print_kv("Stage", &stage.to_string());

    Ok(())
}
