//! Arena command - Batch play between two difficulty tiers

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::{
    arena::{Arena, ArenaConfig},
    cli::output::{create_arena_progress, format_share, print_kv, print_section},
    strategy::Difficulty,
};

#[derive(Parser, Debug)]
#[command(about = "Play two difficulty tiers against each other")]
pub struct ArenaArgs {
    /// Tier playing the human seat
    #[arg(long)]
    pub challenger: Option<Difficulty>,

    /// Tier playing the computer seat
    #[arg(long)]
    pub defender: Option<Difficulty>,

    /// Number of rounds
    #[arg(long, short = 'g')]
    pub games: Option<usize>,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Keep the challenger on X every round
    #[arg(long)]
    pub fixed_symbols: bool,

    /// Arena configuration file (JSON); flags take precedence
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Export results to file
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Hide the progress bar
    #[arg(long)]
    pub quiet: bool,
}

fn load_config(args: &ArenaArgs) -> Result<ArenaConfig> {
    let mut config = match &args.config {
        Some(path) => ArenaConfig::from_file(path)
            .with_context(|| format!("Failed to load arena config from {}", path.display()))?,
        None => ArenaConfig::default(),
    };

    if let Some(challenger) = args.challenger {
        config.challenger = challenger;
    }
    if let Some(defender) = args.defender {
        config.defender = defender;
    }
    if let Some(games) = args.games {
        config.games = games;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    if args.fixed_symbols {
        config.alternate_symbols = false;
    }
    config.validate()?;
    Ok(config)
}

pub fn execute(args: ArenaArgs) -> Result<()> {
    let config = load_config(&args)?;

    print_section("Arena");
    print_kv("Challenger", config.challenger.as_str());
    print_kv("Defender", config.defender.as_str());
    print_kv("Games", &config.games.to_string());
    if let Some(seed) = config.seed {
        print_kv("Seed", &seed.to_string());
    }

    let progress = if args.quiet {
        None
    } else {
        Some(create_arena_progress(config.games as u64)?)
    };

    let arena = Arena::new(config);
    let result = arena.run_with(|_, outcome| {
        if let Some(pb) = &progress {
            pb.set_message(outcome.to_string());
            pb.inc(1);
        }
    })?;

    if let Some(pb) = progress {
        pb.finish_and_clear();
    }

    print_section("Results");
    print_kv("Total games", &result.total_games.to_string());
    print_kv(
        &format!("{} wins", result.challenger),
        &format_share(result.challenger_wins, result.challenger_win_rate),
    );
    print_kv(
        &format!("{} wins", result.defender),
        &format_share(result.defender_wins, result.defender_win_rate),
    );
    print_kv("Draws", &format_share(result.draws, result.draw_rate));

    if let Some(path) = &args.export {
        result.save(path)?;
        println!("\n✓ Results exported to: {}", path.display());
    }

    Ok(())
}
