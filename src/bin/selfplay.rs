//! Self-play driver: search agents play tic-tac-toe and report timings.
//!
//! By default both players use alpha-beta, then both use plain minimax,
//! printing every board and the wall-clock time of each run.

use anyhow::Result;
use clap::{Parser, ValueEnum};

use rust_adversarial::play::status_line;
use rust_adversarial::{
    Agent, Algorithm, Arena, FirstLegalAgent, Game, MatchConfig, PlayerId, RandomAgent,
    SearchAgent, SearchConfig, TicTacToe, TicTacToeState,
};

#[derive(Parser)]
#[command(name = "selfplay")]
#[command(version, about = "Play tic-tac-toe with minimax search agents", long_about = None)]
struct Cli {
    /// Search algorithm for the searching players
    #[arg(long, value_enum, default_value_t = AlgorithmArg::Both)]
    algorithm: AlgorithmArg,

    /// Who plays P2
    #[arg(long, value_enum, default_value_t = OpponentArg::Search)]
    opponent: OpponentArg,

    /// Seed for the random opponent
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Matches to play per algorithm
    #[arg(long, default_value_t = 1)]
    games: u32,

    /// Start from this board instead of an empty one, e.g. "x.o/.x./..."
    #[arg(long)]
    board: Option<String>,

    /// Only print the summary lines
    #[arg(long)]
    quiet: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum AlgorithmArg {
    AlphaBeta,
    Minimax,
    Both,
}

impl AlgorithmArg {
    fn algorithms(self) -> Vec<Algorithm> {
        match self {
            AlgorithmArg::AlphaBeta => vec![Algorithm::AlphaBeta],
            AlgorithmArg::Minimax => vec![Algorithm::Minimax],
            AlgorithmArg::Both => vec![Algorithm::AlphaBeta, Algorithm::Minimax],
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OpponentArg {
    /// Same search as P1
    Search,
    /// Uniformly random legal moves
    Random,
    /// Always the first empty cell
    First,
}

fn print_state(game: &TicTacToe, state: &TicTacToeState) {
    println!();
    print!("{}", state.board());
    println!();
    println!("{}", status_line(game, state));
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let game = TicTacToe::new();
    let start = match &cli.board {
        Some(board) => game.parse_state(board)?,
        None => game.initial_state(),
    };
    if game.is_terminal(&start) {
        anyhow::bail!("starting board is already decided: {}", status_line(&game, &start));
    }

    let arena = Arena::new(game, MatchConfig::default());
    let mut random = RandomAgent::new(game, cli.seed);

    for algorithm in cli.algorithm.algorithms() {
        let config = SearchConfig::default().with_algorithm(algorithm);
        let mut elapsed_us = 0u64;

        for _ in 0..cli.games {
            let mut first = SearchAgent::new(game, config.clone());
            let mut second: Box<dyn Agent<TicTacToe>> = match cli.opponent {
                OpponentArg::Search => Box::new(SearchAgent::new(game, config.clone())),
                OpponentArg::Random => Box::new(random.fork()),
                OpponentArg::First => Box::new(FirstLegalAgent::new(game)),
            };

            if !cli.quiet {
                print_state(&game, &start);
            }

            let record = arena.play_from(start, &mut first, second.as_mut(), |record, state| {
                if !cli.quiet {
                    println!("{}'s action: {}", record.player, record.action);
                    print_state(&game, state);
                }
            })?;

            elapsed_us += record.elapsed_us;
            for player in PlayerId::all() {
                let stats = record.stats_for(player);
                log::info!(
                    "{:<32}{} nodes, {} cutoffs",
                    format!("{player} search"),
                    stats.nodes,
                    stats.cutoffs,
                );
            }
            let totals = record.total_stats();
            log::info!(
                "{:<32}{} nodes, {} cutoffs",
                "match search totals",
                totals.nodes,
                totals.cutoffs,
            );
        }

        println!(
            "{} execution time: {:.4} seconds",
            algorithm.name(),
            elapsed_us as f64 / 1_000_000.0
        );
    }

    Ok(())
}
