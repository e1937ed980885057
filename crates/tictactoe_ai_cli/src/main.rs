//! tictactoe_ai - command-line front end
//!
//! Computes computer moves, reports game status and runs self-play.

#![warn(missing_docs)]

mod cli;
mod config;
mod predictor;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use config::EngineConfig;
use predictor::TablePredictor;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tictactoe_ai::arena::play_match;
use tictactoe_ai::{
    Board, DifficultyTier, Engine, GameStatus, Symbol, parse_board_value, parse_symbol,
};
use tracing::{info, instrument, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = EngineConfig::load(cli.config.as_deref())?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    let engine = build_engine(&config);
    let mut rng = match config.seed() {
        Some(seed) => StdRng::seed_from_u64(*seed),
        None => StdRng::from_os_rng(),
    };

    match cli.command {
        Command::Move {
            board,
            symbol,
            difficulty,
        } => run_move(&engine, &config, &mut rng, &board, symbol, difficulty),
        Command::Status { board, symbol } => run_status(&engine, &config, &board, symbol),
        Command::Selfplay { x, o, games } => run_selfplay(&engine, &mut rng, &x, &o, games),
    }
}

/// Creates the engine, installing the move table if one is configured.
#[instrument(skip(config))]
fn build_engine(config: &EngineConfig) -> Engine {
    let Some(path) = config.predictor_table() else {
        info!("No move table configured, Medium plays like Easy");
        return Engine::new();
    };

    match TablePredictor::from_file(path) {
        Ok(predictor) => {
            if predictor.is_empty() {
                warn!("Move table is empty, every Medium move will fall back to Easy");
            }
            Engine::with_predictor(predictor)
        }
        Err(e) => {
            warn!(error = %e, "Move table unavailable, Medium plays like Easy");
            Engine::new()
        }
    }
}

fn parse_board_arg(raw: &str) -> Result<Board> {
    let value: serde_json::Value = serde_json::from_str(raw)?;
    Ok(parse_board_value(&value)?)
}

fn resolve_symbol(config: &EngineConfig, symbol: Option<String>) -> Result<Symbol> {
    match symbol {
        Some(s) => Ok(parse_symbol(&s)?),
        None => Ok(*config.computer_symbol()),
    }
}

/// Plays one computer turn and prints the outcome.
#[instrument(skip(engine, config, rng, board))]
fn run_move(
    engine: &Engine,
    config: &EngineConfig,
    rng: &mut StdRng,
    board: &str,
    symbol: Option<String>,
    difficulty: Option<String>,
) -> Result<()> {
    let board = parse_board_arg(board)?;
    let symbol = resolve_symbol(config, symbol)?;
    let tier = match difficulty {
        Some(d) => DifficultyTier::parse_strict(&d)?,
        None => *config.difficulty(),
    };

    let outcome = engine.play_turn_with(&board, tier, symbol, rng);
    println!("{}", serde_json::to_string_pretty(&outcome)?);
    Ok(())
}

/// Prints the status of a board.
fn run_status(
    engine: &Engine,
    config: &EngineConfig,
    board: &str,
    symbol: Option<String>,
) -> Result<()> {
    let board = parse_board_arg(board)?;
    let symbol = resolve_symbol(config, symbol)?;
    println!("{}", engine.game_status(&board, symbol));
    Ok(())
}

/// Runs `games` matches and prints how they ended.
#[instrument(skip(engine, rng))]
fn run_selfplay(engine: &Engine, rng: &mut StdRng, x: &str, o: &str, games: u32) -> Result<()> {
    let x_tier = DifficultyTier::parse_strict(x)?;
    let o_tier = DifficultyTier::parse_strict(o)?;

    let (mut x_wins, mut o_wins, mut draws) = (0u32, 0u32, 0u32);
    for game in 1..=games {
        let record = play_match(engine, x_tier, o_tier, rng);
        info!(game, status = %record.status(), moves = record.moves().len(), "Match finished");
        match record.status() {
            GameStatus::Win(Symbol::X) => x_wins += 1,
            GameStatus::Win(Symbol::O) => o_wins += 1,
            GameStatus::Draw => draws += 1,
            GameStatus::Ongoing => warn!(game, "Match stopped before the game ended"),
        }
    }

    println!("X ({}) wins: {}", x_tier, x_wins);
    println!("O ({}) wins: {}", o_tier, o_wins);
    println!("Draws: {}", draws);
    Ok(())
}
