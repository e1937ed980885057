//! Command-line interface for tictactoe_ai.

use clap::{Parser, Subcommand};

/// Tic-tac-toe move engine
#[derive(Parser, Debug)]
#[command(name = "tictactoe_ai")]
#[command(about = "Computer moves for 3x3 tic-tac-toe", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./tictactoe_ai.toml if present)
    #[arg(long, global = true)]
    pub config: Option<std::path::PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play one computer turn and print the board, move and status as JSON
    Move {
        /// Board as a 3x3 JSON array of null, "X" or "O"
        #[arg(short, long)]
        board: String,

        /// Symbol the computer plays ("X" or "O")
        #[arg(short, long)]
        symbol: Option<String>,

        /// Difficulty level ("Easy", "Medium" or "Hard")
        #[arg(short, long)]
        difficulty: Option<String>,
    },

    /// Print the game status of a board
    Status {
        /// Board as a 3x3 JSON array of null, "X" or "O"
        #[arg(short, long)]
        board: String,

        /// Symbol the computer plays ("X" or "O")
        #[arg(short, long)]
        symbol: Option<String>,
    },

    /// Play computer-versus-computer matches and print the tally
    Selfplay {
        /// Difficulty for X, who moves first
        #[arg(long, default_value = "Hard")]
        x: String,

        /// Difficulty for O
        #[arg(long, default_value = "Hard")]
        o: String,

        /// Number of matches
        #[arg(short, long, default_value = "1")]
        games: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_move() {
        let cli = Cli::try_parse_from([
            "tictactoe_ai",
            "move",
            "--board",
            "[[null,null,null],[null,null,null],[null,null,null]]",
            "--symbol",
            "X",
            "--difficulty",
            "Easy",
        ])
        .unwrap();
        match cli.command {
            Command::Move {
                symbol, difficulty, ..
            } => {
                assert_eq!(symbol.as_deref(), Some("X"));
                assert_eq!(difficulty.as_deref(), Some("Easy"));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_selfplay_defaults() {
        let cli = Cli::try_parse_from(["tictactoe_ai", "--config", "x.toml", "selfplay"]).unwrap();
        assert_eq!(cli.config.as_deref(), Some(std::path::Path::new("x.toml")));
        match cli.command {
            Command::Selfplay { x, o, games } => {
                assert_eq!(x, "Hard");
                assert_eq!(o, "Hard");
                assert_eq!(games, 1);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_board_required() {
        assert!(Cli::try_parse_from(["tictactoe_ai", "status"]).is_err());
    }
}
