//! # Gomoku Hot-Seat Player
//!
//! Two people share one terminal. Each line typed is either a move or a command:
//!
//! - `7,7` places a stone for the side to move
//! - `b 7,7` / `w 7,7` places a stone for an explicit color (rejected when it is
//!   not that color's turn)
//! - `history`, `new`, `help`, `quit`
//!
//! Set `RUST_LOG=debug` to see engine events on stderr.

use anyhow::{Context, Result};
use clap::Parser;
use gomoku::render::render;
use gomoku::{GameConfig, GameState, GomokuMove, Player};
use std::io::{self, BufRead, Write};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Board size (N for an N x N grid)
    #[arg(short, long, default_value_t = gomoku::config::DEFAULT_BOARD_SIZE)]
    board_size: usize,

    /// Stones in a row needed to win
    #[arg(short = 'l', long, default_value_t = gomoku::config::DEFAULT_WIN_LENGTH)]
    win_length: usize,

    /// Disable ANSI colors in the board view
    #[arg(long, action = clap::ArgAction::SetTrue)]
    no_color: bool,
}

/// A parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Place {
        player: Option<Player>,
        mv: GomokuMove,
    },
    History,
    NewGame,
    Help,
    Quit,
}

const HELP: &str = "\
Commands:
  r,c        place a stone for the side to move (zero-based row,col)
  b r,c      place a black stone
  w r,c      place a white stone
  history    show the move list
  new        start a new game
  quit       leave";

fn parse_command(line: &str) -> Result<Command, String> {
    let line = line.trim();
    match line.to_ascii_lowercase().as_str() {
        "q" | "quit" | "exit" => return Ok(Command::Quit),
        "h" | "history" => return Ok(Command::History),
        "n" | "new" => return Ok(Command::NewGame),
        "?" | "help" => return Ok(Command::Help),
        _ => {}
    }

    let (player, coords) = match line.split_once(char::is_whitespace) {
        Some((color, rest)) if color.chars().all(|c| c.is_ascii_alphabetic()) => {
            let player = match color.to_ascii_lowercase().as_str() {
                "b" | "black" => Player::Black,
                "w" | "white" => Player::White,
                other => return Err(format!("unknown color '{}'", other)),
            };
            (Some(player), rest)
        }
        _ => (None, line),
    };
    let mv = coords.parse::<GomokuMove>().map_err(|e| e.to_string())?;
    Ok(Command::Place { player, mv })
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let config = GameConfig::new(args.board_size, args.win_length)?;
    let mut game = GameState::new(config)?;
    let color = !args.no_color;

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    println!("{}", HELP);
    print!("\n{}", render(&game.current_status(), color));
    stdout.flush().context("failed to flush stdout")?;

    for line in stdin.lock().lines() {
        let line = line.context("failed to read from stdin")?;
        if line.trim().is_empty() {
            continue;
        }

        match parse_command(&line) {
            Ok(Command::Quit) => break,
            Ok(Command::Help) => println!("{}", HELP),
            Ok(Command::History) => print!("{}", game.format_history()),
            Ok(Command::NewGame) => {
                game.reset();
                print!("{}", render(&game.current_status(), color));
            }
            Ok(Command::Place { player, mv }) => {
                let player = player.unwrap_or_else(|| game.current_turn());
                match game.attempt_move(mv.row(), mv.col(), player) {
                    Ok(_) => print!("{}", render(&game.current_status(), color)),
                    Err(err) => println!("Move rejected: {}", err),
                }
                if game.is_game_over() {
                    println!("Type 'new' to play again or 'quit' to leave.");
                }
            }
            Err(msg) => println!("{} (type 'help' for commands)", msg),
        }
        stdout.flush().context("failed to flush stdout")?;
    }

    Ok(())
}
