//! Play 2048 in the terminal.
//!
//! Enter W/A/S/D (or up/left/down/right) and press return; Q quits.

use anyhow::Context;
use clap::Parser;
use std::io::{self, BufRead, Write};
use tracing::info;

use rust_2048::core::{GameConfig, GameRng, Tile, DEFAULT_SIZE, DEFAULT_WIN_TILE};
use rust_2048::game::GameState;
use rust_2048::logging;
use rust_2048::{Direction, GameProgress};

#[derive(Parser, Debug)]
#[command(version, about = "Play 2048 in the terminal")]
struct Args {
    /// Board dimension
    #[arg(long, env = "R2048_SIZE", default_value_t = DEFAULT_SIZE)]
    size: usize,

    /// Tile value that wins the game
    #[arg(long, env = "R2048_WIN_TILE", default_value_t = DEFAULT_WIN_TILE)]
    win_tile: Tile,

    /// Seed for tile placement; random when omitted
    #[arg(long)]
    seed: Option<u64>,
}

fn display(out: &mut impl Write, state: &GameState, progress: GameProgress) -> io::Result<()> {
    writeln!(out, "\nScore: {}", state.score)?;
    match progress {
        GameProgress::InProgress => writeln!(out, "Status: {progress}")?,
        GameProgress::Won => writeln!(out, "YOU WON!")?,
        GameProgress::Lost => writeln!(out, "GAME OVER!")?,
    }
    write!(out, "{}", state.board)?;
    writeln!(out, "{}", "-".repeat(state.board.size() * 6))
}

fn main() -> anyhow::Result<()> {
    logging::setup("warn")?;
    let args = Args::parse();

    let mut rng = args.seed.map_or_else(GameRng::from_entropy, GameRng::new);
    info!(seed = rng.seed(), "starting game");

    let config = GameConfig::new(args.size).with_win_tile(args.win_tile);
    let mut state = GameState::new(config, &mut rng).context("cannot start game")?;
    let mut progress = state.progress();

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    let mut lines = stdin.lock().lines();

    display(&mut stdout, &state, progress)?;

    while progress == GameProgress::InProgress {
        write!(stdout, "Enter move (W/A/S/D for Up/Left/Down/Right, Q to quit): ")?;
        stdout.flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let input = line?;
        if input.trim().eq_ignore_ascii_case("q") {
            writeln!(stdout, "Quitting game.")?;
            break;
        }

        let direction: Direction = match input.parse() {
            Ok(direction) => direction,
            Err(_) => {
                writeln!(stdout, "Invalid input. Use W, A, S, D.")?;
                continue;
            }
        };

        let turn = state.apply(direction, &mut rng);
        if !turn.effective {
            writeln!(stdout, "Move did not change the board. Try a different direction.")?;
        }
        state = turn.state;
        progress = turn.progress;

        display(&mut stdout, &state, progress)?;
    }

    writeln!(stdout, "\n--- Final Board State ---")?;
    display(&mut stdout, &state, progress)?;
    match progress {
        GameProgress::Won => writeln!(
            stdout,
            "Congratulations! You reached the {} tile!",
            state.win_tile()
        )?,
        GameProgress::Lost => writeln!(stdout, "No more moves possible. Better luck next time!")?,
        GameProgress::InProgress => {}
    }
    Ok(())
}
