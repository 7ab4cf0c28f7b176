//! Headless runner (default binary).
//!
//! Plays games with the greedy placer and prints a summary per game. There is no terminal
//! rendering; the final board is printed as text.
//!
//! Usage: `blockfall [--config <path.json>] [--games <n>] [--max-pieces <n>] [--json]`

use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use blockfall::core::{Board, EngineConfig, Matrix};
use blockfall::engine::{apply_place, best_placement};

const DEFAULT_MAX_PIECES: u32 = 1_000;

struct Args {
    config: Option<PathBuf>,
    games: u32,
    max_pieces: u32,
    json: bool,
}

fn parse_args() -> Result<Args> {
    let mut args = Args {
        config: None,
        games: 1,
        max_pieces: DEFAULT_MAX_PIECES,
        json: false,
    };

    let mut it = std::env::args().skip(1);
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--config" => {
                let path = it.next().context("--config needs a path")?;
                args.config = Some(PathBuf::from(path));
            }
            "--games" => {
                let n = it.next().context("--games needs a number")?;
                args.games = n.parse().with_context(|| format!("bad --games value: {n}"))?;
            }
            "--max-pieces" => {
                let n = it.next().context("--max-pieces needs a number")?;
                args.max_pieces = n
                    .parse()
                    .with_context(|| format!("bad --max-pieces value: {n}"))?;
            }
            "--json" => args.json = true,
            other => bail!("unknown argument: {other}"),
        }
    }
    Ok(args)
}

fn load_config(path: Option<&PathBuf>) -> Result<EngineConfig> {
    let Some(path) = path else {
        return Ok(EngineConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    EngineConfig::from_json_str(&text).with_context(|| format!("parsing config {}", path.display()))
}

fn render(grid: &Matrix) -> String {
    let mut out = String::with_capacity(grid.rows() * (grid.cols() + 3));
    for row in grid.iter_rows() {
        out.push('|');
        for &cell in row {
            out.push(if cell == 0 { '.' } else { '#' });
        }
        out.push_str("|\n");
    }
    out
}

/// Play one game; returns the number of pieces placed
fn play(board: &mut Board, max_pieces: u32) -> Result<u32> {
    let mut pieces = 0;
    if board.reset() {
        return Ok(pieces);
    }

    while !board.is_game_over() && pieces < max_pieces {
        match best_placement(board) {
            Some(target) => {
                apply_place(board, target.col, target.rotation)?;
            }
            None => {
                board.hard_drop()?;
            }
        }
        pieces += 1;
    }
    Ok(pieces)
}

fn main() -> Result<()> {
    let args = parse_args()?;
    let config = load_config(args.config.as_ref())?;
    let mut board = Board::with_config(config)?;

    for game in 1..=args.games {
        let pieces = play(&mut board, args.max_pieces)?;

        if args.json {
            println!("{}", board.snapshot().to_json()?);
            continue;
        }

        println!(
            "game {game}: pieces={pieces} score={} lines={} level={} high={}{}",
            board.score(),
            board.lines(),
            board.level(),
            board.high_score(),
            if board.is_game_over() { " (game over)" } else { "" },
        );
        if args.games == 1 {
            print!("{}", render(&board.composite_grid()));
        }
    }

    Ok(())
}
