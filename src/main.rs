use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use log::{info, warn};

use slide2048::core::{BoardSize, GameConfig, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use slide2048::display::Palette;
use slide2048::game::{CommandOutcome, GameState};
use slide2048::persistence::{BestScoreStore, FileBestScore};
use slide2048::shell::{self, ShellCommand};

#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "2048 where you pick one tile and slide only that tile"
)]
struct Cli {
    /// Board edge length (2-8). Overrides the config file
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u8).range(MIN_BOARD_SIZE as i64..=MAX_BOARD_SIZE as i64))]
    size: Option<u8>,

    /// Any tile reaching this value wins. Overrides the config file
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
    target: Option<u32>,

    /// RNG seed for a reproducible game
    #[arg(long, value_name = "N")]
    seed: Option<u64>,

    /// TOML file with game settings
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Where the best score is kept between sessions
    #[arg(long, value_name = "FILE", default_value = ".slide2048_best")]
    best_score_file: PathBuf,

    /// Plain text output without ANSI colours
    #[arg(long)]
    no_color: bool,

    /// Print the game state as JSON after every command
    #[arg(long)]
    json: bool,
}

fn load_config(cli: &Cli) -> Result<GameConfig> {
    let mut config = match &cli.config {
        Some(path) => GameConfig::from_toml(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => GameConfig::default(),
    };
    if let Some(size) = cli.size {
        config = config.with_board_size(BoardSize::new(usize::from(size))?);
    }
    if let Some(target) = cli.target {
        config = config.with_target(target);
    }
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    Ok(config)
}

fn draw(out: &mut impl Write, state: &GameState, palette: &Palette, cli: &Cli) -> Result<()> {
    if cli.json {
        let json = serde_json::to_string(&state.view()).context("serializing game view")?;
        writeln!(out, "{json}")?;
    } else {
        write!(out, "{}", shell::render(state, palette, !cli.no_color))?;
        write!(out, "> ")?;
    }
    out.flush()?;
    Ok(())
}

/// Print an error line. In `--json` mode it is a JSON object, so every line parses.
fn report(out: &mut impl Write, message: &str, cli: &Cli) -> Result<()> {
    if cli.json {
        writeln!(out, "{}", shell::error_json(message))?;
    } else {
        writeln!(out, "{message}")?;
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let config = load_config(&cli)?;
    let mut store = FileBestScore::new(cli.best_score_file.clone());
    let best = store
        .load()
        .with_context(|| format!("reading best score from {}", store.path().display()))?;

    let mut state = GameState::new(config).context("creating game")?.with_best_score(best);
    info!(
        "new {} game, target {}, seed {}",
        state.size(),
        state.config().target,
        state.rng().seed()
    );

    let palette = Palette::classic();
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if !cli.json {
        writeln!(out, "{}\n", shell::HELP)?;
    }
    draw(&mut out, &state, &palette, &cli)?;

    for line in stdin.lock().lines() {
        let line = line.context("reading input")?;
        if line.trim().is_empty() {
            if !cli.json {
                write!(out, "> ")?;
                out.flush()?;
            }
            continue;
        }

        let command = match shell::parse_command(&line) {
            Ok(ShellCommand::Quit) => break,
            Ok(ShellCommand::Help) => {
                if !cli.json {
                    writeln!(out, "{}", shell::HELP)?;
                }
                draw(&mut out, &state, &palette, &cli)?;
                continue;
            }
            Ok(ShellCommand::Game(command)) => command,
            Err(e) => {
                report(&mut out, &e.to_string(), &cli)?;
                draw(&mut out, &state, &palette, &cli)?;
                continue;
            }
        };

        match state.apply(command) {
            Ok(outcome) => {
                if let CommandOutcome::Move(ref moved) = outcome {
                    if moved.report().is_some_and(|r| r.new_best) {
                        if let Err(e) = store.save(state.best_score()) {
                            warn!("could not save best score: {e}");
                        }
                    }
                }
                if !cli.json {
                    if let Some(text) = shell::describe(&outcome) {
                        writeln!(out, "{text}")?;
                    }
                }
            }
            Err(e) => report(&mut out, &e.to_string(), &cli)?,
        }
        draw(&mut out, &state, &palette, &cli)?;
    }

    if !cli.json {
        writeln!(out)?;
    }
    Ok(())
}
