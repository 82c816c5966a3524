#![warn(clippy::pedantic)]

mod config;
mod render;

use std::path::PathBuf;

use clap::{ArgAction, Parser};
use color_eyre::eyre::WrapErr;
use config::CubeConfig;
use env_logger::TimestampPrecision;
use log::{LevelFilter, debug, info};
use owo_colors::OwoColorize;
use rubik_core::{Cube, Move};

/// Twist an N×N cube and print the result
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// A TOML file with the cube size and the moves to apply.
    #[arg(long, short = 'c', value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Tiles along each edge, overrides the configuration file.
    #[arg(long, short = 's')]
    size: Option<usize>,

    /// A move to apply after the ones in the configuration file, e.g.
    /// `row-right:top:0`. Can be repeated.
    #[arg(long = "move", short = 'm', value_name = "KIND:FACE:INDEX", value_parser = move_arg)]
    moves: Vec<Move>,

    /// Print letters instead of colored tiles.
    #[arg(long)]
    no_color: bool,

    /// Increase logging verbosity (can be repeated)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    log_level: u8,
}

fn move_arg(s: &str) -> Result<Move, String> {
    config::parse_move(s).map_err(|e| e.to_string())
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(match cli.log_level {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        })
        .format_timestamp(Some(TimestampPrecision::Millis))
        .init();

    let mut config = match &cli.config {
        Some(path) => CubeConfig::load(path)?,
        None => CubeConfig::default(),
    };
    if let Some(size) = cli.size {
        config.size = size;
    }
    config.color &= !cli.no_color;
    config.moves.extend(cli.moves);
    debug!("{config:?}");

    let mut cube = Cube::new(config.size)?;
    info!("Applying {} moves", config.moves.len());
    for move_ in &config.moves {
        cube.apply(*move_)
            .wrap_err_with(|| format!("Could not apply `{move_}`"))?;
    }

    if config.color {
        print!("{}", render::colored_net(&cube));
    } else {
        print!("{cube}");
    }

    if cube.is_solved() {
        println!("{}", "Solved".green());
    } else {
        println!("{}", "Not solved".red());
    }

    Ok(())
}
