use anyhow::Context;
use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use macroquad::prelude::{Conf, next_frame, prevent_quit};
use sweeplet_core::{GameConfig, GameController, LoopControl, ShuffleGenerator};
use tracing_subscriber::filter::LevelFilter;

mod surface;
mod theme;

const WINDOW_TITLE: &str = "Minesweeper";
const WINDOW_SIZE: (i32, i32) = (1000, 800);

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Color scheme of the window
    #[arg(short, long, value_enum, default_value_t)]
    theme: theme::Theme,
}

fn window_conf() -> Conf {
    Conf {
        window_title: WINDOW_TITLE.to_owned(),
        window_width: WINDOW_SIZE.0,
        window_height: WINDOW_SIZE.1,
        window_resizable: false,
        ..Default::default()
    }
}

fn level_filter(verbose: &Verbosity<WarnLevel>) -> LevelFilter {
    match verbose.log_level_filter() {
        log::LevelFilter::Off => LevelFilter::OFF,
        log::LevelFilter::Error => LevelFilter::ERROR,
        log::LevelFilter::Warn => LevelFilter::WARN,
        log::LevelFilter::Info => LevelFilter::INFO,
        log::LevelFilter::Debug => LevelFilter::DEBUG,
        log::LevelFilter::Trace => LevelFilter::TRACE,
    }
}

fn init_logging(verbose: &Verbosity<WarnLevel>) -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(level_filter(verbose))
        .with_target(false)
        .try_init()
        .map_err(|err| anyhow::anyhow!("Error initializing logger: {err}"))
}

async fn run(args: Args) -> anyhow::Result<()> {
    let seed = args.seed.unwrap_or_else(rand::random);
    log::debug!("seed: {}", seed);

    prevent_quit();
    let surface = surface::MacroquadSurface::new(args.theme);
    let mut game = GameController::new(surface, GameConfig::CLASSIC, ShuffleGenerator::new(seed))
        .context("Could not lay out the board")?;
    log::debug!(
        "mine placement: {}",
        serde_json::to_string(game.board().placement())?
    );

    log::debug!("App started");
    while game.frame() == LoopControl::Continue {
        next_frame().await;
    }
    log::debug!("App closed");

    Ok(())
}

#[macroquad::main(window_conf)]
async fn main() {
    let args = Args::parse();
    if let Err(err) = init_logging(&args.verbose) {
        eprintln!("{err:#}");
    }

    if let Err(err) = run(args).await {
        log::error!("{err:#}");
        std::process::exit(1);
    }
}
