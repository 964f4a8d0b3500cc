use std::error::Error;

use clap::{Parser, ValueEnum};
use log::{error, info};

use rusty_micromouse::maze::ascii_utils::visualize_maze_ascii;
use rusty_micromouse::maze::labyrinth::Labyrinth;
use rusty_micromouse::maze::simulator::{self, SensorMode, DEFAULT_STEPS};
use rusty_micromouse::{server, MouseSession, ADDRESS};

/// Façon de décider chaque pas
#[derive(ValueEnum, Clone, Copy, Debug)]
enum Mode {
    /// Une seule mesure par pas, réutilisée après chaque rotation
    Literal,
    /// Nouvelle mesure après chaque rotation
    Polling,
    /// Suivi de murs, cellules non visitées d'abord
    WallFollower,
}

impl From<Mode> for SensorMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Literal => SensorMode::Literal,
            Mode::Polling => SensorMode::Polling,
            Mode::WallFollower => SensorMode::WallFollower,
        }
    }
}

/// Micromouse 4x4 : simulation locale ou hôte TCP
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Labyrinthe de référence (default, simple, complex) ; au hasard si absent
    #[arg(short, long)]
    layout: Option<String>,

    /// Nombre maximal de pas
    #[arg(short, long, default_value_t = DEFAULT_STEPS)]
    steps: usize,

    /// Explorateur utilisé par la simulation
    #[arg(short, long, value_enum, default_value_t = Mode::Literal)]
    mode: Mode,

    /// Affiche la carte découverte après chaque pas
    #[arg(long)]
    ascii: bool,

    /// Lance l'hôte TCP au lieu d'une simulation
    #[arg(long)]
    serve: bool,

    /// Adresse d'écoute de l'hôte
    #[arg(short, long, default_value = ADDRESS)]
    address: String,
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    if args.serve {
        server::serve(&args.address)?;
        return Ok(());
    }

    let labyrinth = match &args.layout {
        Some(name) => Labyrinth::from_layout(name)?,
        None => Labyrinth::random(&mut rand::rng()),
    };
    let mut session = MouseSession::new();
    let mode = SensorMode::from(args.mode);
    let report = simulator::run(&mut session, &labyrinth, mode, args.steps, |step, session| {
        if args.ascii {
            let ascii = visualize_maze_ascii(&session.grid, Some(&session.mouse));
            println!("Step {}:\n{}", step, ascii);
        }
    })?;

    if report.reached_center {
        info!("Found the center in {} steps, path {:?}", report.steps, report.path);
    } else {
        info!(
            "Center not reached after {} steps (cell {:?}, heading {:?})",
            report.steps, report.position, report.heading
        );
    }
    if !report.dead_ends.is_empty() {
        info!("Dead ends: {:?}", report.dead_ends);
    }
    println!("{}", visualize_maze_ascii(&session.grid, Some(&session.mouse)));
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run(Args::parse()) {
        error!("{}", e);
        std::process::exit(1);
    }
}
