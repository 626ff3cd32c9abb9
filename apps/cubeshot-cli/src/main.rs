mod autopilot;
mod frame_loop;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use cubeshot_input::InputState;
use cubeshot_kernel::{GameConfig, World};
use cubeshot_render::{DebugTextRenderer, TextHud, game_over_text};
use serde::Serialize;
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

use crate::autopilot::Autopilot;
use crate::frame_loop::{FinishedGame, FrameLoop};

#[derive(Parser)]
#[command(name = "cubeshot", about = "Headless driver for the cube shooter")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print version and crate info
    Info,
    /// Print the effective configuration as YAML
    Config {
        /// YAML file to load instead of the defaults
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Play on a simulated clock with the autopilot at the controls
    Run {
        /// Maximum number of frames to run
        #[arg(short, long, default_value = "3600")]
        frames: u64,
        /// Simulated frames per second
        #[arg(long, default_value = "60")]
        fps: u32,
        /// RNG seed for spawn positions
        #[arg(short, long, default_value = "42")]
        seed: u64,
        /// YAML config file
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Stop after this many games have ended, restarting in between
        #[arg(short, long, default_value = "1")]
        games: usize,
        /// Print the rendered frame every N frames (0 disables)
        #[arg(long, default_value = "0")]
        render_every: u64,
        /// Print the run summary as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Outcome of a `run` invocation.
#[derive(Debug, Serialize)]
struct RunSummary {
    seed: u64,
    frames_simulated: u64,
    games: Vec<FinishedGame>,
    round: u32,
    score: u32,
    enemy_speed: f32,
    enemies_alive: usize,
}

struct RunOptions {
    frames: u64,
    fps: u32,
    seed: u64,
    config: Option<PathBuf>,
    games: usize,
    render_every: u64,
    json: bool,
}

fn load_config(path: Option<&PathBuf>) -> Result<GameConfig> {
    match path {
        Some(path) => GameConfig::load(path)
            .with_context(|| format!("failed to load config from {}", path.display())),
        None => Ok(GameConfig::default()),
    }
}

fn run(opts: RunOptions) -> Result<()> {
    anyhow::ensure!(opts.fps > 0, "--fps must be greater than zero");
    let config = load_config(opts.config.as_ref())?;
    let input = InputState::with_bindings(config.keys.clone());
    let world = World::with_config(config, opts.seed)?;
    let mut game = FrameLoop::new(world, input, DebugTextRenderer::new(), TextHud::new());
    let pilot = Autopilot::default();
    let mut finished = Vec::new();

    tracing::info!(seed = opts.seed, frames = opts.frames, fps = opts.fps, "starting run");
    for frame in 0..opts.frames {
        let now = Duration::from_secs_f64(frame as f64 / f64::from(opts.fps));
        if !game.is_scheduled() {
            game.restart();
        }
        let snapshot = game.world().clone();
        pilot.drive(&snapshot, game.input_mut());
        if let Some(output) = game.run_frame(now) {
            if opts.render_every > 0 && frame % opts.render_every == 0 && !opts.json {
                println!("{output}");
            }
        }
        for ended in game.take_finished() {
            if !opts.json {
                println!("{}", game_over_text(ended.final_score));
            }
            finished.push(ended);
        }
        if finished.len() >= opts.games {
            break;
        }
    }

    let world = game.world();
    let summary = RunSummary {
        seed: opts.seed,
        frames_simulated: world.frame(),
        games: finished,
        round: world.round(),
        score: world.score(),
        enemy_speed: world.enemy_speed(),
        enemies_alive: world.enemies().len(),
    };
    if opts.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!(
            "Run complete: frames={}, games ended={}, round={}, {}",
            summary.frames_simulated,
            summary.games.len(),
            summary.round,
            game.hud().score_line()
        );
        for g in &summary.games {
            println!(
                "  round {}: score {} (frame {})",
                g.round, g.final_score, g.frame
            );
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Info => {
            println!("cubeshot v{}", env!("CARGO_PKG_VERSION"));
            println!("kernel: {}", cubeshot_kernel::crate_info());
            println!("input: {}", cubeshot_input::crate_info());
            println!("render: {}", cubeshot_render::crate_info());
        }
        Commands::Config { config } => {
            let config = load_config(config.as_ref())?;
            print!("{}", config.to_yaml_string()?);
        }
        Commands::Run {
            frames,
            fps,
            seed,
            config,
            games,
            render_every,
            json,
        } => run(RunOptions {
            frames,
            fps,
            seed,
            config,
            games,
            render_every,
            json,
        })?,
    }

    Ok(())
}
