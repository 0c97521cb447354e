//! Brick Breaker entry point
//!
//! Runs the game headless: the paddle is steered by the autopilot and every
//! frame is drawn into a recording surface.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;
use serde::Serialize;

use brick_breaker::render::{CommandBuffer, Sprite};
use brick_breaker::settings::Settings;
use brick_breaker::sim::{Game, GamePhase, tick};
use brick_breaker::TickInput;

#[derive(Debug, Parser)]
#[command(name = "brick-breaker", version, about = "Headless brick breaker")]
struct Args {
    /// JSON settings file; defaults are used when missing or invalid
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Seed for the block colors
    #[arg(long, default_value_t = 12345)]
    seed: u64,

    /// Stop after this many ticks even if the game is still running
    #[arg(long, default_value_t = 60 * 60 * 5)]
    max_ticks: u64,

    /// Sleep between ticks to hold the configured frame rate
    #[arg(long)]
    realtime: bool,

    /// Print the summary as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct Summary {
    seed: u64,
    phase: Option<GamePhase>,
    ticks: u64,
    score: i64,
    remaining_blocks: i64,
    remaining_balls: i64,
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    log::info!("Brick Breaker (headless) starting...");

    let settings = Settings::load_or_default(args.settings.as_deref());
    let frame = Duration::from_millis(settings.frame_millis());
    let mut game = Game::new(settings, args.seed);
    log::info!("Game initialized with seed: {}", args.seed);

    let mut frame_buffer = CommandBuffer::new();
    while game.time_ticks < args.max_ticks {
        let started = Instant::now();

        let input = TickInput::autopilot(&game);
        let phase = tick(&mut game, &input);

        frame_buffer.clear();
        game.draw_on(&mut frame_buffer);
        log::trace!(
            "Tick {}: {} draw commands",
            game.time_ticks,
            frame_buffer.len()
        );

        if phase.is_over() {
            break;
        }
        if args.realtime {
            if let Some(rest) = frame.checked_sub(started.elapsed()) {
                std::thread::sleep(rest);
            }
        }
    }

    let summary = Summary {
        seed: game.seed,
        phase: game.phase.is_over().then_some(game.phase),
        ticks: game.time_ticks,
        score: game.score(),
        remaining_blocks: game.remaining_blocks(),
        remaining_balls: game.remaining_balls(),
    };
    log::info!("Run finished: {:?}", summary);

    if args.json {
        match serde_json::to_string_pretty(&summary) {
            Ok(json) => println!("{json}"),
            Err(e) => log::error!("Failed to serialize summary: {e}"),
        }
    } else {
        let outcome = match summary.phase {
            Some(GamePhase::Cleared) => "cleared every block",
            Some(GamePhase::BallsLost) => "lost every ball",
            _ => "stopped at the tick limit",
        };
        println!(
            "Seed {}: {} after {} ticks. Score {}, {} blocks and {} balls left.",
            summary.seed,
            outcome,
            summary.ticks,
            summary.score,
            summary.remaining_blocks,
            summary.remaining_balls
        );
    }
}
