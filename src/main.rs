//! Terminal endless runner (default binary).
//!
//! Input comes from crossterm, the simulation runs on a fixed timestep and
//! frames are drawn through the framebuffer renderer in `lane_runner::term`.

use std::fs::File;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use log::info;

use lane_runner::cli::{parse_args, CliArgs};
use lane_runner::core::{GameConfig, GameState, SeededRng};
use lane_runner::engine::{FixedTimestep, GameLoop};
use lane_runner::input::{handle_key_event, is_press, should_quit};
use lane_runner::term::{GameView, TerminalBell, TerminalFrontend};
use lane_runner::types::MAX_STEPS_PER_FRAME;

fn main() -> Result<()> {
    let argv: Vec<String> = std::env::args().skip(1).collect();
    let args = parse_args(&argv)?;

    init_logging(&args)?;

    let config = match &args.config {
        Some(path) => {
            let config = GameConfig::load(path)
                .with_context(|| format!("loading config {}", path.display()))?;
            info!("loaded config from {}", path.display());
            config
        }
        None => GameConfig::default(),
    };

    if args.print_config {
        print!("{}", config.to_toml_string()?);
        return Ok(());
    }

    let rng = match args.seed {
        Some(seed) => SeededRng::new(seed),
        None => SeededRng::from_entropy(),
    };
    info!(
        "starting run: seed {}, {} lanes, tick {}ms",
        rng.seed(),
        config.lane_count(),
        args.tick_ms
    );

    let view = GameView::from_config(&config);
    let state = GameState::with_rng(config, rng);
    let clock = FixedTimestep::from_millis(args.tick_ms, MAX_STEPS_PER_FRAME);
    let mut game = GameLoop::new(state, clock, TerminalBell::default());

    let mut frontend = TerminalFrontend::new(view);
    frontend.renderer_mut().enter()?;

    let result = run(&mut game, &mut frontend);

    // Always try to restore terminal state.
    let _ = frontend.renderer_mut().exit();
    result
}

fn init_logging(args: &CliArgs) -> Result<()> {
    let mut builder = match &args.log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("creating log file {}", path.display()))?;
            let mut builder =
                env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
            builder.target(env_logger::Target::Pipe(Box::new(file)));
            builder
        }
        // Stdout is the game screen; stay quiet unless RUST_LOG asks otherwise.
        None => env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("off")),
    };
    builder.try_init()?;
    Ok(())
}

fn run(game: &mut GameLoop<TerminalBell>, frontend: &mut TerminalFrontend) -> Result<()> {
    let tick = game.clock().step();
    let mut last_frame = Instant::now();

    game.present(frontend)?;

    loop {
        // Input with timeout until next frame.
        let timeout = tick
            .checked_sub(last_frame.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if is_press(&key) => {
                    if should_quit(key) {
                        info!("quit at score {}", game.state().score() as u64);
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        game.apply_action(action);
                    }
                }
                Event::Resize(_, _) => frontend.invalidate(),
                _ => {}
            }
        }

        let now = Instant::now();
        let elapsed = now.duration_since(last_frame);
        if elapsed >= tick {
            last_frame = now;
            game.frame(elapsed, frontend)?;
        }
    }
}
